//! End-to-end scenarios: mutate a repository, save, reload in a fresh store.

use std::fs;

use mercado_core::{Customer, Money, Product, Repository};
use mercado_store::{load_customers, load_products, save_customers, save_products, Store, StoreConfig};

#[test]
fn milk_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("products.dat");

    let mut repo = Repository::new();
    repo.add_product(Product::non_perishable(
        "Milk",
        Money::parse("4.50").unwrap(),
        "Acme",
        "2024-01-01",
    ));
    save_products(repo.products(), &path).unwrap();
    drop(repo);

    let loaded = load_products(&path);
    assert_eq!(loaded.len(), 1);
    assert_eq!(
        loaded[0],
        Product::non_perishable("Milk", Money::from_cents(450), "Acme", "2024-01-01")
    );
}

#[test]
fn ana_is_written_as_one_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clients.txt");

    let mut repo = Repository::new();
    repo.add_customer(Customer::new("Ana", "Rua A", "ana@x.com"));
    save_customers(repo.customers(), &path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "Ana,Rua A,ana@x.com\n");
    assert_eq!(load_customers(&path), repo.customers());
}

#[test]
fn comma_in_address_shifts_fields_on_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clients.txt");
    fs::write(&path, "Jo,Rua B, 10,jo@x.com\n").unwrap();

    let loaded = load_customers(&path);

    assert_eq!(loaded, vec![Customer::new("Jo", "Rua B", " 10")]);
}

#[test]
fn removal_then_save_persists_remaining_rows() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::new(StoreConfig::in_dir(dir.path()));

    let mut repo = store.load_repository();
    for name in ["Ana", "Bia", "Cai"] {
        repo.add_customer(Customer::new(name, "Rua", format!("{}@x.com", name.to_lowercase())));
    }
    store.save_customers(&repo).unwrap();

    let removed = repo.remove_customer_at(Some(1)).unwrap();
    assert_eq!(removed.name, "Bia");
    store.save_customers(&repo).unwrap();

    let names: Vec<String> = store
        .load_repository()
        .customers()
        .iter()
        .map(|c| c.name.clone())
        .collect();
    assert_eq!(names, vec!["Ana", "Cai"]);
}

#[test]
fn failed_save_keeps_memory_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gone").join("products.dat");

    let mut repo = Repository::new();
    repo.add_product(Product::perishable("Yogurt", Money::from_cents(320), "Dairy Co", "2024-02-01", 4));

    assert!(save_products(repo.products(), &path).is_err());
    assert_eq!(repo.products().len(), 1);
}
