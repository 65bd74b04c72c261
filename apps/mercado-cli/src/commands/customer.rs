//! # Customer Commands
//!
//! Customer fields are free text. A comma typed into any field is written
//! as-is and splits that row differently on the next load, so `add` warns
//! about it instead of refusing.

use mercado_core::{Customer, Repository};
use mercado_store::Store;
use tracing::{info, warn};

use crate::cli::{selection, CustomerArgs, CustomerCommand};
use crate::error::{CliError, CliResult};

pub fn run(cmd: CustomerCommand, repo: &mut Repository, store: &Store) -> CliResult<String> {
    match cmd {
        CustomerCommand::Add(args) => add(&args, repo, store),
        CustomerCommand::Remove { index } => remove(selection(index), repo, store),
        CustomerCommand::List => Ok(list(repo)),
        CustomerCommand::Show { index } => show(selection(index), repo),
    }
}

/// Appends a customer and saves the customer list.
pub fn add(args: &CustomerArgs, repo: &mut Repository, store: &Store) -> CliResult<String> {
    let customer = Customer::new(&args.name, &args.address, &args.email);

    if [&customer.name, &customer.address, &customer.email]
        .iter()
        .any(|field| field.contains(',') || field.contains('\n'))
    {
        warn!(name = %customer.name, "Customer field contains a comma or line break; it will not reload as typed");
    }

    let message = format!("Added customer {}.", customer.name);
    repo.add_customer(customer);
    store.save_customers(repo)?;

    info!(count = repo.customers().len(), "Customer added");
    Ok(message)
}

pub fn remove(index: Option<usize>, repo: &mut Repository, store: &Store) -> CliResult<String> {
    let removed = repo
        .remove_customer_at(index)
        .map_err(|e| CliError::from_core(e, "remove"))?;
    store.save_customers(repo)?;

    info!(name = %removed.name, remaining = repo.customers().len(), "Customer removed");
    Ok(format!("Removed customer {}.", removed.name))
}

pub fn list(repo: &Repository) -> String {
    if repo.customers().is_empty() {
        return "No customers.".to_string();
    }

    repo.customers()
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{:>3}  {}  {}", i, c.name, c.email))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn show(index: Option<usize>, repo: &Repository) -> CliResult<String> {
    repo.customer_at(index)
        .map(Customer::describe)
        .map_err(|e| CliError::from_core(e, "show"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use mercado_store::StoreConfig;
    use std::fs;

    fn fixture() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(StoreConfig::in_dir(dir.path()));
        (dir, store)
    }

    fn ana() -> CustomerArgs {
        CustomerArgs {
            name: "Ana".to_string(),
            address: "Rua A".to_string(),
            email: "ana@x.com".to_string(),
        }
    }

    #[test]
    fn test_add_writes_one_line() {
        let (_dir, store) = fixture();
        let mut repo = Repository::new();

        let out = add(&ana(), &mut repo, &store).unwrap();

        assert_eq!(out, "Added customer Ana.");
        assert_eq!(
            fs::read_to_string(&store.config().customers_path).unwrap(),
            "Ana,Rua A,ana@x.com\n"
        );
    }

    #[test]
    fn test_comma_in_field_is_saved_as_typed() {
        let (_dir, store) = fixture();
        let mut repo = Repository::new();
        let args = CustomerArgs {
            address: "Rua B, 10".to_string(),
            ..ana()
        };

        add(&args, &mut repo, &store).unwrap();

        assert_eq!(repo.customers()[0].address, "Rua B, 10");
        assert_eq!(
            fs::read_to_string(&store.config().customers_path).unwrap(),
            "Ana,Rua B, 10,ana@x.com\n"
        );
    }

    #[test]
    fn test_remove_without_selection() {
        let (_dir, store) = fixture();
        let mut repo = Repository::new();

        let err = remove(None, &mut repo, &store).unwrap_err();

        assert_eq!(err.message, "Select a customer to remove.");
        assert_eq!(err.code.exit_code(), 2);
    }

    #[test]
    fn test_remove_past_end_keeps_list() {
        let (_dir, store) = fixture();
        let mut repo = Repository::new();
        add(&ana(), &mut repo, &store).unwrap();

        let err = remove(Some(1), &mut repo, &store).unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(repo.customers().len(), 1);
    }

    #[test]
    fn test_list_and_show() {
        let (_dir, store) = fixture();
        let mut repo = Repository::new();
        assert_eq!(list(&repo), "No customers.");

        add(&ana(), &mut repo, &store).unwrap();

        assert_eq!(list(&repo), "  0  Ana  ana@x.com");
        assert_eq!(
            show(Some(0), &repo).unwrap(),
            "Name: Ana\nAddress: Rua A\nEmail: ana@x.com"
        );
        assert_eq!(
            show(None, &repo).unwrap_err().message,
            "Select a customer to show."
        );
    }
}
