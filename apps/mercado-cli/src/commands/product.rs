//! # Product Commands
//!
//! ```text
//! product add --name Milk --price 4.50 --brand Acme --expires 2024-01-01
//!       │
//!       ▼
//! Product::new_checked ──► ValidationError? ──► exit 3
//!       │
//!       ▼
//! repo.add_product ──► store.save_products ──► products.dat
//! ```

use mercado_core::{Product, ProductInput, Repository};
use mercado_store::Store;
use tracing::{debug, info};

use crate::cli::{selection, ProductArgs, ProductCommand};
use crate::error::{CliError, CliResult};

pub fn run(cmd: ProductCommand, repo: &mut Repository, store: &Store) -> CliResult<String> {
    match cmd {
        ProductCommand::Add(args) => add(&args, repo, store),
        ProductCommand::Remove { index } => remove(selection(index), repo, store),
        ProductCommand::List => Ok(list(repo)),
        ProductCommand::Show { index } => show(selection(index), repo),
    }
}

/// Builds a product from typed text, appends it, and saves the product list.
pub fn add(args: &ProductArgs, repo: &mut Repository, store: &Store) -> CliResult<String> {
    let product = Product::new_checked(ProductInput {
        name: &args.name,
        price: &args.price,
        brand: &args.brand,
        expiration_date: &args.expiration_date,
        storage_temperature: args.temperature.as_deref(),
    })
    .map_err(|e| CliError::validation(e.to_string()))?;

    debug!(name = %product.name(), kind = product.kind().label(), "Adding product");

    let message = format!(
        "Added {} {} ({}).",
        product.kind().label().to_lowercase(),
        product.name(),
        product.price()
    );
    repo.add_product(product);
    store.save_products(repo)?;

    info!(count = repo.products().len(), "Product added");
    Ok(message)
}

pub fn remove(index: Option<usize>, repo: &mut Repository, store: &Store) -> CliResult<String> {
    let removed = repo
        .remove_product_at(index)
        .map_err(|e| CliError::from_core(e, "remove"))?;
    store.save_products(repo)?;

    info!(name = %removed.name(), remaining = repo.products().len(), "Product removed");
    Ok(format!("Removed product {}.", removed.name()))
}

/// One row per product: index, name, price, kind.
pub fn list(repo: &Repository) -> String {
    if repo.products().is_empty() {
        return "No products.".to_string();
    }

    repo.products()
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{:>3}  {}  {}  {}", i, p.name(), p.price(), p.kind().label()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn show(index: Option<usize>, repo: &Repository) -> CliResult<String> {
    repo.product_at(index)
        .map(Product::describe)
        .map_err(|e| CliError::from_core(e, "show"))
}
