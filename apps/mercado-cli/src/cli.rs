//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Manage the supermarket's product and customer records.
#[derive(Debug, Parser)]
#[command(name = "mercado", version, about)]
pub struct Cli {
    /// Directory holding products.dat and clients.txt
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Config file (defaults to config.toml in the platform config dir)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Product records
    #[command(subcommand)]
    Product(ProductCommand),

    /// Customer records
    #[command(subcommand)]
    Customer(CustomerCommand),

    /// Write both lists back to disk
    Save,
}

#[derive(Debug, Subcommand)]
pub enum ProductCommand {
    /// Register a product; `--temperature` makes it perishable
    Add(ProductArgs),

    /// Remove the product at a row
    Remove {
        /// Zero-based row, as shown by `product list`; negative selects nothing
        #[arg(allow_negative_numbers = true)]
        index: Option<i64>,
    },

    /// List products with their rows
    List,

    /// Show every field of one product
    Show {
        #[arg(allow_negative_numbers = true)]
        index: Option<i64>,
    },
}

#[derive(Debug, Clone, Args)]
pub struct ProductArgs {
    #[arg(long)]
    pub name: String,

    /// Price such as 4.50 or 4,50
    #[arg(long)]
    pub price: String,

    #[arg(long, default_value = "")]
    pub brand: String,

    /// Expiration date, kept as typed
    #[arg(long = "expires", default_value = "")]
    pub expiration_date: String,

    /// Storage temperature in °C
    #[arg(long, allow_hyphen_values = true)]
    pub temperature: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CustomerCommand {
    /// Register a customer
    Add(CustomerArgs),

    /// Remove the customer at a row
    Remove {
        /// Zero-based row, as shown by `customer list`; negative selects nothing
        #[arg(allow_negative_numbers = true)]
        index: Option<i64>,
    },

    /// List customers with their rows
    List,

    /// Show every field of one customer
    Show {
        #[arg(allow_negative_numbers = true)]
        index: Option<i64>,
    },
}

#[derive(Debug, Clone, Args)]
pub struct CustomerArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long, default_value = "")]
    pub address: String,

    #[arg(long, default_value = "")]
    pub email: String,
}

/// Turns a typed row into a repository selection.
///
/// A missing or negative row means nothing is selected, like a table with
/// no highlighted line.
pub fn selection(index: Option<i64>) -> Option<usize> {
    index.and_then(|i| usize::try_from(i).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_perishable_add() {
        let cli = Cli::try_parse_from([
            "mercado",
            "product",
            "add",
            "--name",
            "Ice Cream",
            "--price",
            "7,90",
            "--temperature",
            "-18",
        ])
        .unwrap();

        match cli.command {
            Command::Product(ProductCommand::Add(args)) => {
                assert_eq!(args.name, "Ice Cream");
                assert_eq!(args.temperature.as_deref(), Some("-18"));
                assert_eq!(args.brand, "");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_remove_without_index_parses() {
        let cli = Cli::try_parse_from(["mercado", "customer", "remove"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Customer(CustomerCommand::Remove { index: None })
        ));
    }

    #[test]
    fn test_negative_index_parses_and_selects_nothing() {
        let cli = Cli::try_parse_from(["mercado", "product", "remove", "-1"]).unwrap();
        match cli.command {
            Command::Product(ProductCommand::Remove { index }) => {
                assert_eq!(index, Some(-1));
                assert_eq!(selection(index), None);
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let cli = Cli::try_parse_from(["mercado", "customer", "show", "-3"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Customer(CustomerCommand::Show { index: Some(-3) })
        ));
    }

    #[test]
    fn test_selection() {
        assert_eq!(selection(None), None);
        assert_eq!(selection(Some(-1)), None);
        assert_eq!(selection(Some(0)), Some(0));
        assert_eq!(selection(Some(7)), Some(7));
    }

    #[test]
    fn test_global_data_dir_after_subcommand() {
        let cli = Cli::try_parse_from(["mercado", "product", "list", "--data-dir", "/tmp/m"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/m")));
    }
}
