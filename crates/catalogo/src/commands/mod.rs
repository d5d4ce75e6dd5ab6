//! Command dispatch: bridges CLI args -> catalog operations -> output formatting.

pub mod config_cmd;
pub mod resource;
pub mod util;

use catalogo_core::Catalog;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a backend-bound command to the matching slice.
pub async fn dispatch(cmd: Command, catalog: &Catalog, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Products(args) => resource::handle(catalog, catalog.products(), args, global).await,
        Command::Categories(args) => {
            resource::handle(catalog, catalog.categories(), args, global).await
        }
        Command::Customers(args) => {
            resource::handle(catalog, catalog.customers(), args, global).await
        }
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
