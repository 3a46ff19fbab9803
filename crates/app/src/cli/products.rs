use backoffice::promotions::display::format_money;
use clap::{Args, Subcommand};

use super::{Backoffice, table};

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    /// List all products
    List,
}

pub(crate) async fn run(backoffice: &Backoffice, command: ProductsCommand) -> Result<(), String> {
    match command.command {
        ProductsSubcommand::List => list(backoffice).await,
    }
}

async fn list(backoffice: &Backoffice) -> Result<(), String> {
    let products = backoffice
        .ctx
        .products
        .list_products(&backoffice.session)
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    let rows = products
        .into_iter()
        .map(|product| {
            [
                product.id.to_string(),
                product.name,
                format_money(product.price, backoffice.currency),
                product
                    .category_id
                    .map(|id| id.to_string())
                    .unwrap_or_default(),
            ]
        })
        .collect();

    println!("{}", table(["ID", "Name", "Price", "Category"], rows));

    Ok(())
}
