use clap::{Args, Subcommand};

use super::{Backoffice, table};

#[derive(Debug, Args)]
pub(crate) struct CategoriesCommand {
    #[command(subcommand)]
    command: CategoriesSubcommand,
}

#[derive(Debug, Subcommand)]
enum CategoriesSubcommand {
    /// List all categories
    List,
}

pub(crate) async fn run(backoffice: &Backoffice, command: CategoriesCommand) -> Result<(), String> {
    match command.command {
        CategoriesSubcommand::List => list(backoffice).await,
    }
}

async fn list(backoffice: &Backoffice) -> Result<(), String> {
    let categories = backoffice
        .ctx
        .categories
        .list_categories(&backoffice.session)
        .await
        .map_err(|error| format!("failed to list categories: {error}"))?;

    let rows = categories
        .into_iter()
        .map(|category| [category.id.to_string(), category.name])
        .collect();

    println!("{}", table(["ID", "Name"], rows));

    Ok(())
}
