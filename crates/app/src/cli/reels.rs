use clap::{Args, Subcommand};

use super::{Backoffice, table};

#[derive(Debug, Args)]
pub(crate) struct ReelsCommand {
    #[command(subcommand)]
    command: ReelsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ReelsSubcommand {
    /// List all reels
    List,
}

pub(crate) async fn run(backoffice: &Backoffice, command: ReelsCommand) -> Result<(), String> {
    match command.command {
        ReelsSubcommand::List => list(backoffice).await,
    }
}

async fn list(backoffice: &Backoffice) -> Result<(), String> {
    let reels = backoffice
        .ctx
        .reels
        .list_reels(&backoffice.session)
        .await
        .map_err(|error| format!("failed to list reels: {error}"))?;

    let rows = reels
        .into_iter()
        .map(|reel| {
            [
                reel.id.to_string(),
                reel.title,
                reel.video_url,
                reel.product_id.map(|id| id.to_string()).unwrap_or_default(),
                reel.published.to_string(),
            ]
        })
        .collect();

    println!(
        "{}",
        table(["ID", "Title", "Video", "Product", "Published"], rows)
    );

    Ok(())
}
