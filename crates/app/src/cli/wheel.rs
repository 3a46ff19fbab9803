use clap::{Args, Subcommand};

use super::{Backoffice, table};

#[derive(Debug, Args)]
pub(crate) struct WheelCommand {
    #[command(subcommand)]
    command: WheelSubcommand,
}

#[derive(Debug, Subcommand)]
enum WheelSubcommand {
    /// Show the wheel configuration
    Show,
}

pub(crate) async fn run(backoffice: &Backoffice, command: WheelCommand) -> Result<(), String> {
    match command.command {
        WheelSubcommand::Show => show(backoffice).await,
    }
}

async fn show(backoffice: &Backoffice) -> Result<(), String> {
    let wheel = backoffice
        .ctx
        .wheel
        .get_wheel(&backoffice.session)
        .await
        .map_err(|error| format!("failed to load wheel: {error}"))?;

    println!("enabled: {}", wheel.enabled);

    if let Err(error) = wheel.validate() {
        println!("warning: {error}");
    }

    let rows = wheel
        .segments
        .into_iter()
        .map(|segment| {
            [
                segment.label,
                segment.promotion_code.unwrap_or_default(),
                format!("{}%", segment.probability.normalize()),
            ]
        })
        .collect();

    println!("{}", table(["Label", "Promotion code", "Probability"], rows));

    Ok(())
}
