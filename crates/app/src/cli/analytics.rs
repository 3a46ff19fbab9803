use backoffice::{analytics::SalesSummary, promotions::display::format_money};
use clap::{Args, Subcommand};
use jiff::civil::Date;

use super::{Backoffice, table};

#[derive(Debug, Args)]
pub(crate) struct AnalyticsCommand {
    #[command(subcommand)]
    command: AnalyticsSubcommand,
}

#[derive(Debug, Subcommand)]
enum AnalyticsSubcommand {
    /// Daily sales and headline figures for a date range
    Sales(SalesArgs),
}

#[derive(Debug, Args)]
struct SalesArgs {
    /// First day of the report (YYYY-MM-DD)
    #[arg(long)]
    from: Date,

    /// Last day of the report (YYYY-MM-DD)
    #[arg(long)]
    to: Date,
}

pub(crate) async fn run(backoffice: &Backoffice, command: AnalyticsCommand) -> Result<(), String> {
    match command.command {
        AnalyticsSubcommand::Sales(args) => sales(backoffice, args).await,
    }
}

async fn sales(backoffice: &Backoffice, args: SalesArgs) -> Result<(), String> {
    let points = backoffice
        .ctx
        .analytics
        .sales_report(&backoffice.session, args.from, args.to)
        .await
        .map_err(|error| format!("failed to load sales report: {error}"))?;

    let summary = SalesSummary::from_points(&points);
    let currency = backoffice.currency;

    println!("total_revenue: {}", format_money(summary.total_revenue, currency));
    println!("total_orders: {}", summary.total_orders);
    if let Some(average) = summary.average_order_value {
        println!("average_order_value: {}", format_money(average, currency));
    }
    if let Some(best) = &summary.best_day {
        println!(
            "best_day: {} ({})",
            best.date,
            format_money(best.revenue, currency)
        );
    }

    let rows = points
        .into_iter()
        .map(|point| {
            [
                point.date.to_string(),
                point.orders.to_string(),
                format_money(point.revenue, currency),
            ]
        })
        .collect();

    println!("{}", table(["Date", "Orders", "Revenue"], rows));

    Ok(())
}
