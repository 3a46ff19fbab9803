use backoffice_app::{
    config::{ApiConfig, CredentialsConfig, LoggingConfig},
    context::AppContext,
    observability,
    session::Session,
};
use clap::{Parser, Subcommand};
use rusty_money::iso::Currency;
use tabled::{Table, builder::Builder, settings::Style};

mod analytics;
mod categories;
mod login;
mod products;
mod promotions;
mod reels;
mod wheel;

#[derive(Debug, Parser)]
#[command(name = "backoffice-app", about = "Back-office CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    api: ApiConfig,

    #[command(flatten)]
    credentials: CredentialsConfig,

    #[command(flatten)]
    logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check the configured credentials
    Login,
    Categories(categories::CategoriesCommand),
    Products(products::ProductsCommand),
    Promotions(promotions::PromotionsCommand),
    Wheel(wheel::WheelCommand),
    Reels(reels::ReelsCommand),
    Analytics(analytics::AnalyticsCommand),
}

/// Signed-in state shared by every subcommand.
pub(crate) struct Backoffice {
    pub(crate) ctx: AppContext,
    pub(crate) session: Session,
    pub(crate) currency: &'static Currency,
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        observability::init_logging(&self.logging)
            .map_err(|error| format!("failed to initialise logging: {error}"))?;

        let base_url = self.api.base_url().map_err(|error| error.to_string())?;
        let currency = self.api.currency().map_err(|error| error.to_string())?;

        let ctx = AppContext::from_api_url(base_url);

        let session = ctx
            .session
            .login(self.credentials.into())
            .await
            .map_err(|error| format!("failed to sign in: {error}"))?;

        let backoffice = Backoffice {
            ctx,
            session,
            currency,
        };

        let result = match self.command {
            Commands::Login => login::run(&backoffice),
            Commands::Categories(command) => categories::run(&backoffice, command).await,
            Commands::Products(command) => products::run(&backoffice, command).await,
            Commands::Promotions(command) => promotions::run(&backoffice, command).await,
            Commands::Wheel(command) => wheel::run(&backoffice, command).await,
            Commands::Reels(command) => reels::run(&backoffice, command).await,
            Commands::Analytics(command) => analytics::run(&backoffice, command).await,
        };

        let Backoffice { ctx, session, .. } = backoffice;

        let logout = ctx
            .session
            .logout(session)
            .await
            .map_err(|error| format!("failed to sign out: {error}"));

        result.and(logout)
    }
}

/// Render rows under `header` with the shared table style.
pub(crate) fn table<const N: usize>(header: [&str; N], rows: Vec<[String; N]>) -> Table {
    let mut builder = Builder::default();

    builder.push_record(header);

    for row in rows {
        builder.push_record(row);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());

    table
}
