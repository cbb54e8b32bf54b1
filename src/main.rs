use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use expense_ledger::{
    config::{self, DEFAULT_CONFIG_PATH},
    errors::Result,
    store::HttpItemStore,
    view::LedgerView,
};
use std::{path::PathBuf, process::ExitCode};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Shared expense ledger for two payees
#[derive(Debug, Parser)]
#[command(name = "expense-ledger", version, about)]
struct Cli {
    /// Path to the configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch all items and print the ledger
    Show,
    /// Add an expense, then print the updated ledger
    Add {
        /// Who paid
        #[arg(long)]
        payee: String,
        /// Amount in whole rupees; unparseable input is recorded as 0
        #[arg(long)]
        price: String,
        /// What the money was spent on
        #[arg(long)]
        product: String,
        /// Date of the expense (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, non-fatal since env vars can be set externally
    dotenv().ok();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    // 3. Load configuration and build the participant set
    let app_config = config::load_app_configuration(&cli.config)?;
    let participants = app_config.ledger.participants()?;

    // 4. Connect the view to the item store and load the ledger
    let store = HttpItemStore::new(&app_config.store)?;
    let mut view = LedgerView::new(store, participants);
    view.load().await?;

    // 5. Run the requested command
    if let Some(Command::Add {
        payee,
        price,
        product,
        date,
    }) = cli.command
    {
        view.open_modal();
        let item = view.submit_form(&payee, &price, &product, date).await?;
        info!("Stored item {}", item.id);
    }

    print!("{}", view.report().render());
    Ok(())
}
