//! Todo Service - runs the interface comparison demo.

use clap::{Parser, Subcommand, ValueEnum};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::Context;
use todo_service_lib::config::{log_level_from_env, TodoServiceConfig};
use todo_service_lib::container::ContractShape;
use todo_service_lib::demo;

#[derive(Parser)]
#[command(name = "todo-service")]
#[command(about = "Big interface vs small interfaces over one in-memory store")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the demonstration sequence
    Demo {
        /// Contract shape to wire the services with
        #[arg(long, value_enum, default_value = "both")]
        contract: ContractArg,
        /// Print reports as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ContractArg {
    Unified,
    Segmented,
    Both,
}

impl ContractArg {
    fn shapes(self) -> Vec<ContractShape> {
        match self {
            ContractArg::Unified => vec![ContractShape::Unified],
            ContractArg::Segmented => vec![ContractShape::Segmented],
            ContractArg::Both => vec![ContractShape::Unified, ContractShape::Segmented],
        }
    }
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    // Load configuration
    let config = TodoServiceConfig::from_env();
    tracing::debug!(?config, "Configuration loaded");

    // Ctrl-C cancels the run between steps
    let token = CancellationToken::new();
    let signal_token = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_token.cancel();
        }
    });
    let ctx = Context::with_cancellation(token).with_timeout(config.operation_timeout);

    let result = match cli.command {
        Commands::Demo { contract, json } => {
            match todo_service_lib::run_demo(&config, &contract.shapes(), ctx).await {
                Ok(reports) if json => serde_json::to_string_pretty(&reports)
                    .map(|out| println!("{}", out))
                    .map_err(|e| common::AppError::internal(e.to_string())),
                Ok(reports) => {
                    for report in &reports {
                        println!("{}", demo::render(report));
                    }
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }
    };

    if let Err(e) = result {
        tracing::error!(code = e.code(), "Command failed: {}", e.user_message());
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| log_level_from_env())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
