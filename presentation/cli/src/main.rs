use clap::Parser;
use dotenvy::dotenv;

mod cli;
mod commands;
mod config;
mod setup;
mod view;

use cli::{Cli, Command};
use config::app_config::AppConfig;
use setup::dependency_injection::DependencyContainer;

/// Storefront CLI entry point.
///
/// Initializes logging, loads configuration, wires dependencies, and runs a
/// single command to completion. The cart lives in a local file between
/// invocations; everything else is delegated to the hosted backend.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config);

    // 5. Run the requested command
    let cli = Cli::parse();
    match cli.command {
        Command::Browse { category } => commands::browse::run(&container, category).await,
        Command::Cart { command } => commands::cart::run(&container, command).await,
        Command::Checkout {
            email,
            address,
            payment,
        } => commands::checkout::run(&container, email, address, payment).await,
        Command::SignIn { email, password } => {
            commands::auth::sign_in(&container, email, password).await;
        }
        Command::SignUp { email, password } => {
            commands::auth::sign_up(&container, email, password).await;
        }
        Command::ResetPassword { email } => {
            commands::auth::reset_password(&container, email).await;
        }
    }

    Ok(())
}
