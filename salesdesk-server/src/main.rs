//! # SalesDesk Server
//!
//! Backend for the SalesDesk web client.
//!
//! ## Overview
//!
//! - **Customers, products and orders**: CRUD over a SQLite database
//! - **Reports**: sales summary, pending orders and most active customers
//! - **String analysis**: finds the first unique vowel that follows a
//!   vowel-consonant pair
//!
//! Configuration is read from `.env`, an optional `salesdesk.toml`, the
//! environment and finally the command line.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand};
use salesdesk_core::{SqliteDatabase, database::SeedOutcome};
use salesdesk_server::{
    AppState, create_app,
    infra::{
        config::{CliOverrides, Config, ConfigLoad, ConfigLoader},
        startup::{ProdStartupHooks, StartupHooks},
        telemetry::init_tracing,
    },
};
use tracing::{info, warn};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "salesdesk-server")]
#[command(about = "HTTP backend for customers, products, orders and sales reports")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(ClapArgs, Debug, Clone)]
struct ServeArgs {
    /// Path to a salesdesk.toml file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Server host (overrides config)
    #[arg(long, global = true)]
    host: Option<String>,

    /// Server port (overrides config)
    #[arg(short, long, global = true)]
    port: Option<u16>,

    /// SQLite database URL (overrides config)
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Skip inserting the sample customers, products and orders
    #[arg(long, global = true, default_value_t = false)]
    no_seed: bool,
}

impl ServeArgs {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            host: self.host.clone(),
            port: self.port,
            database_url: self.database_url.clone(),
            no_seed: self.no_seed,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(subcommand)]
    Db(DbCommand),
}

#[derive(Debug, Subcommand)]
enum DbCommand {
    /// Apply database migrations and exit
    Migrate,
    /// Insert the sample data into an empty database and exit
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = load_runtime_config(&cli.serve)?;

    if let Some(command) = cli.command {
        match command {
            Command::Db(DbCommand::Migrate) => {
                run_db_migrate(&config).await?;
                return Ok(());
            }
            Command::Db(DbCommand::Seed) => {
                run_db_seed(&config).await?;
                return Ok(());
            }
        }
    }

    run_server_with_hooks(config, &ProdStartupHooks).await
}

fn load_runtime_config(args: &ServeArgs) -> anyhow::Result<Arc<Config>> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &args.config {
        loader = loader.with_config_path(path);
    }

    let ConfigLoad {
        mut config,
        warnings,
    } = loader.load().context("failed to load configuration")?;

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = &config.metadata.config_path {
        info!(path = %path.display(), "configuration file loaded");
    }

    for warning in &warnings.items {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => warn!(message = %warning.message, "configuration warning"),
        }
    }

    args.overrides().apply(&mut config);

    Ok(Arc::new(config))
}

async fn open_database(config: &Config) -> anyhow::Result<SqliteDatabase> {
    let database = SqliteDatabase::connect(
        &config.database.url,
        config.database.max_connections,
    )
    .await
    .with_context(|| {
        format!("failed to open database at {}", config.database.url)
    })?;

    database
        .initialize_schema()
        .await
        .context("failed to apply database migrations")?;

    Ok(database)
}

async fn run_db_migrate(config: &Config) -> anyhow::Result<()> {
    let database = open_database(config).await?;
    info!(url = %config.database.url, "Database migrations applied");
    database.close().await;
    Ok(())
}

async fn run_db_seed(config: &Config) -> anyhow::Result<()> {
    let database = open_database(config).await?;
    let outcome = database
        .seed_sample_data()
        .await
        .context("failed to insert sample data")?;

    match outcome {
        SeedOutcome::Seeded {
            customers,
            products,
            orders,
        } => info!(customers, products, orders, "Sample data inserted"),
        SeedOutcome::Skipped => {
            info!("Database already has customers; sample data skipped")
        }
    }

    database.close().await;
    Ok(())
}

async fn run_server_with_hooks<H>(
    config: Arc<Config>,
    hooks: &H,
) -> anyhow::Result<()>
where
    H: StartupHooks,
{
    let database = open_database(&config).await?;
    let state = AppState::new(Arc::clone(&config), database);

    hooks
        .run(&state)
        .await
        .context("startup hooks failed")?;

    let database = Arc::clone(&state.database);
    let router = create_app(state);

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(
        "Starting SalesDesk server on {}:{}",
        config.server.host, config.server.port
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down, closing database pool");
    database.close().await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
    }
}
