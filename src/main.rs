use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use configuration::ServerOverrides;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// The main entry point for the Textboard application.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; every setting has a default.
    dotenvy::dotenv().ok();

    // The guard flushes buffered log lines on exit, so it lives as long as main.
    let (writer, _guard) = tracing_appender::non_blocking(std::io::stdout());
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(writer))
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    let mut settings = configuration::load_settings().context("Failed to load settings")?;

    // Execute the appropriate command
    match cli.command.unwrap_or(Commands::Serve(ServeArgs::default())) {
        Commands::Serve(args) => {
            settings.apply(&args.overrides);
            web_server::run_server(&settings, shutdown_signal()).await?;
        }
        Commands::InitDb => {
            database::ensure_schema(&settings.database)
                .await
                .context("Failed to create the texts table")?;
        }
    }

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A small web application for keeping short text notes in PostgreSQL.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the texts table if needed, then serve HTTP (the default).
    Serve(ServeArgs),
    /// Create the texts table if needed and exit.
    InitDb,
}

#[derive(Args, Default)]
struct ServeArgs {
    #[command(flatten)]
    overrides: ServerOverrides,
}

/// Resolves on Ctrl-C so the server can drain in-flight requests.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for the shutdown signal.");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received.");
}
