use anyhow::Context;
use clap::Parser;
use ready_service::ServiceError;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod ui;

/// Exit status for a withdrawal refused for insufficient stock.
const EXIT_INSUFFICIENT_STOCK: i32 = 2;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        let code = exit_code(&error);
        if code != EXIT_INSUFFICIENT_STOCK {
            tracing::error!(error = %format!("{error:#}"), "command failed");
        }
        eprintln!("rdy error: {error:#}");
        std::process::exit(code);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    if let cli::Commands::Schema(args) = &cli.command {
        return commands::schema::handle(args, &flags);
    }

    let config = bootstrap::load_config()?;
    context::warn_unconfigured(&config);

    let ctx = context::AppContext::init(config)
        .await
        .context("failed to initialize readystock backend")?;

    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<ServiceError>() {
        Some(ServiceError::InsufficientStock { .. }) => EXIT_INSUFFICIENT_STOCK,
        _ => 1,
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("READYSTOCK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
