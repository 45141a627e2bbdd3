use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};

use quote_server::cli::{self, Cli, Command, ServeArgs};
use quote_server::{AppState, ServerConfig, build_router, logging};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_default_logging();
    if let Some(level) = &cli.log_level {
        logging::set_log_level(level)?;
    }
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    match cli.command {
        Command::Serve(args) => serve(args).await,
        Command::Quote(args) => {
            let config = ServerConfig::load(args.config.as_deref())?;
            println!("{}", cli::run_quote(&args, &config.pricing)?);
            Ok(())
        }
        Command::Savings(args) => {
            println!("{}", cli::run_savings(&args)?);
            Ok(())
        }
    }
}

async fn serve(args: ServeArgs) -> Result<()> {
    let mut config = ServerConfig::load(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    let addr = config.socket_addr()?;

    let state = AppState::from_config(config)
        .context("failed to build checkout client")?
        .shared();
    if state.checkout.is_none() {
        warn!("checkout endpoint not configured; POST /checkout will return 503");
    }
    if state.jobs.is_none() {
        warn!("job submitter not configured; POST /jobs will return 503");
    }

    let app = build_router(state);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "quote server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("quote server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
