//! Library Desk - interactive library catalog manager

use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use library_desk::{
    config::{AppConfig, LoggingConfig},
    menu::{Menu, MenuExit},
    LibraryManager, LoadOutcome,
};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    init_tracing(&config.logging);

    tracing::info!("Starting Library Desk v{}", env!("CARGO_PKG_VERSION"));

    let files = config.data.files();
    let mut manager = LibraryManager::default();
    if let LoadOutcome::Reset { reason } = manager.load(&files) {
        tracing::warn!(error = %reason, "Data files ignored");
    }

    let stdin = io::stdin();
    let exit = Menu::new(&mut manager, &files, stdin.lock(), io::stdout()).run()?;

    match exit {
        MenuExit::Saved => tracing::info!("Session saved"),
        MenuExit::Discarded => tracing::info!("Session discarded"),
        MenuExit::SaveFailed(e) => return Err(e.into()),
    }

    Ok(())
}

/// Logs go to stderr so the menu owns stdout
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("library_desk={}", logging.level).into());

    let fmt_layer = if logging.format == "json" {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
