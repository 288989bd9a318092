//! Terminal client entry point.
mod app;
mod config;
mod event;
mod presentation;
mod state;

use anyhow::Result;
use clap::Parser;

use app::App;
use config::CliArgs;

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    // The TUI owns the terminal, so logs go to a file.
    let file_appender = tracing_appender::rolling::never(".", "schulte.log");
    let (writer, _log_guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    App::new(args).run().await
}
