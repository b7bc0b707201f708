//! Terminal client entry point.
//!
//! Stands up file logging, seeds a session, and hands the terminal to the
//! app loop. Set `WARREN_SEED` to replay a specific cave.
mod app;
mod input;
mod presentation;
mod state;

use anyhow::Result;
use app::App;

fn main() -> Result<()> {
    // Logs go to a file; stdout belongs to the TUI.
    let file = tracing_appender::rolling::never(".", "warren.log");
    let (writer, _guard) = tracing_appender::non_blocking(file);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    let seed = std::env::var("WARREN_SEED")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_else(rand::random);
    tracing::info!(seed, "session starting");

    let app = App::new(seed)?;

    let mut terminal = presentation::terminal::init()?;
    let _restore = presentation::terminal::TerminalGuard;
    let result = app.run(&mut terminal);

    presentation::terminal::restore()?;
    tracing::info!("session over");
    result
}
