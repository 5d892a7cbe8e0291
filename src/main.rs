/// Main entry point for the market clock
use std::io::BufRead;
use std::path::Path;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use market_clock::{
    config::{load_config, DEFAULT_CONFIG_PATH},
    error::Result,
    presenter::{ControlMessage, DisplaySurface, JsonSurface, Presenter, TerminalSurface},
    time::SystemClock,
    Config, OutputMode,
};

/// Resolve configuration: CONFIG_PATH, then the default file, then built-in defaults
fn resolve_config() -> Result<Config> {
    match std::env::var("CONFIG_PATH") {
        Ok(path) => load_config(path),
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => load_config(DEFAULT_CONFIG_PATH),
        Err(_) => Ok(Config::default()),
    }
}

/// Forward control messages from stdin, one JSON object per line
fn spawn_stdin_listener(controls: mpsc::Sender<ControlMessage>) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line.trim().is_empty() {
                continue;
            }
            match ControlMessage::parse(&line) {
                Ok(message) => {
                    if controls.blocking_send(message).is_err() {
                        break;
                    }
                }
                Err(e) => warn!("Ignoring control message: {} ({})", e, e.error_code()),
            }
        }
    });
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut config = resolve_config()?;

    let mut unknown_args = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--compact" => config.compact = true,
            "--json" => config.output = OutputMode::Json,
            _ => unknown_args.push(arg),
        }
    }

    // Logs go to stderr; stdout is the display surface
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new(format!("market_clock={},warn", config.log_level))
            }),
        )
        .with_writer(std::io::stderr)
        .init();

    for arg in &unknown_args {
        warn!("Unknown argument: {}", arg);
    }

    info!(
        "Starting market clock (display: {}, secondary: {} {})",
        config.display_timezone, config.secondary_label, config.secondary_timezone
    );

    let surface: Box<dyn DisplaySurface> = match config.output {
        OutputMode::Terminal => Box::new(TerminalSurface::stdout()),
        OutputMode::Json => Box::new(JsonSurface::stdout()),
    };

    let handle = Presenter::new(config, SystemClock, surface).spawn();
    spawn_stdin_listener(handle.controls());

    tokio::select! {
        signal = tokio::signal::ctrl_c() => {
            signal?;
            info!("Ctrl+C received - stopping presenter");
        }
        _ = handle.stopped() => {
            warn!("Presenter exited on its own");
        }
    }

    handle.cancel().await?;
    info!("Market clock stopped");
    Ok(())
}
