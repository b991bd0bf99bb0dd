use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use partybot::{commands, config::GameConfig, protocol::HostEvent, protocol::Reply, state::AppState};

/// Write one JSON value per line to stdout
fn emit<T: serde::Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(line) => println!("{}", line),
        Err(e) => tracing::error!("Failed to serialize output: {}", e),
    }
}

#[tokio::main]
async fn main() {
    // Game settings may come from a local .env; a missing file is fine
    if let Err(e) = dotenvy::dotenv() {
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: ignoring malformed .env: {}", e);
        }
    }

    // Logs go to stderr, stdout carries replies
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "partybot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if std::env::args().any(|arg| arg == "--register-commands") {
        tracing::info!("Printing command manifest");
        emit(&commands::command_manifest());
        return;
    }

    tracing::info!("Starting partybot...");

    let config = GameConfig::from_env();
    let state = match AppState::from_config(&config).await {
        Ok(state) => Arc::new(state),
        Err(e) => {
            tracing::error!("Failed to start games: {}", e);
            std::process::exit(1);
        }
    };

    // Forward countdown updates as they happen
    let mut events = state.subscribe();
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => emit(&event),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("Dropped {} countdown updates", skipped);
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    tracing::info!("Reading host events from stdin");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::error!("Failed to read stdin: {}", e);
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let reply = match serde_json::from_str::<HostEvent>(&line) {
            Ok(event) => commands::handle_event(event, &state).await,
            Err(e) => Reply::Error {
                code: "BAD_EVENT".to_string(),
                msg: e.to_string(),
            },
        };
        emit(&reply);
    }

    tracing::info!("Input closed, shutting down");
}
