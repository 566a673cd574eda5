// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Walk history viewer
//!
//! Loads the configured user's walk history and prints it as cards.
//! Pass a card index to select that walk and print its details.

use chrono::Utc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use walk_history::{build_screen, config::Config, view::render};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let selection = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<usize>())
        .transpose()
        .map_err(|e| format!("Card index must be a number: {}", e))?;

    let config = Config::from_env()?;
    tracing::info!(
        base_url = %config.api_base_url,
        limit = config.history_limit,
        "Starting walk history"
    );

    let (selected_tx, selected_rx) = tokio::sync::oneshot::channel();
    let (mut screen, mut updates) = build_screen(&config, move |log| {
        selected_tx.send(log).ok();
    });

    screen.open();

    // Render loop: the only place state is turned into output
    let now = Utc::now();
    while let Some(state) = updates.recv().await {
        print!("{}", render(&state, now));
        if !state.loading {
            break;
        }
    }

    match selection {
        Some(index) if screen.select(index) => {
            let log = selected_rx.await?;
            println!("{}", serde_json::to_string_pretty(&log)?);
        }
        Some(index) => {
            eprintln!("No walk at index {}", index);
            screen.dismiss();
        }
        None => screen.dismiss(),
    }

    Ok(())
}

/// Initialize structured JSON logging on stderr.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn,walk_history=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .init();
}
