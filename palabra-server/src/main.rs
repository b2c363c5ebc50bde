use std::sync::Arc;
use tokio::signal;
use tracing::info;

use palabra_server::{config::Config, create_routes, store::WordStore};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Palabra word server...");

    let config = Config::new();

    let store = match &config.words_file {
        Some(path) => {
            info!("Loading words from file: {}", path);
            match WordStore::from_json_file(path) {
                Ok(store) => store,
                Err(e) => {
                    tracing::error!("Failed to load word file '{}': {:#}", path, e);
                    tracing::error!(
                        "Set WORDS_FILE to a JSON array of word entries, or unset it to use the built-in list."
                    );
                    std::process::exit(1);
                }
            }
        }
        None => WordStore::with_default_words(),
    };
    info!("Serving {} words", store.len());

    let routes = create_routes(Arc::new(store));

    info!("Server starting on {}:{}", config.host, config.port);

    let addr = (
        config.host.parse::<std::net::IpAddr>().unwrap(),
        config.port,
    );

    let (addr, server) = warp::serve(routes).bind_with_graceful_shutdown(addr, async {
        // Wait for SIGINT (Ctrl+C) or SIGTERM
        #[cfg(unix)]
        {
            let mut sigint = signal::unix::signal(signal::unix::SignalKind::interrupt()).unwrap();
            let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate()).unwrap();

            tokio::select! {
                _ = sigint.recv() => {
                    info!("Received SIGINT, shutting down gracefully...");
                }
                _ = sigterm.recv() => {
                    info!("Received SIGTERM, shutting down gracefully...");
                }
            }
        }

        #[cfg(not(unix))]
        {
            signal::ctrl_c().await.expect("Failed to listen for ctrl+c");
            info!("Received Ctrl+C, shutting down gracefully...");
        }
    });

    info!(
        "Server started successfully on {}. Press Ctrl+C to stop.",
        addr
    );
    server.await;
    info!("Server shutdown complete.");
}
