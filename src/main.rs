use std::time::Duration;

use livescore_server_rs::api::{Api, ApiState};
use livescore_server_rs::config_handler::{self, Config};
use tracing::log;

#[tokio::main]
async fn main() {
    if std::env::var_os("RUST_LOG").is_none() {
        // Set the RUST_LOG, if it hasn't been explicitly defined
        std::env::set_var("RUST_LOG", "debug,hyper=debug")
    }

    // Configure a custom event formatter
    let format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_target(false)
        .with_ansi(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .compact();
    tracing_subscriber::fmt()
        .event_format(format)
        .with_max_level(tracing::Level::INFO)
        .init();

    let config_path = config_handler::get_config_path();

    // Port and client timeout are fixed at startup; the api_url is re-read on
    // every request, so a broken or missing config file here stays a
    // per-request error rather than a startup failure.
    let startup_config = Config::load(&config_path).unwrap_or_else(|e| {
        log::warn!("[CONFIG] {e}, starting with default port and timeout");
        Config::default()
    });

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(startup_config.timeout_s))
        .build()
        .expect("upstream client should build");

    Api::serve(
        startup_config.port,
        ApiState {
            client,
            config_path,
        },
    )
    .await;
}
