//! # DonSTU Timetable Bot Main Entry Point
//!
//! Initializes logging, loads configuration, connects the session store,
//! builds the timetable API client, and runs the Telegram dispatcher next to
//! the health check server.

use anyhow::Result;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod bot;
mod config;
mod services;
mod storage;
mod utils;

use crate::api::{ApiConfig, TimetableClient};
use crate::bot::handlers::BotHandler;
use crate::bot::AppContext;
use crate::config::Config;
use crate::services::health::HealthService;
use crate::storage::SessionStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "donstu_timetable_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting DonSTU timetable bot v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - Storage: {:?}, HTTP Port: {}",
        config.storage_kind, config.http_port
    );

    // Initialize session store
    let store = SessionStore::from_config(&config).await?;
    store.run_migrations().await?;
    info!("Session store initialized");

    // Initialize the upstream API client
    let api = TimetableClient::with_config(ApiConfig {
        tpi_base_url: config.tpi_api_url.clone(),
        dgty_base_url: config.dgty_api_url.clone(),
        ..ApiConfig::default()
    })?;

    // Initialize bot
    info!("Initializing Telegram bot...");
    let telegram_bot = Bot::new(&config.telegram_bot_token);
    let handler = BotHandler::new(AppContext {
        store: store.clone(),
        api,
        institution_mode: config.institution_mode,
    });

    // Initialize health service
    let health_service = HealthService::new(store);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;
    info!("Health check server starting on port {}", config.http_port);

    // Run both the bot and health server concurrently
    let bot_task = tokio::spawn(async move {
        Dispatcher::builder(telegram_bot, handler.schema())
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    });

    let health_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, health_service.router).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    // Wait for either task to complete (which would indicate shutdown)
    tokio::select! {
        result = bot_task => {
            if let Err(e) = result {
                tracing::error!("Bot task error: {}", e);
            }
        }
        result = health_task => {
            if let Err(e) = result {
                tracing::error!("Health task error: {}", e);
            }
        }
    }

    info!("Application stopped");
    Ok(())
}
