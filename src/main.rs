//! # Course Link Bot Main Entry Point
//!
//! Initializes logging, loads configuration, opens the database, and runs the
//! Telegram dispatcher next to the health server.

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use course_link_bot::bot::handlers::{BotContext, BotHandler};
use course_link_bot::config::Config;
use course_link_bot::database::connection::DatabaseManager;
use course_link_bot::services::health::HealthService;
use course_link_bot::services::reply::DeepLinkBuilder;
use course_link_bot::utils::logging::log_system_event;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "course_link_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Course Link Bot v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration loaded - Database: {}, Course platform: {}, HTTP Port: {}",
        config.database_url, config.auth_url, config.http_port);

    info!("Initializing database connection...");
    let db_manager = DatabaseManager::new(&config.database_url).await?;
    db_manager.run_migrations().await?;
    let db = Arc::new(db_manager);
    info!("Database initialized successfully");

    let ctx = BotContext {
        db: db.clone(),
        links: DeepLinkBuilder::new(config.auth_url.clone())?,
    };
    let bot = Bot::new(&config.telegram_bot_token);
    let handler = BotHandler::new(ctx);

    let health_service = HealthService::new(db);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;
    info!("Health check server starting on port {}", config.http_port);

    let bot_task = tokio::spawn(async move {
        Dispatcher::builder(bot, handler.schema())
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

    log_system_event("bot started", Some("listening for /c"));

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

    log_system_event("bot stopped", None);
    Ok(())
}
