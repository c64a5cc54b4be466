mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    error::AppError,
    scheduler::feed_check::FeedCheckScheduler,
    service::{
        clock::{Clock, SystemClock},
        dispatch::DiscordNotificationSink,
        feed::{FeedSource, YoutubeFeedClient},
    },
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let feed: Arc<dyn FeedSource> = Arc::new(YoutubeFeedClient::new(
        http_client,
        config.settings.request_timeout,
    ));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    // Initialize Discord bot and extract HTTP client
    let (bot_client, discord_http) =
        bot::start::init_bot(&config, db.clone(), feed.clone(), clock.clone()).await?;
    let shard_manager = bot_client.shard_manager.clone();

    // Start Discord bot in a separate task
    let bot_task = tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    let state = AppState::new(
        db,
        feed,
        Arc::new(DiscordNotificationSink::new(discord_http)),
        clock,
        config.settings.clone(),
    );

    let scheduler = FeedCheckScheduler::start(state).await?;

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("Shutting down");

    scheduler.shutdown().await?;
    shard_manager.shutdown_all().await;

    if let Err(e) = bot_task.await {
        tracing::error!("Discord bot task panicked: {}", e);
    }

    Ok(())
}
