use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;

use crate::{
    bot::handler::Handler,
    config::Config,
    error::AppError,
    service::{clock::Clock, feed::FeedSource},
};

/// Builds the Discord client without connecting to the gateway.
///
/// Slash commands only need the `GUILDS` intent; notifications are posted over HTTP.
///
/// # Arguments
/// - `config` - Application configuration with the bot token and settings
/// - `db` - Database connection for command handling
/// - `feed` - Feed source used to resolve channels during setup
/// - `clock` - Time source for mapping timestamps
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Client ready to start and its HTTP handle for posting
/// - `Err(AppError::DiscordErr)` - Client construction failed
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
    feed: Arc<dyn FeedSource>,
    clock: Arc<dyn Clock>,
) -> Result<(Client, Arc<Http>), AppError> {
    let intents = GatewayIntents::GUILDS;

    let handler = Handler::new(db, feed, clock, config.settings.clone());

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Runs the gateway connection until it shuts down.
///
/// Should be called from within a `tokio::spawn` task since it doesn't return while the
/// bot is connected.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
