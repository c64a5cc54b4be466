use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Interaction, Ready};
use serenity::async_trait;

use crate::{
    config::NotifierSettings,
    service::{clock::Clock, feed::FeedSource},
};

pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub feed: Arc<dyn FeedSource>,
    pub clock: Arc<dyn Clock>,
    pub settings: NotifierSettings,
}

impl Handler {
    pub fn new(
        db: DatabaseConnection,
        feed: Arc<dyn FeedSource>,
        clock: Arc<dyn Clock>,
        settings: NotifierSettings,
    ) -> Self {
        Self {
            db,
            feed,
            clock,
            settings,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a user invokes a slash command
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(self, ctx, interaction).await;
    }
}
