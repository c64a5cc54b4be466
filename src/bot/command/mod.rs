//! Slash commands exposed by the bot.

use serenity::all::CreateCommand;

pub mod notification;
pub mod reply;

/// Definitions of every slash command, registered globally on ready.
pub fn definitions() -> Vec<CreateCommand> {
    vec![notification::register()]
}
