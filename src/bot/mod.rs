//! Discord bot integration.
//!
//! - `start` - client construction and the gateway loop
//! - `handler` - serenity event handler (ready, interactions)
//! - `command` - slash command definitions, option parsing and replies

pub mod command;
pub mod handler;
pub mod start;
