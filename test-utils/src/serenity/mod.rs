//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity objects by deserializing JSON, simulating what
//! Discord's gateway would deliver.
//!
//! # Available Factories
//!
//! - `command` - Slash command option trees (`CommandDataOption`)

pub mod command;

pub use command::{channel_option, string_option, subcommand_option};
