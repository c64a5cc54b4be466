//! Test factory for slash command interaction options.
//!
//! Builds `CommandDataOption` values the same way the gateway delivers them, so option
//! parsing code can be tested without a live interaction.

use serde_json::{json, Value};
use serenity::all::CommandDataOption;

/// Discord application command option type for sub commands.
const SUB_COMMAND: u8 = 1;
/// Discord application command option type for strings.
const STRING: u8 = 3;
/// Discord application command option type for channels.
const CHANNEL: u8 = 7;

/// Creates a string option.
///
/// # Returns
/// - `Value` - Raw option JSON to nest inside `subcommand_option`
pub fn string_option(name: &str, value: &str) -> Value {
    json!({
        "name": name,
        "type": STRING,
        "value": value,
    })
}

/// Creates a channel option referencing the given channel ID.
///
/// # Returns
/// - `Value` - Raw option JSON to nest inside `subcommand_option`
pub fn channel_option(name: &str, channel_id: u64) -> Value {
    json!({
        "name": name,
        "type": CHANNEL,
        "value": channel_id.to_string(),
    })
}

/// Creates a sub command option wrapping the provided options.
///
/// # Arguments
/// - `name` - Sub command name
/// - `options` - Raw option JSON values built with the other helpers
///
/// # Returns
/// - `CommandDataOption` - Deserialized option
///
/// # Panics
/// - If the JSON cannot be deserialized (indicates invalid test data)
pub fn subcommand_option(name: &str, options: Vec<Value>) -> CommandDataOption {
    serde_json::from_value(json!({
        "name": name,
        "type": SUB_COMMAND,
        "options": options,
    }))
    .expect("Failed to deserialize test CommandDataOption")
}
