use std::time::Duration;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_CHECK_INTERVAL_MS: u64 = 60_000;
const DEFAULT_FEED_TIMEOUT_SECS: u64 = 10;
const DEFAULT_EMBED_COLOR: u32 = 0xFF0000;
const DEFAULT_MESSAGE: &str =
    "**{{channel_name}}** just uploaded a new video!\n**{{video_title}}**\n{{video_url}}";

/// Process-wide configuration, loaded once at startup.
pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    pub settings: NotifierSettings,
}

/// Runtime settings shared by the command layer and the poller.
#[derive(Debug, Clone)]
pub struct NotifierSettings {
    /// Period of the feed check job.
    pub check_interval: Duration,
    /// Message template used when a mapping has no custom template.
    pub default_template: String,
    /// Accent color of notification embeds.
    pub embed_color: u32,
    /// Upper bound for a single feed fetch or message send.
    pub request_timeout: Duration,
}

impl Default for NotifierSettings {
    fn default() -> Self {
        Self {
            check_interval: Duration::from_millis(DEFAULT_CHECK_INTERVAL_MS),
            default_template: DEFAULT_MESSAGE.to_string(),
            embed_color: DEFAULT_EMBED_COLOR,
            request_timeout: Duration::from_secs(DEFAULT_FEED_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// `DATABASE_URL` and `DISCORD_BOT_TOKEN` are required. `CHECK_INTERVAL_MS`,
    /// `DEFAULT_MESSAGE`, `EMBED_COLOR` and `FEED_TIMEOUT_SECS` fall back to defaults.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and optional ones valid
    /// - `Err(AppError::ConfigErr)` - Missing required variable or unparsable value
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let database_url = required("DATABASE_URL")?;
        let discord_bot_token = required("DISCORD_BOT_TOKEN")?;

        let mut settings = NotifierSettings::default();

        if let Some(value) = lookup("CHECK_INTERVAL_MS") {
            let millis = parse_positive("CHECK_INTERVAL_MS", &value)?;
            settings.check_interval = Duration::from_millis(millis);
        }

        if let Some(value) = lookup("FEED_TIMEOUT_SECS") {
            let secs = parse_positive("FEED_TIMEOUT_SECS", &value)?;
            settings.request_timeout = Duration::from_secs(secs);
        }

        if let Some(value) = lookup("EMBED_COLOR") {
            settings.embed_color =
                parse_hex_color(&value).ok_or_else(|| ConfigError::InvalidEnvVar {
                    name: "EMBED_COLOR".to_string(),
                    value: value.clone(),
                    reason: "expected a hex color such as #FF0000".to_string(),
                })?;
        }

        if let Some(value) = lookup("DEFAULT_MESSAGE") {
            if !value.trim().is_empty() {
                // .env files can't hold raw newlines
                settings.default_template = value.replace("\\n", "\n");
            }
        }

        Ok(Self {
            database_url,
            discord_bot_token,
            settings,
        })
    }
}

fn parse_positive(name: &str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        Ok(_) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: "must be greater than zero".to_string(),
        }),
        Err(e) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        }),
    }
}

/// Parses `#RRGGBB`, `0xRRGGBB` or `RRGGBB` into a 24-bit color.
pub fn parse_hex_color(value: &str) -> Option<u32> {
    let value = value.trim();
    let hex = value
        .strip_prefix('#')
        .or_else(|| value.strip_prefix("0x"))
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);

    if hex.len() != 6 {
        return None;
    }

    u32::from_str_radix(hex, 16).ok()
}
