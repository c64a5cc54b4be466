//! Reply embeds for the `/notification` command.

use std::time::Duration;

use serenity::all::{CreateEmbed, CreateEmbedFooter, EditInteractionResponse, Timestamp};

use crate::model::{
    feed::channel_url,
    notification::{MappingPage, NotificationMapping},
};

const SETUP_COLOR: u32 = 0x00ff00;
const REMOVE_COLOR: u32 = 0xff9900;
const LIST_COLOR: u32 = 0x0099ff;

/// Content of an edited deferred reply.
#[derive(Debug, Clone)]
pub enum CommandReply {
    Embed(CreateEmbed),
    Text(String),
}

impl CommandReply {
    pub fn into_response(self) -> EditInteractionResponse {
        match self {
            Self::Embed(embed) => EditInteractionResponse::new().embed(embed),
            Self::Text(content) => EditInteractionResponse::new().content(content),
        }
    }
}

/// Confirmation shown after a successful setup.
pub fn setup_success(mapping: &NotificationMapping, check_interval: Duration) -> CreateEmbed {
    let template = mapping
        .custom_template
        .clone()
        .unwrap_or_else(|| "Using the default message template".to_string());

    CreateEmbed::new()
        .color(SETUP_COLOR)
        .title("✅ Notifications set up!")
        .field(
            "YouTube channel",
            channel_link(&mapping.source_channel_name, &mapping.source_channel_id),
            true,
        )
        .field(
            "Notification channel",
            format!("<#{}>", mapping.target_channel_id),
            true,
        )
        .field("Custom message", template, false)
        .footer(CreateEmbedFooter::new(format!(
            "New videos are checked {}",
            describe_interval(check_interval)
        )))
        .timestamp(Timestamp::now())
}

/// Confirmation shown after a mapping was removed.
pub fn removed(mapping: &NotificationMapping) -> CreateEmbed {
    CreateEmbed::new()
        .color(REMOVE_COLOR)
        .title("🗑️ Notifications removed")
        .field(
            "YouTube channel",
            channel_link(&mapping.source_channel_name, &mapping.source_channel_id),
            true,
        )
        .field(
            "Notification channel",
            format!("<#{}>", mapping.target_channel_id),
            true,
        )
        .footer(CreateEmbedFooter::new(format!(
            "Set up by {}",
            mapping.created_by
        )))
        .timestamp(Timestamp::now())
}

/// Listing of a guild's notifications, or `None` when there are none.
pub fn list(page: &MappingPage) -> Option<CreateEmbed> {
    if page.mappings.is_empty() {
        return None;
    }

    let fields = page.mappings.iter().enumerate().map(|(index, mapping)| {
        (
            format!("{}. {}", index + 1, mapping.source_channel_name),
            format!(
                "**Channel:** <#{}>\n**YouTube ID:** `{}`\n**Created by:** <@{}>\n**Created:** <t:{}:R>",
                mapping.target_channel_id,
                mapping.source_channel_id,
                mapping.created_by,
                mapping.created_at.timestamp()
            ),
            false,
        )
    });

    let footer = if page.remainder > 0 {
        format!(
            "Showing first {} of {} notifications",
            page.mappings.len(),
            page.total
        )
    } else {
        format!("{} notifications", page.total)
    };

    Some(
        CreateEmbed::new()
            .color(LIST_COLOR)
            .title("📋 YouTube notifications")
            .description(format!("Found {} notifications", page.total))
            .fields(fields)
            .footer(CreateEmbedFooter::new(footer))
            .timestamp(Timestamp::now()),
    )
}

fn channel_link(name: &str, channel_id: &str) -> String {
    format!("[{}]({})", name, channel_url(channel_id))
}

/// Human readable form of the check interval, e.g. "every 5 minutes".
fn describe_interval(interval: Duration) -> String {
    let millis = interval.as_millis();
    let secs = interval.as_secs();

    if millis < 1000 {
        format!("every {} ms", millis)
    } else if secs == 60 {
        "every minute".to_string()
    } else if secs % 60 == 0 {
        format!("every {} minutes", secs / 60)
    } else if secs == 1 {
        "every second".to_string()
    } else {
        format!("every {} seconds", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_intervals() {
        assert_eq!(describe_interval(Duration::from_millis(500)), "every 500 ms");
        assert_eq!(describe_interval(Duration::from_secs(1)), "every second");
        assert_eq!(describe_interval(Duration::from_secs(45)), "every 45 seconds");
        assert_eq!(describe_interval(Duration::from_secs(60)), "every minute");
        assert_eq!(describe_interval(Duration::from_secs(300)), "every 5 minutes");
    }
}
