//! The `/notification` slash command.
//!
//! Sub commands:
//! - `setup channel_id target_channel [custom_message]`
//! - `remove channel_id target_channel`
//! - `list`
//!
//! The command is guild-only and requires the Manage Server permission. Discord enforces
//! the default member permission; it is checked again here because server admins can
//! override it per channel.

use serenity::all::{
    ChannelType, CommandDataOption, CommandDataOptionValue, CommandOptionType, CreateCommand,
    CreateCommandOption, Permissions,
};

use crate::{
    bot::command::reply::{self, CommandReply},
    config::NotifierSettings,
    error::AppError,
    model::notification::{CreateNotificationParam, MappingKey},
    service::notification::{NotificationService, MAX_TEMPLATE_LEN},
};

pub const NAME: &str = "notification";

/// Builds the slash command definition.
pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Manage YouTube upload notifications")
        .default_member_permissions(Permissions::MANAGE_GUILD)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "setup",
                "Set up notifications for a YouTube channel",
            )
            .add_sub_option(channel_id_option())
            .add_sub_option(target_channel_option("Channel to post notifications in"))
            .add_sub_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "custom_message",
                    "Custom message, supports {{video_title}} {{video_url}} {{channel_name}} {{channel_url}}",
                )
                .required(false)
                .max_length(MAX_TEMPLATE_LEN as u16),
            ),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "remove",
                "Remove notifications for a YouTube channel",
            )
            .add_sub_option(channel_id_option())
            .add_sub_option(target_channel_option("Channel to stop posting notifications in")),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "list",
            "List the notifications set up in this server",
        ))
}

fn channel_id_option() -> CreateCommandOption {
    CreateCommandOption::new(
        CommandOptionType::String,
        "channel_id",
        "YouTube channel ID (e.g. UCxxxxxx)",
    )
    .required(true)
}

fn target_channel_option(description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::Channel, "target_channel", description)
        .required(true)
        .channel_types(vec![ChannelType::Text, ChannelType::News])
}

/// A parsed `/notification` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationCommand {
    Setup {
        channel_id: String,
        target_channel: u64,
        custom_message: Option<String>,
    },
    Remove {
        channel_id: String,
        target_channel: u64,
    },
    List,
}

impl NotificationCommand {
    /// Parses the interaction options of `/notification`.
    ///
    /// # Arguments
    /// - `options` - Top level options; the first one is the sub command
    ///
    /// # Returns
    /// - `Ok(NotificationCommand)` - Recognized sub command with its required options
    /// - `Err(AppError::BadRequest)` - Unknown sub command or missing option
    pub fn parse(options: &[CommandDataOption]) -> Result<Self, AppError> {
        let Some(subcommand) = options.first() else {
            return Err(AppError::BadRequest("Missing sub command".to_string()));
        };

        let CommandDataOptionValue::SubCommand(sub_options) = &subcommand.value else {
            return Err(AppError::BadRequest(format!(
                "Unexpected option '{}'",
                subcommand.name
            )));
        };

        match subcommand.name.as_str() {
            "setup" => Ok(Self::Setup {
                channel_id: required_string(sub_options, "channel_id")?,
                target_channel: required_channel(sub_options, "target_channel")?,
                custom_message: string_option(sub_options, "custom_message"),
            }),
            "remove" => Ok(Self::Remove {
                channel_id: required_string(sub_options, "channel_id")?,
                target_channel: required_channel(sub_options, "target_channel")?,
            }),
            "list" => Ok(Self::List),
            other => Err(AppError::BadRequest(format!(
                "Unknown sub command '{}'",
                other
            ))),
        }
    }
}

/// Who ran the command and where.
#[derive(Debug, Clone, Copy)]
pub struct Invocation {
    /// `None` outside of a guild.
    pub guild_id: Option<u64>,
    pub user_id: u64,
    /// Whether the invoking member has Manage Server.
    pub can_manage_guild: bool,
}

/// Runs a parsed `/notification` command.
///
/// # Returns
/// - `Ok(CommandReply)` - Embed or text to show in place of the deferred reply
/// - `Err(AppError)` - Failure to report via `AppError::user_message`
pub async fn execute(
    service: &NotificationService<'_>,
    settings: &NotifierSettings,
    invocation: &Invocation,
    command: NotificationCommand,
) -> Result<CommandReply, AppError> {
    let Some(guild_id) = invocation.guild_id else {
        return Err(AppError::BadRequest(
            "This command can only be used in a server".to_string(),
        ));
    };

    if !invocation.can_manage_guild {
        return Err(AppError::BadRequest(
            "You need the Manage Server permission to use this command".to_string(),
        ));
    }

    match command {
        NotificationCommand::Setup {
            channel_id,
            target_channel,
            custom_message,
        } => {
            let mapping = service
                .setup(CreateNotificationParam {
                    source_channel_id: channel_id,
                    guild_id,
                    target_channel_id: target_channel,
                    custom_template: custom_message,
                    requested_by: invocation.user_id,
                })
                .await?;

            Ok(CommandReply::Embed(reply::setup_success(
                &mapping,
                settings.check_interval,
            )))
        }
        NotificationCommand::Remove {
            channel_id,
            target_channel,
        } => {
            let mapping = service
                .remove(MappingKey {
                    source_channel_id: channel_id.trim().to_string(),
                    guild_id: guild_id.to_string(),
                    target_channel_id: target_channel.to_string(),
                })
                .await?;

            Ok(CommandReply::Embed(reply::removed(&mapping)))
        }
        NotificationCommand::List => {
            let page = service.list(guild_id).await?;

            Ok(match reply::list(&page) {
                Some(embed) => CommandReply::Embed(embed),
                None => CommandReply::Text(
                    "📭 No YouTube notifications are set up in this server.".to_string(),
                ),
            })
        }
    }
}

fn string_option(options: &[CommandDataOption], name: &str) -> Option<String> {
    options
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| option.value.as_str())
        .map(str::to_string)
}

fn required_string(options: &[CommandDataOption], name: &str) -> Result<String, AppError> {
    string_option(options, name)
        .ok_or_else(|| AppError::BadRequest(format!("Missing required option '{}'", name)))
}

fn required_channel(options: &[CommandDataOption], name: &str) -> Result<u64, AppError> {
    options
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| option.value.as_channel_id())
        .map(|channel_id| channel_id.get())
        .ok_or_else(|| AppError::BadRequest(format!("Missing required option '{}'", name)))
}
