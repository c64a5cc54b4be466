use serenity::all::{CommandInteraction, Context, Interaction};

use crate::{
    bot::{
        command::{
            notification::{self, Invocation, NotificationCommand},
            reply::CommandReply,
        },
        handler::Handler,
    },
    error::AppError,
    service::notification::NotificationService,
};

/// Routes slash command interactions to their command implementation.
pub async fn handle_interaction_create(handler: &Handler, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    match command.data.name.as_str() {
        notification::NAME => handle_notification(handler, &ctx, &command).await,
        other => tracing::debug!("Ignoring unknown command /{}", other),
    }
}

/// Defers the reply, runs `/notification`, then edits the deferred reply with the result.
async fn handle_notification(handler: &Handler, ctx: &Context, command: &CommandInteraction) {
    if let Err(e) = command.defer(&ctx.http).await {
        tracing::error!("Failed to defer /{} reply: {}", notification::NAME, e);
        return;
    }

    let reply = match run_notification(handler, command).await {
        Ok(reply) => reply,
        Err(err) => CommandReply::Text(err.user_message()),
    };

    if let Err(e) = command
        .edit_response(&ctx.http, reply.into_response())
        .await
    {
        tracing::error!("Failed to send /{} reply: {}", notification::NAME, e);
    }
}

async fn run_notification(
    handler: &Handler,
    command: &CommandInteraction,
) -> Result<CommandReply, AppError> {
    let parsed = NotificationCommand::parse(&command.data.options)?;

    let invocation = Invocation {
        guild_id: command.guild_id.map(|id| id.get()),
        user_id: command.user.id.get(),
        can_manage_guild: command
            .member
            .as_ref()
            .and_then(|member| member.permissions)
            .is_some_and(|permissions| permissions.manage_guild()),
    };

    let service = NotificationService::new(&handler.db, handler.feed.as_ref(), handler.clock.as_ref());

    notification::execute(&service, &handler.settings, &invocation, parsed).await
}
