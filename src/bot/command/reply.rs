//! Interaction reply helpers shared by every command.

use dioxus_logger::tracing;
use serenity::all::{
    CommandInteraction, Context, CreateAttachment, CreateInteractionResponse,
    CreateInteractionResponseMessage, EditInteractionResponse,
};
use std::{sync::Arc, time::Duration};

use crate::error::AppError;

/// Replies to a command with a plain text message.
pub async fn reply(
    ctx: &Context,
    command: &CommandInteraction,
    content: impl Into<String>,
) -> Result<(), AppError> {
    let message = CreateInteractionResponseMessage::new().content(content);
    command
        .create_response(ctx, CreateInteractionResponse::Message(message))
        .await?;

    Ok(())
}

/// Replies to a command and deletes the reply once `delete_after` has passed.
///
/// Deletion runs in a background task so the handler returns immediately; a failed
/// deletion is only logged.
pub async fn reply_then_delete(
    ctx: &Context,
    command: &CommandInteraction,
    content: impl Into<String>,
    delete_after: Duration,
) -> Result<(), AppError> {
    reply(ctx, command, content).await?;

    let http = Arc::clone(&ctx.http);
    let command = command.clone();
    tokio::spawn(async move {
        tokio::time::sleep(delete_after).await;
        if let Err(e) = command.delete_response(&http).await {
            tracing::warn!("Failed to delete reply to /{}: {}", command.data.name, e);
        }
    });

    Ok(())
}

/// Replaces the deferred response of a command.
pub async fn edit_reply(
    ctx: &Context,
    command: &CommandInteraction,
    content: impl Into<String>,
    attachments: Vec<CreateAttachment>,
) -> Result<(), AppError> {
    let builder = attachments
        .into_iter()
        .fold(EditInteractionResponse::new().content(content), |builder, attachment| {
            builder.new_attachment(attachment)
        });

    command.edit_response(ctx, builder).await?;

    Ok(())
}

/// Reports a failed command to the member who invoked it.
///
/// Commands that deferred their response cannot reply a second time, so the
/// deferred response is edited instead.
pub async fn reply_error(ctx: &Context, command: &CommandInteraction, err: &AppError) {
    let content = err.user_message();

    if reply(ctx, command, content.clone()).await.is_ok() {
        return;
    }

    if let Err(e) = edit_reply(ctx, command, content, Vec::new()).await {
        tracing::error!(
            "Failed to report error for /{} to {}: {}",
            command.data.name,
            command.user.name,
            e
        );
    }
}

/// Loads image attachments from local files.
///
/// Files that cannot be read are logged and skipped.
pub async fn load_attachments(paths: &[String]) -> Vec<CreateAttachment> {
    let mut attachments = Vec::with_capacity(paths.len());
    for path in paths {
        match CreateAttachment::path(path).await {
            Ok(attachment) => attachments.push(attachment),
            Err(e) => tracing::error!("Failed to load attachment '{}': {}", path, e),
        }
    }
    attachments
}
