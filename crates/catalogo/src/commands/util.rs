//! Shared helpers for command handlers.

use std::io::IsTerminal;

use tokio::sync::broadcast;

use catalogo_core::{Notification, OperationHandle};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

/// Wait for a catalog operation, then print the notifications it published.
///
/// `notifications` must be subscribed before the operation is started.
pub async fn finish(
    handle: OperationHandle,
    mut notifications: broadcast::Receiver<Notification>,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let result = handle.join().await;

    let color = output::should_color(global.color_mode());
    while let Ok(notification) = notifications.try_recv() {
        output::print_notification(&notification, global.quiet, color);
    }

    result.map_err(CliError::from)
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: message.into(),
        });
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}
