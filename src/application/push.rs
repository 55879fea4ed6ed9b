//! Push entry points

#[cfg(not(target_arch = "wasm32"))]
use std::sync::Arc;

use crate::application::ports::Notifier;
use crate::domain::{Notification, ToastError};
use crate::infrastructure::create_notifier;

/// Show `message` with the build target's defaults
pub fn push(message: impl Into<String>) -> Result<(), ToastError> {
    push_notification(Notification::new(message))
}

/// Show a configured notification through the build target's notifier
pub fn push_notification(notification: Notification) -> Result<(), ToastError> {
    dispatch(&create_notifier(), notification)
}

/// Dispatch through a specific notifier
pub fn dispatch(notifier: &dyn Notifier, notification: Notification) -> Result<(), ToastError> {
    tracing::debug!(
        platform = %notifier.platform(),
        title = %notification.title,
        "pushing notification"
    );
    let result = notifier.push(notification);
    if let Err(e) = &result {
        tracing::debug!(error = %e, "notification failed");
    }
    result
}

impl Notification {
    /// Show this notification through the build target's notifier
    pub fn push(self) -> Result<(), ToastError> {
        push_notification(self)
    }
}

/// Async variant of [`push_notification`] for tokio callers
#[cfg(not(target_arch = "wasm32"))]
pub async fn push_async(notification: Notification) -> Result<(), ToastError> {
    push_async_with(Arc::new(create_notifier()), notification).await
}

/// Async dispatch through a specific notifier.
///
/// Subprocess and native dispatch block, so they run in `spawn_blocking`.
#[cfg(not(target_arch = "wasm32"))]
pub async fn push_async_with(
    notifier: Arc<dyn Notifier>,
    notification: Notification,
) -> Result<(), ToastError> {
    tokio::task::spawn_blocking(move || dispatch(notifier.as_ref(), notification))
        .await
        .map_err(|e| ToastError::SpawnFailed {
            program: "notification task".to_string(),
            message: format!("Task join error: {}", e),
        })?
}
