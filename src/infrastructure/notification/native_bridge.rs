//! In-process notification delivery using notify-rust
//!
//! The notification is encoded as a JSON payload and handed to the native
//! layer, which decodes it and talks to the OS notification API directly.
//! No script is generated and no process is spawned.

use serde::{Deserialize, Serialize};

use crate::domain::{Notification, ToastError};

/// Payload exchanged with the native layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgePayload {
    pub title: String,
    pub subtitle: String,
    pub message: String,
    pub audio: String,
    /// Application whose identity the notification borrows (macOS)
    pub bundle_id: String,
}

impl From<&Notification> for BridgePayload {
    fn from(n: &Notification) -> Self {
        Self {
            title: n.title.clone(),
            subtitle: n.subtitle.clone(),
            message: n.message.clone(),
            audio: n.audio.to_string(),
            bundle_id: n.bundle_id.clone(),
        }
    }
}

/// Encode a notification for the native layer
pub fn encode_payload(notification: &Notification) -> Result<String, ToastError> {
    serde_json::to_string(&BridgePayload::from(notification))
        .map_err(|e| ToastError::Serialization(e.to_string()))
}

/// Encode and deliver a notification in-process
pub fn push(notification: &Notification) -> Result<(), ToastError> {
    let payload = encode_payload(notification)?;
    deliver(&payload)
}

/// Decode a payload and show it.
///
/// Only decoding can fail; a refusal by the OS is logged and not returned.
pub fn deliver(payload: &str) -> Result<(), ToastError> {
    let payload: BridgePayload =
        serde_json::from_str(payload).map_err(|e| ToastError::Serialization(e.to_string()))?;
    tracing::debug!(title = %payload.title, "delivering through native bridge");
    show(&payload);
    Ok(())
}

#[cfg(target_os = "macos")]
fn show(payload: &BridgePayload) {
    if !payload.bundle_id.is_empty() {
        // Only the first call per process takes effect
        if let Err(e) = notify_rust::set_application(&payload.bundle_id) {
            tracing::warn!(bundle_id = %payload.bundle_id, error = %e, "failed to set sender application");
        }
    }

    let mut notification = notify_rust::Notification::new();
    notification.summary(&payload.title).body(&payload.message);
    if !payload.subtitle.is_empty() {
        notification.subtitle(&payload.subtitle);
    }
    if !payload.audio.is_empty() {
        notification.sound_name(&payload.audio);
    }

    if let Err(e) = notification.show() {
        tracing::warn!(error = %e, "native notification failed");
    }
}

#[cfg(all(unix, not(target_os = "macos"), not(target_arch = "wasm32")))]
fn show(payload: &BridgePayload) {
    let mut notification = notify_rust::Notification::new();
    notification.summary(&payload.title).body(&payload.message);
    if !payload.bundle_id.is_empty() {
        notification.appname(&payload.bundle_id);
    }
    if !payload.audio.is_empty() {
        notification.sound_name(&payload.audio);
    }

    if let Err(e) = notification.show() {
        tracing::warn!(error = %e, "native notification failed");
    }
}

#[cfg(not(unix))]
fn show(payload: &BridgePayload) {
    tracing::warn!(title = %payload.title, "native bridge is not available on this platform");
}
