//! notify-send notification adapter

use crate::application::ports::Notifier;
use crate::domain::{IconSource, Notification, Platform, ToastError};
use crate::infrastructure::process::{resolve_executable, run_hidden};

use super::native_bridge;

/// Freedesktop notification client
pub const NOTIFY_SEND: &str = "notify-send";

/// notify-send notification adapter
pub struct NotifySendNotifier {
    program: String,
}

impl NotifySendNotifier {
    /// Create a new notify-send notifier
    pub fn new() -> Self {
        Self {
            program: NOTIFY_SEND.to_string(),
        }
    }

    /// Create with a custom client name
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for NotifySendNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotifySendNotifier {
    fn platform(&self) -> Platform {
        Platform::Linux
    }

    fn push(&self, notification: Notification) -> Result<(), ToastError> {
        if notification.use_native_bridge {
            return native_bridge::push(&notification);
        }

        let program = resolve_executable(&self.program)?;
        run_hidden(&self.program, &program, notify_send_args(&notification))
    }
}

/// Argument list for `notify-send`.
///
/// Values are passed as separate arguments, so no escaping is needed.
pub fn notify_send_args(notification: &Notification) -> Vec<String> {
    let mut args = Vec::new();
    if !notification.app_id.is_empty() {
        args.push("--app-name".to_string());
        args.push(notification.app_id.clone());
    }
    if let Some(IconSource::Path(icon)) = &notification.icon {
        args.push("--icon".to_string());
        args.push(icon.clone());
    }
    if !notification.audio.is_empty() {
        args.push(format!("--hint=string:sound-name:{}", notification.audio));
    }
    // Keep a leading '-' in user text from being read as an option
    args.push("--".to_string());
    args.push(notification.title.clone());
    args.push(notification.message.clone());
    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Audio;

    fn linux(message: &str) -> Notification {
        Notification::for_platform(message, Platform::Linux)
    }

    #[test]
    fn minimal_args() {
        assert_eq!(notify_send_args(&linux("hello")), vec!["--", "GO APP", "hello"]);
    }

    #[test]
    fn optional_args() {
        let n = linux("hello")
            .with_app_id("CI")
            .with_icon("/usr/share/icons/ci.png")
            .with_audio(Audio::new("message-new-instant"));
        assert_eq!(
            notify_send_args(&n),
            vec![
                "--app-name",
                "CI",
                "--icon",
                "/usr/share/icons/ci.png",
                "--hint=string:sound-name:message-new-instant",
                "--",
                "GO APP",
                "hello",
            ]
        );
    }

    #[test]
    fn raw_icon_is_not_passed() {
        let n = linux("hello").with_icon_raw(vec![0u8; 4]);
        assert!(!notify_send_args(&n).contains(&"--icon".to_string()));
    }

    #[test]
    fn dash_leading_message_stays_positional() {
        let args = notify_send_args(&linux("-u critical"));
        assert_eq!(args.last().map(String::as_str), Some("-u critical"));
    }

    #[test]
    fn notifier_default_creates() {
        let notifier = NotifySendNotifier::default();
        assert_eq!(notifier.program, "notify-send");
        assert_eq!(notifier.platform(), Platform::Linux);
    }

    #[test]
    fn missing_client_is_lookup_error() {
        let notifier = NotifySendNotifier::with_program("toast-no-notify-send-5d3e");
        let err = notifier.push(linux("hello")).unwrap_err();
        assert!(matches!(err, ToastError::ExecutableNotFound(_)));
    }
}
