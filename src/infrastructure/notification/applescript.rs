//! macOS notification adapter using AppleScript `display notification`

use crate::application::ports::Notifier;
use crate::domain::{escape_applescript, Notification, Platform, ToastError};
use crate::infrastructure::process::{resolve_executable, run_hidden};

use super::native_bridge;

/// Interpreter that runs the generated script
pub const OSASCRIPT: &str = "osascript";

/// macOS notifier.
///
/// Runs `osascript -e <script>` unless the notification asks for the native
/// bridge.
pub struct AppleScriptNotifier {
    program: String,
}

impl AppleScriptNotifier {
    /// Create a notifier that runs `osascript`
    pub fn new() -> Self {
        Self {
            program: OSASCRIPT.to_string(),
        }
    }

    /// Create with a custom interpreter name
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for AppleScriptNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for AppleScriptNotifier {
    fn platform(&self) -> Platform {
        Platform::MacOs
    }

    fn push(&self, notification: Notification) -> Result<(), ToastError> {
        if notification.use_native_bridge {
            return native_bridge::push(&notification);
        }

        let script = display_notification_script(&notification);
        let program = resolve_executable(&self.program)?;
        run_hidden(&self.program, &program, ["-e", script.as_str()])
    }
}

/// Build the single-line `display notification` script
pub fn display_notification_script(notification: &Notification) -> String {
    let mut script = format!(
        r#"display notification "{}" with title "{}""#,
        escape_applescript(&notification.message),
        escape_applescript(&notification.title)
    );
    if !notification.subtitle.is_empty() {
        script.push_str(&format!(
            r#" subtitle "{}""#,
            escape_applescript(&notification.subtitle)
        ));
    }
    if !notification.audio.is_empty() {
        script.push_str(&format!(
            r#" sound name "{}""#,
            escape_applescript(notification.audio.as_str())
        ));
    }
    script
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Audio;

    fn mac(message: &str) -> Notification {
        Notification::for_platform(message, Platform::MacOs)
    }

    #[test]
    fn default_script() {
        assert_eq!(
            display_notification_script(&mac("hello")),
            r#"display notification "hello" with title "GO APP""#
        );
    }

    #[test]
    fn subtitle_and_sound_clauses() {
        let n = mac("hello").with_subtitle("sub").with_audio(Audio::PING);
        assert_eq!(
            display_notification_script(&n),
            r#"display notification "hello" with title "GO APP" subtitle "sub" sound name "Ping""#
        );
    }

    #[test]
    fn no_sound_clause_for_empty_audio() {
        let n = mac("hello").with_audio(Audio::PING).with_audio("");
        assert!(!display_notification_script(&n).contains("sound name"));
    }

    #[test]
    fn exactly_one_escaped_sound_clause() {
        let n = mac("hello").with_audio(r#"My "Sound""#);
        let script = display_notification_script(&n);
        assert_eq!(script.matches("sound name").count(), 1);
        assert!(script.ends_with(r#" sound name "My \"Sound\"""#));
    }

    #[test]
    fn values_are_escaped() {
        let n = mac(r#"path C:\tmp "quoted""#).with_title(r#"a"b"#);
        assert_eq!(
            display_notification_script(&n),
            r#"display notification "path C:\\tmp \"quoted\"" with title "a\"b""#
        );
    }

    #[test]
    fn notifier_defaults() {
        let notifier = AppleScriptNotifier::default();
        assert_eq!(notifier.program, "osascript");
        assert_eq!(notifier.platform(), Platform::MacOs);
    }

    #[test]
    fn missing_interpreter_is_lookup_error() {
        let notifier = AppleScriptNotifier::with_program("toast-no-osascript-71b0");
        let err = notifier.push(mac("hello")).unwrap_err();
        assert!(matches!(err, ToastError::ExecutableNotFound(_)));
    }
}
