//! Notification infrastructure module
//!
//! One adapter per target environment, selected at compile time:
//! AppleScript on macOS, a PowerShell toast script on Windows, the web
//! `Notification` API in the browser and notify-send elsewhere on Unix.
//! Payload builders are plain functions available on every target.

#[cfg(not(target_arch = "wasm32"))]
mod applescript;
mod browser;
#[cfg(not(target_arch = "wasm32"))]
pub mod native_bridge;
#[cfg(not(target_arch = "wasm32"))]
mod notify_send;
#[cfg(not(target_arch = "wasm32"))]
mod powershell;

#[cfg(not(target_arch = "wasm32"))]
pub use applescript::{display_notification_script, AppleScriptNotifier, OSASCRIPT};
#[cfg(target_arch = "wasm32")]
pub use browser::WebNotifier;
pub use browser::{
    notification_options, plan_dispatch, Permission, WebDispatch, UNSUPPORTED_MESSAGE,
};
#[cfg(not(target_arch = "wasm32"))]
pub use notify_send::{notify_send_args, NotifySendNotifier, NOTIFY_SEND};
#[cfg(not(target_arch = "wasm32"))]
pub use powershell::{launch_command, render_toast_script, PowerShellNotifier, POWERSHELL};

use crate::application::ports::Notifier;

/// Create the notifier for the build target
#[cfg(target_os = "macos")]
pub fn create_notifier() -> Box<dyn Notifier> {
    Box::new(AppleScriptNotifier::new())
}

/// Create the notifier for the build target
#[cfg(windows)]
pub fn create_notifier() -> Box<dyn Notifier> {
    Box::new(PowerShellNotifier::new())
}

/// Create the notifier for the build target
#[cfg(target_arch = "wasm32")]
pub fn create_notifier() -> Box<dyn Notifier> {
    Box::new(WebNotifier::new())
}

/// Create the notifier for the build target
#[cfg(all(unix, not(target_os = "macos"), not(target_arch = "wasm32")))]
pub fn create_notifier() -> Box<dyn Notifier> {
    Box::new(NotifySendNotifier::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Platform;

    #[test]
    fn factory_matches_build_target() {
        assert_eq!(create_notifier().platform(), Platform::current());
    }
}
