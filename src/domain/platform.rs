//! Build target environment

use std::fmt;

/// Title used when the caller sets none
pub const DEFAULT_TITLE: &str = "GO APP";

/// Environment a notification is prepared for.
///
/// Selection is fixed at compile time by [`Platform::current`]; the other
/// variants exist so payloads can be built for any platform (e.g. in tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// AppleScript `display notification` or the native bridge
    MacOs,
    /// PowerShell script embedding a Toast XML document
    Windows,
    /// Browser `Notification` API
    Web,
    /// `notify-send` (freedesktop notifications)
    Linux,
}

impl Platform {
    #[cfg(target_os = "macos")]
    pub const fn current() -> Self {
        Platform::MacOs
    }

    #[cfg(windows)]
    pub const fn current() -> Self {
        Platform::Windows
    }

    #[cfg(target_arch = "wasm32")]
    pub const fn current() -> Self {
        Platform::Web
    }

    #[cfg(all(unix, not(target_os = "macos"), not(target_arch = "wasm32")))]
    pub const fn current() -> Self {
        Platform::Linux
    }

    /// Default notification title for this platform.
    ///
    /// The web title is the current page address, resolved in the browser.
    pub fn default_title(&self) -> String {
        match self {
            Platform::Web => page_address().unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            _ => DEFAULT_TITLE.to_string(),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::MacOs => write!(f, "macos"),
            Platform::Windows => write!(f, "windows"),
            Platform::Web => write!(f, "web"),
            Platform::Linux => write!(f, "linux"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn page_address() -> Option<String> {
    web_sys::window()?.location().href().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_address() -> Option<String> {
    None
}
