//! Toast - cross-platform desktop notifications
//!
//! One call shows a notification on whatever environment the crate was built
//! for:
//!
//! ```no_run
//! use toast::{Audio, Notification};
//!
//! toast::push("Build finished")?;
//!
//! Notification::new("Tests passed")
//!     .with_title("CI")
//!     .with_audio(Audio::GLASS)
//!     .push()?;
//! # Ok::<(), toast::ToastError>(())
//! ```
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: the notification description, defaults, escaping and errors
//! - **Application**: the `Notifier` port and the push entry points
//! - **Infrastructure**: one notifier per environment (AppleScript on macOS,
//!   PowerShell toast on Windows, the web `Notification` API in the browser,
//!   notify-send elsewhere on Unix) plus subprocess and temp-file plumbing

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::ports::Notifier;
pub use application::{dispatch, push, push_notification};
#[cfg(not(target_arch = "wasm32"))]
pub use application::{push_async, push_async_with};
pub use domain::{
    Action, Audio, ClickEvent, EventHooks, IconSource, Notification, Platform, TextDirection, ToastConfig,
    ToastDuration, ToastError, MAX_ACTIONS,
};
pub use infrastructure::create_notifier;
