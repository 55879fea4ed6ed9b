//! Infrastructure layer - Adapter implementations
//!
//! Contains the concrete notifiers and the subprocess and temp-file
//! plumbing they share.

pub mod notification;
#[cfg(not(target_arch = "wasm32"))]
pub mod process;

// Re-export adapters
pub use notification::create_notifier;
#[cfg(not(target_arch = "wasm32"))]
pub use notification::{AppleScriptNotifier, NotifySendNotifier, PowerShellNotifier};
#[cfg(target_arch = "wasm32")]
pub use notification::WebNotifier;
