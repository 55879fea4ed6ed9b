//! Domain layer - Notification value objects
//!
//! Contains the notification description, its defaults, escaping rules
//! and errors. This layer has no dependencies on external systems.

pub mod audio;
pub mod config;
pub mod error;
pub mod escape;
pub mod notification;
pub mod platform;

// Re-export common types
pub use audio::Audio;
pub use config::ToastConfig;
pub use error::{Result, ToastError};
pub use escape::{escape_applescript, escape_powershell};
pub use notification::{
    Action, ClickEvent, ClickHook, EventHook, EventHooks, IconSource, Notification, TextDirection, ToastDuration,
    MAX_ACTIONS,
};
pub use platform::{Platform, DEFAULT_TITLE};
