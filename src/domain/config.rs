//! Notification defaults value object

use serde::{Deserialize, Serialize};

use crate::domain::audio::Audio;
use crate::domain::error::ToastError;
use crate::domain::notification::ToastDuration;
use crate::domain::platform::{Platform, DEFAULT_TITLE};

/// Activation type applied to Windows toasts unless overridden
pub const DEFAULT_ACTIVATION_TYPE: &str = "protocol";

/// Defaults applied to every notification before the builder setters run.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastConfig {
    pub title: Option<String>,
    pub app_id: Option<String>,
    pub audio: Option<String>,
    pub activation_type: Option<String>,
    pub duration: Option<ToastDuration>,
}

impl ToastConfig {
    /// Defaults for the given platform
    pub fn defaults_for(platform: Platform) -> Self {
        match platform {
            Platform::Windows => Self {
                title: Some(DEFAULT_TITLE.to_string()),
                app_id: Some(DEFAULT_TITLE.to_string()),
                audio: Some(Audio::SILENT.to_string()),
                activation_type: Some(DEFAULT_ACTIVATION_TYPE.to_string()),
                duration: Some(ToastDuration::Short),
            },
            // Resolved from the page address when the notification is built
            Platform::Web => Self::empty(),
            Platform::MacOs | Platform::Linux => Self {
                title: Some(DEFAULT_TITLE.to_string()),
                ..Self::empty()
            },
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            title: other.title.or(self.title),
            app_id: other.app_id.or(self.app_id),
            audio: other.audio.or(self.audio),
            activation_type: other.activation_type.or(self.activation_type),
            duration: other.duration.or(self.duration),
        }
    }

    /// Parse from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ToastError> {
        toml::from_str(content).map_err(|e| ToastError::Config(e.to_string()))
    }

    /// Serialize to TOML text
    pub fn to_toml_string(&self) -> Result<String, ToastError> {
        toml::to_string_pretty(self).map_err(|e| ToastError::Config(e.to_string()))
    }

    /// Title, or the platform default if not set
    pub fn title_or_default(&self, platform: Platform) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| platform.default_title())
    }

    /// App id, or empty if not set
    pub fn app_id_or_default(&self) -> String {
        self.app_id.clone().unwrap_or_default()
    }

    /// Audio, or no sound if not set
    pub fn audio_or_default(&self) -> Audio {
        self.audio.as_deref().map(Audio::from).unwrap_or_default()
    }

    /// Activation type, or empty if not set
    pub fn activation_type_or_default(&self) -> String {
        self.activation_type.clone().unwrap_or_default()
    }

    /// Duration, or short if not set
    pub fn duration_or_default(&self) -> ToastDuration {
        self.duration.unwrap_or_default()
    }
}
