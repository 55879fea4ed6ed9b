//! Notification sound value object

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Named system sound played with a notification.
///
/// The value is opaque: on macOS it is a sound name from
/// `/System/Library/Sounds`, on Windows an `ms-winsoundevent:` URI or the
/// `silent` marker. An empty value means no sound clause at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Audio(Cow<'static, str>);

macro_rules! sounds {
    ($($(#[$meta:meta])* $name:ident => $value:literal),* $(,)?) => {
        impl Audio {
            $($(#[$meta])* pub const $name: Audio = Audio(Cow::Borrowed($value));)*
        }
    };
}

// macOS
sounds! {
    BASSO => "Basso",
    BLOW => "Blow",
    BOTTLE => "Bottle",
    FROG => "Frog",
    FUNK => "Funk",
    GLASS => "Glass",
    HERO => "Hero",
    MORSE => "Morse",
    PING => "Ping",
    POP => "Pop",
    PURR => "Purr",
    SOSUMI => "Sosumi",
    SUBMARINE => "Submarine",
    TINK => "Tink",
}

// Windows
sounds! {
    /// Renders `<audio silent="true" />` in the toast document.
    SILENT => "silent",
    DEFAULT => "ms-winsoundevent:Notification.Default",
    IM => "ms-winsoundevent:Notification.IM",
    MAIL => "ms-winsoundevent:Notification.Mail",
    REMINDER => "ms-winsoundevent:Notification.Reminder",
    SMS => "ms-winsoundevent:Notification.SMS",
    LOOPING_ALARM => "ms-winsoundevent:Notification.Looping.Alarm",
    LOOPING_ALARM2 => "ms-winsoundevent:Notification.Looping.Alarm2",
    LOOPING_ALARM3 => "ms-winsoundevent:Notification.Looping.Alarm3",
    LOOPING_ALARM4 => "ms-winsoundevent:Notification.Looping.Alarm4",
    LOOPING_ALARM5 => "ms-winsoundevent:Notification.Looping.Alarm5",
    LOOPING_ALARM6 => "ms-winsoundevent:Notification.Looping.Alarm6",
    LOOPING_ALARM7 => "ms-winsoundevent:Notification.Looping.Alarm7",
    LOOPING_ALARM8 => "ms-winsoundevent:Notification.Looping.Alarm8",
    LOOPING_ALARM9 => "ms-winsoundevent:Notification.Looping.Alarm9",
    LOOPING_ALARM10 => "ms-winsoundevent:Notification.Looping.Alarm10",
    LOOPING_CALL => "ms-winsoundevent:Notification.Looping.Call",
    LOOPING_CALL2 => "ms-winsoundevent:Notification.Looping.Call2",
    LOOPING_CALL3 => "ms-winsoundevent:Notification.Looping.Call3",
    LOOPING_CALL4 => "ms-winsoundevent:Notification.Looping.Call4",
    LOOPING_CALL5 => "ms-winsoundevent:Notification.Looping.Call5",
    LOOPING_CALL6 => "ms-winsoundevent:Notification.Looping.Call6",
    LOOPING_CALL7 => "ms-winsoundevent:Notification.Looping.Call7",
    LOOPING_CALL8 => "ms-winsoundevent:Notification.Looping.Call8",
    LOOPING_CALL9 => "ms-winsoundevent:Notification.Looping.Call9",
    LOOPING_CALL10 => "ms-winsoundevent:Notification.Looping.Call10",
}

impl Audio {
    /// No sound.
    pub const NONE: Audio = Audio(Cow::Borrowed(""));

    /// Create from an arbitrary sound name or URI
    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether this is the Windows silent marker
    pub fn is_silent(&self) -> bool {
        *self == Self::SILENT
    }
}

impl fmt::Display for Audio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Audio {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Audio {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
