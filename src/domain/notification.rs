//! Notification value object and its builder setters

use std::fmt;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::audio::Audio;
use crate::domain::config::ToastConfig;
use crate::domain::platform::Platform;

/// Windows shows at most this many action buttons
pub const MAX_ACTIONS: usize = 5;

/// How long a Windows toast stays on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastDuration {
    #[default]
    Short,
    Long,
}

impl ToastDuration {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Long => "long",
        }
    }
}

impl fmt::Display for ToastDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text direction of a browser notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextDirection {
    /// Follow the browser's language setting
    #[default]
    Auto,
    Ltr,
    Rtl,
}

impl TextDirection {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

/// Actionable button shown below a Windows toast.
///
/// Only `protocol` actions are useful since there is no way to receive the
/// user's choice; e.g. `bingmaps:?q=sushi` opens Maps with a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub kind: String,
    pub label: String,
    pub arguments: String,
}

impl Action {
    pub fn protocol(label: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            kind: "protocol".to_string(),
            label: label.into(),
            arguments: arguments.into(),
        }
    }
}

/// Image shown next to the title
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSource {
    /// Filesystem path (Windows) or URL (browser)
    Path(String),
    /// Image bytes, staged to a temporary file during dispatch
    Raw(Vec<u8>),
}

/// Callback invoked by the browser on a notification lifecycle event
pub type EventHook = Arc<dyn Fn() + Send + Sync>;

/// Callback invoked with the clicked notification
pub type ClickHook = Arc<dyn Fn(&ClickEvent) + Send + Sync>;

/// The notification a click landed on, read back from the browser
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickEvent {
    pub title: String,
    pub body: String,
    pub tag: String,
}

/// Browser notification event handlers.
/// Each one is wired onto the notification only if set.
#[derive(Clone, Default)]
pub struct EventHooks {
    pub on_click: Option<ClickHook>,
    pub on_show: Option<EventHook>,
    pub on_close: Option<EventHook>,
    pub on_error: Option<EventHook>,
}

impl EventHooks {
    pub fn is_empty(&self) -> bool {
        self.on_click.is_none()
            && self.on_show.is_none()
            && self.on_close.is_none()
            && self.on_error.is_none()
    }
}

impl fmt::Debug for EventHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHooks")
            .field("on_click", &self.on_click.is_some())
            .field("on_show", &self.on_show.is_some())
            .field("on_close", &self.on_close.is_some())
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}

/// A fully configured notification.
///
/// Built fresh for every push: defaults come from the platform (or a
/// [`ToastConfig`]), then the `with_*` setters apply in call order so a later
/// setter overrides an earlier one on the same field. Setters never fail and
/// never validate; fields a platform does not use are ignored by its adapter.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Platform whose defaults seeded this notification
    pub platform: Platform,
    pub title: String,
    pub message: String,
    /// macOS only
    pub subtitle: String,
    pub audio: Audio,

    /// macOS: deliver in-process instead of through osascript
    pub use_native_bridge: bool,
    /// macOS native bridge: application whose identity the notification borrows
    pub bundle_id: String,

    /// Windows: name shown in the Action Centre
    pub app_id: String,
    /// Windows (path) and browser (URL)
    pub icon: Option<IconSource>,
    pub activation_type: String,
    pub activation_arguments: String,
    pub actions: Vec<Action>,
    pub audio_loop: bool,
    pub duration: ToastDuration,

    /// Browser: extra `Notification` options, copied in after `body`
    pub options: serde_json::Map<String, Value>,
    pub hooks: EventHooks,
}

impl Notification {
    /// Notification with the defaults of the build target
    pub fn new(message: impl Into<String>) -> Self {
        Self::for_platform(message, Platform::current())
    }

    /// Notification with the defaults of the given platform
    pub fn for_platform(message: impl Into<String>, platform: Platform) -> Self {
        Self::from_config(message, platform, &ToastConfig::defaults_for(platform))
    }

    /// Notification with caller defaults layered over the build target's
    pub fn with_config(message: impl Into<String>, config: &ToastConfig) -> Self {
        let platform = Platform::current();
        let merged = ToastConfig::defaults_for(platform).merge(config.clone());
        Self::from_config(message, platform, &merged)
    }

    fn from_config(message: impl Into<String>, platform: Platform, config: &ToastConfig) -> Self {
        Self {
            platform,
            title: config.title_or_default(platform),
            message: message.into(),
            subtitle: String::new(),
            audio: config.audio_or_default(),
            use_native_bridge: false,
            bundle_id: String::new(),
            app_id: config.app_id_or_default(),
            icon: None,
            activation_type: config.activation_type_or_default(),
            activation_arguments: String::new(),
            actions: Vec::new(),
            audio_loop: false,
            duration: config.duration_or_default(),
            options: serde_json::Map::new(),
            hooks: EventHooks::default(),
        }
    }

    /// Main title/heading
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Single or multi line body
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Sound played on display
    pub fn with_audio(mut self, audio: impl Into<Audio>) -> Self {
        self.audio = audio.into();
        self
    }

    // macOS

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Deliver through the in-process native bridge instead of osascript
    pub fn with_native_bridge(mut self, enabled: bool) -> Self {
        self.use_native_bridge = enabled;
        self
    }

    pub fn with_bundle_id(mut self, bundle_id: impl Into<String>) -> Self {
        self.bundle_id = bundle_id.into();
        self
    }

    /// Fake the sender application: its icon is shown and it is launched
    /// when the notification is clicked. Implies the native bridge.
    pub fn with_fake_bundle_id(self, bundle_id: impl Into<String>) -> Self {
        self.with_bundle_id(bundle_id).with_native_bridge(true)
    }

    // Windows

    /// App name shown in the Action Centre. Spaces are fine, special
    /// characters (e.g. é) are not.
    pub fn with_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = app_id.into();
        self
    }

    /// Image path (Windows) or URL (browser)
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(IconSource::Path(icon.into()));
        self
    }

    pub fn with_icon_raw(mut self, raw: impl Into<Vec<u8>>) -> Self {
        self.icon = Some(IconSource::Raw(raw.into()));
        self
    }

    pub fn with_activation_type(mut self, activation_type: impl Into<String>) -> Self {
        self.activation_type = activation_type.into();
        self
    }

    /// Arguments passed on activation (when the user clicks the toast)
    pub fn with_activation_arguments(mut self, arguments: impl Into<String>) -> Self {
        self.activation_arguments = arguments.into();
        self
    }

    /// Add a `protocol` action button. Ignored once [`MAX_ACTIONS`] are set.
    pub fn with_protocol_action(self, label: impl Into<String>, arguments: impl Into<String>) -> Self {
        self.with_action(Action::protocol(label, arguments))
    }

    /// Add an action button. Ignored once [`MAX_ACTIONS`] are set.
    pub fn with_action(mut self, action: Action) -> Self {
        if self.actions.len() >= MAX_ACTIONS {
            tracing::debug!(label = %action.label, "action limit reached, dropping action");
            return self;
        }
        self.actions.push(action);
        self
    }

    pub fn with_audio_loop(mut self, audio_loop: bool) -> Self {
        self.audio_loop = audio_loop;
        self
    }

    pub fn with_duration(mut self, duration: ToastDuration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_long_duration(self) -> Self {
        self.with_duration(ToastDuration::Long)
    }

    pub fn with_short_duration(self) -> Self {
        self.with_duration(ToastDuration::Short)
    }

    // Browser

    /// Set a raw `Notification` option
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn with_text_direction(self, dir: TextDirection) -> Self {
        self.with_option("dir", dir.as_str())
    }

    /// Language code
    pub fn with_lang(self, lang: impl Into<String>) -> Self {
        self.with_option("lang", lang.into())
    }

    /// Notification id; a new notification with the same tag replaces the old one
    pub fn with_tag(self, tag: impl Into<String>) -> Self {
        self.with_option("tag", tag.into())
    }

    /// URL of an image displayed as part of the notification
    pub fn with_image(self, url: impl Into<String>) -> Self {
        self.with_option("image", url.into())
    }

    /// Notify again when this replaces an older notification
    pub fn with_renotify(self, renotify: bool) -> Self {
        self.with_option("renotify", renotify)
    }

    /// Stay visible until clicked or dismissed
    pub fn with_require_interaction(self, require: bool) -> Self {
        self.with_option("requireInteraction", require)
    }

    /// No sound or vibration regardless of device settings
    pub fn with_silent(self, silent: bool) -> Self {
        self.with_option("silent", silent)
    }

    /// Time the notification applies to, as milliseconds since the epoch
    pub fn with_timestamp(self, time: SystemTime) -> Self {
        let millis = match time.duration_since(UNIX_EPOCH) {
            Ok(since) => since.as_millis() as i64,
            Err(before) => -(before.duration().as_millis() as i64),
        };
        self.with_option("timestamp", millis)
    }

    /// Vibration pattern in milliseconds (vibrate, pause, vibrate, ...)
    pub fn with_vibrate(self, pattern: impl IntoIterator<Item = u32>) -> Self {
        let pattern: Vec<Value> = pattern.into_iter().map(Value::from).collect();
        self.with_option("vibrate", pattern)
    }

    /// Called when the user clicks the notification, with what was shown
    pub fn with_on_click(mut self, hook: impl Fn(&ClickEvent) + Send + Sync + 'static) -> Self {
        self.hooks.on_click = Some(Arc::new(hook));
        self
    }

    pub fn with_on_show(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.hooks.on_show = Some(Arc::new(hook));
        self
    }

    pub fn with_on_close(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.hooks.on_close = Some(Arc::new(hook));
        self
    }

    pub fn with_on_error(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.hooks.on_error = Some(Arc::new(hook));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn later_setter_wins() {
        let n = Notification::for_platform("msg", Platform::MacOs)
            .with_title("first")
            .with_title("second");
        assert_eq!(n.title, "second");

        let n = Notification::for_platform("msg", Platform::Windows)
            .with_long_duration()
            .with_short_duration();
        assert_eq!(n.duration, ToastDuration::Short);
    }

    #[test]
    fn message_setter_overrides_constructor() {
        let n = Notification::for_platform("first", Platform::MacOs).with_message("second");
        assert_eq!(n.message, "second");
    }

    #[test]
    fn empty_message_is_accepted() {
        let n = Notification::for_platform("", Platform::MacOs);
        assert_eq!(n.message, "");
        assert_eq!(n.title, "GO APP");
    }

    #[test]
    fn windows_defaults_applied() {
        let n = Notification::for_platform("hello", Platform::Windows);
        assert_eq!(n.app_id, "GO APP");
        assert_eq!(n.activation_type, "protocol");
        assert_eq!(n.duration, ToastDuration::Short);
        assert!(n.audio.is_silent());
    }

    #[test]
    fn actions_capped_at_five() {
        let mut n = Notification::for_platform("hello", Platform::Windows);
        for i in 0..8 {
            n = n.with_protocol_action(format!("label {i}"), format!("app:{i}"));
        }
        assert_eq!(n.actions.len(), MAX_ACTIONS);
        assert_eq!(n.actions[4].label, "label 4");
    }

    #[test]
    fn protocol_action_kind() {
        let n = Notification::for_platform("hello", Platform::Windows)
            .with_protocol_action("click me", "");
        assert_eq!(n.actions[0].kind, "protocol");
        assert_eq!(n.actions[0].arguments, "");
    }

    #[test]
    fn icon_raw_replaces_path() {
        let n = Notification::for_platform("hello", Platform::Windows)
            .with_icon("C:\\logo.png")
            .with_icon_raw(vec![1, 2, 3]);
        assert_eq!(n.icon, Some(IconSource::Raw(vec![1, 2, 3])));
    }

    #[test]
    fn fake_bundle_id_enables_bridge() {
        let n = Notification::for_platform("hello", Platform::MacOs)
            .with_fake_bundle_id("com.apple.Safari");
        assert!(n.use_native_bridge);
        assert_eq!(n.bundle_id, "com.apple.Safari");
    }

    #[test]
    fn browser_options_land_in_bag() {
        let n = Notification::for_platform("hello", Platform::Web)
            .with_lang("en")
            .with_tag("build-42")
            .with_renotify(true)
            .with_text_direction(TextDirection::Rtl)
            .with_vibrate([200, 100, 200]);
        assert_eq!(n.options["lang"], "en");
        assert_eq!(n.options["tag"], "build-42");
        assert_eq!(n.options["renotify"], true);
        assert_eq!(n.options["dir"], "rtl");
        assert_eq!(n.options["vibrate"], serde_json::json!([200, 100, 200]));
    }

    #[test]
    fn timestamp_in_millis() {
        let n = Notification::for_platform("hello", Platform::Web)
            .with_timestamp(UNIX_EPOCH + Duration::from_secs(2));
        assert_eq!(n.options["timestamp"], 2000);
    }

    #[test]
    fn click_hook_receives_event() {
        let clicked = Arc::new(std::sync::Mutex::new(None));
        let seen = Arc::clone(&clicked);
        let n = Notification::for_platform("hello", Platform::Web)
            .with_on_click(move |event| *seen.lock().unwrap() = Some(event.clone()));

        let event = ClickEvent {
            title: "Build".into(),
            body: "hello".into(),
            tag: "ci".into(),
        };
        (n.hooks.on_click.as_ref().unwrap())(&event);
        assert_eq!(clicked.lock().unwrap().as_ref(), Some(&event));
    }

    #[test]
    fn hooks_debug_shows_presence() {
        let n = Notification::for_platform("hello", Platform::Web).with_on_show(|| {});
        assert!(!n.hooks.is_empty());
        let debug = format!("{:?}", n.hooks);
        assert!(debug.contains("on_show: true"));
        assert!(debug.contains("on_click: false"));
    }

    #[test]
    fn config_overrides_defaults() {
        let config = ToastConfig {
            title: Some("Builds".to_string()),
            ..ToastConfig::empty()
        };
        let n = Notification::with_config("done", &config);
        assert_eq!(n.title, "Builds");
        assert_eq!(n.platform, Platform::current());
    }
}
