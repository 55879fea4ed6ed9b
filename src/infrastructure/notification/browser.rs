//! Browser notification adapter using the web `Notification` API
//!
//! No script is generated: the options object is assembled directly and
//! handed to `new Notification(title, options)`. When permission has not been
//! decided yet, it is requested and the notification is created in the
//! promise continuation, after `push` has already returned.

use serde_json::{Map, Value};

use crate::domain::{IconSource, Notification};

/// Shown with `alert()` when the browser has no `Notification` support
pub const UNSUPPORTED_MESSAGE: &str = "This browser does not support desktop notification";

/// `Notification.permission`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
    /// Not decided yet
    Default,
}

/// What a push does given browser support and permission state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebDispatch {
    /// Unsupported browser: alert the user, report success
    Alert,
    /// Permission granted: create the notification now
    Create,
    /// Ask for permission, create in the continuation
    RequestThenCreate,
    /// Permission denied: do nothing
    Skip,
}

pub fn plan_dispatch(supported: bool, permission: Permission) -> WebDispatch {
    if !supported {
        return WebDispatch::Alert;
    }
    match permission {
        Permission::Granted => WebDispatch::Create,
        Permission::Default => WebDispatch::RequestThenCreate,
        Permission::Denied => WebDispatch::Skip,
    }
}

/// Options object passed to the `Notification` constructor.
///
/// `body` is always the message; the icon URL and the option bag follow, so
/// an explicit bag entry wins.
pub fn notification_options(notification: &Notification) -> Map<String, Value> {
    let mut options = Map::with_capacity(notification.options.len() + 2);
    options.insert("body".to_string(), Value::from(notification.message.clone()));
    if let Some(IconSource::Path(icon)) = &notification.icon {
        options.insert("icon".to_string(), Value::from(icon.clone()));
    }
    for (key, value) in &notification.options {
        options.insert(key.clone(), value.clone());
    }
    options
}

#[cfg(target_arch = "wasm32")]
pub use web::WebNotifier;

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{NotificationOptions, NotificationPermission};

    use super::{notification_options, plan_dispatch, Permission, WebDispatch, UNSUPPORTED_MESSAGE};
    use crate::application::ports::Notifier;
    use crate::domain::{ClickEvent, EventHook, Notification, Platform, ToastError};

    /// Browser notifier
    #[derive(Debug, Default)]
    pub struct WebNotifier;

    impl WebNotifier {
        pub fn new() -> Self {
            Self
        }
    }

    impl Notifier for WebNotifier {
        fn platform(&self) -> Platform {
            Platform::Web
        }

        fn push(&self, notification: Notification) -> Result<(), ToastError> {
            let supported = is_supported();
            let permission = if supported {
                permission()
            } else {
                Permission::Default
            };

            match plan_dispatch(supported, permission) {
                WebDispatch::Alert => alert(UNSUPPORTED_MESSAGE),
                WebDispatch::Create => create(notification),
                WebDispatch::RequestThenCreate => request_then_create(notification),
                WebDispatch::Skip => tracing::debug!("notification permission denied"),
            }
            Ok(())
        }
    }

    fn is_supported() -> bool {
        js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("Notification")).unwrap_or(false)
    }

    fn permission() -> Permission {
        match web_sys::Notification::permission() {
            NotificationPermission::Granted => Permission::Granted,
            NotificationPermission::Denied => Permission::Denied,
            _ => Permission::Default,
        }
    }

    fn alert(message: &str) {
        let Some(window) = web_sys::window() else {
            tracing::warn!("no window to alert on");
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            tracing::warn!(error = ?e, "alert failed");
        }
    }

    fn request_then_create(notification: Notification) {
        let promise = match web_sys::Notification::request_permission() {
            Ok(promise) => promise,
            Err(e) => {
                tracing::warn!(error = ?e, "notification permission request failed");
                return;
            }
        };
        // The result is not inspected: a refused notification reports
        // through its error hook
        let on_settled: Closure<dyn FnMut(JsValue)> =
            Closure::once(move |_permission: JsValue| create(notification));
        let _ = promise.then(&on_settled);
        on_settled.forget();
    }

    fn create(notification: Notification) {
        let options = match js_options(&notification) {
            Ok(options) => options,
            Err(e) => {
                tracing::warn!(error = %e, "invalid notification options");
                return;
            }
        };
        let shown = match web_sys::Notification::new_with_options(&notification.title, &options) {
            Ok(shown) => shown,
            Err(e) => {
                tracing::warn!(error = ?e, "failed to create notification");
                return;
            }
        };

        let hooks = notification.hooks;
        if let Some(hook) = hooks.on_click {
            let target = shown.clone();
            let handler = Closure::<dyn FnMut()>::new(move || {
                hook(&ClickEvent {
                    title: target.title(),
                    body: target.body(),
                    tag: target.tag(),
                })
            });
            shown.set_onclick(Some(handler.as_ref().unchecked_ref()));
            handler.forget();
        }
        attach(hooks.on_show, |f| shown.set_onshow(f));
        attach(hooks.on_close, |f| shown.set_onclose(f));
        attach(hooks.on_error, |f| shown.set_onerror(f));
    }

    fn js_options(notification: &Notification) -> Result<NotificationOptions, ToastError> {
        let json = serde_json::to_string(&notification_options(notification))
            .map_err(|e| ToastError::Serialization(e.to_string()))?;
        let object = js_sys::JSON::parse(&json)
            .map_err(|e| ToastError::Serialization(format!("{:?}", e)))?;
        Ok(object.unchecked_into())
    }

    fn attach(hook: Option<EventHook>, set: impl FnOnce(Option<&js_sys::Function>)) {
        if let Some(hook) = hook {
            let handler = Closure::<dyn FnMut()>::new(move || hook());
            set(Some(handler.as_ref().unchecked_ref()));
            // The browser owns the handler from here on
            handler.forget();
        }
    }
}
