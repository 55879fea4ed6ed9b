//! Notification port interface

use crate::domain::{Notification, Platform, ToastError};

/// Port for desktop notifications.
///
/// One implementation per target environment; the build target picks it
/// (see `infrastructure::create_notifier`).
pub trait Notifier: Send + Sync {
    /// Platform whose defaults a notification for this notifier starts from
    fn platform(&self) -> Platform;

    /// Notification carrying this notifier's platform defaults
    fn notification(&self, message: &str) -> Notification {
        Notification::for_platform(message, self.platform())
    }

    /// Build the platform payload and dispatch it.
    ///
    /// Blocks until the interpreter exits or the native call returns. The
    /// browser notifier may return before the notification exists.
    fn push(&self, notification: Notification) -> Result<(), ToastError>;
}

/// Blanket implementation for boxed notifier types
impl Notifier for Box<dyn Notifier> {
    fn platform(&self) -> Platform {
        self.as_ref().platform()
    }

    fn push(&self, notification: Notification) -> Result<(), ToastError> {
        self.as_ref().push(notification)
    }
}
