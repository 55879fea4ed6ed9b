//! Application layer - Entry points and port interfaces

pub mod ports;
pub mod push;

pub use push::{dispatch, push, push_notification};
#[cfg(not(target_arch = "wasm32"))]
pub use push::{push_async, push_async_with};
