//! Domain error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by [`push`](crate::push).
///
/// Every failure is reported synchronously as a single value; nothing is
/// retried at this layer.
#[derive(Debug, Clone, Error)]
pub enum ToastError {
    #[error("{0} not found in PATH")]
    ExecutableNotFound(String),

    #[error("Failed to launch {program}: {message}")]
    SpawnFailed { program: String, message: String },

    #[error("{program} exited with status: {}", exit_code_label(.code))]
    SubprocessFailed { program: String, code: Option<i32> },

    #[error("Temporary file error: {0}")]
    FileIo(String),

    #[error("Failed to serialize notification: {0}")]
    Serialization(String),

    #[error("{name} resolves to executable in current directory ({})", .path.display())]
    UnsafeExecutablePath { name: String, path: PathBuf },

    #[error("Failed to parse toast template: {0}")]
    TemplateParse(String),

    #[error("Failed to render toast template: {0}")]
    TemplateRender(String),

    #[error("Invalid toast config: {0}")]
    Config(String),
}

fn exit_code_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "terminated by signal".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, ToastError>;
