//! Subprocess and temp-file plumbing shared by the script notifiers

use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::TempPath;

use crate::domain::ToastError;

/// Resolve `name` on the `PATH` search path.
///
/// A match found through a relative (or empty) `PATH` entry is rejected so a
/// same-named binary in the current directory is never executed.
pub fn resolve_executable(name: &str) -> Result<PathBuf, ToastError> {
    let search_path = std::env::var_os("PATH").unwrap_or_default();
    let cwd = std::env::current_dir()
        .map_err(|e| ToastError::FileIo(format!("Failed to read current directory: {}", e)))?;
    resolve_in(name, &search_path, &cwd)
}

/// Resolve `name` against an explicit search path, entry by entry.
///
/// `cwd` anchors relative entries so the lookup can tell where a match came
/// from. A name that already contains a path separator must be absolute.
pub fn resolve_in(name: &str, search_path: &OsStr, cwd: &Path) -> Result<PathBuf, ToastError> {
    let not_found = |e: Option<which::Error>| {
        if let Some(e) = e {
            tracing::debug!(program = name, error = %e, "executable lookup failed");
        }
        ToastError::ExecutableNotFound(name.to_string())
    };

    if Path::new(name).components().count() > 1 {
        let path = ensure_absolute(name, PathBuf::from(name))?;
        return which::which(&path).map_err(|e| not_found(Some(e)));
    }

    for entry in std::env::split_paths(search_path) {
        let relative = !entry.is_absolute();
        let dir = if relative { cwd.join(&entry) } else { entry.clone() };
        let Ok(found) = which::which_in(name, Some(&dir), cwd) else {
            continue;
        };
        if relative {
            tracing::warn!(program = name, entry = %entry.display(), "refusing executable from relative PATH entry");
            let file_name = found.file_name().map(PathBuf::from).unwrap_or_else(|| PathBuf::from(name));
            return Err(ToastError::UnsafeExecutablePath {
                name: name.to_string(),
                path: entry.join(file_name),
            });
        }
        return Ok(found);
    }

    Err(not_found(None))
}

/// Reject a resolved executable path that is not absolute
pub fn ensure_absolute(name: &str, path: PathBuf) -> Result<PathBuf, ToastError> {
    if path.is_absolute() {
        Ok(path)
    } else {
        Err(ToastError::UnsafeExecutablePath {
            name: name.to_string(),
            path,
        })
    }
}

/// Run `program` to completion with no console window and no captured output
pub fn run_hidden<I, S>(name: &str, program: &Path, args: I) -> Result<(), ToastError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    hide_console(&mut command);

    tracing::debug!(program = %program.display(), "running notification interpreter");
    let status = command.status().map_err(|e| ToastError::SpawnFailed {
        program: name.to_string(),
        message: e.to_string(),
    })?;

    if !status.success() {
        return Err(ToastError::SubprocessFailed {
            program: name.to_string(),
            code: status.code(),
        });
    }

    Ok(())
}

#[cfg(windows)]
fn hide_console(command: &mut Command) {
    use std::os::windows::process::CommandExt;
    use windows_sys::Win32::System::Threading::CREATE_NO_WINDOW;

    command.creation_flags(CREATE_NO_WINDOW);
}

#[cfg(not(windows))]
fn hide_console(_command: &mut Command) {}

/// Write `contents` to a new randomly named file in `dir`.
///
/// The returned guard deletes the file when dropped, including on unwind.
pub fn stage_temp_file(
    dir: &Path,
    prefix: &str,
    suffix: &str,
    contents: &[u8],
) -> Result<TempPath, ToastError> {
    let mut file = tempfile::Builder::new()
        .prefix(prefix)
        .suffix(suffix)
        .tempfile_in(dir)
        .map_err(|e| ToastError::FileIo(format!("Failed to create temp file: {}", e)))?;

    file.write_all(contents)
        .and_then(|_| file.flush())
        .map_err(|e| ToastError::FileIo(format!("Failed to write {}: {}", file.path().display(), e)))?;

    tracing::debug!(path = %file.path().display(), "staged temp file");
    Ok(file.into_temp_path())
}

/// Delete a staged file now; failures are logged, not returned
pub fn discard_temp_file(path: TempPath) {
    let staged = path.to_path_buf();
    if let Err(e) = path.close() {
        // Already gone is fine: the interpreter may have removed it
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!(path = %staged.display(), error = %e, "failed to remove temp file");
        }
    }
}
