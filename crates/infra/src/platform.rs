// crates/infra/src/platform.rs
//! Platform-specific abstractions for cross-platform compatibility.
//!
//! Keeps the OS-specific executable test out of the filesystem adapters.

use std::{fs::Metadata, path::Path};

/// Whether the current process may execute the non-directory entry at `path`.
///
/// Asks the kernel through `access(2)` with `X_OK`, so ownership, group
/// membership and the superuser rules all apply; any failure means "no".
#[cfg(unix)]
pub fn is_executable(path: &Path, _metadata: &Metadata) -> bool {
    use rustix::fs::{Access, access};
    access(path, Access::EXEC_OK).is_ok()
}

/// Whether a non-directory entry is executable.
///
/// Windows has no execute bit, so the extension decides.
#[cfg(windows)]
pub fn is_executable(path: &Path, _metadata: &Metadata) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            matches!(ext.to_ascii_lowercase().as_str(), "exe" | "bat" | "cmd" | "com")
        })
}

#[cfg(all(not(windows), not(unix)))]
pub fn is_executable(_path: &Path, _metadata: &Metadata) -> bool {
    false
}
