use std::path::{Path, PathBuf};

use dirls_shared_kernel::{EntryName, FileSize, ModificationTime};

/// Metadata captured for a single directory entry.
///
/// A descriptor is either a directory or a non-directory. Directories always
/// report a zero size and are never considered executable files, whatever
/// their permission bits say.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDescriptor {
    path: PathBuf,
    name: EntryName,
    is_directory: bool,
    is_executable_file: bool,
    size: FileSize,
    mod_time: ModificationTime,
}

impl EntryDescriptor {
    pub fn directory(
        path: impl Into<PathBuf>,
        name: impl Into<EntryName>,
        mod_time: ModificationTime,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            is_directory: true,
            is_executable_file: false,
            size: FileSize::zero(),
            mod_time,
        }
    }

    /// Any entry that is not a directory: regular files, devices, sockets, ...
    pub fn file(
        path: impl Into<PathBuf>,
        name: impl Into<EntryName>,
        executable: bool,
        size: FileSize,
        mod_time: ModificationTime,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            is_directory: false,
            is_executable_file: executable,
            size,
            mod_time,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn name(&self) -> &EntryName {
        &self.name
    }

    #[must_use]
    pub const fn is_directory(&self) -> bool {
        self.is_directory
    }

    #[must_use]
    pub const fn is_executable_file(&self) -> bool {
        self.is_executable_file
    }

    pub const fn size(&self) -> FileSize {
        self.size
    }

    pub const fn mod_time(&self) -> ModificationTime {
        self.mod_time
    }
}
