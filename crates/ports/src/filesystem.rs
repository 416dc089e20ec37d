// crates/ports/src/filesystem.rs
use std::{
    ffi::{OsStr, OsString},
    path::Path,
};

use dirls_domain::EntryDescriptor;
use dirls_shared_kernel::Result;

/// Port for enumerating the names contained in a directory.
pub trait DirectoryReader {
    /// Returns entry names in the order the filesystem yields them, without `.` and `..`.
    ///
    /// # Errors
    /// `NotADirectory` when `dir` is missing or is not a directory; `DirectoryRead`
    /// when the enumeration itself fails.
    fn list_entries(&self, dir: &Path) -> Result<Vec<OsString>>;
}

/// Port for querying the metadata of a single directory entry.
pub trait EntryDescriber {
    /// Describes `dir/name`.
    ///
    /// `dir` must be a directory; callers obtain `name` from a [`DirectoryReader`]
    /// listing of that same directory.
    ///
    /// # Errors
    /// `EntryVanished` when the entry no longer exists, `PermissionDenied` or
    /// `MetadataQuery` when the query fails.
    fn describe(&self, dir: &Path, name: &OsStr) -> Result<EntryDescriptor>;
}
