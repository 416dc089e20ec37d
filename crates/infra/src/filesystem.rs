// crates/infra/src/filesystem.rs
use std::{
    ffi::{OsStr, OsString},
    fs, io,
    path::Path,
};

use dirls_domain::EntryDescriptor;
use dirls_ports::filesystem::{DirectoryReader, EntryDescriber};
use dirls_shared_kernel::{EntryName, FileSize, InfrastructureError, ModificationTime, Result};
use log::{debug, trace};

use crate::platform;

/// Filesystem adapter implementing the `DirectoryReader` port with `std::fs::read_dir`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDirectoryReader;

impl StdDirectoryReader {
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryReader for StdDirectoryReader {
    fn list_entries(&self, dir: &Path) -> Result<Vec<OsString>> {
        ensure_directory(dir)?;

        let read_error =
            |source: io::Error| InfrastructureError::DirectoryRead { path: dir.to_path_buf(), source };

        // read_dir never yields `.` or `..`.
        let names = fs::read_dir(dir)
            .map_err(read_error)?
            .map(|entry| entry.map(|e| e.file_name()))
            .collect::<io::Result<Vec<_>>>()
            .map_err(read_error)?;

        debug!("read {} entries from '{}'", names.len(), dir.display());
        Ok(names)
    }
}

fn ensure_directory(dir: &Path) -> Result<()> {
    let not_a_directory = || InfrastructureError::NotADirectory { path: dir.to_path_buf() };
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(not_a_directory().into()),
        Err(err) if matches!(err.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory) => {
            Err(not_a_directory().into())
        }
        Err(source) => Err(InfrastructureError::DirectoryRead { path: dir.to_path_buf(), source }.into()),
    }
}

/// Filesystem adapter implementing the `EntryDescriber` port.
///
/// Metadata is queried once per entry and follows symlinks.
#[derive(Debug, Default, Clone, Copy)]
pub struct MetadataDescriber;

impl MetadataDescriber {
    pub fn new() -> Self {
        Self
    }
}

impl EntryDescriber for MetadataDescriber {
    fn describe(&self, dir: &Path, name: &OsStr) -> Result<EntryDescriptor> {
        debug_assert!(dir.is_dir(), "describe called with non-directory '{}'", dir.display());

        let path = dir.join(name);
        let metadata =
            fs::metadata(&path).map_err(|e| InfrastructureError::from_metadata_io(&path, e))?;
        let mod_time = metadata
            .modified()
            .map(ModificationTime::local)
            .map_err(|e| InfrastructureError::from_metadata_io(&path, e))?;
        let name = EntryName::from(name);

        trace!("described '{}' (dir={})", path.display(), metadata.is_dir());

        if metadata.is_dir() {
            return Ok(EntryDescriptor::directory(path, name, mod_time));
        }
        let executable = platform::is_executable(&path, &metadata);
        Ok(EntryDescriptor::file(path, name, executable, FileSize::new(metadata.len()), mod_time))
    }
}
