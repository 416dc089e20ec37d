// crates/shared-kernel/src/value_objects/entry_info.rs
use std::{
    ffi::{OsStr, OsString},
    fmt,
};

use chrono::{DateTime, FixedOffset, Local, TimeZone};

/// Directory entry name exactly as the filesystem reported it.
///
/// `Display` is lossy for non UTF-8 names; output paths use [`EntryName::as_os_str`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct EntryName(OsString);

impl EntryName {
    #[must_use]
    pub fn new(name: impl Into<OsString>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_os_str(&self) -> &OsStr {
        &self.0
    }
}

impl From<&str> for EntryName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<&OsStr> for EntryName {
    fn from(name: &OsStr) -> Self {
        Self::new(name)
    }
}

impl From<OsString> for EntryName {
    fn from(name: OsString) -> Self {
        Self(name)
    }
}

impl AsRef<OsStr> for EntryName {
    fn as_ref(&self) -> &OsStr {
        &self.0
    }
}

impl fmt::Display for EntryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_string_lossy())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
#[repr(transparent)]
pub struct FileSize(u64);

impl FileSize {
    #[inline]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn bytes(self) -> u64 {
        self.0
    }
}

impl From<u64> for FileSize {
    fn from(bytes: u64) -> Self {
        Self::new(bytes)
    }
}

impl From<FileSize> for u64 {
    fn from(size: FileSize) -> Self {
        size.bytes()
    }
}

/// Byte count; width, fill and alignment flags are honoured.
impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0.to_string())
    }
}

/// Last-modification timestamp, pinned to the UTC offset it was resolved in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use]
#[repr(transparent)]
pub struct ModificationTime(DateTime<FixedOffset>);

impl ModificationTime {
    pub fn new<Tz: TimeZone>(timestamp: DateTime<Tz>) -> Self {
        Self(timestamp.fixed_offset())
    }

    /// Resolves a system timestamp into the local time zone.
    pub fn local(time: std::time::SystemTime) -> Self {
        Self::new(DateTime::<Local>::from(time))
    }

    pub fn timestamp(&self) -> &DateTime<FixedOffset> {
        &self.0
    }
}

impl From<DateTime<Local>> for ModificationTime {
    fn from(timestamp: DateTime<Local>) -> Self {
        Self::new(timestamp)
    }
}

impl From<DateTime<FixedOffset>> for ModificationTime {
    fn from(timestamp: DateTime<FixedOffset>) -> Self {
        Self(timestamp)
    }
}

impl fmt::Display for ModificationTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}
