// crates/domain/src/format.rs
use std::ffi::OsString;

use crate::{model::EntryDescriptor, options::DisplayOptions};

/// Width of the right-aligned size column in the detailed view.
pub const SIZE_COLUMN_WIDTH: usize = 12;

/// Entry name, followed by its type suffix when `show_file_type` is set.
///
/// The name keeps the exact bytes the filesystem reported. The `/` and `*`
/// suffixes are appended independently of each other.
#[must_use]
pub fn base_name(entry: &EntryDescriptor, show_file_type: bool) -> OsString {
    let mut name = entry.name().as_os_str().to_os_string();
    if show_file_type && entry.is_directory() {
        name.push("/");
    }
    if show_file_type && entry.is_executable_file() {
        name.push("*");
    }
    name
}

/// Renders one output line for `entry`, without the line terminator.
///
/// The detailed view has the shape `YYYY-MM-DD HH:MM:SS <size:>12> <name>`.
#[must_use]
pub fn render_line(entry: &EntryDescriptor, options: DisplayOptions) -> OsString {
    let name = base_name(entry, options.show_file_type);
    if !options.show_details {
        return name;
    }

    let mut line = OsString::from(format!(
        "{} {:>width$} ",
        entry.mod_time(),
        entry.size(),
        width = SIZE_COLUMN_WIDTH
    ));
    line.push(name);
    line
}
