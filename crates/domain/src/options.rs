// crates/domain/src/options.rs

/// Display switches selected on the command line. The two flags are independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Append `/` to directories and `*` to executable files.
    pub show_file_type: bool,
    /// Prefix each name with its modification time and size.
    pub show_details: bool,
}

impl DisplayOptions {
    #[must_use]
    pub const fn new(show_file_type: bool, show_details: bool) -> Self {
        Self { show_file_type, show_details }
    }
}
