// src/config.rs
use std::path::PathBuf;

use dirls_domain::DisplayOptions;

use crate::cli::Args;

/// Resolved run configuration, built once in `main` and passed down explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub dir: PathBuf,
    pub display: DisplayOptions,
    pub verbosity: u8,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            dir: args.dirname,
            display: DisplayOptions::new(args.filetype, args.long_format),
            verbosity: args.verbose,
        }
    }
}
