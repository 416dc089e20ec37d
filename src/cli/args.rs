// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "dirls",
    version = crate::VERSION,
    about = "Lists the contents of the given directory."
)]
pub struct Args {
    /// The directory to list. Defaults to the current directory.
    #[arg(default_value = ".", value_hint = ValueHint::DirPath)]
    pub dirname: PathBuf,

    /// Append `/` to directories and `*` to executable files.
    #[arg(short = 'F', long = "filetype")]
    pub filetype: bool,

    /// Show modification time and size before each name.
    #[arg(short = 'l', long = "long-format")]
    pub long_format: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
