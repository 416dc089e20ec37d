// src/app.rs
use std::io::{self, Write};

use dirls_infra::{MetadataDescriber, StdDirectoryReader};
use dirls_shared_kernel::Result;
use dirls_usecase::ListDirectory;
use log::info;

use crate::config::Config;

/// Lists `config.dir` to `out` with the real filesystem adapters.
///
/// # Errors
/// Returns the first listing or write failure; lines written before it stay written.
/// A closed `out` is not a failure.
pub fn run_with_output(config: &Config, out: &mut dyn Write) -> Result<usize> {
    let reader = StdDirectoryReader::new();
    let describer = MetadataDescriber::new();
    let listed = ListDirectory::new(&reader, &describer).run(&config.dir, config.display, out)?;
    info!("listed {listed} entries of '{}'", config.dir.display());
    Ok(listed)
}

/// Lists `config.dir` to standard output.
///
/// # Errors
/// See [`run_with_output`].
pub fn run(config: &Config) -> Result<usize> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(config, &mut out)
}
