use std::{
    io::{self, Write},
    path::Path,
};

use dirls_domain::{DisplayOptions, render_line};
use dirls_ports::filesystem::{DirectoryReader, EntryDescriber};
use dirls_shared_kernel::Result;
use log::{debug, warn};

/// Lists a single directory: read names, describe each entry, write one line per entry.
pub struct ListDirectory<'a> {
    reader: &'a dyn DirectoryReader,
    describer: &'a dyn EntryDescriber,
}

impl<'a> ListDirectory<'a> {
    pub fn new(reader: &'a dyn DirectoryReader, describer: &'a dyn EntryDescriber) -> Self {
        Self { reader, describer }
    }

    /// Writes the listing of `dir` to `out` and returns the number of lines written.
    ///
    /// Lines follow the reader's enumeration order and carry the entry names'
    /// raw bytes. Each line is written as soon as its entry is described, so when
    /// an entry fails the lines before it have already been emitted and the
    /// listing stops there. A reader that closes `out` early ends the listing
    /// quietly.
    ///
    /// # Errors
    /// Propagates reader and describer failures, and write failures on `out`
    /// other than a broken pipe.
    pub fn run(&self, dir: &Path, options: DisplayOptions, out: &mut dyn Write) -> Result<usize> {
        let names = self.reader.list_entries(dir)?;
        debug!("listing {} entries of '{}' with {options:?}", names.len(), dir.display());

        for (written, name) in names.iter().enumerate() {
            let entry = self.describer.describe(dir, name).inspect_err(|err| {
                warn!("listing of '{}' aborted after {written} entries: {err}", dir.display());
            })?;
            let mut line = render_line(&entry, options);
            line.push("\n");
            if output_closed(out.write_all(line.as_encoded_bytes()))? {
                debug!("output closed after {written} lines");
                return Ok(written);
            }
        }
        output_closed(out.flush())?;
        Ok(names.len())
    }
}

/// `Ok(true)` when the reader of `out` went away, which is not an error for a listing.
fn output_closed(result: io::Result<()>) -> Result<bool> {
    match result {
        Ok(()) => Ok(false),
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(true),
        Err(err) => Err(err.into()),
    }
}
