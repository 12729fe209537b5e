use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Append-only, line-oriented file of accepted addresses
///
/// Existing content is kept; addresses from earlier runs are not
/// deduplicated against.
#[derive(Debug)]
pub struct ResultFile {
    path: PathBuf,
    file: File,
}

impl ResultFile {
    /// Opens (creating if needed) the result file in append mode
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes one address followed by a newline and flushes it to disk
    pub fn append(&mut self, email: &str) -> io::Result<()> {
        writeln!(self.file, "{}", email)?;
        self.file.flush()
    }
}
