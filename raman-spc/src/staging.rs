//! Staged copies of incoming SPC streams
//!
//! The decoder only reads from a path, so the parser copies the input stream
//! into `<staging dir>/spc-XXXXXX/<file name>`. The random directory keeps
//! concurrent or crashed imports from colliding; dropping the guard removes the
//! file and its directory on every exit path.

use crate::error::{Result, SpcError};
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::{debug, warn};

/// A staged input file; removed with its directory on drop
#[derive(Debug)]
pub struct StagedFile {
    dir: Option<TempDir>,
    path: PathBuf,
    len: u64,
}

impl StagedFile {
    /// Copy `input` to a fresh directory under `staging_dir`
    pub fn stage(mut input: impl Read, staging_dir: &Path, file_name: &str) -> Result<Self> {
        fs::create_dir_all(staging_dir).map_err(|e| SpcError::staging(staging_dir, e))?;

        let dir = tempfile::Builder::new()
            .prefix("spc-")
            .tempdir_in(staging_dir)
            .map_err(|e| SpcError::staging(staging_dir, e))?;
        let path = dir.path().join(file_name);

        // From here on `dir` cleans up if anything below fails.
        let len = write_all(&mut input, &path).map_err(|e| SpcError::staging(&path, e))?;
        debug!(path = %path.display(), bytes = len, "Staged SPC input");

        Ok(Self {
            dir: Some(dir),
            path,
            len,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of bytes staged
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove the staged file and directory now, reporting failures
    pub fn close(mut self) -> io::Result<()> {
        match self.dir.take() {
            Some(dir) => dir.close(),
            None => Ok(()),
        }
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if let Some(dir) = self.dir.take() {
            let shown = dir.path().display().to_string();
            if let Err(e) = dir.close() {
                warn!(dir = %shown, error = %e, "Failed to remove staging directory");
            }
        }
    }
}

fn write_all(input: &mut impl Read, path: &Path) -> io::Result<u64> {
    let mut out = BufWriter::new(File::create(path)?);
    let len = io::copy(input, &mut out)?;
    out.flush()?;
    Ok(len)
}
