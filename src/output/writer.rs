//! Clip file writer implementation

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{CortesError, CortesResult};
use crate::output::OverwritePolicy;

/// Writes downloaded clips into a directory
pub struct ClipWriter {
    dir: PathBuf,
    overwrite: OverwritePolicy,
}

impl ClipWriter {
    /// Create a new writer targeting `dir`
    pub fn new(dir: impl Into<PathBuf>, overwrite: OverwritePolicy) -> Self {
        Self {
            dir: dir.into(),
            overwrite,
        }
    }

    /// File name for a download path: its last segment, or `fallback`
    pub fn file_name_for(download_url: &str, fallback: &str) -> String {
        download_url
            .split(['?', '#'])
            .next()
            .and_then(|path| path.rsplit('/').next())
            .filter(|name| !name.is_empty() && *name != "." && *name != "..")
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }

    /// Write `data` to `dir/file_name` through a temporary file and rename
    pub fn write(&self, file_name: &str, data: &[u8]) -> CortesResult<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;

        let final_path = self.dir.join(file_name);
        self.check_overwrite_policy(&final_path)?;

        let temp_path = self.dir.join(format!(".tmp_{}", file_name));
        self.write_to_file(&temp_path, data)?;
        std::fs::rename(&temp_path, &final_path)?;

        info!("Wrote {} ({} bytes)", final_path.display(), data.len());
        Ok(final_path)
    }

    fn write_to_file(&self, path: &Path, data: &[u8]) -> CortesResult<()> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        let mut writer = BufWriter::new(file);
        writer.write_all(data)?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
        Ok(())
    }

    fn check_overwrite_policy(&self, path: &Path) -> CortesResult<()> {
        if !path.exists() {
            return Ok(());
        }
        match self.overwrite {
            OverwritePolicy::Never => Err(CortesError::IoError(std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                format!("{} exists and overwrite is disabled", path.display()),
            ))),
            OverwritePolicy::Always => {
                warn!("{} exists, overwriting", path.display());
                Ok(())
            }
        }
    }
}
