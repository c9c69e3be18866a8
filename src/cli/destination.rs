/// Output destination: stdout, a device or FIFO written in place, or a regular
/// file replaced only after a complete write.
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::document::{ConfigError, Document, dump};

/// Marker for standard output.
pub const STDOUT_MARKER: &str = "-";

/// A writable destination acquired during argument resolution.
///
/// Regular-file output goes to a temporary file next to the file the path
/// resolves to (symlinks are followed). It is renamed over that file by
/// [`Output::write_document`]; if the `Output` is dropped first, the
/// temporary file is removed and the destination is left untouched.
#[derive(Debug)]
pub enum Output {
    /// Standard output.
    Stdout,
    /// A regular file and its pending replacement.
    File {
        /// Path as given on the command line.
        path: PathBuf,
        /// Where the path resolves to; the rename lands here.
        real: PathBuf,
        /// Temporary file in the real destination's directory.
        staged: NamedTempFile,
    },
    /// A FIFO or device, opened directly and written in place.
    Special {
        /// Path as given on the command line.
        path: PathBuf,
        /// The opened destination.
        file: File,
    },
}

impl Output {
    /// Open `target` for writing. `-` selects stdout.
    ///
    /// Opening a FIFO blocks until a reader is attached.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Usage` naming `--output` if the target is a
    /// directory, cannot be opened, or its directory does not accept new files.
    pub fn open(target: &str) -> Result<Self, ConfigError> {
        if target == STDOUT_MARKER {
            return Ok(Self::Stdout);
        }

        let path = PathBuf::from(target);
        let real = fs::canonicalize(&path).unwrap_or_else(|_| path.clone());

        if let Ok(meta) = fs::metadata(&real) {
            if meta.is_dir() {
                return Err(usage(&path, "is a directory"));
            }
            if !meta.is_file() {
                let file = File::create(&real).map_err(|e| usage(&path, &e.to_string()))?;
                return Ok(Self::Special { path, file });
            }
        }

        let dir = match real.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let staged = NamedTempFile::new_in(dir).map_err(|e| usage(&path, &e.to_string()))?;
        inherit_permissions(&real, &staged);

        Ok(Self::File { path, real, staged })
    }

    /// Human-readable name of the destination.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Stdout => "stdout".to_owned(),
            Self::File { path, .. } | Self::Special { path, .. } => path.display().to_string(),
        }
    }

    /// Write `doc` and commit it: flush stdout or the special file, or
    /// replace the destination file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if serialization, writing, or the final
    /// rename fails.
    pub fn write_document(self, doc: &Document) -> Result<(), ConfigError> {
        let target = self.describe();
        match self {
            Self::Stdout => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                dump(doc, &mut out, &target)
            }
            Self::Special { mut file, .. } => dump(doc, &mut file, &target),
            Self::File {
                real, mut staged, ..
            } => {
                dump(doc, &mut staged, &target)?;
                staged.as_file().sync_all().map_err(|e| io_error(&target, &e))?;
                staged
                    .persist(&real)
                    .map(drop)
                    .map_err(|e| io_error(&target, &e.error))
            }
        }
    }
}

/// Give the staged file the destination's permissions, or the usual
/// permissions of a newly created file when there is no destination yet.
fn inherit_permissions(path: &Path, staged: &NamedTempFile) {
    // Best effort: the temp file's own mode is still usable.
    let _ = match fs::metadata(path) {
        Ok(meta) => staged.as_file().set_permissions(meta.permissions()),
        Err(_) => set_new_file_mode(staged.as_file()),
    };
}

#[cfg(unix)]
fn set_new_file_mode(file: &fs::File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_new_file_mode(_file: &fs::File) -> io::Result<()> {
    Ok(())
}

fn usage(path: &Path, reason: &str) -> ConfigError {
    ConfigError::Usage {
        option: "--output".to_owned(),
        reason: format!("'{}' {reason}", path.display()),
    }
}

fn io_error(target: &str, e: &io::Error) -> ConfigError {
    ConfigError::Io {
        target: target.to_owned(),
        details: e.to_string(),
    }
}
