use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::{Active, LogFile, Sink};
use crate::error::SinkError;

impl Sink {
    /// Opens `directory/file_name` and makes it the active target.
    ///
    /// A non-empty `directory` is created recursively when missing. An
    /// already open log file is flushed before the new one is created and
    /// closed once it is installed. Color output is disabled because escape sequences are noise in a
    /// persisted file. On failure nothing changes: the previous target and
    /// any previously open file stay in place.
    ///
    /// Returns the full path of the opened file.
    pub fn open_file(
        &mut self,
        directory: impl AsRef<Path>,
        file_name: impl AsRef<Path>,
    ) -> Result<PathBuf, SinkError> {
        let directory = directory.as_ref();
        if !directory.as_os_str().is_empty() {
            fs::create_dir_all(directory).map_err(|source| SinkError::CreateDirectory {
                path: directory.to_path_buf(),
                source,
            })?;
        }

        let path = directory.join(file_name);
        if let Some(open) = self.file.as_mut() {
            let _ = open.writer.flush();
        }
        let file = File::create(&path).map_err(|source| SinkError::OpenFile {
            path: path.clone(),
            source,
        })?;

        self.close_file();
        self.file = Some(LogFile {
            path: path.clone(),
            writer: BufWriter::new(file),
        });
        self.active = Active::File;
        self.color = false;
        Ok(path)
    }

    /// Flushes and closes the open log file.
    ///
    /// When the file is the active target the console becomes active again.
    /// Color stays disabled. Does nothing when no file is open.
    pub fn close_file(&mut self) {
        if let Some(mut file) = self.file.take() {
            if matches!(self.active, Active::File) {
                self.active = Active::Console;
            }
            let _ = file.writer.flush();
        }
    }

    /// Reports whether a log file is open (active or not).
    #[must_use]
    pub const fn has_file(&self) -> bool {
        self.file.is_some()
    }

    /// Returns the path of the open log file.
    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        self.file.as_ref().map(|file| file.path.as_path())
    }
}
