use std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use embedded_io::ErrorType;
use log::{debug, info, warn};

/// Buffered output file that only replaces its target on [`StdFileWriter::commit`].
///
/// Data goes to `<path>.tmp` first. Dropping the writer without committing
/// removes the temporary file, so a failed conversion leaves no partial output.
pub struct StdFileWriter {
    file: Option<BufWriter<fs::File>>,
    path: PathBuf,
    temp_path: PathBuf,
    committed: bool,
}

impl StdFileWriter {
    pub fn create(path: &Path) -> std::io::Result<Self> {
        let temp_path = temp_path_for(path)?;
        let file = fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)?;
        debug!("Writing to temporary file {:?}", temp_path);
        Ok(StdFileWriter {
            file: Some(BufWriter::new(file)),
            path: path.to_path_buf(),
            temp_path,
            committed: false,
        })
    }

    /// Flushes, syncs and moves the temporary file over the target path.
    pub fn commit(mut self) -> std::io::Result<PathBuf> {
        if let Some(file) = self.file.take() {
            let file = file.into_inner().map_err(|e| e.into_error())?;
            file.sync_all()?;
        }
        fs::rename(&self.temp_path, &self.path)?;
        self.committed = true;
        info!("Wrote {:?}", self.path);
        Ok(self.path.clone())
    }

    fn file(&mut self) -> std::io::Result<&mut BufWriter<fs::File>> {
        self.file
            .as_mut()
            .ok_or_else(|| std::io::Error::other("output already committed"))
    }
}

impl Drop for StdFileWriter {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        drop(self.file.take());
        if let Err(err) = fs::remove_file(&self.temp_path) {
            warn!("Failed to remove {:?}: {}", self.temp_path, err);
        }
    }
}

fn temp_path_for(path: &Path) -> std::io::Result<PathBuf> {
    let mut name = path
        .file_name()
        .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::InvalidInput, "output path has no file name"))?
        .to_os_string();
    name.push(".tmp");
    Ok(path.with_file_name(name))
}

impl ErrorType for StdFileWriter {
    type Error = std::io::Error;
}

impl embedded_io::Write for StdFileWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.file()?.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.file()?.flush()
    }
}
