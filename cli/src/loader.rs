use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Stage file {} not found", .0.display())]
    NotFound(PathBuf),
    #[error("Stage file {} is empty", .0.display())]
    EmptyFile(PathBuf),
    #[error("Could not read stage file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads the whole stage file, telling a missing file apart from an empty one.
pub fn load_stage(path: &Path) -> Result<Vec<u8>, LoadError> {
    match fs::read(path) {
        Ok(data) if data.is_empty() => Err(LoadError::EmptyFile(path.to_owned())),
        Ok(data) => {
            log::debug!("Read {} bytes from {}", data.len(), path.display());
            Ok(data)
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Err(LoadError::NotFound(path.to_owned()))
        }
        Err(source) => Err(LoadError::Io {
            path: path.to_owned(),
            source,
        }),
    }
}
