use crate::core::Storage;
use crate::utils::error::{Result, ScoreError};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl Storage for LocalStorage {
    type Reader = BufReader<File>;

    fn open(&self, path: &Path) -> Result<Self::Reader> {
        let file = File::open(path).map_err(|source| ScoreError::OpenError {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(BufReader::new(file))
    }
}

/// In-memory files, keyed by path.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    files: HashMap<PathBuf, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }
}

impl Storage for MemoryStorage {
    type Reader = Cursor<Vec<u8>>;

    fn open(&self, path: &Path) -> Result<Self::Reader> {
        match self.files.get(path) {
            Some(content) => Ok(Cursor::new(content.clone().into_bytes())),
            None => Err(ScoreError::OpenError {
                path: path.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path.display()),
                ),
            }),
        }
    }
}
