//! In-memory `ProjectStore` that records every write.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::ProjectStore;

#[derive(Clone, Debug)]
pub struct MemoryProjectStore {
    root: PathBuf,
    files: Arc<Mutex<HashMap<String, String>>>,
    writes: Arc<Mutex<Vec<String>>>,
    failing_path: Arc<Mutex<Option<String>>>,
}

impl Default for MemoryProjectStore {
    fn default() -> Self {
        Self {
            root: PathBuf::from("/project"),
            files: Arc::new(Mutex::new(HashMap::new())),
            writes: Arc::new(Mutex::new(Vec::new())),
            failing_path: Arc::new(Mutex::new(None)),
        }
    }
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file without recording a write.
    pub fn add(&self, path: &str, content: &str) {
        self.files.lock().unwrap().insert(path.to_string(), content.to_string());
    }

    pub fn remove(&self, path: &str) {
        self.files.lock().unwrap().remove(path);
    }

    pub fn get(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    /// Paths passed to `write_file`, in call order.
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }

    /// Make writes to `path` fail with a permission error.
    pub fn fail_writes_to(&self, path: &str) {
        *self.failing_path.lock().unwrap() = Some(path.to_string());
    }
}

impl ProjectStore for MemoryProjectStore {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        self.get(path).ok_or_else(|| {
            AppError::Io(io::Error::new(io::ErrorKind::NotFound, format!("{path} not found")))
        })
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        if self.failing_path.lock().unwrap().as_deref() == Some(path) {
            return Err(AppError::WriteFailure {
                path: self.root.join(path),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        self.writes.lock().unwrap().push(path.to_string());
        self.add(path, content);
        Ok(())
    }

    fn file_exists(&self, path: &str) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}
