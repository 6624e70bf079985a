use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StoreError;

/// Key-value blob persistence supplied by the host application.
pub trait BlobStore {
    fn get_blob(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;
    fn set_blob(&mut self, key: &str, data: Vec<u8>) -> Result<(), StoreError>;
}

impl<S: BlobStore + ?Sized> BlobStore for &mut S {
    fn get_blob(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).get_blob(key)
    }

    fn set_blob(&mut self, key: &str, data: Vec<u8>) -> Result<(), StoreError> {
        (**self).set_blob(key, data)
    }
}

/// In-process store for tests and previews.
#[derive(Clone, Debug, Default)]
pub struct MemoryBlobStore {
    pub blobs: HashMap<String, Vec<u8>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(key: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        let mut store = Self::new();
        store.blobs.insert(key.into(), data.into());
        store
    }
}

impl BlobStore for MemoryBlobStore {
    fn get_blob(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.blobs.get(key).cloned())
    }

    fn set_blob(&mut self, key: &str, data: Vec<u8>) -> Result<(), StoreError> {
        self.blobs.insert(key.to_string(), data);
        Ok(())
    }
}

/// One file per key under a directory, `<dir>/<key>.json`.
#[derive(Clone, Debug)]
pub struct FileBlobStore {
    root: PathBuf,
}

impl FileBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl BlobStore for FileBlobStore {
    fn get_blob(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read(&path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_blob(&mut self, key: &str, data: Vec<u8>) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root)?;
        // Replace atomically.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, data)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}
