//! Key-value store backed by one JSON file per key.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::StoreError;

/// Type-safe key-value store rooted at a directory.
///
/// Each key maps to a `<key>.json` file holding the whole value; `set`
/// rewrites the file wholesale through a temp file + rename so a crash
/// mid-write never leaves a torn blob behind. Keys are restricted to
/// `[A-Za-z0-9._-]` so they are always valid file names.
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Open a store rooted at `root`, creating the directory if needed.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let store = Store::open(".oakdash")?;
    /// ```
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(StoreError::Open)?;
        Ok(Self { root })
    }

    /// The directory this store reads and writes.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get a value from the store.
    ///
    /// Returns `None` if the key doesn't exist.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let orders: Option<Vec<Order>> = store.get("oakdash.orders.v1")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let path = self.key_path(key)?;
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(key, "store miss");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let value: T = serde_json::from_slice(&bytes)?;
        debug!(key, bytes = bytes.len(), "store read");
        Ok(Some(value))
    }

    /// Set a value in the store, replacing any previous value wholesale.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// store.set("oakdash.orders.v1", &orders)?;
    /// ```
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let path = self.key_path(key)?;
        let bytes = serde_json::to_vec(value)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, &path)?;
        debug!(key, bytes = bytes.len(), "store write");
        Ok(())
    }

    /// Delete a value from the store.
    ///
    /// Returns `true` if the key existed.
    pub fn delete(&self, key: &str) -> Result<bool, StoreError> {
        let path = self.key_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(key, "store delete");
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Check if a key exists in the store.
    pub fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.key_path(key)?.is_file())
    }

    /// Get all keys in the store.
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let name = entry?.file_name();
            let Some(name) = name.to_str() else { continue };
            if let Some(key) = name.strip_suffix(".json") {
                keys.push(key.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }

    fn key_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        if key.is_empty()
            || !key
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-'))
        {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

/// Helper to build store keys with namespacing.
///
/// # Example
///
/// ```rust,ignore
/// let key = store_key!("oakdash", "orders", "v1");
/// // Returns "oakdash.orders.v1"
/// ```
#[macro_export]
macro_rules! store_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push('.');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}
