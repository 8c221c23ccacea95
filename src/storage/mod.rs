//! Key-value persistence with namespacing, versioning, and backup.
//!
//! The core consumes a plain get/set/remove contract ([`KeyValue`]); the
//! [`Storage`] wrapper adds the application namespace (key prefix), version
//! stamping, and the backup envelope. Backend failures never propagate into
//! the core: they are logged and degraded to `None`/`false` results.

mod backup;
mod file;
mod memory;

pub use backup::BackupEnvelope;
pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;
use serde_json::{json, Value};
use tracing::warn;

/// Plain key-value contract over JSON-serializable values.
///
/// Implementations report failures as errors; translating those into
/// degraded boolean results is the [`Storage`] wrapper's job.
pub trait KeyValue {
    /// Read a value, `None` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<Value>>;
    /// Write a value.
    fn set(&mut self, key: &str, value: &Value) -> Result<()>;
    /// Remove a key; `false` when it was absent.
    fn remove(&mut self, key: &str) -> Result<bool>;
    /// All stored keys, in no particular order.
    fn keys(&self) -> Result<Vec<String>>;
}

/// Namespace and version configuration, injected at construction so tests
/// can isolate their keys.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Prefix applied to every key.
    pub prefix: String,
    /// Application data version stamped into storage and backups.
    pub version: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            prefix: "ocean_kanban_".to_string(),
            version: "1.0.0".to_string(),
        }
    }
}

/// Sizes of the stored namespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StorageStats {
    pub item_count: usize,
    /// Total serialized size of the stored values, in bytes.
    pub total_bytes: usize,
}

/// Namespaced storage facade over a [`KeyValue`] backend.
#[derive(Debug)]
pub struct Storage<S: KeyValue> {
    backend: S,
    config: StorageConfig,
}

impl<S: KeyValue> Storage<S> {
    /// Wrap a backend with the default configuration.
    pub fn new(backend: S) -> Self {
        Self::with_config(backend, StorageConfig::default())
    }

    /// Wrap a backend with an explicit namespace/version.
    pub fn with_config(backend: S, config: StorageConfig) -> Self {
        Self { backend, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Borrow the underlying backend.
    pub fn backend(&self) -> &S {
        &self.backend
    }

    fn namespaced(&self, key: &str) -> String {
        format!("{}{}", self.config.prefix, key)
    }

    /// Read a value; backend failure degrades to `None`.
    pub fn get(&self, key: &str) -> Option<Value> {
        match self.backend.get(&self.namespaced(key)) {
            Ok(value) => value,
            Err(error) => {
                warn!(key, %error, "storage read failed");
                None
            }
        }
    }

    /// Write a value; backend failure degrades to `false`.
    pub fn set(&mut self, key: &str, value: &Value) -> bool {
        match self.backend.set(&self.namespaced(key), value) {
            Ok(()) => true,
            Err(error) => {
                warn!(key, %error, "storage write failed");
                false
            }
        }
    }

    /// Remove a key; backend failure degrades to `false`.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.backend.remove(&self.namespaced(key)) {
            Ok(removed) => removed,
            Err(error) => {
                warn!(key, %error, "storage remove failed");
                false
            }
        }
    }

    /// Remove every key in this namespace. Keys outside the prefix are
    /// untouched. Returns `false` if any removal failed.
    pub fn clear(&mut self) -> bool {
        let keys = match self.backend.keys() {
            Ok(keys) => keys,
            Err(error) => {
                warn!(%error, "storage key listing failed");
                return false;
            }
        };
        let mut ok = true;
        for key in keys
            .into_iter()
            .filter(|key| key.starts_with(&self.config.prefix))
        {
            if let Err(error) = self.backend.remove(&key) {
                warn!(key, %error, "storage remove failed");
                ok = false;
            }
        }
        ok
    }

    /// Like [`Storage::clear`], but propagating the first backend failure.
    /// Used where a partial clear must not pass silently.
    pub(crate) fn try_clear(&mut self) -> Result<()> {
        for key in self
            .backend
            .keys()?
            .into_iter()
            .filter(|key| key.starts_with(&self.config.prefix))
        {
            self.backend.remove(&key)?;
        }
        Ok(())
    }

    /// The unprefixed keys currently stored in this namespace.
    pub fn stored_keys(&self) -> Vec<String> {
        match self.backend.keys() {
            Ok(keys) => keys
                .into_iter()
                .filter_map(|key| {
                    key.strip_prefix(&self.config.prefix)
                        .map(|rest| rest.to_string())
                })
                .collect(),
            Err(error) => {
                warn!(%error, "storage key listing failed");
                Vec::new()
            }
        }
    }

    /// Seed the namespace with its defaults: an empty board list, the
    /// configured version, and initial user preferences. Existing values
    /// are left untouched.
    pub fn initialize(&mut self) -> bool {
        let mut ok = true;
        if self.get("boards").is_none() {
            ok &= self.set("boards", &json!([]));
        }
        if self.get("app_version").is_none() {
            let version = json!(self.config.version);
            ok &= self.set("app_version", &version);
        }
        if self.get("user_preferences").is_none() {
            ok &= self.set(
                "user_preferences",
                &json!({
                    "theme": "ocean",
                    "autoSave": true,
                    "notifications": true,
                }),
            );
        }
        ok
    }

    /// Stamp the configured version when the stored one differs.
    /// Returns `true` when a migration (version bump) happened.
    pub fn migrate(&mut self) -> bool {
        let stored = self
            .get("app_version")
            .and_then(|v| v.as_str().map(|s| s.to_string()));
        if stored.as_deref() == Some(self.config.version.as_str()) {
            return false;
        }
        let version = json!(self.config.version);
        self.set("app_version", &version)
    }

    /// Item count and serialized size of this namespace.
    pub fn stats(&self) -> StorageStats {
        let mut stats = StorageStats::default();
        for key in self.stored_keys() {
            if let Some(value) = self.get(&key) {
                stats.item_count += 1;
                stats.total_bytes += value.to_string().len();
            }
        }
        stats
    }
}
