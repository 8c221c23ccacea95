//! Versioned backup envelope, base64-wrapped for opaque transport.

use super::{KeyValue, Storage};
use crate::error::{KanbanError, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;

/// The backup payload: every value in the namespace, keyed without the
/// prefix, plus the version and capture time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupEnvelope {
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub data: BTreeMap<String, Value>,
}

/// Wire shape used to detect a missing `version`/`data` before committing
/// to the typed envelope.
#[derive(Debug, Deserialize)]
struct RawEnvelope {
    version: Option<String>,
    timestamp: Option<DateTime<Utc>>,
    data: Option<BTreeMap<String, Value>>,
}

impl<S: KeyValue> Storage<S> {
    /// Capture the whole namespace into a base64 backup string.
    /// Failure degrades to `None`.
    pub fn create_backup(&self) -> Option<String> {
        let mut data = BTreeMap::new();
        for key in self.stored_keys() {
            if let Some(value) = self.get(&key) {
                data.insert(key, value);
            }
        }
        let envelope = BackupEnvelope {
            version: self.config().version.clone(),
            timestamp: Utc::now(),
            data,
        };
        match serde_json::to_string(&envelope) {
            Ok(json) => Some(BASE64.encode(json)),
            Err(error) => {
                warn!(%error, "backup serialization failed");
                None
            }
        }
    }

    /// Replace the namespace with the contents of a backup string.
    ///
    /// Fails with [`KanbanError::InvalidBackup`] when the blob is not
    /// base64 JSON or lacks its `version`/`data` fields; existing state is
    /// only cleared once the envelope has been accepted. Backend failures
    /// while replacing the namespace propagate, so an `Ok(())` means the
    /// restored data fully replaced the prior state.
    pub fn restore_backup(&mut self, backup: &str) -> Result<()> {
        let bytes = BASE64
            .decode(backup.trim())
            .map_err(|error| KanbanError::invalid_backup(format!("not base64: {error}")))?;
        let raw: RawEnvelope = serde_json::from_slice(&bytes)
            .map_err(|error| KanbanError::invalid_backup(format!("not a backup blob: {error}")))?;

        let envelope = BackupEnvelope {
            version: raw
                .version
                .ok_or_else(|| KanbanError::invalid_backup("missing version"))?,
            timestamp: raw.timestamp.unwrap_or_else(Utc::now),
            data: raw
                .data
                .ok_or_else(|| KanbanError::invalid_backup("missing data"))?,
        };

        self.try_clear()?;
        for (key, value) in &envelope.data {
            let key = self.namespaced(key);
            self.backend.set(&key, value)?;
        }
        Ok(())
    }
}
