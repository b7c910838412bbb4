//! `PersistedCell` - a single write-through observable preference.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::watch;

use crate::storage::PrefsStorage;

/// A named value mirrored to storage on every write and hydrated from
/// storage on creation.
///
/// The cell is the single source of truth for its value. Writes update
/// the in-memory value first and then mirror it to storage; a storage
/// failure is swallowed and costs only durability. Subscribers observe
/// the current value immediately and the latest value after every
/// change (last-write-wins, no buffering).
pub struct PersistedCell<T> {
    /// Backing storage.
    storage: Arc<PrefsStorage>,
    /// Storage key.
    key: String,
    /// Current value plus subscriber notification.
    tx: watch::Sender<T>,
}

impl<T> fmt::Debug for PersistedCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistedCell")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl<T> PersistedCell<T>
where
    T: Clone + Serialize + DeserializeOwned,
{
    /// Creates a cell, hydrating from storage.
    ///
    /// On absence or decode failure the default is used; no error
    /// propagates to the caller.
    pub fn new(storage: Arc<PrefsStorage>, key: impl Into<String>, default: T) -> Self {
        let key = key.into();
        let initial = match storage.read(&key) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(error) => {
                    tracing::debug!(key = %key, %error, "stored preference did not decode, using default");
                    default
                }
            },
            None => default,
        };
        let (tx, _rx) = watch::channel(initial);
        Self { storage, key, tx }
    }

    /// Storage key of this cell.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Replaces the value, notifies subscribers, and mirrors the new
    /// value to storage.
    pub fn set(&self, value: T) {
        let json = serde_json::to_string(&value);
        self.tx.send_replace(value);
        match json {
            Ok(json) => self.storage.write(&self.key, &json),
            Err(error) => {
                tracing::warn!(key = %self.key, %error, "failed to encode preference, keeping in-memory value");
            }
        }
    }

    /// Computes a new value from the current one via a pure function,
    /// then behaves like [`set`](Self::set).
    pub fn update(&self, updater: impl FnOnce(&T) -> T) {
        let next = {
            let current = self.tx.borrow();
            updater(&current)
        };
        self.set(next);
    }

    /// Subscribes to the cell.
    ///
    /// The returned receiver observes the current value immediately and
    /// wakes on every subsequent change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}
