use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::error;

use crate::error::{Error, Result};

/// String key-value capability over whatever durable storage the host
/// provides. Injected so the voting logic can run against an in-memory
/// store under test.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory [`KeyValueStore`]. Read/write failures can be toggled and writes
/// are counted, which the test suite leans on.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
    writes: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads.get() {
            return Err(Error::StorageRead {
                key: key.to_owned(),
                reason: "simulated read failure".to_owned(),
            });
        }
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.get() {
            return Err(Error::StorageWrite {
                key: key.to_owned(),
                reason: "simulated write failure".to_owned(),
            });
        }
        self.writes.set(self.writes.get() + 1);
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// A single named slot in durable storage holding one serialized value,
/// with an in-memory copy written through on every set.
///
/// Read failures (backend unavailable, malformed text) are logged and the
/// default takes over; they never reach the caller. A failed write is also
/// logged but the in-memory value still updates, so memory and storage can
/// diverge until the next successful write. That asymmetry matches the
/// observed behavior this was built against.
pub struct StorageCell<T> {
    store: Rc<dyn KeyValueStore>,
    key: String,
    value: T,
}

impl<T: Serialize + DeserializeOwned> StorageCell<T> {
    pub fn load(store: Rc<dyn KeyValueStore>, key: impl Into<String>, default: T) -> Self {
        let key = key.into();
        let value = match Self::read(store.as_ref(), &key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(err) => {
                error!(error = %err, "storage read failed, using default");
                default
            }
        };
        Self { store, key, value }
    }

    fn read(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>> {
        match store.get(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|err| Error::MalformedRecord {
                    key: key.to_owned(),
                    reason: err.to_string(),
                }),
            None => Ok(None),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn set(&mut self, value: T) {
        match serde_json::to_string(&value) {
            Ok(raw) => {
                if let Err(err) = self.store.set(&self.key, &raw) {
                    error!(key = %self.key, error = %err, "storage write failed; keeping in-memory value");
                }
            }
            Err(err) => {
                error!(key = %self.key, error = %err, "failed to serialize value for storage");
            }
        }
        self.value = value;
    }

    pub fn update(&mut self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.value);
        self.set(next);
    }

    /// Replaces the in-memory value without writing through. Used to repair
    /// an invalid loaded record without mutating what is persisted.
    pub(crate) fn replace_local(&mut self, value: T) {
        self.value = value;
    }
}
