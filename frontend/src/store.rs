use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::StoreError;

/// Raw string key-value storage the mode is persisted in.
pub trait ModeStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

// Values go in unencoded: plain page scripts reading the same key expect the
// bare marker, not a JSON string.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl BrowserStore {
    // sandboxed frames and disabled site data make `local_storage()` fail
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

impl ModeStore for BrowserStore {
    fn load(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::local_storage()
            .ok_or(StoreError::Unavailable)?
            .set_item(key, value)
            .map_err(|e| StoreError::Rejected {
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Access {
    #[default]
    Open,
    ReadOnly,
    Unavailable,
}

/// In-memory store for tests. Clones share the same entries, so a clone kept
/// aside observes what a component wrote.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    access: Access,
}

impl MemoryStore {
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        store
    }

    /// A store refusing every write, like a browser with storage quota exhausted.
    pub fn rejecting() -> Self {
        Self {
            access: Access::ReadOnly,
            ..Self::default()
        }
    }

    /// A store that cannot be reached at all, like storage blocked in a sandboxed frame.
    pub fn unavailable() -> Self {
        Self {
            access: Access::Unavailable,
            ..Self::default()
        }
    }
}

impl ModeStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        if self.access == Access::Unavailable {
            return None;
        }
        self.entries.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        match self.access {
            Access::Open => {
                self.entries
                    .borrow_mut()
                    .insert(key.to_owned(), value.to_owned());
                Ok(())
            }
            Access::ReadOnly => Err(StoreError::Rejected {
                key: key.to_owned(),
                reason: "read-only store".into(),
            }),
            Access::Unavailable => Err(StoreError::Unavailable),
        }
    }
}
