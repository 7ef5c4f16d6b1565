//! Durable slot for the signed-in identity blob.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store writes the identity here on login/register, clears it on
//! logout, and reads it once at startup. The app always uses the
//! `localStorage` implementation; the in-memory one exists for native tests.

#[cfg(test)]
#[path = "identity_cache_test.rs"]
mod identity_cache_test;

use std::sync::{Mutex, PoisonError};

/// Why a cache write did not land.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CacheError {
    #[error("identity storage is unavailable")]
    Unavailable,
    #[error("identity storage rejected the write: {0}")]
    Rejected(String),
    #[error("identity could not be encoded for storage: {0}")]
    Encode(String),
}

impl From<serde_json::Error> for CacheError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encode(err.to_string())
    }
}

/// A single key-value slot holding a serialized identity.
pub trait IdentityCache {
    /// Raw blob, if one is stored.
    fn load(&self) -> Option<String>;

    /// Replace the stored blob.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] when the backing storage is missing or refuses
    /// the write.
    fn store(&self, blob: &str) -> Result<(), CacheError>;

    /// Remove the stored blob. Missing storage is not an error.
    fn clear(&self);
}

/// `window.localStorage` under a fixed key.
///
/// Outside the browser every read is empty and every write reports
/// [`CacheError::Unavailable`].
#[derive(Clone, Debug)]
pub struct LocalStorageCache {
    key: String,
}

impl LocalStorageCache {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl IdentityCache for LocalStorageCache {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(&self.key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn store(&self, blob: &str) -> Result<(), CacheError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or(CacheError::Unavailable)?;
            storage
                .set_item(&self.key, blob)
                .map_err(|e| CacheError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&self.key, blob);
            Err(CacheError::Unavailable)
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(&self.key);
            }
        }
    }
}

/// Process-local slot for native tests.
#[derive(Debug, Default)]
pub struct MemoryCache {
    slot: Mutex<Option<String>>,
    reject_writes: bool,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `blob` already stored.
    pub fn seeded(blob: impl Into<String>) -> Self {
        Self { slot: Mutex::new(Some(blob.into())), reject_writes: false }
    }

    /// A cache whose writes always fail, for exercising persist errors.
    pub fn rejecting() -> Self {
        Self { slot: Mutex::new(None), reject_writes: true }
    }
}

impl IdentityCache for MemoryCache {
    fn load(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn store(&self, blob: &str) -> Result<(), CacheError> {
        if self.reject_writes {
            return Err(CacheError::Rejected("quota exceeded".to_owned()));
        }
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(blob.to_owned());
        Ok(())
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
