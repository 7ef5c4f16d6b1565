//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, timers) from page and
//! component logic so the rest of the crate stays testable natively.

pub mod auth;
pub mod format;
pub mod identity_cache;
pub mod notify;
pub mod timer;
