//! Application state held outside the view tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` and `session_store` own who is signed in; the store is the only
//! writer. `notices` and `remote` are plain data that views keep in signals.

pub mod notices;
pub mod remote;
pub mod session;
pub mod session_store;
