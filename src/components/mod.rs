//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the portal chrome and the route guard wrapper while
//! reading shared state from Leptos context providers.

pub mod guarded;
pub mod header;
pub mod layout;
pub mod navigation;
pub mod notice_tray;
