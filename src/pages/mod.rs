//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped data loading and reports failures as
//! notices; access control happens before a page is mounted.

pub mod admin_dashboard;
pub mod admin_section;
pub mod allotment;
pub mod applications;
pub mod candidate_dashboard;
pub mod login;
pub mod not_found;
