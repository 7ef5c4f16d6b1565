//! Service boundaries and the records they exchange.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both services are traits with mocked implementations that simulate latency
//! and return fixtures, so a real backend client can replace them without
//! touching state or pages.

pub mod auth;
pub(crate) mod fixtures;
pub mod portal;
pub mod types;
