//! Page-local state for data fetched from the portal services.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use crate::net::portal::ServiceError;

/// A fetched value plus whether a request for it is in flight.
///
/// A failed request keeps the previous value so the page does not blank out;
/// the error goes back to the caller, which reports it as a notice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Remote<T> {
    value: T,
    loading: bool,
}

impl<T> Remote<T> {
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// Apply a response, handing any error back for reporting.
    pub fn settle(&mut self, result: Result<T, ServiceError>) -> Result<(), ServiceError> {
        self.loading = false;
        self.value = result?;
        Ok(())
    }

    /// Local edit after a successful mutation (withdraw, confirm).
    pub fn update(&mut self, apply: impl FnOnce(&mut T)) {
        apply(&mut self.value);
    }
}
