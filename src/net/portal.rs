//! Portal data services and their mocked implementation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages reach the portal only through [`PortalService`]. Each call is
//! request-then-response with no retry; callers keep their previous state when
//! a call fails and surface the error as a notice.

#[cfg(test)]
#[path = "portal_test.rs"]
mod portal_test;

use std::future::Future;
use std::time::Duration;

use super::fixtures;
use super::types::{Allocation, Allotment, Application, ApplicationStatus, DashboardStats, Recommendation};
use crate::config::PortalConfig;
use crate::util::timer;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("service unavailable: {0}")]
    Unavailable(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("request rejected: {0}")]
    Rejected(String),
}

/// Candidate and admin operations against the portal backend.
pub trait PortalService {
    fn recommendations(&self, candidate_id: &str) -> impl Future<Output = Result<Vec<Recommendation>, ServiceError>>;

    fn submit_application(
        &self,
        candidate_id: &str,
        internship_id: &str,
    ) -> impl Future<Output = Result<Application, ServiceError>>;

    fn applications(&self, candidate_id: &str) -> impl Future<Output = Result<Vec<Application>, ServiceError>>;

    fn withdraw_application(&self, application_id: &str) -> impl Future<Output = Result<(), ServiceError>>;

    /// `Ok(None)` means no internship has been allotted yet.
    fn allotment(&self, candidate_id: &str) -> impl Future<Output = Result<Option<Allotment>, ServiceError>>;

    fn confirm_allotment(&self, allotment_id: &str) -> impl Future<Output = Result<(), ServiceError>>;

    fn run_allocation(&self) -> impl Future<Output = Result<Vec<Allocation>, ServiceError>>;

    fn dashboard_stats(&self) -> impl Future<Output = Result<DashboardStats, ServiceError>>;
}

/// Fixture-backed service with simulated latency.
#[derive(Clone, Debug)]
pub struct MockPortalService {
    request_latency: Duration,
    recommendations_latency: Duration,
    allocation_latency: Duration,
    allotment_available: bool,
}

impl MockPortalService {
    pub fn from_config(config: &PortalConfig) -> Self {
        Self {
            request_latency: config.request_latency(),
            recommendations_latency: config.recommendations_latency(),
            allocation_latency: config.allocation_latency(),
            allotment_available: config.allotment_available,
        }
    }
}

fn require_candidate(candidate_id: &str) -> Result<&str, ServiceError> {
    let trimmed = candidate_id.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::Rejected("candidate id is required".to_owned()));
    }
    Ok(trimmed)
}

impl PortalService for MockPortalService {
    async fn recommendations(&self, candidate_id: &str) -> Result<Vec<Recommendation>, ServiceError> {
        require_candidate(candidate_id)?;
        timer::sleep(self.recommendations_latency).await;
        Ok(fixtures::recommendations())
    }

    async fn submit_application(&self, candidate_id: &str, internship_id: &str) -> Result<Application, ServiceError> {
        let candidate_id = require_candidate(candidate_id)?;
        timer::sleep(self.request_latency).await;
        let internship = fixtures::find_internship(internship_id)
            .ok_or_else(|| ServiceError::NotFound(format!("internship {internship_id}")))?;
        if !internship.is_active {
            return Err(ServiceError::Rejected(format!("{} is no longer accepting applications", internship.id)));
        }
        let id = uuid::Uuid::new_v4().to_string();
        Ok(fixtures::application_for(&id, candidate_id, &internship, ApplicationStatus::Pending, fixtures::SUBMITTED_AT))
    }

    async fn applications(&self, candidate_id: &str) -> Result<Vec<Application>, ServiceError> {
        let candidate_id = require_candidate(candidate_id)?;
        timer::sleep(self.request_latency).await;
        Ok(fixtures::applications(candidate_id))
    }

    async fn withdraw_application(&self, application_id: &str) -> Result<(), ServiceError> {
        timer::sleep(self.request_latency).await;
        let application = fixtures::find_application(application_id)
            .ok_or_else(|| ServiceError::NotFound(format!("application {application_id}")))?;
        if !application.status.can_withdraw() {
            return Err(ServiceError::Rejected(format!("application is {}", application.status.label())));
        }
        Ok(())
    }

    async fn allotment(&self, candidate_id: &str) -> Result<Option<Allotment>, ServiceError> {
        let candidate_id = require_candidate(candidate_id)?;
        timer::sleep(self.request_latency).await;
        Ok(self.allotment_available.then(|| fixtures::allotment(candidate_id)))
    }

    async fn confirm_allotment(&self, allotment_id: &str) -> Result<(), ServiceError> {
        timer::sleep(self.request_latency).await;
        if !self.allotment_available || allotment_id != fixtures::ALLOTMENT_ID {
            return Err(ServiceError::NotFound(format!("allotment {allotment_id}")));
        }
        Ok(())
    }

    async fn run_allocation(&self) -> Result<Vec<Allocation>, ServiceError> {
        timer::sleep(self.allocation_latency).await;
        Ok(fixtures::allocations())
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, ServiceError> {
        Ok(fixtures::DASHBOARD_STATS)
    }
}
