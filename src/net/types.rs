//! Portal records exchanged with the (mocked) portal services.
//!
//! DESIGN
//! ======
//! Field names serialize in camelCase so a real JSON backend can be dropped in
//! behind `PortalService` without reshaping these types. Status enums carry
//! their display labels so pages and badges stay consistent.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An internship opening.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Internship {
    /// Opening identifier (e.g. `"INT001"`).
    pub id: String,
    pub company_name: String,
    pub job_title: String,
    pub description: String,
    /// City and state.
    pub location: String,
    /// Human-readable length, e.g. `"6 months"`.
    pub duration: String,
    /// Monthly stipend in rupees.
    pub stipend: u32,
    pub requirements: Vec<String>,
    pub is_active: bool,
}

/// Quality bucket for a recommendation's match score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchTier {
    Excellent,
    Good,
    Fair,
}

impl MatchTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            85.. => Self::Excellent,
            70..=84 => Self::Good,
            _ => Self::Fair,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent Match",
            Self::Good => "Good Match",
            Self::Fair => "Fair Match",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Excellent => "match--excellent",
            Self::Good => "match--good",
            Self::Fair => "match--fair",
        }
    }
}

/// A ranked internship suggestion for one candidate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub internship: Internship,
    /// 0..=100.
    pub match_score: u8,
    pub match_reasons: Vec<String>,
}

impl Recommendation {
    pub fn tier(&self) -> MatchTier {
        MatchTier::from_score(self.match_score)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Reviewed,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending Review",
            Self::Reviewed => "Under Review",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Pending => "badge badge--outline",
            Self::Reviewed => "badge badge--secondary",
            Self::Accepted => "badge badge--success",
            Self::Rejected => "badge badge--destructive",
        }
    }

    /// Only applications nobody has looked at yet can be withdrawn.
    pub fn can_withdraw(self) -> bool {
        self == Self::Pending
    }
}

/// A candidate's application to one internship.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub candidate_id: String,
    pub internship_id: String,
    pub company_name: String,
    pub job_title: String,
    pub status: ApplicationStatus,
    /// RFC 3339 timestamp.
    pub applied_at: String,
    pub location: String,
    pub stipend: u32,
}

/// Per-status tally of an application list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApplicationCounts {
    pub total: usize,
    pub pending: usize,
    pub reviewed: usize,
    pub accepted: usize,
    pub rejected: usize,
}

impl ApplicationCounts {
    pub fn tally(applications: &[Application]) -> Self {
        applications.iter().fold(Self { total: applications.len(), ..Self::default() }, |mut counts, app| {
            match app.status {
                ApplicationStatus::Pending => counts.pending += 1,
                ApplicationStatus::Reviewed => counts.reviewed += 1,
                ApplicationStatus::Accepted => counts.accepted += 1,
                ApplicationStatus::Rejected => counts.rejected += 1,
            }
            counts
        })
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Outcome of the allocation run for one candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllocationStatus {
    Allocated,
    Confirmed,
    Pending,
}

impl AllocationStatus {
    /// Short label for the admin results table.
    pub fn label(self) -> &'static str {
        match self {
            Self::Allocated => "Allocated",
            Self::Confirmed => "Confirmed",
            Self::Pending => "Pending",
        }
    }

    /// Longer label shown to the candidate.
    pub fn candidate_label(self) -> &'static str {
        match self {
            Self::Allocated => "Allocated - Pending Confirmation",
            Self::Confirmed => "Confirmed",
            Self::Pending => "Pending Allocation",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Allocated => "badge badge--secondary",
            Self::Confirmed => "badge badge--success",
            Self::Pending => "badge badge--outline",
        }
    }

    /// An allocation awaits the candidate's confirmation.
    pub fn can_confirm(self) -> bool {
        self == Self::Allocated
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyContact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// The internship a candidate has been allotted, with joining details.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allotment {
    pub id: String,
    pub candidate_id: String,
    pub internship_id: String,
    pub company_name: String,
    pub job_title: String,
    pub status: AllocationStatus,
    pub allocated_at: String,
    pub location: String,
    pub duration: String,
    pub stipend: u32,
    /// `YYYY-MM-DD`.
    pub start_date: String,
    /// `YYYY-MM-DD`.
    pub end_date: String,
    pub company_contact: CompanyContact,
    pub description: String,
}

/// One row of the admin allocation results.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub id: String,
    pub candidate_id: String,
    pub candidate_name: String,
    pub company_name: String,
    pub job_title: String,
    pub status: AllocationStatus,
}

/// Headline numbers for the admin dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_candidates: u32,
    pub total_applications: u32,
    pub allocations_completed: u32,
    pub pending_allocations: u32,
}
