//! Canned portal data served by the mock services.

use super::auth::MOCK_CANDIDATE_ID;
use super::types::{
    Allocation, AllocationStatus, Allotment, Application, ApplicationStatus, CompanyContact, DashboardStats,
    Internship, Recommendation,
};

pub const DASHBOARD_STATS: DashboardStats = DashboardStats {
    total_candidates: 1247,
    total_applications: 3891,
    allocations_completed: 892,
    pending_allocations: 355,
};

/// Stamp used for applications submitted through the mock.
pub const SUBMITTED_AT: &str = "2024-01-18T11:00:00Z";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|&item| item.to_owned()).collect()
}

pub fn internships() -> Vec<Internship> {
    vec![
        Internship {
            id: "INT001".to_owned(),
            company_name: "Tech Solutions India".to_owned(),
            job_title: "Software Development Intern".to_owned(),
            description: "Work on cutting-edge web applications using React and Node.js. Perfect for computer science \
                          students."
                .to_owned(),
            location: "Bangalore, Karnataka".to_owned(),
            duration: "6 months".to_owned(),
            stipend: 25_000,
            requirements: strings(&["React", "Node.js", "JavaScript"]),
            is_active: true,
        },
        Internship {
            id: "INT002".to_owned(),
            company_name: "Digital India Corp".to_owned(),
            job_title: "Data Analytics Intern".to_owned(),
            description: "Analyze government data to drive policy decisions. Experience with Python and SQL required."
                .to_owned(),
            location: "New Delhi".to_owned(),
            duration: "4 months".to_owned(),
            stipend: 22_000,
            requirements: strings(&["Python", "SQL"]),
            is_active: true,
        },
        Internship {
            id: "INT003".to_owned(),
            company_name: "Green Energy Solutions".to_owned(),
            job_title: "Research Intern".to_owned(),
            description: "Research renewable energy solutions for rural India. Environmental science background \
                          preferred."
                .to_owned(),
            location: "Mumbai, Maharashtra".to_owned(),
            duration: "5 months".to_owned(),
            stipend: 20_000,
            requirements: strings(&["Environmental Science", "Research Methods"]),
            is_active: true,
        },
        Internship {
            id: "INT004".to_owned(),
            company_name: "FinTech Innovations".to_owned(),
            job_title: "Marketing Intern".to_owned(),
            description: "Plan and run digital campaigns for consumer finance products.".to_owned(),
            location: "Pune, Maharashtra".to_owned(),
            duration: "3 months".to_owned(),
            stipend: 18_000,
            requirements: strings(&["Communication", "Social Media"]),
            is_active: true,
        },
    ]
}

pub fn find_internship(internship_id: &str) -> Option<Internship> {
    internships().into_iter().find(|internship| internship.id == internship_id)
}

pub fn recommendations() -> Vec<Recommendation> {
    let scored = [
        ("INT001", 92, &["Strong web development skills", "Preferred location: Bangalore"][..]),
        ("INT002", 87, &["Python and SQL experience"][..]),
        ("INT003", 78, &["Interest in sustainability"][..]),
    ];
    let catalog = internships();
    scored
        .into_iter()
        .filter_map(|(id, score, reasons)| {
            let internship = catalog.iter().find(|internship| internship.id == id)?.clone();
            Some(Recommendation { internship, match_score: score, match_reasons: strings(reasons) })
        })
        .collect()
}

pub fn applications(candidate_id: &str) -> Vec<Application> {
    let history = [
        ("1", "INT001", ApplicationStatus::Pending, "2024-01-15T10:30:00Z"),
        ("2", "INT002", ApplicationStatus::Reviewed, "2024-01-12T14:20:00Z"),
        ("3", "INT003", ApplicationStatus::Accepted, "2024-01-10T09:15:00Z"),
        ("4", "INT004", ApplicationStatus::Rejected, "2024-01-08T16:45:00Z"),
    ];
    let catalog = internships();
    history
        .into_iter()
        .filter_map(|(id, internship_id, status, applied_at)| {
            let internship = catalog.iter().find(|internship| internship.id == internship_id)?;
            Some(application_for(id, candidate_id, internship, status, applied_at))
        })
        .collect()
}

pub fn find_application(application_id: &str) -> Option<Application> {
    applications(MOCK_CANDIDATE_ID).into_iter().find(|application| application.id == application_id)
}

pub fn application_for(
    id: &str,
    candidate_id: &str,
    internship: &Internship,
    status: ApplicationStatus,
    applied_at: &str,
) -> Application {
    Application {
        id: id.to_owned(),
        candidate_id: candidate_id.to_owned(),
        internship_id: internship.id.clone(),
        company_name: internship.company_name.clone(),
        job_title: internship.job_title.clone(),
        status,
        applied_at: applied_at.to_owned(),
        location: internship.location.clone(),
        stipend: internship.stipend,
    }
}

pub const ALLOTMENT_ID: &str = "1";

pub fn allotment(candidate_id: &str) -> Allotment {
    Allotment {
        id: ALLOTMENT_ID.to_owned(),
        candidate_id: candidate_id.to_owned(),
        internship_id: "INT001".to_owned(),
        company_name: "Tech Solutions India".to_owned(),
        job_title: "Software Development Intern".to_owned(),
        status: AllocationStatus::Allocated,
        allocated_at: "2024-01-20T10:30:00Z".to_owned(),
        location: "Bangalore, Karnataka".to_owned(),
        duration: "6 months".to_owned(),
        stipend: 25_000,
        start_date: "2024-02-01".to_owned(),
        end_date: "2024-07-31".to_owned(),
        company_contact: CompanyContact {
            name: "Mr. Rajesh Kumar".to_owned(),
            email: "rajesh.kumar@techsolutions.in".to_owned(),
            phone: "+91 98765 43210".to_owned(),
        },
        description: "Work on cutting-edge web applications using React and Node.js. You will be part of a dynamic \
                      team working on government digitization projects."
            .to_owned(),
    }
}

pub fn allocations() -> Vec<Allocation> {
    let rows = [
        ("1", "CAND001", "Rahul Sharma", "INT001", AllocationStatus::Allocated),
        ("2", "CAND002", "Priya Patel", "INT002", AllocationStatus::Confirmed),
        ("3", "CAND003", "Amit Kumar", "INT003", AllocationStatus::Pending),
    ];
    let catalog = internships();
    rows.into_iter()
        .filter_map(|(id, candidate_id, candidate_name, internship_id, status)| {
            let internship = catalog.iter().find(|internship| internship.id == internship_id)?;
            Some(Allocation {
                id: id.to_owned(),
                candidate_id: candidate_id.to_owned(),
                candidate_name: candidate_name.to_owned(),
                company_name: internship.company_name.clone(),
                job_title: internship.job_title.clone(),
                status,
            })
        })
        .collect()
}
