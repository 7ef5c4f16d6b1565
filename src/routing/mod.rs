//! Route table: every navigable path and the roles allowed to see it.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app` registers views for these paths; `guard` decides per navigation
//! whether the current session may render them. Keeping the table here means
//! the navigation menu, the router, and the guard agree on one list.

pub mod guard;


use crate::state::session::Role;

pub mod paths {
    pub const ROOT: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const DASHBOARD: &str = "/dashboard";
    pub const APPLICATIONS: &str = "/applications";
    pub const ALLOTMENT: &str = "/allotment";
    pub const ADMIN: &str = "/admin";
    pub const ADMIN_APPLICANTS: &str = "/admin/applicants";
    pub const ADMIN_ALLOCATIONS: &str = "/admin/allocations";
}

const CANDIDATE_ONLY: &[Role] = &[Role::Candidate];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// A navigable path and who may render it. Empty `allowed` means public.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteSpec {
    pub path: &'static str,
    pub allowed: &'static [Role],
}

impl RouteSpec {
    pub fn is_public(&self) -> bool {
        self.allowed.is_empty()
    }

    pub fn permits(&self, role: Role) -> bool {
        self.allowed.contains(&role)
    }
}

pub const ROUTES: &[RouteSpec] = &[
    RouteSpec { path: paths::LOGIN, allowed: &[] },
    RouteSpec { path: paths::DASHBOARD, allowed: CANDIDATE_ONLY },
    RouteSpec { path: paths::APPLICATIONS, allowed: CANDIDATE_ONLY },
    RouteSpec { path: paths::ALLOTMENT, allowed: CANDIDATE_ONLY },
    RouteSpec { path: paths::ADMIN, allowed: ADMIN_ONLY },
    RouteSpec { path: paths::ADMIN_APPLICANTS, allowed: ADMIN_ONLY },
    RouteSpec { path: paths::ADMIN_ALLOCATIONS, allowed: ADMIN_ONLY },
];

/// Look up a path, ignoring one trailing slash. Unknown paths return `None`.
pub fn route_for(path: &str) -> Option<&'static RouteSpec> {
    let normalized = match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    };
    ROUTES.iter().find(|route| route.path == normalized)
}

/// Where a freshly signed-in identity of `role` lands.
pub fn landing_path(role: Role) -> &'static str {
    match role {
        Role::Admin => paths::ADMIN,
        Role::Candidate => paths::DASHBOARD,
    }
}

/// Navigation menu entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    /// Highlight only on an exact path match.
    pub exact: bool,
}

const CANDIDATE_NAV: &[NavItem] = &[
    NavItem { path: paths::ROOT, label: "Home", exact: true },
    NavItem { path: paths::DASHBOARD, label: "Dashboard", exact: false },
    NavItem { path: paths::APPLICATIONS, label: "My Applications", exact: false },
    NavItem { path: paths::ALLOTMENT, label: "Allotment Status", exact: false },
];

const ADMIN_NAV: &[NavItem] = &[
    NavItem { path: paths::ADMIN, label: "Dashboard", exact: true },
    NavItem { path: paths::ADMIN_APPLICANTS, label: "Applicants", exact: false },
    NavItem { path: paths::ADMIN_ALLOCATIONS, label: "Allocations", exact: false },
];

/// Menu entries for `role`.
pub fn nav_items(role: Role) -> &'static [NavItem] {
    match role {
        Role::Admin => ADMIN_NAV,
        Role::Candidate => CANDIDATE_NAV,
    }
}

impl NavItem {
    /// Whether this entry should be highlighted for `current` path.
    pub fn is_active(&self, current: &str) -> bool {
        if self.exact {
            return current == self.path;
        }
        current == self.path
            || current
                .strip_prefix(self.path)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}
