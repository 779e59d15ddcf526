//! Navigation targets shared by every view.

use store::Role;

/// Role selection; also the "reset" state that drops any stored role.
pub const ROOT: &str = "/";
/// Anonymous patient landing page; destination of a patient logout.
pub const PATIENT_DASHBOARD: &str = "/patient";
/// Logged-in patient landing page.
pub const LOGGED_PATIENT_HOME: &str = "/patient/home";
/// Logged-in patient's own appointments.
pub const PATIENT_APPOINTMENTS: &str = "/patient/appointments";

/// Shown before forcing an invalid session back to [`ROOT`].
pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired or invalid login. Please log in again.";

/// Treat `/`, an empty path and `/index.html` as the site root.
pub fn is_root_path(path: &str) -> bool {
    path.is_empty() || path == "/" || path.ends_with("/index.html")
}

/// Landing page for a role. Staff dashboards carry the token in the path.
pub fn dashboard_url(role: Role, token: &str) -> String {
    match role {
        Role::Admin => format!("/adminDashboard/{token}"),
        Role::Doctor => format!("/doctorDashboard/{token}"),
        Role::LoggedPatient => LOGGED_PATIENT_HOME.to_string(),
        Role::Patient => PATIENT_DASHBOARD.to_string(),
        Role::None => ROOT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_paths() {
        assert!(is_root_path("/"));
        assert!(is_root_path(""));
        assert!(is_root_path("/index.html"));
        assert!(!is_root_path("/patient"));
        assert!(!is_root_path("/adminDashboard/abc"));
    }

    #[test]
    fn test_dashboard_urls() {
        assert_eq!(dashboard_url(Role::Admin, "t1"), "/adminDashboard/t1");
        assert_eq!(dashboard_url(Role::Doctor, "t2"), "/doctorDashboard/t2");
        assert_eq!(dashboard_url(Role::LoggedPatient, "t3"), LOGGED_PATIENT_HOME);
        assert_eq!(dashboard_url(Role::Patient, ""), PATIENT_DASHBOARD);
        assert_eq!(dashboard_url(Role::None, ""), ROOT);
    }
}
