mod page;
pub use page::Page;

mod role_selection;
pub use role_selection::RoleSelection;

mod admin;
pub use admin::AdminDashboard;

mod doctor;
pub use doctor::DoctorDashboard;

mod patient;
pub use patient::{LoggedPatientHome, PatientAppointments, PatientDashboard};
