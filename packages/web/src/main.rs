use dioxus::prelude::*;

use store::ClinicConfig;
use ui::ClinicProvider;
use views::{
    AdminDashboard, DoctorDashboard, LoggedPatientHome, Page, PatientAppointments,
    PatientDashboard, RoleSelection,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Page)]
        #[route("/")]
        RoleSelection {},
        #[route("/adminDashboard/:token")]
        AdminDashboard { token: String },
        #[route("/doctorDashboard/:token")]
        DoctorDashboard { token: String },
        #[route("/patient")]
        PatientDashboard {},
        #[route("/patient/home")]
        LoggedPatientHome {},
        #[route("/patient/appointments")]
        PatientAppointments {},
}

const CLINIC_TOML: &str = include_str!("../clinic.toml");

fn main() {
    dioxus::launch(App);
}

/// The embedded `clinic.toml`, or the defaults if it does not parse.
fn load_config() -> ClinicConfig {
    match ClinicConfig::from_toml(CLINIC_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid {}: {e}", ClinicConfig::filename());
            ClinicConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::CLINIC_CSS }
        ClinicProvider {
            config,
            Router::<Route> {}
        }
    }
}
