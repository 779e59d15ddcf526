use dioxus::prelude::*;
use ui::{is_stored_token, session_store, DoctorListing};

/// Admin landing page: the roster with delete actions.
///
/// The token in the path mirrors the stored session; requests always use
/// the stored one, so a stale path token is only logged.
#[component]
pub fn AdminDashboard(token: String) -> Element {
    use_hook(|| {
        if !is_stored_token(&session_store(), &token) {
            tracing::warn!("admin dashboard opened with a token that is not the stored one");
        }
    });

    rsx! {
        h2 { class: "page-title", "Doctors" }
        DoctorListing {}
    }
}
