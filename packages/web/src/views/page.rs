use dioxus::prelude::*;
use ui::{Header, SessionGate};

use crate::Route;

/// Layout for every route: session check, role-driven header, page body.
///
/// Keyed by path so the check runs again on every route change.
#[component]
pub fn Page() -> Element {
    let path = use_route::<Route>().to_string();

    rsx! {
        SessionGate {
            key: "{path}",
            path: path.clone(),
            Header { path: path.clone() }
            main {
                class: "page",
                Outlet::<Route> {}
            }
        }
    }
}
