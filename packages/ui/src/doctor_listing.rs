//! Doctor roster with name/time/specialty filtering.
//!
//! Loading the full roster and filtering fail differently on purpose: a
//! roster failure is logged and rendered as an empty roster, while a filter
//! failure interrupts the user and leaves the current cards in place.

use api::{ClinicBackend, Doctor, DoctorFilter};
use dioxus::prelude::*;

use crate::doctor_card::DoctorCard;
use crate::icons::FaMagnifyingGlass;
use crate::modal::use_doctors_reload;
use crate::provider::use_backend;
use crate::shell::{BrowserShell, Shell};
use crate::Icon;

pub const EMPTY_ROSTER_MESSAGE: &str = "No doctors available.";
pub const NO_MATCHES_MESSAGE: &str = "No doctors found with the given filters.";
pub const FILTER_FAILED_MESSAGE: &str = "An error occurred while filtering doctors.";

const SPECIALTIES: &[&str] = &[
    "Cardiologist",
    "Dermatologist",
    "Neurologist",
    "Pediatrician",
    "Orthopedic",
    "Gynecologist",
    "Psychiatrist",
    "Dentist",
    "Ophthalmologist",
    "ENT",
];

#[derive(Clone, Debug, PartialEq)]
pub enum ListingState {
    Loading,
    /// The full roster.
    Doctors(Vec<Doctor>),
    /// The result of a filter.
    Matches(Vec<Doctor>),
    EmptyRoster,
    NoMatches,
}

impl ListingState {
    /// Placeholder text, for every state that shows no cards.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ListingState::Loading | ListingState::Doctors(_) | ListingState::Matches(_) => None,
            ListingState::EmptyRoster => Some(EMPTY_ROSTER_MESSAGE),
            ListingState::NoMatches => Some(NO_MATCHES_MESSAGE),
        }
    }

    /// Drop one card without reloading. An emptied list keeps the
    /// placeholder of where it came from.
    pub fn remove(&mut self, doctor_id: i64) {
        let emptied = match self {
            ListingState::Doctors(doctors) => {
                doctors.retain(|d| d.id != doctor_id);
                doctors.is_empty().then_some(ListingState::EmptyRoster)
            }
            ListingState::Matches(doctors) => {
                doctors.retain(|d| d.id != doctor_id);
                doctors.is_empty().then_some(ListingState::NoMatches)
            }
            _ => None,
        };
        if let Some(next) = emptied {
            *self = next;
        }
    }
}

/// Fetch the full roster. Failures degrade to an empty roster.
pub async fn load_all<B: ClinicBackend>(backend: &B) -> ListingState {
    match backend.list_doctors().await {
        Ok(doctors) if doctors.is_empty() => ListingState::EmptyRoster,
        Ok(doctors) => ListingState::Doctors(doctors),
        Err(e) => {
            tracing::error!("Failed to load doctors: {e}");
            ListingState::EmptyRoster
        }
    }
}

/// Run a filter. `None` means the request failed and the current view stays.
///
/// An empty result is always "no matches", even when every criterion was
/// cleared.
pub async fn apply_filter<B: ClinicBackend>(
    backend: &B,
    shell: &impl Shell,
    filter: &DoctorFilter,
) -> Option<ListingState> {
    match backend.filter_doctors(filter).await {
        Ok(doctors) if doctors.is_empty() => Some(ListingState::NoMatches),
        Ok(doctors) => Some(ListingState::Matches(doctors)),
        Err(e) => {
            tracing::error!("Failed to filter doctors: {e}");
            shell.alert(FILTER_FAILED_MESSAGE);
            None
        }
    }
}

/// Search bar, filters and the doctor cards.
#[component]
pub fn DoctorListing() -> Element {
    let backend = use_backend();
    let reload = use_doctors_reload();
    let mut state = use_signal(|| ListingState::Loading);
    let mut name = use_signal(String::new);
    let mut time = use_signal(String::new);
    let mut specialty = use_signal(String::new);

    // Full roster on mount and after every add-doctor.
    let roster_backend = backend.clone();
    let _ = use_resource(move || {
        let backend = roster_backend.clone();
        let generation = reload.generation();
        async move {
            tracing::debug!("loading doctor roster (generation {generation})");
            state.set(load_all(&backend).await);
        }
    });

    let run_filter = use_callback(move |()| {
        let backend = backend.clone();
        let filter = DoctorFilter::new(&name(), &time(), &specialty());
        spawn(async move {
            if let Some(next) = apply_filter(&backend, &BrowserShell, &filter).await {
                state.set(next);
            }
        });
    });

    let current = state();

    rsx! {
        div {
            class: "filter-bar",
            div {
                class: "search-field",
                Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                input {
                    id: "searchBar",
                    r#type: "text",
                    placeholder: "Search by doctor name",
                    value: name(),
                    oninput: move |evt: FormEvent| {
                        name.set(evt.value());
                        run_filter.call(());
                    },
                }
            }
            select {
                id: "filterTime",
                value: time(),
                onchange: move |evt: FormEvent| {
                    time.set(evt.value());
                    run_filter.call(());
                },
                option { value: "", "Sort by time" }
                option { value: "AM", "AM" }
                option { value: "PM", "PM" }
            }
            select {
                id: "filterSpecialty",
                value: specialty(),
                onchange: move |evt: FormEvent| {
                    specialty.set(evt.value());
                    run_filter.call(());
                },
                option { value: "", "Filter by specialty" }
                for s in SPECIALTIES {
                    option { key: "{s}", value: "{s}", "{s}" }
                }
            }
        }
        div {
            id: "content",
            class: "doctor-grid",
            match current {
                ListingState::Loading => rsx! { p { class: "muted", "Loading doctors..." } },
                ListingState::Doctors(doctors) | ListingState::Matches(doctors) => rsx! {
                    for doctor in doctors {
                        DoctorCard {
                            key: "{doctor.id}",
                            doctor: doctor.clone(),
                            on_removed: move |id| state.write().remove(id),
                        }
                    }
                },
                other => rsx! { p { "{other.message().unwrap_or_default()}" } },
            }
        }
    }
}
