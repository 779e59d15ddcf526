//! Modal state and the capabilities views receive through context.

use api::{Doctor, Patient};
use dioxus::prelude::*;
use store::Role;

/// The {doctor, patient} pair a booking overlay is bound to.
#[derive(Clone, Debug, PartialEq)]
pub struct BookingTarget {
    pub doctor: Doctor,
    pub patient: Patient,
}

/// The appointment a prescription is written for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrescriptionTarget {
    pub appointment_id: i64,
    pub patient_name: String,
}

/// Every modal surface the app can show. At most one is open at a time.
#[derive(Clone, Debug, PartialEq)]
pub enum Modal {
    AdminLogin,
    DoctorLogin,
    PatientLogin,
    PatientSignup,
    AddDoctor,
    Booking(Box<BookingTarget>),
    Prescription(PrescriptionTarget),
}

/// Opens and closes modals.
pub trait ModalController {
    fn open(&self, modal: Modal);
    fn close(&self);
}

/// Signal-backed [`ModalController`] provided by [`crate::ClinicProvider`].
#[derive(Clone, Copy, PartialEq)]
pub struct Modals {
    current: Signal<Option<Modal>>,
}

impl Modals {
    pub(crate) fn new(current: Signal<Option<Modal>>) -> Self {
        Self { current }
    }

    /// The open modal, subscribing the caller to changes.
    pub fn current(&self) -> Option<Modal> {
        (self.current)()
    }
}

impl ModalController for Modals {
    fn open(&self, modal: Modal) {
        let mut current = self.current;
        current.set(Some(modal));
    }

    fn close(&self) {
        let mut current = self.current;
        current.set(None);
    }
}

pub fn use_modals() -> Modals {
    use_context::<Modals>()
}

/// In-page role-selection hook. Auth forms prefer it over navigating to a
/// dashboard URL.
#[derive(Clone, Copy, PartialEq)]
pub struct RoleSelector(pub Callback<Role>);

/// Where the role selection page registers its [`RoleSelector`] while it is
/// mounted. Modals render above the router, so they cannot see page context.
#[derive(Clone, Copy, PartialEq)]
pub struct RoleSelectorSlot(Signal<Option<RoleSelector>>);

impl RoleSelectorSlot {
    pub(crate) fn new(slot: Signal<Option<RoleSelector>>) -> Self {
        Self(slot)
    }

    pub fn get(&self) -> Option<RoleSelector> {
        (self.0)()
    }

    fn set(&self, selector: Option<RoleSelector>) {
        let mut slot = self.0;
        slot.set(selector);
    }
}

pub fn use_role_selector() -> Option<RoleSelector> {
    try_use_context::<RoleSelectorSlot>().and_then(|slot| slot.get())
}

/// Register `select` as the role selector for as long as the caller is mounted.
pub fn use_register_role_selector(select: Callback<Role>) {
    let slot = use_context::<RoleSelectorSlot>();
    use_hook(move || slot.set(Some(RoleSelector(select))));
    use_drop(move || slot.set(None));
}

/// Bumped to make the doctor listing reload the full roster.
#[derive(Clone, Copy, PartialEq)]
pub struct DoctorsReload(Signal<u64>);

impl DoctorsReload {
    pub(crate) fn new(generation: Signal<u64>) -> Self {
        Self(generation)
    }

    /// Current generation, subscribing the caller.
    pub fn generation(&self) -> u64 {
        (self.0)()
    }

    pub fn bump(&self) {
        let mut generation = self.0;
        *generation.write() += 1;
    }
}

pub fn use_doctors_reload() -> DoctorsReload {
    use_context::<DoctorsReload>()
}
