use dioxus::prelude::*;
use ui::RoleSelectionView;

#[component]
pub fn RoleSelection() -> Element {
    rsx! {
        RoleSelectionView {}
    }
}
