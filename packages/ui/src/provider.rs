//! App-wide context: backend client, configuration and modal state.

use api::HttpBackend;
use dioxus::prelude::*;
use store::ClinicConfig;

use crate::auth_forms::ModalHost;
use crate::modal::{DoctorsReload, Modals, RoleSelectorSlot};

/// Provides the shared context every clinic view expects, and hosts the
/// single modal slot.
///
/// Wrap the router with this component.
#[component]
pub fn ClinicProvider(config: ClinicConfig, children: Element) -> Element {
    let backend = use_hook(|| match HttpBackend::new(&config.api.base_url) {
        Ok(backend) => backend,
        Err(e) => {
            tracing::error!("Invalid backend URL {}: {e}", config.api.base_url);
            HttpBackend::localhost()
        }
    });
    use_context_provider(|| backend);
    use_context_provider(|| config.clone());

    let current = use_signal(|| None);
    use_context_provider(|| Modals::new(current));
    let generation = use_signal(|| 0u64);
    use_context_provider(|| DoctorsReload::new(generation));
    let selector = use_signal(|| None);
    use_context_provider(|| RoleSelectorSlot::new(selector));

    rsx! {
        {children}
        ModalHost {}
    }
}

pub fn use_backend() -> HttpBackend {
    use_context::<HttpBackend>()
}

pub fn use_config() -> ClinicConfig {
    use_context::<ClinicConfig>()
}
