//! Blocking browser dialogs and hard navigation.

/// What the views need from the hosting page besides rendering.
pub trait Shell {
    /// Blocking, user-visible notification.
    fn alert(&self, message: &str);
    /// Blocking yes/no question.
    fn confirm(&self, message: &str) -> bool;
    /// Full page navigation.
    fn navigate(&self, url: &str);
}

/// [`Shell`] backed by `window.alert`, `window.confirm` and `window.location`.
///
/// Native builds have no window: dialogs are logged, confirmations are
/// declined and navigation is a no-op.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserShell;

impl Shell for BrowserShell {
    fn alert(&self, message: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::info!("alert: {message}");
        }
    }

    fn confirm(&self, message: &str) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::window()
                .and_then(|window| window.confirm_with_message(message).ok())
                .unwrap_or(false)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::info!("confirm (declined): {message}");
            false
        }
    }

    fn navigate(&self, url: &str) {
        tracing::debug!("navigating to {url}");
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(url) {
                    tracing::error!("Failed to navigate to {url}: {e:?}");
                }
            }
        }
    }
}
