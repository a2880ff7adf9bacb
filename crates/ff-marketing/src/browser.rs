//! Thin wrappers over the browser window
//!
//! Everything here touches `web_sys` and must only run inside event
//! handlers or effects, never while rendering on the server.

use ff_core::{ContactAction, PreferencesStore, SectionRect};

/// `localStorage`-backed preferences
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl PreferencesStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        // Private browsing can refuse writes; prefill is a convenience only
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

/// Carry out the navigation part of a contact action.
///
/// Returns false for actions the page renders itself.
pub fn perform(action: &ContactAction) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    match action {
        ContactAction::Redirect(url) => {
            if let Err(e) = window.location().set_href(url) {
                tracing::warn!("redirect to {} failed: {:?}", url, e);
            }
            true
        }
        ContactAction::OpenTab(url) => {
            if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                tracing::warn!("opening {} failed: {:?}", url, e);
            }
            true
        }
        ContactAction::ShowSuccess(_) | ContactAction::ShowError(_) => false,
    }
}

/// Current vertical scroll offset
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Document-absolute boxes for the sections that exist on the page
pub fn section_rects(ids: &[&str]) -> Vec<SectionRect> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let offset = scroll_y();
    ids.iter()
        .filter_map(|id| {
            let rect = document.get_element_by_id(id)?.get_bounding_client_rect();
            Some(SectionRect::new(*id, rect.top() + offset, rect.height()))
        })
        .collect()
}

/// Absolute RFQ endpoint for the current origin
pub fn endpoint_url(endpoint: &str) -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    join_endpoint(&origin, endpoint)
}

pub(crate) fn join_endpoint(origin: &str, endpoint: &str) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        endpoint.to_string()
    } else {
        format!(
            "{}/{}",
            origin.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }
}
