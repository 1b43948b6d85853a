//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use tzm_core::Selection;

/// Shared application state for the timezone map.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Highlighted UTC offset. Written by the selector and by map clicks.
    pub selection: Signal<Selection>,
    /// Whether the map has fired `load` and its layers exist
    pub map_loaded: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with nothing selected and the map not yet loaded.
    pub fn new() -> Self {
        Self {
            selection: Signal::new(Selection::none()),
            map_loaded: Signal::new(false),
            error_msg: Signal::new(None),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
