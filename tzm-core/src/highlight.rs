//! Keeps the `timezone-fill` opacity in step with the selection.

use log::{debug, warn};
use serde_json::{json, Value};

use crate::host::MapHost;
use crate::selection::Selection;
use crate::{TIMEZONE_LAYER_ID, UTC_OFFSET_PROPERTY};

/// Paint property rewritten on every selection change.
pub const FILL_OPACITY: &str = "fill-opacity";

/// Opacity of the polygons matching the selected offset.
pub const HIGHLIGHT_OPACITY: f64 = 0.5;

/// MapLibre expression showing only polygons whose `UTC_offset` equals the
/// selection. With nothing selected the comparison is against `""`, which no
/// polygon carries, and the match branch is 0 as well.
pub fn highlight_expression(selection: &Selection) -> Value {
    let matched_opacity = if selection.is_none() {
        0.0
    } else {
        HIGHLIGHT_OPACITY
    };
    json!([
        "case",
        ["==", ["get", UTC_OFFSET_PROPERTY], selection.as_filter_value()],
        matched_opacity,
        0
    ])
}

#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome {
    /// The expression was written to the map.
    Applied(Value),
    /// Nothing was written: the map or the layer is not ready, or the write
    /// failed.
    Deferred,
}

/// Applies [`highlight_expression`] to the map.
///
/// There is no debouncing: each call writes immediately, so successive
/// selections are applied in order and the last one wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighlightSynchronizer;

impl HighlightSynchronizer {
    pub fn new() -> Self {
        Self
    }

    pub fn sync<H: MapHost + ?Sized>(&self, host: &H, selection: &Selection) -> SyncOutcome {
        if !host.is_style_loaded() || !host.has_layer(TIMEZONE_LAYER_ID) {
            debug!("map not ready, deferring highlight of '{}'", selection.as_filter_value());
            return SyncOutcome::Deferred;
        }

        let expression = highlight_expression(selection);
        match host.set_paint_property(TIMEZONE_LAYER_ID, FILL_OPACITY, &expression) {
            Ok(()) => {
                debug!("highlighted timezone '{}'", selection.as_filter_value());
                SyncOutcome::Applied(expression)
            }
            Err(e) => {
                warn!("failed to update {FILL_OPACITY} on {TIMEZONE_LAYER_ID}: {e:#}");
                SyncOutcome::Deferred
            }
        }
    }
}
