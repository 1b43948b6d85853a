//! The map engine as seen from the rest of the crate.
//!
//! The browser build implements [`MapHost`] on top of MapLibre; tests use an
//! in-memory recorder. Layer references are only valid once the style has
//! loaded, so callers check [`MapHost::is_style_loaded`] before writing.

use serde_json::Value;

/// Mouse cursor shown over the map canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// Pointer hand, shown while hovering a clickable polygon.
    Pointer,
    /// Whatever the map normally shows (CSS value `""`).
    Default,
}

impl Cursor {
    pub fn as_css(self) -> &'static str {
        match self {
            Cursor::Pointer => "pointer",
            Cursor::Default => "",
        }
    }
}

pub trait MapHost {
    /// True once the style document and all its layers are available.
    fn is_style_loaded(&self) -> bool;

    fn has_layer(&self, layer_id: &str) -> bool;

    fn has_source(&self, source_id: &str) -> bool;

    /// Register a GeoJSON source holding `data` (a FeatureCollection).
    fn add_geojson_source(&self, source_id: &str, data: &Value) -> anyhow::Result<()>;

    /// Register a layer from a style-spec layer object.
    fn add_layer(&self, layer: &Value) -> anyhow::Result<()>;

    fn set_paint_property(&self, layer_id: &str, property: &str, value: &Value) -> anyhow::Result<()>;

    fn set_cursor(&self, cursor: Cursor);
}
