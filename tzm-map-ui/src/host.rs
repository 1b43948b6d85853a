//! [`MapHost`] on top of a live MapLibre map.

use std::cell::Cell;
use std::rc::Rc;

use log::warn;
use serde_json::{json, Value};
use tzm_core::{Cursor, MapHost};

use crate::js_bridge::{js_error, to_js, MaplibreMap};

/// Cheaply cloneable handle to a MapLibre map.
///
/// `loaded` is set by the map's `load` handler; until then every layer
/// reference is treated as missing.
#[derive(Clone)]
pub struct MapLibreHost {
    map: MaplibreMap,
    loaded: Rc<Cell<bool>>,
}

impl MapLibreHost {
    pub fn new(map: MaplibreMap) -> Self {
        Self {
            map,
            loaded: Rc::new(Cell::new(false)),
        }
    }

    pub fn map(&self) -> &MaplibreMap {
        &self.map
    }

    pub fn mark_loaded(&self) {
        self.loaded.set(true);
    }
}

impl MapHost for MapLibreHost {
    fn is_style_loaded(&self) -> bool {
        self.loaded.get()
    }

    fn has_layer(&self, layer_id: &str) -> bool {
        self.is_style_loaded() && !self.map.get_layer(layer_id).is_undefined()
    }

    fn has_source(&self, source_id: &str) -> bool {
        self.is_style_loaded() && !self.map.get_source(source_id).is_undefined()
    }

    fn add_geojson_source(&self, source_id: &str, data: &Value) -> anyhow::Result<()> {
        let source = to_js(&json!({ "type": "geojson", "data": data }))?;
        self.map
            .add_source(source_id, &source)
            .map_err(|e| js_error("addSource", e))
    }

    fn add_layer(&self, layer: &Value) -> anyhow::Result<()> {
        let layer = to_js(layer)?;
        self.map.add_layer(&layer).map_err(|e| js_error("addLayer", e))
    }

    fn set_paint_property(&self, layer_id: &str, property: &str, value: &Value) -> anyhow::Result<()> {
        let value = to_js(value)?;
        self.map
            .set_paint_property(layer_id, property, &value)
            .map_err(|e| js_error("setPaintProperty", e))
    }

    fn set_cursor(&self, cursor: Cursor) {
        let canvas = self.map.get_canvas();
        if let Err(e) = canvas.style().set_property("cursor", cursor.as_css()) {
            warn!("failed to set map cursor: {e:?}");
        }
    }
}
