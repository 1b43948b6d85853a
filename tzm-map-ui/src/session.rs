//! One MapLibre map and everything attached to it.

use log::info;
use tzm_core::config::{MapConfig, TILE_PROTOCOL};
use tzm_core::UtcOffset;
use wasm_bindgen::prelude::*;

use crate::host::MapLibreHost;
use crate::js_bridge::{self, to_js, MaplibreMap, NavigationControl};
use crate::listeners::LayerListeners;

/// Owns a map instance. Dropping the session detaches the layer listeners
/// and then removes the map.
pub struct MapSession {
    host: MapLibreHost,
    listeners: Option<LayerListeners>,
}

impl MapSession {
    /// Register the tile protocol and build a map inside `container_id`.
    /// The map libraries must already be loaded.
    pub fn create(container_id: &str, config: &MapConfig) -> anyhow::Result<Self> {
        js_bridge::register_tile_protocol(TILE_PROTOCOL);

        let options = to_js(&config.to_options(container_id)?)?;
        let map = MaplibreMap::new(&options).map_err(|e| js_bridge::js_error("creating map", e))?;
        map.add_control(&NavigationControl::new().into(), "top-right");
        info!("map created in #{container_id}");

        Ok(Self {
            host: MapLibreHost::new(map),
            listeners: None,
        })
    }

    pub fn host(&self) -> &MapLibreHost {
        &self.host
    }

    /// Run `on_load` once, when the style has loaded. The host reports
    /// loaded before `on_load` runs.
    pub fn on_load(&self, on_load: impl FnOnce() + 'static) {
        let host = self.host.clone();
        let callback = Closure::once_into_js(move |_event: JsValue| {
            host.mark_loaded();
            on_load();
        });
        self.host.map().once("load", callback.unchecked_ref());
    }

    /// Attach the `timezone-fill` listeners, replacing any attached before.
    pub fn attach_listeners(&mut self, on_select: impl FnMut(UtcOffset) + 'static) {
        self.listeners = None;
        self.listeners = Some(LayerListeners::attach(&self.host, on_select));
    }
}

impl Drop for MapSession {
    fn drop(&mut self) {
        self.listeners.take();
        self.host.map().remove();
        info!("map removed");
    }
}
