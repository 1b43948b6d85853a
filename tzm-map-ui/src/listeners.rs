//! Pointer listeners on the `timezone-fill` layer.

use log::{debug, info, warn};
use serde_json::Value;
use tzm_core::events::FeatureProperties;
use tzm_core::{LayerEvent, MapEventBridge, UtcOffset, TIMEZONE_LAYER_ID};
use wasm_bindgen::prelude::*;

use crate::host::MapLibreHost;
use crate::js_bridge::from_js;

type Listener = Closure<dyn FnMut(JsValue)>;

/// The `click`, `mouseenter` and `mouseleave` listeners registered on
/// `timezone-fill`. Dropping this value unregisters all of them.
pub struct LayerListeners {
    host: MapLibreHost,
    listeners: Vec<(&'static str, Listener)>,
}

impl LayerListeners {
    /// Register the listeners. The map must have finished loading, since
    /// the layer does not exist before that.
    pub fn attach(host: &MapLibreHost, mut on_select: impl FnMut(UtcOffset) + 'static) -> Self {
        let bridge = MapEventBridge::default();

        let click = {
            let host = host.clone();
            Listener::new(move |event: JsValue| {
                let features = clicked_features(&event);
                if let Some(offset) = bridge.handle(&host, &LayerEvent::Click { features }) {
                    on_select(offset);
                }
            })
        };
        let enter = {
            let host = host.clone();
            Listener::new(move |_: JsValue| {
                bridge.handle(&host, &LayerEvent::PointerEnter);
            })
        };
        let leave = {
            let host = host.clone();
            Listener::new(move |_: JsValue| {
                bridge.handle(&host, &LayerEvent::PointerLeave);
            })
        };

        let listeners = vec![("click", click), ("mouseenter", enter), ("mouseleave", leave)];
        for (event, listener) in &listeners {
            host.map()
                .on_layer(event, TIMEZONE_LAYER_ID, listener.as_ref().unchecked_ref());
        }
        info!("attached {} listeners to {TIMEZONE_LAYER_ID}", listeners.len());

        Self {
            host: host.clone(),
            listeners,
        }
    }
}

impl Drop for LayerListeners {
    fn drop(&mut self) {
        for (event, listener) in self.listeners.drain(..) {
            self.host
                .map()
                .off_layer(event, TIMEZONE_LAYER_ID, listener.as_ref().unchecked_ref());
        }
        debug!("detached {TIMEZONE_LAYER_ID} listeners");
    }
}

/// Properties of the features under the pointer, in hit-test order.
/// A feature whose properties cannot be read contributes an empty map, so
/// it still counts as the topmost hit.
fn clicked_features(event: &JsValue) -> Vec<FeatureProperties> {
    let features = match js_sys::Reflect::get(event, &JsValue::from_str("features")) {
        Ok(features) if js_sys::Array::is_array(&features) => js_sys::Array::from(&features),
        _ => return Vec::new(),
    };

    features
        .iter()
        .map(|feature| {
            let properties = js_sys::Reflect::get(&feature, &JsValue::from_str("properties"))
                .unwrap_or(JsValue::UNDEFINED);
            if properties.is_undefined() || properties.is_null() {
                return FeatureProperties::new();
            }
            match from_js(&properties) {
                Ok(Value::Object(map)) => map,
                Ok(_) => FeatureProperties::new(),
                Err(e) => {
                    warn!("unreadable feature properties: {e:#}");
                    FeatureProperties::new()
                }
            }
        })
        .collect()
}
