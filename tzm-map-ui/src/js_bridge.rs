//! Typed imports for MapLibre GL and PMTiles.
//!
//! Both libraries are loaded from a CDN as plain `<script>` tags and expose
//! the `maplibregl` and `pmtiles` globals. [`load_map_libraries`] injects the
//! tags and waits until both globals exist before any binding here is used.

use std::cell::Cell;

use anyhow::anyhow;
use log::{info, warn};
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

pub const MAPLIBRE_CSS_URL: &str = "https://unpkg.com/maplibre-gl@4.7.1/dist/maplibre-gl.css";
pub const MAPLIBRE_JS_URL: &str = "https://unpkg.com/maplibre-gl@4.7.1/dist/maplibre-gl.js";
pub const PMTILES_JS_URL: &str = "https://unpkg.com/pmtiles@3.2.1/dist/pmtiles.js";

/// Give up waiting for the CDN scripts after this many 100 ms polls.
const LIBRARY_POLL_ATTEMPTS: u32 = 150;

#[wasm_bindgen(js_namespace = maplibregl)]
extern "C" {
    #[wasm_bindgen(js_name = Map)]
    #[derive(Debug, Clone, PartialEq)]
    pub type MaplibreMap;

    #[wasm_bindgen(constructor, js_class = "Map", catch)]
    pub fn new(options: &JsValue) -> Result<MaplibreMap, JsValue>;

    #[wasm_bindgen(method, js_name = on)]
    pub fn on_layer(this: &MaplibreMap, event: &str, layer_id: &str, listener: &js_sys::Function);

    #[wasm_bindgen(method, js_name = off)]
    pub fn off_layer(this: &MaplibreMap, event: &str, layer_id: &str, listener: &js_sys::Function);

    #[wasm_bindgen(method)]
    pub fn once(this: &MaplibreMap, event: &str, listener: &js_sys::Function);

    #[wasm_bindgen(method, js_name = addSource, catch)]
    pub fn add_source(this: &MaplibreMap, id: &str, source: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_name = getSource)]
    pub fn get_source(this: &MaplibreMap, id: &str) -> JsValue;

    #[wasm_bindgen(method, js_name = addLayer, catch)]
    pub fn add_layer(this: &MaplibreMap, layer: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_name = getLayer)]
    pub fn get_layer(this: &MaplibreMap, id: &str) -> JsValue;

    #[wasm_bindgen(method, js_name = setPaintProperty, catch)]
    pub fn set_paint_property(
        this: &MaplibreMap,
        layer_id: &str,
        property: &str,
        value: &JsValue,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_name = getCanvas)]
    pub fn get_canvas(this: &MaplibreMap) -> web_sys::HtmlCanvasElement;

    #[wasm_bindgen(method, js_name = addControl)]
    pub fn add_control(this: &MaplibreMap, control: &JsValue, position: &str);

    #[wasm_bindgen(method)]
    pub fn remove(this: &MaplibreMap);

    #[wasm_bindgen(js_name = NavigationControl)]
    pub type NavigationControl;

    #[wasm_bindgen(constructor, js_class = "NavigationControl")]
    pub fn new() -> NavigationControl;

    #[wasm_bindgen(js_name = addProtocol)]
    fn add_protocol(scheme: &str, handler: &JsValue);
}

#[wasm_bindgen(js_namespace = pmtiles)]
extern "C" {
    #[wasm_bindgen(js_name = Protocol)]
    type PmtilesProtocol;

    #[wasm_bindgen(constructor, js_class = "Protocol")]
    fn new() -> PmtilesProtocol;

    /// Already bound to its protocol instance by the PMTiles constructor.
    #[wasm_bindgen(method, getter)]
    fn tile(this: &PmtilesProtocol) -> JsValue;
}

thread_local! {
    static PROTOCOL_REGISTERED: Cell<bool> = const { Cell::new(false) };
}

/// Render a JS exception as an `anyhow` error.
pub fn js_error(context: &str, err: JsValue) -> anyhow::Error {
    anyhow!("{context}: {err:?}")
}

/// Convert a JSON value into a plain JS object via `JSON.parse`.
pub fn to_js(value: &Value) -> anyhow::Result<JsValue> {
    let text = serde_json::to_string(value)?;
    js_sys::JSON::parse(&text).map_err(|e| js_error("JSON.parse", e))
}

/// Convert a plain JS object into JSON via `JSON.stringify`.
pub fn from_js(value: &JsValue) -> anyhow::Result<Value> {
    let text: String = js_sys::JSON::stringify(value)
        .map_err(|e| js_error("JSON.stringify", e))?
        .into();
    Ok(serde_json::from_str(&text)?)
}

/// Register the `pmtiles://` protocol with MapLibre. Only the first call
/// has an effect.
pub fn register_tile_protocol(scheme: &str) {
    if PROTOCOL_REGISTERED.with(|flag| flag.replace(true)) {
        return;
    }
    let protocol = PmtilesProtocol::new();
    add_protocol(scheme, &protocol.tile());
    info!("registered {scheme}:// tile protocol");
}

/// Append the MapLibre stylesheet and the MapLibre/PMTiles scripts to `<head>`.
fn inject_library_tags() -> anyhow::Result<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| anyhow!("no document available"))?;
    let head = document.head().ok_or_else(|| anyhow!("document has no <head>"))?;

    let js = |e| js_error("injecting map libraries", e);

    let link = document.create_element("link").map_err(js)?;
    link.set_attribute("rel", "stylesheet").map_err(js)?;
    link.set_attribute("href", MAPLIBRE_CSS_URL).map_err(js)?;
    head.append_child(&link).map_err(js)?;

    for src in [MAPLIBRE_JS_URL, PMTILES_JS_URL] {
        let script = document.create_element("script").map_err(js)?;
        script.set_attribute("src", src).map_err(js)?;
        head.append_child(&script).map_err(js)?;
    }
    Ok(())
}

/// Inject the map libraries (unless the page already has them) and wait for
/// their globals to appear.
pub async fn load_map_libraries() -> anyhow::Result<()> {
    if !libraries_ready() {
        inject_library_tags()?;
    }

    // Poll every 100ms, resolve once both globals exist.
    let wait_js = format!(
        r#"
        new Promise(function(resolve, reject) {{
            var attempts = 0;
            var poll = setInterval(function() {{
                if (typeof maplibregl !== 'undefined' && typeof pmtiles !== 'undefined') {{
                    clearInterval(poll);
                    resolve(true);
                }} else if (++attempts >= {LIBRARY_POLL_ATTEMPTS}) {{
                    clearInterval(poll);
                    reject(new Error('timed out waiting for maplibregl/pmtiles'));
                }}
            }}, 100);
        }})
        "#
    );
    let promise = js_sys::eval(&wait_js)
        .map_err(|e| js_error("starting library poll", e))?
        .unchecked_into::<js_sys::Promise>();
    JsFuture::from(promise).await.map_err(|e| {
        warn!("map libraries did not load");
        js_error("loading map libraries", e)
    })?;

    info!("maplibregl and pmtiles ready");
    Ok(())
}

fn libraries_ready() -> bool {
    js_sys::eval("typeof maplibregl !== 'undefined' && typeof pmtiles !== 'undefined'")
        .map(|v| v.is_truthy())
        .unwrap_or(false)
}
