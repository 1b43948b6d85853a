//! Map construction settings.
//!
//! Everything here is fixed at compile time; the app has no command line,
//! environment or stored settings.

use serde::Serialize;
use serde_json::Value;

/// Path of the style document, relative to the page.
pub const STYLE_URL: &str = "styles/style.json";

/// URL scheme the style uses for PMTiles archives (`pmtiles://...`).
pub const TILE_PROTOCOL: &str = "pmtiles";

/// Options passed to the MapLibre `Map` constructor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    #[serde(rename = "style")]
    pub style_url: String,
    /// `[longitude, latitude]`
    pub center: [f64; 2],
    pub zoom: f64,
    pub min_zoom: f64,
    /// Mirror the view position in the URL fragment.
    pub hash: bool,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            style_url: STYLE_URL.to_string(),
            center: [139.21, 37.18],
            zoom: 1.0,
            min_zoom: 1.0,
            hash: true,
        }
    }
}

impl MapConfig {
    /// Constructor options for a map rendered into the element `container_id`.
    pub fn to_options(&self, container_id: &str) -> anyhow::Result<Value> {
        let mut options = serde_json::to_value(self)?;
        if let Value::Object(map) = &mut options {
            map.insert("container".to_string(), Value::from(container_id));
        }
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn options_use_maplibre_field_names() {
        let options = MapConfig::default().to_options("timezone-map").unwrap();
        assert_eq!(
            options,
            json!({
                "container": "timezone-map",
                "style": "styles/style.json",
                "center": [139.21, 37.18],
                "zoom": 1.0,
                "minZoom": 1.0,
                "hash": true
            })
        );
    }
}
