//! Meridian sources and layers added on top of the style document.

use anyhow::Context;
use log::info;
use serde_json::{json, Value};

use crate::host::MapHost;
use crate::meridian::{generate_meridian_labels, generate_meridian_lines};

pub const MERIDIAN_SOURCE_ID: &str = "meridians";
pub const MERIDIAN_LABEL_SOURCE_ID: &str = "meridian-labels";
pub const MERIDIAN_LINE_LAYER_ID: &str = "meridian-lines";
pub const MERIDIAN_LABEL_LAYER_ID: &str = "meridian-labels";

/// Dashed grey line layer for the meridians.
pub fn meridian_line_layer() -> Value {
    json!({
        "id": MERIDIAN_LINE_LAYER_ID,
        "type": "line",
        "source": MERIDIAN_SOURCE_ID,
        "paint": {
            "line-color": "#666666",
            "line-width": 1,
            "line-opacity": 0.6,
            "line-dasharray": [2, 2]
        }
    })
}

/// Symbol layer printing each meridian's hour offset.
pub fn meridian_label_layer() -> Value {
    json!({
        "id": MERIDIAN_LABEL_LAYER_ID,
        "type": "symbol",
        "source": MERIDIAN_LABEL_SOURCE_ID,
        "layout": {
            "text-field": ["get", "offset"],
            "text-size": 12,
            "text-font": ["Noto Sans Regular"],
            "text-anchor": "center",
            "text-justify": "center"
        },
        "paint": {
            "text-color": "#333333",
            "text-halo-color": "#ffffff",
            "text-halo-width": 1
        }
    })
}

/// Add the meridian sources and layers. Must run after the style has loaded;
/// anything already present is left alone, so calling twice is harmless.
pub fn install_meridian_overlays<H: MapHost + ?Sized>(host: &H) -> anyhow::Result<()> {
    if !host.is_style_loaded() {
        anyhow::bail!("map style is not loaded yet");
    }

    let sources = [
        (MERIDIAN_SOURCE_ID, generate_meridian_lines()),
        (MERIDIAN_LABEL_SOURCE_ID, generate_meridian_labels()),
    ];
    for (id, collection) in sources {
        if host.has_source(id) {
            continue;
        }
        let data = serde_json::to_value(&collection)
            .with_context(|| format!("serializing source '{id}'"))?;
        host.add_geojson_source(id, &data)
            .with_context(|| format!("adding source '{id}'"))?;
    }

    for layer in [meridian_line_layer(), meridian_label_layer()] {
        let id = layer["id"].as_str().unwrap_or_default();
        if host.has_layer(id) {
            continue;
        }
        host.add_layer(&layer)
            .with_context(|| format!("adding layer '{id}'"))?;
    }

    info!("meridian overlays installed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::testing::RecordingHost;

    #[test]
    fn installs_sources_and_layers() {
        let host = RecordingHost::loaded();
        install_meridian_overlays(&host).unwrap();

        assert_eq!(*host.sources.borrow(), vec!["meridians", "meridian-labels"]);
        assert!(host.has_layer("meridian-lines"));
        assert!(host.has_layer("meridian-labels"));
    }

    #[test]
    fn second_install_is_a_noop() {
        let host = RecordingHost::loaded();
        install_meridian_overlays(&host).unwrap();
        install_meridian_overlays(&host).unwrap();
        assert_eq!(host.sources.borrow().len(), 2);
        // timezone-fill from the style plus the two meridian layers
        assert_eq!(host.layers.borrow().len(), 3);
    }

    #[test]
    fn refuses_to_install_before_load() {
        let host = RecordingHost::default();
        let err = install_meridian_overlays(&host).unwrap_err();
        assert!(err.to_string().contains("not loaded"));
        assert!(host.sources.borrow().is_empty());
    }

    #[test]
    fn layers_reference_their_sources() {
        assert_eq!(meridian_line_layer()["source"], "meridians");
        assert_eq!(meridian_label_layer()["source"], "meridian-labels");
        assert_eq!(meridian_label_layer()["layout"]["text-field"], json!(["get", "offset"]));
    }
}
