//! Pointer interaction on the `timezone-fill` layer.

use log::debug;
use serde_json::{Map, Value};

use crate::catalog::{TimezoneCatalog, UtcOffset};
use crate::host::{Cursor, MapHost};
use crate::UTC_OFFSET_PROPERTY;

/// Properties of one feature returned by the map's hit test.
pub type FeatureProperties = Map<String, Value>;

/// Layer-scoped events forwarded from the map.
#[derive(Debug, Clone, PartialEq)]
pub enum LayerEvent {
    PointerEnter,
    PointerLeave,
    /// `features` are in hit-test order; only the first is considered.
    Click { features: Vec<FeatureProperties> },
}

/// Turns layer events into cursor changes and selection candidates.
#[derive(Debug, Clone, Copy, Default)]
pub struct MapEventBridge {
    catalog: TimezoneCatalog,
}

impl MapEventBridge {
    pub fn new(catalog: TimezoneCatalog) -> Self {
        Self { catalog }
    }

    /// Handle one event. Returns the offset to select for a click on a
    /// polygon with a known `UTC_offset`, and `None` otherwise.
    pub fn handle<H: MapHost + ?Sized>(&self, host: &H, event: &LayerEvent) -> Option<UtcOffset> {
        match event {
            LayerEvent::PointerEnter => {
                host.set_cursor(Cursor::Pointer);
                None
            }
            LayerEvent::PointerLeave => {
                host.set_cursor(Cursor::Default);
                None
            }
            LayerEvent::Click { features } => self.offset_for_click(features),
        }
    }

    pub fn offset_for_click(&self, features: &[FeatureProperties]) -> Option<UtcOffset> {
        let raw = features
            .first()
            .and_then(|properties| properties.get(UTC_OFFSET_PROPERTY))
            .and_then(Value::as_str);
        debug!("timezone clicked: {} feature(s), UTC offset {raw:?}", features.len());

        let offset = raw.and_then(|value| self.catalog.lookup(value));
        if offset.is_none() && raw.is_some() {
            debug!("ignoring click on unknown UTC offset {raw:?}");
        }
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::testing::RecordingHost;
    use crate::selection::Selection;
    use serde_json::json;

    fn props(value: Value) -> FeatureProperties {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    fn click(features: Vec<FeatureProperties>) -> LayerEvent {
        LayerEvent::Click { features }
    }

    #[test]
    fn test_click_on_known_offset_selects_it() {
        let host = RecordingHost::loaded();
        let bridge = MapEventBridge::default();
        let mut selection = Selection::none();

        let event = click(vec![props(json!({ "UTC_offset": "+09:00", "name": "JST" }))]);
        if let Some(offset) = bridge.handle(&host, &event) {
            selection = Selection::of(offset);
        }
        assert_eq!(selection.as_filter_value(), "+09:00");
    }

    #[test]
    fn test_click_on_unknown_offset_leaves_selection() {
        let host = RecordingHost::loaded();
        let bridge = MapEventBridge::default();
        let mut selection = Selection::from_control_value("+01:00", &TimezoneCatalog::new());

        let event = click(vec![props(json!({ "UTC_offset": "+99:99" }))]);
        if let Some(offset) = bridge.handle(&host, &event) {
            selection = Selection::of(offset);
        }
        assert_eq!(selection.as_filter_value(), "+01:00");
    }

    #[test]
    fn test_click_without_attribute_is_ignored() {
        let bridge = MapEventBridge::default();
        assert_eq!(bridge.offset_for_click(&[props(json!({ "name": "ocean" }))]), None);
        assert_eq!(bridge.offset_for_click(&[props(json!({ "UTC_offset": null }))]), None);
        assert_eq!(bridge.offset_for_click(&[props(json!({ "UTC_offset": 9 }))]), None);
        assert_eq!(bridge.offset_for_click(&[props(json!({ "UTC_offset": "" }))]), None);
        assert_eq!(bridge.offset_for_click(&[]), None);
    }

    #[test]
    fn test_only_first_feature_counts() {
        let bridge = MapEventBridge::default();
        let features = vec![
            props(json!({ "UTC_offset": "-05:00" })),
            props(json!({ "UTC_offset": "-06:00" })),
        ];
        assert_eq!(
            bridge.offset_for_click(&features).map(|o| o.as_str()),
            Some("-05:00")
        );

        // An unusable topmost feature is not rescued by the ones below it.
        let features = vec![
            props(json!({ "UTC_offset": "+99:99" })),
            props(json!({ "UTC_offset": "-06:00" })),
        ];
        assert_eq!(bridge.offset_for_click(&features), None);
    }

    #[test]
    fn test_hover_toggles_cursor() {
        let host = RecordingHost::loaded();
        let bridge = MapEventBridge::default();

        assert_eq!(bridge.handle(&host, &LayerEvent::PointerEnter), None);
        assert_eq!(bridge.handle(&host, &LayerEvent::PointerLeave), None);
        assert_eq!(*host.cursors.borrow(), vec![Cursor::Pointer, Cursor::Default]);
        assert_eq!(Cursor::Pointer.as_css(), "pointer");
        assert_eq!(Cursor::Default.as_css(), "");
    }

    #[test]
    fn test_click_does_not_touch_cursor_or_paint() {
        let host = RecordingHost::loaded();
        let bridge = MapEventBridge::default();
        bridge.handle(&host, &click(vec![props(json!({ "UTC_offset": "+05:45" }))]));
        assert!(host.cursors.borrow().is_empty());
        assert!(host.paint_writes.borrow().is_empty());
    }
}
