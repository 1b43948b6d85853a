//! Static GeoJSON for the longitude grid drawn over the basemap.
//!
//! One meridian every 15 degrees, each labelled with the nominal hour offset
//! for that longitude (15 degrees of longitude = 1 hour). Both -180 and 180
//! are emitted, so the date line carries two labels (`-12.00` and `+12.00`).

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;

/// Longitude spacing between meridians, in degrees.
pub const MERIDIAN_STEP_DEGREES: i32 = 15;

/// Meridian lines run from `-MERIDIAN_LAT_EXTENT` to `MERIDIAN_LAT_EXTENT`.
pub const MERIDIAN_LAT_EXTENT: f64 = 85.0;

/// Latitude (60°S) at which the hour-offset labels are placed.
pub const LABEL_LATITUDE: f64 = -60.0;

/// -180, -165, ..., 165, 180.
pub fn meridian_longitudes() -> impl Iterator<Item = i32> {
    (-180..=180).step_by(MERIDIAN_STEP_DEGREES as usize)
}

/// Nominal hour offset for a longitude, always signed with two decimals.
///
/// ```
/// use tzm_core::meridian::format_hour_offset;
///
/// assert_eq!(format_hour_offset(0), "+0.00");
/// assert_eq!(format_hour_offset(-90), "-6.00");
/// ```
pub fn format_hour_offset(longitude: i32) -> String {
    let hours = f64::from(longitude) / f64::from(MERIDIAN_STEP_DEGREES);
    format!("{hours:+.2}")
}

/// One north-south line per meridian, with a `longitude` property.
pub fn generate_meridian_lines() -> FeatureCollection {
    let features = meridian_longitudes()
        .map(|lng| {
            let x = f64::from(lng);
            let geometry = Geometry::new(Value::LineString(vec![
                vec![x, -MERIDIAN_LAT_EXTENT],
                vec![x, MERIDIAN_LAT_EXTENT],
            ]));
            let mut properties = JsonObject::new();
            properties.insert("longitude".to_string(), json!(lng));
            feature(geometry, properties)
        })
        .collect();

    collection(features)
}

/// One label point per meridian at [`LABEL_LATITUDE`], with `longitude` and
/// `offset` properties.
pub fn generate_meridian_labels() -> FeatureCollection {
    let features = meridian_longitudes()
        .map(|lng| {
            let geometry = Geometry::new(Value::Point(vec![f64::from(lng), LABEL_LATITUDE]));
            let mut properties = JsonObject::new();
            properties.insert("longitude".to_string(), json!(lng));
            properties.insert("offset".to_string(), json!(format_hour_offset(lng)));
            feature(geometry, properties)
        })
        .collect();

    collection(features)
}

fn feature(geometry: Geometry, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

fn collection(features: Vec<Feature>) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn longitude_of(feature: &Feature) -> i64 {
        feature
            .property("longitude")
            .and_then(|v| v.as_i64())
            .expect("feature should carry an integer longitude")
    }

    #[test]
    fn test_longitude_sequence() {
        let lngs: Vec<i32> = meridian_longitudes().collect();
        assert_eq!(lngs.len(), 25);
        assert_eq!(lngs.first(), Some(&-180));
        assert_eq!(lngs.last(), Some(&180));
        assert!(lngs.windows(2).all(|w| w[1] - w[0] == 15));
    }

    #[test]
    fn test_meridian_lines_span_latitude_range() {
        let lines = generate_meridian_lines();
        assert_eq!(lines.features.len(), 25);

        for (feature, lng) in lines.features.iter().zip(meridian_longitudes()) {
            assert_eq!(longitude_of(feature), i64::from(lng));
            let geometry = feature.geometry.as_ref().expect("line geometry");
            let x = f64::from(lng);
            assert_eq!(
                geometry.value,
                Value::LineString(vec![vec![x, -85.0], vec![x, 85.0]]),
                "meridian at {lng} should run from 85°S to 85°N"
            );
        }
    }

    #[test]
    fn test_meridian_labels_offsets() {
        let labels = generate_meridian_labels();
        assert_eq!(labels.features.len(), 25);

        let offset_at = |lng: i64| -> String {
            labels
                .features
                .iter()
                .find(|f| longitude_of(f) == lng)
                .and_then(|f| f.property("offset"))
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| panic!("no label at longitude {lng}"))
        };

        assert_eq!(offset_at(0), "+0.00");
        assert_eq!(offset_at(45), "+3.00");
        assert_eq!(offset_at(-90), "-6.00");
        assert_eq!(offset_at(180), "+12.00");
        assert_eq!(offset_at(-180), "-12.00");
    }

    #[test]
    fn test_label_offsets_are_signed_with_two_decimals() {
        for feature in generate_meridian_labels().features {
            let offset = feature
                .property("offset")
                .and_then(|v| v.as_str())
                .expect("offset property")
                .to_string();
            let (sign, rest) = offset.split_at(1);
            assert!(sign == "+" || sign == "-", "{offset} should start with a sign");
            let (whole, frac) = rest.split_once('.').expect("decimal point");
            assert!(!whole.is_empty() && whole.chars().all(|c| c.is_ascii_digit()));
            assert_eq!(frac, "00", "{offset} should have exactly two decimals");
        }
    }

    #[test]
    fn test_labels_sit_at_sixty_south() {
        for (feature, lng) in generate_meridian_labels().features.iter().zip(meridian_longitudes()) {
            let geometry = feature.geometry.as_ref().expect("point geometry");
            assert_eq!(geometry.value, Value::Point(vec![f64::from(lng), -60.0]));
        }
    }

    #[test]
    fn test_date_line_is_not_deduplicated() {
        let labels = generate_meridian_labels();
        let date_line: Vec<i64> = labels
            .features
            .iter()
            .map(longitude_of)
            .filter(|lng| lng.abs() == 180)
            .collect();
        assert_eq!(date_line, vec![-180, 180]);
    }

    #[test]
    fn test_generators_are_idempotent() {
        assert_eq!(generate_meridian_lines(), generate_meridian_lines());
        assert_eq!(generate_meridian_labels(), generate_meridian_labels());

        let first = serde_json::to_string(&generate_meridian_labels()).unwrap();
        let second = serde_json::to_string(&generate_meridian_labels()).unwrap();
        assert_eq!(first, second);
    }
}
