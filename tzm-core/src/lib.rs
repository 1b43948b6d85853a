//! Core logic for the timezone map.
//!
//! This crate has no browser dependencies and is tested natively:
//! - `meridian`: GeoJSON for the 15° meridian grid and its hour labels
//! - `catalog`: the fixed list of selectable UTC offsets
//! - `selection`: the currently highlighted offset
//! - `events`: click/hover handling on the timezone polygons
//! - `highlight`: the `fill-opacity` expression and its application
//! - `overlay`: meridian sources and layers
//! - `host`: the [`host::MapHost`] trait the map engine is driven through
//! - `config`: map constructor settings

pub mod catalog;
pub mod config;
pub mod events;
pub mod highlight;
pub mod host;
pub mod meridian;
pub mod overlay;
pub mod selection;

/// Polygon layer in the style document holding one feature per timezone.
pub const TIMEZONE_LAYER_ID: &str = "timezone-fill";

/// Feature attribute on `timezone-fill` polygons, formatted `±HH:MM`.
pub const UTC_OFFSET_PROPERTY: &str = "UTC_offset";

pub use catalog::{TimezoneCatalog, UtcOffset};
pub use events::{LayerEvent, MapEventBridge};
pub use highlight::{HighlightSynchronizer, SyncOutcome};
pub use host::{Cursor, MapHost};
pub use selection::Selection;
