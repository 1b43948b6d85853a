//! Dioxus components and MapLibre bridge for the timezone map.
//!
//! This crate provides:
//! - `js_bridge`: `wasm-bindgen` imports for MapLibre GL and PMTiles, plus script loading
//! - `host`: [`tzm_core::MapHost`] implemented on a live MapLibre map
//! - `listeners`: `timezone-fill` event listeners, detached on drop
//! - `session`: one map instance and everything attached to it
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selector, map container, etc.)

pub mod components;
pub mod host;
pub mod js_bridge;
pub mod listeners;
pub mod session;
pub mod state;
