//! Timezone Map
//!
//! World map with timezone polygons and a meridian every 15 degrees. Picking a
//! UTC offset in the dropdown, or clicking a polygon, highlights every region
//! on that offset.
//!
//! Data flow:
//! 1. On mount: load MapLibre and PMTiles, register `pmtiles://`, build the map.
//! 2. On map `load`: add the meridian sources/layers, attach the
//!    `timezone-fill` listeners, mark the map loaded.
//! 3. On selection change: rewrite the `fill-opacity` expression.
//! 4. On unmount: detach the listeners and remove the map.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing::{info, warn};
use tzm_core::config::MapConfig;
use tzm_core::overlay::install_meridian_overlays;
use tzm_core::{HighlightSynchronizer, Selection};
use tzm_map_ui::components::{ErrorDisplay, LoadingSpinner, MapContainer, TimezoneSelect};
use tzm_map_ui::js_bridge;
use tzm_map_ui::session::MapSession;
use tzm_map_ui::state::AppState;

/// DOM id for the MapLibre container div.
const MAP_CONTAINER_ID: &str = "timezone-map";

/// The live map, if one has been created and not yet torn down.
type SessionSlot = Rc<RefCell<Option<MapSession>>>;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    info!("Starting timezone map");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("timezone-map-root"))
        .launch(App);
}

/// Load the map libraries and create the map. The rest of the setup waits
/// for the map's `load` event.
async fn start_map(slot: SessionSlot, state: AppState) -> anyhow::Result<()> {
    js_bridge::load_map_libraries().await?;

    let session = MapSession::create(MAP_CONTAINER_ID, &MapConfig::default())?;
    let load_slot = slot.clone();
    session.on_load(move || on_map_loaded(&load_slot, state));
    *slot.borrow_mut() = Some(session);
    Ok(())
}

fn on_map_loaded(slot: &SessionSlot, mut state: AppState) {
    let mut guard = slot.borrow_mut();
    // Torn down before the style finished loading.
    let Some(session) = guard.as_mut() else {
        return;
    };

    if let Err(e) = install_meridian_overlays(session.host()) {
        warn!("meridian overlays unavailable: {e:#}");
        state.error_msg.set(Some(format!("Could not draw meridians: {e}")));
    }

    let mut selection = state.selection;
    session.attach_listeners(move |offset| selection.set(Selection::of(offset)));
    drop(guard);

    info!("map loaded");
    state.map_loaded.set(true);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let session: SessionSlot = use_hook(|| Rc::new(RefCell::new(None)));

    // ─── Effect 1: Build the map once on mount ───
    use_effect({
        let session = session.clone();
        move || {
            let session = session.clone();
            spawn(async move {
                if let Err(e) = start_map(session, state).await {
                    warn!("map failed to start: {e:#}");
                    state.error_msg.set(Some(format!("Failed to load the map: {e}")));
                }
            });
        }
    });

    // ─── Effect 2: Highlight the selected offset ───
    // Re-runs whenever selection or map_loaded change.
    use_effect({
        let session = session.clone();
        move || {
            let selection = state.selection.read().clone();
            let loaded = (state.map_loaded)();
            if !loaded {
                return;
            }
            if let Some(session) = session.borrow().as_ref() {
                HighlightSynchronizer::new().sync(session.host(), &selection);
            }
        }
    });

    // ─── Teardown: listeners first, then the map ───
    use_drop(move || {
        if session.borrow_mut().take().is_some() {
            info!("timezone map torn down");
        }
    });

    // ─── Render ───
    rsx! {
        div {
            style: "position: relative; width: 100%; height: 100vh; font-family: system-ui, -apple-system, sans-serif;",

            TimezoneSelect {}

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if !*state.map_loaded.read() {
                LoadingSpinner {}
            }

            MapContainer { id: MAP_CONTAINER_ID.to_string() }
        }
    }
}
