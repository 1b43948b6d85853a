//! Container element MapLibre renders into.

use dioxus::prelude::*;

/// Props for MapContainer
#[derive(Props, Clone, PartialEq)]
pub struct MapContainerProps {
    /// The DOM id for the map container (MapLibre will render into this)
    pub id: String,
}

/// A full-viewport div for the map canvas.
#[component]
pub fn MapContainer(props: MapContainerProps) -> Element {
    rsx! {
        div {
            id: "{props.id}",
            style: "width: 100%; height: 100vh;",
        }
    }
}
