//! Reusable Dioxus RSX components for the timezone map.

mod error_display;
mod loading_spinner;
mod map_container;
mod timezone_select;

pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use map_container::MapContainer;
pub use timezone_select::TimezoneSelect;
