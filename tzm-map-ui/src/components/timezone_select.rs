//! Dropdown selector for choosing the highlighted UTC offset.

use crate::state::AppState;
use dioxus::prelude::*;
use tzm_core::{Selection, TimezoneCatalog};

/// Timezone dropdown selector.
/// Lists every catalog offset plus a "nothing selected" entry and writes the
/// choice into `AppState::selection`.
#[component]
pub fn TimezoneSelect() -> Element {
    let mut state = use_context::<AppState>();
    let catalog = TimezoneCatalog::new();
    let selected = state.selection.read().as_filter_value();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        state
            .selection
            .set(Selection::from_control_value(&value, &catalog));
    };

    rsx! {
        div {
            style: "position: absolute; top: 10px; left: 10px; z-index: 1000; background: white; padding: 8px; border-radius: 4px; box-shadow: 0 2px 4px rgba(0,0,0,0.2);",
            label {
                r#for: "timezone-select",
                style: "display: block; margin-bottom: 4px; font-size: 14px; font-weight: bold;",
                "Time Zone"
            }
            select {
                id: "timezone-select",
                style: "padding: 4px 8px; border-radius: 2px; border: 1px solid #ccc; font-size: 14px; min-width: 120px;",
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_empty(),
                    "-- Select a time zone --"
                }
                for offset in catalog.iter() {
                    option {
                        key: "{offset}",
                        value: "{offset}",
                        selected: offset.as_str() == selected,
                        {offset.option_label()}
                    }
                }
            }
        }
    }
}
