//! The one piece of mutable application state: which offset is highlighted.

use crate::catalog::{TimezoneCatalog, UtcOffset};

/// The currently selected UTC offset, or nothing.
///
/// Written by the dropdown and by map clicks, read by the highlight pass.
/// A selected value is always a catalog member because [`UtcOffset`] can only
/// be built from one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection(Option<UtcOffset>);

impl Selection {
    pub fn none() -> Self {
        Self(None)
    }

    pub fn of(offset: UtcOffset) -> Self {
        Self(Some(offset))
    }

    pub fn current(&self) -> Option<&UtcOffset> {
        self.0.as_ref()
    }

    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// Value compared against `UTC_offset` when highlighting; empty when
    /// nothing is selected.
    pub fn as_filter_value(&self) -> &'static str {
        self.0.as_ref().map(UtcOffset::as_str).unwrap_or("")
    }

    /// Selection resulting from a dropdown change.
    ///
    /// The empty value is the "nothing selected" option. The dropdown only
    /// offers catalog members, so any other value also clears the selection.
    pub fn from_control_value(value: &str, catalog: &TimezoneCatalog) -> Self {
        Self(catalog.lookup(value))
    }
}

impl From<UtcOffset> for Selection {
    fn from(offset: UtcOffset) -> Self {
        Self::of(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let selection = Selection::default();
        assert!(selection.is_none());
        assert_eq!(selection.as_filter_value(), "");
        assert_eq!(selection, Selection::none());
    }

    #[test]
    fn control_value_selects_catalog_entry() {
        let catalog = TimezoneCatalog::new();
        let selection = Selection::from_control_value("+05:30", &catalog);
        assert_eq!(selection.current().map(UtcOffset::as_str), Some("+05:30"));
        assert_eq!(selection.as_filter_value(), "+05:30");
    }

    #[test]
    fn empty_control_value_clears() {
        let catalog = TimezoneCatalog::new();
        let selection = Selection::from_control_value("", &catalog);
        assert!(selection.is_none());
    }

    #[test]
    fn last_write_wins() {
        let catalog = TimezoneCatalog::new();
        let mut selection = Selection::none();
        for value in ["+01:00", "-03:30", "", "+12:45"] {
            selection = Selection::from_control_value(value, &catalog);
        }
        assert_eq!(selection.as_filter_value(), "+12:45");
    }
}
