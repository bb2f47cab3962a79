pub use kurbo::{Point, Rect, Size};

/// Screen class of the host device, selecting the thumbnail cell size.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    /// Phone-sized screens.
    #[default]
    Compact,
    /// Large screens (tablets).
    Regular,
}

impl DeviceClass {
    /// Side length in points of a collapsed (square) thumbnail cell.
    pub fn collapsed_item_width(self) -> f64 {
        // Strip height minus its 10pt top and 5pt bottom insets.
        match self {
            Self::Compact => 75.0,
            Self::Regular => 95.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
