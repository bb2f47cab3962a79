use std::{fs::File, io::BufReader, path::Path};

use crate::foundation::{
    core::DeviceClass,
    error::{ThumbstripError, ThumbstripResult},
};

/// Gap between collapsed neighbours when the wide-spacing gate is off.
pub const NARROW_COLLAPSED_SPACING: f64 = 1.0;
/// Gap between collapsed neighbours when the wide-spacing gate is on.
pub const WIDE_COLLAPSED_SPACING: f64 = 3.0;
/// Gap on either side of the expanded cell.
pub const EXPANDED_SPACING: f64 = 12.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Host-provided inputs that select the row's size constants.
pub struct RowLayoutConfig {
    /// Screen class of the host device.
    #[serde(default)]
    pub device_class: DeviceClass,
    /// Platform compatibility gate for the wider collapsed gap.
    #[serde(default)]
    pub wide_collapsed_spacing: bool,
}

impl RowLayoutConfig {
    /// Build a config from its two host flags.
    pub fn new(device_class: DeviceClass, wide_collapsed_spacing: bool) -> Self {
        Self {
            device_class,
            wide_collapsed_spacing,
        }
    }

    /// Phone-sized cells with narrow spacing.
    pub fn compact() -> Self {
        Self::new(DeviceClass::Compact, false)
    }

    /// Large-screen cells with narrow spacing.
    pub fn regular() -> Self {
        Self::new(DeviceClass::Regular, false)
    }

    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ThumbstripResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ThumbstripError::validation(format!("parse layout config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ThumbstripResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ThumbstripError::validation(format!("open layout config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Width and height of every collapsed cell.
    pub fn collapsed_width(&self) -> f64 {
        self.device_class.collapsed_item_width()
    }

    /// Gap between two collapsed neighbours.
    pub fn collapsed_spacing(&self) -> f64 {
        if self.wide_collapsed_spacing {
            WIDE_COLLAPSED_SPACING
        } else {
            NARROW_COLLAPSED_SPACING
        }
    }

    /// Gap immediately before and after the expanded cell.
    pub fn expanded_spacing(&self) -> f64 {
        EXPANDED_SPACING
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/config.rs"]
mod tests;
