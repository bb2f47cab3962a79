#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Which cell of the row, if any, is rendered at expanded width.
pub enum LayoutMode {
    /// One focused cell is expanded and framed by widened gaps.
    Expanded {
        /// Index of the focused item.
        focus_index: usize,
        /// Width-to-height ratio of the focused thumbnail.
        ///
        /// Accepted for API stability; the expanded width does not depend on it yet.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        expanding_width_hint: Option<f64>,
    },
    /// Every cell is collapsed.
    #[default]
    Collapsed,
}

impl LayoutMode {
    /// Expanded mode focused on `focus_index`, without a width hint.
    pub fn expanded(focus_index: usize) -> Self {
        Self::Expanded {
            focus_index,
            expanding_width_hint: None,
        }
    }

    /// Focused item index, `None` when collapsed.
    pub fn focus_index(&self) -> Option<usize> {
        match *self {
            Self::Expanded { focus_index, .. } => Some(focus_index),
            Self::Collapsed => None,
        }
    }

    /// True for [`LayoutMode::Expanded`].
    pub fn is_expanded(&self) -> bool {
        matches!(self, Self::Expanded { .. })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/mode.rs"]
mod tests;
