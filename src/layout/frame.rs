use crate::{
    foundation::core::{Point, Rect, Size},
    layout::mode::LayoutMode,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Placement of one item in the row, in content coordinates.
pub struct ItemFrame {
    /// Item index in `[0, item_count)`.
    pub index: usize,
    /// Left edge.
    pub x: f64,
    /// Top edge (always 0 for a single row).
    pub y: f64,
    /// Cell width.
    pub width: f64,
    /// Cell height.
    pub height: f64,
}

impl ItemFrame {
    /// Frame as a kurbo rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.max_x(), self.y + self.height)
    }

    /// Right edge.
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Center point of the frame.
    pub fn center(&self) -> Point {
        self.rect().center()
    }

    /// True when the frame and `rect` share interior area on both axes.
    ///
    /// A degenerate `rect` (zero width or height) behaves like a line or point probe.
    pub fn intersects(&self, rect: Rect) -> bool {
        let q = rect.abs();
        let f = self.rect();
        spans_overlap(f.x0, f.x1, q.x0, q.x1) && spans_overlap(f.y0, f.y1, q.y0, q.y1)
    }

    /// Half-open containment: left/top edges are inside, right/bottom edges are not.
    pub fn contains(&self, point: Point) -> bool {
        self.rect().contains(point)
    }
}

// Frame span is half-open [f0, f1); an empty query span probes the single coordinate q0.
fn spans_overlap(f0: f64, f1: f64, q0: f64, q1: f64) -> bool {
    if q0 == q1 {
        f0 <= q0 && q0 < f1
    } else {
        f0 < q1 && q0 < f1
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Summary returned by [`crate::RowLayoutEngine::prepare`].
pub struct LayoutResult {
    /// Number of frames now in the cache.
    pub item_count: usize,
    /// Scrollable extent of the row.
    pub content_size: Size,
    /// Width used for the expanded cell; `None` for an empty row.
    pub expanded_width: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Serializable copy of an engine's current layout.
pub struct LayoutSnapshot {
    /// Mode used by the last successful `prepare`.
    pub mode: LayoutMode,
    /// Scrollable extent of the row.
    pub content_size: Size,
    /// Cached expanded width, if resolved.
    pub expanded_width: Option<f64>,
    /// Frames in index order.
    pub frames: Vec<ItemFrame>,
}

#[cfg(test)]
#[path = "../../tests/unit/layout/frame.rs"]
mod tests;
