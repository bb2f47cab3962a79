use crate::{
    foundation::core::{Point, Rect, Size},
    foundation::error::{ThumbstripError, ThumbstripResult},
    layout::{
        config::RowLayoutConfig,
        frame::{ItemFrame, LayoutResult, LayoutSnapshot},
        mode::LayoutMode,
    },
};

/// Stateful solver for a single horizontal row of thumbnails.
///
/// The host calls [`RowLayoutEngine::prepare`] whenever the item count, mode or container size
/// changes, then queries frames from the cache until the next `prepare`. The expanded cell
/// width is resolved once per engine and reused by every later pass, so the focused cell keeps
/// its width while the host animates between modes.
#[derive(Clone, Debug, Default)]
pub struct RowLayoutEngine {
    config: RowLayoutConfig,
    mode: LayoutMode,
    frames: Vec<ItemFrame>,
    content_size: Size,
    expanded_width: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    Focus,
    AfterFocus,
    Plain,
}

impl RowLayoutEngine {
    /// Create an empty engine; nothing is laid out until the first `prepare`.
    pub fn new(config: RowLayoutConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Configuration this engine was built with.
    pub fn config(&self) -> &RowLayoutConfig {
        &self.config
    }

    /// Mode of the last successful `prepare` (collapsed before the first one).
    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// Scrollable extent of the row.
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Cached expanded width, if one has been resolved.
    pub fn expanded_width(&self) -> Option<f64> {
        self.expanded_width
    }

    /// Number of cached frames.
    pub fn item_count(&self) -> usize {
        self.frames.len()
    }

    /// All cached frames in index order.
    pub fn frames(&self) -> &[ItemFrame] {
        &self.frames
    }

    /// Recompute every frame for `item_count` items and replace the cache.
    ///
    /// An expanded `mode` must focus an index in `[0, item_count)` unless the row is empty;
    /// on failure the previous layout stays in place.
    #[tracing::instrument(skip(self))]
    pub fn prepare(
        &mut self,
        item_count: usize,
        mode: LayoutMode,
        container_height: f64,
    ) -> ThumbstripResult<LayoutResult> {
        if item_count == 0 {
            tracing::debug!("empty row, clearing frame cache");
            self.frames.clear();
            self.content_size = Size::ZERO;
            self.mode = mode;
            return Ok(LayoutResult {
                item_count: 0,
                content_size: Size::ZERO,
                expanded_width: None,
            });
        }

        let focus = mode.focus_index();
        if let Some(focus_index) = focus
            && focus_index >= item_count
        {
            return Err(ThumbstripError::invalid_focus_index(focus_index, item_count));
        }

        let expanded_width = match self.expanded_width {
            Some(w) => w,
            None => {
                let w = self.expanding_item_width(&mode);
                tracing::debug!(expanded_width = w, "caching expanded item width");
                self.expanded_width = Some(w);
                w
            }
        };

        let collapsed_width = self.config.collapsed_width();
        let collapsed_spacing = self.config.collapsed_spacing();
        let expanded_spacing = self.config.expanded_spacing();

        let mut frames: Vec<ItemFrame> = Vec::with_capacity(item_count);
        let mut x = 0.0;
        for index in 0..item_count {
            let (width, spacing) = match classify(index, focus) {
                Slot::Focus => (expanded_width, expanded_spacing),
                Slot::AfterFocus => (collapsed_width, expanded_spacing),
                Slot::Plain => (collapsed_width, collapsed_spacing),
            };
            if let Some(prev) = frames.last().map(ItemFrame::max_x) {
                x = prev + spacing;
            }
            frames.push(ItemFrame {
                index,
                x,
                y: 0.0,
                width,
                height: collapsed_width,
            });
        }

        let content_width = frames.last().map(ItemFrame::max_x).unwrap_or(0.0);
        self.content_size = Size::new(content_width, container_height);
        self.frames = frames;
        self.mode = mode;

        Ok(LayoutResult {
            item_count,
            content_size: self.content_size,
            expanded_width: Some(expanded_width),
        })
    }

    /// Drop all cached geometry, including the expanded width.
    pub fn reset(&mut self) {
        tracing::debug!("resetting row layout engine");
        self.frames.clear();
        self.content_size = Size::ZERO;
        self.expanded_width = None;
        self.mode = LayoutMode::Collapsed;
    }

    /// Cached frames overlapping `rect`.
    ///
    /// Callers must not rely on the yield order.
    pub fn frames_intersecting(&self, rect: Rect) -> impl Iterator<Item = &ItemFrame> + '_ {
        self.frames.iter().filter(move |f| f.intersects(rect))
    }

    /// Cached frame for item `index`.
    pub fn frame_for_index(&self, index: usize) -> Option<&ItemFrame> {
        self.frames.get(index)
    }

    /// Index of the item whose frame contains `point`.
    pub fn item_at_point(&self, point: Point) -> Option<usize> {
        // Frames are sorted by x and never overlap.
        let i = self.frames.partition_point(|f| f.max_x() <= point.x);
        self.frames
            .get(i)
            .filter(|f| f.contains(point))
            .map(|f| f.index)
    }

    /// Item under the horizontal center of a viewport scrolled to `current_scroll_x`.
    pub fn horizontal_center_item(
        &self,
        viewport_width: f64,
        current_scroll_x: f64,
    ) -> Option<usize> {
        self.item_at_point(Point::new(current_scroll_x + viewport_width / 2.0, 0.0))
    }

    /// Scroll offset that horizontally centers the focused item (expanded mode) or the item
    /// currently under the viewport center (collapsed mode).
    ///
    /// Falls back to `proposed_offset` when no target frame resolves. The vertical component
    /// of `proposed_offset` is always preserved.
    pub fn centered_scroll_offset(
        &self,
        proposed_offset: Point,
        viewport_width: f64,
        current_scroll_x: f64,
    ) -> Point {
        let target = self
            .mode
            .focus_index()
            .or_else(|| self.horizontal_center_item(viewport_width, current_scroll_x));
        let Some(frame) = target.and_then(|i| self.frame_for_index(i)) else {
            tracing::trace!(?target, "no frame to center, keeping proposed offset");
            return proposed_offset;
        };
        Point::new(frame.center().x - viewport_width / 2.0, proposed_offset.y)
    }

    /// Serializable copy of the current layout.
    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            mode: self.mode,
            content_size: self.content_size,
            expanded_width: self.expanded_width,
            frames: self.frames.clone(),
        }
    }

    // Fixed size; the focused thumbnail is not scaled to its aspect ratio.
    fn expanding_item_width(&self, _mode: &LayoutMode) -> f64 {
        self.config.collapsed_width()
    }
}

fn classify(index: usize, focus: Option<usize>) -> Slot {
    match focus {
        Some(f) if f == index => Slot::Focus,
        Some(f) if f + 1 == index => Slot::AfterFocus,
        _ => Slot::Plain,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/engine.rs"]
mod tests;
