//! Thumbstrip computes the geometry of a photo-preview thumbnail strip.
//!
//! The strip is a single horizontal row of square cells. At most one cell is *expanded* (the
//! focused photo) and is separated from its neighbours by a wider gap; every other cell is
//! *collapsed* to a fixed size that depends on the device class.
//!
//! # Usage
//!
//! 1. Build a [`RowLayoutEngine`] from a [`RowLayoutConfig`].
//! 2. Call [`RowLayoutEngine::prepare`] whenever the item count, [`LayoutMode`] or container
//!    size changes.
//! 3. Query [`RowLayoutEngine::frames_intersecting`], [`RowLayoutEngine::frame_for_index`] and
//!    [`RowLayoutEngine::centered_scroll_offset`] until the next `prepare`.
//!
//! The engine is synchronous and performs no IO. `prepare` takes `&mut self`, so queries can
//! never observe a half-built layout.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod layout;

pub use foundation::core::{DeviceClass, Point, Rect, Size};
pub use foundation::error::{ThumbstripError, ThumbstripResult};
pub use layout::config::{
    EXPANDED_SPACING, NARROW_COLLAPSED_SPACING, RowLayoutConfig, WIDE_COLLAPSED_SPACING,
};
pub use layout::engine::RowLayoutEngine;
pub use layout::frame::{ItemFrame, LayoutResult, LayoutSnapshot};
pub use layout::mode::LayoutMode;
