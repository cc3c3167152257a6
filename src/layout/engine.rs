//! Stacked layout engine with a depth-1 snapshot history

use super::{
    hit_test::HitTestResult,
    scroll::OffsetCorrection,
    snapshot::LayoutSnapshot,
    types::{DefaultHeights, Frame, ItemIndex, Size},
};
use tracing::{debug, trace};

/// Layout engine for a single-column stack of expandable items.
///
/// Contains:
/// - The snapshot computed by the latest prepare pass (`current`)
/// - The snapshot it replaced (`previous`), used to seed appear transitions
/// - Cached content size
/// - Host-owned selection, read only when falling back to default heights
///
/// # Layout Computation
/// `prepare` walks items top to bottom, asks the size provider for each,
/// and stacks the resulting frames with a running y offset.
///
/// # Queries
/// All lookups tolerate stale indices and return `None` instead of panicking.
#[derive(Debug, Clone, Default)]
pub struct StackLayout {
    previous: LayoutSnapshot,
    current: LayoutSnapshot,
    content_size: Size,
    selected: Option<ItemIndex>,
    defaults: DefaultHeights,
}

impl StackLayout {
    /// Create an engine with the standard 100/300 fallback heights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom fallback heights.
    pub fn with_defaults(defaults: DefaultHeights) -> Self {
        Self {
            defaults,
            ..Self::default()
        }
    }

    /// Fallback heights in use.
    pub fn defaults(&self) -> DefaultHeights {
        self.defaults
    }

    // === Selection ===

    /// Currently selected item.
    pub fn selected(&self) -> Option<ItemIndex> {
        self.selected
    }

    /// Set the selected item.
    ///
    /// Does not relayout; the host must call `prepare` afterwards.
    pub fn set_selected(&mut self, selected: Option<ItemIndex>) {
        self.selected = selected;
    }

    // === Prepare pass ===

    /// Recompute every frame.
    ///
    /// The current snapshot becomes the previous one, then a fresh snapshot
    /// is built. `size_provider` is called exactly once per item in ascending
    /// index order; returning `None` selects the default size
    /// `{viewport_width, collapsed or selected height}`. A returned size is
    /// used verbatim, width included.
    pub fn prepare<F>(&mut self, item_count: usize, viewport_width: f64, mut size_provider: F)
    where
        F: FnMut(ItemIndex) -> Option<Size>,
    {
        let mut frames = Vec::with_capacity(item_count);
        let mut y = 0.0;

        for idx in 0..item_count {
            let index = ItemIndex::new(idx);
            let size = size_provider(index).unwrap_or_else(|| {
                Size::new(
                    viewport_width,
                    self.defaults.for_selection(self.selected == Some(index)),
                )
            });
            frames.push(Frame::stacked(y, size));
            y += size.height;
        }

        self.previous = std::mem::replace(&mut self.current, LayoutSnapshot::from_frames(frames));
        self.content_size = Size::new(viewport_width, y);

        debug!(
            item_count,
            viewport_width,
            content_height = y,
            selected = ?self.selected,
            "Prepared stack layout"
        );
    }

    /// Set the selection and run a prepare pass in one call.
    pub fn prepare_with_selection<F>(
        &mut self,
        item_count: usize,
        viewport_width: f64,
        selected: Option<ItemIndex>,
        size_provider: F,
    ) where
        F: FnMut(ItemIndex) -> Option<Size>,
    {
        self.set_selected(selected);
        self.prepare(item_count, viewport_width, size_provider);
    }

    // === Snapshots ===

    /// Snapshot from the latest prepare pass.
    pub fn current(&self) -> &LayoutSnapshot {
        &self.current
    }

    /// Snapshot from the pass before the latest one.
    pub fn previous(&self) -> &LayoutSnapshot {
        &self.previous
    }

    /// Content size from the latest prepare pass.
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    // === Frame lookups ===

    /// Current frame for an item.
    pub fn frame_for_item(&self, index: ItemIndex) -> Option<Frame> {
        self.current.get(index)
    }

    /// Starting frame for an item animating in: its frame from the previous pass.
    pub fn initial_frame_for_appearing_item(&self, index: ItemIndex) -> Option<Frame> {
        self.previous.get(index)
    }

    /// Ending frame for an item animating out: its current frame.
    pub fn final_frame_for_disappearing_item(&self, index: ItemIndex) -> Option<Frame> {
        self.frame_for_item(index)
    }

    /// Current frames sharing positive area with `query`, in index order.
    pub fn frames_intersecting(&self, query: &Frame) -> Vec<Frame> {
        self.current.intersecting(query)
    }

    /// Check whether a viewport size change invalidates the layout.
    pub fn should_recompute(old_viewport: Size, new_viewport: Size) -> bool {
        old_viewport != new_viewport
    }

    // === Scroll targeting ===

    /// Decide how to adjust `proposed` so that `selected` is fully visible.
    ///
    /// Returns `Unchanged` when there is no selection or the selection has
    /// no frame in the current snapshot.
    pub fn scroll_correction(
        &self,
        selected: Option<ItemIndex>,
        proposed: f64,
        viewport_height: f64,
    ) -> OffsetCorrection {
        let Some(frame) = selected.and_then(|index| self.frame_for_item(index)) else {
            return OffsetCorrection::Unchanged;
        };

        let correction = OffsetCorrection::for_frame(&frame, proposed, viewport_height);
        if correction.is_change() {
            trace!(
                ?selected,
                proposed,
                viewport_height,
                ?correction,
                "Corrected scroll offset"
            );
        }
        correction
    }

    /// Offset that keeps `selected` fully visible, starting from `proposed`.
    pub fn corrected_scroll_offset(
        &self,
        selected: Option<ItemIndex>,
        proposed: f64,
        viewport_height: f64,
    ) -> f64 {
        self.scroll_correction(selected, proposed, viewport_height)
            .resolve(proposed)
    }

    // === Hit testing ===

    /// Find the item containing content-space `y`.
    ///
    /// Binary search on frame bottoms; relies on non-negative heights.
    pub fn hit_test(&self, y: f64) -> HitTestResult {
        let frames = self.current.frames();
        let index = frames.partition_point(|f| f.bottom() <= y);

        match frames.get(index) {
            Some(frame) if frame.contains_y(y) => {
                HitTestResult::hit(ItemIndex::new(index), y - frame.y)
            }
            _ => HitTestResult::miss(),
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
