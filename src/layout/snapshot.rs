//! Immutable frame sequences captured by a prepare pass

use super::types::{Frame, ItemIndex};

/// Ordered frames for every item at one point in time.
///
/// Built once by `StackLayout::prepare` and never mutated afterwards; the
/// engine swaps whole snapshots instead of editing them in place.
///
/// # Invariants
/// - `frames[i]` belongs to item `i`
/// - `frames[i].y == frames[i - 1].bottom()` for `i > 0`, and `frames[0].y == 0`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutSnapshot {
    frames: Vec<Frame>,
}

impl LayoutSnapshot {
    /// Empty snapshot (no items).
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_frames(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame for an item, or `None` when the index is out of range.
    pub fn get(&self, index: ItemIndex) -> Option<Frame> {
        self.frames.get(index.get()).copied()
    }

    /// All frames in stacking order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Iterate over `(index, frame)` pairs in stacking order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemIndex, Frame)> + '_ {
        self.frames
            .iter()
            .enumerate()
            .map(|(idx, frame)| (ItemIndex::new(idx), *frame))
    }

    /// Sum of all frame heights.
    pub fn total_height(&self) -> f64 {
        self.frames.iter().map(|f| f.height).sum()
    }

    /// Frames overlapping `query`, in ascending index order.
    ///
    /// Linear scan. Overlap requires shared positive area.
    pub fn intersecting(&self, query: &Frame) -> Vec<Frame> {
        self.frames
            .iter()
            .filter(|frame| frame.intersects(query))
            .copied()
            .collect()
    }
}
