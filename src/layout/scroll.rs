//! Scroll-offset targeting for the selected item

use super::types::Frame;

/// Outcome of fitting a frame into a proposed viewport band.
///
/// A sum type so callers can tell which edge was brought into view:
/// - `Unchanged`: the frame is already fully visible (or there is nothing to keep visible)
/// - `RevealBottom`: scrolled down just far enough to show the frame's bottom edge
/// - `RevealTop`: scrolled up just far enough to show the frame's top edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OffsetCorrection {
    /// Keep the proposed offset.
    Unchanged,

    /// Scroll down so the frame's bottom aligns with the viewport bottom.
    RevealBottom(f64),

    /// Scroll up so the frame's top aligns with the viewport top.
    RevealTop(f64),
}

impl OffsetCorrection {
    /// Decide how to move a viewport band `[proposed, proposed + viewport_height)`
    /// so that `frame` becomes visible.
    ///
    /// The bottom edge is checked first. A frame taller than the viewport
    /// therefore gets its bottom revealed, not its top.
    pub fn for_frame(frame: &Frame, proposed: f64, viewport_height: f64) -> Self {
        let visible_top = proposed;
        let visible_bottom = visible_top + viewport_height;

        let cell_top = frame.y;
        let cell_bottom = frame.bottom();

        if cell_bottom > visible_bottom {
            Self::RevealBottom(visible_top + (cell_bottom - visible_bottom))
        } else if cell_top < visible_top {
            Self::RevealTop(visible_top - (visible_top - cell_top))
        } else {
            Self::Unchanged
        }
    }

    /// Resolve to an absolute offset.
    pub fn resolve(&self, proposed: f64) -> f64 {
        match *self {
            Self::Unchanged => proposed,
            Self::RevealBottom(offset) | Self::RevealTop(offset) => offset,
        }
    }

    /// Check if the offset moves.
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}
