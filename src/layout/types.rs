//! Core layout newtypes and geometry

use serde::Serialize;

/// Item index within the stack. 0-indexed internally, 1-based for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct ItemIndex(usize);

impl ItemIndex {
    /// Create a new ItemIndex from a raw 0-based value.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw 0-based index value.
    pub fn get(&self) -> usize {
        self.0
    }

    /// Get the 1-based index for display purposes.
    pub fn display(&self) -> usize {
        self.0 + 1
    }
}

impl From<usize> for ItemIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for ItemIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// Width and height in viewport units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// Zero-area size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle placing one item in content space.
///
/// # Invariants (maintained by `StackLayout::prepare`)
/// - `x == 0.0`
/// - `y` equals the sum of heights of all preceding items
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Frame {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Frame {
    /// Create a new frame.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Frame at the left edge of the stack with the given top and size.
    pub fn stacked(y: f64, size: Size) -> Self {
        Self::new(0.0, y, size.width, size.height)
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge. The next stacked frame starts here.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Size of this frame.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check whether two frames share positive area.
    ///
    /// Frames that merely touch along an edge do not intersect, and a
    /// zero-area frame intersects nothing.
    #[inline]
    pub fn intersects(&self, other: &Frame) -> bool {
        self.has_area()
            && other.has_area()
            && self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Check whether both extents are positive.
    #[inline]
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Check whether a content-space y coordinate falls inside this frame.
    /// Half-open: the top edge is inside, the bottom edge is not.
    #[inline]
    pub fn contains_y(&self, y: f64) -> bool {
        y >= self.y && y < self.bottom()
    }
}

/// Fallback heights used when the size provider declines to size an item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DefaultHeights {
    /// Height of an unselected item.
    pub collapsed: f64,
    /// Height of the selected item.
    pub selected: f64,
}

impl DefaultHeights {
    /// Create a new pair of fallback heights.
    pub const fn new(collapsed: f64, selected: f64) -> Self {
        Self {
            collapsed,
            selected,
        }
    }

    /// Pick the fallback height for an item.
    pub fn for_selection(&self, is_selected: bool) -> f64 {
        if is_selected {
            self.selected
        } else {
            self.collapsed
        }
    }
}

impl Default for DefaultHeights {
    fn default() -> Self {
        Self::new(100.0, 300.0)
    }
}
