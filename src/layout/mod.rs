//! Layout layer - frame computation, snapshot history, and scroll targeting
//!
//! Toolkit-independent: a host supplies item count, viewport width and an
//! optional per-item size, and reads back frames, content size, and a
//! corrected scroll offset.
//!
//! # Module Structure
//!
//! - `types`: Geometry and index newtypes (ItemIndex, Size, Frame, DefaultHeights)
//! - `snapshot`: LayoutSnapshot - immutable frames from one prepare pass
//! - `engine`: StackLayout - prepare pass, lookups, intersection, hit-testing
//! - `scroll`: OffsetCorrection - keep-selected-visible offset decision
//! - `hit_test`: HitTestResult - result of position hit-testing

pub mod engine;
pub mod scroll;
pub mod snapshot;
pub mod types;

pub use engine::StackLayout;
pub use hit_test::HitTestResult;
pub use scroll::OffsetCorrection;
pub use snapshot::LayoutSnapshot;
pub use types::{DefaultHeights, Frame, ItemIndex, Size};
