//! Stacked card layout (cardstack)
//!
//! Layout engine for a vertical stack of expandable cards, plus a headless
//! deck that drives it the way a collection view would.
//!
//! Pure core (`layout`) with a thin impure shell (`config`, `logging`, the
//! demo binary).

pub mod config;
pub mod deck;
pub mod layout;
pub mod logging;
