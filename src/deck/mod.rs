//! Headless card deck driving the layout engine
//!
//! Plays the role of the host view: owns the cards, answers size queries,
//! turns taps into selection changes, and collects the transition plan
//! produced by each relayout.

pub mod transition;

pub use transition::{ItemTransition, TransitionPlan};

use crate::layout::{DefaultHeights, Frame, HitTestResult, ItemIndex, Size, StackLayout};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised by deck interactions.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DeckError {
    /// Tapped a card index that does not exist.
    #[error("No card at index {index} (deck has {card_count} cards)")]
    NoSuchCard {
        /// Requested index.
        index: ItemIndex,
        /// Number of cards in the deck.
        card_count: usize,
    },

    /// Tapped a viewport position not covered by any card.
    #[error("No card at viewport position y={y}")]
    NothingAtPosition {
        /// Content-space y that was tested.
        y: f64,
    },
}

/// A single expandable card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    /// Title shown on the card.
    pub title: String,
    /// Whether the card shows its full content.
    pub expanded: bool,
}

impl Card {
    /// Create a collapsed card.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            expanded: false,
        }
    }
}

/// How the deck answers the engine's size queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SizingMode {
    /// Every card reports a measured size scaled by its expand state.
    #[default]
    Measured,
    /// Cards report nothing; the engine's default heights apply.
    Fallback,
}

/// Measurements used by `SizingMode::Measured`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CardMetrics {
    /// Full height of a card's content.
    pub content_height: f64,
    /// Fraction of `content_height` shown while collapsed.
    pub overview_fraction: f64,
}

impl CardMetrics {
    /// Size of a card at the given viewport width.
    pub fn size_for(&self, card: &Card, viewport_width: f64) -> Size {
        let fraction = if card.expanded {
            1.0
        } else {
            self.overview_fraction
        };
        Size::new(viewport_width, self.content_height * fraction)
    }
}

impl Default for CardMetrics {
    fn default() -> Self {
        Self {
            content_height: 250.0,
            overview_fraction: 0.25,
        }
    }
}

/// Deck configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DeckOptions {
    /// Size query strategy.
    pub sizing: SizingMode,
    /// Measured-size parameters.
    pub metrics: CardMetrics,
    /// Engine fallback heights.
    pub defaults: DefaultHeights,
}

/// A scrolling deck of cards laid out by `StackLayout`.
#[derive(Debug, Clone)]
pub struct CardDeck {
    cards: Vec<Card>,
    layout: StackLayout,
    viewport: Size,
    scroll_offset: f64,
    options: DeckOptions,
}

impl CardDeck {
    /// Create a deck of `card_count` collapsed cards titled `Item 0`, `Item 1`, ...
    pub fn new(card_count: usize, viewport: Size, options: DeckOptions) -> Self {
        let cards = (0..card_count)
            .map(|idx| Card::new(format!("Item {idx}")))
            .collect();
        Self::with_cards(cards, viewport, options)
    }

    /// Create a deck from explicit cards. Runs the initial prepare pass.
    pub fn with_cards(cards: Vec<Card>, viewport: Size, options: DeckOptions) -> Self {
        let mut deck = Self {
            cards,
            layout: StackLayout::with_defaults(options.defaults),
            viewport,
            scroll_offset: 0.0,
            options,
        };
        deck.relayout();
        deck
    }

    /// Cards in stacking order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Underlying layout engine.
    pub fn layout(&self) -> &StackLayout {
        &self.layout
    }

    /// Current viewport size.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Current scroll offset.
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Largest offset that still fills the viewport with content.
    pub fn max_scroll_offset(&self) -> f64 {
        (self.layout.content_size().height - self.viewport.height).max(0.0)
    }

    /// Scroll to an offset without relayout, clamped to the scrollable range.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll_offset = self.clamp_scroll(offset);
    }

    fn clamp_scroll(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.max_scroll_offset())
    }

    /// Plan for the layout as it stands, without a new prepare pass.
    pub fn current_plan(&self) -> TransitionPlan {
        TransitionPlan::capture(&self.layout, self.scroll_offset, self.scroll_offset)
    }

    /// Run a prepare pass and retarget the scroll offset.
    ///
    /// The corrected offset is clamped to `[0, max_scroll_offset]`, so a
    /// collapse near the end of the deck pulls the viewport back onto content.
    pub fn relayout(&mut self) -> TransitionPlan {
        let cards = &self.cards;
        let width = self.viewport.width;
        let DeckOptions { sizing, metrics, .. } = self.options;

        self.layout.prepare(cards.len(), width, |idx| match sizing {
            SizingMode::Measured => cards.get(idx.get()).map(|card| metrics.size_for(card, width)),
            SizingMode::Fallback => None,
        });

        let scroll_from = self.scroll_offset;
        let corrected = self.layout.corrected_scroll_offset(
            self.layout.selected(),
            scroll_from,
            self.viewport.height,
        );
        let scroll_to = self.clamp_scroll(corrected);
        self.scroll_offset = scroll_to;

        TransitionPlan::capture(&self.layout, scroll_from, scroll_to)
    }

    /// Toggle a card.
    ///
    /// Tapping the selected card clears the selection; tapping any other
    /// card selects it. Only the tapped card's expand state flips.
    pub fn tap(&mut self, index: ItemIndex) -> Result<TransitionPlan, DeckError> {
        let card_count = self.cards.len();
        let card = self
            .cards
            .get_mut(index.get())
            .ok_or(DeckError::NoSuchCard { index, card_count })?;
        card.expanded = !card.expanded;
        let expanded = card.expanded;

        let selected = if self.layout.selected() == Some(index) {
            None
        } else {
            Some(index)
        };
        self.layout.set_selected(selected);

        info!(%index, expanded, ?selected, "Card tapped");
        Ok(self.relayout())
    }

    /// Tap whatever card sits at viewport-relative `y`.
    pub fn tap_at(&mut self, viewport_y: f64) -> Result<TransitionPlan, DeckError> {
        let content_y = self.scroll_offset + viewport_y;
        match self.layout.hit_test(content_y) {
            HitTestResult::Hit { item_index, .. } => self.tap(item_index),
            HitTestResult::Miss => Err(DeckError::NothingAtPosition { y: content_y }),
        }
    }

    /// Apply a viewport size change, relaying out only if the size differs.
    pub fn resize(&mut self, viewport: Size) -> Option<TransitionPlan> {
        if !StackLayout::should_recompute(self.viewport, viewport) {
            return None;
        }
        debug!(?viewport, previous = ?self.viewport, "Viewport resized");
        self.viewport = viewport;
        Some(self.relayout())
    }

    /// Frames of cards at least partly inside the viewport.
    pub fn visible_cards(&self) -> Vec<Frame> {
        let band = Frame::new(
            0.0,
            self.scroll_offset,
            self.viewport.width,
            self.viewport.height,
        );
        self.layout.frames_intersecting(&band)
    }
}

#[cfg(test)]
#[path = "deck_tests.rs"]
mod tests;
