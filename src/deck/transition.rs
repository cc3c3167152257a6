//! Transition plans captured after each relayout

use crate::layout::{Frame, ItemIndex, Size, StackLayout};
use serde::Serialize;
use std::fmt;

/// Start and end frame for one item across a relayout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ItemTransition {
    /// Item being animated.
    pub index: ItemIndex,
    /// Where the animation starts (the item's previous frame).
    pub from: Frame,
    /// Where the animation ends (the item's current frame).
    pub to: Frame,
}

impl ItemTransition {
    /// Check whether the item changes position or size.
    pub fn is_moving(&self) -> bool {
        self.from != self.to
    }
}

/// Everything a renderer needs to animate from the previous layout to the current one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionPlan {
    /// Selection the layout was prepared with.
    pub selected: Option<ItemIndex>,
    /// Content size after the relayout.
    pub content_size: Size,
    /// Scroll offset before the relayout.
    pub scroll_from: f64,
    /// Corrected scroll offset keeping the selection visible.
    pub scroll_to: f64,
    /// One entry per current item, in stacking order.
    pub items: Vec<ItemTransition>,
}

impl TransitionPlan {
    /// Read a plan off a freshly prepared layout.
    ///
    /// Items that had no frame in the previous pass start at their final frame.
    pub fn capture(layout: &StackLayout, scroll_from: f64, scroll_to: f64) -> Self {
        let items = layout
            .current()
            .iter()
            .map(|(index, to)| ItemTransition {
                index,
                from: layout.initial_frame_for_appearing_item(index).unwrap_or(to),
                to,
            })
            .collect();

        Self {
            selected: layout.selected(),
            content_size: layout.content_size(),
            scroll_from,
            scroll_to,
            items,
        }
    }

    /// Items whose frame changes.
    pub fn moving_items(&self) -> impl Iterator<Item = &ItemTransition> {
        self.items.iter().filter(|item| item.is_moving())
    }
}

impl fmt::Display for TransitionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let selected = self
            .selected
            .map_or_else(|| "none".to_string(), |idx| idx.to_string());
        writeln!(
            f,
            "selected: {}  content: {}x{}  scroll: {} -> {}",
            selected,
            self.content_size.width,
            self.content_size.height,
            self.scroll_from,
            self.scroll_to
        )?;

        for item in &self.items {
            let marker = if item.is_moving() { '*' } else { ' ' };
            writeln!(
                f,
                "{} #{:<3} y {} -> {}  h {} -> {}",
                marker, item.index, item.from.y, item.to.y, item.from.height, item.to.height
            )?;
        }
        Ok(())
    }
}
