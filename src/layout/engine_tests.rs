//! Tests for the stacked layout engine.

use super::*;

fn no_overrides(_: ItemIndex) -> Option<Size> {
    None
}

fn prepared(item_count: usize, width: f64, selected: Option<usize>) -> StackLayout {
    let mut layout = StackLayout::new();
    layout.prepare_with_selection(item_count, width, selected.map(ItemIndex::new), no_overrides);
    layout
}

mod prepare {
    use super::*;

    #[test]
    fn three_items_without_selection_stack_at_100() {
        let layout = prepared(3, 320.0, None);

        assert_eq!(
            layout.current().frames(),
            &[
                Frame::new(0.0, 0.0, 320.0, 100.0),
                Frame::new(0.0, 100.0, 320.0, 100.0),
                Frame::new(0.0, 200.0, 320.0, 100.0),
            ]
        );
        assert_eq!(layout.content_size(), Size::new(320.0, 300.0));
    }

    #[test]
    fn selected_item_falls_back_to_300() {
        let layout = prepared(3, 320.0, Some(1));

        assert_eq!(
            layout.current().frames(),
            &[
                Frame::new(0.0, 0.0, 320.0, 100.0),
                Frame::new(0.0, 100.0, 320.0, 300.0),
                Frame::new(0.0, 400.0, 320.0, 100.0),
            ]
        );
        assert_eq!(layout.content_size(), Size::new(320.0, 500.0));
    }

    #[test]
    fn zero_items_gives_empty_snapshot_and_zero_height() {
        let layout = prepared(0, 320.0, None);
        assert!(layout.current().is_empty());
        assert_eq!(layout.content_size(), Size::new(320.0, 0.0));
    }

    #[test]
    fn override_wins_including_width() {
        let mut layout = StackLayout::new();
        layout.prepare(2, 320.0, |idx| {
            (idx.get() == 0).then_some(Size::new(200.0, 42.0))
        });

        assert_eq!(
            layout.frame_for_item(ItemIndex::new(0)),
            Some(Frame::new(0.0, 0.0, 200.0, 42.0))
        );
        assert_eq!(
            layout.frame_for_item(ItemIndex::new(1)),
            Some(Frame::new(0.0, 42.0, 320.0, 100.0))
        );
        // Content width always follows the viewport.
        assert_eq!(layout.content_size(), Size::new(320.0, 142.0));
    }

    #[test]
    fn override_ignores_selection() {
        let mut layout = StackLayout::new();
        layout.prepare_with_selection(2, 320.0, Some(ItemIndex::new(0)), |_| {
            Some(Size::new(320.0, 50.0))
        });

        assert_eq!(layout.content_size().height, 100.0);
    }

    #[test]
    fn size_provider_called_once_per_item_in_order() {
        let mut calls = Vec::new();
        let mut layout = StackLayout::new();
        layout.prepare(4, 320.0, |idx| {
            calls.push(idx.get());
            None
        });

        assert_eq!(calls, vec![0, 1, 2, 3]);
    }

    #[test]
    fn custom_defaults_are_used_for_fallback() {
        let mut layout = StackLayout::with_defaults(DefaultHeights::new(40.0, 120.0));
        layout.prepare_with_selection(2, 100.0, Some(ItemIndex::new(1)), no_overrides);

        assert_eq!(layout.content_size(), Size::new(100.0, 160.0));
    }

    #[test]
    fn selection_change_alone_does_not_relayout() {
        let mut layout = prepared(3, 320.0, None);
        layout.set_selected(Some(ItemIndex::new(1)));

        assert_eq!(layout.content_size().height, 300.0);
        assert_eq!(
            layout.frame_for_item(ItemIndex::new(1)).map(|f| f.height),
            Some(100.0)
        );
    }
}

mod history {
    use super::*;

    #[test]
    fn first_pass_has_empty_previous() {
        let layout = prepared(3, 320.0, None);
        assert!(layout.previous().is_empty());
        assert_eq!(layout.initial_frame_for_appearing_item(ItemIndex::new(0)), None);
    }

    #[test]
    fn second_pass_moves_current_into_previous() {
        let mut layout = prepared(3, 320.0, None);
        let before = layout.frame_for_item(ItemIndex::new(2));

        layout.prepare_with_selection(3, 320.0, Some(ItemIndex::new(1)), no_overrides);

        assert_eq!(layout.initial_frame_for_appearing_item(ItemIndex::new(2)), before);
        assert_eq!(
            layout.frame_for_item(ItemIndex::new(2)),
            Some(Frame::new(0.0, 400.0, 320.0, 100.0))
        );
    }

    #[test]
    fn history_is_only_one_pass_deep() {
        let mut layout = prepared(1, 100.0, None);
        layout.prepare(1, 200.0, no_overrides);
        layout.prepare(1, 300.0, no_overrides);

        assert_eq!(
            layout.initial_frame_for_appearing_item(ItemIndex::new(0)),
            Some(Frame::new(0.0, 0.0, 200.0, 100.0))
        );
    }

    #[test]
    fn appearing_item_beyond_previous_count_is_none() {
        let mut layout = prepared(2, 320.0, None);
        layout.prepare(3, 320.0, no_overrides);

        assert_eq!(layout.initial_frame_for_appearing_item(ItemIndex::new(2)), None);
        assert!(layout.frame_for_item(ItemIndex::new(2)).is_some());
    }

    #[test]
    fn disappearing_item_uses_current_frame() {
        let layout = prepared(3, 320.0, Some(1));
        for idx in 0..4 {
            let index = ItemIndex::new(idx);
            assert_eq!(
                layout.final_frame_for_disappearing_item(index),
                layout.frame_for_item(index)
            );
        }
    }
}

mod lookups {
    use super::*;

    #[test]
    fn stale_index_after_shrink_is_none() {
        let mut layout = prepared(5, 320.0, None);
        layout.prepare(2, 320.0, no_overrides);

        assert_eq!(layout.frame_for_item(ItemIndex::new(4)), None);
        assert!(layout.initial_frame_for_appearing_item(ItemIndex::new(4)).is_some());
    }

    #[test]
    fn intersecting_query_below_content_is_empty() {
        let layout = prepared(3, 320.0, None);
        let below = Frame::new(0.0, 300.0, 320.0, 100.0);
        assert!(layout.frames_intersecting(&below).is_empty());
    }

    #[test]
    fn intersecting_query_above_zero_is_empty() {
        let layout = prepared(3, 320.0, None);
        let above = Frame::new(0.0, -100.0, 320.0, 100.0);
        assert!(layout.frames_intersecting(&above).is_empty());
    }

    #[test]
    fn intersecting_full_content_returns_all() {
        let layout = prepared(3, 320.0, Some(1));
        let everything = Frame::new(0.0, 0.0, 320.0, layout.content_size().height);
        assert_eq!(
            layout.frames_intersecting(&everything),
            layout.current().frames().to_vec()
        );
    }

    #[test]
    fn intersecting_skips_zero_height_items() {
        let mut layout = StackLayout::new();
        layout.prepare(3, 320.0, |idx| {
            (idx.get() == 1).then_some(Size::new(320.0, 0.0))
        });

        let hits = layout.frames_intersecting(&Frame::new(0.0, 50.0, 320.0, 100.0));

        assert_eq!(
            hits,
            vec![
                Frame::new(0.0, 0.0, 320.0, 100.0),
                Frame::new(0.0, 100.0, 320.0, 100.0),
            ]
        );
    }

    #[test]
    fn intersecting_viewport_band_culls_offscreen_items() {
        let layout = prepared(3, 320.0, Some(1));
        let band = Frame::new(0.0, 150.0, 320.0, 200.0);
        assert_eq!(
            layout.frames_intersecting(&band),
            vec![Frame::new(0.0, 100.0, 320.0, 300.0)]
        );
    }
}

mod should_recompute {
    use super::*;

    #[test]
    fn same_size_does_not_recompute() {
        assert!(!StackLayout::should_recompute(
            Size::new(200.0, 400.0),
            Size::new(200.0, 400.0)
        ));
    }

    #[test]
    fn width_change_recomputes() {
        assert!(StackLayout::should_recompute(
            Size::new(200.0, 400.0),
            Size::new(300.0, 400.0)
        ));
    }

    #[test]
    fn height_change_recomputes() {
        assert!(StackLayout::should_recompute(
            Size::new(200.0, 400.0),
            Size::new(200.0, 401.0)
        ));
    }
}

mod scroll_targeting {
    use super::*;

    #[test]
    fn no_selection_keeps_proposed() {
        let layout = prepared(3, 320.0, Some(1));
        assert_eq!(layout.corrected_scroll_offset(None, 37.0, 200.0), 37.0);
    }

    #[test]
    fn selection_without_frame_keeps_proposed() {
        let layout = prepared(3, 320.0, None);
        assert_eq!(
            layout.corrected_scroll_offset(Some(ItemIndex::new(9)), 37.0, 200.0),
            37.0
        );
    }

    #[test]
    fn expanded_item_below_viewport_scrolls_down() {
        let layout = prepared(3, 320.0, Some(1));
        assert_eq!(
            layout.corrected_scroll_offset(layout.selected(), 0.0, 200.0),
            200.0
        );
    }

    #[test]
    fn tall_item_prefers_bottom() {
        let layout = prepared(3, 320.0, Some(1));
        // Band 150..350 misses both edges of a 100..400 frame.
        assert_eq!(
            layout.scroll_correction(layout.selected(), 150.0, 200.0),
            OffsetCorrection::RevealBottom(200.0)
        );
    }

    #[test]
    fn item_above_viewport_scrolls_up_to_its_top() {
        let layout = prepared(3, 320.0, Some(1));
        // Band 150..550 holds the bottom edge; only the top is hidden.
        assert_eq!(
            layout.scroll_correction(layout.selected(), 150.0, 400.0),
            OffsetCorrection::RevealTop(100.0)
        );
    }

    #[test]
    fn visible_item_keeps_proposed() {
        let layout = prepared(3, 320.0, Some(0));
        assert_eq!(
            layout.scroll_correction(layout.selected(), 0.0, 568.0),
            OffsetCorrection::Unchanged
        );
    }
}

mod hit_test {
    use super::*;

    #[test]
    fn empty_layout_misses() {
        let layout = prepared(0, 320.0, None);
        assert_eq!(layout.hit_test(0.0), HitTestResult::miss());
    }

    #[test]
    fn hits_item_containing_y() {
        let layout = prepared(3, 320.0, Some(1));
        assert_eq!(
            layout.hit_test(250.0),
            HitTestResult::hit(ItemIndex::new(1), 150.0)
        );
    }

    #[test]
    fn boundary_belongs_to_lower_item() {
        let layout = prepared(3, 320.0, None);
        assert_eq!(layout.hit_test(100.0).item_index(), Some(ItemIndex::new(1)));
    }

    #[test]
    fn past_content_and_negative_positions_miss() {
        let layout = prepared(3, 320.0, None);
        assert!(!layout.hit_test(300.0).is_hit());
        assert!(!layout.hit_test(-1.0).is_hit());
    }

    #[test]
    fn zero_height_items_are_skipped() {
        let mut layout = StackLayout::new();
        layout.prepare(3, 320.0, |idx| {
            (idx.get() == 1).then_some(Size::new(320.0, 0.0))
        });
        assert_eq!(layout.hit_test(100.0).item_index(), Some(ItemIndex::new(2)));
    }
}
