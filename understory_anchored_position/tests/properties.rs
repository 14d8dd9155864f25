// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the placement engine.

use kurbo::Rect;
use proptest::prelude::*;
use understory_anchored_position::{Align, PositionSettings, Side, compute_position};

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 640.0, 480.0);
// Clamping computes `hi - len + len`, which may round up by an ulp.
const EPS: f64 = 1e-9;

fn side() -> impl Strategy<Value = Side> {
    prop_oneof![
        Just(Side::OutsideTop),
        Just(Side::OutsideBottom),
        Just(Side::OutsideLeft),
        Just(Side::OutsideRight),
        Just(Side::InsideTop),
        Just(Side::InsideBottom),
        Just(Side::InsideLeft),
        Just(Side::InsideRight),
        Just(Side::InsideCenter),
    ]
}

fn align() -> impl Strategy<Value = Align> {
    prop_oneof![Just(Align::Start), Just(Align::Center), Just(Align::End)]
}

fn anchor() -> impl Strategy<Value = Rect> {
    (-50.0..600.0_f64, -50.0..450.0_f64, 1.0..120.0_f64, 1.0..60.0_f64)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, x + w, y + h))
}

fn floating() -> impl Strategy<Value = Rect> {
    (1.0..700.0_f64, 1.0..520.0_f64).prop_map(|(w, h)| Rect::new(0.0, 0.0, w, h))
}

proptest! {
    #[test]
    fn same_inputs_same_output(
        anchor in anchor(),
        floating in floating(),
        side in side(),
        align in align(),
        allow in any::<bool>(),
    ) {
        let settings = PositionSettings::new(side, align).with_allow_out_of_bounds(allow);
        let a = compute_position(anchor, floating, VIEWPORT, &settings);
        let b = compute_position(anchor, floating, VIEWPORT, &settings);
        prop_assert_eq!(a.top.to_bits(), b.top.to_bits());
        prop_assert_eq!(a.left.to_bits(), b.left.to_bits());
        prop_assert_eq!(a.anchor_side, b.anchor_side);
    }

    #[test]
    fn clamped_results_stay_inside_viewport(
        anchor in anchor(),
        floating in floating(),
        side in side(),
        align in align(),
    ) {
        prop_assume!(
            floating.width() <= VIEWPORT.width() && floating.height() <= VIEWPORT.height()
        );
        let settings = PositionSettings::new(side, align);
        let pos = compute_position(anchor, floating, VIEWPORT, &settings);
        let rect = pos.rect(floating.size());
        prop_assert!(pos.anchor_side.is_some());
        prop_assert!(rect.x0 >= VIEWPORT.x0 && rect.x1 <= VIEWPORT.x1 + EPS, "{rect:?}");
        prop_assert!(rect.y0 >= VIEWPORT.y0 && rect.y1 <= VIEWPORT.y1 + EPS, "{rect:?}");
    }

    #[test]
    fn reported_side_is_requested_or_opposite(
        anchor in anchor(),
        floating in floating(),
        side in side(),
        align in align(),
    ) {
        let settings = PositionSettings::new(side, align);
        let pos = compute_position(anchor, floating, VIEWPORT, &settings);
        let used = pos.anchor_side.unwrap();
        prop_assert!(used == side || used == side.opposite());
    }
}
