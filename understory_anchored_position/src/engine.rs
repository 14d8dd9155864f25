// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement, collision detection, and flipping.

use kurbo::{Point, Rect, Size};

use crate::types::{Align, AnchoredPosition, Axis, PositionSettings, Side};

/// Place a floating element of `floating`'s size next to `anchor` inside `viewport`.
///
/// All three rectangles must share one coordinate space; the result is in
/// that space too. Only the size of `floating` is used. Non-finite or
/// inverted rectangles never panic; the result is then unspecified.
///
/// ## Algorithm
///
/// 1. Place along the requested side's axis, `anchor_offset` away from the anchor edge.
/// 2. Align along the other axis, shifted by `alignment_offset`.
/// 3. If the placement leaves the viewport on the side's axis, try the opposite side.
/// 4. If neither side fits, keep the one that overflows less (the requested side on a
///    tie). With `allow_out_of_bounds` the raw placement of the flipped side is returned
///    with no `anchor_side`; otherwise both axes are clamped into the viewport.
///
/// Whenever a side fits and `allow_out_of_bounds` is off, the alignment axis
/// is clamped into the viewport as well.
///
/// ```rust
/// use kurbo::Rect;
/// use understory_anchored_position::{PositionSettings, Side, compute_position};
///
/// let viewport = Rect::new(0.0, 0.0, 200.0, 200.0);
/// // Anchor near the bottom edge: a menu below it would not fit.
/// let anchor = Rect::new(20.0, 170.0, 80.0, 190.0);
/// let menu = Rect::new(0.0, 0.0, 60.0, 50.0);
///
/// let pos = compute_position(anchor, menu, viewport, &PositionSettings::default());
/// assert_eq!(pos.anchor_side, Some(Side::OutsideTop));
/// assert_eq!(pos.top, 170.0 - 50.0 - 4.0);
/// assert_eq!(pos.left, 20.0);
/// ```
pub fn compute_position(
    anchor: Rect,
    floating: Rect,
    viewport: Rect,
    settings: &PositionSettings,
) -> AnchoredPosition {
    let size = floating.size();
    let requested = settings.side;

    let first = place(anchor, size, requested, settings);
    let first_overflow = primary_overflow(first, size, requested, viewport);
    if first_overflow <= 0.0 {
        return settle(first, size, requested, viewport, settings);
    }

    let flipped = requested.opposite();
    let (second, second_overflow) = if flipped == requested {
        (first, first_overflow)
    } else {
        let second = place(anchor, size, flipped, settings);
        let second_overflow = primary_overflow(second, size, flipped, viewport);
        if second_overflow <= 0.0 {
            tracing::debug!(?requested, ?flipped, "anchored position flipped");
            return settle(second, size, flipped, viewport, settings);
        }
        (second, second_overflow)
    };

    if settings.allow_out_of_bounds {
        tracing::debug!(
            ?requested,
            last_tried = ?flipped,
            "no side fits; returning out-of-bounds position"
        );
        return AnchoredPosition {
            top: second.y,
            left: second.x,
            anchor_side: None,
        };
    }

    let (origin, side) = if second_overflow < first_overflow {
        (second, flipped)
    } else {
        (first, requested)
    };
    tracing::debug!(?requested, ?side, "no side fits; clamping into viewport");
    let left = clamp_axis(origin.x, size.width, viewport.x0, viewport.x1);
    let top = clamp_axis(origin.y, size.height, viewport.y0, viewport.y1);
    AnchoredPosition {
        top,
        left,
        anchor_side: Some(side),
    }
}

/// Finish a placement whose side fits on its own axis.
fn settle(
    origin: Point,
    size: Size,
    side: Side,
    viewport: Rect,
    settings: &PositionSettings,
) -> AnchoredPosition {
    let mut origin = origin;
    if !settings.allow_out_of_bounds {
        match side.primary_axis() {
            Axis::Vertical => {
                origin.x = clamp_axis(origin.x, size.width, viewport.x0, viewport.x1);
            }
            Axis::Horizontal => {
                origin.y = clamp_axis(origin.y, size.height, viewport.y0, viewport.y1);
            }
        }
    }
    AnchoredPosition {
        top: origin.y,
        left: origin.x,
        anchor_side: Some(side),
    }
}

/// Unclamped top-left corner for `side`.
fn place(anchor: Rect, size: Size, side: Side, settings: &PositionSettings) -> Point {
    let gap = settings.anchor_offset;
    let shift = settings.alignment_offset;
    match side.primary_axis() {
        Axis::Vertical => {
            let top = match side {
                Side::OutsideTop => anchor.y0 - size.height - gap,
                Side::OutsideBottom => anchor.y1 + gap,
                Side::InsideTop => anchor.y0 + gap,
                Side::InsideBottom => anchor.y1 - size.height - gap,
                _ => anchor.y0 + anchor.height() / 2.0 - size.height / 2.0,
            };
            let left = align_on(anchor.x0, anchor.x1, size.width, settings.align, shift);
            Point::new(left, top)
        }
        Axis::Horizontal => {
            let left = match side {
                Side::OutsideLeft => anchor.x0 - size.width - gap,
                Side::OutsideRight => anchor.x1 + gap,
                Side::InsideLeft => anchor.x0 + gap,
                _ => anchor.x1 - size.width - gap,
            };
            let top = align_on(anchor.y0, anchor.y1, size.height, settings.align, shift);
            Point::new(left, top)
        }
    }
}

fn align_on(start: f64, end: f64, len: f64, align: Align, shift: f64) -> f64 {
    match align {
        Align::Start => start + shift,
        Align::Center => start + (end - start) / 2.0 - len / 2.0 + shift,
        Align::End => end - len - shift,
    }
}

/// Total distance the placement sticks out of the viewport on the side's axis.
fn primary_overflow(origin: Point, size: Size, side: Side, viewport: Rect) -> f64 {
    let (start, len, lo, hi) = match side.primary_axis() {
        Axis::Vertical => (origin.y, size.height, viewport.y0, viewport.y1),
        Axis::Horizontal => (origin.x, size.width, viewport.x0, viewport.x1),
    };
    (lo - start).max(0.0) + (start + len - hi).max(0.0)
}

/// Clamp `[start, start + len]` into `[lo, hi]`, pinning to `lo` when it cannot fit.
///
/// An inverted or NaN range also pins to `lo`.
fn clamp_axis(start: f64, len: f64, lo: f64, hi: f64) -> f64 {
    if !(len < hi - lo) {
        return lo;
    }
    start.max(lo).min(hi - len)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 400.0, 300.0);

    fn menu(w: f64, h: f64) -> Rect {
        Rect::new(0.0, 0.0, w, h)
    }

    fn place_default(anchor: Rect, floating: Rect) -> AnchoredPosition {
        compute_position(anchor, floating, VIEWPORT, &PositionSettings::default())
    }

    #[test]
    fn outside_bottom_start_below_anchor() {
        let anchor = Rect::new(50.0, 40.0, 150.0, 60.0);
        let pos = place_default(anchor, menu(80.0, 100.0));
        assert_eq!(pos.anchor_side, Some(Side::OutsideBottom));
        assert_eq!(pos.top, 64.0);
        assert_eq!(pos.left, 50.0);
    }

    #[test]
    fn alignment_center_and_end() {
        let anchor = Rect::new(100.0, 40.0, 200.0, 60.0);
        let center = PositionSettings::new(Side::OutsideBottom, Align::Center);
        let pos = compute_position(anchor, menu(60.0, 20.0), VIEWPORT, &center);
        assert_eq!(pos.left, 150.0 - 30.0);

        let end = PositionSettings::new(Side::OutsideBottom, Align::End);
        let pos = compute_position(anchor, menu(60.0, 20.0), VIEWPORT, &end);
        assert_eq!(pos.left, 200.0 - 60.0);
    }

    #[test]
    fn left_and_right_sides_align_vertically() {
        let anchor = Rect::new(150.0, 100.0, 200.0, 140.0);
        let right = PositionSettings::new(Side::OutsideRight, Align::Start);
        let pos = compute_position(anchor, menu(60.0, 30.0), VIEWPORT, &right);
        assert_eq!(pos.anchor_side, Some(Side::OutsideRight));
        assert_eq!(pos.left, 204.0);
        assert_eq!(pos.top, 100.0);

        let left = PositionSettings::new(Side::OutsideLeft, Align::End);
        let pos = compute_position(anchor, menu(60.0, 30.0), VIEWPORT, &left);
        assert_eq!(pos.left, 150.0 - 60.0 - 4.0);
        assert_eq!(pos.top, 140.0 - 30.0);
    }

    #[test]
    fn inside_sides_overlap_anchor() {
        let anchor = Rect::new(100.0, 100.0, 300.0, 250.0);
        let top = PositionSettings::new(Side::InsideTop, Align::Start);
        let pos = compute_position(anchor, menu(50.0, 40.0), VIEWPORT, &top);
        assert_eq!((pos.top, pos.left), (104.0, 104.0));

        let bottom_end = PositionSettings::new(Side::InsideBottom, Align::End);
        let pos = compute_position(anchor, menu(50.0, 40.0), VIEWPORT, &bottom_end);
        assert_eq!((pos.top, pos.left), (250.0 - 40.0 - 4.0, 300.0 - 50.0 - 4.0));

        let center = PositionSettings::new(Side::InsideCenter, Align::Center);
        let pos = compute_position(anchor, menu(50.0, 40.0), VIEWPORT, &center);
        assert_eq!((pos.top, pos.left), (175.0 - 20.0, 200.0 - 25.0));
        assert_eq!(pos.anchor_side, Some(Side::InsideCenter));
    }

    #[test]
    fn bottom_overflow_flips_to_top() {
        let anchor = Rect::new(10.0, 250.0, 60.0, 270.0);
        let pos = place_default(anchor, menu(80.0, 100.0));
        assert_eq!(pos.anchor_side, Some(Side::OutsideTop));
        assert_eq!(pos.top, 250.0 - 100.0 - 4.0);
    }

    #[test]
    fn right_overflow_flips_to_left() {
        let anchor = Rect::new(330.0, 10.0, 380.0, 30.0);
        let settings = PositionSettings::new(Side::OutsideRight, Align::Start);
        let pos = compute_position(anchor, menu(100.0, 40.0), VIEWPORT, &settings);
        assert_eq!(pos.anchor_side, Some(Side::OutsideLeft));
        assert_eq!(pos.left, 330.0 - 100.0 - 4.0);
    }

    #[test]
    fn cross_axis_is_clamped_when_side_fits() {
        // Start alignment would push the menu past the right edge.
        let anchor = Rect::new(350.0, 10.0, 390.0, 30.0);
        let pos = place_default(anchor, menu(120.0, 40.0));
        assert_eq!(pos.anchor_side, Some(Side::OutsideBottom));
        assert_eq!(pos.left, 400.0 - 120.0);
    }

    #[test]
    fn neither_side_fits_clamps_into_viewport() {
        // Anchor sits in the middle; a 200px tall menu fits neither above nor below.
        let anchor = Rect::new(10.0, 120.0, 60.0, 170.0);
        let pos = place_default(anchor, menu(80.0, 200.0));
        // Below overflows by 174 - 100 = 74, above by 200 - 116 = 84: bottom wins.
        assert_eq!(pos.anchor_side, Some(Side::OutsideBottom));
        assert_eq!(pos.top, 100.0);
        let rect = pos.rect(Size::new(80.0, 200.0));
        assert!(rect.y0 >= VIEWPORT.y0 && rect.y1 <= VIEWPORT.y1);
    }

    #[test]
    fn equal_overflow_keeps_requested_side() {
        let anchor = Rect::new(10.0, 140.0, 60.0, 160.0);
        let settings = PositionSettings::default().with_anchor_offset(0.0);
        // Both sides have 140px of room for a 160px menu.
        let pos = compute_position(anchor, menu(80.0, 160.0), VIEWPORT, &settings);
        assert_eq!(pos.anchor_side, Some(Side::OutsideBottom));
    }

    #[test]
    fn out_of_bounds_returns_raw_flipped_placement() {
        let anchor = Rect::new(10.0, 120.0, 60.0, 170.0);
        let settings = PositionSettings::default().with_allow_out_of_bounds(true);
        let pos = compute_position(anchor, menu(80.0, 200.0), VIEWPORT, &settings);
        assert_eq!(pos.anchor_side, None);
        assert_eq!(pos.top, 120.0 - 200.0 - 4.0);
        assert_eq!(pos.left, 10.0);
    }

    #[test]
    fn oversized_floating_pins_to_viewport_origin() {
        let anchor = Rect::new(10.0, 10.0, 60.0, 30.0);
        let pos = place_default(anchor, menu(500.0, 400.0));
        assert_eq!((pos.top, pos.left), (0.0, 0.0));
    }

    #[test]
    fn inside_center_never_flips() {
        let anchor = Rect::new(10.0, 10.0, 60.0, 30.0);
        let settings = PositionSettings::new(Side::InsideCenter, Align::Start);
        let pos = compute_position(anchor, menu(40.0, 100.0), VIEWPORT, &settings);
        assert_eq!(pos.anchor_side, Some(Side::InsideCenter));
        assert_eq!(pos.top, 0.0);
    }

    #[test]
    fn non_zero_viewport_origin() {
        let viewport = Rect::new(100.0, 100.0, 300.0, 300.0);
        let anchor = Rect::new(120.0, 260.0, 160.0, 280.0);
        let settings = PositionSettings::default();
        let pos = compute_position(anchor, menu(50.0, 60.0), viewport, &settings);
        assert_eq!(pos.anchor_side, Some(Side::OutsideTop));
        assert_eq!(pos.top, 260.0 - 60.0 - 4.0);
    }

    #[test]
    fn degenerate_viewports_do_not_panic() {
        let anchor = Rect::new(10.0, 10.0, 50.0, 50.0);
        let settings = PositionSettings::default();

        let nan = Rect::new(0.0, 0.0, f64::NAN, 300.0);
        let pos = compute_position(anchor, menu(40.0, 40.0), nan, &settings);
        assert_eq!(pos.left, 0.0);

        let inverted = Rect::new(400.0, 300.0, 0.0, 0.0);
        let pos = compute_position(anchor, menu(40.0, 40.0), inverted, &settings);
        assert_eq!((pos.top, pos.left), (300.0, 400.0));

        let nan_menu = Rect::new(0.0, 0.0, f64::NAN, f64::NAN);
        let pos = compute_position(anchor, nan_menu, VIEWPORT, &settings);
        assert!(pos.anchor_side.is_some());
    }
}
