// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement settings and results.

use kurbo::{Point, Rect, Size};

/// Which edge of the anchor the floating element attaches to.
///
/// `Outside*` sides abut the anchor; `Inside*` sides overlap it and line up
/// with the named edge from the inside.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Side {
    /// Above the anchor.
    OutsideTop,
    /// Below the anchor.
    #[default]
    OutsideBottom,
    /// Left of the anchor.
    OutsideLeft,
    /// Right of the anchor.
    OutsideRight,
    /// Overlapping, flush with the anchor's top edge.
    InsideTop,
    /// Overlapping, flush with the anchor's bottom edge.
    InsideBottom,
    /// Overlapping, flush with the anchor's left edge.
    InsideLeft,
    /// Overlapping, flush with the anchor's right edge.
    InsideRight,
    /// Overlapping, vertically centered on the anchor.
    InsideCenter,
}

/// The axis a [`Side`] moves the floating element along.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left/right placement.
    Horizontal,
    /// Top/bottom placement.
    Vertical,
}

impl Side {
    /// The side on the other end of the same axis.
    ///
    /// [`Side::InsideCenter`] has no opposite and returns itself.
    pub const fn opposite(self) -> Self {
        match self {
            Self::OutsideTop => Self::OutsideBottom,
            Self::OutsideBottom => Self::OutsideTop,
            Self::OutsideLeft => Self::OutsideRight,
            Self::OutsideRight => Self::OutsideLeft,
            Self::InsideTop => Self::InsideBottom,
            Self::InsideBottom => Self::InsideTop,
            Self::InsideLeft => Self::InsideRight,
            Self::InsideRight => Self::InsideLeft,
            Self::InsideCenter => Self::InsideCenter,
        }
    }

    /// Whether the floating element overlaps the anchor.
    pub const fn is_inside(self) -> bool {
        matches!(
            self,
            Self::InsideTop
                | Self::InsideBottom
                | Self::InsideLeft
                | Self::InsideRight
                | Self::InsideCenter
        )
    }

    /// The axis this side places along; alignment uses the other one.
    pub const fn primary_axis(self) -> Axis {
        match self {
            Self::OutsideLeft | Self::OutsideRight | Self::InsideLeft | Self::InsideRight => {
                Axis::Horizontal
            }
            _ => Axis::Vertical,
        }
    }
}

/// Placement along the axis perpendicular to the [`Side`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Align {
    /// Line up the floating element's start edge with the anchor's.
    #[default]
    Start,
    /// Center the floating element on the anchor.
    Center,
    /// Line up the floating element's end edge with the anchor's.
    End,
}

const DEFAULT_OFFSET: f64 = 4.0;

/// Settings for [`compute_position`](crate::compute_position).
///
/// `side` and `align` are independent: `side` picks the anchor edge and
/// `align` slides the floating element along that edge.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "SettingsConfig")
)]
pub struct PositionSettings {
    /// Anchor edge to attach to.
    pub side: Side,
    /// Alignment along the attached edge.
    pub align: Align,
    /// Gap between the anchor edge and the floating element, along the side's axis.
    pub anchor_offset: f64,
    /// Shift along the alignment axis, pointing away from the aligned edge.
    pub alignment_offset: f64,
    /// Skip clamping into the viewport when no side fits.
    pub allow_out_of_bounds: bool,
}

impl PositionSettings {
    /// Settings for `side` and `align` with offsets defaulted for that pair.
    ///
    /// `anchor_offset` is 4 except for [`Side::InsideCenter`], where it is 0.
    /// `alignment_offset` is 4 for inside sides with non-center alignment and
    /// 0 otherwise.
    pub fn new(side: Side, align: Align) -> Self {
        Self {
            side,
            align,
            anchor_offset: default_anchor_offset(side),
            alignment_offset: default_alignment_offset(side, align),
            allow_out_of_bounds: false,
        }
    }

    /// Replace the anchor offset.
    #[must_use]
    pub fn with_anchor_offset(mut self, offset: f64) -> Self {
        self.anchor_offset = offset;
        self
    }

    /// Replace the alignment offset.
    #[must_use]
    pub fn with_alignment_offset(mut self, offset: f64) -> Self {
        self.alignment_offset = offset;
        self
    }

    /// Allow or forbid out-of-bounds results.
    #[must_use]
    pub fn with_allow_out_of_bounds(mut self, allow: bool) -> Self {
        self.allow_out_of_bounds = allow;
        self
    }
}

impl Default for PositionSettings {
    fn default() -> Self {
        Self::new(Side::default(), Align::default())
    }
}

fn default_anchor_offset(side: Side) -> f64 {
    if side == Side::InsideCenter {
        0.0
    } else {
        DEFAULT_OFFSET
    }
}

fn default_alignment_offset(side: Side, align: Align) -> f64 {
    if side.is_inside() && align != Align::Center {
        DEFAULT_OFFSET
    } else {
        0.0
    }
}

/// Deserialization shape where offsets may be omitted and then follow the
/// side/alignment defaults.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default)]
struct SettingsConfig {
    side: Side,
    align: Align,
    anchor_offset: Option<f64>,
    alignment_offset: Option<f64>,
    allow_out_of_bounds: bool,
}

#[cfg(feature = "serde")]
impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            side: Side::default(),
            align: Align::default(),
            anchor_offset: None,
            alignment_offset: None,
            allow_out_of_bounds: false,
        }
    }
}

#[cfg(feature = "serde")]
impl From<SettingsConfig> for PositionSettings {
    fn from(config: SettingsConfig) -> Self {
        let mut settings = Self::new(config.side, config.align);
        if let Some(offset) = config.anchor_offset {
            settings.anchor_offset = offset;
        }
        if let Some(offset) = config.alignment_offset {
            settings.alignment_offset = offset;
        }
        settings.allow_out_of_bounds = config.allow_out_of_bounds;
        settings
    }
}

/// Result of a placement.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AnchoredPosition {
    /// Top edge of the floating element.
    pub top: f64,
    /// Left edge of the floating element.
    pub left: f64,
    /// Side actually used, after any flip.
    ///
    /// `None` when no side fit the viewport and `allow_out_of_bounds`
    /// returned an unclamped best effort.
    pub anchor_side: Option<Side>,
}

impl AnchoredPosition {
    /// Top-left corner as a point.
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Rectangle occupied by a floating element of `size` at this position.
    pub fn rect(&self, size: Size) -> Rect {
        Rect::from_origin_size(self.origin(), size)
    }
}
