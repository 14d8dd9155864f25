// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_anchored_position --heading-base-level=0

//! Understory Anchored Position: place a floating panel next to an anchor.
//!
//! Menus, popovers, and autocomplete lists all need the same thing: given the
//! bounds of an anchor (the button that opened the panel), the size of the
//! floating panel, and the visible viewport, find a top-left corner for the
//! panel that keeps it attached to the anchor and on screen.
//!
//! - [`Side`] picks the anchor edge (`outside-*` abuts it, `inside-*` overlaps it).
//! - [`Align`] slides the panel along that edge.
//! - [`PositionSettings`] adds offsets and the out-of-bounds policy.
//! - [`compute_position`] is a pure function over rectangles.
//! - [`anchored_position`] measures live elements through a host [`Geometry`].
//!
//! ## Collisions
//!
//! When the requested side does not fit, the panel flips to the opposite
//! side. The returned [`AnchoredPosition::anchor_side`] always reports the
//! side actually used, so hosts can pick matching animations or arrows.
//! When neither side fits, the panel is clamped into the viewport, or left
//! where it is when [`PositionSettings::allow_out_of_bounds`] is set.
//!
//! ## Not a layout engine
//!
//! This crate consumes already-measured rectangles. It does not measure
//! content, and it does not track scrolling: recompute whenever the anchor's
//! scroll ancestry scrolls or the window resizes.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_anchored_position::{Align, PositionSettings, Side, compute_position};
//!
//! let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
//! let button = Rect::new(100.0, 100.0, 180.0, 124.0);
//! let menu = Rect::new(0.0, 0.0, 160.0, 200.0);
//!
//! let settings = PositionSettings::new(Side::OutsideBottom, Align::Center);
//! let pos = compute_position(button, menu, viewport, &settings);
//! assert_eq!(pos.anchor_side, Some(Side::OutsideBottom));
//! assert_eq!(pos.top, 128.0);
//! assert_eq!(pos.left, 60.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: `no_std` builds that rely on `libm` for floating-point math.
//! - `serde`: `Serialize`/`Deserialize` for [`PositionSettings`], [`Side`], and [`Align`].
//!   Omitted offsets deserialize to the same defaults as [`PositionSettings::new`].
//!
//! This crate is `no_std`.

#![no_std]

mod engine;
mod geometry;
mod types;

pub use engine::compute_position;
pub use geometry::{Geometry, anchored_position};
pub use types::{Align, AnchoredPosition, Axis, PositionSettings, Side};
