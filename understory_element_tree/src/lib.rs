// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Element Tree: a small host tree for Understory behaviors.
//!
//! The overlay, focus, and positioning crates never own UI elements; they
//! reach the host through three traits. This crate is a ready-made host that
//! implements all of them over one generational arena:
//!
//! - [`Geometry`](understory_anchored_position::Geometry): measured bounds of
//!   rendered elements and a shared viewport.
//! - [`FocusTree`](understory_focus::FocusTree): parent/child structure,
//!   [`FocusProps`](understory_focus::FocusProps) derived from [`ElementFlags`],
//!   and the focused element.
//! - [`ListenerHost`](understory_event_state::listener::ListenerHost): a
//!   listener registry the host's event loop can query with
//!   [`ElementTree::listeners`].
//!
//! Handles are generational: an [`ElementId`] kept past removal is reported
//! as stale ([`TreeError::StaleElement`]) by mutations and ignored by queries.
//!
//! ## Not a layout engine
//!
//! Elements carry already-measured rectangles. Upstream code computes layout
//! and pushes the results with [`ElementTree::set_bounds`].
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod host;
mod tree;
mod types;

pub use tree::ElementTree;
pub use types::{Element, ElementFlags, ElementId, TreeError};
