// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Focus: keyboard focus behaviors for UI containers.
//!
//! This crate provides three independent behaviors that operate on a host
//! element tree through the [`FocusTree`] trait:
//!
//! - [`FocusTrap`]: confines Tab/Shift+Tab to a container, wrapping at the ends,
//!   and pulls stray focus back inside.
//! - [`FocusZone`]: moves focus among a container's items with arrow keys
//!   (and optionally Home/End, Page Up/Down, or letter pairs).
//! - [`OpenCloseFocus`]: moves focus into a container when it opens and back to
//!   the previously focused node when it closes.
//!
//! All three draw their candidates from [`iterate_focusable`], a lazy,
//! document-order walk of the container's tabbable descendants that skips
//! hidden subtrees.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_event_state::key::{Key, KeyEvent, Modifiers};
//! use understory_focus::{FocusProps, FocusTrap, FocusTrapSettings, FocusTree};
//!
//! /// Three buttons (1, 2, 3) under container 0.
//! struct Flat {
//!     focused: Option<u32>,
//! }
//!
//! impl FocusTree<u32> for Flat {
//!     fn parent(&self, node: u32) -> Option<u32> {
//!         (1..=3).contains(&node).then_some(0)
//!     }
//!     fn first_child(&self, node: u32) -> Option<u32> {
//!         (node == 0).then_some(1)
//!     }
//!     fn next_sibling(&self, node: u32) -> Option<u32> {
//!         (1..3).contains(&node).then_some(node + 1)
//!     }
//!     fn focus_props(&self, node: u32) -> Option<FocusProps> {
//!         match node {
//!             0 => Some(FocusProps::default()),
//!             1..=3 => Some(FocusProps::focusable()),
//!             _ => None,
//!         }
//!     }
//!     fn focused(&self) -> Option<u32> {
//!         self.focused
//!     }
//!     fn set_focus(&mut self, node: u32) -> bool {
//!         self.focused = Some(node);
//!         true
//!     }
//! }
//!
//! let mut tree = Flat { focused: Some(3) };
//! let mut trap = FocusTrap::new(0, FocusTrapSettings::default());
//! trap.activate();
//!
//! // Tab on the last button wraps to the first…
//! let mut tab = KeyEvent::new(3, Key::Tab);
//! assert_eq!(trap.handle_key(&mut tree, &mut tab), Some(1));
//! assert!(tab.is_handled());
//!
//! // …and Shift+Tab on the first wraps to the last.
//! let mut back = KeyEvent::new(1, Key::Tab).with_modifiers(Modifiers::SHIFT);
//! assert_eq!(trap.handle_key(&mut tree, &mut back), Some(3));
//! ```
//!
//! The behaviors are generic over the node handle `K`, so callers can use any
//! small, copyable id (for example `understory_element_tree::ElementId`).
//! They keep no references into the tree between calls; every call takes the
//! tree explicitly and re-reads it, so the focusable set always reflects the
//! tree as it is now.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies.
//! - `libm`: `no_std` builds that rely on `libm` for floating-point math.
//! - `serde`: `Serialize`/`Deserialize` for [`FocusTrapSettings`], [`FocusZoneSettings`],
//!   and their enums, so they can be loaded from configuration files.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cycle;
mod iter;
mod open_close;
mod trap;
mod tree;
mod zone;

pub use iter::{FocusableIter, iterate_focusable};
pub use open_close::{OpenCloseFocus, OpenCloseFocusSettings};
pub use trap::{FocusTrap, FocusTrapSettings};
pub use tree::{FocusProps, FocusTree, contains, is_focusable, is_rendered, is_tabbable};
pub use zone::{FocusKeys, FocusOutBehavior, FocusZone, FocusZoneDirection, FocusZoneSettings};
