// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Overlay: a controller for floating panels anchored to a trigger.
//!
//! [`AnchoredOverlay`] ties together the other Understory behaviors for one
//! anchor/panel pair:
//!
//! - placement from `understory_anchored_position`, recomputed on mount and on
//!   every resize or scroll;
//! - a [`FocusTrap`](understory_focus::FocusTrap) and a
//!   [`FocusZone`](understory_focus::FocusZone) on the panel, activated only
//!   once the panel has a position;
//! - focus handoff into the panel on open and back to the anchor on close;
//! - [gesture classification](gesture) of anchor clicks and keys, outside
//!   clicks, and Escape into open/close requests.
//!
//! The caller owns the `open` flag. The controller reads it on every call and
//! only *requests* transitions through a [`GestureSink`]; the caller applies
//! them (or not) and calls [`AnchoredOverlay::update`] again.
//!
//! Listener registration goes through the host's
//! [`ListenerHost`](understory_event_state::listener::ListenerHost) and is
//! owned by a [`Subscriptions`] set that is disposed on every close.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_element_tree::{Element, ElementTree};
//! use understory_event_state::key::{Key, KeyEvent};
//! use understory_event_state::pointer::PointerEvent;
//! use understory_focus::FocusTree;
//! use understory_overlay::{AnchoredOverlay, GestureIntent, OverlaySettings};
//!
//! let mut tree = ElementTree::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! let root = tree.insert(None, Element::new(Rect::new(0.0, 0.0, 800.0, 600.0))).unwrap();
//! let anchor = tree.insert(Some(root), Element::focusable(Rect::new(20.0, 20.0, 120.0, 44.0))).unwrap();
//!
//! let mut overlay = AnchoredOverlay::new(anchor, OverlaySettings::default());
//! let mut open = false;
//! let mut requests = Vec::new();
//!
//! // A click on the anchor requests an open; the caller applies it and mounts the panel.
//! let mut click = PointerEvent::primary(anchor, Point::new(30.0, 30.0));
//! overlay.handle_click(&mut tree, open, &mut click, &mut |i: GestureIntent| requests.push(i));
//! assert!(matches!(requests.as_slice(), [GestureIntent::Open(_)]));
//! open = true;
//!
//! let panel = tree.insert(Some(root), Element::new(Rect::new(0.0, 0.0, 160.0, 80.0))).unwrap();
//! let item = tree.insert(Some(panel), Element::focusable(Rect::new(0.0, 0.0, 160.0, 20.0))).unwrap();
//! overlay.update(&mut tree, open, Some(panel));
//!
//! // Placed below the anchor, and focus moved into the panel.
//! assert_eq!(overlay.position().unwrap().top, 48.0);
//! assert_eq!(tree.focused(), Some(item));
//!
//! // Escape requests a close; applying it returns focus to the anchor.
//! let mut esc = KeyEvent::new(item, Key::Escape);
//! overlay.handle_key(&mut tree, open, &mut esc, &mut |i: GestureIntent| requests.push(i));
//! assert!(esc.is_handled());
//! open = false;
//! overlay.update(&mut tree, open, None);
//! assert_eq!(tree.focused(), Some(anchor));
//! assert_eq!(tree.listener_count(), 0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies.
//! - `libm`: `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
pub mod gesture;
mod subscriptions;

pub use controller::{AnchoredOverlay, OverlayHost, OverlaySettings};
pub use gesture::{CloseGesture, GestureIntent, GestureKind, GestureSink, OpenGesture};
pub use subscriptions::Subscriptions;
