// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Event State: input event payloads shared by behavior crates.
//!
//! Behaviors such as focus traps, focus zones, and overlay gesture
//! classification all consume the same two kinds of input:
//!
//! - [`KeyEvent`](key::KeyEvent): a logical key press with [`Modifiers`](key::Modifiers).
//! - [`PointerEvent`](pointer::PointerEvent): a click with a [`PointerButton`](pointer::PointerButton).
//!
//! It also defines [`ListenerHost`](listener::ListenerHost), the seam through
//! which behaviors ask the host to start and stop delivering those events.
//!
//! Both carry a target handle `K` chosen by the host and an "already handled"
//! mark. A behavior that consumes an event marks it handled so that later
//! behaviors (and the host's default action, such as scrolling) can skip it.
//! Marking is sticky: once handled, an event stays handled.
//!
//! ```rust
//! use understory_event_state::key::{Key, KeyEvent, Modifiers};
//!
//! let mut ev = KeyEvent::new(7_u32, Key::Tab).with_modifiers(Modifiers::SHIFT);
//! assert!(ev.shift());
//! assert!(!ev.is_handled());
//! ev.mark_handled();
//! assert!(ev.is_handled());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod key;
pub mod listener;
pub mod pointer;
