// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer click events.

use kurbo::Point;

/// Mouse button identifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Main button, usually the left button.
    Primary,
    /// Secondary button, usually the right button.
    Secondary,
    /// Auxiliary button, usually the wheel button.
    Auxiliary,
    /// Any other button, by platform index.
    Other(u8),
}

/// A completed click delivered to the element `target`.
///
/// `target` is the innermost element under the pointer as resolved by the
/// host's hit testing.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent<K> {
    /// Innermost element under the pointer.
    pub target: K,
    /// Pointer position, in the host's coordinate space.
    pub position: Point,
    /// Button that produced the click.
    pub button: PointerButton,
    handled: bool,
}

impl<K> PointerEvent<K> {
    /// Create an unhandled click with the primary button.
    pub fn primary(target: K, position: Point) -> Self {
        Self::new(target, position, PointerButton::Primary)
    }

    /// Create an unhandled click.
    pub fn new(target: K, position: Point, button: PointerButton) -> Self {
        Self {
            target,
            position,
            button,
            handled: false,
        }
    }

    /// Whether the click came from the primary button.
    pub fn is_primary(&self) -> bool {
        self.button == PointerButton::Primary
    }

    /// Whether some handler already consumed this event.
    pub fn is_handled(&self) -> bool {
        self.handled
    }

    /// Mark the event consumed.
    pub fn mark_handled(&mut self) {
        self.handled = true;
    }
}
