// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listener registration against a host's event dispatch.

/// Kind of event subscription a behavior asks the host for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Listener {
    /// Viewport or element resize affecting the target's layout.
    Resize,
    /// Scroll of any scroll container in the target's ancestry.
    Scroll,
    /// Primary clicks landing outside the target.
    OutsideClick,
    /// Escape key presses anywhere while the target is mounted.
    Escape,
    /// Tab key presses inside the target.
    FocusTrapKeys,
    /// Navigation key presses inside the target.
    FocusZoneKeys,
    /// Focus moving to any element, observed on behalf of the target.
    FocusIn,
}

/// Host-issued identifier for one attached listener.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Wrap a raw host identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw host identifier.
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Event dispatch side of the host UI tree.
///
/// Behaviors only record which events they need; the host decides how to
/// deliver them (typically by routing matching events to the behavior's
/// `handle_*` methods).
pub trait ListenerHost<K> {
    /// Start delivering `listener` events for `target`.
    fn attach(&mut self, target: K, listener: Listener) -> ListenerId;

    /// Stop delivering events for `id`. Unknown or already detached ids are ignored.
    fn detach(&mut self, id: ListenerId);
}
