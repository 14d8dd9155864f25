// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard events.

/// Logical key identity.
///
/// Only keys that Understory behaviors react to get their own variant;
/// printable keys arrive as [`Key::Character`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Tab (Shift+Tab is expressed through [`Modifiers::SHIFT`]).
    Tab,
    /// Enter / Return.
    Enter,
    /// Space bar.
    Space,
    /// Escape.
    Escape,
    /// Arrow up.
    ArrowUp,
    /// Arrow down.
    ArrowDown,
    /// Arrow left.
    ArrowLeft,
    /// Arrow right.
    ArrowRight,
    /// Home.
    Home,
    /// End.
    End,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// A printable character, as produced by the active layout.
    Character(char),
    /// Any other key.
    Other,
}

bitflags::bitflags! {
    /// Modifier keys held while a key was pressed.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT   = 0b0000_0001;
        /// Control.
        const CONTROL = 0b0000_0010;
        /// Alt / Option.
        const ALT     = 0b0000_0100;
        /// Meta / Command / Super.
        const META    = 0b0000_1000;
    }
}

/// A key press delivered to the element `target`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent<K> {
    /// Element that had keyboard focus when the key was pressed.
    pub target: K,
    /// Key that was pressed.
    pub key: Key,
    /// Modifiers held during the press.
    pub modifiers: Modifiers,
    handled: bool,
}

impl<K> KeyEvent<K> {
    /// Create an unhandled key event without modifiers.
    pub fn new(target: K, key: Key) -> Self {
        Self {
            target,
            key,
            modifiers: Modifiers::empty(),
            handled: false,
        }
    }

    /// Replace the modifier set.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Whether Shift was held.
    pub fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }

    /// Whether Control, Alt, or Meta was held.
    ///
    /// Navigation behaviors leave such chords to the host.
    pub fn has_command_modifier(&self) -> bool {
        self.modifiers
            .intersects(Modifiers::CONTROL | Modifiers::ALT | Modifiers::META)
    }

    /// Whether some handler already consumed this event.
    pub fn is_handled(&self) -> bool {
        self.handled
    }

    /// Mark the event consumed; the host should skip its default action.
    pub fn mark_handled(&mut self) {
        self.handled = true;
    }
}
