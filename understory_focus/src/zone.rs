// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arrow-key navigation among the tabbable descendants of a container.

use smallvec::SmallVec;
use understory_event_state::key::{Key, KeyEvent};

use crate::cycle::{Step, step};
use crate::iter::iterate_focusable;
use crate::tree::{FocusTree, contains};

bitflags::bitflags! {
    /// Keys a [`FocusZone`] responds to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
    pub struct FocusKeys: u16 {
        /// Up/Down arrows.
        const ARROW_VERTICAL   = 1 << 0;
        /// Left/Right arrows.
        const ARROW_HORIZONTAL = 1 << 1;
        /// Home jumps to the first item, End to the last.
        const HOME_AND_END     = 1 << 2;
        /// Page Up jumps to the first item, Page Down to the last.
        const PAGE_UP_DOWN     = 1 << 3;
        /// `j` moves forward, `k` backward.
        const JK               = 1 << 4;
        /// `l` moves forward, `h` backward.
        const HL               = 1 << 5;
        /// `s` moves forward, `w` backward.
        const WS               = 1 << 6;
        /// `d` moves forward, `a` backward.
        const AD               = 1 << 7;
        /// All four arrows.
        const ARROW_ALL = Self::ARROW_VERTICAL.bits() | Self::ARROW_HORIZONTAL.bits();
    }
}

/// Arrow-key axis of a [`FocusZone`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum FocusZoneDirection {
    /// Left/Right arrows.
    Horizontal,
    /// Up/Down arrows.
    Vertical,
    /// All four arrows.
    Both,
}

impl From<FocusZoneDirection> for FocusKeys {
    fn from(direction: FocusZoneDirection) -> Self {
        match direction {
            FocusZoneDirection::Horizontal => Self::ARROW_HORIZONTAL,
            FocusZoneDirection::Vertical => Self::ARROW_VERTICAL,
            FocusZoneDirection::Both => Self::ARROW_ALL,
        }
    }
}

/// What happens when navigation runs past either end.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum FocusOutBehavior {
    /// Continue from the other end.
    #[default]
    Wrap,
    /// Stay on the edge item.
    Stop,
}

/// Settings for a [`FocusZone`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct FocusZoneSettings {
    /// A disabled zone never activates.
    pub disabled: bool,
    /// Keys the zone responds to.
    pub keys: FocusKeys,
    /// Behavior at either end of the item list.
    pub focus_out: FocusOutBehavior,
}

impl Default for FocusZoneSettings {
    fn default() -> Self {
        Self {
            disabled: false,
            keys: FocusKeys::ARROW_VERTICAL | FocusKeys::HOME_AND_END,
            focus_out: FocusOutBehavior::Wrap,
        }
    }
}

impl FocusZoneSettings {
    /// Replace the arrow keys with those of `direction`, keeping other bindings.
    #[must_use]
    pub fn with_direction(mut self, direction: FocusZoneDirection) -> Self {
        self.keys.remove(FocusKeys::ARROW_ALL);
        self.keys |= direction.into();
        self
    }

    /// Replace the end-of-list behavior.
    #[must_use]
    pub fn with_focus_out(mut self, focus_out: FocusOutBehavior) -> Self {
        self.focus_out = focus_out;
        self
    }

    fn step_for(&self, key: Key) -> Option<Step> {
        let keys = self.keys;
        let step = match key {
            Key::ArrowDown if keys.contains(FocusKeys::ARROW_VERTICAL) => Step::Forward,
            Key::ArrowUp if keys.contains(FocusKeys::ARROW_VERTICAL) => Step::Backward,
            Key::ArrowRight if keys.contains(FocusKeys::ARROW_HORIZONTAL) => Step::Forward,
            Key::ArrowLeft if keys.contains(FocusKeys::ARROW_HORIZONTAL) => Step::Backward,
            Key::Home if keys.contains(FocusKeys::HOME_AND_END) => Step::First,
            Key::End if keys.contains(FocusKeys::HOME_AND_END) => Step::Last,
            Key::PageUp if keys.contains(FocusKeys::PAGE_UP_DOWN) => Step::First,
            Key::PageDown if keys.contains(FocusKeys::PAGE_UP_DOWN) => Step::Last,
            Key::Character(c) => match c {
                'j' if keys.contains(FocusKeys::JK) => Step::Forward,
                'k' if keys.contains(FocusKeys::JK) => Step::Backward,
                'l' if keys.contains(FocusKeys::HL) => Step::Forward,
                'h' if keys.contains(FocusKeys::HL) => Step::Backward,
                's' if keys.contains(FocusKeys::WS) => Step::Forward,
                'w' if keys.contains(FocusKeys::WS) => Step::Backward,
                'd' if keys.contains(FocusKeys::AD) => Step::Forward,
                'a' if keys.contains(FocusKeys::AD) => Step::Backward,
                _ => return None,
            },
            _ => return None,
        };
        Some(step)
    }
}

/// Moves focus among a container's tabbable descendants with arrow keys.
///
/// The zone tracks the index of the current item. Keys move that index
/// through the container's [focusable set](crate::iterate_focusable) and
/// focus the item at the new index. Tab is left alone, so a zone composes
/// with a [`FocusTrap`](crate::FocusTrap) on the same container.
#[derive(Clone, Debug)]
pub struct FocusZone<K> {
    container: K,
    settings: FocusZoneSettings,
    active: bool,
    current_index: Option<usize>,
}

impl<K: Copy + Eq + core::fmt::Debug> FocusZone<K> {
    /// Create an inactive zone for `container`.
    pub fn new(container: K, settings: FocusZoneSettings) -> Self {
        Self {
            container,
            settings,
            active: false,
            current_index: None,
        }
    }

    /// The navigated container.
    pub fn container(&self) -> K {
        self.container
    }

    /// Whether the zone currently reacts to keys.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Index of the current item within the focusable set, if any.
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Start reacting to keys. Returns whether this call activated the zone.
    pub fn activate(&mut self) -> bool {
        if self.active || self.settings.disabled {
            return false;
        }
        self.active = true;
        tracing::debug!(container = ?self.container, "focus zone activated");
        true
    }

    /// Stop reacting to keys and forget the current item.
    pub fn deactivate(&mut self) {
        if self.active {
            self.active = false;
            self.current_index = None;
            tracing::debug!(container = ?self.container, "focus zone deactivated");
        }
    }

    /// Apply a navigation key. Returns the newly focused node.
    ///
    /// Bound keys are marked handled even when focus cannot move (for example
    /// at an edge with [`FocusOutBehavior::Stop`]), so the host does not also
    /// scroll. Chords with Control, Alt, or Meta are ignored, as are keys
    /// targeted outside the container.
    pub fn handle_key<T>(&mut self, tree: &mut T, event: &mut KeyEvent<K>) -> Option<K>
    where
        T: FocusTree<K> + ?Sized,
    {
        if !self.active
            || event.is_handled()
            || event.has_command_modifier()
            || !contains(&*tree, self.container, event.target)
        {
            return None;
        }
        let direction = self.settings.step_for(event.key)?;
        let items: SmallVec<[K; 16]> = iterate_focusable(&*tree, self.container).collect();
        if items.is_empty() {
            return None;
        }
        event.mark_handled();

        let origin = tree
            .focused()
            .filter(|f| items.contains(f))
            .or_else(|| self.current_index.and_then(|i| items.get(i).copied()));
        let wrap = self.settings.focus_out == FocusOutBehavior::Wrap;
        let target = step(&items, origin, direction, wrap)?;
        if !tree.set_focus(target) {
            return None;
        }
        self.current_index = items.iter().position(|&k| k == target);
        tracing::trace!(?target, index = ?self.current_index, "focus zone moved focus");
        Some(target)
    }

    /// Track focus that arrived on `target` by other means (pointer, script).
    pub fn handle_focus_in<T>(&mut self, tree: &T, target: K)
    where
        T: FocusTree<K> + ?Sized,
    {
        if !self.active {
            return;
        }
        if let Some(index) = iterate_focusable(tree, self.container).position(|k| k == target) {
            self.current_index = Some(index);
        }
    }
}
