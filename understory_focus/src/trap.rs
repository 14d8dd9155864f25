// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tab/Shift+Tab confinement within a container.

use smallvec::SmallVec;
use understory_event_state::key::{Key, KeyEvent};

use crate::cycle::{Step, step};
use crate::iter::iterate_focusable;
use crate::tree::{FocusTree, contains};

/// Settings for a [`FocusTrap`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct FocusTrapSettings {
    /// A disabled trap never activates.
    pub disabled: bool,
}

/// Keeps keyboard focus cycling inside a container while active.
///
/// - Tab on the last tabbable descendant moves to the first; Shift+Tab on
///   the first moves to the last. Every other Tab step inside the container
///   is applied by the trap too, so focus order is the container's document
///   order regardless of how the host orders Tab globally.
/// - Focus landing outside the container is pulled back to the first
///   tabbable descendant.
///
/// Activation does not move focus and deactivation does not restore it; pair
/// the trap with [`OpenCloseFocus`](crate::OpenCloseFocus) for that.
/// An empty container lets Tab through untouched.
#[derive(Clone, Debug)]
pub struct FocusTrap<K> {
    container: K,
    settings: FocusTrapSettings,
    active: bool,
}

impl<K: Copy + Eq + core::fmt::Debug> FocusTrap<K> {
    /// Create an inactive trap for `container`.
    pub fn new(container: K, settings: FocusTrapSettings) -> Self {
        Self {
            container,
            settings,
            active: false,
        }
    }

    /// The confined container.
    pub fn container(&self) -> K {
        self.container
    }

    /// Whether the trap is currently confining focus.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Start confining focus. Returns whether this call activated the trap.
    pub fn activate(&mut self) -> bool {
        if self.active || self.settings.disabled {
            return false;
        }
        self.active = true;
        tracing::debug!(container = ?self.container, "focus trap activated");
        true
    }

    /// Stop confining focus. Deactivating an inactive trap is a no-op.
    pub fn deactivate(&mut self) {
        if self.active {
            self.active = false;
            tracing::debug!(container = ?self.container, "focus trap deactivated");
        }
    }

    /// Apply a Tab or Shift+Tab press targeted inside the container.
    /// Returns the newly focused node.
    ///
    /// The event is marked handled when focus moved. Presses targeted
    /// outside the container pass through untouched.
    pub fn handle_key<T>(&mut self, tree: &mut T, event: &mut KeyEvent<K>) -> Option<K>
    where
        T: FocusTree<K> + ?Sized,
    {
        if !self.active
            || event.key != Key::Tab
            || event.is_handled()
            || event.has_command_modifier()
            || !contains(&*tree, self.container, event.target)
        {
            return None;
        }
        let items: SmallVec<[K; 16]> = iterate_focusable(&*tree, self.container).collect();
        let direction = if event.shift() {
            Step::Backward
        } else {
            Step::Forward
        };
        let target = step(&items, tree.focused(), direction, true)?;
        if !tree.set_focus(target) {
            return None;
        }
        event.mark_handled();
        tracing::trace!(?target, "focus trap moved focus");
        Some(target)
    }

    /// Pull focus back inside when it landed on `target` outside the container.
    pub fn handle_focus_in<T>(&mut self, tree: &mut T, target: K) -> Option<K>
    where
        T: FocusTree<K> + ?Sized,
    {
        if !self.active || contains(&*tree, self.container, target) {
            return None;
        }
        let first = iterate_focusable(&*tree, self.container).next()?;
        tracing::debug!(escaped_to = ?target, ?first, "focus left trap; restoring");
        tree.set_focus(first).then_some(first)
    }
}
