// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus handoff when a container opens and closes.

use crate::iter::iterate_focusable;
use crate::tree::{FocusTree, is_focusable};

/// Settings for [`OpenCloseFocus`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OpenCloseFocusSettings<K> {
    /// Node to focus on open. Falls back to the first tabbable descendant
    /// when absent or not focusable.
    pub initial_focus: Option<K>,
    /// Node to focus on close. Defaults to whatever had focus at open time.
    pub return_focus: Option<K>,
    /// Leave focus where it is on open.
    pub prevent_focus_on_open: bool,
    /// Leave focus where it is on close.
    pub suppress_return_focus: bool,
}

impl<K> Default for OpenCloseFocusSettings<K> {
    fn default() -> Self {
        Self {
            initial_focus: None,
            return_focus: None,
            prevent_focus_on_open: false,
            suppress_return_focus: false,
        }
    }
}

#[derive(Copy, Clone, Debug)]
struct Session<K> {
    container: K,
    restore_to: Option<K>,
}

/// Moves focus into a container when it opens and back out when it closes.
///
/// Activation happens at most once per open session: calling
/// [`activate`](Self::activate) again before [`deactivate`](Self::deactivate)
/// does nothing, so hosts may call it on every re-render.
#[derive(Clone, Debug)]
pub struct OpenCloseFocus<K> {
    settings: OpenCloseFocusSettings<K>,
    session: Option<Session<K>>,
}

impl<K: Copy + Eq + core::fmt::Debug> OpenCloseFocus<K> {
    /// Create an idle handoff with `settings`.
    pub fn new(settings: OpenCloseFocusSettings<K>) -> Self {
        Self {
            settings,
            session: None,
        }
    }

    /// Whether an open session is in progress.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Node focus will return to on [`deactivate`](Self::deactivate).
    pub fn restore_target(&self) -> Option<K> {
        self.session.and_then(|s| s.restore_to)
    }

    /// Open a session for `container`. Returns the node that received focus.
    pub fn activate<T>(&mut self, tree: &mut T, container: K) -> Option<K>
    where
        T: FocusTree<K> + ?Sized,
    {
        if self.session.is_some() {
            return None;
        }
        let restore_to = self.settings.return_focus.or_else(|| tree.focused());
        self.session = Some(Session {
            container,
            restore_to,
        });
        tracing::debug!(?container, ?restore_to, "open focus session started");

        if self.settings.prevent_focus_on_open {
            return None;
        }
        let target = self
            .settings
            .initial_focus
            .filter(|&k| is_focusable(&*tree, k))
            .or_else(|| iterate_focusable(&*tree, container).next())?;
        tree.set_focus(target).then_some(target)
    }

    /// End the session. Returns the node focus was restored to.
    pub fn deactivate<T>(&mut self, tree: &mut T) -> Option<K>
    where
        T: FocusTree<K> + ?Sized,
    {
        let session = self.session.take()?;
        tracing::debug!(container = ?session.container, "open focus session ended");
        if self.settings.suppress_return_focus {
            return None;
        }
        let target = session.restore_to?;
        if !is_focusable(&*tree, target) {
            tracing::debug!(?target, "return focus target is gone");
            return None;
        }
        tree.set_focus(target).then_some(target)
    }
}
