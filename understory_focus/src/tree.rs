// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host element tree as seen by focus behaviors.

/// Per-node focus properties provided by the host.
///
/// These are layered on top of the host's element tree and decide whether a
/// node can take keyboard focus.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FocusProps {
    /// Whether the node is focusable by its nature (buttons, inputs, links).
    pub focusable: bool,
    /// Explicit tab index.
    ///
    /// A non-negative value makes any node reachable with Tab; a negative
    /// value keeps the node programmatically focusable but out of the Tab order.
    pub tab_index: Option<i32>,
    /// Disabled nodes cannot take focus.
    pub disabled: bool,
    /// Hidden nodes are not rendered; neither they nor their descendants can take focus.
    pub hidden: bool,
}

impl FocusProps {
    /// Properties of a natively focusable node.
    pub fn focusable() -> Self {
        Self {
            focusable: true,
            ..Self::default()
        }
    }

    /// Whether this node, taken on its own, belongs in the Tab order.
    pub fn is_tabbable(&self) -> bool {
        if self.hidden || self.disabled {
            return false;
        }
        match self.tab_index {
            Some(index) => index >= 0,
            None => self.focusable,
        }
    }

    /// Whether this node, taken on its own, can receive focus programmatically.
    pub fn is_focusable(&self) -> bool {
        !self.hidden && !self.disabled && (self.focusable || self.tab_index.is_some())
    }
}

/// Read access to the host's element tree, plus the host's focus state.
///
/// Children are visited through `first_child`/`next_sibling` so that
/// traversal never allocates. Sibling order must be document order.
///
/// Stale or unknown handles should report `None` from every query and
/// `false` from [`FocusTree::set_focus`].
pub trait FocusTree<K> {
    /// Parent of `node`, or `None` for roots and stale handles.
    fn parent(&self, node: K) -> Option<K>;

    /// First child of `node` in document order.
    fn first_child(&self, node: K) -> Option<K>;

    /// Next sibling of `node` in document order.
    fn next_sibling(&self, node: K) -> Option<K>;

    /// Focus properties of `node`, or `None` for stale handles.
    fn focus_props(&self, node: K) -> Option<FocusProps>;

    /// The node that currently has keyboard focus.
    fn focused(&self) -> Option<K>;

    /// Move keyboard focus to `node`. Returns whether focus moved.
    fn set_focus(&mut self, node: K) -> bool;
}

/// Whether `node` is `container` or one of its descendants.
pub fn contains<K, T>(tree: &T, container: K, node: K) -> bool
where
    K: Copy + Eq,
    T: FocusTree<K> + ?Sized,
{
    let mut current = Some(node);
    while let Some(n) = current {
        if n == container {
            return true;
        }
        current = tree.parent(n);
    }
    false
}

/// Whether `node` and all of its ancestors are rendered.
pub fn is_rendered<K, T>(tree: &T, node: K) -> bool
where
    K: Copy + Eq,
    T: FocusTree<K> + ?Sized,
{
    let mut current = Some(node);
    while let Some(n) = current {
        match tree.focus_props(n) {
            Some(props) if !props.hidden => current = tree.parent(n),
            _ => return false,
        }
    }
    true
}

/// Whether `node` can receive focus programmatically right now.
pub fn is_focusable<K, T>(tree: &T, node: K) -> bool
where
    K: Copy + Eq,
    T: FocusTree<K> + ?Sized,
{
    tree.focus_props(node).is_some_and(|p| p.is_focusable()) && is_rendered(tree, node)
}

/// Whether `node` is reachable with Tab right now.
pub fn is_tabbable<K, T>(tree: &T, node: K) -> bool
where
    K: Copy + Eq,
    T: FocusTree<K> + ?Sized,
{
    tree.focus_props(node).is_some_and(|p| p.is_tabbable()) && is_rendered(tree, node)
}
