// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lazy traversal of the tabbable descendants of a container.

use crate::tree::{FocusTree, is_rendered};

/// Iterator over the tabbable descendants of a container, in document order.
///
/// Created by [`iterate_focusable`]. The walk is pre-order, never yields the
/// container itself, and skips the whole subtree below a hidden node.
/// It reads the tree as it goes, so it reflects the tree at the time of each
/// step; create a new one after mutating the tree.
pub struct FocusableIter<'a, K, T: ?Sized> {
    tree: &'a T,
    root: K,
    next: Option<K>,
}

impl<K: core::fmt::Debug, T: ?Sized> core::fmt::Debug for FocusableIter<'_, K, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FocusableIter")
            .field("root", &self.root)
            .field("next", &self.next)
            .finish_non_exhaustive()
    }
}

/// Walk the tabbable descendants of `container`.
///
/// Each call starts a fresh walk over the current tree. A hidden container
/// yields nothing.
pub fn iterate_focusable<K, T>(tree: &T, container: K) -> FocusableIter<'_, K, T>
where
    K: Copy + Eq,
    T: FocusTree<K> + ?Sized,
{
    let next = if is_rendered(tree, container) {
        tree.first_child(container)
    } else {
        None
    };
    FocusableIter {
        tree,
        root: container,
        next,
    }
}

impl<K, T> FocusableIter<'_, K, T>
where
    K: Copy + Eq,
    T: FocusTree<K> + ?Sized,
{
    /// Next node in pre-order after `node`, bounded to the container's subtree.
    fn advance(&self, node: K, descend: bool) -> Option<K> {
        if descend && let Some(child) = self.tree.first_child(node) {
            return Some(child);
        }
        let mut current = node;
        loop {
            if current == self.root {
                return None;
            }
            if let Some(sibling) = self.tree.next_sibling(current) {
                return Some(sibling);
            }
            current = self.tree.parent(current)?;
        }
    }
}

impl<K, T> Iterator for FocusableIter<'_, K, T>
where
    K: Copy + Eq,
    T: FocusTree<K> + ?Sized,
{
    type Item = K;

    fn next(&mut self) -> Option<K> {
        while let Some(node) = self.next {
            let props = self.tree.focus_props(node);
            let rendered = props.is_some_and(|p| !p.hidden);
            self.next = self.advance(node, rendered);
            if props.is_some_and(|p| p.is_tabbable()) {
                return Some(node);
            }
        }
        None
    }
}
