// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, updates, queries.

use alloc::vec::Vec;
use kurbo::Rect;
use understory_event_state::listener::{Listener, ListenerId};

use crate::types::{Element, ElementFlags, ElementId, TreeError};

/// Element tree with focus state and a listener registry.
///
/// Elements carry already-measured bounds; this tree does no layout. All
/// elements share one viewport, set with [`ElementTree::set_viewport`].
///
/// ## Example
///
/// ```rust
/// use kurbo::Rect;
/// use understory_element_tree::{Element, ElementTree};
///
/// let mut tree = ElementTree::new(Rect::new(0.0, 0.0, 800.0, 600.0));
/// let root = tree.insert(None, Element::new(Rect::new(0.0, 0.0, 800.0, 600.0))).unwrap();
/// let button = tree
///     .insert(Some(root), Element::focusable(Rect::new(10.0, 10.0, 90.0, 30.0)))
///     .unwrap();
///
/// assert_eq!(tree.children_of(root), &[button]);
/// assert_eq!(tree.next_depth_first(root), Some(button));
///
/// tree.remove(root).unwrap();
/// assert!(!tree.is_alive(button));
/// ```
pub struct ElementTree {
    /// slots
    nodes: Vec<Option<Node>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
    viewport: Rect,
    pub(crate) focused: Option<ElementId>,
    pub(crate) listeners: Vec<Registration>,
    pub(crate) next_listener: u64,
}

impl core::fmt::Debug for ElementTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("ElementTree")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &self.free_list.len())
            .field("viewport", &self.viewport)
            .field("focused", &self.focused)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node {
    generation: u32,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    pub(crate) element: Element,
}

#[derive(Copy, Clone, Debug)]
pub(crate) struct Registration {
    pub(crate) id: ListenerId,
    pub(crate) target: ElementId,
    pub(crate) kind: Listener,
}

impl ElementTree {
    /// Create an empty tree with the given viewport.
    pub fn new(viewport: Rect) -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            viewport,
            focused: None,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Insert a new element as the last child of `parent` (or as a root if `None`).
    pub fn insert(
        &mut self,
        parent: Option<ElementId>,
        element: Element,
    ) -> Result<ElementId, TreeError> {
        if let Some(p) = parent
            && !self.is_alive(p)
        {
            return Err(TreeError::StaleElement(p));
        }
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            (idx, generation)
        } else {
            self.nodes.push(None);
            self.generations.push(1);
            (self.nodes.len() - 1, 1)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "ElementId uses 32-bit indices by design."
        )]
        let id = ElementId::new(idx as u32, generation);
        self.nodes[idx] = Some(Node {
            generation,
            parent,
            children: Vec::new(),
            element,
        });
        if let Some(p) = parent.and_then(|p| self.node_opt_mut(p)) {
            p.children.push(id);
        }
        Ok(id)
    }

    /// Remove an element and its subtree.
    ///
    /// Focus inside the removed subtree is cleared. Listeners stay registered
    /// until their owner detaches them; they no longer receive events.
    pub fn remove(&mut self, id: ElementId) -> Result<(), TreeError> {
        if !self.is_alive(id) {
            return Err(TreeError::StaleElement(id));
        }
        if let Some(p) = self.parent_of(id).and_then(|p| self.node_opt_mut(p)) {
            p.children.retain(|c| *c != id);
        }
        self.remove_subtree(id);
        if self.focused.is_some_and(|f| !self.is_alive(f)) {
            tracing::debug!(?id, "focused element removed");
            self.focused = None;
        }
        Ok(())
    }

    fn remove_subtree(&mut self, id: ElementId) {
        if let Some(node) = self.nodes[id.idx()].take() {
            for child in node.children {
                self.remove_subtree(child);
            }
            self.free_list.push(id.idx());
        }
    }

    /// Update measured bounds.
    pub fn set_bounds(&mut self, id: ElementId, bounds: Rect) -> Result<(), TreeError> {
        self.node_opt_mut(id)
            .ok_or(TreeError::StaleElement(id))?
            .element
            .bounds = bounds;
        Ok(())
    }

    /// Update element flags.
    pub fn set_flags(&mut self, id: ElementId, flags: ElementFlags) -> Result<(), TreeError> {
        self.node_opt_mut(id)
            .ok_or(TreeError::StaleElement(id))?
            .element
            .flags = flags;
        Ok(())
    }

    /// Update the explicit tab index.
    pub fn set_tab_index(
        &mut self,
        id: ElementId,
        tab_index: Option<i32>,
    ) -> Result<(), TreeError> {
        self.node_opt_mut(id)
            .ok_or(TreeError::StaleElement(id))?
            .element
            .tab_index = tab_index;
        Ok(())
    }

    /// Replace the viewport shared by all elements.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    /// The viewport shared by all elements.
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Returns true if `id` refers to a live element.
    pub fn is_alive(&self, id: ElementId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .is_some_and(|n| n.generation == id.generation())
    }

    /// Element data for a live id.
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.node_opt(id).map(|n| &n.element)
    }

    /// Returns the parent of an element if live, or `None` for roots or stale ids.
    pub fn parent_of(&self, id: ElementId) -> Option<ElementId> {
        self.node_opt(id).and_then(|n| n.parent)
    }

    /// Get the children of an element, or an empty slice if it is stale.
    pub fn children_of(&self, id: ElementId) -> &[ElementId] {
        self.node_opt(id).map_or(&[], |n| &n.children)
    }

    /// Next element after `id` in depth-first order, without wrapping.
    pub fn next_depth_first(&self, current: ElementId) -> Option<ElementId> {
        if let Some(&first) = self.children_of(current).first() {
            return Some(first);
        }
        let mut node = current;
        while let Some(parent) = self.parent_of(node) {
            if let Some(sibling) = self.next_sibling_of(node) {
                return Some(sibling);
            }
            node = parent;
        }
        None
    }

    /// Whether the element and all of its ancestors are visible.
    pub fn is_rendered(&self, id: ElementId) -> bool {
        let mut current = Some(id);
        while let Some(n) = current {
            match self.node_opt(n) {
                Some(node) if node.element.flags.contains(ElementFlags::VISIBLE) => {
                    current = node.parent;
                }
                _ => return false,
            }
        }
        true
    }

    pub(crate) fn next_sibling_of(&self, id: ElementId) -> Option<ElementId> {
        let siblings = self.children_of(self.parent_of(id)?);
        let pos = siblings.iter().position(|&c| c == id)?;
        siblings.get(pos + 1).copied()
    }

    /// Targets of every registered listener of `kind`.
    ///
    /// Hosts use this to route incoming events to the behaviors that asked
    /// for them. Targets that have since been removed are skipped.
    pub fn listeners(&self, kind: Listener) -> impl Iterator<Item = ElementId> + '_ {
        self.listeners
            .iter()
            .filter(move |r| r.kind == kind && self.is_alive(r.target))
            .map(|r| r.target)
    }

    /// Number of registered listeners, including those on removed targets.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub(crate) fn node_opt(&self, id: ElementId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        (n.generation == id.generation()).then_some(n)
    }

    fn node_opt_mut(&mut self, id: ElementId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        (n.generation == id.generation()).then_some(n)
    }
}
