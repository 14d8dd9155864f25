// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Behavior-facing trait implementations: geometry, focus, and listeners.

use kurbo::Rect;
use understory_anchored_position::Geometry;
use understory_event_state::listener::{Listener, ListenerHost, ListenerId};
use understory_focus::{FocusProps, FocusTree, is_focusable};

use crate::tree::{ElementTree, Registration};
use crate::types::{ElementFlags, ElementId};

impl Geometry<ElementId> for ElementTree {
    /// Bounds of rendered elements; hidden or removed elements are not measurable.
    fn bounds(&self, element: ElementId) -> Option<Rect> {
        if !self.is_rendered(element) {
            return None;
        }
        self.element(element).map(|e| e.bounds)
    }

    fn viewport(&self, _element: ElementId) -> Rect {
        self.viewport()
    }
}

impl FocusTree<ElementId> for ElementTree {
    fn parent(&self, node: ElementId) -> Option<ElementId> {
        self.parent_of(node)
    }

    fn first_child(&self, node: ElementId) -> Option<ElementId> {
        self.children_of(node).first().copied()
    }

    fn next_sibling(&self, node: ElementId) -> Option<ElementId> {
        self.next_sibling_of(node)
    }

    fn focus_props(&self, node: ElementId) -> Option<FocusProps> {
        let element = self.element(node)?;
        Some(FocusProps {
            focusable: element.flags.contains(ElementFlags::FOCUSABLE),
            tab_index: element.tab_index,
            disabled: element.flags.contains(ElementFlags::DISABLED),
            hidden: !element.flags.contains(ElementFlags::VISIBLE),
        })
    }

    fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    /// Focus moves only to live, rendered, focusable elements.
    fn set_focus(&mut self, node: ElementId) -> bool {
        if !is_focusable(&*self, node) {
            tracing::debug!(?node, "refusing focus on unfocusable element");
            return false;
        }
        self.focused = Some(node);
        true
    }
}

impl ListenerHost<ElementId> for ElementTree {
    fn attach(&mut self, target: ElementId, listener: Listener) -> ListenerId {
        self.next_listener += 1;
        let id = ListenerId::new(self.next_listener);
        self.listeners.push(Registration {
            id,
            target,
            kind: listener,
        });
        tracing::trace!(id = id.get(), ?target, ?listener, "listener attached");
        id
    }

    fn detach(&mut self, id: ListenerId) {
        let before = self.listeners.len();
        self.listeners.retain(|r| r.id != id);
        if self.listeners.len() != before {
            tracing::trace!(id = id.get(), "listener detached");
        }
    }
}
