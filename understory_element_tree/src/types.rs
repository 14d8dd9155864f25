// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the element tree: identifiers, flags, per-element data, errors.

use kurbo::Rect;

/// Identifier for an element in the tree (generational).
///
/// Removing an element bumps the generation of its slot, so handles held
/// past removal are detected as stale instead of aliasing a newer element.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ElementId(pub(crate) u32, pub(crate) u32);

impl ElementId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }
}

bitflags::bitflags! {
    /// Element flags controlling rendering and focus.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ElementFlags: u8 {
        /// Element is rendered. Hidden elements hide their whole subtree.
        const VISIBLE   = 0b0000_0001;
        /// Element is natively focusable (a button, an input, a link).
        const FOCUSABLE = 0b0000_0010;
        /// Element is disabled and cannot take focus.
        const DISABLED  = 0b0000_0100;
    }
}

impl Default for ElementFlags {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// Per-element data supplied by the host.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    /// Measured bounds in the tree's coordinate space.
    pub bounds: Rect,
    /// Rendering and focus flags.
    pub flags: ElementFlags,
    /// Explicit tab index; see [`understory_focus::FocusProps::tab_index`].
    pub tab_index: Option<i32>,
}

impl Element {
    /// A visible, non-focusable element (a panel, a group).
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            ..Self::default()
        }
    }

    /// A visible, natively focusable element.
    pub fn focusable(bounds: Rect) -> Self {
        Self {
            bounds,
            flags: ElementFlags::VISIBLE | ElementFlags::FOCUSABLE,
            tab_index: None,
        }
    }
}

/// Errors from tree mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The handle refers to a removed element.
    #[error("stale element handle {0:?}")]
    StaleElement(ElementId),
}
