// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measuring live elements.

use kurbo::Rect;

use crate::engine::compute_position;
use crate::types::{AnchoredPosition, PositionSettings};

/// Read-only access to element geometry, provided by the host.
///
/// `bounds` and `viewport` must report rectangles in one coordinate space
/// (for example document space, or the local space of a scroll container).
pub trait Geometry<K> {
    /// Current bounds of `element`, or `None` if it is not mounted or measurable.
    fn bounds(&self, element: K) -> Option<Rect>;

    /// Visible region the floating `element` must stay inside.
    ///
    /// Usually the clip rectangle of the element's nearest scrolling ancestor,
    /// or the window.
    fn viewport(&self, element: K) -> Rect;
}

/// Measure `anchor` and `floating` and place the floating element.
///
/// Returns `None` when either handle is absent or cannot be measured; callers
/// treat that as "not ready" and keep the floating element hidden.
pub fn anchored_position<K, G>(
    geometry: &G,
    settings: &PositionSettings,
    anchor: Option<K>,
    floating: Option<K>,
) -> Option<AnchoredPosition>
where
    K: Copy,
    G: Geometry<K> + ?Sized,
{
    let anchor_rect = geometry.bounds(anchor?)?;
    let floating = floating?;
    let floating_rect = geometry.bounds(floating)?;
    let viewport = geometry.viewport(floating);
    let position = compute_position(anchor_rect, floating_rect, viewport, settings);
    tracing::trace!(
        top = position.top,
        left = position.left,
        side = ?position.anchor_side,
        "anchored position computed"
    );
    Some(position)
}
