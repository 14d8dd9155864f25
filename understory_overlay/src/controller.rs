// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The anchored overlay controller.

use alloc::vec::Vec;

use understory_anchored_position::{AnchoredPosition, Geometry, PositionSettings, anchored_position};
use understory_event_state::key::{Key, KeyEvent};
use understory_event_state::listener::{Listener, ListenerHost};
use understory_event_state::pointer::PointerEvent;
use understory_focus::{
    FocusTrap, FocusTrapSettings, FocusTree, FocusZone, FocusZoneSettings, OpenCloseFocus,
    OpenCloseFocusSettings, contains,
};

use crate::gesture::{
    CloseGesture, GestureIntent, GestureSink, classify_anchor_click, classify_anchor_key, emit,
};
use crate::subscriptions::Subscriptions;

/// Everything the controller needs from the host UI tree.
///
/// Implemented automatically for any type that provides geometry, focus,
/// and listener registration.
pub trait OverlayHost<K>: Geometry<K> + FocusTree<K> + ListenerHost<K> {}

impl<K, T: Geometry<K> + FocusTree<K> + ListenerHost<K> + ?Sized> OverlayHost<K> for T {}

/// Settings for an [`AnchoredOverlay`].
#[derive(Clone, Debug, PartialEq)]
pub struct OverlaySettings<K> {
    /// Panel placement relative to the anchor.
    pub position: PositionSettings,
    /// Tab confinement inside the panel.
    pub focus_trap: FocusTrapSettings,
    /// Arrow-key navigation inside the panel.
    pub focus_zone: FocusZoneSettings,
    /// Element to focus when the panel opens; defaults to its first tabbable item.
    pub initial_focus: Option<K>,
    /// Element to focus when the panel closes; defaults to the anchor.
    pub return_focus: Option<K>,
    /// Leave focus where it is when the panel opens.
    pub prevent_focus_on_open: bool,
    /// Extra elements whose clicks never count as outside clicks.
    pub ignore_clicks: Vec<K>,
}

impl<K> Default for OverlaySettings<K> {
    fn default() -> Self {
        Self {
            position: PositionSettings::default(),
            focus_trap: FocusTrapSettings::default(),
            focus_zone: FocusZoneSettings::default(),
            initial_focus: None,
            return_focus: None,
            prevent_focus_on_open: false,
            ignore_clicks: Vec::new(),
        }
    }
}

/// A floating panel tied to an anchor element.
///
/// The controller never stores the open/closed state. The caller passes its
/// `open` flag into every call and applies the open/close requests that the
/// controller emits through a [`GestureSink`].
///
/// Lifecycle, driven by [`update`](Self::update):
///
/// 1. While closed, or while the panel is not mounted, nothing is attached,
///    no position exists, and the panel is not [visible](Self::is_visible).
/// 2. When open with a mounted panel, listeners are attached (resize and
///    scroll on the anchor; outside click, Escape, keys, and focus-in on the
///    panel) and the position is computed.
/// 3. Once a position exists, the focus trap, focus zone, and open focus
///    handoff activate, in that order, exactly once per open session.
/// 4. On close, teardown, or a panel swap, everything is undone: focus
///    returns, behaviors deactivate, listeners detach, and the cached
///    position is dropped so the next open starts from scratch.
#[derive(Debug)]
pub struct AnchoredOverlay<K> {
    anchor: K,
    settings: OverlaySettings<K>,
    floating: Option<K>,
    position: Option<AnchoredPosition>,
    trap: Option<FocusTrap<K>>,
    zone: Option<FocusZone<K>>,
    focus: OpenCloseFocus<K>,
    subscriptions: Subscriptions<K>,
}

impl<K: Copy + Eq + core::fmt::Debug> AnchoredOverlay<K> {
    /// Create a controller for `anchor`.
    pub fn new(anchor: K, settings: OverlaySettings<K>) -> Self {
        let focus = OpenCloseFocus::new(OpenCloseFocusSettings {
            initial_focus: settings.initial_focus,
            return_focus: Some(settings.return_focus.unwrap_or(anchor)),
            prevent_focus_on_open: settings.prevent_focus_on_open,
            suppress_return_focus: false,
        });
        Self {
            anchor,
            settings,
            floating: None,
            position: None,
            trap: None,
            zone: None,
            focus,
            subscriptions: Subscriptions::new(),
        }
    }

    /// The anchor element.
    pub fn anchor(&self) -> K {
        self.anchor
    }

    /// Current settings.
    pub fn settings(&self) -> &OverlaySettings<K> {
        &self.settings
    }

    /// The mounted panel, if any.
    pub fn floating(&self) -> Option<K> {
        self.floating
    }

    /// The last computed position, if any.
    pub fn position(&self) -> Option<AnchoredPosition> {
        self.position
    }

    /// Whether the panel should be shown. Panels stay hidden until positioned.
    pub fn is_visible(&self) -> bool {
        self.position.is_some()
    }

    /// Whether focus behaviors are running for the current open session.
    pub fn is_active(&self) -> bool {
        self.focus.is_active()
            || self.trap.as_ref().is_some_and(FocusTrap::is_active)
            || self.zone.as_ref().is_some_and(FocusZone::is_active)
    }

    /// Re-derive everything from the caller's `open` flag and the mounted panel.
    ///
    /// Call this whenever `open` changes or the panel mounts or unmounts.
    /// Repeated calls with the same inputs only recompute the position.
    pub fn update<H>(&mut self, host: &mut H, open: bool, floating: Option<K>)
    where
        H: OverlayHost<K> + ?Sized,
    {
        let Some(floating) = floating.filter(|_| open) else {
            self.teardown(host);
            return;
        };
        if self.floating != Some(floating) {
            if self.floating.is_some() {
                tracing::debug!(?floating, "panel replaced");
                self.teardown(host);
            }
            self.mount(host, floating);
        }
        self.refresh(host);
    }

    /// Recompute the position after a resize or scroll.
    ///
    /// Returns the new position. Does nothing while no panel is mounted.
    pub fn on_geometry_change<H>(&mut self, host: &mut H) -> Option<AnchoredPosition>
    where
        H: OverlayHost<K> + ?Sized,
    {
        if self.floating.is_some() {
            self.refresh(host);
        }
        self.position
    }

    /// Route a click. Returns the intent emitted to `sink`, if any.
    ///
    /// Clicks inside the anchor toggle; while open, clicks outside the anchor,
    /// the panel, and every [`OverlaySettings::ignore_clicks`] element close.
    pub fn handle_click<H, S>(
        &mut self,
        host: &mut H,
        open: bool,
        event: &mut PointerEvent<K>,
        sink: &mut S,
    ) -> Option<GestureIntent>
    where
        H: OverlayHost<K> + ?Sized,
        S: GestureSink + ?Sized,
    {
        let target = event.target;
        let intent = if contains(&*host, self.anchor, target) {
            classify_anchor_click(open, event)
        } else if open
            && !event.is_handled()
            && event.is_primary()
            && self.floating.is_some_and(|f| !contains(&*host, f, target))
            && !self
                .settings
                .ignore_clicks
                .iter()
                .any(|&k| contains(&*host, k, target))
        {
            Some(GestureIntent::Close(CloseGesture::ClickOutside))
        } else {
            None
        };
        intent.inspect(|&i| emit(sink, i))
    }

    /// Route a key press. Returns the intent emitted to `sink`, if any.
    ///
    /// While closed, opening keys on the anchor request an open. While open,
    /// Escape requests a close; other keys inside the panel go to the focus
    /// zone and then the focus trap. Consumed events are marked handled.
    pub fn handle_key<H, S>(
        &mut self,
        host: &mut H,
        open: bool,
        event: &mut KeyEvent<K>,
        sink: &mut S,
    ) -> Option<GestureIntent>
    where
        H: OverlayHost<K> + ?Sized,
        S: GestureSink + ?Sized,
    {
        if event.is_handled() {
            return None;
        }
        if !open {
            let intent = contains(&*host, self.anchor, event.target)
                .then(|| classify_anchor_key(open, event))
                .flatten()?;
            event.mark_handled();
            emit(sink, intent);
            return Some(intent);
        }
        let floating = self.floating?;
        if event.key == Key::Escape {
            event.mark_handled();
            let intent = GestureIntent::Close(CloseGesture::Escape);
            emit(sink, intent);
            return Some(intent);
        }
        if contains(&*host, floating, event.target) {
            if let Some(zone) = &mut self.zone {
                zone.handle_key(host, event);
            }
            if let Some(trap) = &mut self.trap {
                trap.handle_key(host, event);
            }
        }
        None
    }

    /// Route a focus change. Returns where focus was redirected, if anywhere.
    pub fn handle_focus_in<H>(&mut self, host: &mut H, target: K) -> Option<K>
    where
        H: OverlayHost<K> + ?Sized,
    {
        let redirected = self
            .trap
            .as_mut()
            .and_then(|trap| trap.handle_focus_in(host, target));
        if let Some(zone) = &mut self.zone {
            zone.handle_focus_in(&*host, redirected.unwrap_or(target));
        }
        redirected
    }

    /// Undo everything for the current panel: restore focus, deactivate
    /// behaviors, detach listeners, and forget the position.
    ///
    /// Safe to call repeatedly; call it before dropping the controller.
    pub fn teardown<H>(&mut self, host: &mut H)
    where
        H: OverlayHost<K> + ?Sized,
    {
        if let Some(zone) = &mut self.zone {
            zone.deactivate();
        }
        if let Some(trap) = &mut self.trap {
            trap.deactivate();
        }
        if let Some(restored) = self.focus.deactivate(host) {
            tracing::debug!(?restored, "focus returned");
        }
        self.subscriptions.dispose(host);
        if self.floating.take().is_some() {
            tracing::debug!(anchor = ?self.anchor, "overlay torn down");
        }
        self.position = None;
        self.trap = None;
        self.zone = None;
    }

    fn mount<H>(&mut self, host: &mut H, floating: K)
    where
        H: OverlayHost<K> + ?Sized,
    {
        tracing::debug!(anchor = ?self.anchor, ?floating, "panel mounted");
        self.floating = Some(floating);
        self.position = None;
        self.trap = Some(FocusTrap::new(floating, self.settings.focus_trap));
        self.zone = Some(FocusZone::new(floating, self.settings.focus_zone));

        let subs = &mut self.subscriptions;
        subs.attach(host, self.anchor, Listener::Resize);
        subs.attach(host, self.anchor, Listener::Scroll);
        subs.attach(host, floating, Listener::OutsideClick);
        subs.attach(host, floating, Listener::Escape);
        subs.attach(host, floating, Listener::FocusIn);
        if !self.settings.focus_trap.disabled {
            subs.attach(host, floating, Listener::FocusTrapKeys);
        }
        if !self.settings.focus_zone.disabled {
            subs.attach(host, floating, Listener::FocusZoneKeys);
        }
    }

    /// Recompute the position, then bring focus behaviors in line with it.
    fn refresh<H>(&mut self, host: &mut H)
    where
        H: OverlayHost<K> + ?Sized,
    {
        let Some(floating) = self.floating else {
            return;
        };
        self.position = anchored_position(
            &*host,
            &self.settings.position,
            Some(self.anchor),
            Some(floating),
        );
        tracing::trace!(position = ?self.position, "overlay position refreshed");

        if self.position.is_none() {
            if let Some(zone) = &mut self.zone {
                zone.deactivate();
            }
            if let Some(trap) = &mut self.trap {
                trap.deactivate();
            }
            return;
        }
        if let Some(trap) = &mut self.trap {
            trap.activate();
        }
        if let Some(zone) = &mut self.zone {
            zone.activate();
        }
        if let Some(focused) = self.focus.activate(host, floating) {
            tracing::debug!(?focused, "initial focus");
        }
    }
}
