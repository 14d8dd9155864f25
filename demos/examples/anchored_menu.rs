// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A dropdown menu driven end to end: open, navigate, close.
//!
//! This example shows how to combine:
//! - `understory_element_tree` as the host (geometry, focus, listeners),
//! - `understory_overlay` for gestures, placement, and focus behaviors,
//! - a caller-owned `open` flag that applies the controller's requests.
//!
//! Events reach the controller the way a host would route them: through the
//! listeners it registered on the element tree while the menu is open.
//!
//! Run:
//! - `cargo run -p understory_demos --example anchored_menu`
//! - `RUST_LOG=debug cargo run -p understory_demos --example anchored_menu` to see the
//!   controller's lifecycle logs.

use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;
use understory_anchored_position::{Align, PositionSettings, Side};
use understory_element_tree::{Element, ElementId, ElementTree};
use understory_event_state::key::{Key, KeyEvent};
use understory_event_state::listener::Listener;
use understory_event_state::pointer::PointerEvent;
use understory_focus::{FocusTree, FocusZoneDirection, FocusZoneSettings, contains};
use understory_overlay::{AnchoredOverlay, GestureIntent, GestureKind, OverlaySettings};

/// Caller-side state: the open flag and the mounted menu, if any.
struct App {
    tree: ElementTree,
    root: ElementId,
    anchor: ElementId,
    overlay: AnchoredOverlay<ElementId>,
    open: bool,
    menu: Option<ElementId>,
}

impl App {
    /// Whether any behavior registered a listener of `kind` covering `target`.
    fn routes_to(&self, kind: Listener, target: ElementId) -> bool {
        self.tree
            .listeners(kind)
            .any(|owner| contains(&self.tree, owner, target))
    }

    /// Whether any behavior registered a listener of `kind` at all.
    fn routes(&self, kind: Listener) -> bool {
        self.tree.listeners(kind).next().is_some()
    }

    /// Apply a request from the controller, mounting or unmounting the menu.
    fn apply(&mut self, intent: GestureIntent) {
        println!("request: {:?} ({})", intent.kind(), intent.reason());
        match intent.kind() {
            GestureKind::Open if !self.open => {
                self.open = true;
                let menu = self
                    .tree
                    .insert(Some(self.root), Element::new(Rect::new(0.0, 0.0, 140.0, 96.0)))
                    .unwrap();
                for (i, y) in [0.0, 32.0, 64.0].into_iter().enumerate() {
                    let item = self
                        .tree
                        .insert(Some(menu), Element::focusable(Rect::new(0.0, y, 140.0, y + 32.0)))
                        .unwrap();
                    println!("  item {i}: {item:?}");
                }
                self.menu = Some(menu);
            }
            GestureKind::Close if self.open => {
                self.open = false;
            }
            _ => return,
        }
        self.overlay.update(&mut self.tree, self.open, self.menu);
        if !self.open
            && let Some(menu) = self.menu.take()
        {
            self.tree.remove(menu).unwrap();
        }
        println!(
            "  open={} visible={} position={:?} focused={:?} listeners={}",
            self.open,
            self.overlay.is_visible(),
            self.overlay.position(),
            self.tree.focused(),
            self.tree.listener_count()
        );
    }

    fn click(&mut self, target: ElementId) {
        // The anchor handles its own clicks; everything else needs an
        // outside-click listener.
        if target != self.anchor && !self.routes(Listener::OutsideClick) {
            println!("click on {target:?}: no listener");
            return;
        }
        let mut event = PointerEvent::primary(target, Point::ZERO);
        let mut requests = Vec::new();
        self.overlay.handle_click(
            &mut self.tree,
            self.open,
            &mut event,
            &mut |i: GestureIntent| requests.push(i),
        );
        for intent in requests {
            self.apply(intent);
        }
    }

    fn key(&mut self, key: Key) {
        let Some(target) = self.tree.focused() else {
            return;
        };
        let routed = target == self.anchor
            || self.routes(Listener::Escape)
            || self.routes_to(Listener::FocusTrapKeys, target)
            || self.routes_to(Listener::FocusZoneKeys, target);
        if !routed {
            println!("key {key:?} on {target:?}: no listener");
            return;
        }
        let mut event = KeyEvent::new(target, key);
        let mut requests = Vec::new();
        self.overlay.handle_key(
            &mut self.tree,
            self.open,
            &mut event,
            &mut |i: GestureIntent| requests.push(i),
        );
        println!(
            "key {key:?} on {target:?}: handled={} focused={:?}",
            event.is_handled(),
            self.tree.focused()
        );
        for intent in requests {
            self.apply(intent);
        }
    }

    /// Move focus as a pointer or script would, then notify focus-in listeners.
    fn focus(&mut self, target: ElementId) {
        self.tree.set_focus(target);
        if self.routes(Listener::FocusIn) {
            self.overlay.handle_focus_in(&mut self.tree, target);
        }
        println!("focus {target:?}: focused={:?}", self.tree.focused());
    }

    /// Shrink the viewport, then notify resize listeners.
    fn resize(&mut self, viewport: Rect) {
        self.tree.set_viewport(viewport);
        if self.routes(Listener::Resize) {
            let position = self.overlay.on_geometry_change(&mut self.tree);
            println!("resize to {viewport:?}: position={position:?}");
        }
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut tree = ElementTree::new(Rect::new(0.0, 0.0, 640.0, 240.0));
    let root = tree
        .insert(None, Element::new(Rect::new(0.0, 0.0, 640.0, 240.0)))
        .unwrap();
    // Near the bottom edge: the menu will not fit below and flips above.
    let anchor = tree
        .insert(Some(root), Element::focusable(Rect::new(40.0, 180.0, 160.0, 208.0)))
        .unwrap();
    let elsewhere = tree
        .insert(Some(root), Element::focusable(Rect::new(400.0, 20.0, 520.0, 48.0)))
        .unwrap();
    tree.set_focus(anchor);

    let settings = OverlaySettings {
        position: PositionSettings::new(Side::OutsideBottom, Align::Start),
        focus_zone: FocusZoneSettings::default().with_direction(FocusZoneDirection::Vertical),
        ..OverlaySettings::default()
    };
    let mut app = App {
        tree,
        root,
        anchor,
        overlay: AnchoredOverlay::new(anchor, settings),
        open: false,
        menu: None,
    };

    // Keyboard: open from the anchor, walk the items, wrap with Tab, close with Escape.
    app.key(Key::ArrowDown);
    app.key(Key::ArrowDown);
    app.key(Key::End);
    app.key(Key::Tab);
    // Focus wandering out of the open menu is pulled back in.
    app.focus(elsewhere);
    app.resize(Rect::new(0.0, 0.0, 480.0, 240.0));
    app.key(Key::Escape);

    // Pointer: open by clicking the anchor, close by clicking elsewhere.
    app.click(anchor);
    app.click(elsewhere);
    // Closed: no listeners remain, so this click goes nowhere.
    app.click(elsewhere);

    app.overlay.teardown(&mut app.tree);
}
