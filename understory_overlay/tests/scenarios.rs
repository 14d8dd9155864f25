// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end overlay behavior against a real element tree.

use kurbo::{Point, Rect};
use understory_anchored_position::Side;
use understory_element_tree::{Element, ElementId, ElementTree};
use understory_event_state::key::{Key, KeyEvent, Modifiers};
use understory_event_state::listener::Listener;
use understory_event_state::pointer::{PointerButton, PointerEvent};
use understory_focus::FocusTree;
use understory_overlay::{
    AnchoredOverlay, CloseGesture, GestureIntent, OpenGesture, OverlaySettings,
};

struct Fixture {
    tree: ElementTree,
    root: ElementId,
    anchor: ElementId,
    elsewhere: ElementId,
    overlay: AnchoredOverlay<ElementId>,
    open: bool,
    requests: Vec<GestureIntent>,
}

/// Menu items of a mounted panel.
struct Panel {
    panel: ElementId,
    items: [ElementId; 3],
}

impl Fixture {
    fn new() -> Self {
        Self::with_settings(OverlaySettings::default())
    }

    fn with_settings(settings: OverlaySettings<ElementId>) -> Self {
        let mut tree = ElementTree::new(Rect::new(0.0, 0.0, 400.0, 300.0));
        let root = tree
            .insert(None, Element::new(Rect::new(0.0, 0.0, 400.0, 300.0)))
            .unwrap();
        let anchor = tree
            .insert(Some(root), Element::focusable(Rect::new(20.0, 20.0, 100.0, 40.0)))
            .unwrap();
        let elsewhere = tree
            .insert(Some(root), Element::focusable(Rect::new(300.0, 20.0, 380.0, 40.0)))
            .unwrap();
        tree.set_focus(anchor);
        Self {
            tree,
            root,
            anchor,
            elsewhere,
            overlay: AnchoredOverlay::new(anchor, settings),
            open: false,
            requests: Vec::new(),
        }
    }

    /// Mount a 120x90 panel with three menu items.
    fn mount(&mut self) -> Panel {
        let panel = self
            .tree
            .insert(Some(self.root), Element::new(Rect::new(0.0, 0.0, 120.0, 90.0)))
            .unwrap();
        let items = [0.0, 30.0, 60.0].map(|y| {
            self.tree
                .insert(Some(panel), Element::focusable(Rect::new(0.0, y, 120.0, y + 30.0)))
                .unwrap()
        });
        Panel { panel, items }
    }

    fn click(&mut self, target: ElementId) -> Option<GestureIntent> {
        let mut event = PointerEvent::primary(target, Point::ZERO);
        let requests = &mut self.requests;
        self.overlay.handle_click(
            &mut self.tree,
            self.open,
            &mut event,
            &mut |i: GestureIntent| requests.push(i),
        )
    }

    fn key(&mut self, event: &mut KeyEvent<ElementId>) -> Option<GestureIntent> {
        let requests = &mut self.requests;
        self.overlay.handle_key(
            &mut self.tree,
            self.open,
            event,
            &mut |i: GestureIntent| requests.push(i),
        )
    }

    /// Apply the caller side of an open: flip the flag, mount, update.
    fn open(&mut self) -> Panel {
        self.open = true;
        let panel = self.mount();
        self.overlay.update(&mut self.tree, true, Some(panel.panel));
        panel
    }

    /// Apply the caller side of a close: flip the flag, unmount, update.
    fn close(&mut self, panel: &Panel) {
        self.open = false;
        self.overlay.update(&mut self.tree, false, None);
        self.tree.remove(panel.panel).unwrap();
    }
}

#[test]
fn arrow_down_on_closed_anchor_requests_open_once() {
    let mut f = Fixture::new();
    let mut event = KeyEvent::new(f.anchor, Key::ArrowDown);
    assert_eq!(
        f.key(&mut event),
        Some(GestureIntent::Open(OpenGesture::AnchorKeyPress))
    );
    assert!(event.is_handled());
    assert_eq!(f.requests, [GestureIntent::Open(OpenGesture::AnchorKeyPress)]);

    // The same, already handled, event does not fire again.
    assert_eq!(f.key(&mut event), None);
    assert_eq!(f.requests.len(), 1);
}

#[test]
fn outside_click_then_anchor_click_while_open() {
    let mut f = Fixture::new();
    let _panel = f.open();

    assert_eq!(
        f.click(f.elsewhere),
        Some(GestureIntent::Close(CloseGesture::ClickOutside))
    );
    // The caller chose not to apply the close; the anchor now toggles closed.
    assert_eq!(
        f.click(f.anchor),
        Some(GestureIntent::Close(CloseGesture::AnchorClick))
    );
    assert_eq!(
        f.requests,
        [
            GestureIntent::Close(CloseGesture::ClickOutside),
            GestureIntent::Close(CloseGesture::AnchorClick),
        ]
    );
}

#[test]
fn non_primary_and_handled_clicks_are_ignored() {
    let mut f = Fixture::new();
    let _panel = f.open();

    let mut right = PointerEvent::new(f.elsewhere, Point::ZERO, PointerButton::Secondary);
    let requests = &mut f.requests;
    let sink = &mut |i: GestureIntent| requests.push(i);
    assert_eq!(f.overlay.handle_click(&mut f.tree, true, &mut right, sink), None);

    let mut handled = PointerEvent::primary(f.anchor, Point::ZERO);
    handled.mark_handled();
    assert_eq!(f.overlay.handle_click(&mut f.tree, true, &mut handled, sink), None);
    assert!(f.requests.is_empty());
}

#[test]
fn clicks_inside_panel_do_not_close() {
    let mut f = Fixture::new();
    let panel = f.open();
    assert_eq!(f.click(panel.items[1]), None);
    assert_eq!(f.click(panel.panel), None);
    assert!(f.requests.is_empty());
}

#[test]
fn open_focuses_first_item_and_close_returns_to_anchor() {
    let mut f = Fixture::new();
    let panel = f.open();
    assert!(f.overlay.is_visible());
    assert_eq!(f.tree.focused(), Some(panel.items[0]));

    f.close(&panel);
    assert_eq!(f.tree.focused(), Some(f.anchor));
    assert_eq!(f.tree.listener_count(), 0);
    assert_eq!(f.overlay.position(), None);
}

#[test]
fn tab_wraps_and_arrows_navigate_inside_panel() {
    let mut f = Fixture::new();
    let panel = f.open();
    let [a, b, c] = panel.items;

    let mut down = KeyEvent::new(a, Key::ArrowDown);
    assert_eq!(f.key(&mut down), None);
    assert!(down.is_handled());
    assert_eq!(f.tree.focused(), Some(b));

    let mut down = KeyEvent::new(b, Key::ArrowDown);
    f.key(&mut down);
    assert_eq!(f.tree.focused(), Some(c));

    let mut tab = KeyEvent::new(c, Key::Tab);
    f.key(&mut tab);
    assert!(tab.is_handled());
    assert_eq!(f.tree.focused(), Some(a));

    let mut back = KeyEvent::new(a, Key::Tab).with_modifiers(Modifiers::SHIFT);
    f.key(&mut back);
    assert_eq!(f.tree.focused(), Some(c));

    // Arrow keys on the anchor do nothing while open.
    let mut on_anchor = KeyEvent::new(f.anchor, Key::ArrowDown);
    assert_eq!(f.key(&mut on_anchor), None);
    assert!(!on_anchor.is_handled());
    assert!(f.requests.is_empty());
}

#[test]
fn escape_requests_close_unless_already_handled() {
    let mut f = Fixture::new();
    let panel = f.open();

    let mut handled = KeyEvent::new(panel.items[0], Key::Escape);
    handled.mark_handled();
    assert_eq!(f.key(&mut handled), None);

    let mut esc = KeyEvent::new(panel.items[0], Key::Escape);
    assert_eq!(f.key(&mut esc), Some(GestureIntent::Close(CloseGesture::Escape)));
    assert!(esc.is_handled());
    assert_eq!(f.requests.len(), 1);
}

#[test]
fn focus_escaping_the_panel_is_pulled_back() {
    let mut f = Fixture::new();
    let panel = f.open();
    f.tree.set_focus(f.elsewhere);
    assert_eq!(
        f.overlay.handle_focus_in(&mut f.tree, f.elsewhere),
        Some(panel.items[0])
    );
    assert_eq!(f.tree.focused(), Some(panel.items[0]));
}

#[test]
fn listeners_attach_only_while_open_and_never_twice() {
    let mut f = Fixture::new();
    f.overlay.update(&mut f.tree, false, None);
    assert_eq!(f.tree.listener_count(), 0);

    let panel = f.open();
    let attached = f.tree.listener_count();
    assert_eq!(attached, 7);
    assert_eq!(f.tree.listeners(Listener::Resize).collect::<Vec<_>>(), [f.anchor]);
    assert_eq!(
        f.tree.listeners(Listener::OutsideClick).collect::<Vec<_>>(),
        [panel.panel]
    );

    f.overlay.update(&mut f.tree, true, Some(panel.panel));
    f.overlay.on_geometry_change(&mut f.tree);
    assert_eq!(f.tree.listener_count(), attached);

    // Rapid toggling leaves nothing behind.
    f.overlay.update(&mut f.tree, false, Some(panel.panel));
    f.overlay.update(&mut f.tree, true, Some(panel.panel));
    f.overlay.update(&mut f.tree, false, Some(panel.panel));
    assert_eq!(f.tree.listener_count(), 0);
    f.overlay.teardown(&mut f.tree);
    assert_eq!(f.tree.listener_count(), 0);
}

#[test]
fn reopening_recomputes_position_from_scratch() {
    let mut f = Fixture::new();
    let panel = f.open();
    let first = f.overlay.position();
    assert_eq!(first.unwrap().anchor_side, Some(Side::OutsideBottom));

    f.close(&panel);
    assert_eq!(f.overlay.position(), None);
    assert_eq!(f.overlay.floating(), None);

    // Move the anchor to the bottom edge; the reopened panel flips above it.
    f.tree
        .set_bounds(f.anchor, Rect::new(20.0, 260.0, 100.0, 280.0))
        .unwrap();
    let _panel = f.open();
    let second = f.overlay.position().unwrap();
    assert_eq!(second.anchor_side, Some(Side::OutsideTop));
    assert_eq!(second.top, 260.0 - 4.0 - 90.0);
}

#[test]
fn geometry_changes_reposition_while_open() {
    let mut f = Fixture::new();
    let _panel = f.open();
    let before = f.overlay.position().unwrap();

    f.tree
        .set_bounds(f.anchor, Rect::new(60.0, 20.0, 140.0, 40.0))
        .unwrap();
    let after = f.overlay.on_geometry_change(&mut f.tree).unwrap();
    assert_eq!(after.left, before.left + 40.0);
    assert_eq!(after.top, before.top);
}

#[test]
fn anchor_removed_while_open_hides_panel() {
    let mut f = Fixture::new();
    let _panel = f.open();
    f.tree.remove(f.anchor).unwrap();
    assert_eq!(f.overlay.on_geometry_change(&mut f.tree), None);
    assert!(!f.overlay.is_visible());
    f.overlay.teardown(&mut f.tree);
    assert_eq!(f.tree.listener_count(), 0);
}

#[test]
fn explicit_initial_focus_and_prevented_focus() {
    let mut f = Fixture::new();
    let panel = f.mount();
    f.overlay = AnchoredOverlay::new(
        f.anchor,
        OverlaySettings {
            initial_focus: Some(panel.items[2]),
            ..OverlaySettings::default()
        },
    );
    f.overlay.update(&mut f.tree, true, Some(panel.panel));
    assert_eq!(f.tree.focused(), Some(panel.items[2]));
    f.overlay.teardown(&mut f.tree);

    let mut f = Fixture::with_settings(OverlaySettings {
        prevent_focus_on_open: true,
        ..OverlaySettings::default()
    });
    let panel = f.open();
    assert_eq!(f.tree.focused(), Some(f.anchor));
    f.tree.set_focus(panel.items[1]);
    f.close(&panel);
    assert_eq!(f.tree.focused(), Some(f.anchor));
}

#[test]
fn escape_targeted_outside_the_panel_still_closes() {
    let mut f = Fixture::new();
    let _panel = f.open();
    let mut esc = KeyEvent::new(f.elsewhere, Key::Escape);
    assert_eq!(f.key(&mut esc), Some(GestureIntent::Close(CloseGesture::Escape)));
    assert!(esc.is_handled());
}

#[test]
fn routing_through_registered_listeners() {
    let mut f = Fixture::new();
    assert_eq!(f.tree.listeners(Listener::FocusIn).count(), 0);

    let panel = f.open();
    // A host delivers focus-in only to the targets that asked for it.
    f.tree.set_focus(f.elsewhere);
    let owners: Vec<_> = f.tree.listeners(Listener::FocusIn).collect();
    assert_eq!(owners, [panel.panel]);
    for _ in owners {
        f.overlay.handle_focus_in(&mut f.tree, f.elsewhere);
    }
    assert_eq!(f.tree.focused(), Some(panel.items[0]));

    f.close(&panel);
    assert_eq!(f.tree.listeners(Listener::OutsideClick).count(), 0);
    assert_eq!(f.tree.listeners(Listener::FocusIn).count(), 0);
}
