// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture classification: raw anchor input to open/close intents.
//!
//! The classifiers here are pure. They look at the caller-owned `open` flag
//! and one event, and say which intent (if any) the event expresses:
//!
//! | State  | Event                                             | Intent                      |
//! |--------|---------------------------------------------------|-----------------------------|
//! | closed | primary click on the anchor                       | `Open(AnchorClick)`         |
//! | open   | primary click on the anchor                       | `Close(AnchorClick)`        |
//! | closed | ArrowDown, ArrowUp, Space, or Enter on the anchor | `Open(AnchorKeyPress)`      |
//! | open   | primary click outside anchor and panel            | `Close(ClickOutside)`       |
//! | open   | Escape                                            | `Close(Escape)`             |
//!
//! Events already marked handled never produce an intent. Outside clicks and
//! Escape depend on the panel, so the controller classifies those itself.

use understory_event_state::key::{Key, KeyEvent};
use understory_event_state::pointer::PointerEvent;

/// Why an open was requested.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OpenGesture {
    /// Primary click on the anchor.
    AnchorClick,
    /// Opening key pressed on the anchor.
    AnchorKeyPress,
}

/// Why a close was requested.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CloseGesture {
    /// Primary click on the anchor.
    AnchorClick,
    /// Primary click outside both the anchor and the panel.
    ClickOutside,
    /// Escape pressed.
    Escape,
}

/// Direction of a requested transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// Closed to open.
    Open,
    /// Open to closed.
    Close,
}

/// A requested open/close transition with its reason.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GestureIntent {
    /// Request to open.
    Open(OpenGesture),
    /// Request to close.
    Close(CloseGesture),
}

impl GestureIntent {
    /// Direction of the request.
    pub fn kind(&self) -> GestureKind {
        match self {
            Self::Open(_) => GestureKind::Open,
            Self::Close(_) => GestureKind::Close,
        }
    }

    /// Reason of an open request.
    pub fn open_reason(&self) -> Option<OpenGesture> {
        match *self {
            Self::Open(g) => Some(g),
            Self::Close(_) => None,
        }
    }

    /// Reason of a close request.
    pub fn close_reason(&self) -> Option<CloseGesture> {
        match *self {
            Self::Open(_) => None,
            Self::Close(g) => Some(g),
        }
    }

    /// Kebab-case reason tag, e.g. `"click-outside"`.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Open(OpenGesture::AnchorClick) | Self::Close(CloseGesture::AnchorClick) => {
                "anchor-click"
            }
            Self::Open(OpenGesture::AnchorKeyPress) => "anchor-key-press",
            Self::Close(CloseGesture::ClickOutside) => "click-outside",
            Self::Close(CloseGesture::Escape) => "escape",
        }
    }
}

/// Receiver of open/close requests.
///
/// The caller owns the `open` flag; a sink decides whether to honor, delay,
/// or veto each request. Any `FnMut(GestureIntent)` closure is a sink.
pub trait GestureSink {
    /// An open was requested.
    fn on_open(&mut self, gesture: OpenGesture);

    /// A close was requested.
    fn on_close(&mut self, gesture: CloseGesture);
}

impl<F: FnMut(GestureIntent)> GestureSink for F {
    fn on_open(&mut self, gesture: OpenGesture) {
        self(GestureIntent::Open(gesture));
    }

    fn on_close(&mut self, gesture: CloseGesture) {
        self(GestureIntent::Close(gesture));
    }
}

/// Deliver `intent` to `sink`.
pub fn emit<S: GestureSink + ?Sized>(sink: &mut S, intent: GestureIntent) {
    tracing::debug!(kind = ?intent.kind(), reason = intent.reason(), "gesture");
    match intent {
        GestureIntent::Open(g) => sink.on_open(g),
        GestureIntent::Close(g) => sink.on_close(g),
    }
}

/// Classify a click that landed on the anchor.
///
/// Non-primary buttons and handled events are ignored.
pub fn classify_anchor_click<K>(open: bool, event: &PointerEvent<K>) -> Option<GestureIntent> {
    if event.is_handled() || !event.is_primary() {
        return None;
    }
    Some(if open {
        GestureIntent::Close(CloseGesture::AnchorClick)
    } else {
        GestureIntent::Open(OpenGesture::AnchorClick)
    })
}

/// Classify a key press on the anchor.
///
/// Only ArrowDown, ArrowUp, Space, and Enter open, and only while closed.
/// The caller should mark the event handled when this returns an intent.
pub fn classify_anchor_key<K>(open: bool, event: &KeyEvent<K>) -> Option<GestureIntent> {
    if open || event.is_handled() {
        return None;
    }
    matches!(
        event.key,
        Key::ArrowDown | Key::ArrowUp | Key::Space | Key::Enter
    )
    .then_some(GestureIntent::Open(OpenGesture::AnchorKeyPress))
}
