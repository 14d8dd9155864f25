// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading focus behavior settings from configuration.

#![cfg(feature = "serde")]

use understory_focus::{
    FocusKeys, FocusOutBehavior, FocusTrapSettings, FocusZoneDirection, FocusZoneSettings,
};

#[test]
fn empty_objects_are_the_defaults() {
    let zone: FocusZoneSettings = serde_json::from_str("{}").unwrap();
    assert_eq!(zone, FocusZoneSettings::default());
    let trap: FocusTrapSettings = serde_json::from_str("{}").unwrap();
    assert_eq!(trap, FocusTrapSettings::default());
}

#[test]
fn keys_are_named_flags() {
    let zone: FocusZoneSettings =
        serde_json::from_str(r#"{ "keys": "ARROW_ALL | JK", "focus_out": "stop" }"#).unwrap();
    assert_eq!(zone.keys, FocusKeys::ARROW_ALL | FocusKeys::JK);
    assert_eq!(zone.focus_out, FocusOutBehavior::Stop);
    assert!(!zone.disabled);
}

#[test]
fn zone_settings_survive_a_round_trip() {
    let zone = FocusZoneSettings::default()
        .with_direction(FocusZoneDirection::Horizontal)
        .with_focus_out(FocusOutBehavior::Stop);
    let json = serde_json::to_string(&zone).unwrap();
    let back: FocusZoneSettings = serde_json::from_str(&json).unwrap();
    assert_eq!(back, zone);

    let direction: FocusZoneDirection = serde_json::from_str(r#""both""#).unwrap();
    assert_eq!(direction, FocusZoneDirection::Both);
}

#[test]
fn disabled_trap() {
    let trap: FocusTrapSettings = serde_json::from_str(r#"{ "disabled": true }"#).unwrap();
    assert!(trap.disabled);
}
