//! Integration tests for first-generation share strings.
//!
//! Legacy payloads are written by hand here, the way old versions produced
//! them: a bare bar or shortcut with no envelope around it.

use shortcut_share::codec::compress;
use shortcut_share::config::SharePolicy;
use shortcut_share::import::{LEGACY_VERSION, decode, try_import};
use shortcut_share::model::{BarDock, ShortcutKind, Vec2, Vec4};

const LEGACY_BAR: &str = r#"{
    "$type": "b",
    "title": "Old Bar",
    "dock_side": "undocked_v",
    "spacing": 6,
    "condition_set": 2,
    "hotkey": 65601,
    "shortcut_list": [
        {"$type": "s", "name": "Hello", "type": "single", "command": "/echo hi"},
        {"$type": "s", "name": "Lines", "type": "multiline", "command": "/a\r\n/b", "hotkey": 50},
        {
            "$type": "s",
            "name": "Cat",
            "type": "category",
            "category_spacing": 10,
            "color": {"$type": "4", "x": 1.0, "y": 0.0, "z": 0.0, "w": 1.0},
            "sub_list": [{"$type": "s", "type": "spacer"}]
        }
    ]
}"#;

#[test]
fn test_legacy_bar_decodes_via_fallback() {
    let text = compress(LEGACY_BAR).unwrap();

    let envelope = decode(&text).unwrap();
    assert_eq!(envelope.version, LEGACY_VERSION);
    assert!(envelope.has_legacy());

    let report = try_import(&text, &SharePolicy::permissive(), true);
    assert!(report.diagnostics.is_empty(), "{:?}", report.diagnostics);

    let bar = report.result.bar.unwrap();
    assert_eq!(bar.name, "Old Bar");
    assert_eq!(bar.dock_side, BarDock::Undocked);
    assert_eq!(bar.spacing, Vec2::new(6.0, 3.0));
    assert_eq!(bar.condition_set, 2);
    assert_eq!(bar.shortcuts.len(), 3);

    let lines = &bar.shortcuts[1];
    assert_eq!(lines.kind, ShortcutKind::Action);
    assert_eq!(lines.command, "/a\n/b");

    let cat = &bar.shortcuts[2];
    assert_eq!(cat.kind, ShortcutKind::Category);
    assert_eq!(cat.category_spacing, Vec2::new(10.0, 5.0));
    assert_eq!(cat.color_fg, Vec4::new(1.0, 0.0, 0.0, 1.0));
    assert_eq!(cat.sub_list[0].kind, ShortcutKind::Spacer);
}

#[test]
fn test_legacy_bar_goes_through_gates() {
    let text = compress(LEGACY_BAR).unwrap();
    let report = try_import(&text, &SharePolicy::default(), true);
    assert_eq!(report.diagnostics.len(), 3);

    let bar = report.result.bar.unwrap();
    assert_eq!(bar.condition_set, -1);
    assert!(bar.hotkey.is_none());
    assert!(bar.shortcuts[1].hotkey.is_none());
}

#[test]
fn test_untagged_legacy_shortcut() {
    let text = compress(r#"{"name":"Old","type":"multiline","command":"/x\r\n/y\r\n"}"#).unwrap();
    let report = try_import(&text, &SharePolicy::default(), true);
    assert!(report.diagnostics.is_empty());

    let shortcut = report.result.shortcut.unwrap();
    assert_eq!(shortcut.name, "Old");
    assert_eq!(shortcut.kind, ShortcutKind::Action);
    assert_eq!(shortcut.command, "/x\n/y\n");
    assert!(report.result.bar.is_none());
}

#[test]
fn test_envelope_with_legacy_slot() {
    let text = compress(r#"{"$type":"e","s1":{"$type":"s","name":"Wrapped","type":"spacer"}}"#)
        .unwrap();
    let report = try_import(&text, &SharePolicy::default(), true);
    let shortcut = report.result.shortcut.unwrap();
    assert_eq!(shortcut.name, "Wrapped");
    assert_eq!(shortcut.kind, ShortcutKind::Spacer);
}

#[test]
fn test_unrecognized_shape_reports_failure() {
    let text = compress(r#"{"something":"else"}"#).unwrap();
    let report = try_import(&text, &SharePolicy::default(), true);
    assert!(report.result.is_empty());
    assert!(report.failed());
}
