//! First-generation share strings.
//!
//! Before the envelope existed a share string held a bare bar or shortcut.
//! When a payload is not an envelope it is retried against those shapes,
//! and recovered objects are wrapped in an envelope marked with the last
//! version that produced them.

use crate::codec::from_tagged_value;
use crate::export::Envelope;
use crate::model::{LegacyBar, LegacyShortcut};
use crate::walk::{walk_all_mut, walk_mut};
use serde_json::Value;
use tracing::{debug, info};

/// Version recorded on envelopes rebuilt from bare legacy payloads.
pub const LEGACY_VERSION: &str = "1.3.2.0";

/// Retry `payload` as a legacy bar, then as a legacy shortcut.
pub fn decode_legacy(payload: &Value) -> Option<Envelope> {
    let mut envelope = Envelope {
        version: LEGACY_VERSION.to_string(),
        ..Default::default()
    };

    match from_tagged_value::<LegacyBar>(payload.clone()) {
        Ok(bar) => {
            info!(title = %bar.title, "Recovered legacy bar");
            envelope.legacy_bar = Some(bar);
        }
        Err(bar_err) => match from_tagged_value::<LegacyShortcut>(payload.clone()) {
            Ok(shortcut) => {
                info!(name = %shortcut.name, "Recovered legacy shortcut");
                envelope.legacy_shortcut = Some(shortcut);
            }
            Err(shortcut_err) => {
                debug!(%bar_err, %shortcut_err, "Payload matches no legacy shape");
                return None;
            }
        },
    }

    Some(envelope)
}

/// Fix up historical quirks before legacy shapes are upgraded.
///
/// - envelopes without a version get [`LEGACY_VERSION`]
/// - multi-line commands copied on Windows carry `\r\n`; the host splits on `\n`
pub fn apply_legacy_patches(envelope: &mut Envelope) {
    if envelope.version.trim().is_empty() {
        envelope.version = LEGACY_VERSION.to_string();
    }

    let mut patched = 0usize;
    let mut normalize = |sh: &mut LegacyShortcut| {
        if sh.command.contains("\r\n") {
            sh.command = sh.command.replace("\r\n", "\n");
            patched += 1;
        }
    };

    if let Some(bar) = envelope.legacy_bar.as_mut() {
        walk_all_mut(&mut bar.shortcut_list, &mut normalize);
    }
    if let Some(shortcut) = envelope.legacy_shortcut.as_mut() {
        walk_mut(shortcut, &mut normalize);
    }

    if patched > 0 {
        debug!(patched, "Normalized legacy command line endings");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tagged_legacy_bar() {
        let env = decode_legacy(&json!({"$type": "b", "title": "Old"})).unwrap();
        assert_eq!(env.legacy_bar.unwrap().title, "Old");
        assert!(env.legacy_shortcut.is_none());
        assert_eq!(env.version, LEGACY_VERSION);
    }

    #[test]
    fn test_tagged_legacy_shortcut() {
        let env = decode_legacy(&json!({"$type": "s", "name": "Old", "command": "/a"})).unwrap();
        assert!(env.legacy_bar.is_none());
        assert_eq!(env.legacy_shortcut.unwrap().command, "/a");
    }

    #[test]
    fn test_untagged_shapes_are_told_apart_by_keys() {
        let bar = decode_legacy(&json!({"title": "Old", "shortcut_list": []})).unwrap();
        assert!(bar.legacy_bar.is_some());

        let sh = decode_legacy(&json!({"name": "Old", "type": "multiline"})).unwrap();
        assert!(sh.legacy_shortcut.is_some());
    }

    #[test]
    fn test_no_match() {
        assert!(decode_legacy(&json!({"$type": "b2"})).is_none());
        assert!(decode_legacy(&json!({"unrelated": 1})).is_none());
        assert!(decode_legacy(&json!([1, 2, 3])).is_none());
    }

    #[test]
    fn test_line_endings_are_normalized_in_whole_tree() {
        let mut env = Envelope {
            version: String::new(),
            legacy_bar: Some(LegacyBar {
                shortcut_list: vec![LegacyShortcut {
                    command: "/a\r\n/b".into(),
                    sub_list: vec![LegacyShortcut {
                        command: "/c\r\n/d\r\n".into(),
                        ..Default::default()
                    }],
                    ..Default::default()
                }],
                ..Default::default()
            }),
            ..Default::default()
        };
        apply_legacy_patches(&mut env);

        assert_eq!(env.version, LEGACY_VERSION);
        let top = &env.legacy_bar.unwrap().shortcut_list[0];
        assert_eq!(top.command, "/a\n/b");
        assert_eq!(top.sub_list[0].command, "/c\n/d\n");
    }

    #[test]
    fn test_patches_leave_current_envelopes_alone() {
        let mut env = Envelope::default();
        let before = env.clone();
        apply_legacy_patches(&mut env);
        assert_eq!(env, before);
    }
}
