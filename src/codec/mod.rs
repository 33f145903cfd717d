//! Wire codec for share strings.
//!
//! - `registry`: closed set of tagged types and their aliases
//! - `tagged`: type-tagged JSON with optional default elision
//! - `compress`: gzip + base64 text envelope
//!
//! Wire format: `base64(gzip(tagged JSON))`.

pub mod compress;
pub mod registry;
pub mod tagged;

pub use compress::{compress, decompress};
pub use registry::{TagStyle, WireType};
pub use tagged::{WireObject, from_tagged_value, to_tagged_value};

use crate::error::CodecError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How much of an object to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportMode {
    /// Drop nulls and declared defaults, write aliased tags.
    #[default]
    Compact,
    /// Write every field with full type names. Used for backups and
    /// debugging, independent of the alias table.
    Full,
}

impl ExportMode {
    pub fn tag_style(self) -> TagStyle {
        match self {
            ExportMode::Compact => TagStyle::Alias,
            ExportMode::Full => TagStyle::FullName,
        }
    }

    pub fn prunes_defaults(self) -> bool {
        self == ExportMode::Compact
    }
}

/// Serialize `value` to tagged JSON text.
pub fn to_json<T: WireObject>(value: &T, mode: ExportMode) -> Result<String, CodecError> {
    let tagged = to_tagged_value(value, mode)?;
    serde_json::to_string(&tagged).map_err(|e| CodecError::Serialize(T::WIRE_TYPE.full_name(), e))
}

/// Parse JSON text without serde_json's nesting limit.
///
/// Every category level nests an array and an object, so the default limit
/// of 128 would cap trees at about 60 levels. The stack grows on demand
/// instead of overflowing.
pub fn parse_json(json: &str) -> Result<Value, CodecError> {
    let mut de = serde_json::Deserializer::from_str(json);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))
        .map_err(CodecError::Json)?;
    de.end().map_err(CodecError::Json)?;
    Ok(value)
}

/// Parse tagged JSON text into `T`.
pub fn from_json<T: WireObject>(json: &str) -> Result<T, CodecError> {
    from_tagged_value(parse_json(json)?)
}

/// Deep copy through the codec with full type tags.
pub fn deep_clone<T: WireObject>(value: &T) -> Result<T, CodecError> {
    from_tagged_value(to_tagged_value(value, ExportMode::Full)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Bar, Shortcut, ShortcutKind};

    #[test]
    fn test_deep_clone_is_equal_and_independent() {
        let original = Bar::new(
            "Main",
            vec![Shortcut::category(
                "Cat",
                vec![Shortcut::action("a", "/a"), Shortcut::spacer()],
            )],
        );
        let mut copy = deep_clone(&original).unwrap();
        assert_eq!(copy, original);

        copy.shortcuts[0].sub_list.clear();
        assert_eq!(original.shortcuts[0].sub_list.len(), 2);
        assert_eq!(original.shortcuts[0].kind, ShortcutKind::Category);
    }

    #[test]
    fn test_json_roundtrip_both_modes() {
        let sh = Shortcut::category("Cat", vec![Shortcut::action("a", "/a")]);
        for mode in [ExportMode::Compact, ExportMode::Full] {
            let json = to_json(&sh, mode).unwrap();
            assert_eq!(from_json::<Shortcut>(&json).unwrap(), sh);
        }
    }

    #[test]
    fn test_export_mode_config_names() {
        let mode: ExportMode = serde_json::from_str("\"full\"").unwrap();
        assert_eq!(mode, ExportMode::Full);
        assert_eq!(ExportMode::default(), ExportMode::Compact);
    }

    #[test]
    fn test_parse_json_has_no_nesting_limit() {
        let depth = 500;
        let json = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
        let mut value = parse_json(&json).unwrap();

        // Unwrap level by level so the drop stays shallow.
        let mut seen = 0;
        while let Value::Array(mut items) = value {
            seen += 1;
            value = items.pop().unwrap_or(Value::Null);
        }
        assert_eq!(seen, depth);
    }

    #[test]
    fn test_parse_json_rejects_trailing_text() {
        assert!(matches!(parse_json("{} x"), Err(CodecError::Json(_))));
        assert!(matches!(parse_json("{"), Err(CodecError::Json(_))));
    }
}
