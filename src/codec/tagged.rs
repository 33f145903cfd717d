//! Type-tagged JSON representation of model objects.
//!
//! Objects are first turned into plain JSON with serde, then walked along the
//! static slot schema of the registry to add (or check and remove) `$type`
//! tags. Compact output also drops null fields and fields equal to their
//! declared default.

use super::ExportMode;
use super::registry::{Resolved, Slot, TYPE_KEY, TagStyle, VALUE_KEY, WireType, resolve};
use crate::error::CodecError;
use crate::export::Envelope;
use crate::model::{
    Bar, Condition, ConditionSet, LegacyBar, LegacyShortcut, Shortcut, Vec2, Vec4,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// A model type with a registered wire tag.
pub trait WireObject: Serialize + DeserializeOwned + Default {
    const WIRE_TYPE: WireType;
}

macro_rules! wire_object {
    ($($ty:ty => $wire:ident),* $(,)?) => {
        $(impl WireObject for $ty {
            const WIRE_TYPE: WireType = WireType::$wire;
        })*
    };
}

wire_object! {
    Envelope => Envelope,
    LegacyBar => LegacyBar,
    Bar => Bar,
    LegacyShortcut => LegacyShortcut,
    Shortcut => Shortcut,
    ConditionSet => ConditionSet,
    Condition => Condition,
    Vec2 => Vec2,
    Vec4 => Vec4,
}

/// The declared defaults of a wire type as a JSON object.
pub fn declared_defaults(wire: WireType) -> Result<Map<String, Value>, CodecError> {
    fn defaults_of<T: WireObject>() -> Result<Value, CodecError> {
        serde_json::to_value(T::default())
            .map_err(|e| CodecError::Serialize(T::WIRE_TYPE.full_name(), e))
    }

    let value = match wire {
        WireType::Envelope => defaults_of::<Envelope>()?,
        WireType::LegacyBar => defaults_of::<LegacyBar>()?,
        WireType::Bar => defaults_of::<Bar>()?,
        WireType::LegacyShortcut => defaults_of::<LegacyShortcut>()?,
        WireType::Shortcut => defaults_of::<Shortcut>()?,
        WireType::ConditionSet => defaults_of::<ConditionSet>()?,
        WireType::Condition => defaults_of::<Condition>()?,
        WireType::Vec2 => defaults_of::<Vec2>()?,
        WireType::Vec4 => defaults_of::<Vec4>()?,
    };

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(CodecError::UnexpectedShape(wire.full_name())),
    }
}

/// Adds tags, and in compact mode prunes defaults, while walking the schema.
///
/// serde_json writes non-finite floats as `null`, which no float field can
/// read back. A `null` where the declared default is not `null` is therefore
/// rejected instead of producing a string that cannot be imported.
struct Tagger {
    style: TagStyle,
    prune: bool,
    defaults: HashMap<WireType, Map<String, Value>>,
}

impl Tagger {
    fn new(mode: ExportMode) -> Result<Self, CodecError> {
        let mut defaults = HashMap::new();
        for wire in WireType::ALL {
            defaults.insert(wire, declared_defaults(wire)?);
        }

        Ok(Self {
            style: mode.tag_style(),
            prune: mode.prunes_defaults(),
            defaults,
        })
    }

    fn annotate(&self, value: &mut Value, wire: WireType) -> Result<(), CodecError> {
        let Value::Object(obj) = value else {
            return Ok(());
        };

        if let Some(defaults) = self.defaults.get(&wire) {
            let lost = obj.iter().find(|(key, v)| {
                v.is_null() && defaults.get(key.as_str()).is_some_and(|d| !d.is_null())
            });
            if let Some((key, _)) = lost {
                return Err(CodecError::NonFinite {
                    ty: wire.full_name(),
                    field: key.clone(),
                });
            }

            if self.prune {
                let pinned = wire.pinned();
                obj.retain(|key, v| {
                    pinned.contains(&key.as_str())
                        || (!v.is_null() && defaults.get(key) != Some(&*v))
                });
            }
        }

        for (field, slot) in wire.slots() {
            let Some(child) = obj.get_mut(*field) else {
                continue;
            };
            match slot {
                Slot::One(inner) => self.annotate(child, *inner)?,
                Slot::Many(inner) => {
                    if let Value::Array(items) = child {
                        for item in items {
                            self.annotate(item, *inner)?;
                        }
                    }
                }
                Slot::Dynamic => self.retag_dynamic(child, wire, field)?,
            }
        }

        obj.insert(
            TYPE_KEY.to_string(),
            Value::String(wire.tag(self.style).to_string()),
        );
        Ok(())
    }

    /// Polymorphic values carry their own tag; only its style changes.
    fn retag_dynamic(&self, value: &mut Value, owner: WireType, field: &str) -> Result<(), CodecError> {
        let Value::Object(obj) = value else {
            return Ok(());
        };
        let resolved = match obj.get(TYPE_KEY) {
            Some(Value::String(tag)) => resolve(tag),
            _ => None,
        };
        match resolved {
            Some(Resolved::Known(wire)) => {
                if let Some((key, _)) = obj.iter().find(|(_, v)| v.is_null()) {
                    return Err(CodecError::NonFinite {
                        ty: wire.full_name(),
                        field: key.clone(),
                    });
                }
                obj.insert(
                    TYPE_KEY.to_string(),
                    Value::String(wire.tag(self.style).to_string()),
                );
            }
            Some(Resolved::Primitive(_)) if obj.get(VALUE_KEY).is_some_and(Value::is_null) => {
                return Err(CodecError::NonFinite {
                    ty: owner.full_name(),
                    field: field.to_string(),
                });
            }
            _ => {}
        }
        Ok(())
    }
}

/// Serialize `value` into tagged JSON.
pub fn to_tagged_value<T: WireObject>(value: &T, mode: ExportMode) -> Result<Value, CodecError> {
    let mut json = serde_json::to_value(value)
        .map_err(|e| CodecError::Serialize(T::WIRE_TYPE.full_name(), e))?;
    Tagger::new(mode)?.annotate(&mut json, T::WIRE_TYPE)?;
    Ok(json)
}

/// Deserialize tagged JSON into `T`, accepting both tag styles.
///
/// A tagged root must name `T`. An untagged root is only accepted when all
/// of its keys are fields of `T`, so that payloads of another shape are
/// rejected instead of silently decoding to defaults.
pub fn from_tagged_value<T: WireObject>(mut value: Value) -> Result<T, CodecError> {
    let wire = T::WIRE_TYPE;

    if let Value::Object(obj) = &value
        && !obj.contains_key(TYPE_KEY)
    {
        let known = declared_defaults(wire)?;
        if !obj.keys().all(|key| known.contains_key(key)) {
            return Err(CodecError::UnexpectedShape(wire.full_name()));
        }
    }

    strip_tags(&mut value, wire)?;
    // Deep category chains recurse once per level.
    T::deserialize(serde_stacker::Deserializer::new(value))
        .map_err(|e| CodecError::Shape(wire.full_name(), e))
}

/// Check and remove the tags of statically typed objects.
fn strip_tags(value: &mut Value, expected: WireType) -> Result<(), CodecError> {
    let Value::Object(obj) = value else {
        return Ok(());
    };

    match obj.remove(TYPE_KEY) {
        Some(Value::String(tag)) => match resolve(&tag) {
            Some(Resolved::Known(found)) if found == expected => {}
            Some(Resolved::Known(found)) => {
                return Err(CodecError::UnexpectedType {
                    expected: expected.full_name(),
                    found: found.full_name(),
                });
            }
            Some(Resolved::Primitive(prim)) => {
                return Err(CodecError::UnexpectedType {
                    expected: expected.full_name(),
                    found: prim.name(),
                });
            }
            None => return Err(CodecError::UnknownType(tag)),
        },
        Some(other) => return Err(CodecError::InvalidTag(other.to_string())),
        None => {}
    }

    for (field, slot) in expected.slots() {
        let Some(child) = obj.get_mut(*field) else {
            continue;
        };
        match slot {
            Slot::One(inner) => strip_tags(child, *inner)?,
            Slot::Many(inner) => {
                if let Value::Array(items) = child {
                    for item in items {
                        strip_tags(item, *inner)?;
                    }
                }
            }
            // Decoded by the value type itself through the registry.
            Slot::Dynamic => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConditionArg, ShortcutKind};
    use serde_json::json;

    #[test]
    fn test_slots_name_real_fields() {
        for wire in WireType::ALL {
            let defaults = declared_defaults(wire).unwrap();
            for (field, _) in wire.slots() {
                assert!(
                    defaults.contains_key(*field),
                    "{} has no field {}",
                    wire.full_name(),
                    field
                );
            }
        }
    }

    #[test]
    fn test_compact_omits_defaults_and_uses_aliases() {
        let sh = Shortcut {
            name: "Sprint".into(),
            ..Default::default()
        };
        let value = to_tagged_value(&sh, ExportMode::Compact).unwrap();
        assert_eq!(value, json!({"$type": "s2", "name": "Sprint"}));
    }

    #[test]
    fn test_compact_tags_nested_values() {
        let sh = Shortcut {
            kind: ShortcutKind::Category,
            category_spacing: Vec2::new(8.0, 6.0),
            sub_list: vec![Shortcut::action("a", "/a")],
            ..Default::default()
        };
        let value = to_tagged_value(&sh, ExportMode::Compact).unwrap();
        assert_eq!(value["category_spacing"]["$type"], "2");
        assert_eq!(value["sub_list"][0]["$type"], "s2");
        assert_eq!(value["sub_list"][0]["command"], "/a");
    }

    #[test]
    fn test_full_keeps_everything_with_full_names() {
        let value = to_tagged_value(&Bar::default(), ExportMode::Full).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj["$type"], WireType::Bar.full_name());
        assert_eq!(obj["position"]["$type"], WireType::Vec2.full_name());
        assert_eq!(
            obj.len(),
            declared_defaults(WireType::Bar).unwrap().len() + 1
        );
    }

    #[test]
    fn test_dynamic_tag_follows_style() {
        let cnd = Condition::new("pos", ConditionArg::Vec2(Vec2::new(1.0, 1.0)));
        let full = to_tagged_value(&cnd, ExportMode::Full).unwrap();
        assert_eq!(full["arg"]["$type"], WireType::Vec2.full_name());

        let back: Condition = from_tagged_value(full).unwrap();
        assert_eq!(back, cnd);
    }

    #[test]
    fn test_wrong_root_tag_is_rejected() {
        let value = json!({"$type": "b", "title": "old"});
        let err = from_tagged_value::<Bar>(value).unwrap_err();
        assert!(matches!(err, CodecError::UnexpectedType { .. }));
    }

    #[test]
    fn test_unknown_nested_tag_is_rejected() {
        let value = json!({"$type": "b2", "shortcuts": [{"$type": "zz"}]});
        let err = from_tagged_value::<Bar>(value).unwrap_err();
        assert!(matches!(err, CodecError::UnknownType(tag) if tag == "zz"));
    }

    #[test]
    fn test_untagged_root_is_matched_by_keys() {
        let ok: Shortcut = from_tagged_value(json!({"name": "x", "command": "/x"})).unwrap();
        assert_eq!(ok.command, "/x");

        let err = from_tagged_value::<Shortcut>(json!({"title": "a bar"})).unwrap_err();
        assert!(matches!(err, CodecError::UnexpectedShape(_)));
    }

    #[test]
    fn test_non_object_root_is_a_shape_error() {
        let err = from_tagged_value::<Bar>(json!("hello")).unwrap_err();
        assert!(matches!(err, CodecError::Shape(..)));
    }

    #[test]
    fn test_non_finite_values_are_refused() {
        let bar = Bar {
            font_scale: f32::NEG_INFINITY,
            ..Default::default()
        };
        for mode in [ExportMode::Compact, ExportMode::Full] {
            match to_tagged_value(&bar, mode).unwrap_err() {
                CodecError::NonFinite { ty, field } => {
                    assert_eq!(ty, WireType::Bar.full_name());
                    assert_eq!(field, "font_scale");
                }
                other => panic!("unexpected error {other:?}"),
            }
        }

        let cnd = Condition::new("ratio", ConditionArg::Float(f64::NAN));
        let err = to_tagged_value(&cnd, ExportMode::Compact).unwrap_err();
        assert!(matches!(err, CodecError::NonFinite { field, .. } if field == "arg"));
    }
}
