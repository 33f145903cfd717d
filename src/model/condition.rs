//! Condition sets.
//!
//! Conditions are evaluated by the host against live game state; this crate
//! only carries them around. The argument of a condition is the one
//! polymorphic value in the model and goes through the type registry.

use super::geometry::{Vec2, Vec4};
use crate::codec::registry::{self, Primitive, Resolved, TYPE_KEY, VALUE_KEY, WireType};
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Condition ids that identify the player and must not leave the machine
/// without explicit consent.
pub const SENSITIVE_CONDITION_IDS: &[&str] = &["character", "home_world"];

/// How a condition combines with the result of the previous one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionOperator {
    #[default]
    And,
    Or,
    Xor,
    Equals,
}

/// Argument passed to a condition.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ConditionArg {
    #[default]
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Vec2(Vec2),
    Vec4(Vec4),
}

/// A single rule of a condition set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Condition {
    pub id: String,
    pub arg: ConditionArg,
    pub operator: ConditionOperator,
    pub negate: bool,
}

impl Condition {
    pub fn new(id: impl Into<String>, arg: ConditionArg) -> Self {
        Self {
            id: id.into(),
            arg,
            ..Default::default()
        }
    }

    pub fn is_sensitive(&self) -> bool {
        SENSITIVE_CONDITION_IDS.contains(&self.id.as_str())
    }
}

/// Named collection of conditions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConditionSet {
    pub name: String,
    pub conditions: Vec<Condition>,
}

impl ConditionSet {
    pub fn is_sensitive(&self) -> bool {
        self.conditions.iter().any(Condition::is_sensitive)
    }
}

#[derive(Serialize)]
struct TaggedRef<'a, T> {
    #[serde(rename = "$type")]
    tag: &'static str,
    #[serde(flatten)]
    value: &'a T,
}

#[derive(Serialize)]
struct PrimitiveRef<'a, T> {
    #[serde(rename = "$type")]
    tag: &'static str,
    #[serde(rename = "$value")]
    value: &'a T,
}

impl Serialize for ConditionArg {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ConditionArg::None => serializer.serialize_unit(),
            ConditionArg::Bool(b) => serializer.serialize_bool(*b),
            ConditionArg::Int(i) => serializer.serialize_i64(*i),
            // JSON has no literal for these; the tagger rejects the null `$value`.
            ConditionArg::Float(f) if !f.is_finite() => PrimitiveRef {
                tag: Primitive::F64.name(),
                value: f,
            }
            .serialize(serializer),
            ConditionArg::Float(f) => serializer.serialize_f64(*f),
            ConditionArg::Text(s) => serializer.serialize_str(s),
            // Vector arguments carry their alias; the tagger rewrites it for full exports.
            ConditionArg::Vec2(v) => TaggedRef {
                tag: WireType::Vec2.alias(),
                value: v,
            }
            .serialize(serializer),
            ConditionArg::Vec4(v) => TaggedRef {
                tag: WireType::Vec4.alias(),
                value: v,
            }
            .serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ConditionArg {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        arg_from_value(value).map_err(de::Error::custom)
    }
}

fn arg_from_value(value: Value) -> Result<ConditionArg, String> {
    match value {
        Value::Null => Ok(ConditionArg::None),
        Value::Bool(b) => Ok(ConditionArg::Bool(b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(ConditionArg::Int(i))
            } else if let Some(f) = n.as_f64() {
                Ok(ConditionArg::Float(f))
            } else {
                Err(format!("condition argument out of range: {}", n))
            }
        }
        Value::String(s) => Ok(ConditionArg::Text(s)),
        Value::Array(_) => Err("condition argument cannot be an array".to_string()),
        Value::Object(mut obj) => {
            let tag = match obj.remove(TYPE_KEY) {
                Some(Value::String(tag)) => Some(tag),
                Some(other) => return Err(format!("invalid type tag: {}", other)),
                None => None,
            };
            match tag {
                Some(tag) => match registry::resolve(&tag) {
                    Some(Resolved::Known(WireType::Vec2)) => vec2_arg(obj),
                    Some(Resolved::Known(WireType::Vec4)) => vec4_arg(obj),
                    Some(Resolved::Known(other)) => Err(format!(
                        "type {} cannot be used as a condition argument",
                        other.full_name()
                    )),
                    Some(Resolved::Primitive(prim)) => {
                        let inner = obj
                            .remove(VALUE_KEY)
                            .ok_or_else(|| format!("missing {} for {}", VALUE_KEY, tag))?;
                        primitive_arg(prim, inner)
                    }
                    None => Err(format!("unknown type: {}", tag)),
                },
                // Untagged vectors written by hand: tell them apart by their keys.
                None if obj.contains_key("z") || obj.contains_key("w") => vec4_arg(obj),
                None if obj.contains_key("x") || obj.contains_key("y") => vec2_arg(obj),
                None => Err("untagged object cannot be a condition argument".to_string()),
            }
        }
    }
}

fn vec2_arg(obj: Map<String, Value>) -> Result<ConditionArg, String> {
    serde_json::from_value(Value::Object(obj))
        .map(ConditionArg::Vec2)
        .map_err(|e| e.to_string())
}

fn vec4_arg(obj: Map<String, Value>) -> Result<ConditionArg, String> {
    serde_json::from_value(Value::Object(obj))
        .map(ConditionArg::Vec4)
        .map_err(|e| e.to_string())
}

fn primitive_arg(prim: Primitive, value: Value) -> Result<ConditionArg, String> {
    let mismatch = || format!("{} does not hold a {}", value, prim.name());
    match prim {
        Primitive::Bool => value.as_bool().map(ConditionArg::Bool).ok_or_else(mismatch),
        Primitive::I32 | Primitive::I64 | Primitive::U32 | Primitive::U64 => {
            value.as_i64().map(ConditionArg::Int).ok_or_else(mismatch)
        }
        Primitive::F32 | Primitive::F64 => {
            value.as_f64().map(ConditionArg::Float).ok_or_else(mismatch)
        }
        Primitive::String => value
            .as_str()
            .map(|s| ConditionArg::Text(s.to_string()))
            .ok_or_else(mismatch),
    }
}
