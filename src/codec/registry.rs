//! Type registry: the closed set of tagged wire types and their aliases.
//!
//! Every object on the wire carries a `$type` tag. Compact exports write the
//! short alias, full exports write the stable full name; both resolve back
//! to the same `WireType`. Aliases are part of the wire format and must never
//! change once released, even when the Rust types are renamed.

/// Key holding the type tag of an object.
pub const TYPE_KEY: &str = "$type";

/// Key holding the wrapped value of a tagged primitive.
pub const VALUE_KEY: &str = "$value";

/// A type that can appear tagged on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireType {
    Envelope,
    LegacyBar,
    Bar,
    LegacyShortcut,
    Shortcut,
    ConditionSet,
    Condition,
    Vec2,
    Vec4,
}

/// How to write type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagStyle {
    Alias,
    FullName,
}

/// Where nested tagged values live inside a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// A single nested object of a known type.
    One(WireType),
    /// A list of objects of a known type.
    Many(WireType),
    /// A polymorphic value whose tag decides the type.
    Dynamic,
}

/// Primitive types understood by the generic resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Bool,
    I32,
    I64,
    U32,
    U64,
    F32,
    F64,
    String,
}

impl Primitive {
    pub fn name(self) -> &'static str {
        match self {
            Primitive::Bool => "bool",
            Primitive::I32 => "i32",
            Primitive::I64 => "i64",
            Primitive::U32 => "u32",
            Primitive::U64 => "u64",
            Primitive::F32 => "f32",
            Primitive::F64 => "f64",
            Primitive::String => "string",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "bool" => Some(Primitive::Bool),
            "i32" => Some(Primitive::I32),
            "i64" => Some(Primitive::I64),
            "u32" => Some(Primitive::U32),
            "u64" => Some(Primitive::U64),
            "f32" => Some(Primitive::F32),
            "f64" => Some(Primitive::F64),
            "string" | "String" => Some(Primitive::String),
            _ => None,
        }
    }
}

/// Outcome of resolving a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved {
    Known(WireType),
    Primitive(Primitive),
}

impl WireType {
    pub const ALL: [WireType; 9] = [
        WireType::Envelope,
        WireType::LegacyBar,
        WireType::Bar,
        WireType::LegacyShortcut,
        WireType::Shortcut,
        WireType::ConditionSet,
        WireType::Condition,
        WireType::Vec2,
        WireType::Vec4,
    ];

    /// Short wire alias.
    pub fn alias(self) -> &'static str {
        match self {
            WireType::Envelope => "e",
            WireType::LegacyBar => "b",
            WireType::Bar => "b2",
            WireType::LegacyShortcut => "s",
            WireType::Shortcut => "s2",
            WireType::ConditionSet => "cs",
            WireType::Condition => "c",
            WireType::Vec2 => "2",
            WireType::Vec4 => "4",
        }
    }

    /// Stable non-aliased name, written by full exports.
    pub fn full_name(self) -> &'static str {
        match self {
            WireType::Envelope => "shortcut_share::export::Envelope",
            WireType::LegacyBar => "shortcut_share::model::LegacyBar",
            WireType::Bar => "shortcut_share::model::Bar",
            WireType::LegacyShortcut => "shortcut_share::model::LegacyShortcut",
            WireType::Shortcut => "shortcut_share::model::Shortcut",
            WireType::ConditionSet => "shortcut_share::model::ConditionSet",
            WireType::Condition => "shortcut_share::model::Condition",
            WireType::Vec2 => "shortcut_share::model::Vec2",
            WireType::Vec4 => "shortcut_share::model::Vec4",
        }
    }

    pub fn tag(self, style: TagStyle) -> &'static str {
        match style {
            TagStyle::Alias => self.alias(),
            TagStyle::FullName => self.full_name(),
        }
    }

    /// Fields of this type that hold tagged values.
    pub fn slots(self) -> &'static [(&'static str, Slot)] {
        match self {
            WireType::Envelope => &[
                ("b1", Slot::One(WireType::LegacyBar)),
                ("b2", Slot::One(WireType::Bar)),
                ("s1", Slot::One(WireType::LegacyShortcut)),
                ("s2", Slot::One(WireType::Shortcut)),
                ("cs", Slot::One(WireType::ConditionSet)),
            ],
            WireType::LegacyBar => &[
                ("shortcut_list", Slot::Many(WireType::LegacyShortcut)),
                ("position", Slot::One(WireType::Vec2)),
            ],
            WireType::Bar => &[
                ("shortcuts", Slot::Many(WireType::Shortcut)),
                ("position", Slot::One(WireType::Vec2)),
                ("spacing", Slot::One(WireType::Vec2)),
            ],
            WireType::LegacyShortcut => &[
                ("sub_list", Slot::Many(WireType::LegacyShortcut)),
                ("color", Slot::One(WireType::Vec4)),
                ("icon_offset", Slot::One(WireType::Vec2)),
            ],
            WireType::Shortcut => &[
                ("sub_list", Slot::Many(WireType::Shortcut)),
                ("color_fg", Slot::One(WireType::Vec4)),
                ("color_bg", Slot::One(WireType::Vec4)),
                ("icon_offset", Slot::One(WireType::Vec2)),
                ("category_spacing", Slot::One(WireType::Vec2)),
            ],
            WireType::ConditionSet => &[("conditions", Slot::Many(WireType::Condition))],
            WireType::Condition => &[("arg", Slot::Dynamic)],
            WireType::Vec2 | WireType::Vec4 => &[],
        }
    }

    /// Fields written even when they hold their declared default.
    pub fn pinned(self) -> &'static [&'static str] {
        match self {
            // The exporter's format version.
            WireType::Envelope => &["v"],
            _ => &[],
        }
    }
}

/// Resolve an alias or full name. Names outside the registry fall back to
/// the generic primitive resolver.
pub fn resolve(tag: &str) -> Option<Resolved> {
    WireType::ALL
        .iter()
        .find(|t| t.alias() == tag || t.full_name() == tag)
        .map(|t| Resolved::Known(*t))
        .or_else(|| Primitive::from_name(tag).map(Resolved::Primitive))
}
