//! The closed configuration model that share strings carry.
//!
//! Every type implements `Default` with its declared defaults and is
//! `#[serde(default)]`, so omitted fields always come back as those defaults.

mod bar;
mod condition;
mod geometry;
mod legacy;
mod shortcut;

pub use bar::{Bar, BarAlign, BarDock, BarVisibility};
pub use condition::{
    Condition, ConditionArg, ConditionOperator, ConditionSet, SENSITIVE_CONDITION_IDS,
};
pub use geometry::{Hotkey, Vec2, Vec4};
pub use legacy::{LegacyBar, LegacyDock, LegacyShortcut, LegacyShortcutKind};
pub use shortcut::{ICON_MARKER, Shortcut, ShortcutKind, ShortcutMode};
