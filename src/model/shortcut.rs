//! Current-generation shortcut shape.

use super::geometry::{Hotkey, Vec2, Vec4};
use serde::{Deserialize, Serialize};

/// Marker that flags a shortcut name as carrying an icon (e.g. `::1234`).
pub const ICON_MARKER: &str = "::";

/// Discriminant of a shortcut node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortcutKind {
    /// Runs `command` when clicked.
    #[default]
    Action,
    /// Opens a popup holding `sub_list`.
    Category,
    /// Empty gap between buttons.
    Spacer,
}

/// How a category picks the command to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortcutMode {
    #[default]
    Default,
    Incremental,
    Random,
}

/// A node of a shortcut tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shortcut {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ShortcutKind,
    pub command: String,
    pub hotkey: Hotkey,
    pub key_passthrough: bool,
    /// Children, only meaningful for categories.
    pub sub_list: Vec<Shortcut>,
    pub hide: bool,
    pub mode: ShortcutMode,

    pub color_fg: Vec4,
    pub color_bg: Vec4,
    pub color_animation: i32,

    // Icon settings, only meaningful when the name carries ICON_MARKER
    pub icon_zoom: f32,
    pub icon_offset: Vec2,
    pub icon_rotation: f32,
    pub cooldown_action: u32,
    pub cooldown_style: i32,

    // Category popup settings
    pub category_width: i32,
    pub category_stays_open: bool,
    pub category_columns: i32,
    pub category_spacing: Vec2,
    pub category_scale: f32,
    pub category_font_scale: f32,
    pub category_no_background: bool,
    pub category_on_hover: bool,
    pub category_hover_close: bool,

    /// Runtime cursor used by incremental categories. Never meaningful
    /// outside the process that set it.
    #[serde(rename = "_i")]
    pub volatile_index: i32,
}

impl Default for Shortcut {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: ShortcutKind::Action,
            command: String::new(),
            hotkey: Hotkey::NONE,
            key_passthrough: false,
            sub_list: Vec::new(),
            hide: false,
            mode: ShortcutMode::Default,
            color_fg: Vec4::new(1.0, 1.0, 1.0, 1.0),
            color_bg: Vec4::default(),
            color_animation: 0,
            icon_zoom: 1.0,
            icon_offset: Vec2::default(),
            icon_rotation: 0.0,
            cooldown_action: 0,
            cooldown_style: 0,
            category_width: 0,
            category_stays_open: false,
            category_columns: 0,
            category_spacing: Vec2::new(8.0, 4.0),
            category_scale: 1.0,
            category_font_scale: 1.0,
            category_no_background: false,
            category_on_hover: false,
            category_hover_close: false,
            volatile_index: 0,
        }
    }
}

impl Shortcut {
    /// Shorthand for an action button.
    pub fn action(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
            ..Default::default()
        }
    }

    /// Shorthand for a category holding `children`.
    pub fn category(name: impl Into<String>, children: Vec<Shortcut>) -> Self {
        Self {
            name: name.into(),
            kind: ShortcutKind::Category,
            sub_list: children,
            ..Default::default()
        }
    }

    pub fn spacer() -> Self {
        Self {
            kind: ShortcutKind::Spacer,
            ..Default::default()
        }
    }

    pub fn is_category(&self) -> bool {
        self.kind == ShortcutKind::Category
    }

    /// Whether the name carries the icon marker.
    pub fn has_icon(&self) -> bool {
        self.name.contains(ICON_MARKER)
    }
}
