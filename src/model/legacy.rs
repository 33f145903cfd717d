//! First-generation bar and shortcut shapes.
//!
//! These are only ever read from old share strings. They stay separate from
//! the current shapes and are converted with `upgrade`.

use super::bar::{Bar, BarAlign, BarDock, BarVisibility};
use super::geometry::{Hotkey, Vec2, Vec4};
use super::shortcut::{Shortcut, ShortcutKind, ShortcutMode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegacyShortcutKind {
    #[default]
    Single,
    /// Multi-line macro, folded into `Single` by the second generation.
    Multiline,
    Category,
    Spacer,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegacyDock {
    Top,
    Left,
    #[default]
    Bottom,
    Right,
    UndockedH,
    UndockedV,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyShortcut {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: LegacyShortcutKind,
    pub command: String,
    pub hotkey: i32,
    pub key_passthrough: bool,
    pub sub_list: Vec<LegacyShortcut>,
    pub mode: ShortcutMode,
    pub hide: bool,
    pub color: Vec4,
    pub icon_zoom: f32,
    pub icon_offset: Vec2,
    pub category_width: i32,
    pub category_stays_open: bool,
    pub category_columns: i32,
    pub category_spacing: i32,
    pub category_scale: f32,
    pub category_font_scale: f32,
    pub category_no_background: bool,
    pub category_on_hover: bool,
}

impl Default for LegacyShortcut {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: LegacyShortcutKind::Single,
            command: String::new(),
            hotkey: 0,
            key_passthrough: false,
            sub_list: Vec::new(),
            mode: ShortcutMode::Default,
            hide: false,
            color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            icon_zoom: 1.0,
            icon_offset: Vec2::default(),
            category_width: 0,
            category_stays_open: false,
            category_columns: 0,
            category_spacing: 8,
            category_scale: 1.0,
            category_font_scale: 1.0,
            category_no_background: false,
            category_on_hover: false,
        }
    }
}

impl LegacyShortcut {
    /// Convert to the current shape, recursively.
    pub fn upgrade(self) -> Shortcut {
        let kind = match self.kind {
            LegacyShortcutKind::Single | LegacyShortcutKind::Multiline => ShortcutKind::Action,
            LegacyShortcutKind::Category => ShortcutKind::Category,
            LegacyShortcutKind::Spacer => ShortcutKind::Spacer,
        };

        Shortcut {
            name: self.name,
            kind,
            command: self.command,
            hotkey: Hotkey(self.hotkey),
            key_passthrough: self.key_passthrough,
            sub_list: self
                .sub_list
                .into_iter()
                .map(LegacyShortcut::upgrade)
                .collect(),
            hide: self.hide,
            mode: self.mode,
            color_fg: self.color,
            icon_zoom: self.icon_zoom,
            icon_offset: self.icon_offset,
            category_width: self.category_width,
            category_stays_open: self.category_stays_open,
            category_columns: self.category_columns,
            category_spacing: legacy_spacing(self.category_spacing),
            category_scale: self.category_scale,
            category_font_scale: self.category_font_scale,
            category_no_background: self.category_no_background,
            category_on_hover: self.category_on_hover,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyBar {
    pub title: String,
    pub shortcut_list: Vec<LegacyShortcut>,
    pub hidden: bool,
    pub visibility: BarVisibility,
    pub alignment: BarAlign,
    pub dock_side: LegacyDock,
    pub position: Vec2,
    pub lock_position: bool,
    pub scale: f32,
    pub reveal_area_scale: f32,
    pub font_scale: f32,
    pub spacing: i32,
    pub button_width: i32,
    pub no_background: bool,
    pub hint: bool,
    pub hotkey: i32,
    pub condition_set: i32,
}

impl Default for LegacyBar {
    fn default() -> Self {
        Self {
            title: String::new(),
            shortcut_list: Vec::new(),
            hidden: false,
            visibility: BarVisibility::Always,
            alignment: BarAlign::Center,
            dock_side: LegacyDock::Bottom,
            position: Vec2::default(),
            lock_position: false,
            scale: 1.0,
            reveal_area_scale: 1.0,
            font_scale: 1.0,
            spacing: 8,
            button_width: 100,
            no_background: false,
            hint: false,
            hotkey: 0,
            condition_set: -1,
        }
    }
}

impl LegacyBar {
    /// Convert to the current shape, upgrading every shortcut.
    pub fn upgrade(self) -> Bar {
        let dock_side = match self.dock_side {
            LegacyDock::Top => BarDock::Top,
            LegacyDock::Left => BarDock::Left,
            LegacyDock::Bottom => BarDock::Bottom,
            LegacyDock::Right => BarDock::Right,
            LegacyDock::UndockedH | LegacyDock::UndockedV => BarDock::Undocked,
        };

        Bar {
            name: self.title,
            hidden: self.hidden,
            dock_side,
            alignment: self.alignment,
            visibility: self.visibility,
            hint: self.hint,
            button_width: self.button_width,
            shortcuts: self
                .shortcut_list
                .into_iter()
                .map(LegacyShortcut::upgrade)
                .collect(),
            position: self.position,
            lock_position: self.lock_position,
            scale: self.scale,
            reveal_area_scale: self.reveal_area_scale,
            font_scale: self.font_scale,
            spacing: legacy_spacing(self.spacing),
            no_background: self.no_background,
            condition_set: self.condition_set,
            hotkey: Hotkey(self.hotkey),
            ..Default::default()
        }
    }
}

/// Single integer spacing became a horizontal/vertical pair at half height.
fn legacy_spacing(spacing: i32) -> Vec2 {
    Vec2::new(spacing as f32, (spacing / 2) as f32)
}
