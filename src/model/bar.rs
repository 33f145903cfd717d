//! Current-generation bar shape.

use super::geometry::{Hotkey, Vec2};
use super::shortcut::Shortcut;
use serde::{Deserialize, Serialize};

/// Screen edge a bar is docked to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarDock {
    Undocked,
    Top,
    Left,
    #[default]
    Bottom,
    Right,
}

/// Alignment along the docked edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarAlign {
    LeftOrTop,
    #[default]
    Center,
    RightOrBottom,
}

/// When a docked bar is revealed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarVisibility {
    Slide,
    Immediate,
    #[default]
    Always,
}

/// A shortcut bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bar {
    pub name: String,
    pub hidden: bool,
    pub dock_side: BarDock,
    /// Only meaningful when docked.
    pub alignment: BarAlign,
    pub visibility: BarVisibility,
    /// Only meaningful when docked and not always visible.
    pub hint: bool,
    pub button_width: i32,
    pub shortcuts: Vec<Shortcut>,
    pub position: Vec2,
    pub lock_position: bool,
    pub scale: f32,
    /// Only meaningful for hidden docked bars; the reveal area is derived
    /// from the bar size otherwise.
    pub reveal_area_scale: f32,
    pub font_scale: f32,
    pub spacing: Vec2,
    pub no_background: bool,
    pub no_category_backgrounds: bool,
    pub open_subcategories_on_hover: bool,
    /// Index into the host's condition sets, -1 for none.
    pub condition_set: i32,
    /// A bound hotkey turns the bar into a pie.
    pub hotkey: Hotkey,
}

impl Default for Bar {
    fn default() -> Self {
        Self {
            name: String::new(),
            hidden: false,
            dock_side: BarDock::Bottom,
            alignment: BarAlign::Center,
            visibility: BarVisibility::Always,
            hint: false,
            button_width: 100,
            shortcuts: Vec::new(),
            position: Vec2::default(),
            lock_position: false,
            scale: 1.0,
            reveal_area_scale: 1.0,
            font_scale: 1.0,
            spacing: Vec2::new(8.0, 4.0),
            no_background: false,
            no_category_backgrounds: false,
            open_subcategories_on_hover: false,
            condition_set: -1,
            hotkey: Hotkey::NONE,
        }
    }
}

impl Bar {
    pub fn new(name: impl Into<String>, shortcuts: Vec<Shortcut>) -> Self {
        Self {
            name: name.into(),
            shortcuts,
            ..Default::default()
        }
    }

    pub fn is_docked(&self) -> bool {
        self.dock_side != BarDock::Undocked
    }
}
