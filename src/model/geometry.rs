//! Small value types shared by bars, shortcuts and conditions.

use serde::{Deserialize, Serialize};

/// Two-component vector (positions, offsets, spacing).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Four-component vector, used for RGBA colours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }
}

/// Packed hotkey code.
///
/// The low 16 bits hold the virtual key, bits 16-18 the Shift, Ctrl and Alt
/// modifiers. `Hotkey(0)` means no hotkey is bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hotkey(pub i32);

impl Hotkey {
    pub const NONE: Hotkey = Hotkey(0);
    pub const SHIFT: i32 = 1 << 16;
    pub const CTRL: i32 = 1 << 17;
    pub const ALT: i32 = 1 << 18;

    /// Build a hotkey from a virtual key and modifier bits.
    pub const fn new(key: u16, modifiers: i32) -> Self {
        Hotkey(key as i32 | (modifiers & (Self::SHIFT | Self::CTRL | Self::ALT)))
    }

    /// The virtual key without modifiers.
    pub const fn key(self) -> u16 {
        (self.0 & 0xFFFF) as u16
    }

    pub const fn modifiers(self) -> i32 {
        self.0 & (Self::SHIFT | Self::CTRL | Self::ALT)
    }

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}
