//! HUD display configuration model.
//!
//! This is the global, persisted set of presentation options edited from
//! the settings screen. Loading and saving live in the client crate.

use serde::{Deserialize, Serialize};

/// Fewest ore rows the HUD may be limited to.
pub const MIN_VISIBLE_ORES: u32 = 3;

/// Most ore rows the HUD may show.
pub const MAX_VISIBLE_ORES: u32 = 15;

/// Largest overlay offset magnitude, in scaled pixels.
pub const MAX_OVERLAY_OFFSET: i32 = 4096;

/// Horizontal anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HudPosition {
    /// Anchored to the left edge.
    #[default]
    Left,
    /// Anchored to the right edge.
    Right,
}

/// Vertical anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerticalPosition {
    /// Anchored to the top edge.
    #[default]
    Top,
    /// Centered vertically.
    Center,
    /// Anchored to the bottom edge.
    Bottom,
}

/// How each ore row is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisplayMode {
    /// Item icon.
    Icon,
    /// Ore name.
    #[default]
    Name,
}

impl HudPosition {
    /// The other side.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl DisplayMode {
    /// The other mode.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Icon => Self::Name,
            Self::Name => Self::Icon,
        }
    }
}

/// Presentation options for the ore HUD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplayConfig {
    /// Whether the HUD is drawn at all.
    pub enabled: bool,
    /// Show the `Y: n` header line.
    pub show_hud_header: bool,
    /// Horizontal anchor.
    pub hud_position: HudPosition,
    /// Vertical anchor.
    pub vertical_position: VerticalPosition,
    /// Horizontal offset in scaled pixels.
    pub overlay_x: i32,
    /// Vertical offset in scaled pixels.
    pub overlay_y: i32,
    /// Icon or name rows.
    pub display_mode: DisplayMode,
    /// Row limit before the `+N more` line.
    pub max_visible_ores: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            show_hud_header: true,
            hud_position: HudPosition::Left,
            vertical_position: VerticalPosition::Top,
            overlay_x: 4,
            overlay_y: 4,
            display_mode: DisplayMode::Name,
            max_visible_ores: 8,
        }
    }
}

impl DisplayConfig {
    /// Clamps values to the ranges the settings screen allows.
    pub fn validate(&mut self) {
        self.max_visible_ores = self.max_visible_ores.clamp(MIN_VISIBLE_ORES, MAX_VISIBLE_ORES);
        self.overlay_x = self.overlay_x.clamp(-MAX_OVERLAY_OFFSET, MAX_OVERLAY_OFFSET);
        self.overlay_y = self.overlay_y.clamp(-MAX_OVERLAY_OFFSET, MAX_OVERLAY_OFFSET);
    }

    /// Flips the enabled flag, returning the new value.
    pub fn toggle_enabled(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }
}
