//! Chat commands and key actions.
//!
//! Both surfaces resolve to a [`Command`] so the client handles them
//! through a single dispatch.

use oreoracle_common::CommandError;
use serde::{Deserialize, Serialize};

/// Full command name.
pub const COMMAND_ROOT: &str = "oreoracle";

/// Short alias.
pub const COMMAND_ALIAS: &str = "oo";

/// Feedback key when the HUD is switched on.
pub const HUD_ENABLED_KEY: &str = "oreoracle.command.hud.enabled";

/// Feedback key when the HUD is switched off.
pub const HUD_DISABLED_KEY: &str = "oreoracle.command.hud.disabled";

/// Something the player asked the client to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Open the ore selector screen.
    OpenSelector,
    /// Flip the HUD enabled flag.
    ToggleHud,
}

/// Key actions registered with the host. Unbound by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyAction {
    /// Opens the selector.
    OpenSelector,
    /// Toggles the HUD.
    ToggleHud,
}

impl KeyAction {
    /// All key actions.
    pub const ALL: [Self; 2] = [Self::OpenSelector, Self::ToggleHud];

    /// Translation key of the binding.
    #[must_use]
    pub const fn translation_key(self) -> &'static str {
        match self {
            Self::OpenSelector => "key.oreoracle.open_selector",
            Self::ToggleHud => "key.oreoracle.toggle_hud",
        }
    }

    /// Default binding. Every action ships unbound.
    #[must_use]
    pub const fn default_binding(self) -> Option<char> {
        None
    }

    /// Command this action triggers.
    #[must_use]
    pub const fn command(self) -> Command {
        match self {
            Self::OpenSelector => Command::OpenSelector,
            Self::ToggleHud => Command::ToggleHud,
        }
    }
}

/// Parses a chat command line. The leading `/` is optional.
pub fn parse(input: &str) -> Result<Command, CommandError> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix('/').unwrap_or(trimmed);
    let mut parts = trimmed.split_whitespace();

    let root = parts.next().ok_or(CommandError::Empty)?;
    if root != COMMAND_ROOT && root != COMMAND_ALIAS {
        return Err(CommandError::Unknown(root.to_string()));
    }

    let command = match parts.next() {
        None => Command::OpenSelector,
        Some("toggle") => Command::ToggleHud,
        Some(other) => return Err(CommandError::Unknown(format!("{root} {other}"))),
    };

    if let Some(extra) = parts.next() {
        return Err(CommandError::InvalidArgument(extra.to_string()));
    }
    Ok(command)
}

/// Feedback shown after toggling the HUD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    /// Translation key.
    pub key: &'static str,
    /// English fallback.
    pub text: &'static str,
}

impl Feedback {
    /// Feedback for the new enabled state.
    #[must_use]
    pub const fn hud(enabled: bool) -> Self {
        if enabled {
            Self {
                key: HUD_ENABLED_KEY,
                text: "Ore Oracle HUD enabled",
            }
        } else {
            Self {
                key: HUD_DISABLED_KEY,
                text: "Ore Oracle HUD disabled",
            }
        }
    }
}
