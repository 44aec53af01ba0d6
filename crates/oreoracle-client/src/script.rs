//! Line-oriented host script.
//!
//! The headless binary reads one instruction per line and drives an
//! [`OracleClient`] with it, printing what a real host would draw.

use crate::commands::KeyAction;
use crate::session::{HudFrame, OracleClient, Outcome, Screen};
use oreoracle_common::{BiomeId, CommandError, Dimension, WorldIdentity};
use oreoracle_core::layout::{ScreenSize, TextMetrics};
use oreoracle_core::{
    DisplayConfig, DisplayFilter, DisplayMode, FrameState, HudPosition, Ore, ProbabilityTier,
    VerticalPosition,
};
use tracing::warn;

/// Fixed-width font: every glyph is six pixels wide.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonospaceMetrics;

impl TextMetrics for MonospaceMetrics {
    fn text_width(&self, text: &str) -> i32 {
        i32::try_from(text.chars().count()).map_or(i32::MAX, |n| n.saturating_mul(6))
    }
}

/// One script instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// Join a server (`host[:port]`) or a singleplayer save (`sp:<name>`).
    Join(WorldIdentity),
    /// Leave the current world.
    Leave,
    /// Render one frame. `None` dimension means the host skips the frame.
    Frame {
        /// Player block Y.
        y: i32,
        /// Dimension, if recognised.
        dimension: Option<Dimension>,
        /// Biome at the player.
        biome: Option<BiomeId>,
    },
    /// Track or untrack an ore.
    Track(Ore, bool),
    /// Set the display filter.
    Filter(DisplayFilter),
    /// Press a key action.
    Key(KeyAction),
    /// Close whatever screen is open.
    Close,
    /// Change one display setting.
    Set(ConfigChange),
    /// Restore the default display settings.
    Reset,
    /// List key actions and their bindings.
    Keys,
    /// Chat command line.
    Chat(String),
    /// Stop reading.
    Quit,
}

/// A single display setting edit, as the settings screen makes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigChange {
    /// HUD on or off.
    Enabled(bool),
    /// `Y: n` header on or off.
    Header(bool),
    /// Horizontal anchor.
    Position(HudPosition),
    /// Vertical anchor.
    Vertical(VerticalPosition),
    /// Icon or name rows.
    Mode(DisplayMode),
    /// Horizontal offset.
    OffsetX(i32),
    /// Vertical offset.
    OffsetY(i32),
    /// Row limit.
    MaxOres(u32),
}

impl ConfigChange {
    /// Parses `<key> <value>`.
    pub fn parse(key: &str, value: &str) -> Result<Self, CommandError> {
        let invalid = || CommandError::InvalidArgument(format!("{key} {value}"));
        let switch = || match value {
            "on" | "true" => Ok(true),
            "off" | "false" => Ok(false),
            _ => Err(invalid()),
        };
        let change = match key {
            "enabled" => Self::Enabled(switch()?),
            "header" => Self::Header(switch()?),
            "position" => Self::Position(match value {
                "left" => HudPosition::Left,
                "right" => HudPosition::Right,
                _ => return Err(invalid()),
            }),
            "vertical" => Self::Vertical(match value {
                "top" => VerticalPosition::Top,
                "center" => VerticalPosition::Center,
                "bottom" => VerticalPosition::Bottom,
                _ => return Err(invalid()),
            }),
            "mode" => Self::Mode(match value {
                "icon" => DisplayMode::Icon,
                "name" => DisplayMode::Name,
                _ => return Err(invalid()),
            }),
            "x" => Self::OffsetX(value.parse().map_err(|_| invalid())?),
            "y" => Self::OffsetY(value.parse().map_err(|_| invalid())?),
            "max" => Self::MaxOres(value.parse().map_err(|_| invalid())?),
            _ => return Err(CommandError::Unknown(format!("set {key}"))),
        };
        Ok(change)
    }

    /// Config file key this change touches.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Enabled(_) => "enabled",
            Self::Header(_) => "showHudHeader",
            Self::Position(_) => "hudPosition",
            Self::Vertical(_) => "verticalPosition",
            Self::Mode(_) => "displayMode",
            Self::OffsetX(_) => "overlayX",
            Self::OffsetY(_) => "overlayY",
            Self::MaxOres(_) => "maxVisibleOres",
        }
    }

    /// Writes the change into `config`.
    pub fn apply(self, config: &mut DisplayConfig) {
        match self {
            Self::Enabled(on) => config.enabled = on,
            Self::Header(on) => config.show_hud_header = on,
            Self::Position(position) => config.hud_position = position,
            Self::Vertical(position) => config.vertical_position = position,
            Self::Mode(mode) => config.display_mode = mode,
            Self::OffsetX(x) => config.overlay_x = x,
            Self::OffsetY(y) => config.overlay_y = y,
            Self::MaxOres(max) => config.max_visible_ores = max,
        }
    }
}

fn arg<'a>(parts: &mut impl Iterator<Item = &'a str>, name: &str) -> Result<&'a str, CommandError> {
    parts
        .next()
        .ok_or_else(|| CommandError::InvalidArgument(format!("missing {name}")))
}

fn parse_identity(raw: &str) -> WorldIdentity {
    match raw.strip_prefix("sp:") {
        Some(level) => WorldIdentity::singleplayer(level),
        None => WorldIdentity::server(raw),
    }
}

fn parse_ore(raw: &str) -> Result<Ore, CommandError> {
    Ore::from_id(raw).ok_or_else(|| CommandError::UnknownOre(raw.to_string()))
}

impl Instruction {
    /// Parses a script line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        if line.starts_with('/') {
            return Ok(Some(Self::Chat(line.to_string())));
        }

        let mut parts = line.split_whitespace();
        let head = arg(&mut parts, "instruction")?;
        let instruction = match head {
            "join" => {
                let rest: Vec<&str> = parts.collect();
                if rest.is_empty() {
                    return Err(CommandError::InvalidArgument("missing identity".into()));
                }
                Self::Join(parse_identity(&rest.join(" ")))
            },
            "leave" => Self::Leave,
            "frame" => {
                let raw_y = arg(&mut parts, "y")?;
                let y = raw_y
                    .parse()
                    .map_err(|_| CommandError::InvalidArgument(raw_y.to_string()))?;
                let dimension = Dimension::from_key(arg(&mut parts, "dimension")?);
                let biome = parts.next().map(BiomeId::parse);
                Self::Frame { y, dimension, biome }
            },
            "track" => Self::Track(parse_ore(arg(&mut parts, "ore")?)?, true),
            "untrack" => Self::Track(parse_ore(arg(&mut parts, "ore")?)?, false),
            "filter" => Self::Filter(arg(&mut parts, "filter")?.parse()?),
            "key" => match arg(&mut parts, "key")? {
                "open" => Self::Key(KeyAction::OpenSelector),
                "toggle" => Self::Key(KeyAction::ToggleHud),
                other => return Err(CommandError::InvalidArgument(other.to_string())),
            },
            "close" => Self::Close,
            "set" => {
                let key = arg(&mut parts, "setting")?;
                Self::Set(ConfigChange::parse(key, arg(&mut parts, "value")?)?)
            },
            "reset" => Self::Reset,
            "keys" => Self::Keys,
            "quit" | "exit" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(instruction))
    }
}

fn tier_tag(tier: ProbabilityTier) -> char {
    match tier {
        ProbabilityTier::Green => 'G',
        ProbabilityTier::Yellow => 'Y',
        ProbabilityTier::Red => 'R',
        ProbabilityTier::None => '-',
    }
}

/// Renders a HUD frame as text lines.
#[must_use]
pub fn describe_hud(hud: &HudFrame) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(header) = &hud.layout.header {
        lines.push(header.text.clone());
    }
    for row in &hud.layout.rows {
        let text = row.text.as_ref().map_or("", |span| span.text.as_str());
        let icon = row.icon.map(|slot| format!("<{}> ", slot.item)).unwrap_or_default();
        let line = format!("[{}] {icon}{text}", tier_tag(row.entry.tier));
        lines.push(line.trim_end().to_string());
    }
    if let Some(overflow) = &hud.layout.overflow {
        lines.push(overflow.text.clone());
    }
    lines
}

fn describe_outcome(outcome: Outcome) -> String {
    match outcome {
        Outcome::SelectorOpened => "selector opened".to_string(),
        Outcome::SelectorBlocked => "selector blocked by open screen".to_string(),
        Outcome::HudToggled(feedback) => feedback.text.to_string(),
    }
}

/// Executes `instruction`, returning output lines.
pub fn run(
    client: &mut OracleClient,
    instruction: Instruction,
    screen: ScreenSize,
) -> Vec<String> {
    match instruction {
        Instruction::Join(identity) => {
            let line = format!("joined {identity}");
            client.join_world(identity);
            vec![line]
        },
        Instruction::Leave => {
            client.disconnect();
            vec!["left world".to_string()]
        },
        Instruction::Frame { y, dimension, biome } => {
            let Some(dimension) = dimension else {
                warn!("Unknown dimension, frame skipped");
                return vec!["(frame skipped)".to_string()];
            };
            let frame = FrameState::new(y, biome, dimension);
            let mut lines = client
                .render(&frame, screen, &MonospaceMetrics)
                .map_or_else(|| vec!["(no hud)".to_string()], |hud| describe_hud(&hud));
            if let Some(model) = client.selector(&frame) {
                for row in &model.rows {
                    let mark = if row.tracked { 'x' } else { ' ' };
                    let dot = if row.shows_dot() { tier_tag(row.tier) } else { ' ' };
                    lines.push(format!("  [{mark}] {dot} {}", row.label));
                }
                let buttons: Vec<String> = model
                    .buttons
                    .iter()
                    .map(|b| if b.active { b.label.to_string() } else { format!("*{}*", b.label) })
                    .collect();
                lines.push(format!("  {}", buttons.join(" | ")));
            }
            lines
        },
        Instruction::Track(ore, tracked) => {
            client.set_ore_tracked(ore, tracked);
            vec![format!("{} {}", if tracked { "tracking" } else { "untracked" }, ore.display_name())]
        },
        Instruction::Filter(filter) => {
            client.set_filter(filter);
            vec![format!("filter {}", filter.label())]
        },
        Instruction::Key(action) => vec![describe_outcome(client.press_key(action))],
        Instruction::Close => {
            client.set_screen(None);
            vec!["screen closed".to_string()]
        },
        Instruction::Set(change) => {
            client.update_config(|config| change.apply(config));
            let value = serde_json::to_value(client.config())
                .ok()
                .and_then(|json| json.get(change.key()).cloned())
                .unwrap_or_default();
            vec![format!("{} = {value}", change.key())]
        },
        Instruction::Reset => {
            client.reset_config();
            vec!["settings reset".to_string()]
        },
        Instruction::Keys => KeyAction::ALL
            .iter()
            .map(|action| {
                let binding = action
                    .default_binding()
                    .map_or_else(|| "unbound".to_string(), |key| key.to_string());
                format!("{}: {binding}", action.translation_key())
            })
            .collect(),
        Instruction::Chat(line) => {
            // Typing the command opens chat first.
            if client.screen().is_none() {
                client.set_screen(Some(Screen::Other));
            }
            match client.run_chat_command(&line) {
                Ok(outcome) => vec![describe_outcome(outcome)],
                Err(e) => {
                    client.set_screen(None);
                    vec![format!("error: {e}")]
                },
            }
        },
        Instruction::Quit => Vec::new(),
    }
}
