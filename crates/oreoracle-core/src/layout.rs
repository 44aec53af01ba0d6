//! HUD layout.
//!
//! Turns the render list and display config into positioned boxes and text
//! spans in scaled screen pixels. Drawing them is left to the host.

use crate::display::{DisplayConfig, DisplayMode, HudPosition, VerticalPosition};
use crate::overlay::RenderEntry;

/// Inner padding around and between sections.
pub const PADDING: i32 = 4;
/// Row height in name mode (and for the header).
pub const LINE_HEIGHT_TEXT: i32 = 10;
/// Row height in icon mode.
pub const LINE_HEIGHT_ICON: i32 = 18;
/// Item icon size.
pub const ICON_SIZE: i32 = 16;
/// Tier indicator square size.
pub const INDICATOR_SIZE: i32 = 6;
/// Minimum box width in name mode.
pub const STANDARD_WIDTH: i32 = 90;
/// Glyph drawn next to ores at a peak.
pub const PEAK_INDICATOR: &str = "\u{2605}";

/// Translucent background.
pub const BG_OVERLAY: u32 = 0x9000_0000;
/// Primary text color.
pub const TEXT_PRIMARY: u32 = 0xFFFF_FFFF;
/// Muted text color for the overflow line.
pub const TEXT_MUTED: u32 = 0xFF66_6666;

// Gaps after the indicator square.
const ICON_GAP: i32 = 2;
const NAME_GAP: i32 = 4;

/// Font measurements supplied by the host.
pub trait TextMetrics {
    /// Width of `text` in scaled pixels.
    fn text_width(&self, text: &str) -> i32;

    /// Height of a line of text.
    fn font_height(&self) -> i32 {
        9
    }
}

/// Scaled screen dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in scaled pixels.
    pub width: i32,
    /// Height in scaled pixels.
    pub height: i32,
}

impl ScreenSize {
    /// Creates a screen size.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Filled rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
    /// ARGB fill.
    pub color: u32,
}

/// Text to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    /// Text content.
    pub text: String,
    /// Left edge, or center when `centered`.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// ARGB color.
    pub color: u32,
    /// Whether `x` is the horizontal center.
    pub centered: bool,
}

/// Item icon slot (icon mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSlot {
    /// Item to draw.
    pub item: &'static str,
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
}

/// One positioned ore row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudRow {
    /// Source entry.
    pub entry: RenderEntry,
    /// Tier color square.
    pub indicator: Rect,
    /// Item icon, in icon mode.
    pub icon: Option<IconSlot>,
    /// Ore name in name mode, or the peak star in icon mode.
    pub text: Option<TextSpan>,
}

/// Fully positioned HUD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudLayout {
    /// Background box.
    pub background: Rect,
    /// `Y: n` header when enabled.
    pub header: Option<TextSpan>,
    /// Visible ore rows.
    pub rows: Vec<HudRow>,
    /// `+N more` line when rows were cut off.
    pub overflow: Option<TextSpan>,
}

/// Label for a name-mode row.
#[must_use]
pub fn row_label(entry: &RenderEntry) -> String {
    if entry.at_peak {
        format!("{} {PEAK_INDICATOR}", entry.display_name)
    } else {
        entry.display_name.to_string()
    }
}

const fn line_height(mode: DisplayMode) -> i32 {
    match mode {
        DisplayMode::Icon => LINE_HEIGHT_ICON,
        DisplayMode::Name => LINE_HEIGHT_TEXT,
    }
}

fn box_width(entries: &[RenderEntry], mode: DisplayMode, metrics: &impl TextMetrics) -> i32 {
    match mode {
        DisplayMode::Icon => {
            let star = metrics.text_width(PEAK_INDICATOR) + 1;
            PADDING + INDICATOR_SIZE + ICON_GAP + ICON_SIZE + star + PADDING
        },
        DisplayMode::Name => {
            let widest = entries
                .iter()
                .map(|entry| metrics.text_width(&row_label(entry)))
                .max()
                .unwrap_or(0);
            STANDARD_WIDTH.max(PADDING + INDICATOR_SIZE + NAME_GAP + widest + PADDING)
        },
    }
}

fn box_height(total: usize, config: &DisplayConfig) -> i32 {
    let limit = config.max_visible_ores as usize;
    let mut lines = total.min(limit) as i32;
    if total > limit {
        lines += 1;
    }
    let mut height = PADDING + lines * line_height(config.display_mode) + PADDING;
    if config.show_hud_header {
        height += LINE_HEIGHT_TEXT + PADDING;
    }
    height
}

/// Left edge of the box.
///
/// Right-anchored boxes use the offset's magnitude from the right edge; a
/// negative offset on a left-anchored box also counts from the right.
#[must_use]
pub fn anchor_x(config: &DisplayConfig, screen_width: i32, width: i32) -> i32 {
    let offset = config.overlay_x;
    match config.hud_position {
        HudPosition::Right => screen_width
            .saturating_sub(width)
            .saturating_sub(offset.saturating_abs()),
        HudPosition::Left if offset < 0 => screen_width.saturating_add(offset).saturating_sub(width),
        HudPosition::Left => offset,
    }
}

/// Top edge of the box.
#[must_use]
pub fn anchor_y(config: &DisplayConfig, screen_height: i32, height: i32) -> i32 {
    let offset = config.overlay_y;
    match config.vertical_position {
        VerticalPosition::Top => offset,
        VerticalPosition::Center => ((screen_height - height) / 2).saturating_add(offset),
        VerticalPosition::Bottom => screen_height
            .saturating_sub(height)
            .saturating_sub(offset.saturating_abs()),
    }
}

fn layout_row(
    entry: RenderEntry,
    x: i32,
    y: i32,
    mode: DisplayMode,
    metrics: &impl TextMetrics,
) -> HudRow {
    let line = line_height(mode);
    let indicator = Rect {
        x,
        y: y + (line - INDICATOR_SIZE) / 2,
        width: INDICATOR_SIZE,
        height: INDICATOR_SIZE,
        color: entry.tier_color,
    };

    match mode {
        DisplayMode::Icon => {
            let icon_x = x + INDICATOR_SIZE + ICON_GAP;
            let text = entry.at_peak.then(|| TextSpan {
                text: PEAK_INDICATOR.to_string(),
                x: icon_x + ICON_SIZE + 1,
                y: y + (line - metrics.font_height()) / 2,
                color: TEXT_PRIMARY,
                centered: false,
            });
            HudRow {
                entry,
                indicator,
                icon: Some(IconSlot {
                    item: entry.icon_item,
                    x: icon_x,
                    y: y + (line - ICON_SIZE) / 2,
                }),
                text,
            }
        },
        DisplayMode::Name => HudRow {
            entry,
            indicator,
            icon: None,
            text: Some(TextSpan {
                text: row_label(&entry),
                x: x + INDICATOR_SIZE + NAME_GAP,
                y,
                color: TEXT_PRIMARY,
                centered: false,
            }),
        },
    }
}

/// Positions the HUD for `entries`, or `None` when there is nothing to show.
#[must_use]
pub fn layout(
    player_y: i32,
    entries: &[RenderEntry],
    config: &DisplayConfig,
    screen: ScreenSize,
    metrics: &impl TextMetrics,
) -> Option<HudLayout> {
    if entries.is_empty() {
        return None;
    }

    let mode = config.display_mode;
    let width = box_width(entries, mode, metrics);
    let height = box_height(entries.len(), config);
    let x = anchor_x(config, screen.width, width);
    let y = anchor_y(config, screen.height, height);
    let center_x = x + width / 2;

    let mut cursor = y + PADDING;

    let header = config.show_hud_header.then(|| {
        let span = TextSpan {
            text: format!("Y: {player_y}"),
            x: center_x,
            y: cursor,
            color: TEXT_PRIMARY,
            centered: true,
        };
        cursor += LINE_HEIGHT_TEXT + PADDING;
        span
    });

    let visible = entries.len().min(config.max_visible_ores as usize);
    let mut rows = Vec::with_capacity(visible);
    for entry in &entries[..visible] {
        rows.push(layout_row(*entry, x + PADDING, cursor, mode, metrics));
        cursor += line_height(mode);
    }

    let hidden = entries.len() - visible;
    let overflow = (hidden > 0).then(|| TextSpan {
        text: format!("+{hidden} more"),
        x: center_x,
        y: cursor,
        color: TEXT_MUTED,
        centered: true,
    });

    Some(HudLayout {
        background: Rect {
            x,
            y,
            width,
            height,
            color: BG_OVERLAY,
        },
        header,
        rows,
        overflow,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::OreReading;
    use crate::ore::Ore;
    use crate::tier::ProbabilityTier;

    /// Six pixels per character, like the vanilla font's average.
    struct FixedWidth;

    impl TextMetrics for FixedWidth {
        fn text_width(&self, text: &str) -> i32 {
            text.chars().count() as i32 * 6
        }
    }

    fn entry(ore: Ore, tier: ProbabilityTier, at_peak: bool) -> RenderEntry {
        RenderEntry::from(OreReading { ore, tier, at_peak })
    }

    fn entries(count: usize) -> Vec<RenderEntry> {
        Ore::ALL
            .into_iter()
            .take(count)
            .map(|ore| entry(ore, ProbabilityTier::Green, false))
            .collect()
    }

    const SCREEN: ScreenSize = ScreenSize::new(400, 300);

    #[test]
    fn test_empty_list_has_no_layout() {
        let config = DisplayConfig::default();
        assert!(layout(0, &[], &config, SCREEN, &FixedWidth).is_none());
    }

    #[test]
    fn test_name_mode_defaults() {
        let config = DisplayConfig::default();
        let hud = layout(-59, &entries(2), &config, SCREEN, &FixedWidth).expect("layout");

        assert_eq!(hud.background.x, 4);
        assert_eq!(hud.background.y, 4);
        assert_eq!(hud.background.width, STANDARD_WIDTH);
        // padding + header + padding + 2 rows + padding
        assert_eq!(hud.background.height, 4 + 10 + 4 + 20 + 4);

        let header = hud.header.expect("header");
        assert_eq!(header.text, "Y: -59");
        assert!(header.centered);

        assert_eq!(hud.rows.len(), 2);
        assert_eq!(hud.rows[0].text.as_ref().map(|t| t.y), Some(4 + 4 + 14));
        assert_eq!(hud.rows[1].indicator.y, 4 + 4 + 14 + 10 + 2);
        assert!(hud.overflow.is_none());
    }

    #[test]
    fn test_overflow_line() {
        let config = DisplayConfig {
            max_visible_ores: 3,
            show_hud_header: false,
            ..DisplayConfig::default()
        };
        let hud = layout(0, &entries(5), &config, SCREEN, &FixedWidth).expect("layout");

        assert_eq!(hud.rows.len(), 3);
        let overflow = hud.overflow.expect("overflow");
        assert_eq!(overflow.text, "+2 more");
        assert_eq!(overflow.color, TEXT_MUTED);
        assert_eq!(hud.background.height, 4 + 4 * 10 + 4);
    }

    #[test]
    fn test_wide_names_grow_the_box() {
        let config = DisplayConfig::default();
        let list = vec![entry(Ore::AncientDebris, ProbabilityTier::Green, true)];
        let hud = layout(15, &list, &config, SCREEN, &FixedWidth).expect("layout");

        let label = "Ancient Debris \u{2605}";
        assert_eq!(hud.rows[0].text.as_ref().map(|t| t.text.as_str()), Some(label));
        let expected = PADDING + INDICATOR_SIZE + 4 + FixedWidth.text_width(label) + PADDING;
        assert_eq!(hud.background.width, expected);
    }

    #[test]
    fn test_icon_mode_row() {
        let config = DisplayConfig {
            display_mode: DisplayMode::Icon,
            show_hud_header: false,
            ..DisplayConfig::default()
        };
        let list = vec![
            entry(Ore::Diamond, ProbabilityTier::Green, true),
            entry(Ore::Iron, ProbabilityTier::Yellow, false),
        ];
        let hud = layout(-59, &list, &config, SCREEN, &FixedWidth).expect("layout");

        assert_eq!(hud.background.width, 4 + 6 + 2 + 16 + 7 + 4);
        assert_eq!(hud.background.height, 4 + 2 * 18 + 4);

        let diamond = &hud.rows[0];
        let icon = diamond.icon.expect("icon");
        assert_eq!(icon.item, "minecraft:diamond");
        assert_eq!((icon.x, icon.y), (4 + 4 + 8, 4 + 4 + 1));
        assert!(diamond.text.is_some());
        assert!(hud.rows[1].text.is_none());
        assert_eq!(hud.rows[1].indicator.color, ProbabilityTier::Yellow.color());
    }

    #[test]
    fn test_anchors() {
        let mut config = DisplayConfig::default();

        config.hud_position = HudPosition::Right;
        config.overlay_x = -10;
        assert_eq!(anchor_x(&config, 400, 90), 300);

        config.hud_position = HudPosition::Left;
        assert_eq!(anchor_x(&config, 400, 90), 300);
        config.overlay_x = 10;
        assert_eq!(anchor_x(&config, 400, 90), 10);

        config.overlay_y = 6;
        config.vertical_position = VerticalPosition::Center;
        assert_eq!(anchor_y(&config, 300, 100), 106);
        config.vertical_position = VerticalPosition::Bottom;
        assert_eq!(anchor_y(&config, 300, 100), 194);
        config.vertical_position = VerticalPosition::Top;
        assert_eq!(anchor_y(&config, 300, 100), 6);
    }

    #[test]
    fn test_anchors_extreme_offsets() {
        let mut config = DisplayConfig {
            hud_position: HudPosition::Right,
            overlay_x: i32::MIN,
            overlay_y: i32::MIN,
            ..DisplayConfig::default()
        };
        assert_eq!(anchor_x(&config, 427, 90), 337 - i32::MAX);
        config.hud_position = HudPosition::Left;
        assert_eq!(anchor_x(&config, 427, 90), i32::MIN + 337);

        config.vertical_position = VerticalPosition::Bottom;
        assert_eq!(anchor_y(&config, 300, 100), 200 - i32::MAX);
        config.vertical_position = VerticalPosition::Center;
        config.overlay_y = i32::MAX;
        assert_eq!(anchor_y(&config, 300, 100), i32::MAX);
    }
}
