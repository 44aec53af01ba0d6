//! Process-wide client state.
//!
//! [`OracleClient`] owns the display config, the per-world tracking store
//! and the overlay cache. The host loop holds it by `&mut` and feeds it
//! frames, commands and key presses.

use crate::commands::{self, Command, Feedback, KeyAction};
use crate::config::ConfigStore;
use crate::paths::StoragePaths;
use crate::selector::{SelectorAction, SelectorModel};
use crate::tracking_store::TrackingStore;
use oreoracle_common::{CommandError, OracleResult, WorldIdentity};
use oreoracle_core::distribution;
use oreoracle_core::layout::{self, HudLayout, ScreenSize, TextMetrics};
use oreoracle_core::{
    DisplayConfig, DisplayFilter, FrameState, Ore, OreOverlay, RenderEntry, TrackingState,
};
use tracing::{error, info};

/// Screen the host currently has open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The ore selector.
    Selector,
    /// Chat, inventory, pause menu or any other screen.
    Other,
}

/// HUD output for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudFrame {
    /// Entries in display order, before the row limit.
    pub entries: Vec<RenderEntry>,
    /// Positioned HUD.
    pub layout: HudLayout,
}

/// Result of dispatching a [`Command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The selector is now open.
    SelectorOpened,
    /// Another screen is open, so the selector was not.
    SelectorBlocked,
    /// The HUD was toggled.
    HudToggled(Feedback),
}

/// Client state.
#[derive(Debug)]
pub struct OracleClient {
    paths: StoragePaths,
    config: ConfigStore,
    tracking: TrackingStore,
    overlay: OreOverlay,
    screen: Option<Screen>,
}

impl OracleClient {
    /// Checks the distribution tables and loads (or creates) the config.
    pub fn init(paths: StoragePaths) -> OracleResult<Self> {
        distribution::validate_tables()?;
        let config = ConfigStore::open(paths.config_file());
        let tracking = TrackingStore::new(paths.data_dir());
        info!("Ore Oracle ready, config in {}", paths.config_dir().display());
        Ok(Self {
            paths,
            config,
            tracking,
            overlay: OreOverlay::new(),
            screen: None,
        })
    }

    /// Storage locations.
    #[must_use]
    pub fn paths(&self) -> &StoragePaths {
        &self.paths
    }

    /// Current display config.
    #[must_use]
    pub fn config(&self) -> &DisplayConfig {
        self.config.config()
    }

    /// Current tracking state.
    #[must_use]
    pub fn tracking(&self) -> &TrackingState {
        self.tracking.state()
    }

    /// Current world, if joined.
    #[must_use]
    pub fn world(&self) -> Option<&WorldIdentity> {
        self.tracking.identity()
    }

    /// Overlay cache, for inspection.
    #[must_use]
    pub fn overlay(&self) -> &OreOverlay {
        &self.overlay
    }

    /// Loads tracking for `identity`.
    pub fn join_world(&mut self, identity: WorldIdentity) {
        info!("Joining {identity}");
        self.tracking.join(identity);
        self.overlay.invalidate();
    }

    /// Drops per-world state.
    pub fn disconnect(&mut self) {
        self.tracking.clear();
        self.overlay.invalidate();
        self.screen = None;
    }

    /// Computes the HUD for `frame`.
    ///
    /// `None` when disabled, when any screen is open, or when nothing
    /// passes the filter.
    pub fn render(
        &mut self,
        frame: &FrameState,
        screen: ScreenSize,
        metrics: &impl TextMetrics,
    ) -> Option<HudFrame> {
        let config = self.config.config();
        if !config.enabled || self.screen.is_some() {
            return None;
        }
        let entries = self.overlay.advance(frame, self.tracking.state());
        let layout = layout::layout(frame.y, entries, config, screen, metrics)?;
        Some(HudFrame {
            entries: entries.to_vec(),
            layout,
        })
    }

    /// Flips the HUD enabled flag and saves.
    pub fn toggle_hud(&mut self) -> Feedback {
        let enabled = self.config.update(DisplayConfig::toggle_enabled);
        self.overlay.invalidate();
        info!("HUD {}", if enabled { "enabled" } else { "disabled" });
        Feedback::hud(enabled)
    }

    /// Tracks or untracks `ore` and saves.
    pub fn set_ore_tracked(&mut self, ore: Ore, tracked: bool) -> bool {
        let changed = self.tracking.set_tracked(ore, tracked);
        self.overlay.invalidate();
        changed
    }

    /// Flips tracking for `ore` and saves, returning the new state.
    pub fn toggle_ore(&mut self, ore: Ore) -> bool {
        let tracked = self.tracking.toggle(ore);
        self.overlay.invalidate();
        tracked
    }

    /// Replaces the display filter and saves.
    pub fn set_filter(&mut self, filter: DisplayFilter) {
        self.tracking.set_filter(filter);
        self.overlay.invalidate();
    }

    /// Applies `change` to the display config and saves.
    pub fn update_config<R>(&mut self, change: impl FnOnce(&mut DisplayConfig) -> R) -> R {
        let result = self.config.update(change);
        self.overlay.invalidate();
        result
    }

    /// Restores the default display config and saves.
    pub fn reset_config(&mut self) {
        self.config.reset_to_defaults();
        self.overlay.invalidate();
    }

    /// Open screen, if any.
    #[must_use]
    pub fn screen(&self) -> Option<Screen> {
        self.screen
    }

    /// Records which screen the host has open.
    pub fn set_screen(&mut self, screen: Option<Screen>) {
        self.screen = screen;
    }

    /// Runs a command.
    pub fn execute(&mut self, command: Command) -> Outcome {
        match command {
            Command::OpenSelector => {
                if self.screen.is_some() {
                    Outcome::SelectorBlocked
                } else {
                    self.screen = Some(Screen::Selector);
                    Outcome::SelectorOpened
                }
            },
            Command::ToggleHud => Outcome::HudToggled(self.toggle_hud()),
        }
    }

    /// Parses and runs a chat command. Chat closes on submit.
    pub fn run_chat_command(&mut self, line: &str) -> Result<Outcome, CommandError> {
        let command = commands::parse(line)?;
        if self.screen == Some(Screen::Other) {
            self.screen = None;
        }
        Ok(self.execute(command))
    }

    /// Handles a bound key press.
    pub fn press_key(&mut self, action: KeyAction) -> Outcome {
        self.execute(action.command())
    }

    /// Selector contents for `frame`, when the selector is open.
    #[must_use]
    pub fn selector(&self, frame: &FrameState) -> Option<SelectorModel> {
        (self.screen == Some(Screen::Selector))
            .then(|| SelectorModel::build(self.overlay.classifier(), frame, self.tracking.state()))
    }

    /// Applies a selector click.
    pub fn apply_selector(&mut self, action: SelectorAction) {
        match action {
            SelectorAction::ToggleOre(ore) => {
                self.toggle_ore(ore);
            },
            SelectorAction::SetFilter(filter) => self.set_filter(filter),
        }
    }

    /// Flushes config and tracking.
    pub fn shutdown(&mut self) {
        if let Err(e) = self.config.save() {
            error!("Failed to save display config on shutdown: {e}");
        }
        if let Err(e) = self.tracking.save() {
            error!("Failed to save tracking on shutdown: {e}");
        }
        info!("Ore Oracle shut down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oreoracle_common::{BiomeId, Dimension};
    use tempfile::TempDir;

    struct FixedWidth;

    impl TextMetrics for FixedWidth {
        fn text_width(&self, text: &str) -> i32 {
            text.chars().count() as i32 * 6
        }
    }

    const SCREEN: ScreenSize = ScreenSize::new(427, 240);

    fn client(dir: &TempDir) -> OracleClient {
        OracleClient::init(StoragePaths::new(dir.path())).expect("init")
    }

    fn plains(y: i32) -> FrameState {
        FrameState::new(y, Some(BiomeId::vanilla("plains")), Dimension::Overworld)
    }

    #[test]
    fn test_init_writes_default_config() {
        let dir = TempDir::new().expect("create temp dir");
        let client = client(&dir);
        assert_eq!(client.config(), &DisplayConfig::default());
        assert!(client.paths().config_file().exists());
    }

    #[test]
    fn test_render_diamond_level() {
        let dir = TempDir::new().expect("create temp dir");
        let mut client = client(&dir);

        let hud = client.render(&plains(-59), SCREEN, &FixedWidth).expect("hud");
        assert_eq!(hud.entries[0].ore, Ore::Diamond);
        assert_eq!(hud.layout.rows.len(), hud.entries.len());
        assert_eq!(
            hud.layout.header.as_ref().map(|h| h.text.as_str()),
            Some("Y: -59")
        );
    }

    #[test]
    fn test_render_disabled() {
        let dir = TempDir::new().expect("create temp dir");
        let mut client = client(&dir);
        client.toggle_hud();
        assert!(client.render(&plains(-59), SCREEN, &FixedWidth).is_none());
    }

    #[test]
    fn test_render_nothing_to_show() {
        let dir = TempDir::new().expect("create temp dir");
        let mut client = client(&dir);
        client.set_filter(DisplayFilter::TrackedOnly);
        assert!(client.render(&plains(-59), SCREEN, &FixedWidth).is_none());
    }

    #[test]
    fn test_mutation_invalidates_cache() {
        let dir = TempDir::new().expect("create temp dir");
        let mut client = client(&dir);
        let frame = plains(-59);

        client.render(&frame, SCREEN, &FixedWidth);
        client.render(&frame, SCREEN, &FixedWidth);
        assert_eq!(client.overlay().recomputations(), 1);

        client.set_filter(DisplayFilter::Green);
        let hud = client.render(&frame, SCREEN, &FixedWidth).expect("hud");
        assert_eq!(client.overlay().recomputations(), 2);
        assert!(hud.entries.iter().all(|e| e.tier == oreoracle_core::ProbabilityTier::Green));
    }

    #[test]
    fn test_tracking_follows_world() {
        let dir = TempDir::new().expect("create temp dir");
        let mut client = client(&dir);
        let server = WorldIdentity::server("mc.example.org");

        client.join_world(server.clone());
        client.toggle_ore(Ore::Emerald);
        client.disconnect();
        assert!(!client.tracking().is_tracked(Ore::Emerald));

        let mut restarted = OracleClient::init(StoragePaths::new(dir.path())).expect("init");
        restarted.join_world(server);
        assert!(restarted.tracking().is_tracked(Ore::Emerald));
    }

    #[test]
    fn test_toggle_hud_persists() {
        let dir = TempDir::new().expect("create temp dir");
        let mut client = client(&dir);
        let feedback = client.toggle_hud();
        assert_eq!(feedback.key, commands::HUD_DISABLED_KEY);

        let restarted = OracleClient::init(StoragePaths::new(dir.path())).expect("init");
        assert!(!restarted.config().enabled);
    }

    #[test]
    fn test_update_config_row_limit() {
        let dir = TempDir::new().expect("create temp dir");
        let mut client = client(&dir);
        client.update_config(|config| config.max_visible_ores = 3);

        let hud = client.render(&plains(-59), SCREEN, &FixedWidth).expect("hud");
        assert_eq!(hud.layout.rows.len(), 3);
        assert!(hud.layout.overflow.is_some());
    }

    #[test]
    fn test_key_opens_selector_only_without_screen() {
        let dir = TempDir::new().expect("create temp dir");
        let mut client = client(&dir);

        client.set_screen(Some(Screen::Other));
        assert_eq!(client.press_key(KeyAction::OpenSelector), Outcome::SelectorBlocked);

        client.set_screen(None);
        assert_eq!(client.press_key(KeyAction::OpenSelector), Outcome::SelectorOpened);
        assert!(client.selector(&plains(0)).is_some());
    }

    #[test]
    fn test_no_hud_while_screen_open() {
        let dir = TempDir::new().expect("create temp dir");
        let mut client = client(&dir);
        let frame = plains(-59);

        client.execute(Command::OpenSelector);
        assert!(client.render(&frame, SCREEN, &FixedWidth).is_none());

        client.set_screen(Some(Screen::Other));
        assert!(client.render(&frame, SCREEN, &FixedWidth).is_none());

        client.set_screen(None);
        assert!(client.render(&frame, SCREEN, &FixedWidth).is_some());
    }

    #[test]
    fn test_reset_config() {
        let dir = TempDir::new().expect("create temp dir");
        let mut client = client(&dir);
        client.update_config(|config| config.max_visible_ores = 4);

        client.reset_config();
        assert_eq!(client.config(), &DisplayConfig::default());
        let restarted = OracleClient::init(StoragePaths::new(dir.path())).expect("init");
        assert_eq!(restarted.config(), &DisplayConfig::default());
    }

    #[test]
    fn test_chat_command_opens_selector() {
        let dir = TempDir::new().expect("create temp dir");
        let mut client = client(&dir);
        client.set_screen(Some(Screen::Other));

        assert_eq!(client.run_chat_command("/oo"), Ok(Outcome::SelectorOpened));
        assert_eq!(client.screen(), Some(Screen::Selector));
        assert!(client.run_chat_command("/oo what").is_err());
    }

    #[test]
    fn test_selector_clicks() {
        let dir = TempDir::new().expect("create temp dir");
        let mut client = client(&dir);
        client.execute(Command::OpenSelector);

        let model = client.selector(&plains(0)).expect("open");
        let action = model.row_action(0).expect("row");
        client.apply_selector(action);
        assert!(client.tracking().is_tracked(Ore::Coal));

        client.apply_selector(SelectorAction::SetFilter(DisplayFilter::Yellow));
        assert_eq!(client.tracking().filter(), DisplayFilter::Yellow);
    }

    #[test]
    fn test_shutdown_flushes() {
        let dir = TempDir::new().expect("create temp dir");
        let mut client = client(&dir);
        client.join_world(WorldIdentity::singleplayer("Test"));
        client.shutdown();
        assert!(dir.path().join("ore-oracle-data").join("singleplayer_test.json").exists());
    }
}
