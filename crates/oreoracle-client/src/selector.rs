//! Ore selector view model.
//!
//! The host draws the screen; this module decides what is on it.

use oreoracle_common::Dimension;
use oreoracle_core::{Classifier, DisplayFilter, FrameState, Ore, ProbabilityTier, TrackingState};

/// One selectable ore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorRow {
    /// The ore.
    pub ore: Ore,
    /// Display name with a dimension suffix for non-overworld ores.
    pub label: String,
    /// Checkbox state.
    pub tracked: bool,
    /// Tier at the player's position.
    pub tier: ProbabilityTier,
}

impl SelectorRow {
    /// Whether the tier dot is drawn.
    #[must_use]
    pub fn shows_dot(&self) -> bool {
        self.tier != ProbabilityTier::None
    }

    /// Dot color, when drawn.
    #[must_use]
    pub fn dot_color(&self) -> Option<u32> {
        self.shows_dot().then(|| self.tier.color())
    }
}

/// A filter button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterButton {
    /// Filter applied on click.
    pub filter: DisplayFilter,
    /// Button text.
    pub label: &'static str,
    /// Clickable; the button for the current filter is not.
    pub active: bool,
}

/// Filters offered as buttons.
pub const BUTTON_FILTERS: [DisplayFilter; 3] =
    [DisplayFilter::Green, DisplayFilter::Yellow, DisplayFilter::Red];

/// Selector contents for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorModel {
    /// Ore rows, current dimension first.
    pub rows: Vec<SelectorRow>,
    /// Filter buttons.
    pub buttons: [FilterButton; 3],
}

/// What clicking part of the selector does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorAction {
    /// Row click.
    ToggleOre(Ore),
    /// Filter button click.
    SetFilter(DisplayFilter),
}

/// Row label for `ore`.
#[must_use]
pub fn row_label(ore: Ore) -> String {
    match ore.dimension() {
        Dimension::Overworld => ore.display_name().to_string(),
        other => format!("{} ({})", ore.display_name(), other.short_tag()),
    }
}

/// Ores in display order: those of `current` first, then the rest.
#[must_use]
pub fn ordered_ores(current: Dimension) -> Vec<Ore> {
    let (mut here, elsewhere): (Vec<Ore>, Vec<Ore>) =
        Ore::ALL.into_iter().partition(|ore| ore.dimension() == current);
    here.extend(elsewhere);
    here
}

impl SelectorModel {
    /// Builds the selector for the player's position.
    #[must_use]
    pub fn build<C: Classifier>(
        classifier: &C,
        frame: &FrameState,
        tracking: &TrackingState,
    ) -> Self {
        let rows = ordered_ores(frame.dimension)
            .into_iter()
            .map(|ore| SelectorRow {
                ore,
                label: row_label(ore),
                tracked: tracking.is_tracked(ore),
                tier: classifier.tier(ore, frame.y, frame.biome.as_ref()),
            })
            .collect();

        let current = tracking.filter();
        let buttons = BUTTON_FILTERS.map(|filter| FilterButton {
            filter,
            label: filter.label(),
            active: filter != current,
        });

        Self { rows, buttons }
    }

    /// Action for clicking row `index`.
    #[must_use]
    pub fn row_action(&self, index: usize) -> Option<SelectorAction> {
        self.rows.get(index).map(|row| SelectorAction::ToggleOre(row.ore))
    }

    /// Action for clicking button `index`, if it is active.
    #[must_use]
    pub fn button_action(&self, index: usize) -> Option<SelectorAction> {
        self.buttons
            .get(index)
            .filter(|button| button.active)
            .map(|button| SelectorAction::SetFilter(button.filter))
    }
}
