//! Selection state machine for the region explorer.
//!
//! [`SelectionState`] is changed only through four transitions. Each one
//! returns the [`MapEffect`]s the caller must apply to the map adapter, so
//! the state itself never touches a map widget.

use serde::{Deserialize, Serialize};

use crate::category::{CategoryKey, CategoryRegistry, CategoryReport};
use crate::region::{Coordinates, Region, RegionCatalog};

/// Which panel is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No region selected
    Idle,
    /// Region selected, no category open
    RegionFocused,
    /// Region selected and a category panel open
    CategoryFocused,
}

/// A map operation requested by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum MapEffect {
    /// Pan/zoom the overview map to a region
    FocusRegion { center: Coordinates },
    /// Tear down the detail map and cancel any pending mount
    DestroySecondary,
    /// Mount a detail map for a region once its container exists
    ScheduleSecondary { region: Region },
}

/// Outcome of a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// State changed; apply the effects in order
    Applied(Vec<MapEffect>),
    /// Transition did not apply in the current state
    Ignored,
}

impl Transition {
    pub fn effects(&self) -> &[MapEffect] {
        match self {
            Transition::Applied(effects) => effects,
            Transition::Ignored => &[],
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied(_))
    }
}

/// Current selection of one explorer view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    pub selected_region: Option<Region>,
    pub active_category: Option<CategoryKey>,
    pub category_report: Option<CategoryReport>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        match (&self.selected_region, &self.active_category) {
            (None, _) => Phase::Idle,
            (Some(_), None) => Phase::RegionFocused,
            (Some(_), Some(_)) => Phase::CategoryFocused,
        }
    }

    /// Focuses a region by name. Unknown names are ignored.
    pub fn select_region(&mut self, catalog: &RegionCatalog, name: &str) -> Transition {
        let Some(region) = catalog.get(name) else {
            tracing::debug!(
                region = name,
                known = ?catalog.names(),
                "Ignoring selection of unknown region"
            );
            return Transition::Ignored;
        };

        let mut effects = Vec::with_capacity(2);
        if self.active_category.take().is_some() {
            effects.push(MapEffect::DestroySecondary);
        }
        self.category_report = None;
        self.selected_region = Some(region.clone());
        effects.push(MapEffect::FocusRegion {
            center: region.coordinates,
        });

        tracing::debug!(region = name, "Region selected");
        Transition::Applied(effects)
    }

    /// Opens a category for the selected region.
    pub fn open_category(&mut self, key: CategoryKey) -> Transition {
        let Some(region) = &self.selected_region else {
            tracing::debug!(category = %key, "Ignoring category with no region selected");
            return Transition::Ignored;
        };
        if self.active_category == Some(key) {
            return Transition::Ignored;
        }

        let mut effects = Vec::with_capacity(2);
        if self.active_category.is_some() {
            effects.push(MapEffect::DestroySecondary);
        }
        self.category_report = Some(CategoryRegistry::report(key, region));
        effects.push(MapEffect::ScheduleSecondary {
            region: region.clone(),
        });
        self.active_category = Some(key);

        tracing::debug!(region = %region.name, category = %key, "Category opened");
        Transition::Applied(effects)
    }

    /// Closes the category panel, keeping the region.
    pub fn close_category(&mut self) -> Transition {
        if self.active_category.take().is_none() {
            return Transition::Ignored;
        }
        self.category_report = None;
        Transition::Applied(vec![MapEffect::DestroySecondary])
    }

    /// Clears the whole selection.
    pub fn close_panel(&mut self) -> Transition {
        let had_category = self.active_category.is_some();
        *self = Self::default();

        if had_category {
            Transition::Applied(vec![MapEffect::DestroySecondary])
        } else {
            Transition::Applied(Vec::new())
        }
    }

    /// Returns true if every selection invariant holds.
    pub fn is_consistent(&self) -> bool {
        let category_needs_region = self.active_category.is_none() || self.selected_region.is_some();
        let report_matches_category =
            self.active_category.is_some() == self.category_report.is_some();
        category_needs_region && report_matches_category
    }
}
