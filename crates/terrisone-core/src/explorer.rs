//! The region explorer: selection state bound to its maps.

use crate::category::CategoryKey;
use crate::config::ExplorerConfig;
use crate::error::MapResult;
use crate::map::{MapAdapter, MapEvent, MapTarget, MapWidget, MountStatus};
use crate::region::RegionCatalog;
use crate::selection::{MapEffect, Phase, SelectionState, Transition};

/// One explorer view. Owns its selection and map handles exclusively.
pub struct RegionExplorer<W: MapWidget> {
    catalog: RegionCatalog,
    state: SelectionState,
    maps: MapAdapter<W>,
}

impl<W: MapWidget> RegionExplorer<W> {
    /// Creates an explorer over the built-in Peru catalog.
    pub fn new(widget: W, config: ExplorerConfig) -> Self {
        Self::with_catalog(widget, config, RegionCatalog::peru().clone())
    }

    pub fn with_catalog(widget: W, config: ExplorerConfig, catalog: RegionCatalog) -> Self {
        Self {
            catalog,
            state: SelectionState::new(),
            maps: MapAdapter::new(widget, config),
        }
    }

    pub fn catalog(&self) -> &RegionCatalog {
        &self.catalog
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn maps(&self) -> &MapAdapter<W> {
        &self.maps
    }

    pub fn maps_mut(&mut self) -> &mut MapAdapter<W> {
        &mut self.maps
    }

    pub fn config(&self) -> &ExplorerConfig {
        self.maps.config()
    }

    /// Mounts the overview map. Called when the view mounts.
    pub fn mount(&mut self) -> MapResult<()> {
        let config = self.maps.config();
        let container = config.primary_container.clone();
        let viewport = config.primary_viewport;
        self.maps.mount_primary(&container, viewport, &self.catalog)
    }

    /// Tears down both maps. Called when the view unmounts.
    pub fn unmount(&mut self) {
        self.maps.unmount_all();
    }

    pub fn select_region(&mut self, name: &str) -> Transition {
        let transition = self.state.select_region(&self.catalog, name);
        self.apply(&transition);
        transition
    }

    pub fn open_category(&mut self, key: CategoryKey) -> Transition {
        let transition = self.state.open_category(key);
        self.apply(&transition);
        transition
    }

    pub fn close_category(&mut self) -> Transition {
        let transition = self.state.close_category();
        self.apply(&transition);
        transition
    }

    pub fn close_panel(&mut self) -> Transition {
        let transition = self.state.close_panel();
        self.apply(&transition);
        transition
    }

    /// Dispatches a click reported by the map widget.
    pub fn handle_event(&mut self, event: &MapEvent) -> Transition {
        match event {
            MapEvent::MarkerClicked { region } => self.select_region(region),
            MapEvent::BackgroundClicked => self.close_panel(),
        }
    }

    /// Render-layer signal that a map container now exists.
    pub fn container_mounted(&mut self, container_id: &str) -> MountStatus {
        self.maps.container_mounted(container_id)
    }

    pub fn poll_pending(&mut self) -> MountStatus {
        self.maps.poll_pending()
    }

    /// Generation of the pending detail mount, if one is waiting.
    pub fn pending_generation(&self) -> Option<u64> {
        self.maps.pending().map(|p| p.generation)
    }

    /// Polls the pending mount only if it is still the one scheduled as `generation`.
    pub fn poll_pending_mount(&mut self, generation: u64) -> MountStatus {
        self.maps.poll_pending_mount(generation)
    }

    fn apply(&mut self, transition: &Transition) {
        for effect in transition.effects() {
            match effect {
                MapEffect::FocusRegion { center } => {
                    let zoom = self.maps.config().region_zoom;
                    self.maps.recenter(MapTarget::Primary, *center, zoom);
                }
                MapEffect::DestroySecondary => self.maps.unmount_secondary(),
                MapEffect::ScheduleSecondary { region } => {
                    let container = self.maps.config().detail_container.clone();
                    self.maps.schedule_secondary(&container, region.clone());
                }
            }
        }
    }
}

impl<W: MapWidget> Drop for RegionExplorer<W> {
    fn drop(&mut self) {
        self.maps.unmount_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::HeadlessMap;

    fn explorer() -> RegionExplorer<HeadlessMap> {
        let mut widget = HeadlessMap::new();
        widget.add_container("map");
        let mut explorer = RegionExplorer::new(widget, ExplorerConfig::default());
        explorer.mount().unwrap();
        explorer
    }

    #[test]
    fn test_marker_click_selects_region() {
        let mut explorer = explorer();
        explorer.handle_event(&MapEvent::MarkerClicked {
            region: "Puno".to_string(),
        });

        assert_eq!(explorer.phase(), Phase::RegionFocused);
        let view = explorer.maps().widget().view_of("map").unwrap();
        assert_eq!(view.zoom, 7);
        assert_eq!(view.center.lat, -15.8402);
    }

    #[test]
    fn test_background_click_closes_panel() {
        let mut explorer = explorer();
        explorer.select_region("Lima");
        explorer.open_category(CategoryKey::Air);
        explorer.maps_mut().widget_mut().add_container("department-map");
        explorer.container_mounted("department-map");

        explorer.handle_event(&MapEvent::BackgroundClicked);
        assert_eq!(explorer.phase(), Phase::Idle);
        assert!(!explorer.maps().has_secondary());
    }

    #[test]
    fn test_unmount_removes_everything() {
        let mut explorer = explorer();
        explorer.unmount();
        assert_eq!(explorer.maps().widget().live_maps(), 0);
        explorer.unmount();
    }
}
