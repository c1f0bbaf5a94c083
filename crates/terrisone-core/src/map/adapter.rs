//! Lifecycle of the overview and detail maps.
//!
//! The detail map container only exists after the panel renders, so its
//! mount is recorded as pending. The host either signals the container with
//! [`MapAdapter::container_mounted`] or drives [`MapAdapter::poll_pending`]
//! through [`retry_pending_mount`]. After `max_attempts` failed polls the
//! mount is dropped.
//!
//! Every scheduled mount gets a fresh generation. A retry loop polls with
//! [`MapAdapter::poll_pending_mount`] for the generation it was started for,
//! so a loop left over from an earlier category stops at its next poll and
//! does not spend attempts of the newer mount.

use std::future::Future;
use std::time::Duration;

use crate::config::{ExplorerConfig, MountRetry, Viewport};
use crate::error::{MapError, MapResult};
use crate::region::{Coordinates, Region, RegionCatalog};

use super::{MapTarget, MapWidget, MarkerSpec, TileLayer};

/// A detail map waiting for its container.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingMount {
    pub container_id: String,
    pub region: Region,
    pub attempts: u32,
    /// Distinguishes successive schedules of the same container
    pub generation: u64,
}

/// Result of trying to complete a pending mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountStatus {
    /// Nothing was pending
    Idle,
    /// Container still missing, will retry
    Waiting,
    /// Detail map created
    Mounted,
    /// Gave up on the pending mount
    Abandoned,
}

/// Owns the map handles of one explorer view.
pub struct MapAdapter<W: MapWidget> {
    widget: W,
    config: ExplorerConfig,
    primary: Option<W::Handle>,
    secondary: Option<W::Handle>,
    pending: Option<PendingMount>,
    generation: u64,
}

impl<W: MapWidget> MapAdapter<W> {
    pub fn new(widget: W, config: ExplorerConfig) -> Self {
        Self {
            widget,
            config,
            primary: None,
            secondary: None,
            pending: None,
            generation: 0,
        }
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn has_primary(&self) -> bool {
        self.primary.is_some()
    }

    pub fn has_secondary(&self) -> bool {
        self.secondary.is_some()
    }

    pub fn pending(&self) -> Option<&PendingMount> {
        self.pending.as_ref()
    }

    fn tile_layer(&self, max_zoom: u8) -> TileLayer {
        TileLayer {
            url_template: self.config.tile_url.clone(),
            attribution: self.config.attribution.clone(),
            max_zoom,
        }
    }

    /// Creates the overview map with one marker per catalog region.
    pub fn mount_primary(
        &mut self,
        container_id: &str,
        viewport: Viewport,
        catalog: &RegionCatalog,
    ) -> MapResult<()> {
        if !self.widget.container_exists(container_id) {
            return Err(MapError::ContainerMissing(container_id.to_string()));
        }
        self.unmount_primary();

        let map = self.widget.create_map(container_id, viewport)?;
        // Keep the handle before decorating so a failure below still gets cleaned up.
        self.primary = Some(map.clone());

        self.widget
            .add_tile_layer(&map, &self.tile_layer(self.config.primary_max_zoom))?;
        for region in catalog.iter() {
            self.widget.add_marker(&map, &MarkerSpec::overview(region))?;
        }
        self.widget.bind_background_click(&map)?;
        self.widget.invalidate_size(&map);

        tracing::info!(
            container = container_id,
            markers = catalog.len(),
            "Overview map mounted"
        );
        Ok(())
    }

    pub fn unmount_primary(&mut self) {
        if let Some(map) = self.primary.take() {
            self.widget.remove(map);
            tracing::debug!("Overview map removed");
        }
    }

    /// Pans/zooms a mounted map. No-op if that map is absent.
    pub fn recenter(&mut self, target: MapTarget, center: Coordinates, zoom: u8) {
        let handle = match target {
            MapTarget::Primary => self.primary.as_ref(),
            MapTarget::Secondary => self.secondary.as_ref(),
        };
        match handle {
            Some(map) => self.widget.set_view(map, Viewport::new(center, zoom)),
            None => tracing::trace!(target = target.as_str(), "Recenter skipped, no map"),
        }
    }

    /// Records a detail mount to complete once the container exists.
    ///
    /// Returns the generation of the new pending mount.
    pub fn schedule_secondary(&mut self, container_id: &str, region: Region) -> u64 {
        self.unmount_secondary();
        self.generation += 1;
        tracing::debug!(
            container = container_id,
            region = %region.name,
            generation = self.generation,
            "Detail map scheduled"
        );
        self.pending = Some(PendingMount {
            container_id: container_id.to_string(),
            region,
            attempts: 0,
            generation: self.generation,
        });
        self.generation
    }

    /// Creates the detail map for a region. The container must exist.
    pub fn mount_secondary(&mut self, container_id: &str, region: &Region) -> MapResult<()> {
        if !self.widget.container_exists(container_id) {
            return Err(MapError::ContainerMissing(container_id.to_string()));
        }
        if let Some(previous) = self.secondary.take() {
            self.widget.remove(previous);
        }

        let viewport = Viewport::new(region.coordinates, self.config.detail_zoom);
        let map = self.widget.create_map(container_id, viewport)?;
        self.secondary = Some(map.clone());

        self.widget
            .add_tile_layer(&map, &self.tile_layer(self.config.detail_max_zoom))?;
        self.widget.add_marker(&map, &MarkerSpec::detail(region))?;
        self.widget.invalidate_size(&map);

        tracing::info!(container = container_id, region = %region.name, "Detail map mounted");
        Ok(())
    }

    /// Destroys the detail map and cancels any pending mount.
    pub fn unmount_secondary(&mut self) {
        self.pending = None;
        if let Some(map) = self.secondary.take() {
            self.widget.remove(map);
            tracing::debug!("Detail map removed");
        }
    }

    /// Render-layer signal that a container now exists.
    pub fn container_mounted(&mut self, container_id: &str) -> MountStatus {
        match &self.pending {
            Some(pending) if pending.container_id == container_id => self.complete_pending(),
            _ => MountStatus::Idle,
        }
    }

    /// Like [`MapAdapter::poll_pending`], but only for the mount scheduled as
    /// `generation`. Reports [`MountStatus::Idle`] once that mount is gone or
    /// replaced, leaving a newer pending mount untouched.
    pub fn poll_pending_mount(&mut self, generation: u64) -> MountStatus {
        match &self.pending {
            Some(pending) if pending.generation == generation => self.poll_pending(),
            _ => MountStatus::Idle,
        }
    }

    /// One bounded-retry attempt at completing the pending mount.
    pub fn poll_pending(&mut self) -> MountStatus {
        let Some(pending) = self.pending.as_mut() else {
            return MountStatus::Idle;
        };
        if self.widget.container_exists(&pending.container_id) {
            return self.complete_pending();
        }

        pending.attempts += 1;
        if pending.attempts >= self.config.mount_retry.max_attempts {
            tracing::debug!(
                container = %pending.container_id,
                attempts = pending.attempts,
                "Detail map container never appeared, abandoning mount"
            );
            self.pending = None;
            return MountStatus::Abandoned;
        }
        MountStatus::Waiting
    }

    fn complete_pending(&mut self) -> MountStatus {
        let Some(pending) = self.pending.take() else {
            return MountStatus::Idle;
        };
        match self.mount_secondary(&pending.container_id, &pending.region) {
            Ok(()) => MountStatus::Mounted,
            Err(e) => {
                tracing::warn!(error = %e, "Detail map mount failed");
                self.unmount_secondary();
                MountStatus::Abandoned
            }
        }
    }

    /// Destroys both maps.
    pub fn unmount_all(&mut self) {
        self.unmount_secondary();
        self.unmount_primary();
    }
}

/// Drives `poll` on a fixed interval until it stops reporting
/// [`MountStatus::Waiting`]. Bounded by the poll's own attempt limit.
pub async fn retry_pending_mount<F, S, Fut>(retry: MountRetry, mut sleep: S, mut poll: F) -> MountStatus
where
    F: FnMut() -> MountStatus,
    S: FnMut(Duration) -> Fut,
    Fut: Future<Output = ()>,
{
    let interval = Duration::from_millis(retry.interval_ms);
    for _ in 0..=retry.max_attempts {
        sleep(interval).await;
        let status = poll();
        if status != MountStatus::Waiting {
            return status;
        }
    }
    MountStatus::Abandoned
}

/// [`retry_pending_mount`] using the tokio timer.
pub async fn retry_pending_mount_tokio<F>(retry: MountRetry, poll: F) -> MountStatus
where
    F: FnMut() -> MountStatus,
{
    retry_pending_mount(retry, tokio::time::sleep, poll).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{HeadlessMap, WidgetOp};

    fn adapter() -> MapAdapter<HeadlessMap> {
        let mut widget = HeadlessMap::new();
        widget.add_container("map");
        MapAdapter::new(widget, ExplorerConfig::default())
    }

    fn lima() -> Region {
        RegionCatalog::peru().get("Lima").unwrap().clone()
    }

    #[test]
    fn test_mount_primary_places_markers() {
        let mut maps = adapter();
        let config = ExplorerConfig::default();
        maps.mount_primary("map", config.primary_viewport, RegionCatalog::peru())
            .unwrap();

        assert!(maps.has_primary());
        assert_eq!(maps.widget().marker_count("map"), 9);
        assert!(maps.widget().has_background_click("map"));
    }

    #[test]
    fn test_mount_primary_missing_container() {
        let mut maps = MapAdapter::new(HeadlessMap::new(), ExplorerConfig::default());
        let err = maps
            .mount_primary("map", ExplorerConfig::default().primary_viewport, RegionCatalog::peru())
            .unwrap_err();
        assert_eq!(err, MapError::ContainerMissing("map".to_string()));
        assert!(!maps.has_primary());
    }

    #[test]
    fn test_remount_primary_removes_first() {
        let mut maps = adapter();
        let viewport = ExplorerConfig::default().primary_viewport;
        maps.mount_primary("map", viewport, RegionCatalog::peru()).unwrap();
        maps.mount_primary("map", viewport, RegionCatalog::peru()).unwrap();

        assert_eq!(maps.widget().live_maps(), 1);
    }

    #[test]
    fn test_unmount_is_idempotent() {
        let mut maps = adapter();
        maps.unmount_primary();
        maps.unmount_secondary();
        assert!(maps.widget().ops().is_empty());
    }

    #[test]
    fn test_recenter_without_map_is_noop() {
        let mut maps = adapter();
        maps.recenter(MapTarget::Secondary, Coordinates::new(0.0, 0.0), 3);
        assert!(maps.widget().ops().is_empty());
    }

    #[test]
    fn test_container_signal_completes_mount() {
        let mut maps = adapter();
        maps.schedule_secondary("department-map", lima());
        assert_eq!(maps.container_mounted("other"), MountStatus::Idle);

        maps.widget_mut().add_container("department-map");
        assert_eq!(maps.container_mounted("department-map"), MountStatus::Mounted);
        assert!(maps.has_secondary());
        assert!(maps.pending().is_none());
        assert_eq!(
            maps.widget().view_of("department-map").map(|v| v.zoom),
            Some(9)
        );
    }

    #[test]
    fn test_poll_abandons_after_max_attempts() {
        let mut maps = adapter();
        maps.schedule_secondary("department-map", lima());

        for _ in 0..4 {
            assert_eq!(maps.poll_pending(), MountStatus::Waiting);
        }
        assert_eq!(maps.poll_pending(), MountStatus::Abandoned);
        assert_eq!(maps.poll_pending(), MountStatus::Idle);
        assert!(!maps.has_secondary());
    }

    #[test]
    fn test_unmount_secondary_cancels_pending() {
        let mut maps = adapter();
        maps.schedule_secondary("department-map", lima());
        maps.unmount_secondary();

        maps.widget_mut().add_container("department-map");
        assert_eq!(maps.container_mounted("department-map"), MountStatus::Idle);
        assert!(!maps.has_secondary());
    }

    #[test]
    fn test_secondary_never_duplicated() {
        let mut maps = adapter();
        maps.widget_mut().add_container("department-map");

        maps.mount_secondary("department-map", &lima()).unwrap();
        maps.schedule_secondary("department-map", lima());
        assert_eq!(maps.poll_pending(), MountStatus::Mounted);

        assert_eq!(maps.widget().live_maps(), 1);
        let removes = maps
            .widget()
            .ops()
            .iter()
            .filter(|op| matches!(op, WidgetOp::Remove { .. }))
            .count();
        assert_eq!(removes, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_gives_up() {
        let mut maps = adapter();
        maps.schedule_secondary("department-map", lima());

        let retry = maps.config().mount_retry;
        let status = retry_pending_mount_tokio(retry, || maps.poll_pending()).await;
        assert_eq!(status, MountStatus::Abandoned);
        assert!(maps.pending().is_none());
    }

    #[test]
    fn test_stale_generation_leaves_new_mount_alone() {
        let mut maps = adapter();
        let first = maps.schedule_secondary("department-map", lima());
        assert_eq!(maps.poll_pending_mount(first), MountStatus::Waiting);

        let cusco = RegionCatalog::peru().get("Cusco").unwrap().clone();
        let second = maps.schedule_secondary("department-map", cusco);
        assert_ne!(first, second);

        for _ in 0..10 {
            assert_eq!(maps.poll_pending_mount(first), MountStatus::Idle);
        }
        let pending = maps.pending().unwrap();
        assert_eq!(pending.generation, second);
        assert_eq!(pending.attempts, 0);
        assert_eq!(pending.region.name, "Cusco");
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_retry_loops_keep_full_window() {
        // Two loops share the adapter: the first was started for an earlier
        // schedule, the second for the current one.
        let maps = std::rc::Rc::new(std::cell::RefCell::new(adapter()));
        let retry = MountRetry::default();
        let first = maps.borrow_mut().schedule_secondary("department-map", lima());

        let stale = {
            let maps = maps.clone();
            retry_pending_mount_tokio(retry, move || maps.borrow_mut().poll_pending_mount(first))
        };
        let current = {
            let maps = maps.clone();
            async move {
                tokio::time::sleep(Duration::from_millis(120)).await;
                let cusco = RegionCatalog::peru().get("Cusco").unwrap().clone();
                let second = maps.borrow_mut().schedule_secondary("department-map", cusco);
                let started = tokio::time::Instant::now();
                let status = retry_pending_mount_tokio(retry, || {
                    maps.borrow_mut().poll_pending_mount(second)
                })
                .await;
                (status, started.elapsed())
            }
        };

        let (stale_status, (current_status, elapsed)) = tokio::join!(stale, current);
        assert_eq!(stale_status, MountStatus::Idle);
        assert_eq!(current_status, MountStatus::Abandoned);
        let window = Duration::from_millis(retry.interval_ms * u64::from(retry.max_attempts));
        assert!(elapsed >= window, "abandoned after {elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_mounts_when_container_appears() {
        let mut maps = adapter();
        maps.schedule_secondary("department-map", lima());

        let mut polls = 0;
        let status = retry_pending_mount_tokio(MountRetry::default(), || {
            polls += 1;
            if polls == 3 {
                maps.widget_mut().add_container("department-map");
            }
            maps.poll_pending()
        })
        .await;

        assert_eq!(status, MountStatus::Mounted);
        assert_eq!(polls, 3);
        assert!(maps.has_secondary());
    }
}
