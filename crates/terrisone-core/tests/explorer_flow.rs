//! End-to-end selection flows against the headless map widget.

use terrisone_core::{
    get_groundwater_level, CategoryKey, ExplorerConfig, HeadlessMap, Level, MountStatus, Phase,
    RegionExplorer, Transition, WidgetOp,
};

const DETAIL: &str = "department-map";

fn mounted_explorer() -> RegionExplorer<HeadlessMap> {
    let mut widget = HeadlessMap::new();
    widget.add_container("map");
    let mut explorer = RegionExplorer::new(widget, ExplorerConfig::default());
    explorer.mount().expect("overview map mounts");
    explorer
}

/// Simulates the detail panel rendering its map container.
fn render_detail(explorer: &mut RegionExplorer<HeadlessMap>) -> MountStatus {
    explorer.maps_mut().widget_mut().add_container(DETAIL);
    explorer.container_mounted(DETAIL)
}

/// Simulates the detail panel disappearing.
fn unrender_detail(explorer: &mut RegionExplorer<HeadlessMap>) {
    explorer.maps_mut().widget_mut().remove_container(DETAIL);
}

#[test]
fn test_lima_air_report() {
    let mut explorer = mounted_explorer();
    explorer.select_region("Lima");
    explorer.open_category(CategoryKey::Air);

    let report = explorer.state().category_report.as_ref().unwrap();
    assert!(report.title.contains("Lima"));
    assert_eq!(report.metrics.len(), 4);
    let last = report.metrics.last().unwrap();
    assert_eq!(last.name, "Health Impact");
    assert_eq!(last.level, Level::Medium);
}

#[test]
fn test_open_category_while_idle_is_noop() {
    let mut explorer = mounted_explorer();
    let ops_before = explorer.maps().widget().ops().len();

    assert_eq!(explorer.open_category(CategoryKey::Water), Transition::Ignored);
    assert_eq!(explorer.phase(), Phase::Idle);
    assert!(explorer.state().category_report.is_none());
    assert!(explorer.maps().pending().is_none());
    assert_eq!(explorer.maps().widget().ops().len(), ops_before);
}

#[test]
fn test_round_trip_returns_to_region() {
    let mut explorer = mounted_explorer();
    explorer.select_region("Cusco");
    explorer.open_category(CategoryKey::Vegetation);
    assert_eq!(render_detail(&mut explorer), MountStatus::Mounted);

    explorer.close_category();
    unrender_detail(&mut explorer);

    assert_eq!(explorer.phase(), Phase::RegionFocused);
    assert_eq!(explorer.state().selected_region.as_ref().unwrap().name, "Cusco");
    assert!(!explorer.maps().has_secondary());
    assert_eq!(explorer.maps().widget().live_maps(), 1);
}

#[test]
fn test_second_region_closes_detail_first() {
    let mut explorer = mounted_explorer();
    explorer.select_region("Lima");
    explorer.open_category(CategoryKey::Air);
    render_detail(&mut explorer);
    assert!(explorer.maps().has_secondary());

    let start = explorer.maps().widget().ops().len();
    explorer.select_region("Loreto");
    let ops = &explorer.maps().widget().ops()[start..];

    assert_eq!(
        ops[0],
        WidgetOp::Remove {
            container: DETAIL.to_string()
        }
    );
    assert!(matches!(&ops[1], WidgetOp::SetView { container, .. } if container == "map"));
    assert_eq!(explorer.phase(), Phase::RegionFocused);
    assert!(!explorer.maps().has_secondary());
}

#[test]
fn test_close_panel_twice() {
    let mut explorer = mounted_explorer();
    explorer.select_region("Piura");
    explorer.open_category(CategoryKey::SdgCities);

    explorer.close_panel();
    let once = explorer.state().clone();
    explorer.close_panel();

    assert_eq!(explorer.state(), &once);
    assert_eq!(explorer.phase(), Phase::Idle);
}

#[test]
fn test_reopening_category_never_double_binds() {
    let mut explorer = mounted_explorer();
    explorer.select_region("Amazonas");

    for key in CategoryKey::ALL {
        explorer.open_category(key);
        // Container stays rendered across category switches.
        assert_eq!(render_detail(&mut explorer), MountStatus::Mounted);
        assert_eq!(explorer.maps().widget().live_maps(), 2);
    }
}

#[test]
fn test_detail_map_contents() {
    let mut explorer = mounted_explorer();
    explorer.select_region("Madre de Dios");
    explorer.open_category(CategoryKey::Climate);
    render_detail(&mut explorer);

    let widget = explorer.maps().widget();
    assert_eq!(widget.marker_count(DETAIL), 1);
    assert_eq!(widget.tile_max_zoom(DETAIL), Some(13));
    assert_eq!(widget.tile_max_zoom("map"), Some(18));
    assert_eq!(widget.markers(DETAIL)[0].color, "#c0392b");
}

#[test]
fn test_missing_detail_container_abandons() {
    let mut explorer = mounted_explorer();
    explorer.select_region("Arequipa");
    explorer.open_category(CategoryKey::Atmosphere);

    let mut last = MountStatus::Waiting;
    while last == MountStatus::Waiting {
        last = explorer.poll_pending();
    }
    assert_eq!(last, MountStatus::Abandoned);
    assert_eq!(explorer.phase(), Phase::CategoryFocused);
    assert!(!explorer.maps().has_secondary());
}

#[test]
fn test_switching_category_retires_old_retry() {
    let mut explorer = mounted_explorer();
    explorer.select_region("Lima");
    explorer.open_category(CategoryKey::Air);
    let air = explorer.pending_generation().unwrap();
    assert_eq!(explorer.poll_pending_mount(air), MountStatus::Waiting);

    explorer.open_category(CategoryKey::Water);
    let water = explorer.pending_generation().unwrap();
    assert_ne!(air, water);

    // The loop started for Air stops without touching Water's mount
    assert_eq!(explorer.poll_pending_mount(air), MountStatus::Idle);
    assert_eq!(explorer.maps().pending().unwrap().attempts, 0);

    assert_eq!(render_detail(&mut explorer), MountStatus::Mounted);
    assert_eq!(explorer.poll_pending_mount(water), MountStatus::Idle);
    assert!(explorer.maps().has_secondary());
}

#[test]
fn test_unknown_region_leaves_state() {
    let mut explorer = mounted_explorer();
    explorer.select_region("Lima");
    let before = explorer.state().clone();

    assert_eq!(explorer.select_region("Nonexistent"), Transition::Ignored);
    assert_eq!(explorer.state(), &before);
    assert_eq!(get_groundwater_level("Nonexistent"), "Moderate");
}
