//! The region explorer: overview map, region panel, category panel.

use dioxus::prelude::*;

use terrisone_core::{
    retry_pending_mount_tokio, CategoryKey, ExplorerConfig, MapEvent, Phase, RegionExplorer,
    RiskLevel,
};

use crate::map::{event_bridge, LeafletMap};

use super::{CategoryPanel, RegionPanel};

/// Explorer bound to the Leaflet widget.
pub type Explorer = RegionExplorer<LeafletMap>;

/// Opens a category and starts the bounded mount fallback for the detail map.
///
/// The detail container normally reports itself through `onmounted`; the
/// retry loop only matters if that signal never arrives. Each loop polls
/// the generation it was started for and ends once a newer category
/// replaces that mount.
pub fn open_category(mut explorer: Signal<Explorer>, key: CategoryKey) {
    if !explorer.write().open_category(key).is_applied() {
        return;
    }
    let Some(generation) = explorer.read().pending_generation() else {
        return;
    };
    let retry = explorer.read().config().mount_retry;
    spawn(async move {
        let status = retry_pending_mount_tokio(retry, move || {
            explorer.write().poll_pending_mount(generation)
        })
        .await;
        tracing::debug!(?status, category = %key, generation, "Detail map mount settled");
    });
}

/// Region explorer view, the target of the map route.
#[component]
pub fn RegionExplorerView(config: ExplorerConfig) -> Element {
    let mut explorer = use_signal(|| RegionExplorer::new(LeafletMap::new(), config.clone()));

    // Forward Leaflet clicks into the state machine
    use_future(move || async move {
        let mut bridge = event_bridge();
        loop {
            match bridge.recv::<MapEvent>().await {
                Ok(event) => {
                    tracing::debug!(?event, "Map event");
                    explorer.write().handle_event(&event);
                }
                Err(e) => {
                    tracing::warn!("Map event bridge closed: {:?}", e);
                    break;
                }
            }
        }
    });

    use_drop(move || {
        tracing::info!("Unmounting region explorer");
        if let Ok(mut explorer) = explorer.try_write() {
            explorer.unmount();
        }
    });

    let primary_container = config.primary_container.clone();
    let phase = explorer.read().phase();

    rsx! {
        div {
            class: "explorer",

            div {
                class: "map-wrapper",
                div {
                    id: "{primary_container}",
                    class: "map-container",
                    onmounted: move |_| {
                        let container = explorer.read().config().primary_container.clone();
                        let mut guard = explorer.write();
                        guard.maps_mut().widget_mut().container_rendered(&container);
                        if let Err(e) = guard.mount() {
                            tracing::error!("Failed to mount overview map: {}", e);
                        }
                    },
                }
                RiskLegend {}
            }

            match phase {
                Phase::Idle => rsx! {
                    div {
                        class: "explorer-hint",
                        "Select a department on the map to see its environmental indicators."
                    }
                },
                Phase::RegionFocused => rsx! {
                    RegionPanel { explorer }
                },
                Phase::CategoryFocused => rsx! {
                    CategoryPanel { explorer }
                },
            }
        }
    }
}

/// Marker color legend.
#[component]
fn RiskLegend() -> Element {
    rsx! {
        div {
            class: "risk-legend",
            for risk in RiskLevel::ALL {
                div {
                    key: "{risk.as_str()}",
                    class: "legend-item",
                    span {
                        class: "legend-swatch",
                        style: "background: {risk.marker_color()}",
                    }
                    span {
                        class: "legend-label",
                        "{risk.as_str()}"
                    }
                }
            }
        }
    }
}
