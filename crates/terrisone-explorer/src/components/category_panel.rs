//! Category detail panel with its own region map.

use dioxus::prelude::*;

use terrisone_core::MountStatus;

use super::Explorer;

/// Report for the active category plus the detail map.
#[component]
pub fn CategoryPanel(explorer: Signal<Explorer>) -> Element {
    let mut explorer_write = explorer;

    let (region, category, report) = {
        let guard = explorer.read();
        let state = guard.state();
        (
            state.selected_region.clone(),
            state.active_category,
            state.category_report.clone(),
        )
    };
    let (Some(region), Some(category), Some(report)) = (region, category, report) else {
        return rsx! {};
    };

    rsx! {
        aside {
            class: "info-panel category-panel category-{category}",

            div {
                class: "panel-header",
                button {
                    class: "panel-back",
                    onclick: move |_| {
                        explorer_write.write().close_category();
                    },
                    "← {region.name}"
                }
                h2 {
                    class: "panel-title",
                    "{report.title}"
                }
            }

            p {
                class: "category-description",
                "{report.description}"
            }

            DetailMap { key: "{region.name}-{category}", explorer }

            section {
                class: "category-metrics",
                h3 { "Key metrics" }
                for metric in report.metrics.iter() {
                    div {
                        key: "{metric.name}",
                        class: "metric metric-{metric.level.as_str()}",
                        span {
                            class: "metric-name",
                            "{metric.name}"
                        }
                        span {
                            class: "metric-value",
                            "{metric.value}"
                        }
                    }
                }
            }

            section {
                class: "category-sources",
                h3 { "Data sources" }
                ul {
                    for source in report.data_sources.iter() {
                        li { key: "{source}", "{source}" }
                    }
                }
            }

            section {
                class: "category-recommendations",
                h3 { "Recommendations" }
                ul {
                    for recommendation in report.recommendations.iter() {
                        li { key: "{recommendation}", "{recommendation}" }
                    }
                }
            }
        }
    }
}

/// Container for the secondary map. Reports its lifecycle to the widget.
#[component]
fn DetailMap(explorer: Signal<Explorer>) -> Element {
    let container = use_hook(|| explorer.peek().config().detail_container.clone());

    let removed = container.clone();
    let mut explorer_drop = explorer;
    use_drop(move || {
        if let Ok(mut explorer) = explorer_drop.try_write() {
            explorer.maps_mut().widget_mut().container_removed(&removed);
        }
    });

    let mounted = container.clone();
    let mut explorer_mount = explorer;
    rsx! {
        div {
            id: "{container}",
            class: "detail-map",
            onmounted: move |_| {
                let mut guard = explorer_mount.write();
                guard.maps_mut().widget_mut().container_rendered(&mounted);
                match guard.container_mounted(&mounted) {
                    MountStatus::Mounted => tracing::debug!(container = %mounted, "Detail map mounted"),
                    status => tracing::debug!(container = %mounted, ?status, "Detail container rendered"),
                }
            },
        }
    }
}
