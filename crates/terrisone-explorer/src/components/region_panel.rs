//! Overview panel for the selected region.

use dioxus::prelude::*;

use terrisone_core::{aqi_label, CategoryKey};

use super::{open_category, Explorer};

/// Region overview with indicator summary and category buttons.
#[component]
pub fn RegionPanel(explorer: Signal<Explorer>) -> Element {
    let mut explorer_write = explorer;
    // Notice is keyed by region so it does not follow a new selection
    let mut notice = use_signal(|| None::<(String, String)>);

    let selected = explorer.read().state().selected_region.clone();
    let Some(region) = selected else {
        return rsx! {};
    };
    let shown_notice = notice()
        .filter(|(name, _)| *name == region.name)
        .map(|(_, text)| text);

    let risk = region.risk_level;
    let region_name = region.name.clone();

    rsx! {
        aside {
            class: "info-panel",

            div {
                class: "panel-header",
                h2 {
                    class: "panel-title",
                    "{region.name}"
                }
                span {
                    class: "risk-badge risk-{risk.as_str()}",
                    "{risk} RISK"
                }
                button {
                    class: "panel-close",
                    title: "Close",
                    onclick: move |_| {
                        explorer_write.write().close_panel();
                    },
                    "×"
                }
            }

            div {
                class: "indicator-grid",
                Indicator {
                    label: "Air Quality",
                    value: format!("{} ({})", region.air_quality, aqi_label(region.air_quality)),
                }
                Indicator {
                    label: "Water Quality",
                    value: region.water_quality.clone(),
                }
                Indicator {
                    label: "Deforestation",
                    value: format!("{}% annual loss", region.deforestation_rate),
                }
                Indicator {
                    label: "Health Impact",
                    value: region.health_impact.clone(),
                }
            }

            div {
                class: "category-buttons",
                for key in CategoryKey::ALL {
                    button {
                        key: "{key}",
                        class: "category-btn category-{key}",
                        onclick: move |_| open_category(explorer, key),
                        "{key.label()}"
                    }
                }
            }

            button {
                class: "simulate-btn",
                onclick: move |_| {
                    tracing::info!(region = %region_name, "Simulate intervention requested");
                    notice.set(Some((
                        region_name.clone(),
                        format!(
                            "Simulating intervention for {region_name}. This would show predictive models and potential outcomes."
                        ),
                    )));
                },
                "Simulate intervention"
            }

            if let Some(text) = shown_notice {
                p {
                    class: "panel-notice",
                    "{text}"
                }
            }
        }
    }
}

/// A single labelled indicator value.
#[component]
fn Indicator(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            class: "indicator",
            span {
                class: "indicator-label",
                "{label}"
            }
            span {
                class: "indicator-value",
                "{value}"
            }
        }
    }
}
