//! Top navigation bar.

use dioxus::prelude::*;

use crate::route::Route;
use crate::theme::ThemeToggle;

/// Header with brand, route links and the theme toggle.
#[component]
pub fn Header(mut route: Signal<Route>) -> Element {
    let current = route();

    rsx! {
        header {
            class: "site-header",

            button {
                class: "brand",
                onclick: move |_| route.set(Route::Home),
                span { class: "brand-mark", "◉" }
                span { class: "brand-name", "BioTerrisone" }
            }

            nav {
                class: "site-nav",
                for target in Route::ALL {
                    button {
                        key: "{target}",
                        class: if target == current { "nav-link active" } else { "nav-link" },
                        onclick: move |_| {
                            tracing::debug!(route = %target, "Navigate");
                            route.set(target);
                        },
                        "{target.label()}"
                    }
                }
            }

            ThemeToggle {}
        }
    }
}
