//! Root application component.

use std::sync::OnceLock;

use dioxus::prelude::*;

use terrisone_core::ExplorerConfig;

use crate::components::{
    AboutPage, ContactPage, Header, HomePage, LoginPage, RegionExplorerView, ServicesPage,
};
use crate::route::Route;
use crate::theme::ThemedRoot;

/// Route shown at startup.
static INITIAL_ROUTE: OnceLock<Route> = OnceLock::new();

/// Explorer configuration loaded by the binary.
static EXPLORER_CONFIG: OnceLock<ExplorerConfig> = OnceLock::new();

/// Stores startup settings for [`App`]. Only the first call takes effect.
pub fn configure(route: Route, config: ExplorerConfig) {
    INITIAL_ROUTE.set(route).ok();
    EXPLORER_CONFIG.set(config).ok();
}

/// Root application component.
#[component]
pub fn App() -> Element {
    let route = use_signal(|| INITIAL_ROUTE.get().copied().unwrap_or_default());
    let config = use_hook(|| EXPLORER_CONFIG.get().cloned().unwrap_or_default());

    rsx! {
        ThemedRoot {
            div {
                class: "app-shell",

                Header { route }

                main {
                    class: "app-main",
                    match route() {
                        Route::Home => rsx! { HomePage { route } },
                        Route::Login => rsx! { LoginPage {} },
                        Route::Services => rsx! { ServicesPage {} },
                        Route::About => rsx! { AboutPage {} },
                        Route::Contact => rsx! { ContactPage {} },
                        Route::Map => rsx! { RegionExplorerView { config: config.clone() } },
                    }
                }
            }
        }
    }
}
