//! Theme system for the dashboard.

use dioxus::prelude::*;

/// Available themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// Light background, forest-green accents
    #[default]
    Canopy,
    /// Dark background for the map view
    Night,
}

impl Theme {
    /// Returns the CSS class value for this theme.
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::Canopy => "canopy",
            Theme::Night => "night",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Canopy => "Canopy",
            Theme::Night => "Night",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Canopy => Theme::Night,
            Theme::Night => Theme::Canopy,
        }
    }
}

/// Global signal for the current theme.
pub static CURRENT_THEME: GlobalSignal<Theme> = GlobalSignal::new(Theme::default);

/// Root component that applies the current theme.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = *CURRENT_THEME.read();
    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme.css_value()}",
            {children}
        }
    }
}

/// Button flipping between the two themes.
#[component]
pub fn ThemeToggle() -> Element {
    let theme = *CURRENT_THEME.read();
    rsx! {
        button {
            class: "theme-toggle",
            title: "Switch theme",
            onclick: move |_| {
                let next = CURRENT_THEME.read().toggled();
                *CURRENT_THEME.write() = next;
            },
            "{theme.toggled().display_name()}"
        }
    }
}
