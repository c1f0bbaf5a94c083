//! Static content pages.

use dioxus::prelude::*;

use crate::route::Route;

/// Landing page.
#[component]
pub fn HomePage(mut route: Signal<Route>) -> Element {
    rsx! {
        section {
            class: "page page-home",
            h1 { "Environmental intelligence for Peru" }
            p {
                class: "page-lead",
                "Air, water, soil and forest indicators for each department, in one map."
            }
            button {
                class: "cta-btn",
                onclick: move |_| route.set(Route::Map),
                "Explore the map"
            }
        }
    }
}

/// Sign-in form. Credentials are not sent anywhere.
#[component]
pub fn LoginPage() -> Element {
    let mut email = use_signal(String::new);

    rsx! {
        section {
            class: "page page-login",
            h1 { "Sign in" }
            form {
                class: "login-form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    tracing::info!(has_email = !email().is_empty(), "Sign-in submitted");
                },
                label { "Email" }
                input {
                    r#type: "email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                label { "Password" }
                input { r#type: "password" }
                button { r#type: "submit", "Sign in" }
            }
        }
    }
}

const SERVICES: [(&str, &str); 4] = [
    ("Air monitoring", "AQI, particulate matter and gas concentrations by department."),
    ("Water assessment", "Surface and groundwater quality with contamination risk."),
    ("Forest watch", "Deforestation rates, vegetation health and carbon storage."),
    ("Urban sustainability", "SDG 11 progress, green space and transport coverage."),
];

/// Service catalogue.
#[component]
pub fn ServicesPage() -> Element {
    rsx! {
        section {
            class: "page page-services",
            h1 { "Services" }
            div {
                class: "service-grid",
                for (title, text) in SERVICES {
                    article {
                        key: "{title}",
                        class: "service-card",
                        h3 { "{title}" }
                        p { "{text}" }
                    }
                }
            }
        }
    }
}

/// Content blocks selectable on the about page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AboutContent {
    Mission,
    Vision,
    Team,
}

impl AboutContent {
    pub const ALL: [AboutContent; 3] = [
        AboutContent::Mission,
        AboutContent::Vision,
        AboutContent::Team,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            AboutContent::Mission => "Mission",
            AboutContent::Vision => "Vision",
            AboutContent::Team => "Team",
        }
    }

    pub fn body(&self) -> &'static str {
        match self {
            AboutContent::Mission => {
                "Make environmental data about Peru's departments readable for citizens and decision makers."
            }
            AboutContent::Vision => {
                "A country where every land-use decision is informed by open environmental indicators."
            }
            AboutContent::Team => {
                "Environmental engineers, data analysts and developers working with regional partners."
            }
        }
    }
}

/// About page with a content selector. Nothing is shown until a block is picked.
#[component]
pub fn AboutPage() -> Element {
    let mut selected_content = use_signal(|| None::<AboutContent>);

    rsx! {
        section {
            class: "page page-about",
            h1 { "About us" }
            div {
                class: "about-tabs",
                for content in AboutContent::ALL {
                    button {
                        key: "{content.title()}",
                        class: if selected_content() == Some(content) { "about-tab active" } else { "about-tab" },
                        onclick: move |_| selected_content.set(Some(content)),
                        "{content.title()}"
                    }
                }
            }
            if let Some(content) = selected_content() {
                article {
                    class: "about-content",
                    h2 { "{content.title()}" }
                    p { "{content.body()}" }
                }
            }
        }
    }
}

/// Contact details.
#[component]
pub fn ContactPage() -> Element {
    rsx! {
        section {
            class: "page page-contact",
            h1 { "Contact" }
            p { "Write to us with questions about the data or partnership proposals." }
            ul {
                class: "contact-list",
                li { "Lima, Peru" }
                li { "Monday to Friday, 9:00-18:00" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_content_is_distinct() {
        let titles: Vec<_> = AboutContent::ALL.iter().map(|c| c.title()).collect();
        assert_eq!(titles, ["Mission", "Vision", "Team"]);
        assert!(AboutContent::ALL.iter().all(|c| !c.body().is_empty()));
    }
}
