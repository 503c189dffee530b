use dioxus::prelude::*;
use types::{Page, dashboard::under_development_noun};

/// Placeholder body for a section that has not been built yet.
#[component]
pub fn UnderDevelopment(page: Page) -> Element {
    let noun = under_development_noun(page).unwrap_or(page.label());

    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "{page.label()}" }
            }
            div { class: "under-development",
                h2 { "This section is under development." }
                p { "{noun} features will be available soon." }
            }
        }
    }
}
