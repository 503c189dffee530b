use dioxus::prelude::*;

use crate::{Glyph, Icon};

const SUBTITLE: &str = "Agricultural Platform for Kenyan Farmers";

/// Brand mark used on the login hero and at the top of the sidebar.
#[component]
pub fn Logo(#[props(default)] compact: bool) -> Element {
    let size = if compact { 20 } else { 24 };

    rsx! {
        div { class: "logo",
            div { class: "logo-icon",
                Icon { glyph: Glyph::CheckCircle, size }
            }
            div {
                div { class: if compact { "logo-text logo-text-compact" } else { "logo-text" }, "HarvestNet" }
                div { class: "logo-subtitle", "{SUBTITLE}" }
            }
        }
    }
}
