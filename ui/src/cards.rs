use dioxus::prelude::*;
use types::{dashboard::Stat, login::Feature};

use crate::{Glyph, Icon};

#[component]
pub fn FeatureCard(feature: Feature) -> Element {
    rsx! {
        div { class: "feature-card",
            div { class: "feature-icon {feature.tone}",
                Icon { glyph: Glyph::for_feature(feature.kind), size: 24 }
            }
            h3 { class: "feature-title", "{feature.title}" }
            p { class: "feature-description", "{feature.description}" }
            button { r#type: "button", class: "learn-more-btn", "Learn more" }
        }
    }
}

#[component]
pub fn StatTile(stat: Stat) -> Element {
    rsx! {
        div { class: "stat-card",
            div { class: "stat-value {stat.tone}", "{stat.value}" }
            div { class: "stat-label", "{stat.label}" }
            div { class: "stat-change", "{stat.change}" }
        }
    }
}
