use crate::Route;
use dioxus::prelude::*;
use types::dashboard::{CARDS, DESCRIPTION, STATS, TITLE};

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "{TITLE}" }
                p { class: "page-description", "{DESCRIPTION}" }
            }
            div { class: "dashboard-grid",
                for card in CARDS {
                    Link {
                        key: "{card.target.id()}",
                        to: Route::from(card.target),
                        class: "dashboard-card",
                        div { class: "dashboard-card-header",
                            div { class: "dashboard-card-icon {card.target.id()}",
                                ui::PageIcon { page: card.target, size: 24 }
                            }
                            h3 { class: "dashboard-card-title", "{card.title}" }
                        }
                        p { class: "dashboard-card-description", "{card.description}" }
                        span { class: "btn btn-secondary", "Learn more" }
                    }
                }
            }
            div { class: "stats-section",
                for stat in STATS {
                    ui::StatTile { key: "{stat.label}", stat }
                }
            }
        }
    }
}
