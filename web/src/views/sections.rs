use dioxus::prelude::*;
use types::Page;
use ui::UnderDevelopment;

#[component]
pub fn UserManagement() -> Element {
    rsx! { UnderDevelopment { page: Page::UserManagement } }
}

#[component]
pub fn Analytics() -> Element {
    rsx! { UnderDevelopment { page: Page::Analytics } }
}

#[component]
pub fn DataManagement() -> Element {
    rsx! { UnderDevelopment { page: Page::DataManagement } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { UnderDevelopment { page: Page::Settings } }
}
