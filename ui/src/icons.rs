use dioxus::prelude::*;
use types::{
    Page,
    login::{AuthMethod, FeatureKind},
};

/// Line icons drawn on a 24x24 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    CheckCircle,
    Lock,
    Home,
    Users,
    BarChart,
    Database,
    Settings,
    Cloud,
    TrendingUp,
    ShoppingCart,
    Mail,
    Phone,
    Eye,
    EyeOff,
    Globe,
    LogOut,
}

impl Glyph {
    pub fn for_page(page: Page) -> Self {
        match page {
            Page::Login => Glyph::Lock,
            Page::Dashboard => Glyph::Home,
            Page::UserManagement => Glyph::Users,
            Page::Analytics => Glyph::BarChart,
            Page::DataManagement => Glyph::Database,
            Page::Settings => Glyph::Settings,
        }
    }

    pub fn for_feature(kind: FeatureKind) -> Self {
        match kind {
            FeatureKind::Weather => Glyph::Cloud,
            FeatureKind::Market => Glyph::TrendingUp,
            FeatureKind::Marketplace => Glyph::ShoppingCart,
            FeatureKind::Community => Glyph::Users,
        }
    }

    pub fn for_auth_method(method: AuthMethod) -> Self {
        match method {
            AuthMethod::Email => Glyph::Mail,
            AuthMethod::Phone => Glyph::Phone,
        }
    }

    fn shape(self) -> Element {
        match self {
            Glyph::CheckCircle => rsx! {
                path { d: "M22 11.08V12a10 10 0 1 1-5.93-9.14" }
                polyline { points: "22 4 12 14.01 9 11.01" }
            },
            Glyph::Lock => rsx! {
                rect { x: "3", y: "11", width: "18", height: "11", rx: "2", ry: "2" }
                path { d: "M7 11V7a5 5 0 0 1 10 0v4" }
            },
            Glyph::Home => rsx! {
                path { d: "m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" }
                polyline { points: "9 22 9 12 15 12 15 22" }
            },
            Glyph::Users => rsx! {
                path { d: "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" }
                circle { cx: "9", cy: "7", r: "4" }
                path { d: "M22 21v-2a4 4 0 0 0-3-3.87" }
                path { d: "M16 3.13a4 4 0 0 1 0 7.75" }
            },
            Glyph::BarChart => rsx! {
                path { d: "M3 3v18h18" }
                path { d: "M18 17V9" }
                path { d: "M13 17V5" }
                path { d: "M8 17v-3" }
            },
            Glyph::Database => rsx! {
                ellipse { cx: "12", cy: "5", rx: "9", ry: "3" }
                path { d: "M3 5v14a9 3 0 0 0 18 0V5" }
                path { d: "M3 12a9 3 0 0 0 18 0" }
            },
            Glyph::Settings => rsx! {
                circle { cx: "12", cy: "12", r: "3" }
                path { d: "M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-1.82-.33 1.65 1.65 0 0 0-1 1.51V21a2 2 0 1 1-4 0v-.09a1.65 1.65 0 0 0-1-1.51 1.65 1.65 0 0 0-1.82.33l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06a1.65 1.65 0 0 0 .33-1.82 1.65 1.65 0 0 0-1.51-1H3a2 2 0 1 1 0-4h.09a1.65 1.65 0 0 0 1.51-1 1.65 1.65 0 0 0-.33-1.82l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06a1.65 1.65 0 0 0 1.82.33H9a1.65 1.65 0 0 0 1-1.51V3a2 2 0 1 1 4 0v.09a1.65 1.65 0 0 0 1 1.51 1.65 1.65 0 0 0 1.82-.33l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06a1.65 1.65 0 0 0-.33 1.82V9a1.65 1.65 0 0 0 1.51 1H21a2 2 0 1 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z" }
            },
            Glyph::Cloud => rsx! {
                path { d: "M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z" }
            },
            Glyph::TrendingUp => rsx! {
                polyline { points: "22 7 13.5 15.5 8.5 10.5 2 17" }
                polyline { points: "16 7 22 7 22 13" }
            },
            Glyph::ShoppingCart => rsx! {
                circle { cx: "8", cy: "21", r: "1" }
                circle { cx: "19", cy: "21", r: "1" }
                path { d: "M2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57l1.65-7.43H5.12" }
            },
            Glyph::Mail => rsx! {
                rect { x: "2", y: "4", width: "20", height: "16", rx: "2" }
                path { d: "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" }
            },
            Glyph::Phone => rsx! {
                path { d: "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" }
            },
            Glyph::Eye => rsx! {
                path { d: "M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z" }
                circle { cx: "12", cy: "12", r: "3" }
            },
            Glyph::EyeOff => rsx! {
                path { d: "M9.88 9.88a3 3 0 1 0 4.24 4.24" }
                path { d: "M10.73 5.08A10.43 10.43 0 0 1 12 5c7 0 10 7 10 7a13.16 13.16 0 0 1-1.67 2.68" }
                path { d: "M6.61 6.61A13.526 13.526 0 0 0 2 12s3 7 10 7a9.74 9.74 0 0 0 5.39-1.61" }
                line { x1: "2", x2: "22", y1: "2", y2: "22" }
            },
            Glyph::Globe => rsx! {
                circle { cx: "12", cy: "12", r: "10" }
                path { d: "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20" }
                path { d: "M2 12h20" }
            },
            Glyph::LogOut => rsx! {
                path { d: "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4" }
                polyline { points: "16 17 21 12 16 7" }
                line { x1: "21", x2: "9", y1: "12", y2: "12" }
            },
        }
    }
}

#[component]
pub fn Icon(
    glyph: Glyph,
    #[props(default = 16)] size: u32,
    #[props(into, default = "icon".to_string())] class: String,
) -> Element {
    rsx! {
        svg {
            class: "{class}",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {glyph.shape()}
        }
    }
}

/// Icon for a section, as used by the sidebar and the dashboard cards.
#[component]
pub fn PageIcon(page: Page, #[props(default = 20)] size: u32) -> Element {
    rsx! {
        Icon { glyph: Glyph::for_page(page), size, class: "nav-icon" }
    }
}
