use std::rc::Rc;

use dioxus::prelude::*;
use secrecy::SecretString;
use types::{Access, CredentialVerifier, DemoVerifier, NAVIGATION, Page, Profile, Session, User};

mod views;

use views::{Analytics, Dashboard, DataManagement, Login, Settings, UserManagement};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Login {},
    #[layout(AuthenticatedLayout)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/user-management")]
        UserManagement {},
        #[route("/analytics")]
        Analytics {},
        #[route("/data-management")]
        DataManagement {},
        #[route("/settings")]
        Settings {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// The registry entry this route renders, `None` for unknown paths.
    pub fn page(&self) -> Option<Page> {
        match self {
            Route::Login {} => Some(Page::Login),
            Route::Dashboard {} => Some(Page::Dashboard),
            Route::UserManagement {} => Some(Page::UserManagement),
            Route::Analytics {} => Some(Page::Analytics),
            Route::DataManagement {} => Some(Page::DataManagement),
            Route::Settings {} => Some(Page::Settings),
            Route::NotFound { .. } => None,
        }
    }
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Login => Route::Login {},
            Page::Dashboard => Route::Dashboard {},
            Page::UserManagement => Route::UserManagement {},
            Page::Analytics => Route::Analytics {},
            Page::DataManagement => Route::DataManagement {},
            Page::Settings => Route::Settings {},
        }
    }
}

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        let routes = server::init().await?;

        Ok(dioxus::server::router(App).merge(routes))
    });

    #[cfg(all(feature = "web", not(feature = "server")))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| SessionState(Signal::new(Session::default())));
    use_context_provider(Verifier::demo);

    rsx! {
        document::Title { "HarvestNet Admin" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}

/// The signed-in session for this tab - use `use_session()` to access.
#[derive(Clone, Copy)]
pub struct SessionState(Signal<Session>);

impl SessionState {
    pub fn login(&mut self, user: User) {
        tracing::info!(email = %user.email, role = %user.role, "signed in");
        self.0.write().login(user);
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.0.read().user() {
            tracing::info!(email = %user.email, "signed out");
        }
        self.0.write().logout();
    }

    pub fn current(&self) -> Session {
        self.0.cloned()
    }
}

pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

/// Credential check used by the login form.
#[derive(Clone)]
pub struct Verifier(Rc<dyn CredentialVerifier>);

impl Verifier {
    pub fn new(verifier: impl CredentialVerifier + 'static) -> Self {
        Self(Rc::new(verifier))
    }

    pub fn demo() -> Self {
        Self::new(DemoVerifier)
    }

    pub fn verify(&self, identifier: &str, secret: &SecretString) -> types::Result<User> {
        self.0.verify(identifier, secret)
    }
}

pub fn use_verifier() -> Verifier {
    use_context::<Verifier>()
}

/// Runs the route guard for `page`.
///
/// Returns the placeholder to show while the history entry is replaced, or
/// `None` when the page may render.
pub fn enforce_guard(page: Page, session: &Session) -> Option<Element> {
    match types::guard(page, session) {
        Access::Render => None,
        Access::Redirect(target) => {
            tracing::debug!(from = page.path(), to = target.path(), "guard redirect");
            navigator().replace(Route::from(target));
            Some(rsx! {
                div { class: "loading", "Redirecting..." }
            })
        }
    }
}

#[component]
fn NavLink(page: Page, active: bool) -> Element {
    let class = if active { "nav-item active" } else { "nav-item" };

    rsx! {
        Link {
            to: Route::from(page),
            class,
            ui::PageIcon { page }
            "{page.label()}"
        }
    }
}

#[component]
fn AuthenticatedLayout() -> Element {
    let mut session = use_session();
    let route: Route = use_route();
    let current = session.current();

    let Some(page) = route.page() else {
        return rsx! {};
    };
    if let Some(redirect) = enforce_guard(page, &current) {
        return redirect;
    }

    let current_page = page.id();
    let profile = Profile::from_user(current.user());

    rsx! {
        div { class: "dashboard-layout",
            // Sidebar
            aside { class: "sidebar",
                div { class: "sidebar-header",
                    ui::Logo { compact: true }
                }
                nav { class: "sidebar-nav",
                    for item in NAVIGATION {
                        NavLink {
                            key: "{item.id()}",
                            page: item,
                            active: types::active_item(current_page) == Some(item),
                        }
                    }
                }
                div { class: "sidebar-footer",
                    div { class: "user-profile",
                        div { class: "user-avatar", "{profile.initial}" }
                        div { class: "user-info",
                            div { class: "user-name", "{profile.name}" }
                            div { class: "user-role", "{profile.role}" }
                        }
                    }
                }
            }
            // Main content
            main { class: "main-content",
                div { class: "top-bar",
                    div { class: "top-bar-left" }
                    div { class: "top-bar-right",
                        // No localisation yet; the toggle only shows the language.
                        button { r#type: "button", class: "language-selector",
                            ui::Icon { glyph: ui::Glyph::Globe }
                            "EN"
                        }
                        button {
                            r#type: "button",
                            class: "logout-btn",
                            onclick: move |_| {
                                session.logout();
                                navigator().replace(Route::Login {});
                            },
                            ui::Icon { glyph: ui::Glyph::LogOut }
                            "Logout"
                        }
                    }
                }
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "unknown path");
    navigator().replace(Route::Login {});

    rsx! {
        div { class: "loading", "Redirecting..." }
    }
}
