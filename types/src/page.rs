use crate::Session;

/// Every screen the app can show, with its path and access rule.
///
/// This is the one route registry: the guard, the sidebar and the dashboard
/// cards all read from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    Dashboard,
    UserManagement,
    Analytics,
    DataManagement,
    Settings,
}

/// Sidebar entries, in display order.
pub const NAVIGATION: [Page; 5] = [
    Page::Dashboard,
    Page::UserManagement,
    Page::Analytics,
    Page::DataManagement,
    Page::Settings,
];

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Login,
        Page::Dashboard,
        Page::UserManagement,
        Page::Analytics,
        Page::DataManagement,
        Page::Settings,
    ];

    /// Tag compared against the shell's current page.
    pub fn id(self) -> &'static str {
        match self {
            Page::Login => "login",
            Page::Dashboard => "dashboard",
            Page::UserManagement => "user-management",
            Page::Analytics => "analytics",
            Page::DataManagement => "data-management",
            Page::Settings => "settings",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Login => "Login",
            Page::Dashboard => "Dashboard",
            Page::UserManagement => "User Management",
            Page::Analytics => "Analytics",
            Page::DataManagement => "Data Management",
            Page::Settings => "Settings",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Page::Login => "/",
            Page::Dashboard => "/dashboard",
            Page::UserManagement => "/user-management",
            Page::Analytics => "/analytics",
            Page::DataManagement => "/data-management",
            Page::Settings => "/settings",
        }
    }

    pub fn requires_auth(self) -> bool {
        !matches!(self, Page::Login)
    }

    pub fn from_path(path: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.path() == path)
    }
}

/// Outcome of checking a navigation request against the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Render,
    /// Replace the current history entry with this page.
    Redirect(Page),
}

pub fn guard(page: Page, session: &Session) -> Access {
    match (page.requires_auth(), session.is_authenticated()) {
        (true, true) | (false, false) => Access::Render,
        (true, false) => Access::Redirect(Page::Login),
        (false, true) => Access::Redirect(Page::Dashboard),
    }
}

/// The sidebar entry whose id equals `current_page`, if any.
pub fn active_item(current_page: &str) -> Option<Page> {
    NAVIGATION.into_iter().find(|page| page.id() == current_page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::User;

    fn logged_in() -> Session {
        Session::LoggedIn(User::new("Admin User", "admin@harvestnet.com", "Administrator"))
    }

    fn guarded_pages() -> impl Iterator<Item = Page> {
        Page::ALL.into_iter().filter(|page| page.requires_auth())
    }

    #[test]
    fn only_login_is_public() {
        assert_eq!(guarded_pages().count(), 5);
        assert!(!Page::Login.requires_auth());
    }

    #[test]
    fn logged_out_never_sees_guarded_pages() {
        for page in guarded_pages() {
            assert_eq!(guard(page, &Session::LoggedOut), Access::Redirect(Page::Login));
        }
        assert_eq!(guard(Page::Login, &Session::LoggedOut), Access::Render);
    }

    #[test]
    fn logged_in_skips_login() {
        let session = logged_in();
        assert_eq!(guard(Page::Login, &session), Access::Redirect(Page::Dashboard));
        for page in guarded_pages() {
            assert_eq!(guard(page, &session), Access::Render);
        }
    }

    #[test]
    fn logout_then_guarded_page_redirects_home() {
        for page in guarded_pages() {
            let mut session = logged_in();
            session.logout();
            assert_eq!(guard(page, &session), Access::Redirect(Page::Login));
            assert_eq!(Page::Login.path(), "/");
        }
    }

    #[test]
    fn paths_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
        assert_eq!(Page::from_path("/login"), None);
        assert_eq!(Page::from_path("/dashboard/"), None);
    }

    #[test]
    fn navigation_order_and_labels() {
        let labels: Vec<_> = NAVIGATION.iter().map(|page| page.label()).collect();
        assert_eq!(
            labels,
            ["Dashboard", "User Management", "Analytics", "Data Management", "Settings"]
        );
    }

    #[test]
    fn exactly_one_entry_is_active_per_tag() {
        for page in NAVIGATION {
            let active: Vec<_> = NAVIGATION.iter().filter(|p| p.id() == page.id()).collect();
            assert_eq!(active, [&page]);
            assert_eq!(active_item(page.id()), Some(page));
        }
    }

    #[test]
    fn unknown_tag_has_no_active_entry() {
        assert_eq!(active_item("reports"), None);
        assert_eq!(active_item(""), None);
        assert_eq!(active_item(Page::Login.id()), None);
    }
}
