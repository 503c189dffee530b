use crate::User;

/// Who, if anyone, is signed in to this tab.
///
/// Lives only in memory; a reload starts over at [`Session::LoggedOut`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn(User),
}

impl Session {
    pub fn login(&mut self, user: User) {
        *self = Session::LoggedIn(user);
    }

    pub fn logout(&mut self) {
        *self = Session::LoggedOut;
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::LoggedIn(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Session::LoggedIn(user) => Some(user),
            Session::LoggedOut => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn farmer() -> User {
        User::new("Farmer User", "farmer@harvestnet.com", "Farmer")
    }

    #[test]
    fn starts_logged_out() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert_eq!(session.user(), None);
    }

    #[test]
    fn login_then_logout() {
        let mut session = Session::default();

        session.login(farmer());
        assert!(session.is_authenticated());
        assert_eq!(session.user(), Some(&farmer()));

        session.logout();
        assert!(!session.is_authenticated());
        assert_eq!(session.user(), None);
    }

    #[test]
    fn login_replaces_previous_user() {
        let admin = User::new("Admin User", "admin@harvestnet.com", "Administrator");
        let mut session = Session::LoggedIn(admin);

        session.login(farmer());
        assert_eq!(session.user(), Some(&farmer()));
    }

    #[test]
    fn logout_when_logged_out_is_a_no_op() {
        let mut session = Session::default();
        session.logout();
        assert_eq!(session, Session::LoggedOut);
    }
}
