use crate::User;

const FALLBACK_NAME: &str = "Admin User";
const FALLBACK_ROLE: &str = "Administrator";

/// What the sidebar footer shows for the signed-in user.
///
/// The guard keeps anonymous sessions out of the shell, but the footer still
/// renders the admin placeholder when no user is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub initial: String,
    pub name: String,
    pub role: String,
}

impl Profile {
    pub fn from_user(user: Option<&User>) -> Self {
        let name = user
            .map(|u| u.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(FALLBACK_NAME);
        let role = user
            .map(|u| u.role.as_str())
            .filter(|role| !role.is_empty())
            .unwrap_or(FALLBACK_ROLE);
        let initial = name.chars().next().unwrap_or('A').to_string();

        Self {
            initial,
            name: name.to_string(),
            role: role.to_string(),
        }
    }
}
