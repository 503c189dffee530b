use secrecy::{ExposeSecret, SecretString};

use crate::{Error, Result, User};

/// Turns a login form submission into a [`User`].
///
/// The web app looks the verifier up from context, so swapping the demo table
/// for a real identity service only touches the app root.
pub trait CredentialVerifier {
    fn verify(&self, identifier: &str, secret: &SecretString) -> Result<User>;
}

/// A hardcoded account offered on the login screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoAccount {
    /// Short label shown in the demo credentials box.
    pub label: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

pub const DEMO_ACCOUNTS: [DemoAccount; 2] = [
    DemoAccount {
        label: "Admin",
        email: "admin@harvestnet.com",
        password: "password123",
        name: "Admin User",
        role: "Administrator",
    },
    DemoAccount {
        label: "Farmer",
        email: "farmer@harvestnet.com",
        password: "password123",
        name: "Farmer User",
        role: "Farmer",
    },
];

/// Accepts exactly the pairs in [`DEMO_ACCOUNTS`].
///
/// NOT FOR PRODUCTION: plaintext comparison against a table compiled into the
/// binary, no hashing and no rate limiting.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoVerifier;

impl CredentialVerifier for DemoVerifier {
    fn verify(&self, identifier: &str, secret: &SecretString) -> Result<User> {
        DEMO_ACCOUNTS
            .iter()
            .find(|account| account.email == identifier && account.password == secret.expose_secret())
            .map(|account| User::new(account.name, identifier, account.role))
            .ok_or(Error::InvalidCredentials)
    }
}

/// Runs the demo credential check.
pub fn check(identifier: &str, secret: &SecretString) -> Result<User> {
    DemoVerifier.verify(identifier, secret)
}

/// Shortens a submitted identifier for logs.
///
/// Keeps the first character and the domain of an email-shaped value and
/// masks everything else, since the field sometimes receives a password.
pub fn redact_identifier(identifier: &str) -> String {
    match identifier.split_once('@') {
        Some((local, domain)) if !domain.is_empty() && !domain.contains('@') => {
            match local.chars().next() {
                Some(first) => format!("{first}***@{domain}"),
                None => format!("***@{domain}"),
            }
        }
        _ => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::from(s)
    }

    #[test]
    fn admin_pair_yields_administrator() {
        let user = check("admin@harvestnet.com", &secret("password123")).unwrap();
        assert_eq!(user.name, "Admin User");
        assert_eq!(user.email, "admin@harvestnet.com");
        assert_eq!(user.role, "Administrator");
    }

    #[test]
    fn farmer_pair_yields_farmer() {
        let user = check("farmer@harvestnet.com", &secret("password123")).unwrap();
        assert_eq!(user, User::new("Farmer User", "farmer@harvestnet.com", "Farmer"));
    }

    #[test]
    fn other_pairs_are_rejected() {
        let cases = [
            ("admin@harvestnet.com", "password"),
            ("admin@harvestnet.com", "Password123"),
            ("admin@harvestnet.com", ""),
            ("Admin@harvestnet.com", "password123"),
            (" admin@harvestnet.com", "password123"),
            ("farmer@harvestnet.com", "password1234"),
            ("buyer@harvestnet.com", "password123"),
            ("", "password123"),
            ("", ""),
        ];

        for (identifier, password) in cases {
            assert_eq!(
                check(identifier, &secret(password)),
                Err(Error::InvalidCredentials),
                "{identifier:?} / {password:?} should be rejected"
            );
        }
    }

    #[test]
    fn secret_is_not_leaked_by_debug() {
        let rendered = format!("{:?}", secret("password123"));
        assert!(!rendered.contains("password123"));
    }

    #[test]
    fn redacts_identifiers_for_logging() {
        assert_eq!(redact_identifier("admin@harvestnet.com"), "a***@harvestnet.com");
        assert_eq!(redact_identifier("@harvestnet.com"), "***@harvestnet.com");
        assert_eq!(redact_identifier("password123"), "***");
        assert_eq!(redact_identifier("pass@"), "***");
        assert_eq!(redact_identifier("p@ss@word"), "***");
        assert_eq!(redact_identifier(""), "***");
        assert!(!redact_identifier("hunter2@example.com").contains("hunter2"));
    }

    #[test]
    fn rejection_message_matches_login_alert() {
        assert_eq!(
            Error::InvalidCredentials.to_string(),
            "Invalid credentials. Please use the demo credentials provided."
        );
    }
}
