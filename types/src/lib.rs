mod credentials;
pub mod dashboard;
mod error;
pub mod login;
mod page;
mod profile;
mod session;
mod user;

pub use credentials::{
    CredentialVerifier, DEMO_ACCOUNTS, DemoAccount, DemoVerifier, check, redact_identifier,
};
pub use error::{Error, Result};
pub use page::{Access, NAVIGATION, Page, active_item, guard};
pub use profile::Profile;
pub use session::Session;
pub use user::User;
