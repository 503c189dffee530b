mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod sections;
pub use sections::{Analytics, DataManagement, Settings, UserManagement};
