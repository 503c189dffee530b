/// A startup failure the Dioxus launcher can report.
///
/// Carries the `eyre` report's Debug rendering so the context chain survives.
#[derive(Debug, Clone)]
pub struct Error {
    pub message: String,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

impl From<eyre::Report> for Error {
    fn from(report: eyre::Report) -> Self {
        Self {
            message: format!("{:?}", report),
        }
    }
}
