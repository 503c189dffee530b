use eyre::{Result, WrapErr, eyre};
use std::env;
use tracing_subscriber::EnvFilter;
use types::Page;

const DEFAULT_LOG_FILTER: &str = "info";
const DEFAULT_HEALTH_PATH: &str = "/healthz";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `EnvFilter` directive for the server's tracing output.
    pub log_filter: String,
    pub health_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let log_filter = lookup("HARVESTNET_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.into());
        EnvFilter::try_new(&log_filter)
            .wrap_err_with(|| format!("invalid HARVESTNET_LOG directive: {log_filter}"))?;

        let health_path =
            lookup("HARVESTNET_HEALTH_PATH").unwrap_or_else(|| DEFAULT_HEALTH_PATH.into());
        validate_health_path(&health_path)
            .wrap_err_with(|| format!("invalid HARVESTNET_HEALTH_PATH: {health_path:?}"))?;

        Ok(Self {
            log_filter,
            health_path,
        })
    }
}

/// The health path is registered verbatim on an axum router that is merged
/// with the app's routes, so it must be a plain static path of its own.
fn validate_health_path(path: &str) -> Result<()> {
    if path.len() < 2 || !path.starts_with('/') {
        return Err(eyre!("must be an absolute path below /"));
    }
    if path.contains(['{', '}', '*']) {
        return Err(eyre!("must not contain route captures or wildcards"));
    }
    if path.split('/').any(|segment| segment.starts_with(':')) {
        return Err(eyre!("segments must not start with ':'"));
    }
    if let Some(page) = Page::from_path(path.trim_end_matches('/')) {
        return Err(eyre!("collides with the {} page", page.label()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.health_path, "/healthz");
    }

    #[test]
    fn reads_overrides() {
        let config = load(&[
            ("HARVESTNET_LOG", "debug,axum=warn"),
            ("HARVESTNET_HEALTH_PATH", "/status"),
        ])
        .unwrap();
        assert_eq!(config.log_filter, "debug,axum=warn");
        assert_eq!(config.health_path, "/status");
    }

    #[test]
    fn rejects_relative_health_path() {
        assert!(load(&[("HARVESTNET_HEALTH_PATH", "healthz")]).is_err());
        assert!(load(&[("HARVESTNET_HEALTH_PATH", "/")]).is_err());
        assert!(load(&[("HARVESTNET_HEALTH_PATH", "")]).is_err());
    }

    #[test]
    fn rejects_route_syntax_in_health_path() {
        for path in ["/:status", "/status/:id", "/a/{", "/a/{id}", "/a}", "/*rest", "/files/*"] {
            let err = load(&[("HARVESTNET_HEALTH_PATH", path)]).unwrap_err();
            assert!(
                format!("{err:?}").contains("HARVESTNET_HEALTH_PATH"),
                "{path:?} should be rejected"
            );
        }
        assert!(load(&[("HARVESTNET_HEALTH_PATH", "/ready:now")]).is_ok());
    }

    #[test]
    fn rejects_health_path_on_app_pages() {
        for path in ["/dashboard", "/settings", "/analytics/"] {
            assert!(load(&[("HARVESTNET_HEALTH_PATH", path)]).is_err(), "{path:?}");
        }
    }

    #[test]
    fn accepted_health_paths_register_without_panicking() {
        for path in ["/healthz", "/status", "/internal/health", "/ready:now"] {
            let config = load(&[("HARVESTNET_HEALTH_PATH", path)]).unwrap();
            let _ = crate::routes(&config);
        }
    }

    #[test]
    fn rejects_bad_log_filter() {
        let err = load(&[("HARVESTNET_LOG", "server=loud")]).unwrap_err();
        assert!(err.to_string().contains("HARVESTNET_LOG"));
    }
}
