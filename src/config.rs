use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::infra::http::client::DEFAULT_API_BASE_URL;

pub const ENV_API_BASE_URL: &str = "DASHBOARD_API_BASE_URL";
pub const ENV_DB_PATH: &str = "DASHBOARD_DB_PATH";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "DASHBOARD_HTTP_TIMEOUT_SECS";
pub const ENV_LOG_JSON: &str = "DASHBOARD_LOG_JSON";

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub api_base_url: String,
    pub db_path: PathBuf,
    pub http_timeout: Duration,
    pub log_json: bool,
}

impl DashboardConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Resolve every setting through `lookup`, falling back to built-in defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_base_url = lookup(ENV_API_BASE_URL)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let db_path = match lookup(ENV_DB_PATH).filter(|value| !value.trim().is_empty()) {
            Some(path) => PathBuf::from(path),
            None => default_db_path()?,
        };

        let http_timeout = match lookup(ENV_HTTP_TIMEOUT_SECS) {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .with_context(|| format!("{ENV_HTTP_TIMEOUT_SECS} must be whole seconds"))?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        };

        let log_json = lookup(ENV_LOG_JSON)
            .map(|raw| parse_bool(&raw))
            .unwrap_or(false);

        Ok(Self {
            api_base_url,
            db_path,
            http_timeout,
            log_json,
        })
    }
}

pub fn default_db_path() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("com", "hellhbbd", "comment-dashboard")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    Ok(project_dirs.data_local_dir().join("dashboard.sqlite"))
}

fn parse_bool(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
