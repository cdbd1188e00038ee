//! Settings loader
//!
//! Reads the environment variables the curator has always used, lets command
//! line flags override them, and validates the result once.

use crate::settings::{ElasticsearchSettings, RuntimeSettings, Settings, TlsSettings};
use curator_core::{
    constants::*,
    Error, PolicyKind, Result,
};
use curator_utils::LogFormat;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Builder that collects raw configuration and validates it into [`Settings`]
#[derive(Debug, Clone, Default)]
pub struct SettingsLoader {
    host: Option<String>,
    percentage_threshold: Option<u32>,
    index_prefixes: Option<Vec<String>>,
    policy: Option<PolicyKind>,
    retention_days: Option<u32>,
    dry_run: Option<bool>,
    log_format: Option<LogFormat>,
    timeout_secs: Option<u64>,
    ca_cert: Option<PathBuf>,
    client_cert: Option<PathBuf>,
    client_key: Option<PathBuf>,
}

impl SettingsLoader {
    /// Create a loader with nothing set; `build` fills in defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Read settings from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Optional variables treat an empty value as unset
        let optional = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut loader = Self::new();

        loader.host = lookup(ELASTICSEARCH_HOST_VAR);
        loader.index_prefixes = lookup(INDEX_NAME_PREFIXES_VAR).map(|raw| split_prefixes(&raw));

        if let Some(raw) = lookup(PERCENTAGE_THRESHOLD_VAR) {
            loader.percentage_threshold = Some(raw.trim().parse().map_err(|_| {
                Error::configuration(format!(
                    "Percentage threshold must be an integer between 0 and {MAX_PERCENTAGE_THRESHOLD} ({PERCENTAGE_THRESHOLD_VAR}='{raw}')"
                ))
            })?);
        }

        if let Some(raw) = optional(DRY_RUN_VAR) {
            loader.dry_run = Some(parse_bool(&raw).ok_or_else(|| {
                Error::configuration(format!(
                    "Dry run flag is not a boolean ({DRY_RUN_VAR}='{raw}')"
                ))
            })?);
        }

        if let Some(raw) = optional(RETENTION_DAYS_VAR) {
            loader.retention_days = Some(raw.trim().parse().map_err(|_| {
                Error::configuration(format!(
                    "Retention period in days is not a number ({RETENTION_DAYS_VAR}='{raw}')"
                ))
            })?);
        }

        if let Some(raw) = optional(CURATOR_POLICY_VAR) {
            loader.policy = Some(raw.parse()?);
        }

        if let Some(raw) = optional(CURATOR_LOG_FORMAT_VAR) {
            loader.log_format = Some(raw.parse()?);
        }

        if let Some(raw) = optional(ELASTICSEARCH_TIMEOUT_VAR) {
            loader.timeout_secs = Some(raw.trim().parse().map_err(|_| {
                Error::configuration(format!(
                    "Request timeout is not a number of seconds ({ELASTICSEARCH_TIMEOUT_VAR}='{raw}')"
                ))
            })?);
        }

        loader.ca_cert = optional(ELASTICSEARCH_CA_CERT_VAR).map(PathBuf::from);
        loader.client_cert = optional(ELASTICSEARCH_CLIENT_CERT_VAR).map(PathBuf::from);
        loader.client_key = optional(ELASTICSEARCH_CLIENT_KEY_VAR).map(PathBuf::from);

        Ok(loader)
    }

    /// Set the Elasticsearch host, with or without a scheme
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn percentage_threshold(mut self, percentage: u32) -> Self {
        self.percentage_threshold = Some(percentage);
        self
    }

    pub fn index_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.index_prefixes = Some(prefixes.iter().flat_map(|p| split_prefixes(p)).collect());
        self
    }

    pub fn policy(mut self, policy: PolicyKind) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn retention_days(mut self, days: u32) -> Self {
        self.retention_days = Some(days);
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = Some(dry_run);
        self
    }

    pub fn log_format(mut self, format: LogFormat) -> Self {
        self.log_format = Some(format);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = Some(timeout.as_secs());
        self
    }

    pub fn ca_cert(mut self, path: impl Into<PathBuf>) -> Self {
        self.ca_cert = Some(path.into());
        self
    }

    pub fn client_identity(mut self, cert: impl Into<PathBuf>, key: impl Into<PathBuf>) -> Self {
        self.client_cert = Some(cert.into());
        self.client_key = Some(key.into());
        self
    }

    /// Validate everything and produce immutable settings
    pub fn build(self) -> Result<Settings> {
        let host = self
            .host
            .unwrap_or_else(|| DEFAULT_ELASTICSEARCH_HOST.to_string());
        let url = parse_host(&host)?;

        let percentage_threshold = self
            .percentage_threshold
            .unwrap_or(DEFAULT_PERCENTAGE_THRESHOLD);
        if percentage_threshold > MAX_PERCENTAGE_THRESHOLD {
            return Err(Error::configuration(format!(
                "Percentage threshold must be between 0 and {MAX_PERCENTAGE_THRESHOLD} ({PERCENTAGE_THRESHOLD_VAR}={percentage_threshold})"
            )));
        }

        let index_prefixes = self
            .index_prefixes
            .unwrap_or_else(|| split_prefixes(DEFAULT_INDEX_NAME_PREFIXES));
        if index_prefixes.is_empty() || index_prefixes.iter().any(|p| p.is_empty()) {
            return Err(Error::configuration(format!(
                "Index name prefix is empty ({INDEX_NAME_PREFIXES_VAR}='{}')",
                index_prefixes.join(",")
            )));
        }

        if let Some(days) = self.retention_days {
            if days < 1 {
                return Err(Error::configuration(format!(
                    "Retention period in days is too short ({RETENTION_DAYS_VAR}={days})"
                )));
            }
            if days > MAX_RETENTION_DAYS {
                return Err(Error::configuration(format!(
                    "Retention period in days is too long ({RETENTION_DAYS_VAR}={days}, at most {MAX_RETENTION_DAYS})"
                )));
            }
        }

        let policy = self.policy.unwrap_or_default();
        if policy.needs_retention_window() && self.retention_days.is_none() {
            return Err(Error::configuration(format!(
                "Retention policy '{policy}' requires {RETENTION_DAYS_VAR} to be set"
            )));
        }

        let timeout_secs = self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(Error::configuration(format!(
                "Request timeout must be at least one second ({ELASTICSEARCH_TIMEOUT_VAR}=0)"
            )));
        }

        let tls = TlsSettings {
            ca_cert: resolve_cert_path(self.ca_cert, DEFAULT_CA_CERT_PATH, ELASTICSEARCH_CA_CERT_VAR)?,
            client_cert: resolve_cert_path(
                self.client_cert,
                DEFAULT_CLIENT_CERT_PATH,
                ELASTICSEARCH_CLIENT_CERT_VAR,
            )?,
            client_key: resolve_cert_path(
                self.client_key,
                DEFAULT_CLIENT_KEY_PATH,
                ELASTICSEARCH_CLIENT_KEY_VAR,
            )?,
        };
        if tls.client_cert.is_some() != tls.client_key.is_some() {
            return Err(Error::configuration(format!(
                "Client certificate and key must be configured together ({ELASTICSEARCH_CLIENT_CERT_VAR}, {ELASTICSEARCH_CLIENT_KEY_VAR})"
            )));
        }

        let settings = Settings {
            elasticsearch: ElasticsearchSettings {
                url,
                tls,
                timeout: Duration::from_secs(timeout_secs),
            },
            percentage_threshold,
            index_prefixes,
            policy,
            retention_days: self.retention_days,
            runtime: RuntimeSettings {
                dry_run: self.dry_run.unwrap_or(false),
                log_format: self.log_format.unwrap_or_default(),
            },
        };

        tracing::debug!(
            endpoint = %settings.endpoint(),
            percentage = settings.percentage_threshold,
            prefixes = ?settings.index_prefixes,
            policy = %settings.policy,
            "Loaded settings"
        );

        Ok(settings)
    }
}

fn split_prefixes(raw: &str) -> Vec<String> {
    raw.split(',').map(|p| p.trim().to_string()).collect()
}

/// Accepts the spellings commonly used in container manifests
fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_host(host: &str) -> Result<Url> {
    let host = host.trim();
    if host.is_empty() {
        return Err(Error::configuration(format!(
            "Elasticsearch host is empty ({ELASTICSEARCH_HOST_VAR}='')"
        )));
    }

    let candidate = if host.contains("://") {
        host.to_string()
    } else {
        format!("https://{host}")
    };

    let url = Url::parse(&candidate).map_err(|e| {
        Error::configuration(format!(
            "Elasticsearch host is not a valid address ({ELASTICSEARCH_HOST_VAR}='{host}'): {e}"
        ))
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::configuration(format!(
            "Unsupported scheme '{other}' in {ELASTICSEARCH_HOST_VAR}"
        ))),
    }
}

/// Explicit paths must exist; the default mount is used only when present
fn resolve_cert_path(explicit: Option<PathBuf>, default: &str, var: &str) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) if path.is_file() => Ok(Some(path)),
        Some(path) => Err(Error::configuration(format!(
            "Certificate file not found ({var}='{}')",
            path.display()
        ))),
        None => {
            let default = Path::new(default);
            Ok(default.is_file().then(|| default.to_path_buf()))
        }
    }
}
