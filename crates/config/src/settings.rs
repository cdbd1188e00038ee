//! Immutable settings for one curator process
//!
//! `Settings` is the single source of truth for configuration. It is built
//! by [`crate::SettingsLoader`] and never changes afterwards, so it can be
//! shared freely behind an `Arc`.

use curator_core::PolicyKind;
use curator_utils::LogFormat;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Validated configuration for a curator run
#[derive(Debug, Clone)]
pub struct Settings {
    /// How to reach the cluster
    pub elasticsearch: ElasticsearchSettings,

    /// Share of total cluster disk the managed indices may use, 0-100
    pub percentage_threshold: u32,

    /// Index name prefixes to manage, e.g. `infra-`
    pub index_prefixes: Vec<String>,

    /// Which retention rules apply
    pub policy: PolicyKind,

    /// Age window for the age policy, in days
    pub retention_days: Option<u32>,

    /// Process-level behavior
    pub runtime: RuntimeSettings,
}

/// Connection settings for the Elasticsearch cluster
#[derive(Debug, Clone)]
pub struct ElasticsearchSettings {
    /// Base URL, always with a scheme
    pub url: Url,

    /// Certificate material; each file is optional
    pub tls: TlsSettings,

    /// Per-request timeout
    pub timeout: Duration,
}

/// PEM files used to authenticate to the cluster
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TlsSettings {
    pub ca_cert: Option<PathBuf>,
    pub client_cert: Option<PathBuf>,
    pub client_key: Option<PathBuf>,
}

/// Runtime configuration settings that affect how curator operates
#[derive(Debug, Clone, Copy, Default)]
pub struct RuntimeSettings {
    /// Compute and report the plan without deleting anything
    pub dry_run: bool,

    /// Log output format
    pub log_format: LogFormat,
}

impl Settings {
    /// Endpoint as a string without a trailing slash
    pub fn endpoint(&self) -> String {
        self.elasticsearch.url.as_str().trim_end_matches('/').to_string()
    }

    pub fn dry_run(&self) -> bool {
        self.runtime.dry_run
    }
}

impl TlsSettings {
    /// True when both halves of a client identity are configured
    pub fn has_client_identity(&self) -> bool {
        self.client_cert.is_some() && self.client_key.is_some()
    }
}
