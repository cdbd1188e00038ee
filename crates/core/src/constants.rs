/// Constants used throughout the curator codebase
// Environment variable names
pub const ELASTICSEARCH_HOST_VAR: &str = "ELASTICSEARCH_HOST";
pub const PERCENTAGE_THRESHOLD_VAR: &str = "PERCENTAGE_THRESHOLD";
pub const INDEX_NAME_PREFIXES_VAR: &str = "INDEX_NAME_PREFIXES";
pub const DRY_RUN_VAR: &str = "DRY_RUN";
pub const RETENTION_DAYS_VAR: &str = "RETENTION_DAYS";
pub const CURATOR_POLICY_VAR: &str = "CURATOR_POLICY";
pub const CURATOR_LOG_FORMAT_VAR: &str = "CURATOR_LOG_FORMAT";
pub const ELASTICSEARCH_CA_CERT_VAR: &str = "ELASTICSEARCH_CA_CERT";
pub const ELASTICSEARCH_CLIENT_CERT_VAR: &str = "ELASTICSEARCH_CLIENT_CERT";
pub const ELASTICSEARCH_CLIENT_KEY_VAR: &str = "ELASTICSEARCH_CLIENT_KEY";
pub const ELASTICSEARCH_TIMEOUT_VAR: &str = "ELASTICSEARCH_TIMEOUT_SECS";

// Defaults
pub const DEFAULT_ELASTICSEARCH_HOST: &str = "elasticsearch:9200";
pub const DEFAULT_PERCENTAGE_THRESHOLD: u32 = 80;
pub const DEFAULT_INDEX_NAME_PREFIXES: &str = "infra-,app-,audit-";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Certificate material mounted into the curator pod
pub const DEFAULT_CA_CERT_PATH: &str = "/home/data/ca";
pub const DEFAULT_CLIENT_CERT_PATH: &str = "/home/data/cert";
pub const DEFAULT_CLIENT_KEY_PATH: &str = "/home/data/key";

/// Upper bound accepted by configuration for the disk percentage
pub const MAX_PERCENTAGE_THRESHOLD: u32 = 100;

/// Upper bound accepted by configuration for the retention window
pub const MAX_RETENTION_DAYS: u32 = 36_500;

pub const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
