//! Unit tests for settings loading

#[cfg(test)]
mod tests {
    use crate::SettingsLoader;
    use curator_core::{Error, PolicyKind};
    use curator_utils::LogFormat;
    use std::collections::HashMap;
    use std::time::Duration;
    use tempfile::TempDir;

    fn load(vars: &[(&str, &str)]) -> curator_core::Result<crate::Settings> {
        let env: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SettingsLoader::from_lookup(|key| env.get(key).cloned())?.build()
    }

    fn config_message(result: curator_core::Result<crate::Settings>) -> String {
        match result {
            Err(err @ Error::Configuration { .. }) => err.to_string(),
            other => panic!("expected a configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_defaults() {
        let settings = load(&[]).unwrap();

        assert_eq!(settings.endpoint(), "https://elasticsearch:9200");
        assert_eq!(settings.percentage_threshold, 80);
        assert_eq!(settings.index_prefixes, vec!["infra-", "app-", "audit-"]);
        assert_eq!(settings.policy, PolicyKind::Size);
        assert_eq!(settings.retention_days, None);
        assert!(!settings.dry_run());
        assert_eq!(settings.runtime.log_format, LogFormat::Json);
        assert_eq!(settings.elasticsearch.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_reads_environment() {
        let settings = load(&[
            ("ELASTICSEARCH_HOST", "http://localhost:9200/"),
            ("PERCENTAGE_THRESHOLD", "65"),
            ("INDEX_NAME_PREFIXES", " logs- , metrics-"),
            ("DRY_RUN", "yes"),
            ("RETENTION_DAYS", "14"),
            ("CURATOR_POLICY", "size+age"),
            ("CURATOR_LOG_FORMAT", "pretty"),
            ("ELASTICSEARCH_TIMEOUT_SECS", "5"),
        ])
        .unwrap();

        assert_eq!(settings.endpoint(), "http://localhost:9200");
        assert_eq!(settings.percentage_threshold, 65);
        assert_eq!(settings.index_prefixes, vec!["logs-", "metrics-"]);
        assert!(settings.dry_run());
        assert_eq!(settings.retention_days, Some(14));
        assert_eq!(settings.policy, PolicyKind::SizeAndAge);
        assert_eq!(settings.runtime.log_format, LogFormat::Pretty);
        assert_eq!(settings.elasticsearch.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_dry_run_spellings() {
        for (raw, expected) in [
            ("1", true),
            ("TRUE", true),
            ("on", true),
            ("0", false),
            ("false", false),
            ("Off", false),
            ("", false),
        ] {
            let settings = load(&[("DRY_RUN", raw)]).unwrap();
            assert_eq!(settings.dry_run(), expected, "DRY_RUN='{raw}'");
        }
    }

    #[test]
    fn test_dry_run_rejects_garbage() {
        let message = config_message(load(&[("DRY_RUN", "maybe")]));
        assert!(message.contains("DRY_RUN='maybe'"));
    }

    #[test]
    fn test_percentage_out_of_range() {
        let message = config_message(load(&[("PERCENTAGE_THRESHOLD", "101")]));
        assert!(message.contains("PERCENTAGE_THRESHOLD=101"));

        let message = config_message(load(&[("PERCENTAGE_THRESHOLD", "-5")]));
        assert!(message.contains("PERCENTAGE_THRESHOLD"));
    }

    #[test]
    fn test_percentage_bounds_accepted() {
        assert_eq!(load(&[("PERCENTAGE_THRESHOLD", "0")]).unwrap().percentage_threshold, 0);
        assert_eq!(load(&[("PERCENTAGE_THRESHOLD", "100")]).unwrap().percentage_threshold, 100);
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let message = config_message(load(&[("INDEX_NAME_PREFIXES", "")]));
        assert!(message.contains("Index name prefix is empty (INDEX_NAME_PREFIXES='')"));

        let message = config_message(load(&[("INDEX_NAME_PREFIXES", "infra-,,app-")]));
        assert!(message.contains("Index name prefix is empty"));
    }

    #[test]
    fn test_empty_host_rejected() {
        let message = config_message(load(&[("ELASTICSEARCH_HOST", "  ")]));
        assert!(message.contains("Elasticsearch host is empty (ELASTICSEARCH_HOST='')"));
    }

    #[test]
    fn test_host_scheme_handling() {
        let settings = load(&[("ELASTICSEARCH_HOST", "es.internal:9243")]).unwrap();
        assert_eq!(settings.elasticsearch.url.scheme(), "https");

        let message = config_message(load(&[("ELASTICSEARCH_HOST", "ftp://es.internal")]));
        assert!(message.contains("Unsupported scheme 'ftp'"));
    }

    #[test]
    fn test_age_policy_requires_retention_days() {
        let message = config_message(load(&[("CURATOR_POLICY", "age")]));
        assert!(message.contains("RETENTION_DAYS"));

        let message = config_message(load(&[
            ("CURATOR_POLICY", "age"),
            ("RETENTION_DAYS", "0"),
        ]));
        assert!(message.contains("RETENTION_DAYS=0"));

        let settings = load(&[("CURATOR_POLICY", "age"), ("RETENTION_DAYS", "7")]).unwrap();
        assert_eq!(settings.policy, PolicyKind::Age);
    }

    #[test]
    fn test_retention_days_upper_bound() {
        let message = config_message(load(&[
            ("CURATOR_POLICY", "age"),
            ("RETENTION_DAYS", "100000000"),
        ]));
        assert!(message.contains("too long"));
        assert!(message.contains("RETENTION_DAYS=100000000"));

        let settings = load(&[("CURATOR_POLICY", "age"), ("RETENTION_DAYS", "36500")]).unwrap();
        assert_eq!(settings.retention_days, Some(36_500));
    }

    #[test]
    fn test_unknown_policy_rejected() {
        assert!(load(&[("CURATOR_POLICY", "lru")]).is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let message = config_message(load(&[("ELASTICSEARCH_TIMEOUT_SECS", "0")]));
        assert!(message.contains("ELASTICSEARCH_TIMEOUT_SECS"));
    }

    #[test]
    fn test_builder_overrides_environment() {
        let env: HashMap<String, String> = [
            ("PERCENTAGE_THRESHOLD".to_string(), "50".to_string()),
            ("DRY_RUN".to_string(), "false".to_string()),
        ]
        .into_iter()
        .collect();

        let settings = SettingsLoader::from_lookup(|key| env.get(key).cloned())
            .unwrap()
            .percentage_threshold(90)
            .dry_run(true)
            .index_prefixes(vec!["a-,b-".to_string(), "c-".to_string()])
            .host("http://127.0.0.1:9200")
            .build()
            .unwrap();

        assert_eq!(settings.percentage_threshold, 90);
        assert!(settings.dry_run());
        assert_eq!(settings.index_prefixes, vec!["a-", "b-", "c-"]);
        assert_eq!(settings.endpoint(), "http://127.0.0.1:9200");
    }

    #[test]
    fn test_explicit_tls_paths() {
        let dir = TempDir::new().unwrap();
        let ca = dir.path().join("ca.pem");
        let cert = dir.path().join("cert.pem");
        let key = dir.path().join("key.pem");
        for path in [&ca, &cert, &key] {
            std::fs::write(path, "pem").unwrap();
        }

        let settings = SettingsLoader::new()
            .ca_cert(&ca)
            .client_identity(&cert, &key)
            .build()
            .unwrap();

        assert_eq!(settings.elasticsearch.tls.ca_cert.as_deref(), Some(ca.as_path()));
        assert!(settings.elasticsearch.tls.has_client_identity());
    }

    #[test]
    fn test_missing_tls_file_rejected() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.pem");

        let message = config_message(SettingsLoader::new().ca_cert(&missing).build());
        assert!(message.contains("ELASTICSEARCH_CA_CERT"));
    }

    #[test]
    fn test_half_client_identity_rejected() {
        let dir = TempDir::new().unwrap();
        let cert = dir.path().join("cert.pem");
        std::fs::write(&cert, "pem").unwrap();
        let cert_path = cert.to_string_lossy().to_string();

        let result = load(&[
            ("ELASTICSEARCH_CLIENT_CERT", cert_path.as_str()),
            // Key falls back to the default mount, which is absent in tests
            ("ELASTICSEARCH_CLIENT_KEY", ""),
        ]);
        if !std::path::Path::new(curator_core::DEFAULT_CLIENT_KEY_PATH).exists() {
            let message = config_message(result);
            assert!(message.contains("must be configured together"));
        }
    }
}
