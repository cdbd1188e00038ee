//! Elasticsearch backend over the `_cat` and index APIs
//!
//! All requests ask for raw byte counts (`bytes=b`) and JSON output so the
//! responses can be converted straight into descriptors.

use crate::traits::{DeletionExecutor, InventoryProvider};
use async_trait::async_trait;
use curator_config::ElasticsearchSettings;
use curator_core::{Error, IndexDescriptor, Result};
use reqwest::{Certificate, Identity, StatusCode};
use serde::Deserialize;
use std::path::Path;

/// HTTP client for one Elasticsearch cluster
#[derive(Debug, Clone)]
pub struct ElasticsearchClient {
    base_url: String,
    client: reqwest::Client,
}

/// `_cat` APIs return numbers as strings, but some proxies rewrite them
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatNumber {
    Number(i64),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct AllocationRow {
    #[serde(rename = "disk.total")]
    disk_total: Option<CatNumber>,
}

#[derive(Debug, Deserialize)]
struct IndexRow {
    index: String,
    #[serde(rename = "store.size")]
    store_size: Option<CatNumber>,
    #[serde(rename = "creation.date")]
    creation_date: Option<CatNumber>,
}

impl CatNumber {
    /// `None` for blank cells
    fn parse(&self, field: &str) -> Result<Option<i64>> {
        match self {
            CatNumber::Number(n) => Ok(Some(*n)),
            CatNumber::Text(s) if s.trim().is_empty() => Ok(None),
            CatNumber::Text(s) => s.trim().parse().map(Some).map_err(|_| {
                Error::input_validation(field, format!("expected an integer, got '{s}'"))
            }),
        }
    }
}

impl ElasticsearchClient {
    /// Build a client from validated connection settings
    pub fn new(settings: &ElasticsearchSettings) -> Result<Self> {
        let base_url = settings.url.as_str().trim_end_matches('/').to_string();

        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(settings.timeout);

        if let Some(ca) = &settings.tls.ca_cert {
            let pem = read_pem(ca)?;
            let certificate = Certificate::from_pem(&pem).map_err(|e| {
                Error::configuration(format!("Invalid CA certificate '{}': {e}", ca.display()))
            })?;
            builder = builder.add_root_certificate(certificate);
        }

        if let (Some(cert), Some(key)) = (&settings.tls.client_cert, &settings.tls.client_key) {
            let mut pem = read_pem(cert)?;
            pem.push(b'\n');
            pem.extend(read_pem(key)?);
            let identity = Identity::from_pem(&pem).map_err(|e| {
                Error::configuration(format!(
                    "Invalid client identity '{}' / '{}': {e}",
                    cert.display(),
                    key.display()
                ))
            })?;
            builder = builder.identity(identity);
        }

        let client = builder
            .build()
            .map_err(|e| Error::network_with_source(&base_url, "failed to build HTTP client", e))?;

        Ok(Self { base_url, client })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str, scope: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::network_with_source(&url, "request failed", e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::network_with_source(&url, "failed to read response body", e))?;

        if !status.is_success() {
            return Err(Error::inventory(
                scope,
                format!("unexpected status {status}: {}", truncate(&body)),
            ));
        }

        serde_json::from_str(&body)
            .map_err(|e| Error::inventory(scope, format!("malformed response: {e}")))
    }
}

#[async_trait]
impl InventoryProvider for ElasticsearchClient {
    async fn list_indices(&self, prefix: &str) -> Result<Vec<IndexDescriptor>> {
        let path = format!(
            "_cat/indices/{prefix}*?h=index,store.size,creation.date&bytes=b&format=json"
        );
        let rows: Vec<IndexRow> = self.get_json(&path, prefix).await?;

        let mut descriptors = Vec::with_capacity(rows.len());
        for row in rows {
            let size = match row.store_size.as_ref().map(|v| v.parse("store.size")) {
                Some(Ok(Some(size))) => size,
                Some(Err(e)) => return Err(e),
                // Closed indices report no store size
                _ => {
                    tracing::warn!(index = %row.index, "skipping index without store size");
                    continue;
                }
            };
            let created = match row.creation_date.as_ref().map(|v| v.parse("creation.date")) {
                Some(Ok(Some(ts))) => ts,
                Some(Err(e)) => return Err(e),
                _ => {
                    return Err(Error::input_validation(
                        "creation.date",
                        format!("index '{}' has no creation date", row.index),
                    ))
                }
            };
            descriptors.push(IndexDescriptor::from_raw(&row.index, size, created)?);
        }

        tracing::debug!(prefix, count = descriptors.len(), "listed indices");
        Ok(descriptors)
    }

    async fn node_disk_totals(&self) -> Result<Vec<u64>> {
        let rows: Vec<AllocationRow> = self
            .get_json("_cat/allocation?h=disk.total&bytes=b&format=json", "_cat/allocation")
            .await?;

        let mut totals = Vec::with_capacity(rows.len());
        for row in rows {
            // The UNASSIGNED row has no disk figures
            let Some(total) = row.disk_total.as_ref() else {
                continue;
            };
            let Some(total) = total.parse("disk.total")? else {
                continue;
            };
            let total = u64::try_from(total).map_err(|_| {
                Error::input_validation("disk.total", format!("negative disk total {total}"))
            })?;
            totals.push(total);
        }
        Ok(totals)
    }
}

#[async_trait]
impl DeletionExecutor for ElasticsearchClient {
    async fn delete_index(&self, name: &str) -> Result<()> {
        // A wildcard or list here would delete more than was planned
        if name.is_empty() || name.contains(['*', ',', '/']) {
            return Err(Error::deletion(name, "refusing to delete a non-literal index name"));
        }

        let url = format!("{}/{}", self.base_url, name);
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| Error::deletion(name, format!("request failed: {e}")))?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::NOT_FOUND => Err(Error::deletion(name, "index not found")),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(Error::deletion(
                    name,
                    format!("unexpected status {status}: {}", truncate(&body)),
                ))
            }
        }
    }
}

fn read_pem(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| {
        Error::configuration(format!("Failed to read '{}': {e}", path.display()))
    })
}

fn truncate(body: &str) -> &str {
    const MAX: usize = 256;
    if body.len() <= MAX {
        return body;
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cat_number_parsing() {
        assert_eq!(CatNumber::Number(5).parse("f").unwrap(), Some(5));
        assert_eq!(CatNumber::Text("42".into()).parse("f").unwrap(), Some(42));
        assert_eq!(CatNumber::Text(" ".into()).parse("f").unwrap(), None);
        assert!(matches!(
            CatNumber::Text("12kb".into()).parse("store.size"),
            Err(Error::InputValidation { field, .. }) if field == "store.size"
        ));
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let body = "é".repeat(200);
        let cut = truncate(&body);
        assert!(cut.len() <= 256);
        assert!(body.starts_with(cut));
        assert_eq!(truncate("short"), "short");
    }
}
