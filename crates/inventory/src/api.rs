//! HTTP client for the external inventory API.
//!
//! Wraps the two collection endpoints (`GET /shipments`, `GET /inbound`)
//! using [`reqwest`] and performs the exact-PO + fuzzy-client-name match
//! over their contents. A transport error, timeout, or non-2xx response is
//! surfaced as [`InventoryError`], never conflated with "no match".

use std::time::Duration;

use ordertrack_core::matching::record_matches;

use crate::record::{InventoryRecord, RawInventoryRecord, RecordSource};

/// Per-collection fetch timeout.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors from the inventory API layer.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The inventory API returned a non-2xx status code.
    #[error("Inventory API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Configuration for the inventory API client.
#[derive(Debug, Clone)]
pub struct InventoryConfig {
    /// Base HTTP URL, e.g. `https://inventory.example.com/api`.
    pub base_url: String,
    /// Request timeout (defaults to 10 seconds).
    pub timeout: Duration,
}

impl InventoryConfig {
    /// Build a configuration with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: LOOKUP_TIMEOUT,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `INVENTORY_API_URL` is not set.
    pub fn from_env() -> Option<Self> {
        std::env::var("INVENTORY_API_URL").ok().map(Self::new)
    }
}

/// HTTP client for one inventory API instance.
///
/// Constructed once per process lifetime; the inner [`reqwest::Client`]
/// pools connections across requests.
pub struct InventoryApi {
    client: reqwest::Client,
    base_url: String,
}

impl InventoryApi {
    /// Create a new API client.
    pub fn new(config: InventoryConfig) -> Result<Self, InventoryError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Fetch the shipments collection.
    pub async fn fetch_shipments(&self) -> Result<Vec<RawInventoryRecord>, InventoryError> {
        self.fetch_collection("shipments").await
    }

    /// Fetch the inbound-orders collection.
    pub async fn fetch_inbound(&self) -> Result<Vec<RawInventoryRecord>, InventoryError> {
        self.fetch_collection("inbound").await
    }

    /// Locate the external record for a tracked order.
    ///
    /// Scans shipments first, then inbound orders. Within each collection
    /// the first entry (in the externally returned order) whose PO number
    /// equals `po_number` exactly and whose client name satisfies
    /// `client_hint` wins; ambiguous matches are not resolved further.
    ///
    /// Returns `Ok(None)` when both collections were fetched successfully
    /// but nothing matched.
    pub async fn find_record(
        &self,
        po_number: &str,
        client_hint: Option<&str>,
    ) -> Result<Option<InventoryRecord>, InventoryError> {
        let shipments = self.fetch_shipments().await?;
        if let Some(raw) = Self::first_match(shipments, po_number, client_hint) {
            tracing::debug!(po_number, "Matched shipment record");
            return Ok(Some(InventoryRecord::from_raw(raw, RecordSource::Shipment)));
        }

        let inbound = self.fetch_inbound().await?;
        if let Some(raw) = Self::first_match(inbound, po_number, client_hint) {
            tracing::debug!(po_number, "Matched inbound order record");
            return Ok(Some(InventoryRecord::from_raw(raw, RecordSource::Inbound)));
        }

        Ok(None)
    }

    // ---- private helpers ----

    fn first_match(
        records: Vec<RawInventoryRecord>,
        po_number: &str,
        client_hint: Option<&str>,
    ) -> Option<RawInventoryRecord> {
        records.into_iter().find(|r| {
            record_matches(
                po_number,
                client_hint,
                r.client_purchase_order_number.as_deref(),
                r.client_name.as_deref(),
            )
        })
    }

    async fn fetch_collection(
        &self,
        path: &str,
    ) -> Result<Vec<RawInventoryRecord>, InventoryError> {
        let response = self
            .client
            .get(format!("{}/{}", self.base_url, path))
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        Ok(response.json().await?)
    }

    /// Ensure the response has a success status code, or return an
    /// [`InventoryError::ApiError`] carrying the status and body text.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, InventoryError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(InventoryError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}
