//! External inventory record shapes.
//!
//! [`RawInventoryRecord`] mirrors the wire payload with every field
//! optional; [`InventoryRecord`] is the typed form handed to callers.

use serde::Deserialize;

/// Which external collection a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSource {
    Shipment,
    Inbound,
}

impl RecordSource {
    pub fn as_str(self) -> &'static str {
        match self {
            RecordSource::Shipment => "shipment",
            RecordSource::Inbound => "inbound order",
        }
    }
}

/// One entry of an external collection, exactly as served.
///
/// Every field is optional: the schema is outside this service's control
/// and records routinely omit fields. `id` and `quantity` additionally
/// vary between numeric and string encodings, so they are kept as raw JSON
/// until conversion.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawInventoryRecord {
    pub id: Option<serde_json::Value>,
    pub client_name: Option<String>,
    pub client_purchase_order_number: Option<String>,
    pub status: Option<String>,
    pub location: Option<String>,
    pub supplier: Option<String>,
    pub quantity: Option<serde_json::Value>,
    pub description: Option<String>,
    pub updated_at: Option<String>,
}

/// A matched external record, normalized for internal use.
#[derive(Debug, Clone)]
pub struct InventoryRecord {
    pub source: RecordSource,
    pub external_id: Option<String>,
    pub client_name: Option<String>,
    pub client_po_number: Option<String>,
    /// Raw status string from the external vocabulary.
    pub status: Option<String>,
    pub location: Option<String>,
    pub supplier: Option<String>,
    pub quantity: Option<String>,
    pub description: Option<String>,
    pub updated_at: Option<String>,
}

impl InventoryRecord {
    /// Convert a raw wire record into the typed form.
    pub fn from_raw(raw: RawInventoryRecord, source: RecordSource) -> Self {
        Self {
            source,
            external_id: raw.id.as_ref().map(scalar_to_string),
            client_name: raw.client_name,
            client_po_number: raw.client_purchase_order_number,
            status: raw.status,
            location: raw.location,
            supplier: raw.supplier,
            quantity: raw.quantity.as_ref().map(scalar_to_string),
            description: raw.description,
            updated_at: raw.updated_at,
        }
    }
}

/// Render a JSON scalar as a plain string (strings unquoted, numbers as-is).
fn scalar_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_all_fields_missing() {
        let raw: RawInventoryRecord = serde_json::from_str("{}").unwrap();
        assert!(raw.id.is_none());
        assert!(raw.status.is_none());
    }

    #[test]
    fn tolerates_numeric_and_string_ids() {
        let raw: RawInventoryRecord = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        let record = InventoryRecord::from_raw(raw, RecordSource::Shipment);
        assert_eq!(record.external_id.as_deref(), Some("42"));

        let raw: RawInventoryRecord = serde_json::from_str(r#"{"id": "SHP-9"}"#).unwrap();
        let record = InventoryRecord::from_raw(raw, RecordSource::Shipment);
        assert_eq!(record.external_id.as_deref(), Some("SHP-9"));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let raw: RawInventoryRecord =
            serde_json::from_str(r#"{"qrCode": "abc", "status": "stored"}"#).unwrap();
        assert_eq!(raw.status.as_deref(), Some("stored"));
    }
}
