//! The `{ ok, message, ... }` wrapper every backend response uses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{error::ClientError, models::lenient, models::request::Request};

pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to load requests";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default, deserialize_with = "lenient::truthy")]
    pub ok: bool,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub message: Option<String>,
    #[serde(default)]
    pub requests: Option<Value>,
    #[serde(default)]
    pub data: Option<Value>,
}

impl Envelope {
    pub fn from_json(raw: &str) -> Result<Self, ClientError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn ensure_ok(&self) -> Result<(), ClientError> {
        if self.ok {
            return Ok(());
        }
        let message = self
            .message
            .clone()
            .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
        tracing::warn!(message = %message, "Backend reported failure");
        Err(ClientError::Api(message))
    }

    /// Student request list: rows under `requests`.
    pub fn into_student_requests(self) -> Result<Vec<Request>, ClientError> {
        self.ensure_ok()?;
        let rows = pick_rows(self.requests, None);
        let mut requests = Vec::with_capacity(rows.len());
        for row in rows {
            if !row.is_object() {
                tracing::debug!(row = %row, "Skipping non-object request row");
                continue;
            }
            requests.push(serde_json::from_value(row)?);
        }
        tracing::debug!(count = requests.len(), "Decoded student requests");
        Ok(requests)
    }

    /// Signatory queue rows: `data`, falling back to `requests`. The queue
    /// view shows whatever rows arrived, so `ok` is not checked here.
    pub fn into_queue_rows(self) -> Vec<Value> {
        pick_rows(self.data, self.requests)
    }
}

fn pick_rows(primary: Option<Value>, fallback: Option<Value>) -> Vec<Value> {
    let chosen = primary
        .filter(|v| !v.is_null())
        .or_else(|| fallback.filter(|v| !v.is_null()));
    match chosen {
        Some(Value::Array(rows)) => rows,
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failure_uses_backend_message() {
        let envelope: Envelope =
            serde_json::from_value(json!({ "ok": false, "message": "Student not found" })).unwrap();
        let err = envelope.into_student_requests().unwrap_err();
        assert!(matches!(err, ClientError::Api(ref m) if m == "Student not found"));
    }

    #[test]
    fn failure_without_message_uses_default() {
        let envelope: Envelope = serde_json::from_value(json!({})).unwrap();
        let err = envelope.ensure_ok().unwrap_err();
        assert_eq!(err.to_string(), DEFAULT_FAILURE_MESSAGE);
    }

    #[test]
    fn student_rows_come_from_requests_only() {
        let envelope: Envelope = serde_json::from_value(json!({
            "ok": true,
            "data": [{ "id": 2 }]
        }))
        .unwrap();
        assert!(envelope.into_student_requests().unwrap().is_empty());

        let envelope: Envelope = serde_json::from_value(json!({
            "ok": true,
            "requests": [{ "id": 1 }, "junk"],
            "data": [{ "id": 2 }]
        }))
        .unwrap();
        let requests = envelope.into_student_requests().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].id, "1");
    }

    #[test]
    fn queue_rows_prefer_data_and_ignore_ok() {
        let envelope: Envelope = serde_json::from_value(json!({
            "ok": false,
            "data": [{ "signatory_id": 3 }],
            "requests": [{ "signatory_id": 4 }, { "signatory_id": 5 }]
        }))
        .unwrap();
        assert_eq!(envelope.into_queue_rows().len(), 1);
    }

    #[test]
    fn non_array_rows_are_empty() {
        let envelope: Envelope =
            serde_json::from_value(json!({ "ok": true, "data": { "rows": [] } })).unwrap();
        assert!(envelope.into_queue_rows().is_empty());
    }

    #[test]
    fn loose_ok_flag_still_yields_queue_rows() {
        let raw = r#"{"ok": null, "data": [{"signatory_id": 3}]}"#;
        assert_eq!(Envelope::from_json(raw).unwrap().into_queue_rows().len(), 1);

        let err = Envelope::from_json(raw).unwrap().into_student_requests().unwrap_err();
        assert!(matches!(err, ClientError::Api(ref m) if m == DEFAULT_FAILURE_MESSAGE));

        assert!(Envelope::from_json(r#"{"ok": 1}"#).unwrap().ok);
        assert!(Envelope::from_json(r#"{"ok": "true"}"#).unwrap().ok);
    }
}
