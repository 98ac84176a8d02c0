use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{lenient, request_status::SignatoryDecision};

/// An office that has to sign off a clearance request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signatory {
    #[serde(default, deserialize_with = "lenient::text")]
    pub office: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub signed_by: Option<String>,
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub signed_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub rejection_reason: Option<String>,
}

impl Signatory {
    pub fn with_status(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            ..Self::default()
        }
    }

    /// Decodes one element of a `signatories` array; anything but an object
    /// becomes a signatory with no status.
    pub fn from_value(value: &Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    pub fn decision(&self) -> SignatoryDecision {
        SignatoryDecision::parse(&self.status)
    }
}
