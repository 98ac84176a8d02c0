use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::models::{
    effective_status::EffectiveStatus, lenient, request_status::FulfillmentStatus,
    signatory::Signatory,
};
use crate::services::status_resolver;

pub const DEFAULT_PAYMENT_METHOD: &str = "Cash";
pub const DEFAULT_PAYMENT_STATUS: &str = "Pending";

/// How a request moves through the offices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestType {
    /// Clearance and document request combined into one record.
    Consolidated,
    /// Document request created after the clearance was transferred.
    Document,
    /// Clearance request with per-office signatories. Also covers
    /// missing and unrecognized types.
    Clearance,
}

impl RequestType {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "consolidated" => RequestType::Consolidated,
            "document" => RequestType::Document,
            _ => RequestType::Clearance,
        }
    }
}

/// A student's request as listed by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
    /// Raw fulfillment status as reported by the registrar.
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub request_type: String,
    #[serde(default, deserialize_with = "lenient::signatories")]
    pub signatories: Vec<Signatory>,
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub date_requested: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub payment_method: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub payment_status: Option<String>,
}

impl Request {
    pub fn new(status: impl Into<String>, request_type: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            request_type: request_type.into(),
            ..Self::default()
        }
    }

    pub fn with_signatories<I, S>(mut self, statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.signatories = statuses.into_iter().map(Signatory::with_status).collect();
        self
    }

    pub fn kind(&self) -> RequestType {
        RequestType::parse(&self.request_type)
    }

    pub fn fulfillment_status(&self) -> FulfillmentStatus {
        FulfillmentStatus::parse(&self.status)
    }

    pub fn effective_status(&self) -> EffectiveStatus {
        status_resolver::resolve(self)
    }

    pub fn payment_method_label(&self) -> &str {
        self.payment_method.as_deref().unwrap_or(DEFAULT_PAYMENT_METHOD)
    }

    pub fn payment_status_label(&self) -> &str {
        self.payment_status.as_deref().unwrap_or(DEFAULT_PAYMENT_STATUS)
    }

    pub fn is_paid(&self) -> bool {
        self.payment_status_label().eq_ignore_ascii_case("paid")
    }
}

/// Sorts newest first by `date_requested`; undated requests go last.
pub fn sort_newest_first(requests: &mut [Request]) {
    requests.sort_by(|a, b| match (&a.date_requested, &b.date_requested) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
