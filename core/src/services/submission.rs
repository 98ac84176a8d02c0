//! New request submission from the student dashboard.

use serde::{Deserialize, Serialize};

use crate::{error::ClientError, models::lenient};

pub const DUPLICATE_CHECK_DOCUMENT_TYPE: &str = "Registrar Documents";
pub const DEFAULT_DUPLICATE_MESSAGE: &str = "Duplicate Request Detected";

/// A ticked purpose checkbox. `Other` carries the free-text field next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurposeChoice {
    Listed(String),
    Other(String),
}

impl PurposeChoice {
    fn into_text(self) -> Option<String> {
        let text = match self {
            PurposeChoice::Listed(text) | PurposeChoice::Other(text) => text,
        };
        Some(text.trim().to_string()).filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionDraft {
    pub documents: Vec<String>,
    pub purposes: Vec<String>,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateCheck<'a> {
    #[serde(flatten)]
    pub draft: &'a SubmissionDraft,
    pub document_type: &'static str,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DuplicateCheckResponse {
    #[serde(default, deserialize_with = "lenient::truthy")]
    pub is_duplicate: bool,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub message: Option<String>,
}

impl DuplicateCheckResponse {
    /// `Ok` when the draft may be submitted, otherwise the backend's warning.
    pub fn into_result(self) -> Result<(), ClientError> {
        if !self.is_duplicate {
            return Ok(());
        }
        let message = self
            .message
            .unwrap_or_else(|| DEFAULT_DUPLICATE_MESSAGE.to_string());
        tracing::info!(message = %message, "Duplicate request detected");
        Err(ClientError::Duplicate(message))
    }
}

impl SubmissionDraft {
    pub fn new(
        documents: Vec<String>,
        purposes: Vec<PurposeChoice>,
        reason: Option<String>,
    ) -> Result<Self, ClientError> {
        let documents: Vec<String> = documents
            .into_iter()
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .collect();
        if documents.is_empty() {
            return Err(ClientError::EmptySelection);
        }

        Ok(Self {
            documents,
            purposes: purposes
                .into_iter()
                .filter_map(PurposeChoice::into_text)
                .collect(),
            reason: reason.unwrap_or_default(),
        })
    }

    pub fn duplicate_check(&self) -> DuplicateCheck<'_> {
        DuplicateCheck {
            draft: self,
            document_type: DUPLICATE_CHECK_DOCUMENT_TYPE,
        }
    }
}
