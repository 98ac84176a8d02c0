//! Approve/reject payloads sent from the signatory dashboard.

use serde::{Deserialize, Serialize};

use crate::{error::ClientError, models::envelope::Envelope, services::queue::QueueRow};

/// Reason sent when the signature pad's reject button is used.
pub const MODAL_REJECT_REASON: &str = "Rejected via modal";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionAction {
    Approve,
    Reject,
}

impl DecisionAction {
    pub fn success_message(&self) -> &'static str {
        match self {
            DecisionAction::Approve => "Clearance approved successfully!",
            DecisionAction::Reject => "Clearance rejected successfully!",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            DecisionAction::Approve => "Failed to approve clearance",
            DecisionAction::Reject => "Failed to reject clearance",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovePayload {
    pub signatory_id: u64,
    /// Signature image as a `data:image/png;base64,...` URL.
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectPayload {
    pub signatory_id: u64,
    pub reason: String,
}

pub fn approve(row: &QueueRow, signature: &str) -> Result<ApprovePayload, ClientError> {
    let signatory_id = row.signatory_id.ok_or(ClientError::MissingSignatory)?;
    if signature.trim().is_empty() {
        return Err(ClientError::EmptySignature);
    }
    Ok(ApprovePayload {
        signatory_id,
        signature: signature.to_string(),
    })
}

pub fn reject(row: &QueueRow, reason: &str) -> Result<RejectPayload, ClientError> {
    let signatory_id = row.signatory_id.ok_or(ClientError::MissingSignatory)?;
    let reason = reason.trim();
    if reason.is_empty() {
        return Err(ClientError::EmptyReason);
    }
    Ok(RejectPayload {
        signatory_id,
        reason: reason.to_string(),
    })
}

/// Interprets the backend's answer to a decision, returning the message to
/// show the signatory on success.
pub fn confirm(action: DecisionAction, response: &Envelope) -> Result<&'static str, ClientError> {
    if response.ok {
        tracing::info!(action = ?action, "Decision recorded");
        return Ok(action.success_message());
    }
    let message = response
        .message
        .clone()
        .unwrap_or_else(|| action.failure_message().to_string());
    tracing::warn!(action = ?action, message = %message, "Decision rejected by backend");
    Err(ClientError::Api(message))
}
