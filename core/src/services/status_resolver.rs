//! Derives the one status a student sees from two independent signals: the
//! per-office approvals and the registrar's fulfillment status.
//!
//! Precedence: a rejection by any office wins over everything, an office
//! that has not approved yet holds the request at `Pending`, and only once
//! every office approved does the fulfillment status show through.

use crate::models::{
    effective_status::EffectiveStatus,
    request::{Request, RequestType},
    request_status::{FulfillmentStatus, SignatoryDecision},
    signatory::Signatory,
};

/// Resolves the effective status of a request. Total and side-effect free.
pub fn resolve(request: &Request) -> EffectiveStatus {
    let raw = request.fulfillment_status();
    match request.kind() {
        RequestType::Consolidated => consolidated_status(&raw),
        RequestType::Document => fulfillment_status(&raw, true),
        // Standalone document requests from before signatories existed.
        RequestType::Clearance if request.signatories.is_empty() => {
            fulfillment_status(&raw, false)
        }
        RequestType::Clearance => clearance_status(&raw, &request.signatories),
    }
}

fn consolidated_status(raw: &FulfillmentStatus) -> EffectiveStatus {
    match raw {
        FulfillmentStatus::Completed => EffectiveStatus::Released,
        FulfillmentStatus::Processing => EffectiveStatus::Processing,
        FulfillmentStatus::Rejected => EffectiveStatus::Rejected,
        _ => EffectiveStatus::Pending,
    }
}

fn fulfillment_status(raw: &FulfillmentStatus, unclaimed_is_released: bool) -> EffectiveStatus {
    match raw {
        FulfillmentStatus::Completed => EffectiveStatus::Completed,
        FulfillmentStatus::Released => EffectiveStatus::Released,
        FulfillmentStatus::Processing => EffectiveStatus::Processing,
        FulfillmentStatus::Rejected => EffectiveStatus::Rejected,
        FulfillmentStatus::Unclaimed if unclaimed_is_released => EffectiveStatus::Released,
        _ => EffectiveStatus::Pending,
    }
}

fn clearance_status(raw: &FulfillmentStatus, signatories: &[Signatory]) -> EffectiveStatus {
    let any_rejected = signatories
        .iter()
        .any(|s| s.decision() == SignatoryDecision::Rejected);
    if any_rejected {
        return EffectiveStatus::Rejected;
    }

    let all_approved = !signatories.is_empty()
        && signatories
            .iter()
            .all(|s| s.decision() == SignatoryDecision::Approved);
    if !all_approved {
        return EffectiveStatus::Pending;
    }

    fulfillment_status(raw, false)
}
