//! Raw status vocabularies as the backend reports them.

/// Registrar fulfillment status after trimming and lowercasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FulfillmentStatus {
    Pending,
    Processing,
    Rejected,
    Completed,
    Released,
    Unclaimed,
    Other(String),
}

impl FulfillmentStatus {
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase();
        match normalized.as_str() {
            "pending" => FulfillmentStatus::Pending,
            "processing" => FulfillmentStatus::Processing,
            "rejected" => FulfillmentStatus::Rejected,
            "completed" => FulfillmentStatus::Completed,
            "released" => FulfillmentStatus::Released,
            "unclaimed" => FulfillmentStatus::Unclaimed,
            _ => FulfillmentStatus::Other(normalized),
        }
    }
}

/// One office's decision on a request.
///
/// Only lowercasing is applied; surrounding whitespace makes a status
/// unrecognized, which counts as neither approved nor rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatoryDecision {
    Approved,
    Pending,
    Rejected,
    Other,
}

impl SignatoryDecision {
    pub fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "approved" => SignatoryDecision::Approved,
            "pending" => SignatoryDecision::Pending,
            "rejected" => SignatoryDecision::Rejected,
            _ => SignatoryDecision::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fulfillment_status_trims_and_lowercases() {
        assert_eq!(FulfillmentStatus::parse("  Completed "), FulfillmentStatus::Completed);
        assert_eq!(FulfillmentStatus::parse("UNCLAIMED"), FulfillmentStatus::Unclaimed);
        assert_eq!(FulfillmentStatus::parse("Processing"), FulfillmentStatus::Processing);
    }

    #[test]
    fn fulfillment_status_keeps_unknown_values() {
        assert_eq!(
            FulfillmentStatus::parse(" On Hold "),
            FulfillmentStatus::Other("on hold".into())
        );
        assert_eq!(FulfillmentStatus::parse(""), FulfillmentStatus::Other(String::new()));
    }

    #[test]
    fn signatory_decision_is_case_insensitive() {
        assert_eq!(SignatoryDecision::parse("APPROVED"), SignatoryDecision::Approved);
        assert_eq!(SignatoryDecision::parse("Rejected"), SignatoryDecision::Rejected);
        assert_eq!(SignatoryDecision::parse("pending"), SignatoryDecision::Pending);
    }

    #[test]
    fn signatory_decision_does_not_trim() {
        assert_eq!(SignatoryDecision::parse(" approved"), SignatoryDecision::Other);
        assert_eq!(SignatoryDecision::parse(""), SignatoryDecision::Other);
    }
}
