//! Badge tones and labels for status pills. Renderers map a tone onto their
//! own colour classes.

use serde::{Deserialize, Serialize};

use crate::models::request_status::SignatoryDecision;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    Warning,
    Success,
    Danger,
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: &'static str,
    pub tone: BadgeTone,
}

/// Tone for the raw status pill in the student request list.
pub fn student_badge_tone(raw_status: &str) -> BadgeTone {
    match raw_status.to_lowercase().as_str() {
        "pending" => BadgeTone::Warning,
        "approved" => BadgeTone::Success,
        "rejected" => BadgeTone::Danger,
        "processing" => BadgeTone::Primary,
        _ => BadgeTone::Secondary,
    }
}

/// Badge shown next to each row of a signatory queue.
pub fn queue_badge(status: &str) -> Badge {
    match status.to_lowercase().as_str() {
        "pending" => Badge {
            label: "Pending",
            tone: BadgeTone::Warning,
        },
        "processing" => Badge {
            label: "Processing",
            tone: BadgeTone::Primary,
        },
        "released" | "approved" | "completed" => Badge {
            label: "Approved",
            tone: BadgeTone::Success,
        },
        "rejected" => Badge {
            label: "Rejected",
            tone: BadgeTone::Danger,
        },
        _ => Badge {
            label: "Unknown",
            tone: BadgeTone::Secondary,
        },
    }
}

/// Tone for an office row in the request detail view.
pub fn office_decision_tone(decision: SignatoryDecision) -> BadgeTone {
    match decision {
        SignatoryDecision::Approved => BadgeTone::Success,
        SignatoryDecision::Rejected => BadgeTone::Danger,
        SignatoryDecision::Pending | SignatoryDecision::Other => BadgeTone::Warning,
    }
}
