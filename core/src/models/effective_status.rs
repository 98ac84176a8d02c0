//! The single state a student sees for a request.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
/// Effective display status derived from office approvals and registrar fulfillment.
pub enum EffectiveStatus {
    #[default]
    Pending,
    Processing,
    Rejected,
    Completed,
    Released,
}

impl EffectiveStatus {
    pub const ALL: [EffectiveStatus; 5] = [
        EffectiveStatus::Pending,
        EffectiveStatus::Processing,
        EffectiveStatus::Rejected,
        EffectiveStatus::Completed,
        EffectiveStatus::Released,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EffectiveStatus::Pending => "pending",
            EffectiveStatus::Processing => "processing",
            EffectiveStatus::Rejected => "rejected",
            EffectiveStatus::Completed => "completed",
            EffectiveStatus::Released => "released",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EffectiveStatus::Pending => "Pending",
            EffectiveStatus::Processing => "Processing",
            EffectiveStatus::Rejected => "Rejected",
            EffectiveStatus::Completed => "Completed",
            EffectiveStatus::Released => "Released",
        }
    }
}

impl fmt::Display for EffectiveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
