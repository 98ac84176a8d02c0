//! Student dashboard summary tiles.

use serde::{Deserialize, Serialize};

use crate::models::{effective_status::EffectiveStatus, request::Request};

/// Requests per effective status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub pending: usize,
    pub processing: usize,
    pub rejected: usize,
    pub completed: usize,
    pub released: usize,
}

/// The three tiles on the student dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardTiles {
    pub pending: usize,
    pub processing: usize,
    /// Requests the student can pick up, i.e. effectively released.
    pub completed: usize,
}

impl StatusCounts {
    pub fn record(&mut self, status: EffectiveStatus) {
        match status {
            EffectiveStatus::Pending => self.pending += 1,
            EffectiveStatus::Processing => self.processing += 1,
            EffectiveStatus::Rejected => self.rejected += 1,
            EffectiveStatus::Completed => self.completed += 1,
            EffectiveStatus::Released => self.released += 1,
        }
    }

    pub fn get(&self, status: EffectiveStatus) -> usize {
        match status {
            EffectiveStatus::Pending => self.pending,
            EffectiveStatus::Processing => self.processing,
            EffectiveStatus::Rejected => self.rejected,
            EffectiveStatus::Completed => self.completed,
            EffectiveStatus::Released => self.released,
        }
    }

    pub fn total(&self) -> usize {
        self.pending + self.processing + self.rejected + self.completed + self.released
    }

    pub fn tiles(&self) -> DashboardTiles {
        DashboardTiles {
            pending: self.pending,
            processing: self.processing,
            completed: self.released,
        }
    }
}

pub fn summarize(requests: &[Request]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for request in requests {
        counts.record(request.effective_status());
    }
    tracing::debug!(
        total = counts.total(),
        pending = counts.pending,
        processing = counts.processing,
        released = counts.released,
        "Summarized student requests"
    );
    counts
}
