//! Signatory dashboard: queue tabs, row normalization, counts and search.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fmt, str::FromStr};

use crate::{
    models::{envelope::Envelope, lenient},
    utils::{
        badge::{queue_badge, Badge},
        endpoints::queue_endpoint,
    },
};

pub const PLACEHOLDER: &str = "—";

/// Whose queue the dashboard shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DashboardScope {
    /// A signatory office. The name may be empty for a generic view.
    Office(String),
    /// A dean view keyed by college.
    Dean(String),
}

impl DashboardScope {
    pub fn new(office: &str, dean_key: &str) -> Self {
        if dean_key.is_empty() {
            DashboardScope::Office(office.to_string())
        } else {
            DashboardScope::Dean(dean_key.to_string())
        }
    }

    pub fn is_dean_view(&self) -> bool {
        matches!(self, DashboardScope::Dean(_))
    }

    pub fn title(&self, explicit: Option<&str>) -> String {
        if let Some(title) = explicit.filter(|t| !t.is_empty()) {
            return title.to_string();
        }
        match self {
            DashboardScope::Dean(_) => "Dean Dashboard".to_string(),
            DashboardScope::Office(office) if office.is_empty() => {
                "Signatory Dashboard".to_string()
            }
            DashboardScope::Office(office) => format!("{} Dashboard", office),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueKind {
    #[default]
    Pending,
    Processing,
    Approved,
    Rejected,
}

impl QueueKind {
    pub const ALL: [QueueKind; 4] = [
        QueueKind::Pending,
        QueueKind::Processing,
        QueueKind::Approved,
        QueueKind::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QueueKind::Pending => "pending",
            QueueKind::Processing => "processing",
            QueueKind::Approved => "approved",
            QueueKind::Rejected => "rejected",
        }
    }

    /// Tile a row status is counted under.
    pub fn bucket(status: &str) -> Self {
        let status = status.to_lowercase();
        if status.contains("process") {
            QueueKind::Processing
        } else if status == "pending" {
            QueueKind::Pending
        } else if status == "rejected" {
            QueueKind::Rejected
        } else {
            QueueKind::Approved
        }
    }
}

impl fmt::Display for QueueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueueKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(QueueKind::Pending),
            "processing" => Ok(QueueKind::Processing),
            "approved" => Ok(QueueKind::Approved),
            "rejected" => Ok(QueueKind::Rejected),
            other => Err(format!("unknown queue kind: {}", other)),
        }
    }
}

/// One row of a signatory queue, with the display fallbacks applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueRow {
    pub student_name: String,
    pub course: String,
    pub year: String,
    pub status: String,
    pub updated: String,
    pub request_id: String,
    pub signatory_id: Option<u64>,
}

fn first_text(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| value.get(*key))
        .map(lenient::value_to_text)
        .find(|text| !text.is_empty())
}

fn positive_id(value: Option<&Value>) -> Option<u64> {
    let id = match value? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }?;
    Some(id).filter(|id| *id > 0)
}

impl QueueRow {
    pub fn from_value(value: &Value, kind: QueueKind) -> Self {
        let given = first_text(value, &["first_name", "student_name"]).unwrap_or_default();
        let family = first_text(value, &["last_name"]).unwrap_or_default();
        let full_name = format!("{} {}", given, family).trim().to_string();
        let student_name = Some(full_name)
            .filter(|n| !n.is_empty())
            .or_else(|| first_text(value, &["student_no"]))
            .unwrap_or_else(|| PLACEHOLDER.to_string());

        QueueRow {
            student_name,
            course: first_text(value, &["course_name", "course_code", "course"])
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            year: first_text(value, &["year_level_name", "year_level", "year"]).unwrap_or_default(),
            status: first_text(value, &["status", "fulfillment_status"])
                .unwrap_or_else(|| kind.as_str().to_string()),
            updated: first_text(value, &["updated_at", "request_date", "created_at"])
                .unwrap_or_default(),
            request_id: first_text(value, &["request_id", "id"]).unwrap_or_default(),
            signatory_id: positive_id(value.get("signatory_id")),
        }
    }

    pub fn badge(&self) -> Badge {
        queue_badge(&self.status)
    }

    pub fn updated_at(&self) -> Option<NaiveDateTime> {
        lenient::parse_timestamp(&self.updated)
    }

    /// Case-insensitive substring search over the row's visible text. The
    /// year column is only shown, and so only searched, in dean views.
    pub fn matches(&self, query: &str, show_year: bool) -> bool {
        let query = query.to_lowercase();
        let year = if show_year { self.year.as_str() } else { "" };
        [
            self.student_name.as_str(),
            self.course.as_str(),
            year,
            self.badge().label,
            self.updated.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueCounts {
    pub pending: usize,
    pub processing: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl QueueCounts {
    pub fn from_rows(rows: &[QueueRow]) -> Self {
        let mut counts = QueueCounts::default();
        for row in rows {
            match QueueKind::bucket(&row.status) {
                QueueKind::Pending => counts.pending += 1,
                QueueKind::Processing => counts.processing += 1,
                QueueKind::Approved => counts.approved += 1,
                QueueKind::Rejected => counts.rejected += 1,
            }
        }
        counts
    }

    pub fn get(&self, kind: QueueKind) -> usize {
        match kind {
            QueueKind::Pending => self.pending,
            QueueKind::Processing => self.processing,
            QueueKind::Approved => self.approved,
            QueueKind::Rejected => self.rejected,
        }
    }
}

/// The rows loaded for one queue tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatoryQueue {
    pub scope: DashboardScope,
    pub kind: QueueKind,
    pub rows: Vec<QueueRow>,
}

impl SignatoryQueue {
    pub fn from_envelope(scope: DashboardScope, kind: QueueKind, envelope: Envelope) -> Self {
        let rows: Vec<QueueRow> = envelope
            .into_queue_rows()
            .iter()
            .map(|value| QueueRow::from_value(value, kind))
            .collect();
        tracing::debug!(kind = %kind, rows = rows.len(), "Loaded signatory queue");
        Self { scope, kind, rows }
    }

    pub fn endpoint(&self) -> Option<String> {
        queue_endpoint(&self.scope, self.kind)
    }

    pub fn counts(&self) -> QueueCounts {
        QueueCounts::from_rows(&self.rows)
    }

    pub fn search<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a QueueRow> + 'a {
        let show_year = self.scope.is_dean_view();
        self.rows.iter().filter(move |row| row.matches(query, show_year))
    }
}

/// View state of a signatory dashboard: the active tab and the row whose
/// signature pad is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    active: QueueKind,
    signing: Option<QueueRow>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> QueueKind {
        self.active
    }

    pub fn show(&mut self, kind: QueueKind) {
        self.active = kind;
    }

    /// Opens the signature pad for `row`. Rows without a signatory id cannot
    /// be signed and leave the state unchanged.
    pub fn open_signature(&mut self, row: &QueueRow) -> bool {
        if row.signatory_id.is_none() {
            return false;
        }
        self.signing = Some(row.clone());
        true
    }

    pub fn signing(&self) -> Option<&QueueRow> {
        self.signing.as_ref()
    }

    pub fn close_signature(&mut self) -> Option<QueueRow> {
        self.signing.take()
    }
}
