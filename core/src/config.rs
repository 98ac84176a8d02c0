use serde::{Deserialize, Serialize};
use std::env;

use crate::services::queue::DashboardScope;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Office whose queue a signatory dashboard shows, e.g. `Accounting`.
    pub signatory_office: String,
    /// Dean key (`cs`, `hm`, ...). When set the dashboard is a dean view.
    pub dean_key: String,
    pub dashboard_title: Option<String>,
}

impl Config {
    /// Reads `.env` (if present) and the process environment.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Config {
            signatory_office: read("SIGNATORY_OFFICE").unwrap_or_default(),
            dean_key: read("DEAN_KEY").unwrap_or_default(),
            dashboard_title: read("DASHBOARD_TITLE"),
        }
    }

    pub fn scope(&self) -> DashboardScope {
        DashboardScope::new(&self.signatory_office, &self.dean_key)
    }

    pub fn title(&self) -> String {
        self.scope().title(self.dashboard_title.as_deref())
    }
}
