//! Backend paths for the signatory queues.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::services::queue::{DashboardScope, QueueKind};

/// Characters left alone by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Path of the list endpoint for a queue. Dean views have no processing
/// queue, so that combination yields `None`.
pub fn queue_endpoint(scope: &DashboardScope, kind: QueueKind) -> Option<String> {
    match scope {
        DashboardScope::Dean(key) => match kind {
            QueueKind::Processing => None,
            _ => Some(format!(
                "/api/clearances/{}?dean={}",
                kind.as_str(),
                encode_component(key)
            )),
        },
        DashboardScope::Office(office) if office.is_empty() => {
            Some(format!("/api/signatories/{}", kind.as_str()))
        }
        DashboardScope::Office(office) => Some(format!(
            "/api/signatories/{}?office={}",
            kind.as_str(),
            encode_component(office)
        )),
    }
}
