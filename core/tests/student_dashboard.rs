mod support;

use clearance_core::{
    models::{envelope::Envelope, request::sort_newest_first},
    services::summary::{summarize, DashboardTiles},
    utils::badge::{office_decision_tone, student_badge_tone, BadgeTone},
    ClientError, EffectiveStatus,
};
use serde_json::json;
use support::{request_json, student_envelope};

#[test]
fn envelope_rows_feed_summary_tiles() {
    let mut released = request_json(json!("completed"), Some("consolidated"), &[]);
    released["id"] = json!(2);
    let mut waiting = request_json(json!("processing"), None, &["approved", "pending"]);
    waiting["id"] = json!(3);
    let mut printing = request_json(json!("processing"), None, &["approved", "approved"]);
    printing["id"] = json!(4);

    let envelope: Envelope =
        serde_json::from_value(student_envelope(vec![released, waiting, printing])).unwrap();
    let requests = envelope.into_student_requests().unwrap();
    let statuses: Vec<_> = requests.iter().map(|r| r.effective_status()).collect();
    assert_eq!(
        statuses,
        vec![
            EffectiveStatus::Released,
            EffectiveStatus::Pending,
            EffectiveStatus::Processing
        ]
    );

    assert_eq!(
        summarize(&requests).tiles(),
        DashboardTiles {
            pending: 1,
            processing: 1,
            completed: 1,
        }
    );
}

#[test]
fn failed_envelope_surfaces_message() {
    let envelope = Envelope::from_json(r#"{"ok": false, "message": "Authentication required"}"#)
        .unwrap();
    match envelope.into_student_requests() {
        Err(ClientError::Api(message)) => assert_eq!(message, "Authentication required"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn malformed_json_is_a_json_error() {
    let err = Envelope::from_json("{\"ok\": tru").unwrap_err();
    assert!(matches!(err, ClientError::Json(_)));
}

#[test]
fn requests_list_newest_first() {
    let rows = vec![
        json!({ "id": "a", "date_requested": "2025-01-02T08:00:00" }),
        json!({ "id": "b" }),
        json!({ "id": "c", "date_requested": "2025-03-02T08:00:00.250000" }),
    ];
    let envelope: Envelope = serde_json::from_value(student_envelope(rows)).unwrap();
    let mut requests = envelope.into_student_requests().unwrap();
    sort_newest_first(&mut requests);
    let ids: Vec<_> = requests.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "a", "b"]);
}

#[test]
fn detail_view_tones() {
    let request = support::decode(json!({
        "status": "Processing",
        "signatories": [
            { "office": "Library", "status": "Approved" },
            { "office": "Accounting", "status": "Rejected", "rejection_reason": "Balance" },
            { "office": "Guidance", "status": "Pending" }
        ]
    }));
    let tones: Vec<_> = request
        .signatories
        .iter()
        .map(|s| office_decision_tone(s.decision()))
        .collect();
    assert_eq!(
        tones,
        vec![BadgeTone::Success, BadgeTone::Danger, BadgeTone::Warning]
    );
    assert_eq!(student_badge_tone(&request.status), BadgeTone::Primary);
    assert_eq!(request.effective_status(), EffectiveStatus::Rejected);
}
