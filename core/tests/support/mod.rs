#![allow(dead_code)]
use clearance_core::Request;
use serde_json::{json, Value};

pub fn request_json(status: Value, request_type: Option<&str>, signatories: &[&str]) -> Value {
    let mut value = json!({
        "id": 1,
        "status": status,
        "signatories": signatories
            .iter()
            .enumerate()
            .map(|(idx, s)| json!({ "office": format!("Office {}", idx + 1), "status": s }))
            .collect::<Vec<_>>(),
    });
    if let Some(kind) = request_type {
        value["request_type"] = json!(kind);
    }
    value
}

pub fn decode(value: Value) -> Request {
    serde_json::from_value(value).expect("decode request")
}

pub fn student_envelope(rows: Vec<Value>) -> Value {
    json!({ "ok": true, "message": "Requests retrieved", "requests": rows })
}
