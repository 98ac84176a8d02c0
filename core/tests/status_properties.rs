use clearance_core::{resolve, EffectiveStatus, Request, Signatory};
use proptest::prelude::*;

fn status_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("pending".to_string()),
        Just("processing".to_string()),
        Just("rejected".to_string()),
        Just("completed".to_string()),
        Just("released".to_string()),
        Just("unclaimed".to_string()),
        Just("approved".to_string()),
        Just(String::new()),
        "[ a-zA-Z]{0,12}",
    ]
}

fn request_type_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("consolidated".to_string()),
        Just("document".to_string()),
        Just("clearance".to_string()),
        Just(String::new()),
        "[a-z]{0,10}",
    ]
}

fn request_strategy() -> impl Strategy<Value = Request> {
    (
        status_text(),
        request_type_text(),
        proptest::collection::vec(status_text(), 0..6),
    )
        .prop_map(|(status, request_type, signatories)| {
            Request::new(status, request_type).with_signatories(signatories)
        })
}

fn flip_case(text: &str, mask: &[bool]) -> String {
    text.chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| {
            if *upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn resolve_is_total_and_closed(request in request_strategy()) {
        let status = resolve(&request);
        prop_assert!(EffectiveStatus::ALL.contains(&status));
    }

    #[test]
    fn resolve_is_idempotent(request in request_strategy()) {
        prop_assert_eq!(resolve(&request), resolve(&request.clone()));
    }

    #[test]
    fn resolve_ignores_case(
        request in request_strategy(),
        mask in proptest::collection::vec(any::<bool>(), 1..8),
    ) {
        let mut shouted = request.clone();
        shouted.status = flip_case(&request.status, &mask);
        shouted.signatories = request
            .signatories
            .iter()
            .map(|s| Signatory::with_status(flip_case(&s.status, &mask)))
            .collect();
        prop_assert_eq!(resolve(&request), resolve(&shouted));
    }

    #[test]
    fn any_rejected_signatory_rejects_clearance(
        status in status_text(),
        mut signatories in proptest::collection::vec(status_text(), 0..5),
        position in any::<prop::sample::Index>(),
    ) {
        signatories.push("rejected".to_string());
        let idx = position.index(signatories.len());
        let last = signatories.len() - 1;
        signatories.swap(idx, last);
        let request = Request::new(status, "clearance").with_signatories(signatories);
        prop_assert_eq!(resolve(&request), EffectiveStatus::Rejected);
    }
}
