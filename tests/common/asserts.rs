use cors_policy::{CorsDecision, Headers, RequestKind};

/// Allowed actual request; returns the headers to apply.
pub fn assert_actual(decision: CorsDecision) -> Headers {
    assert_eq!(decision.kind, RequestKind::Actual, "{decision:?}");
    assert!(decision.allowed, "expected allowed actual request, got {decision:?}");
    assert!(!decision.end_response);
    assert_eq!(decision.status, None);
    decision.headers
}

/// Denied actual request; returns the headers still emitted (only `Vary`).
pub fn assert_actual_denied(decision: CorsDecision) -> Headers {
    assert_eq!(decision.kind, RequestKind::Actual, "{decision:?}");
    assert!(!decision.allowed, "expected denied actual request, got {decision:?}");
    assert!(!decision.end_response);
    decision.headers
}

/// Accepted preflight; returns the headers and the success status.
pub fn assert_preflight(decision: CorsDecision) -> (Headers, u16) {
    assert_eq!(decision.kind, RequestKind::Preflight, "{decision:?}");
    assert!(decision.allowed, "expected accepted preflight, got {decision:?}");
    assert!(decision.end_response);
    let status = decision.status.expect("preflight status");
    (decision.headers, status)
}

pub fn assert_preflight_rejected(decision: CorsDecision) {
    assert_eq!(decision.kind, RequestKind::Preflight, "{decision:?}");
    assert!(!decision.allowed, "expected rejected preflight, got {decision:?}");
    assert!(decision.end_response);
    assert_eq!(decision.status, Some(403));
    assert!(decision.headers.is_empty(), "{:?}", decision.headers);
}

pub fn assert_not_applicable(decision: CorsDecision) {
    assert_eq!(decision.kind, RequestKind::NoCors, "{decision:?}");
    assert!(!decision.allowed);
    assert!(!decision.end_response);
    assert!(decision.headers.is_empty());
}
