use cors_gate::{CorsDecision, HeaderSet};

pub fn assert_actual(decision: CorsDecision) -> (HeaderSet, bool) {
    match decision {
        CorsDecision::Actual(response) => (response.headers, response.reject),
        other => panic!("expected actual decision, got {:?}", other),
    }
}

pub fn assert_preflight(decision: CorsDecision) -> (HeaderSet, u16, bool) {
    match decision {
        CorsDecision::Preflight(response) => (response.headers, response.status, response.halt),
        other => panic!("expected preflight decision, got {:?}", other),
    }
}

pub fn assert_header_eq(headers: &HeaderSet, name: &str, expected: &str) {
    assert_eq!(headers.get(name), Some(expected), "header {name}");
}
