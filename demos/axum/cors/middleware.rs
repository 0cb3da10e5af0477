use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use cors_gate::{CorsDecision, HeaderSet, PreflightResponse, RequestContext, constants::header};

use super::AppState;

pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let cors = state.cors.load();

    let method = request.method().as_str().to_string();
    let origin = header_value(request.headers(), header::ORIGIN);
    let context = RequestContext::new(&method, origin.as_deref());

    match cors.check(&context) {
        CorsDecision::Preflight(preflight) => preflight_response(preflight),
        CorsDecision::Actual(actual) if actual.reject => {
            let mut response = empty_response(StatusCode::FORBIDDEN);
            apply_headers(response.headers_mut(), &actual.headers);
            *response.body_mut() = Body::from("Request rejected: origin not allowed");
            response
        }
        CorsDecision::Actual(actual) => {
            let mut response = next.run(request).await;
            apply_headers(response.headers_mut(), &actual.headers);
            response
        }
        CorsDecision::NotApplicable => next.run(request).await,
    }
}

fn preflight_response(preflight: PreflightResponse) -> Response {
    let status = StatusCode::from_u16(preflight.status).unwrap_or(StatusCode::OK);
    let mut response = empty_response(status);
    apply_headers(response.headers_mut(), &preflight.headers);
    response
}

fn empty_response(status: StatusCode) -> Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = status;
    response
}

fn apply_headers(map: &mut HeaderMap, headers: &HeaderSet) {
    for (name, value) in headers.iter() {
        if let (Ok(header_name), Ok(header_value)) =
            (HeaderName::try_from(name), HeaderValue::from_str(value))
        {
            if name.eq_ignore_ascii_case(header::VARY) {
                map.append(header_name, header_value);
            } else {
                map.insert(header_name, header_value);
            }
        }
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}
