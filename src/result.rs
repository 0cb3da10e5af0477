use crate::headers::HeaderSet;
use crate::policy::PolicyDecision;

/// Answer to an `OPTIONS` preflight. The preflight never reaches routing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightResponse {
    pub decision: PolicyDecision,
    pub headers: HeaderSet,
    pub status: u16,
    pub halt: bool,
}

/// Headers to attach to the response of a non-preflight request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActualResponse {
    pub decision: PolicyDecision,
    pub headers: HeaderSet,
    /// Set when the origin was denied and the policy answers 403 itself
    /// instead of letting the request through to routing.
    pub reject: bool,
}

/// Overall decision returned by [`crate::Cors::check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    Preflight(PreflightResponse),
    Actual(ActualResponse),
    /// No `Origin` header: not a CORS request, route it untouched.
    NotApplicable,
}
