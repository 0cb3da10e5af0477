use crate::allow_list::AllowList;
use crate::constants::MAX_ORIGIN_LENGTH;
use crate::options::CredentialMode;
use tracing::debug;

const LOGGED_ORIGIN_PREFIX: usize = 64;

/// Outcome of checking a request origin against the allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyDecision {
    /// Permitted. Carries the origin to echo, or `None` when the request
    /// declared no origin and needs no CORS headers.
    Allowed(Option<String>),
    Denied,
}

impl PolicyDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, PolicyDecision::Allowed(_))
    }

    /// An echo of `*` is never sent; emission treats it as a denial.
    pub(crate) fn echoes_wildcard(&self) -> bool {
        self.echoed_origin() == Some("*")
    }

    pub fn echoed_origin(&self) -> Option<&str> {
        match self {
            PolicyDecision::Allowed(Some(origin)) => Some(origin.as_str()),
            _ => None,
        }
    }
}

/// Decides whether `request_origin` may receive CORS headers.
///
/// An absent or empty origin is allowed with nothing to echo. Otherwise the
/// origin must be present in `allow_list` verbatim. The decision does not
/// depend on `credentials`; it only accompanies the decision in logs.
pub fn evaluate(
    request_origin: Option<&str>,
    allow_list: &AllowList,
    credentials: CredentialMode,
) -> PolicyDecision {
    let Some(origin) = request_origin.filter(|value| !value.is_empty()) else {
        return PolicyDecision::Allowed(None);
    };

    if origin.len() > MAX_ORIGIN_LENGTH {
        debug!(length = origin.len(), "origin exceeds maximum length, denying");
        return PolicyDecision::Denied;
    }

    if allow_list.contains(origin) {
        debug!(origin, ?credentials, "origin allowed");
        PolicyDecision::Allowed(Some(origin.to_string()))
    } else {
        debug!(
            origin = logged_prefix(origin),
            length = origin.len(),
            ?credentials,
            "origin not in allow-list, denying"
        );
        PolicyDecision::Denied
    }
}

/// Caps a client-supplied origin before it reaches the logs.
pub(crate) fn logged_prefix(origin: &str) -> &str {
    if origin.len() <= LOGGED_ORIGIN_PREFIX {
        return origin;
    }
    let mut end = LOGGED_ORIGIN_PREFIX;
    while !origin.is_char_boundary(end) {
        end -= 1;
    }
    &origin[..end]
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
