use crate::allow_list::AllowList;
use crate::context::RequestContext;
use crate::header_builder::HeaderBuilder;
use crate::headers::HeaderSet;
use crate::options::{CorsOptions, CredentialMode, ValidationError};
use crate::policy::{self, PolicyDecision};
use crate::result::{ActualResponse, CorsDecision, PreflightResponse};
use std::borrow::Cow;
use tracing::info;

const FORBIDDEN: u16 = 403;

/// Core CORS policy engine built from validated [`CorsOptions`].
#[derive(Debug, Clone)]
pub struct Cors {
    options: CorsOptions,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        info!(
            origins = options.allow_list.len(),
            credentials = ?options.credentials,
            reject_denied = options.reject_denied,
            "CORS policy ready"
        );
        Ok(Self { options })
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    pub fn allow_list(&self) -> &AllowList {
        &self.options.allow_list
    }

    pub fn credentials(&self) -> CredentialMode {
        self.options.credentials
    }

    pub fn evaluate(&self, request_origin: Option<&str>) -> PolicyDecision {
        policy::evaluate(
            request_origin,
            &self.options.allow_list,
            self.options.credentials,
        )
    }

    /// Builds the answer to an `OPTIONS` preflight from `decision`.
    pub fn respond_preflight(&self, decision: &PolicyDecision) -> PreflightResponse {
        let decision = emittable(decision);
        let decision = decision.as_ref();
        let builder = HeaderBuilder::new(&self.options);
        let mut headers = HeaderSet::new();
        headers.extend(builder.build_origin_headers(decision));

        let status = match decision {
            PolicyDecision::Allowed(Some(_)) => {
                headers.extend(builder.build_methods_header());
                headers.extend(builder.build_allowed_headers());
                headers.extend(builder.build_credentials_header());
                headers.extend(builder.build_max_age_header());
                self.options.preflight_status
            }
            PolicyDecision::Allowed(None) => self.options.preflight_status,
            PolicyDecision::Denied if self.options.reject_denied => FORBIDDEN,
            PolicyDecision::Denied => self.options.preflight_status,
        };

        PreflightResponse {
            decision: decision.clone(),
            headers,
            status,
            halt: true,
        }
    }

    /// Builds the headers for the real request's response from `decision`.
    pub fn respond_actual(&self, decision: &PolicyDecision) -> ActualResponse {
        let decision = emittable(decision);
        let decision = decision.as_ref();
        let builder = HeaderBuilder::new(&self.options);
        let mut headers = HeaderSet::new();
        headers.extend(builder.build_origin_headers(decision));

        if decision.echoed_origin().is_some() {
            headers.extend(builder.build_credentials_header());
            headers.extend(builder.build_exposed_headers());
        }

        ActualResponse {
            decision: decision.clone(),
            headers,
            reject: self.options.reject_denied && !decision.is_allowed(),
        }
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        let Some(origin) = request.origin() else {
            return CorsDecision::NotApplicable;
        };

        let decision = self.evaluate(Some(origin));
        if request.is_options() {
            CorsDecision::Preflight(self.respond_preflight(&decision))
        } else {
            CorsDecision::Actual(self.respond_actual(&decision))
        }
    }
}

/// A decision that would echo `*` is emitted as a denial.
fn emittable(decision: &PolicyDecision) -> Cow<'_, PolicyDecision> {
    if decision.echoes_wildcard() {
        Cow::Owned(PolicyDecision::Denied)
    } else {
        Cow::Borrowed(decision)
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
