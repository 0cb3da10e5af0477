use crate::constants::header;
use crate::headers::HeaderSet;
use crate::options::CorsOptions;
use crate::policy::PolicyDecision;

pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions) -> Self {
        Self { options }
    }

    /// `Access-Control-Allow-Origin` plus `Vary: Origin`.
    ///
    /// Only ever echoes the matched origin, never `*`. A denied origin still
    /// gets `Vary: Origin` because the response differs by origin.
    pub(crate) fn build_origin_headers(&self, decision: &PolicyDecision) -> HeaderSet {
        match decision {
            PolicyDecision::Allowed(Some(origin)) if origin != "*" => {
                let mut headers = HeaderSet::with_estimate(2);
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
                headers.add_vary(header::ORIGIN);
                headers
            }
            PolicyDecision::Allowed(None) => HeaderSet::new(),
            PolicyDecision::Allowed(Some(_)) | PolicyDecision::Denied => {
                let mut headers = HeaderSet::with_estimate(1);
                headers.add_vary(header::ORIGIN);
                headers
            }
        }
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderSet {
        if self.options.credentials.is_include() {
            let mut headers = HeaderSet::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true".to_string());
            headers
        } else {
            HeaderSet::new()
        }
    }

    pub(crate) fn build_methods_header(&self) -> HeaderSet {
        let mut headers = HeaderSet::with_estimate(1);
        if let Some(value) = self.options.methods.header_value() {
            headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, value);
        }
        headers
    }

    pub(crate) fn build_allowed_headers(&self) -> HeaderSet {
        let mut headers = HeaderSet::with_estimate(1);
        if let Some(value) = self.options.allowed_headers.header_value() {
            headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
        }
        headers
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderSet {
        let mut headers = HeaderSet::with_estimate(1);
        if let Some(value) = self.options.exposed_headers.header_value() {
            headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, value);
        }
        headers
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderSet {
        let mut headers = HeaderSet::with_estimate(1);
        if let Some(seconds) = self.options.max_age {
            headers.push(header::ACCESS_CONTROL_MAX_AGE, seconds.to_string());
        }
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
