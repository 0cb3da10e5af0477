use crate::allow_list::AllowList;
use crate::constants::{MAX_ORIGIN_LENGTH, header, method};
use crate::util::is_http_token;
use std::collections::HashSet;
use thiserror::Error;

/// Whether allowed responses carry `Access-Control-Allow-Credentials: true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CredentialMode {
    #[default]
    Include,
    Omit,
}

impl CredentialMode {
    pub fn is_include(self) -> bool {
        matches!(self, CredentialMode::Include)
    }
}

impl From<bool> for CredentialMode {
    fn from(value: bool) -> Self {
        if value {
            CredentialMode::Include
        } else {
            CredentialMode::Omit
        }
    }
}

/// Methods enumerated in `Access-Control-Allow-Methods`. Case-sensitive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllowedMethods(Vec<String>);

impl AllowedMethods {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut deduped: Vec<String> = Vec::new();
        for value in values {
            let value = value.into().trim().to_string();
            if !value.is_empty() && !deduped.contains(&value) {
                deduped.push(value);
            }
        }
        Self(deduped)
    }

    pub fn values(&self) -> &[String] {
        &self.0
    }

    pub fn header_value(&self) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.join(", "))
        }
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::list([
            method::GET,
            method::POST,
            method::PUT,
            method::DELETE,
            method::OPTIONS,
        ])
    }
}

/// Header names for `Access-Control-Allow-Headers` or
/// `Access-Control-Expose-Headers`. Duplicates are dropped ignoring case.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct HeaderNames(Vec<String>);

impl HeaderNames {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut deduped: Vec<String> = Vec::new();
        for value in values {
            let trimmed = value.into().trim().to_string();
            if trimmed.is_empty() {
                continue;
            }
            if seen.insert(trimmed.to_ascii_lowercase()) {
                deduped.push(trimmed);
            }
        }
        Self(deduped)
    }

    pub fn values(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn header_value(&self) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.join(", "))
        }
    }
}

/// Fixed per-deployment configuration of the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsOptions {
    pub allow_list: AllowList,
    pub credentials: CredentialMode,
    pub methods: AllowedMethods,
    pub allowed_headers: HeaderNames,
    pub exposed_headers: HeaderNames,
    /// Seconds a browser may cache a preflight answer.
    pub max_age: Option<u64>,
    /// Status returned for every preflight that is not rejected.
    pub preflight_status: u16,
    /// Answer denied origins with 403 instead of relying on the browser.
    pub reject_denied: bool,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            allow_list: AllowList::default(),
            credentials: CredentialMode::Include,
            methods: AllowedMethods::default(),
            allowed_headers: HeaderNames::list([header::CONTENT_TYPE, header::AUTHORIZATION]),
            exposed_headers: HeaderNames::default(),
            max_age: None,
            preflight_status: 200,
            reject_denied: false,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "the allow-list contains \"*\"; origins are matched exactly and a wildcard origin is never echoed"
    )]
    WildcardOrigin,
    #[error("an allow-list origin is {length} bytes long; origins over {max} bytes never match")]
    OriginTooLong { length: usize, max: usize },
    #[error("preflight status {0} is not a 2xx success status")]
    InvalidPreflightStatus(u16),
    #[error("allowed method {0:?} is not a valid HTTP token")]
    InvalidMethod(String),
    #[error("header name {0:?} is not a valid HTTP token")]
    InvalidHeaderName(String),
    #[error("\"*\" in {0} is treated literally when credentials are included")]
    WildcardWithCredentials(&'static str),
}

impl CorsOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.allow_list.has_wildcard() {
            return Err(ValidationError::WildcardOrigin);
        }

        if let Some(length) = self.allow_list.oversized_origin() {
            return Err(ValidationError::OriginTooLong {
                length,
                max: MAX_ORIGIN_LENGTH,
            });
        }

        if !(200..=299).contains(&self.preflight_status) {
            return Err(ValidationError::InvalidPreflightStatus(
                self.preflight_status,
            ));
        }

        for value in self.methods.values() {
            if value == "*" {
                if self.credentials.is_include() {
                    return Err(ValidationError::WildcardWithCredentials("allowed methods"));
                }
                continue;
            }
            if !is_http_token(value) {
                return Err(ValidationError::InvalidMethod(value.clone()));
            }
        }

        for (field, names) in [
            ("allowed headers", &self.allowed_headers),
            ("exposed headers", &self.exposed_headers),
        ] {
            for value in names.values() {
                if value == "*" {
                    if self.credentials.is_include() {
                        return Err(ValidationError::WildcardWithCredentials(field));
                    }
                    continue;
                }
                if !is_http_token(value) {
                    return Err(ValidationError::InvalidHeaderName(value.clone()));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
