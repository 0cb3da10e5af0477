use cors_gate::constants::method;
use cors_gate::{
    AllowList, AllowedMethods, Cors, CorsDecision, CorsOptions, CredentialMode, HeaderNames,
    RequestContext,
};

pub const FRONTEND: &str = "https://bleutech-app.netlify.app";
pub const LOCAL: &str = "http://localhost:3000";
pub const EVIL: &str = "https://evil.example.com";

pub struct CorsBuilder {
    origins: Vec<String>,
    credentials: bool,
    methods: Option<AllowedMethods>,
    allowed_headers: Option<HeaderNames>,
    exposed_headers: Option<HeaderNames>,
    max_age: Option<u64>,
    preflight_status: Option<u16>,
    reject_denied: bool,
}

impl Default for CorsBuilder {
    fn default() -> Self {
        Self {
            origins: vec![FRONTEND.into(), LOCAL.into()],
            credentials: true,
            methods: None,
            allowed_headers: None,
            exposed_headers: None,
            max_age: None,
            preflight_status: None,
            reject_denied: false,
        }
    }
}

impl CorsBuilder {
    pub fn origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.origins = origins.into_iter().map(Into::into).collect();
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = enabled;
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = Some(AllowedMethods::list(methods));
        self
    }

    pub fn allowed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_headers = Some(HeaderNames::list(headers));
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exposed_headers = Some(HeaderNames::list(headers));
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    pub fn preflight_status(mut self, status: u16) -> Self {
        self.preflight_status = Some(status);
        self
    }

    pub fn reject_denied(mut self, enabled: bool) -> Self {
        self.reject_denied = enabled;
        self
    }

    pub fn options(self) -> CorsOptions {
        let defaults = CorsOptions::default();
        CorsOptions {
            allow_list: AllowList::new(self.origins),
            credentials: CredentialMode::from(self.credentials),
            methods: self.methods.unwrap_or(defaults.methods),
            allowed_headers: self.allowed_headers.unwrap_or(defaults.allowed_headers),
            exposed_headers: self.exposed_headers.unwrap_or(defaults.exposed_headers),
            max_age: self.max_age,
            preflight_status: self.preflight_status.unwrap_or(defaults.preflight_status),
            reject_denied: self.reject_denied,
        }
    }

    pub fn build(self) -> Cors {
        Cors::new(self.options()).expect("valid CORS configuration")
    }
}

pub struct RequestBuilder {
    method: String,
    origin: Option<String>,
}

impl RequestBuilder {
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn check(self, cors: &Cors) -> CorsDecision {
        let ctx = RequestContext::new(&self.method, self.origin.as_deref());
        cors.check(&ctx)
    }
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::default()
}

pub fn actual_request() -> RequestBuilder {
    RequestBuilder {
        method: method::GET.into(),
        origin: None,
    }
}

pub fn preflight_request() -> RequestBuilder {
    RequestBuilder {
        method: method::OPTIONS.into(),
        origin: None,
    }
}
