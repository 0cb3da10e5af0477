use crate::constants::method;

/// The parts of an incoming request the engine reads.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub fn new(method: &'a str, origin: Option<&'a str>) -> Self {
        Self { method, origin }
    }

    /// The declared origin, with an empty header value treated as absent.
    pub fn origin(&self) -> Option<&'a str> {
        self.origin.filter(|value| !value.is_empty())
    }

    pub fn is_options(&self) -> bool {
        self.method.eq_ignore_ascii_case(method::OPTIONS)
    }
}
