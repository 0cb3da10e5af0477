use cors_gate::HeaderSet;
use cors_gate::constants::header;

/// Every `Access-Control-*` header in the set.
pub fn cors_header_names(headers: &HeaderSet) -> Vec<&str> {
    headers
        .iter()
        .map(|(name, _)| name)
        .filter(|name| {
            name.get(..15)
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case("access-control-"))
        })
        .collect()
}

pub fn emits_wildcard_origin(headers: &HeaderSet) -> bool {
    headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN) == Some("*")
}
