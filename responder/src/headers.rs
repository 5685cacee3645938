use std::collections::HashMap;

use http::header::{
    HeaderName, HeaderValue, ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE,
};
use http::HeaderMap;

use crate::error::ResponderError;

/// Returns a fresh copy of the headers every response carries unless they
/// are explicitly overridden. Allocated anew on each call so that merged
/// overrides never leak into unrelated responses.
pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("OPTIONS,GET,POST"),
    );
    headers
}

/// Merges single-valued override maps over the defaults, in the order given.
/// Each overridden key fully replaces the prior value for that key.
///
/// To return plain text instead of json, override the Content-Type header:
///
/// ```
/// use std::collections::HashMap;
///
/// let overrides = HashMap::from([("Content-Type".to_string(), "text/plain".to_string())]);
/// let headers = responder::build_headers([&overrides]).unwrap();
/// assert_eq!(headers["content-type"], "text/plain");
/// ```
pub fn build_headers<'a, I>(overrides: I) -> Result<HeaderMap, ResponderError>
where
    I: IntoIterator<Item = &'a HashMap<String, String>>,
{
    let mut headers = default_headers();
    for map in overrides {
        for (key, value) in map {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|_| ResponderError::InvalidHeaderName(key.clone()))?;
            let parsed = HeaderValue::from_str(value)
                .map_err(|_| ResponderError::InvalidHeaderValue(value.clone()))?;
            headers.insert(name, parsed);
        }
    }
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_contain_exactly_the_documented_entries() {
        let headers = default_headers();

        assert_eq!(headers.len(), 4);
        assert_eq!(headers["content-type"], "application/json");
        assert_eq!(headers["access-control-allow-origin"], "*");
        assert_eq!(headers["access-control-allow-credentials"], "true");
        assert_eq!(headers["access-control-allow-methods"], "OPTIONS,GET,POST");
    }

    #[test]
    fn defaults_are_a_fresh_allocation_per_call() {
        let mut first = default_headers();
        first.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));

        assert_eq!(default_headers()["content-type"], "application/json");
    }

    #[test]
    fn override_replaces_its_key_and_keeps_the_rest() {
        let overrides = HashMap::from([("Content-Type".to_string(), "text/html".to_string())]);

        let headers = build_headers([&overrides]).unwrap();

        assert_eq!(headers["content-type"], "text/html");
        assert_eq!(headers["access-control-allow-origin"], "*");
        assert_eq!(headers["access-control-allow-credentials"], "true");
        assert_eq!(headers["access-control-allow-methods"], "OPTIONS,GET,POST");
    }

    #[test]
    fn later_override_map_wins_per_key() {
        let first = HashMap::from([
            ("Content-Type".to_string(), "text/plain".to_string()),
            ("Cache-Control".to_string(), "no-store".to_string()),
        ]);
        let second = HashMap::from([("Content-Type".to_string(), "text/html".to_string())]);

        let headers = build_headers([&first, &second]).unwrap();

        assert_eq!(headers["content-type"], "text/html");
        assert_eq!(headers["cache-control"], "no-store");
    }

    #[test]
    fn no_overrides_yields_the_defaults() {
        let headers = build_headers([]).unwrap();

        assert_eq!(headers, default_headers());
    }

    #[test]
    fn invalid_header_name_is_rejected() {
        let overrides = HashMap::from([("not a header".to_string(), "value".to_string())]);

        let result = build_headers([&overrides]);

        assert!(matches!(
            result,
            Err(ResponderError::InvalidHeaderName(name)) if name == "not a header"
        ));
    }

    #[test]
    fn invalid_header_value_is_rejected() {
        let overrides = HashMap::from([("X-Marker".to_string(), "line\nbreak".to_string())]);

        let result = build_headers([&overrides]);

        assert!(matches!(result, Err(ResponderError::InvalidHeaderValue(_))));
    }
}
