//! Accept header negotiation for JSON resources

use crate::{Error, Result};
use axum::http::{header, HeaderMap};

/// Checks that the request's `Accept` header admits `application/json`.
///
/// A missing or empty header accepts anything. Media ranges with `q=0`
/// are treated as refusals.
pub fn require_json(headers: &HeaderMap) -> Result<()> {
    let Some(accept) = headers.get(header::ACCEPT) else {
        return Ok(());
    };
    let accept = accept
        .to_str()
        .map_err(|_| Error::NotAcceptable("Accept header is not valid ASCII".to_string()))?;

    if accept.trim().is_empty() || accepts_json(accept) {
        Ok(())
    } else {
        Err(Error::NotAcceptable(format!(
            "application/json is not acceptable for '{}'",
            accept
        )))
    }
}

fn accepts_json(accept: &str) -> bool {
    accept.split(',').any(|range| {
        let mut parts = range.split(';');
        let media = parts.next().unwrap_or("").trim().to_ascii_lowercase();
        let matches = matches!(
            media.as_str(),
            "application/json" | "application/*" | "*/*"
        );
        matches && quality(parts) > 0.0
    })
}

fn quality<'a>(params: impl Iterator<Item = &'a str>) -> f32 {
    params
        .filter_map(|p| {
            let (key, value) = p.split_once('=')?;
            key.trim()
                .eq_ignore_ascii_case("q")
                .then(|| value.trim().parse::<f32>().ok())
                .flatten()
        })
        .next()
        .unwrap_or(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn with_accept(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn missing_accept_is_json() {
        assert!(require_json(&HeaderMap::new()).is_ok());
    }

    #[test]
    fn json_and_wildcards_are_accepted() {
        for accept in [
            "application/json",
            "application/*",
            "*/*",
            "text/html, application/json;q=0.5",
            "Application/JSON; charset=utf-8",
        ] {
            assert!(require_json(&with_accept(accept)).is_ok(), "{accept}");
        }
    }

    #[test]
    fn html_only_is_rejected() {
        let err = require_json(&with_accept("text/html")).unwrap_err();
        assert!(matches!(err, Error::NotAcceptable(_)));
    }

    #[test]
    fn zero_quality_is_a_refusal() {
        assert!(require_json(&with_accept("application/json;q=0, text/html")).is_err());
    }
}
