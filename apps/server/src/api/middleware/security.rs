//! Security headers middleware

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};

/// Adds baseline security headers to every response.
///
/// HTML pages get a same-origin CSP and may be framed by the same origin;
/// JSON endpoints are locked down completely.
pub async fn security_headers_middleware(req: Request, next: Next) -> Response {
    let is_https = req
        .headers()
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.eq_ignore_ascii_case("https"))
        .unwrap_or(false)
        || req
            .uri()
            .scheme_str()
            .map(|s| s.eq_ignore_ascii_case("https"))
            .unwrap_or(false);

    let is_page = req.uri().path().ends_with(".html");

    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    // Avoid MIME sniffing.
    headers.insert(
        "x-content-type-options",
        HeaderValue::from_static("nosniff"),
    );
    // Avoid leaking referrers.
    headers.insert("referrer-policy", HeaderValue::from_static("no-referrer"));

    if is_page {
        // Pages load their own styles and inline images only.
        headers.insert(
            "content-security-policy",
            HeaderValue::from_static("default-src 'self'; img-src 'self' data:"),
        );
        // Same-origin framing only.
        headers.insert("x-frame-options", HeaderValue::from_static("SAMEORIGIN"));
    } else {
        // Prevent clickjacking on API endpoints.
        headers.insert("x-frame-options", HeaderValue::from_static("DENY"));
        // Tight default CSP for an API surface.
        headers.insert(
            "content-security-policy",
            HeaderValue::from_static("default-src 'none'"),
        );
    }

    // Cross-origin isolation defaults.
    headers.insert(
        "cross-origin-opener-policy",
        HeaderValue::from_static("same-origin"),
    );
    headers.insert(
        "cross-origin-resource-policy",
        HeaderValue::from_static("same-site"),
    );

    // HSTS only when HTTPS is used (or terminated upstream).
    if is_https {
        headers.insert(
            "strict-transport-security",
            HeaderValue::from_static("max-age=31536000; includeSubDomains"),
        );
    }

    response
}
