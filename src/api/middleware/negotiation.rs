//! Content negotiation against the registered entity providers

use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;

/// Reject requests whose `Accept` header no registered provider can satisfy
pub async fn negotiation_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let accept = request
        .headers()
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    if let Some(accept) = accept {
        let media_types = state.application.registry().media_types();

        if !is_acceptable(&accept, &media_types) {
            debug!(accept = %accept, "No entity provider for requested media type");
            return ApiError::not_acceptable(format!(
                "Cannot produce '{}'; available: {}",
                accept,
                media_types.join(", ")
            ))
            .into_response();
        }
    }

    next.run(request).await
}

/// Whether any media range in an `Accept` header matches one of `available`
pub fn is_acceptable(accept: &str, available: &[&str]) -> bool {
    accept
        .split(',')
        .filter_map(|range| {
            let mut parts = range.split(';').map(str::trim);
            let media = parts.next()?.to_ascii_lowercase();
            let refused = parts.any(|p| {
                p.strip_prefix("q=")
                    .and_then(|q| q.parse::<f32>().ok())
                    .is_some_and(|q| q <= 0.0)
            });
            (!media.is_empty() && !refused).then_some(media)
        })
        .any(|media| {
            available.iter().any(|candidate| {
                media == "*/*"
                    || media == *candidate
                    || media
                        .strip_suffix("/*")
                        .is_some_and(|kind| candidate.split('/').next() == Some(kind))
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &[&str] = &["application/json"];

    #[test]
    fn test_exact_and_wildcard_matches() {
        assert!(is_acceptable("application/json", JSON));
        assert!(is_acceptable("*/*", JSON));
        assert!(is_acceptable("application/*", JSON));
        assert!(is_acceptable("text/html, application/json;q=0.9", JSON));
        assert!(is_acceptable("Application/JSON", JSON));
    }

    #[test]
    fn test_unsupported_media_types() {
        assert!(!is_acceptable("application/rdf+xml", JSON));
        assert!(!is_acceptable("text/*", JSON));
        assert!(!is_acceptable("", JSON));
    }

    #[test]
    fn test_zero_quality_is_refusal() {
        assert!(!is_acceptable("application/json;q=0", JSON));
        assert!(is_acceptable("application/json;q=0.5", JSON));
    }
}
