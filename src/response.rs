//! Response helpers and the JSON formatting layer.

use crate::config::JsonFormat;
use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// 200 with body.
pub fn ok<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

/// 201 with the created resource.
pub fn created<T: Serialize>(data: T) -> Response {
    (StatusCode::CREATED, Json(data)).into_response()
}

/// 202 with the updated resource.
pub fn accepted<T: Serialize>(data: T) -> Response {
    (StatusCode::ACCEPTED, Json(data)).into_response()
}

pub fn no_content() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

fn is_json(resp: &Response) -> bool {
    resp.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("application/json"))
        .unwrap_or(false)
}

/// Re-render JSON bodies with indentation when the format is `Pretty`. Other bodies pass through.
pub async fn format_json(State(format): State<JsonFormat>, req: Request, next: Next) -> Response {
    let resp = next.run(req).await;
    if format == JsonFormat::Compact || !is_json(&resp) {
        return resp;
    }
    let (mut parts, body) = resp.into_parts();
    let bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::error!(error = %e, "failed to buffer response body");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    let pretty = serde_json::from_slice::<serde_json::Value>(&bytes)
        .and_then(|v| serde_json::to_vec_pretty(&v));
    let body = match pretty {
        Ok(mut p) => {
            p.push(b'\n');
            parts
                .headers
                .insert(header::CONTENT_LENGTH, HeaderValue::from(p.len()));
            Body::from(p)
        }
        Err(_) => Body::from(bytes),
    };
    Response::from_parts(parts, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{middleware, routing::get, Router};
    use tower::ServiceExt;

    fn app(format: JsonFormat) -> Router {
        Router::new()
            .route("/", get(|| async { ok(serde_json::json!({ "a": 1 })) }))
            .route("/text", get(|| async { "plain" }))
            .layer(middleware::from_fn_with_state(format, format_json))
    }

    async fn body_of(router: Router, uri: &str) -> String {
        let resp = router
            .oneshot(axum::http::Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn pretty_prints_json() {
        assert_eq!(body_of(app(JsonFormat::Pretty), "/").await, "{\n  \"a\": 1\n}\n");
    }

    #[tokio::test]
    async fn compact_leaves_json_alone() {
        assert_eq!(body_of(app(JsonFormat::Compact), "/").await, "{\"a\":1}");
    }

    #[tokio::test]
    async fn non_json_passes_through() {
        assert_eq!(body_of(app(JsonFormat::Pretty), "/text").await, "plain");
    }
}
