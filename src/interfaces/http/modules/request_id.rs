//! Request ID middleware
//!
//! Every request carries an `X-Request-Id`: the client's own if it sent one,
//! otherwise a fresh UUID v4. The id is attached to a tracing span around the
//! handler, so every log line of the request carries it, and is echoed on
//! the response.

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub async fn request_id_middleware(request: Request<Body>, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
    );

    let mut response = next.run(request).instrument(span).await;

    if let Ok(value) = request_id.parse() {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{middleware, routing::get, Router};
    use tower::Service;

    async fn echo(header: Option<&str>) -> Response {
        let mut app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(middleware::from_fn(request_id_middleware))
            .into_service();
        let mut req = Request::builder().uri("/");
        if let Some(value) = header {
            req = req.header(REQUEST_ID_HEADER, value);
        }
        app.call(req.body(Body::empty()).unwrap()).await.unwrap()
    }

    #[tokio::test]
    async fn missing_header_gets_a_fresh_uuid() {
        let resp = echo(None).await;
        let id = resp.headers()[REQUEST_ID_HEADER].to_str().unwrap();
        assert_eq!(Uuid::parse_str(id).unwrap().get_version_num(), 4);
    }

    #[tokio::test]
    async fn empty_header_is_replaced() {
        let resp = echo(Some("")).await;
        let id = resp.headers()[REQUEST_ID_HEADER].to_str().unwrap();
        assert!(Uuid::parse_str(id).is_ok());
    }

    #[tokio::test]
    async fn client_id_is_echoed() {
        let resp = echo(Some("order-42")).await;
        assert_eq!(resp.headers()[REQUEST_ID_HEADER], "order-42");
    }
}
