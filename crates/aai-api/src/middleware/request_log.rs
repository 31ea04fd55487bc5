use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Request logging middleware.
///
/// One structured event per request, tagged with the instrument the path
/// names. Bodies carry clinical scores and are never logged.
pub async fn request_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    let instrument = instrument_id(&path).unwrap_or("-");
    if status.is_server_error() {
        tracing::error!(
            %method,
            %path,
            instrument,
            status = status.as_u16(),
            elapsed_ms,
            "score request failed"
        );
    } else {
        tracing::info!(
            %method,
            %path,
            instrument,
            status = status.as_u16(),
            elapsed_ms,
            "score request"
        );
    }

    response
}

/// The `{id}` segment of an `/instruments/{id}/...` path.
pub fn instrument_id(path: &str) -> Option<&str> {
    path.strip_prefix("/instruments/")?
        .split('/')
        .next()
        .filter(|id| !id.is_empty())
}

