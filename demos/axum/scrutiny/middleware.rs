use axum::{
    body::Body,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use cors_header_scrutiny::{RequestContext, ScrutinyDecision, ScrutinyError};

use super::{AppState, SharedScrutiny};

pub async fn scrutiny_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let scrutiny: SharedScrutiny = state.scrutiny.clone();

    let decision = scrutiny.evaluate(&RequestContext::from_http(&request));

    match decision {
        Ok(ScrutinyDecision::Accepted) => next.run(request).await,
        Ok(ScrutinyDecision::Rejected(rejection)) => {
            tracing::info!(reason = %rejection.reason(), "request forbidden");
            plain_response(
                StatusCode::from_u16(rejection.status()).unwrap_or(StatusCode::FORBIDDEN),
                rejection.message(),
            )
        }
        Err(err) => middleware_error_response(err),
    }
}

fn middleware_error_response(err: ScrutinyError) -> Response {
    tracing::error!(error = %err, "header scrutiny misconfigured");
    plain_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
}

fn plain_response(status: StatusCode, body: &'static str) -> Response {
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    response
}
