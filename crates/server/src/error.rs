use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use placedoc::{Classification, PipelineError, StartupError};
use serde_json::json;

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Validation and lookup failures. The response body is the pipeline's
    /// own text, sent as `text/plain`.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error(transparent)]
    Startup(#[from] StartupError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    /// Unknown route or unroutable layer. Empty body.
    #[error("Not found")]
    NotFound,
}

impl ServerError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Pipeline(err) => match err.classification() {
                Classification::BadRequest => StatusCode::BAD_REQUEST,
                Classification::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::Startup(_) | ServerError::Config(_) | ServerError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get error code string
    fn error_code(&self) -> &'static str {
        match self {
            ServerError::Pipeline(_) => "PIPELINE_ERROR",
            ServerError::Startup(_) => "STARTUP_ERROR",
            ServerError::Config(_) => "CONFIG_ERROR",
            ServerError::Internal(_) => "INTERNAL_ERROR",
            ServerError::NotFound => "NOT_FOUND",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            ServerError::Pipeline(err) => (
                status,
                [(CONTENT_TYPE, "text/plain; charset=utf-8")],
                err.body(),
            )
                .into_response(),
            ServerError::NotFound => status.into_response(),
            other => {
                let body = Json(json!({
                    "error": {
                        "code": other.error_code(),
                        "message": other.to_string(),
                    }
                }));
                (status, body).into_response()
            }
        }
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use placedoc::{IngestError, ResolveError};

    #[test]
    fn pipeline_errors_map_by_classification() {
        let rejected = ServerError::from(PipelineError::from(IngestError::MissingName));
        assert_eq!(rejected.status_code(), StatusCode::BAD_REQUEST);

        let failed = ServerError::from(PipelineError::from(ResolveError::Lookup(
            "a PiP error occurred".into(),
        )));
        assert_eq!(failed.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn pipeline_response_is_plain_text() {
        let response = ServerError::from(PipelineError::from(IngestError::MissingId)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
    }

    #[test]
    fn not_found_has_no_content_type() {
        let response = ServerError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get(CONTENT_TYPE).is_none());
    }
}
