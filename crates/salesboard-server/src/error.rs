use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level errors that map directly to HTTP responses.
///
/// Every variant implements [`IntoResponse`] so Axum handlers can use
/// `Result<impl IntoResponse, AppError>` as their return type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),

    /// A backend query failed. `message` is what the client sees; the cause
    /// is only logged unless `expose_detail` is set.
    #[error("{message}: {source}")]
    Query {
        message: &'static str,
        #[source]
        source: anyhow::Error,
        expose_detail: bool,
    },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, detail) = match &self {
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                msg.as_str(),
                None,
            ),
            AppError::Query {
                message,
                source,
                expose_detail,
            } => {
                tracing::error!(error = %source, "{message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    *message,
                    expose_detail.then(|| format!("{source:#}")),
                )
            }
        };

        let mut body = json!({
            "error": {
                "code": code,
                "message": message,
                "field": null
            }
        });
        if let Some(detail) = detail {
            body["detail"] = json!(detail);
        }

        (status, Json(body)).into_response()
    }
}
