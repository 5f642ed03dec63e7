use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug)]
pub enum ApiError {
    /// 400, malformed or out-of-range query parameter.
    BadRequest(String),
    /// 404, symbol not in the reference table.
    NotFound,
    /// 500, generator failure. Reported to Sentry.
    Internal(anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "bad_request",
                    message: Some(msg),
                },
            ),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: "Stock not found",
                    message: None,
                },
            ),
            ApiError::Internal(err) => {
                sentry_anyhow::capture_anyhow(&err);
                tracing::error!(error = %format!("{err:#}"), "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "internal_error",
                        message: Some(format!("{err:#}")),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<stocksim_core::generate::news::template::TemplateError> for ApiError {
    fn from(err: stocksim_core::generate::news::template::TemplateError) -> Self {
        ApiError::Internal(anyhow::Error::new(err).context("news template rendering failed"))
    }
}
