use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Period key failed its granularity's format pattern
    #[error("Invalid period format: {0}")]
    InvalidPeriod(String),

    /// Window resolved but contained zero matching rows
    #[error("No data found for {0}.")]
    NoData(String),

    /// Database operation errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Chart rendering backend errors
    #[error("Chart backend error: {0}")]
    ChartBackend(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.to_string();

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": {
                "message": error_message,
                "code": status_code.as_u16(),
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidPeriod(_) => StatusCode::BAD_REQUEST,
            AppError::NoData(_) => StatusCode::NOT_FOUND,
            AppError::Database(_)
            | AppError::ChartBackend(_)
            | AppError::Configuration(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn invalid_period(msg: impl Into<String>) -> Self {
        AppError::InvalidPeriod(msg.into())
    }

    pub fn no_data(window: impl Into<String>) -> Self {
        AppError::NoData(window.into())
    }

    pub fn chart_backend(msg: impl Into<String>) -> Self {
        AppError::ChartBackend(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
