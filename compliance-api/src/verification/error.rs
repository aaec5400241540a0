use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use shared_types::ErrorResponse;

/// Failures surfaced by the verification entry points. All are recoverable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerificationError {
    #[error("{0}")]
    Validation(String),

    #[error("Company {0} not found")]
    NotFound(i64),

    #[error("{0}")]
    Authorization(String),

    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl VerificationError {
    pub fn persistence(err: anyhow::Error) -> Self {
        VerificationError::Persistence(format!("{:#}", err))
    }
}

impl actix_web::error::ResponseError for VerificationError {
    fn status_code(&self) -> StatusCode {
        match self {
            VerificationError::Validation(_) => StatusCode::BAD_REQUEST,
            VerificationError::NotFound(_) => StatusCode::NOT_FOUND,
            VerificationError::Authorization(_) => StatusCode::FORBIDDEN,
            VerificationError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
