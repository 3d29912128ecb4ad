use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use thiserror::Error;

use crate::envelope::Envelope;
use crate::repo::StoreError;
use crate::validation::ValidationErrors;

/// Message returned for every failure that is not the caller's fault
pub const PROCESSING_FAILED: &str = "Error processing your request";

pub type RestResult<T> = Result<T, RestError>;

#[derive(Debug, Error)]
pub enum RestError {
    #[error("{message}: {errors}")]
    Validation {
        message: &'static str,
        errors: ValidationErrors,
    },

    #[error("Submission store failure: {0}")]
    Store(#[from] StoreError),
}

impl RestError {
    /// Rejected payload reported under an endpoint specific message
    pub fn validation(message: &'static str, errors: ValidationErrors) -> Self {
        Self::Validation { message, errors }
    }
}

impl ResponseError for RestError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let envelope = match self {
            Self::Validation { message, errors } => Envelope::invalid(*message, errors.clone()),
            Self::Store(_) => {
                // The cause stays in the logs, the caller only gets the generic envelope
                tracing::error!(error.cause_chain = ?self, "Failed to process request");
                Envelope::failure(PROCESSING_FAILED)
            }
        };
        envelope.respond(self.status_code())
    }
}
