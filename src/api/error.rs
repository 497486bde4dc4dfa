//! Maps chat failures onto HTTP status codes with a JSON `{error}` body.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use tracing::error;

use crate::api::models::ErrorBody;
use crate::chat::ChatError;

impl ResponseError for ChatError {
    fn status_code(&self) -> StatusCode {
        match self {
            ChatError::Validation(_) => StatusCode::BAD_REQUEST,
            ChatError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ChatError::Storage(e) = self {
            error!("Chat storage failure: {}", e);
        }
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}
