use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::db::StoreError;

pub const EMPLOYEE_EXISTS: &str = "Employee already exists.";
pub const EMPLOYEE_NOT_FOUND: &str = "Employee not found.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

#[derive(Serialize)]
pub struct MessageResponse<T: Serialize> {
    pub message: T,
}

impl AppError {
    pub fn employee_not_found() -> Self {
        AppError::NotFound(EMPLOYEE_NOT_FOUND.to_string())
    }

    pub fn employee_exists() -> Self {
        AppError::Conflict(EMPLOYEE_EXISTS.to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate => AppError::employee_exists(),
            StoreError::Database(err) => {
                log::error!("Database error: {:?}", err);
                AppError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            // Duplicate employees answer 400, not 409.
            AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::Conflict(msg)
            | AppError::InternalServerError(msg) => msg.clone(),
        };
        HttpResponse::build(self.status_code()).json(MessageResponse { message })
    }
}
