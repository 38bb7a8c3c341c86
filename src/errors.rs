use actix_web::{HttpResponse, ResponseError};
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Db(sqlx::Error),
    Unauthenticated,
    Forbidden,
    NotFound,
    Unsupported,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Db(e) => write!(f, "Database error: {e}"),
            AppError::Unauthenticated => write!(f, "Not authenticated"),
            AppError::Forbidden => write!(f, "Permission denied"),
            AppError::NotFound => write!(f, "Not found"),
            AppError::Unsupported => write!(f, "Unsupported operation"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Unauthenticated => HttpResponse::Unauthorized().body("Unauthorized"),
            AppError::Forbidden => HttpResponse::Forbidden().body("Forbidden"),
            AppError::NotFound => HttpResponse::NotFound().body("Not Found"),
            // A policy-table gap is an internal defect; the caller still just
            // sees a denial.
            AppError::Unsupported => {
                log::error!("{self}");
                HttpResponse::Forbidden().body("Forbidden")
            }
            AppError::Db(_) => {
                log::error!("{self}");
                HttpResponse::InternalServerError().body("Internal Server Error")
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Db(e)
    }
}
