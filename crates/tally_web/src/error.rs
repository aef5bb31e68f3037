//! HTTP error mapping for store failures.
//!
//! # Responsibility
//! - Convert `RepoError` into status codes and JSON error bodies.
//!
//! # Invariants
//! - The handlers are the sole boundary catching store failures; errors
//!   are logged there and surfaced to the client, never swallowed.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use tally_core::RepoError;

/// Store failure crossing the HTTP boundary.
#[derive(Debug)]
pub struct WebError(RepoError);

impl Display for WebError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Error for WebError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

impl From<RepoError> for WebError {
    fn from(value: RepoError) -> Self {
        Self(value)
    }
}

impl ResponseError for WebError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            RepoError::NotFound(_) => StatusCode::NOT_FOUND,
            RepoError::Db(_) | RepoError::InvalidData(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::WebError;
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;
    use tally_core::db::DbError;
    use tally_core::RepoError;

    #[test]
    fn not_found_maps_to_404() {
        let err = WebError::from(RepoError::NotFound(7));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn storage_failures_map_to_500() {
        let err = WebError::from(RepoError::Db(DbError::UnsupportedSchemaVersion {
            db_version: 9,
            latest_supported: 1,
        }));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = WebError::from(RepoError::InvalidData("bad row".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
