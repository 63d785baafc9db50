use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub const MISSING_YEAR: &str = "A year parameter must be specified.";
pub const MISSING_PLAY_FILTER: &str =
    "Either a week, a team, an offensive team, or a defensive team must be specified.";
pub const MISSING_TEAM_STATS_FILTER: &str =
    "Must specify a gameId or a year with either a week or a team.";
pub const MISSING_RECRUIT_FILTER: &str = "A year or team must be specified.";

const GENERIC_FAILURE: &str = "Something went wrong.";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Required filters were missing; no query is run.
    #[error("{0}")]
    BadRequest(&'static str),
    /// The query string itself could not be deserialized.
    #[error("malformed query string: {0}")]
    BadQuery(#[from] QueryRejection),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message.to_string()),
            ApiError::BadQuery(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
            ApiError::Database(err) => {
                tracing::error!("Query failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE.to_string())
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_maps_to_400() {
        let response = ApiError::BadRequest(MISSING_YEAR).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn database_error_maps_to_500() {
        let response = ApiError::from(sqlx::Error::RowNotFound).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
