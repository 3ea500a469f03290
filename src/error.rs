use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Artifact error: {0}")]
    Artifact(#[from] serde_json::Error),

    #[error("Empty query")]
    EmptyQuery,

    #[error("The catalog contains no entries")]
    EmptyCatalog,

    #[error("No close match found for '{query}' (best candidate '{best}' scored {confidence:.0})")]
    NoCloseMatch {
        query: String,
        best: String,
        confidence: f64,
    },

    #[error("Movie not found in catalog: {0}")]
    NotFound(String),

    #[error("Similarity matrix does not align with the catalog: {movies} movies, {rows} matrix rows")]
    MisalignedIndex { movies: usize, rows: usize },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::EmptyQuery => (
                StatusCode::BAD_REQUEST,
                "Please enter or select a movie".to_string(),
            ),
            AppError::NoCloseMatch { .. } | AppError::NotFound(_) => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            AppError::EmptyCatalog
            | AppError::MisalignedIndex { .. }
            | AppError::Catalog(_)
            | AppError::Io(_)
            | AppError::Artifact(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
