use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::models::{LanguagesResponse, RecommendationsResponse, Resolution, TitlesResponse};
use crate::services::language::{self, ALL_LANGUAGES};
use crate::services::{matcher, recommender};

use super::AppState;

/// Default and maximum recommendation counts, matching the selection range
/// offered upstream.
const DEFAULT_COUNT: usize = 5;
const MAX_COUNT: usize = 10;

#[derive(Debug, Deserialize)]
pub struct TitlesQuery {
    /// Language to narrow the candidate list by; omitted means "All"
    pub language: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationsQuery {
    /// Free-text movie title, resolved against the catalog by fuzzy match
    pub q: String,
    /// How many recommendations to return (1..=10, default 5)
    pub n: Option<usize>,
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Lists the languages present in the catalog, preceded by the "All" sentinel
pub async fn get_languages(State(state): State<AppState>) -> Json<LanguagesResponse> {
    let mut languages = vec![ALL_LANGUAGES.to_string()];
    languages.extend(state.domain.catalog.languages());
    Json(LanguagesResponse { languages })
}

/// Lists candidate movie names, optionally narrowed to one language
pub async fn get_titles(
    State(state): State<AppState>,
    Query(params): Query<TitlesQuery>,
) -> Json<TitlesResponse> {
    let language = params.language.unwrap_or_else(|| ALL_LANGUAGES.to_string());
    let titles = language::filter_by_language(&state.domain.catalog, &language);
    Json(TitlesResponse { language, titles })
}

/// Resolves a free-text query to a catalog entry and returns the movies most
/// similar to it.
///
/// The fuzzy matcher runs first so that any input accepted here addresses the
/// catalog by its exact name; a best match below the acceptance threshold
/// rejects the whole request rather than recommending from a weak match.
pub async fn get_recommendations(
    State(state): State<AppState>,
    Query(params): Query<RecommendationsQuery>,
) -> AppResult<Json<RecommendationsResponse>> {
    let query = params.q.trim();
    if query.is_empty() {
        return Err(AppError::EmptyQuery);
    }
    let n = params.n.unwrap_or(DEFAULT_COUNT).clamp(1, MAX_COUNT);

    let best = matcher::find_best_match(query, state.domain.catalog.names())?;
    if !best.is_accepted() {
        tracing::info!(query, best = %best.name, confidence = best.confidence, "No close match");
        return Err(AppError::NoCloseMatch {
            query: query.to_string(),
            best: best.name,
            confidence: best.confidence,
        });
    }

    let exact_input = best.name == query;
    if !exact_input {
        tracing::info!(query, matched = %best.name, "Query resolved by fuzzy match");
    }

    let recommendations = recommender::recommend(&state.domain, &best.name, n)?;

    Ok(Json(RecommendationsResponse {
        query: query.to_string(),
        resolution: Resolution {
            matched_name: best.name,
            confidence: best.confidence,
            exact_input,
        },
        recommendations,
    }))
}
