use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// The position of a movie within the catalog is the index used to address
/// the similarity matrix, so `Movie` itself carries no id field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    /// Title, unique within the catalog and used as the exact lookup key
    pub name: String,
    pub description: String,
    pub language: String,
    pub genre: String,
    pub cast: String,
}

/// Outcome of resolving free-text user input against the catalog
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Resolution {
    /// Catalog name the query resolved to
    pub matched_name: String,
    /// Fuzzy-match confidence, 0..100
    pub confidence: f64,
    /// True when the input already was the catalog name (after trimming);
    /// false means the client should surface a "did you mean" note
    pub exact_input: bool,
}

/// Response body for the recommendations endpoint
#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub query: String,
    #[serde(flatten)]
    pub resolution: Resolution,
    pub recommendations: Vec<Movie>,
}

/// Response body for the languages endpoint
#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    /// Distinct catalog languages, preceded by the "All" sentinel
    pub languages: Vec<String>,
}

/// Response body for the titles endpoint
#[derive(Debug, Serialize)]
pub struct TitlesResponse {
    pub language: String,
    pub titles: Vec<String>,
}
