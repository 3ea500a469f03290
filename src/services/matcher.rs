use strsim::normalized_levenshtein;

use crate::error::{AppError, AppResult};

/// Minimum confidence for a fuzzy match to be usable. Scores below this
/// reject the query; exactly the threshold is accepted.
pub const ACCEPT_THRESHOLD: f64 = 80.0;

/// The highest-scoring catalog name for a query
#[derive(Debug, Clone, PartialEq)]
pub struct BestMatch {
    /// Catalog name, verbatim as it appears in the catalog
    pub name: String,
    /// Similarity to the query, 0..100
    pub confidence: f64,
}

impl BestMatch {
    /// Whether the match clears the acceptance threshold (`>= 80`).
    pub fn is_accepted(&self) -> bool {
        self.confidence >= ACCEPT_THRESHOLD
    }
}

/// Scores `query` against every catalog name and returns the single best.
///
/// Scoring is normalized Levenshtein similarity over case-folded,
/// whitespace-collapsed strings, scaled to 0..100; an exact match after
/// normalization scores 100. On tied scores the first name in catalog order
/// wins. Pure function of its inputs.
///
/// Fails with `EmptyCatalog` when `names` yields nothing.
pub fn find_best_match<'a>(
    query: &str,
    names: impl IntoIterator<Item = &'a str>,
) -> AppResult<BestMatch> {
    let normalized_query = normalize(query);

    let mut best: Option<BestMatch> = None;
    for name in names {
        let confidence = normalized_levenshtein(&normalized_query, &normalize(name)) * 100.0;
        let improves = match &best {
            Some(current) => confidence > current.confidence,
            None => true,
        };
        if improves {
            best = Some(BestMatch {
                name: name.to_string(),
                confidence,
            });
        }
    }

    best.ok_or(AppError::EmptyCatalog)
}

fn normalize(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
