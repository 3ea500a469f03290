use crate::error::{AppError, AppResult};
use crate::models::Movie;
use crate::store::Domain;

/// Ranks every other catalog entry by its precomputed similarity to
/// `entry_name` and returns up to `n` of them, best first.
///
/// `entry_name` must match a catalog name verbatim (the matcher produces
/// such names from arbitrary input); otherwise this fails with `NotFound`.
/// The entry itself is never part of the output. Ties on score rank the
/// lower catalog index first, which the stable sort preserves. When `n`
/// exceeds the number of other entries, all of them are returned.
pub fn recommend(domain: &Domain, entry_name: &str, n: usize) -> AppResult<Vec<Movie>> {
    let idx = domain
        .catalog
        .index_of(entry_name)
        .ok_or_else(|| AppError::NotFound(entry_name.to_string()))?;

    let mut scored: Vec<(usize, f32)> = domain
        .similarity
        .row(idx)
        .iter()
        .copied()
        .enumerate()
        .filter(|&(other, _)| other != idx)
        .collect();
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let recommendations: Vec<Movie> = scored
        .into_iter()
        .take(n)
        .map(|(other, _)| domain.catalog.movies()[other].clone())
        .collect();

    tracing::debug!(
        entry = entry_name,
        requested = n,
        returned = recommendations.len(),
        "Ranked recommendations"
    );
    Ok(recommendations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Catalog, SimilarityIndex};

    fn movie(name: &str) -> Movie {
        Movie {
            name: name.to_string(),
            description: format!("About {}", name),
            language: "Hindi".to_string(),
            genre: "Drama".to_string(),
            cast: "Ensemble".to_string(),
        }
    }

    fn domain(names: &[&str], rows: Vec<Vec<f32>>) -> Domain {
        let catalog = Catalog::from_movies(names.iter().map(|n| movie(n)).collect()).unwrap();
        Domain::new(catalog, SimilarityIndex::from_rows(rows)).unwrap()
    }

    fn four_movie_domain() -> Domain {
        domain(
            &["A", "B", "C", "D"],
            vec![
                vec![1.0, 0.9, 0.5, 0.2],
                vec![0.9, 1.0, 0.4, 0.3],
                vec![0.5, 0.4, 1.0, 0.6],
                vec![0.2, 0.3, 0.6, 1.0],
            ],
        )
    }

    #[test]
    fn test_top_n_by_similarity() {
        let d = four_movie_domain();
        let recs = recommend(&d, "A", 2).unwrap();
        let names: Vec<&str> = recs
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["B", "C"]);
    }

    #[test]
    fn test_query_never_recommends_itself() {
        let d = four_movie_domain();
        for name in ["A", "B", "C", "D"] {
            let result = recommend(&d, name, 10).unwrap();
            assert!(result.iter().all(|m| m.name != name));
        }
    }

    #[test]
    fn test_returns_exactly_n_when_available() {
        let d = four_movie_domain();
        assert_eq!(recommend(&d, "A", 1).unwrap().len(), 1);
        assert_eq!(recommend(&d, "A", 3).unwrap().len(), 3);
    }

    #[test]
    fn test_oversized_n_returns_all_others() {
        let d = domain(
            &["A", "B", "C"],
            vec![
                vec![1.0, 0.8, 0.3],
                vec![0.8, 1.0, 0.2],
                vec![0.3, 0.2, 1.0],
            ],
        );
        let result = recommend(&d, "A", 5).unwrap();
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_score_ties_rank_lower_index_first() {
        let d = domain(
            &["A", "B", "C", "D"],
            vec![
                vec![1.0, 0.5, 0.5, 0.5],
                vec![0.5, 1.0, 0.0, 0.0],
                vec![0.5, 0.0, 1.0, 0.0],
                vec![0.5, 0.0, 0.0, 1.0],
            ],
        );
        let recs = recommend(&d, "A", 3).unwrap();
        let names: Vec<&str> = recs
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["B", "C", "D"]);
    }

    #[test]
    fn test_self_excluded_even_when_another_entry_ties_the_diagonal() {
        // B's row ties A at the maximum score; A must still never appear.
        let d = domain(
            &["A", "B", "C"],
            vec![
                vec![1.0, 1.0, 0.2],
                vec![1.0, 1.0, 0.4],
                vec![0.2, 0.4, 1.0],
            ],
        );
        let recs = recommend(&d, "B", 2).unwrap();
        let names: Vec<&str> = recs
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_lookup_is_case_sensitive_and_exact() {
        let d = four_movie_domain();
        let result = recommend(&d, "a", 2);
        assert!(matches!(result, Err(AppError::NotFound(name)) if name == "a"));
    }
}
