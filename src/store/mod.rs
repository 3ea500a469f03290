use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{AppError, AppResult};
use crate::models::Movie;

/// Ordered, read-only movie table.
///
/// Row order is significant: the position of a movie here addresses the
/// corresponding row and column of the similarity matrix. That correspondence
/// is established by the offline build and only verified, never re-derived.
#[derive(Debug)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    /// Builds a catalog from already-parsed records. Fails on an empty list.
    pub fn from_movies(movies: Vec<Movie>) -> AppResult<Self> {
        if movies.is_empty() {
            return Err(AppError::EmptyCatalog);
        }
        Ok(Self { movies })
    }

    /// Reads the catalog CSV (header: name, description, language, genre, cast).
    pub fn from_csv_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let mut reader = csv::Reader::from_path(path.as_ref())?;
        let mut movies = Vec::new();
        for record in reader.deserialize() {
            let movie: Movie = record?;
            movies.push(movie);
        }
        tracing::info!(movies = movies.len(), path = %path.as_ref().display(), "Loaded catalog");
        Self::from_movies(movies)
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Iterates catalog names in row order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.movies.iter().map(|m| m.name.as_str())
    }

    /// Exact, case-sensitive name lookup. Duplicate names resolve to the
    /// first occurrence.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.movies.iter().position(|m| m.name == name)
    }

    /// Distinct languages present in the catalog, sorted.
    pub fn languages(&self) -> Vec<String> {
        let distinct: BTreeSet<&str> = self.movies.iter().map(|m| m.language.as_str()).collect();
        distinct.into_iter().map(String::from).collect()
    }
}

/// Precomputed pairwise similarity scores, one row per catalog entry.
#[derive(Debug)]
pub struct SimilarityIndex {
    rows: Vec<Vec<f32>>,
}

impl SimilarityIndex {
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Self {
        Self { rows }
    }

    /// Reads the matrix from a JSON array-of-arrays artifact.
    pub fn from_json_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let file = File::open(path.as_ref())?;
        let rows: Vec<Vec<f32>> = serde_json::from_reader(BufReader::new(file))?;
        tracing::info!(rows = rows.len(), path = %path.as_ref().display(), "Loaded similarity matrix");
        Ok(Self::from_rows(rows))
    }

    pub fn dim(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, idx: usize) -> &[f32] {
        &self.rows[idx]
    }
}

/// Immutable handle over the catalog and its similarity matrix.
///
/// Constructed once at startup and shared read-only for the process
/// lifetime; a new catalog/matrix pair requires a restart.
#[derive(Debug)]
pub struct Domain {
    pub catalog: Catalog,
    pub similarity: SimilarityIndex,
}

impl Domain {
    /// Pairs a catalog with its matrix, failing fast on any misalignment:
    /// the matrix must be square with dimension equal to the catalog length.
    pub fn new(catalog: Catalog, similarity: SimilarityIndex) -> AppResult<Self> {
        let movies = catalog.len();
        if similarity.dim() != movies {
            return Err(AppError::MisalignedIndex {
                movies,
                rows: similarity.dim(),
            });
        }
        for row in &similarity.rows {
            if row.len() != movies {
                return Err(AppError::MisalignedIndex {
                    movies,
                    rows: row.len(),
                });
            }
        }
        Ok(Self {
            catalog,
            similarity,
        })
    }

    /// Loads both artifacts from disk and verifies their alignment.
    pub fn load(
        catalog_path: impl AsRef<Path>,
        similarity_path: impl AsRef<Path>,
    ) -> AppResult<Self> {
        let catalog = Catalog::from_csv_path(catalog_path)?;
        let similarity = SimilarityIndex::from_json_path(similarity_path)?;
        Self::new(catalog, similarity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(name: &str, language: &str) -> Movie {
        Movie {
            name: name.to_string(),
            description: format!("About {}", name),
            language: language.to_string(),
            genre: "Drama".to_string(),
            cast: "Ensemble".to_string(),
        }
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let result = Catalog::from_movies(vec![]);
        assert!(matches!(result, Err(AppError::EmptyCatalog)));
    }

    #[test]
    fn test_index_of_is_exact_and_first_occurrence() {
        let catalog = Catalog::from_movies(vec![
            movie("Drishyam", "Malayalam"),
            movie("Dangal", "Hindi"),
            movie("Drishyam", "Hindi"),
        ])
        .unwrap();

        assert_eq!(catalog.index_of("Dangal"), Some(1));
        assert_eq!(catalog.index_of("Drishyam"), Some(0));
        assert_eq!(catalog.index_of("drishyam"), None);
    }

    #[test]
    fn test_languages_are_distinct_and_sorted() {
        let catalog = Catalog::from_movies(vec![
            movie("A", "Tamil"),
            movie("B", "Hindi"),
            movie("C", "Tamil"),
        ])
        .unwrap();

        assert_eq!(catalog.languages(), vec!["Hindi", "Tamil"]);
    }

    #[test]
    fn test_domain_rejects_dimension_mismatch() {
        let catalog =
            Catalog::from_movies(vec![movie("A", "Hindi"), movie("B", "Hindi")]).unwrap();
        let similarity = SimilarityIndex::from_rows(vec![vec![1.0, 0.5, 0.1]; 3]);

        let result = Domain::new(catalog, similarity);
        assert!(matches!(
            result,
            Err(AppError::MisalignedIndex { movies: 2, rows: 3 })
        ));
    }

    #[test]
    fn test_domain_rejects_ragged_matrix() {
        let catalog =
            Catalog::from_movies(vec![movie("A", "Hindi"), movie("B", "Hindi")]).unwrap();
        let similarity = SimilarityIndex::from_rows(vec![vec![1.0, 0.5], vec![0.5]]);

        let result = Domain::new(catalog, similarity);
        assert!(matches!(
            result,
            Err(AppError::MisalignedIndex { movies: 2, rows: 1 })
        ));
    }

    #[test]
    fn test_domain_accepts_aligned_pair() {
        let catalog =
            Catalog::from_movies(vec![movie("A", "Hindi"), movie("B", "Hindi")]).unwrap();
        let similarity = SimilarityIndex::from_rows(vec![vec![1.0, 0.5], vec![0.5, 1.0]]);

        let domain = Domain::new(catalog, similarity).unwrap();
        assert_eq!(domain.similarity.row(0), &[1.0, 0.5]);
    }
}
