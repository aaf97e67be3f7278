use std::path::Path;

pub mod catalog;
pub mod matrix;

pub use catalog::Catalog;
pub use matrix::SimilarityMatrix;

use crate::error::{AppError, AppResult};

/// Catalog file name inside the data directory
pub const CATALOG_FILE: &str = "movies.json";
/// Similarity matrix file name inside the data directory
pub const SIMILARITY_FILE: &str = "similarity.json";

/// Catalog and similarity matrix, loaded once and never mutated
///
/// Construction guarantees the matrix has exactly one row per catalog entry.
#[derive(Debug, Clone)]
pub struct RecommendationContext {
    catalog: Catalog,
    matrix: SimilarityMatrix,
}

impl RecommendationContext {
    pub fn new(catalog: Catalog, matrix: SimilarityMatrix) -> AppResult<Self> {
        if catalog.len() != matrix.size() {
            return Err(AppError::DataLoad(format!(
                "Catalog has {} movies but similarity matrix has {} rows",
                catalog.len(),
                matrix.size()
            )));
        }

        Ok(Self { catalog, matrix })
    }

    /// Loads `movies.json` and `similarity.json` from `data_dir`
    pub fn load(data_dir: &Path) -> AppResult<Self> {
        let catalog = Catalog::from_json(&read_required(data_dir, CATALOG_FILE)?)?;
        let matrix = SimilarityMatrix::from_json(&read_required(data_dir, SIMILARITY_FILE)?)?;

        if catalog.duplicate_titles() > 0 {
            tracing::warn!(
                duplicates = catalog.duplicate_titles(),
                "Catalog contains duplicate titles; lookups use the first occurrence"
            );
        }

        let context = Self::new(catalog, matrix)?;

        tracing::info!(
            movies = context.catalog.len(),
            data_dir = %data_dir.display(),
            "Loaded catalog and similarity matrix"
        );

        Ok(context)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn matrix(&self) -> &SimilarityMatrix {
        &self.matrix
    }
}

fn read_required(data_dir: &Path, file_name: &str) -> AppResult<Vec<u8>> {
    let path = data_dir.join(file_name);

    if !path.exists() {
        return Err(AppError::DataLoad(format!(
            "File '{}' not found. Please check the file path.",
            path.display()
        )));
    }

    std::fs::read(&path)
        .map_err(|e| AppError::DataLoad(format!("Failed to read '{}': {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn catalog_json(n: usize) -> String {
        let rows: Vec<String> = (0..n)
            .map(|i| format!(r#"{{"movie_id": {}, "title": "Movie {}"}}"#, i + 1, i))
            .collect();
        format!("[{}]", rows.join(","))
    }

    fn identity_json(n: usize) -> String {
        let rows: Vec<String> = (0..n)
            .map(|i| {
                let cells: Vec<&str> = (0..n).map(|j| if i == j { "1.0" } else { "0.0" }).collect();
                format!("[{}]", cells.join(","))
            })
            .collect();
        format!("[{}]", rows.join(","))
    }

    fn write_data(catalog: Option<String>, matrix: Option<String>) -> TempDir {
        let dir = TempDir::new().unwrap();
        if let Some(catalog) = catalog {
            fs::write(dir.path().join(CATALOG_FILE), catalog).unwrap();
        }
        if let Some(matrix) = matrix {
            fs::write(dir.path().join(SIMILARITY_FILE), matrix).unwrap();
        }
        dir
    }

    #[test]
    fn test_load_matching_shapes() {
        let dir = write_data(Some(catalog_json(4)), Some(identity_json(4)));
        let context = RecommendationContext::load(dir.path()).unwrap();
        assert_eq!(context.catalog().len(), 4);
        assert_eq!(context.matrix().size(), 4);
    }

    #[test]
    fn test_catalog_of_five_against_six_by_six_is_fatal() {
        let dir = write_data(Some(catalog_json(5)), Some(identity_json(6)));
        let err = RecommendationContext::load(dir.path()).unwrap_err();
        assert!(matches!(err, AppError::DataLoad(_)));
        assert!(err.to_string().contains("5 movies"));
        assert!(err.to_string().contains("6 rows"));
    }

    #[test]
    fn test_missing_catalog_is_fatal() {
        let dir = write_data(None, Some(identity_json(2)));
        let err = RecommendationContext::load(dir.path()).unwrap_err();
        assert!(err.to_string().contains(CATALOG_FILE));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_missing_matrix_is_fatal() {
        let dir = write_data(Some(catalog_json(2)), None);
        let err = RecommendationContext::load(dir.path()).unwrap_err();
        assert!(err.to_string().contains(SIMILARITY_FILE));
    }
}
