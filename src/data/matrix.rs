use crate::error::{AppError, AppResult};

/// Dense square matrix of precomputed similarity scores, stored row-major
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    size: usize,
    scores: Vec<f64>,
}

impl SimilarityMatrix {
    /// Builds a matrix from rows, rejecting anything that is not N×N
    pub fn from_rows(rows: Vec<Vec<f64>>) -> AppResult<Self> {
        let size = rows.len();
        let mut scores = Vec::with_capacity(size * size);

        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(AppError::DataLoad(format!(
                    "Similarity matrix is not square: row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    size
                )));
            }
            scores.extend(row);
        }

        Ok(Self { size, scores })
    }

    /// Parses a matrix from a JSON array of arrays
    pub fn from_json(bytes: &[u8]) -> AppResult<Self> {
        let rows: Vec<Vec<f64>> = serde_json::from_slice(bytes)
            .map_err(|e| AppError::DataLoad(format!("Malformed similarity matrix: {}", e)))?;
        Self::from_rows(rows)
    }

    pub fn row(&self, index: usize) -> Option<&[f64]> {
        if index >= self.size {
            return None;
        }
        let start = index * self.size;
        Some(&self.scores[start..start + self.size])
    }

    /// Number of rows (equal to the number of columns)
    pub fn size(&self) -> usize {
        self.size
    }
}
