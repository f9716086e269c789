use thiserror::Error;

use super::feature_vector::FeatureVector;

/// Error types for similarity scoring
#[derive(Debug, Error, PartialEq)]
pub enum SimilarityError {
    #[error("Candidate {index} has shape {found} but the query has {expected}")]
    DimensionMismatch {
        index: usize,
        expected: String,
        found: String,
    },
}

/// Cosine similarity between two vectors of the same shape.
///
/// When either norm is zero, or the norm product underflows to zero, the
/// similarity is defined as 0.0 instead of NaN. The result is clamped to [-1, 1] to absorb
/// rounding just past the bounds.
pub fn cosine_similarity(a: &FeatureVector, b: &FeatureVector) -> f64 {
    let norm_product = a.norm() * b.norm();
    if norm_product == 0.0 || !norm_product.is_finite() {
        return 0.0;
    }

    (a.dot(b) / norm_product).clamp(-1.0, 1.0)
}

/// Scores every candidate against the query, in candidate order
pub fn score_candidates(
    query: &FeatureVector,
    candidates: &[FeatureVector],
) -> Result<Vec<f64>, SimilarityError> {
    candidates
        .iter()
        .enumerate()
        .map(|(index, candidate)| {
            if candidate.len() != query.len() || candidate.schema() != query.schema() {
                return Err(SimilarityError::DimensionMismatch {
                    index,
                    expected: shape(query),
                    found: shape(candidate),
                });
            }
            Ok(cosine_similarity(query, candidate))
        })
        .collect()
}

fn shape(vector: &FeatureVector) -> String {
    format!("{}[{}]", vector.schema(), vector.len())
}
