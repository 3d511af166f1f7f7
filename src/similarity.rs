//! Vector math for clarity scoring: cosine similarity and centroids.

use crate::error::ScoreError;

/// Cosine similarity between two equal-length vectors.
///
/// Returns a value in `[-1.0, 1.0]` for well-formed inputs. Either vector
/// having zero norm makes the quantity undefined; that is reported as
/// [`ScoreError::DegenerateVector`] instead of silently returning NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32, ScoreError> {
    debug_assert_eq!(a.len(), b.len(), "cosine inputs must share a dimension");

    let mut dot = 0.0f32;
    let mut norm_a_sq = 0.0f32;
    let mut norm_b_sq = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a_sq += x * x;
        norm_b_sq += y * y;
    }

    if norm_a_sq == 0.0 || norm_b_sq == 0.0 {
        return Err(ScoreError::DegenerateVector(
            "cosine similarity undefined for a zero-norm vector".into(),
        ));
    }

    Ok(dot / (norm_a_sq.sqrt() * norm_b_sq.sqrt()))
}

/// Component-wise mean of a non-empty set of equal-length vectors.
pub fn centroid(vectors: &[Vec<f32>]) -> Vec<f32> {
    debug_assert!(!vectors.is_empty(), "centroid of an empty set");

    let dim = vectors[0].len();
    let mut mean = vec![0.0f32; dim];
    for vector in vectors {
        debug_assert_eq!(vector.len(), dim, "centroid inputs must share a dimension");
        for (slot, value) in mean.iter_mut().zip(vector.iter()) {
            *slot += value;
        }
    }

    let scale = (vectors.len() as f32).recip();
    for slot in &mut mean {
        *slot *= scale;
    }
    mean
}
