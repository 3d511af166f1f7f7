use async_trait::async_trait;
use fxhash::hash64;

use crate::error::EmbeddingError;
use crate::Embedder;

/// Deterministic offline backend for tests and keyless local runs.
///
/// Generates sinusoid values derived from a hash of the input text, so the
/// same text always maps to the same unit-length vector with minimal CPU cost.
#[derive(Debug, Clone)]
pub struct StubEmbedder {
    dimension: usize,
}

impl StubEmbedder {
    /// Stub with the default 384-element vectors.
    pub fn new() -> Self {
        Self::with_dimension(384)
    }

    /// Stub emitting vectors of the given dimension.
    pub fn with_dimension(dimension: usize) -> Self {
        Self { dimension }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }
}

impl Default for StubEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Embedder for StubEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(stub_vector(text, self.dimension))
    }

    fn model(&self) -> &str {
        "deterministic-stub"
    }
}

fn stub_vector(text: &str, dim: usize) -> Vec<f32> {
    let mut v = vec![0f32; dim];
    // Hash the str, not the byte slice: the str impl feeds the hasher a
    // trailing sentinel byte, so even empty text gets a non-zero seed.
    let h = hash64(text);
    for (idx, value) in v.iter_mut().enumerate() {
        *value = ((h >> (idx % 32)) as f32 * 0.0001).sin();
    }
    l2_normalize_in_place(&mut v);
    v
}

/// In-place L2 normalization. Uses f32 throughout for SIMD auto-vectorization.
fn l2_normalize_in_place(v: &mut [f32]) {
    let norm_sq: f32 = v.iter().map(|x| x * x).sum();
    if norm_sq > 0.0 {
        let inv_norm = norm_sq.sqrt().recip();
        for x in v.iter_mut() {
            *x *= inv_norm;
        }
    }
}
