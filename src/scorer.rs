use futures::future::try_join_all;
use tracing::debug;

use std::collections::BTreeMap;
use std::sync::Arc;

use embedding::{Embedder, EmbeddingError};

use crate::category::Category;
use crate::error::ScoreError;
use crate::similarity::{centroid, cosine_similarity};
use crate::types::{ClarityResult, WordAnalysis};

/// Scores words for ambiguity against the fixed category prototypes.
///
/// Holds only the injected embedding backend; every [`analyze`](Scorer::analyze)
/// call is an isolated, stateless computation.
#[derive(Clone)]
pub struct Scorer {
    embedder: Arc<dyn Embedder>,
}

impl Scorer {
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        Scorer { embedder }
    }

    /// Identifier of the embedding model backing this scorer.
    pub fn model(&self) -> &str {
        self.embedder.model()
    }

    /// Analyze one word: embed it alongside the 16 fixed context words,
    /// compare it against each category centroid, and classify the result.
    ///
    /// The word is embedded first; the 16 context-word calls then fan out
    /// concurrently and the first failure aborts the rest. A failing provider
    /// therefore never triggers the full 17-call budget.
    pub async fn analyze(&self, word: &str) -> Result<WordAnalysis, ScoreError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(ScoreError::InvalidInput("no word provided".into()));
        }

        let word_vector = self.embedder.embed(word).await?;
        let dimension = word_vector.len();

        let context_vectors = try_join_all(
            Category::ALL
                .iter()
                .flat_map(|category| category.context_words())
                .map(|context_word| self.embedder.embed(context_word)),
        )
        .await?;

        for vector in &context_vectors {
            if vector.len() != dimension {
                return Err(ScoreError::EmbeddingProvider(
                    EmbeddingError::MalformedResponse(format!(
                        "context embedding dimension {} does not match word embedding dimension {dimension}",
                        vector.len()
                    )),
                ));
            }
        }

        let centroids: Vec<Vec<f32>> = context_vectors
            .chunks_exact(Category::WORDS_PER_CATEGORY)
            .map(centroid)
            .collect();

        let mut contexts = BTreeMap::new();
        for (category, center) in Category::ALL.iter().copied().zip(centroids.iter()) {
            let similarity = cosine_similarity(&word_vector, center)?;
            contexts.insert(category, similarity);
        }

        let max_similarity = contexts.values().copied().fold(f32::MIN, f32::max);
        let clarity = ClarityResult::from_max_similarity(max_similarity);
        debug!(
            word,
            score = clarity.score,
            ambiguity = clarity.ambiguity,
            level = %clarity.level,
            "scored word"
        );

        Ok(WordAnalysis {
            word: word.to_string(),
            contexts,
            clarity,
        })
    }
}
