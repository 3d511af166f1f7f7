//! # LexiGauge (`lexigauge`)
//!
//! ## Purpose
//!
//! `lexigauge` scores how ambiguous a single word is. It embeds the word,
//! embeds a fixed set of sixteen context words spanning four categories
//! (technical, emotional, physical, abstract), averages each category's
//! embeddings into a prototype, and measures how strongly the word leans
//! toward its nearest category via cosine similarity. A word whose best
//! similarity is high reads one way; a word close to nothing in particular
//! is flagged as ambiguous and a poor choice for prompts.
//!
//! In a typical deployment you will:
//! - Use the `embedding` crate to build a backend (hosted API or the
//!   deterministic stub) and hand it to [`Scorer`].
//! - Call [`Scorer::analyze`] per word; the HTTP layer in
//!   `lexigauge-server` exposes the same operation over `POST /analyze`.
//!
//! ## Core Types
//!
//! - [`Scorer`]: the engine; holds the injected embedding backend and
//!   nothing else.
//! - [`Category`]: the four fixed context categories and their
//!   representative words.
//! - [`WordAnalysis`]: per-category similarities plus the clarity verdict.
//! - [`ClarityResult`]: score, ambiguity, level, and the human-facing
//!   interpretation / recommendation strings.
//! - [`AmbiguityLevel`]: the low / medium / high bucket.
//! - [`ScoreError`]: invalid input, provider failure, or a degenerate
//!   (zero-norm) embedding.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use embedding::StubEmbedder;
//! use lexigauge::Scorer;
//!
//! # async fn run() {
//! let scorer = Scorer::new(Arc::new(StubEmbedder::new()));
//!
//! let analysis = scorer.analyze("file").await.expect("analyze");
//! println!(
//!     "{}: score={:.1} ambiguity={:.3} level={} {}",
//!     analysis.word,
//!     analysis.clarity.score,
//!     analysis.clarity.ambiguity,
//!     analysis.clarity.level,
//!     analysis.clarity.emoji,
//! );
//! for (category, similarity) in &analysis.contexts {
//!     println!("  {category}: {similarity:.3}");
//! }
//! # }
//! ```

pub mod category;
pub mod classify;
pub mod error;
pub mod scorer;
pub mod similarity;
pub mod types;

pub use crate::category::Category;
pub use crate::classify::{AmbiguityLevel, classify_ambiguity};
pub use crate::error::ScoreError;
pub use crate::scorer::Scorer;
pub use crate::similarity::{centroid, cosine_similarity};
pub use crate::types::{ClarityResult, WordAnalysis};
