use std::fmt;

use serde::{Deserialize, Serialize};

/// The four fixed semantic categories a word is scored against.
///
/// Each category carries exactly four representative words. Both the set of
/// categories and the word lists are frozen at compile time; they are
/// configuration data, not runtime state.
///
/// The derived `Ord` follows declaration order, which is also the order the
/// `contexts` map serializes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Files, documents, code, systems.
    Technical,
    /// Feelings, heart, soul, emotion.
    Emotional,
    /// Objects, materials, bodies, things.
    Physical,
    /// Ideas, concepts, thoughts, notions.
    Abstract,
}

impl Category {
    /// All categories, in scoring and serialization order.
    pub const ALL: [Category; 4] = [
        Category::Technical,
        Category::Emotional,
        Category::Physical,
        Category::Abstract,
    ];

    /// Number of representative words backing each category prototype.
    pub const WORDS_PER_CATEGORY: usize = 4;

    /// The representative words whose mean embedding forms this category's
    /// prototype.
    pub const fn context_words(self) -> [&'static str; 4] {
        match self {
            Category::Technical => ["file", "document", "code", "system"],
            Category::Emotional => ["feeling", "heart", "soul", "emotion"],
            Category::Physical => ["object", "material", "body", "thing"],
            Category::Abstract => ["idea", "concept", "thought", "notion"],
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Technical => "technical",
            Category::Emotional => "emotional",
            Category::Physical => "physical",
            Category::Abstract => "abstract",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
