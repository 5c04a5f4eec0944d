use serde::{Deserialize, Serialize};

/// A catalogued martial soul.
///
/// Identity is the name, but duplicates are legal: two records with the same
/// name load as two entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    #[serde(default)]
    pub grade: i64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub affinities: Vec<String>,
    #[serde(default)]
    pub description: String,
}

impl Entity {
    pub fn new(name: impl Into<String>, grade: i64) -> Self {
        Self {
            name: name.into(),
            grade,
            category: String::new(),
            affinities: Vec::new(),
            description: String::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_affinities<I, S>(mut self, affinities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.affinities = affinities.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// First listed affinity, used to pick the spotlight tint.
    pub fn primary_affinity(&self) -> Option<&str> {
        self.affinities.first().map(String::as_str)
    }
}
