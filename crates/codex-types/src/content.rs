use serde::{Deserialize, Serialize};

/// Externally supplied copy and theming for the codex view.
///
/// Every field is optional. Blank strings are treated the same as missing
/// ones by [`ContentConfig::text`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub heading: Option<String>,
    pub tagline: Option<String>,
    pub highlights: Vec<String>,
    pub paragraphs: Vec<String>,
    pub accent_color: Option<String>,
    pub hero_gradient: Vec<String>,
    pub primary_action_label: Option<String>,
}

impl ContentConfig {
    /// Returns the value if it holds anything besides whitespace.
    pub fn text(value: &Option<String>) -> Option<&str> {
        value.as_deref().filter(|v| !v.trim().is_empty())
    }

    pub fn gradient_stop(&self, index: usize) -> Option<&str> {
        self.hero_gradient
            .get(index)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    pub fn non_blank_highlights(&self) -> impl Iterator<Item = &str> {
        self.highlights
            .iter()
            .map(String::as_str)
            .filter(|line| !line.trim().is_empty())
    }

    pub fn non_blank_paragraphs(&self) -> impl Iterator<Item = &str> {
        self.paragraphs
            .iter()
            .map(String::as_str)
            .filter(|line| !line.trim().is_empty())
    }
}
