use crate::loader::parse_records;
use crate::source::{SourceLocation, SourceResolver};
use crate::summary::{summarize, top_entities};
use crate::{LoadError, Result};
use codex_types::{AffinityCount, Entity, GradeCount, Summary};
use serde_json::Value;
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

/// Handle shared between the views that present one compendium.
pub type SharedCompendium = Rc<RefCell<Compendium>>;

/// Owns the loaded martial souls and their derived summary.
///
/// Either fully loaded (at least one entity, summary computed, source known)
/// or fully reset; a failed load never leaves partial state behind.
#[derive(Debug, Default)]
pub struct Compendium {
    loaded: bool,
    source: SourceLocation,
    entities: Vec<Entity>,
    summary: Summary,
}

impl Compendium {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedCompendium {
        Rc::new(RefCell::new(Self::new()))
    }

    pub fn load_from_path(&mut self, path: &Path) -> Result<usize> {
        self.reset();

        if !path.exists() {
            return Err(LoadError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        self.load_from_str(&content, SourceLocation::Resolved(path.to_path_buf()))
    }

    pub fn load_from_str(&mut self, content: &str, source: SourceLocation) -> Result<usize> {
        self.reset();

        let document: Value = serde_json::from_str(content)?;
        self.load_from_value(&document, source)
    }

    /// Loads every valid record of `document`, returning how many were kept.
    pub fn load_from_value(&mut self, document: &Value, source: SourceLocation) -> Result<usize> {
        self.reset();

        let entities = parse_records(document)?;
        if entities.is_empty() {
            return Err(LoadError::NoValidEntities);
        }

        self.summary = summarize(&entities);
        self.entities = entities;
        self.source = source;
        self.loaded = true;
        Ok(self.entities.len())
    }

    pub fn load_default(&mut self, resolver: &SourceResolver) -> Result<usize> {
        match resolver.resolve() {
            Some(path) => self.load_from_path(&path),
            None => {
                self.reset();
                Err(LoadError::Unresolved(resolver.describe()))
            }
        }
    }

    /// Loads through `resolver` unless a load already succeeded.
    ///
    /// Failures are logged and reported as `false`; the store stays empty.
    pub fn ensure_loaded(&mut self, resolver: &SourceResolver) -> bool {
        if self.loaded {
            return true;
        }

        match self.load_default(resolver) {
            Ok(count) => {
                tracing::info!(count, source = %self.source, "martial soul compendium loaded");
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "martial soul compendium unavailable");
                false
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn source(&self) -> &SourceLocation {
        &self.source
    }

    pub fn top_entities(&self, n: usize) -> Vec<&Entity> {
        top_entities(&self.entities, n)
    }

    pub fn top_affinities(&self, n: usize) -> &[AffinityCount] {
        self.summary.top_affinities(n)
    }

    pub fn grade_counts_descending(&self) -> &[GradeCount] {
        self.summary.grade_counts_descending()
    }

    pub fn reset(&mut self) {
        self.loaded = false;
        self.source = SourceLocation::Unavailable;
        self.entities.clear();
        self.summary = Summary::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn loaded() -> Compendium {
        let mut compendium = Compendium::new();
        compendium
            .load_from_value(
                &json!([
                    { "name": "Clear Sky Hammer", "grade": 9, "affinities": ["metal"] },
                    { "name": "Blue Silver Grass", "grade": 3, "affinities": ["wood"] }
                ]),
                SourceLocation::Resolved("souls.json".into()),
            )
            .unwrap();
        compendium
    }

    #[test]
    fn test_load_from_value_counts_valid_records() {
        let mut compendium = Compendium::new();
        let count = compendium
            .load_from_value(
                &json!([{ "name": "A" }, { "grade": 2 }, { "name": "B" }]),
                SourceLocation::Unavailable,
            )
            .unwrap();

        assert_eq!(count, 2);
        assert!(compendium.is_loaded());
        assert_eq!(compendium.summary().total, 2);
    }

    #[test]
    fn test_empty_list_is_failure() {
        let mut compendium = loaded();
        let err = compendium
            .load_from_value(&json!([]), SourceLocation::Unavailable)
            .unwrap_err();

        assert!(matches!(err, LoadError::NoValidEntities));
        assert!(!compendium.is_loaded());
        assert!(compendium.entities().is_empty());
        assert_eq!(compendium.summary(), &Summary::default());
    }

    #[test]
    fn test_failure_resets_previous_state() {
        let mut compendium = loaded();
        assert!(compendium.load_from_str("{ not json", SourceLocation::Unavailable).is_err());

        assert!(!compendium.is_loaded());
        assert_eq!(compendium.source(), &SourceLocation::Unavailable);
        assert!(compendium.top_entities(3).is_empty());
    }

    #[test]
    fn test_load_from_missing_path() {
        let mut compendium = Compendium::new();
        let err = compendium
            .load_from_path(Path::new("/definitely/not/here.json"))
            .unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
    }

    #[test]
    fn test_rankings_delegate_to_summary() {
        let compendium = loaded();
        assert_eq!(compendium.top_entities(1)[0].name, "Clear Sky Hammer");
        assert_eq!(compendium.top_affinities(7).len(), 2);
        assert_eq!(compendium.grade_counts_descending()[0].grade, 9);
    }

    #[test]
    fn test_ensure_loaded_skips_reload() {
        let mut compendium = loaded();
        let resolver = SourceResolver::explicit("/missing.json");
        assert!(compendium.ensure_loaded(&resolver));
        assert_eq!(compendium.entities().len(), 2);
    }

    #[test]
    fn test_ensure_loaded_reports_failure() {
        let mut compendium = Compendium::new();
        assert!(!compendium.ensure_loaded(&SourceResolver::explicit("/missing.json")));
        assert!(!compendium.is_loaded());
    }
}
