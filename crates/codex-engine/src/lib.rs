// Engine module - loading and aggregation (store, summary, rankings)
// This layer sits between raw dataset files and the codex presentation

pub mod compendium;
pub mod error;
pub mod loader;
pub mod source;
pub mod summary;

pub use compendium::{Compendium, SharedCompendium};
pub use error::{LoadError, Result};
pub use source::{DEFAULT_DATASET_PATH, SourceLocation, SourceResolver};

use codex_types::{Entity, Summary};

// Façade API - Stable public interface for the presentation layer

/// Summarize an entity collection (counts, histograms, highest grade)
pub fn summarize(entities: &[Entity]) -> Summary {
    summary::summarize(entities)
}

/// Rank entities by grade descending, then name ascending, keeping the first `n`
pub fn top_entities(entities: &[Entity], n: usize) -> Vec<&Entity> {
    summary::top_entities(entities, n)
}
