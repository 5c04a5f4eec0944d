use codex_engine::Compendium;

use super::cache::SPOTLIGHT_COUNT;
use crate::presentation::view_models::{RankedEntity, SummaryReport};

/// Snapshot of a loaded compendium for console output.
pub fn present_summary(compendium: &Compendium) -> SummaryReport {
    let top_entities = compendium
        .top_entities(SPOTLIGHT_COUNT)
        .into_iter()
        .map(|entity| RankedEntity {
            name: entity.name.clone(),
            grade: entity.grade,
            category: entity.category.clone(),
            affinities: entity.affinities.clone(),
        })
        .collect();

    SummaryReport {
        source: compendium.source().clone(),
        summary: compendium.summary().clone(),
        top_entities,
    }
}
