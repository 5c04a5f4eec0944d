//! Console reports for the `summary` and `layout` commands.

use codex_engine::SourceLocation;
use codex_types::{Rect, Summary};
use serde::Serialize;

use crate::presentation::renderers::DrawCall;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    pub source: SourceLocation,
    pub summary: Summary,
    pub top_entities: Vec<RankedEntity>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntity {
    pub name: String,
    pub grade: i64,
    pub category: String,
    pub affinities: Vec<String>,
}

/// Result of a headless layout pass for the `layout` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutReport {
    pub bounds: Rect,
    pub data_available: bool,
    pub hit_rect: Option<Rect>,
    pub calls: Vec<DrawCall>,
}
