use crate::config::Config;
use crate::presentation::CodexView;
use crate::presentation::renderers::RecordingSurface;
use crate::presentation::view_models::LayoutReport;
use crate::presentation::views::{LayoutMetrics, LayoutReportView};
use crate::types::OutputFormat;
use anyhow::Result;
use codex_engine::Compendium;
use codex_types::Rect;
use std::path::Path;

pub fn handle(
    config: &Config,
    dataset: Option<&Path>,
    width: i32,
    height: i32,
    scale: f32,
    format: OutputFormat,
) -> Result<()> {
    let mut view = CodexView::new(
        "codex",
        Compendium::shared(),
        config.dataset_resolver(dataset),
    )
    .with_metrics(LayoutMetrics::new(scale));
    view.bind_content(config.content.clone());

    let mut surface = RecordingSurface::new();
    view.activate(&surface);
    view.render(&mut surface, Rect::new(0, 0, width, height));

    let report = LayoutReport {
        bounds: Rect::new(0, 0, width, height),
        data_available: view.data_available(),
        hit_rect: view.primary_action_rect(),
        calls: surface.into_calls(),
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Plain => print!("{}", LayoutReportView::new(&report)),
    }
    Ok(())
}
