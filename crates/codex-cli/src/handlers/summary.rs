use crate::config::Config;
use crate::presentation::presenters;
use crate::presentation::views::SummaryView;
use crate::types::OutputFormat;
use anyhow::{Result, bail};
use codex_engine::Compendium;
use is_terminal::IsTerminal;
use std::path::Path;

pub fn handle(config: &Config, dataset: Option<&Path>, format: OutputFormat) -> Result<()> {
    let resolver = config.dataset_resolver(dataset);

    let mut compendium = Compendium::new();
    if let Err(err) = compendium.load_default(&resolver) {
        bail!("No martial soul data available: {err}");
    }

    let report = presenters::present_summary(&compendium);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Plain => {
            let enable_color = std::io::stdout().is_terminal();
            print!("{}", SummaryView::new(&report, enable_color));
        }
    }
    Ok(())
}
