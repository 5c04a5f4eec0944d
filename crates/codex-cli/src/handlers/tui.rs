use crate::config::Config;
use crate::presentation::CodexView;
use crate::presentation::renderers::tui;
use anyhow::{Result, bail};
use codex_engine::Compendium;
use is_terminal::IsTerminal;
use std::path::{Path, PathBuf};

pub fn handle(config: &Config, dataset: Option<&Path>, config_path: Option<PathBuf>) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("The dashboard needs an interactive terminal; try `codex summary` instead");
    }

    let store = Compendium::shared();
    let mut view = CodexView::new("codex", store, config.dataset_resolver(dataset))
        .with_metrics(config.terminal_metrics());
    view.bind_content(config.content.clone());

    tui::run(view, move || {
        Config::load(config_path.as_deref()).map(|config| config.content)
    })
}
