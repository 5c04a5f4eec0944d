use super::args::{Cli, Commands};
use super::handlers;
use crate::config::Config;
use crate::logging::{self, LogTarget};
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Commands::Tui);

    let interactive = matches!(command, Commands::Tui);
    let target = LogTarget::select(cli.log_file.as_deref(), interactive);
    logging::init(cli.log_level, &target)?;

    let config = Config::load(cli.config.as_deref())?;
    let dataset = cli.dataset.as_deref();

    match command {
        Commands::Tui => handlers::tui::handle(&config, dataset, cli.config.clone()),
        Commands::Summary { format } => handlers::summary::handle(&config, dataset, format),
        Commands::Layout {
            width,
            height,
            scale,
            format,
        } => handlers::layout::handle(&config, dataset, width, height, scale, format),
    }
}
