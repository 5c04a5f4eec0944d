// Soul codex layering
//
// codex-types   plain data: entities, summary, geometry, colors, content
// codex-engine  dataset resolution, loading, aggregation, the shared store
// soul-codex    presentation (presenters -> cache -> layout -> surface),
//               the terminal host, and the headless commands
//
// The layout pass only ever talks to a RenderSurface. The terminal and the
// recording surface are two implementations of it, so `codex layout` prints
// exactly what the dashboard would draw.

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
