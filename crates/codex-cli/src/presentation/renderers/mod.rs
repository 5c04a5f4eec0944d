pub mod recording;
pub mod surface;
pub mod terminal;
pub mod tui;

pub use recording::{DrawCall, RecordingSurface};
pub use surface::{Corners, FontRole, RenderSurface, TextMeasurer};
pub use terminal::{TerminalMetrics, TerminalSurface};
