pub mod draw_calls;
pub mod layout;
pub mod metrics;
pub mod summary;

pub use draw_calls::LayoutReportView;
pub use layout::render_layout;
pub use metrics::{DEFAULT_TERMINAL_SCALE, LayoutMetrics};
pub use summary::SummaryView;
