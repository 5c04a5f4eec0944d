pub mod cache;
pub mod report;

pub use cache::{BuildInput, build_cache};
pub use report::present_summary;
