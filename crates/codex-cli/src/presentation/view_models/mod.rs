pub mod cache;
pub mod report;

pub use cache::*;
pub use report::*;
