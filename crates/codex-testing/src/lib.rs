//! Testing infrastructure for soul codex integration tests.
//!
//! - `TestWorld`: isolated temp directory with dataset/config placement and
//!   CLI command configuration
//! - `fixtures`: sample martial soul records

pub mod fixtures;
pub mod world;

pub use world::TestWorld;
