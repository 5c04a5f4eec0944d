//! Shared data model for the soul codex.
//!
//! Everything here is plain data: the catalogued [`Entity`] records, the
//! derived [`Summary`] tables, the externally supplied [`ContentConfig`],
//! and the small geometry/color vocabulary the presentation layer speaks.
//! Computation lives in `codex-engine` and `soul-codex`.

pub mod color;
pub mod content;
pub mod entity;
pub mod error;
pub mod geometry;
pub mod summary;

pub use color::Rgba;
pub use content::ContentConfig;
pub use entity::Entity;
pub use error::{Error, Result};
pub use geometry::{Rect, Size};
pub use summary::{AffinityCount, GradeCount, Summary};

/// Grade at or above which an entity counts as rare.
pub const RARE_GRADE_THRESHOLD: i64 = 7;
