pub mod text;

pub use text::{category_line, join_affinities, pluralize, title_case};
