//! # Presentation Layer
//!
//! Everything between the loaded compendium and pixels (or cells).
//!
//! ```text
//! [ Compendium ] --> [ Presenter ] --> [ PresentationCache ] --> [ Layout View ] --> [ RenderSurface ]
//!    (Engine)         (build_cache)        (ViewModel)            (render_layout)     (terminal / recording)
//! ```
//!
//! ## Rules
//!
//! ### 1. Measure once
//! Text is measured when the cache is built, never during layout. The
//! layout pass only reads sizes already stored in [`view_models::CachedText`].
//!
//! ### 2. Never patch the cache
//! A cache is an immutable value. Content changes and activation build a new
//! one; the view swaps it in whole.
//!
//! ### 3. No empty sections
//! When data is unavailable each section carries one placeholder entry, so
//! views never branch on "nothing to show" beyond that.
//!
//! ## Modules
//! * `palette`: fixed colors, tint tables, theme resolution
//! * `formatters`: title-casing, pluralization, affinity lines
//! * `view_models`: the presentation cache and console report
//! * `presenters`: pure builders for the view models
//! * `views`: layout pass and console views
//! * `renderers`: render surfaces and the interactive TUI
//! * `interaction`: the spotlight cursor behind the primary action
//! * `view`: [`CodexView`], tying the above to the shared store

pub mod formatters;
pub mod interaction;
pub mod palette;
pub mod presenters;
pub mod renderers;
pub mod view;
pub mod view_models;
pub mod views;

pub use interaction::SpotlightCursor;
pub use view::CodexView;
