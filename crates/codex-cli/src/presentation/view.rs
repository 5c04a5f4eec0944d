//! The codex view: owns the presentation cache and the primary action state.
//!
//! Lifecycle: `activate` loads the shared store if needed and builds the
//! cache, `render` lays it out, `deactivate` drops it. Rebinding content
//! while active marks the cache stale; the next render rebuilds it.

use codex_engine::{SharedCompendium, SourceResolver};
use codex_types::{ContentConfig, Rect};
use tracing::{debug, info};

use crate::presentation::interaction::SpotlightCursor;
use crate::presentation::palette::Theme;
use crate::presentation::presenters::{BuildInput, build_cache};
use crate::presentation::renderers::{RenderSurface, TextMeasurer};
use crate::presentation::view_models::PresentationCache;
use crate::presentation::views::{LayoutMetrics, render_layout};

pub struct CodexView {
    id: String,
    store: SharedCompendium,
    resolver: SourceResolver,
    content: ContentConfig,
    cache: Option<PresentationCache>,
    data_available: bool,
    active: bool,
    stale: bool,
    cursor: SpotlightCursor,
    primary_action_rect: Option<Rect>,
    metrics: LayoutMetrics,
}

impl CodexView {
    pub fn new(id: impl Into<String>, store: SharedCompendium, resolver: SourceResolver) -> Self {
        Self {
            id: id.into(),
            store,
            resolver,
            content: ContentConfig::default(),
            cache: None,
            data_available: false,
            active: false,
            stale: false,
            cursor: SpotlightCursor::new(),
            primary_action_rect: None,
            metrics: LayoutMetrics::default(),
        }
    }

    pub fn with_metrics(mut self, metrics: LayoutMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> &ContentConfig {
        &self.content
    }

    pub fn bind_content(&mut self, content: ContentConfig) {
        self.content = content;
        self.primary_action_rect = None;
        self.cursor.reset();
        if self.active {
            self.stale = true;
        }
    }

    pub fn activate<M: TextMeasurer + ?Sized>(&mut self, measurer: &M) {
        self.data_available = self.store.borrow_mut().ensure_loaded(&self.resolver);
        self.active = true;
        self.rebuild(measurer);
    }

    pub fn deactivate(&mut self) {
        self.cache = None;
        self.primary_action_rect = None;
        self.active = false;
        self.stale = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn data_available(&self) -> bool {
        self.data_available
    }

    /// Builds a fresh cache and swaps it in.
    pub fn rebuild<M: TextMeasurer + ?Sized>(&mut self, measurer: &M) {
        let theme = Theme::resolve(&self.content);
        let cache = {
            let store = self.store.borrow();
            let input = BuildInput {
                summary: store.summary(),
                entities: store.entities(),
                content: &self.content,
                source: store.source(),
                loaded: self.data_available,
            };
            build_cache(&input, &theme, measurer)
        };

        debug!(
            view = %self.id,
            loaded = self.data_available,
            spotlights = cache.spotlights.len(),
            "rebuilt presentation cache"
        );
        self.cache = Some(cache);
        self.stale = false;
    }

    pub fn render<S: RenderSurface + ?Sized>(&mut self, surface: &mut S, bounds: Rect) {
        if self.stale {
            self.rebuild(&*surface);
        }

        self.primary_action_rect = None;
        if let Some(cache) = &self.cache {
            self.primary_action_rect = render_layout(cache, surface, bounds, &self.metrics);
        }
    }

    /// Runs the primary action and returns the status line for the host.
    pub fn on_primary_action(&mut self) -> String {
        let spotlights = self
            .cache
            .as_ref()
            .map(|cache| cache.spotlights.as_slice())
            .unwrap_or_default();
        let status = self.cursor.invoke(spotlights, self.data_available);
        info!(view = %self.id, %status, "primary action");
        status
    }

    pub fn primary_action_rect(&self) -> Option<Rect> {
        self.primary_action_rect
    }

    pub fn cache(&self) -> Option<&PresentationCache> {
        self.cache.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::renderers::RecordingSurface;
    use codex_engine::Compendium;
    use codex_testing::TestWorld;

    const BOUNDS: Rect = Rect::new(0, 0, 1280, 900);

    fn unresolved(world: &TestWorld) -> SourceResolver {
        SourceResolver::Probe {
            relative: "absent/martial_souls.json".into(),
            working_dir: Some(world.temp_dir().to_path_buf()),
            base_dir: None,
        }
    }

    #[test]
    fn test_unavailable_data_builds_placeholders() {
        let world = TestWorld::new();
        let mut view = CodexView::new("codex", Compendium::shared(), unresolved(&world));

        view.activate(&RecordingSurface::new());

        assert!(!view.data_available());
        let cache = view.cache().expect("cache after activate");
        assert_eq!(cache.summary_cards.len(), 1);
        assert_eq!(cache.spotlights.len(), 1);
        assert_eq!(cache.affinity_rows.len(), 1);
        assert_eq!(cache.grade_rows.len(), 1);
        assert_eq!(view.on_primary_action(), "Codex overview ready.");
    }

    #[test]
    fn test_primary_action_cycles_spotlights() {
        let world = TestWorld::new().with_sample_dataset();
        let resolver = SourceResolver::explicit(world.dataset_path());
        let mut view = CodexView::new("codex", Compendium::shared(), resolver);
        view.activate(&RecordingSurface::new());

        let statuses: Vec<String> = (0..4).map(|_| view.on_primary_action()).collect();

        assert_eq!(
            statuses,
            vec![
                "Codex spotlight: Clear Sky Hammer (Grade 9) ready for briefing.",
                "Codex spotlight: Evil Eyes White Tiger (Grade 8) ready for briefing.",
                "Codex spotlight: Nine Treasure Glazed Tile Pagoda (Grade 8) ready for briefing.",
                "Codex spotlight: Clear Sky Hammer (Grade 9) ready for briefing.",
            ]
        );
    }

    #[test]
    fn test_zero_width_render_clears_hit_rect() {
        let world = TestWorld::new().with_sample_dataset();
        let resolver = SourceResolver::explicit(world.dataset_path());
        let mut view = CodexView::new("codex", Compendium::shared(), resolver);
        let mut surface = RecordingSurface::new();
        view.activate(&surface);

        view.render(&mut surface, BOUNDS);
        assert!(view.primary_action_rect().is_some());

        surface.clear();
        view.render(&mut surface, Rect::new(0, 0, 0, 900));
        assert!(view.primary_action_rect().is_none());
        assert!(surface.calls().is_empty());
    }

    #[test]
    fn test_bind_content_rebuilds_on_next_render() {
        let world = TestWorld::new().with_sample_dataset();
        let resolver = SourceResolver::explicit(world.dataset_path());
        let mut view = CodexView::new("codex", Compendium::shared(), resolver);
        let mut surface = RecordingSurface::new();
        view.activate(&surface);
        view.on_primary_action();
        view.render(&mut surface, BOUNDS);

        view.bind_content(ContentConfig {
            heading: Some("Spirit Archive".to_string()),
            ..Default::default()
        });
        assert!(view.primary_action_rect().is_none());

        surface.clear();
        view.render(&mut surface, BOUNDS);

        assert!(surface.text_rect("Spirit Archive").is_some());
        assert_eq!(
            view.on_primary_action(),
            "Codex spotlight: Clear Sky Hammer (Grade 9) ready for briefing."
        );
    }

    #[test]
    fn test_deactivate_drops_cache() {
        let world = TestWorld::new();
        let mut view = CodexView::new("codex", Compendium::shared(), unresolved(&world));
        let mut surface = RecordingSurface::new();
        assert!(!view.is_active());
        view.activate(&surface);
        view.render(&mut surface, BOUNDS);
        assert!(view.is_active());

        view.deactivate();

        assert!(!view.is_active());
        assert!(view.cache().is_none());
        assert!(view.primary_action_rect().is_none());
        assert_eq!(view.on_primary_action(), "No martial soul data available.");
    }

    #[test]
    fn test_views_share_one_store() {
        let world = TestWorld::new().with_sample_dataset();
        let store = Compendium::shared();
        let mut first = CodexView::new(
            "first",
            store.clone(),
            SourceResolver::explicit(world.dataset_path()),
        );
        let mut second = CodexView::new("second", store.clone(), unresolved(&world));

        first.activate(&RecordingSurface::new());
        second.activate(&RecordingSurface::new());

        assert!(second.data_available());
        assert_eq!(store.borrow().entities().len(), 5);
    }
}
