use codex_types::ContentConfig;

use crate::presentation::view::CodexView;

pub(crate) const KEY_HINTS: &str = "Enter/Space: primary action  r: reload content  q: quit";

pub(crate) struct App {
    pub view: CodexView,
    pub status: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(view: CodexView) -> Self {
        let status = if view.data_available() {
            "Martial soul compendium synchronized.".to_string()
        } else {
            "No martial soul data available.".to_string()
        };
        Self {
            view,
            status,
            should_quit: false,
        }
    }

    pub fn primary_action(&mut self) {
        self.status = self.view.on_primary_action();
    }

    /// Left click at a terminal cell. Returns whether it hit the action.
    pub fn click(&mut self, column: u16, row: u16) -> bool {
        let hit = self
            .view
            .primary_action_rect()
            .is_some_and(|rect| rect.contains(column as i32, row as i32));
        if hit {
            self.primary_action();
        }
        hit
    }

    pub fn rebind(&mut self, content: anyhow::Result<ContentConfig>) {
        match content {
            Ok(content) => {
                self.view.bind_content(content);
                self.status = "Content reloaded.".to_string();
            }
            Err(err) => {
                tracing::warn!(error = %err, "content reload failed");
                self.status = format!("Reload failed: {err}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::renderers::RecordingSurface;
    use codex_engine::{Compendium, SourceResolver};
    use codex_testing::TestWorld;
    use codex_types::Rect;

    fn active_app(world: &TestWorld) -> App {
        let mut view = CodexView::new(
            "codex",
            Compendium::shared(),
            SourceResolver::explicit(world.dataset_path()),
        );
        let mut surface = RecordingSurface::new();
        view.activate(&surface);
        view.render(&mut surface, Rect::new(0, 0, 1280, 900));
        App::new(view)
    }

    #[test]
    fn test_click_inside_hit_rect_triggers_action() {
        let world = TestWorld::new().with_sample_dataset();
        let mut app = active_app(&world);

        assert!(!app.click(0, 0));
        assert_eq!(app.status, "Martial soul compendium synchronized.");

        assert!(app.click(70, 250));
        assert_eq!(
            app.status,
            "Codex spotlight: Clear Sky Hammer (Grade 9) ready for briefing."
        );
    }

    #[test]
    fn test_failed_reload_keeps_content() {
        let world = TestWorld::new().with_sample_dataset();
        let mut app = active_app(&world);

        app.rebind(Err(anyhow::anyhow!("bad toml")));

        assert_eq!(app.status, "Reload failed: bad toml");
        assert_eq!(app.view.content(), &ContentConfig::default());
    }
}
