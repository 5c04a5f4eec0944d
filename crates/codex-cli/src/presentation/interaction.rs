use crate::presentation::view_models::SpotlightCard;

/// Round-robin cursor over the spotlight cards for the primary action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpotlightCursor {
    index: usize,
}

impl SpotlightCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Reads the card under the cursor, advances, and returns the status line.
    pub fn invoke(&mut self, spotlights: &[SpotlightCard], data_available: bool) -> String {
        if spotlights.is_empty() {
            return if data_available {
                "Martial soul compendium synchronized.".to_string()
            } else {
                "No martial soul data available.".to_string()
            };
        }

        if self.index >= spotlights.len() {
            self.index = 0;
        }

        let status = match &spotlights[self.index].entity {
            Some(entity) => format!(
                "Codex spotlight: {} (Grade {}) ready for briefing.",
                entity.name, entity.grade
            ),
            None => "Codex overview ready.".to_string(),
        };

        self.index = (self.index + 1) % spotlights.len();
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::renderers::{FontRole, RecordingSurface};
    use crate::presentation::view_models::{CachedText, SpotlightEntity};
    use codex_types::Rgba;

    fn card(entity: Option<(&str, i64)>) -> SpotlightCard {
        let surface = RecordingSurface::new();
        let text = |value: &str| CachedText::measure(&surface, value, FontRole::Button, Rgba::WHITE);
        SpotlightCard {
            entity: entity.map(|(name, grade)| SpotlightEntity {
                name: name.to_string(),
                grade,
            }),
            accent: Rgba::BLACK,
            name: text(entity.map(|(name, _)| name).unwrap_or("placeholder")),
            affinity: text("Unaligned"),
            description: None,
            badge: None,
        }
    }

    #[test]
    fn test_cycles_round_robin() {
        let cards = vec![card(Some(("Azure Dragon", 6))), card(Some(("Jade Phoenix", 5)))];
        let mut cursor = SpotlightCursor::new();

        let mut visited = Vec::new();
        for _ in 0..3 {
            visited.push(cursor.index());
            cursor.invoke(&cards, true);
        }

        assert_eq!(visited, vec![0, 1, 0]);
    }

    #[test]
    fn test_status_lines() {
        let cards = vec![card(Some(("Azure Dragon", 6))), card(None)];
        let mut cursor = SpotlightCursor::new();

        assert_eq!(
            cursor.invoke(&cards, true),
            "Codex spotlight: Azure Dragon (Grade 6) ready for briefing."
        );
        assert_eq!(cursor.invoke(&cards, true), "Codex overview ready.");
        assert_eq!(
            cursor.invoke(&[], true),
            "Martial soul compendium synchronized."
        );
        assert_eq!(cursor.invoke(&[], false), "No martial soul data available.");
    }

    #[test]
    fn test_index_clamped_when_list_shrinks() {
        let three = vec![card(Some(("A", 3))), card(Some(("B", 2))), card(Some(("C", 1)))];
        let one = vec![card(Some(("Solo", 9)))];
        let mut cursor = SpotlightCursor::new();
        cursor.invoke(&three, true);
        cursor.invoke(&three, true);
        assert_eq!(cursor.index(), 2);

        assert_eq!(
            cursor.invoke(&one, true),
            "Codex spotlight: Solo (Grade 9) ready for briefing."
        );
        assert_eq!(cursor.index(), 0);
    }
}
