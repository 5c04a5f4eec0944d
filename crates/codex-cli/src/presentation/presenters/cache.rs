//! Presentation cache builder.
//!
//! Pure function from aggregated data plus content to a freshly measured
//! [`PresentationCache`]. When no data is loaded every section still gets
//! exactly one placeholder entry, so the layout never sees an empty section.

use codex_engine::SourceLocation;
use codex_types::{ContentConfig, Entity, Summary};

use crate::presentation::formatters::text::{
    DOT_SEPARATOR, category_line, pluralize, title_case,
};
use crate::presentation::palette::{
    self, CARD_TEXT, CARD_VALUE_TEXT, MUTED_TEXT, PARAGRAPH_TEXT, PLACEHOLDER_CARD_TINT,
    PLACEHOLDER_SPOTLIGHT_TINT, REALM_VALUE_TEXT, ROW_LABEL_TEXT, ROW_VALUE_TEXT,
    SOURCE_TEXT, SPOTLIGHT_ACCENT_RATIO, SPOTLIGHT_META_TEXT, SUMMARY_CARD_TINTS, Theme,
};
use crate::presentation::renderers::{FontRole, TextMeasurer};
use crate::presentation::view_models::{
    CachedText, HeroBlock, LabelValueRow, PresentationCache, SpotlightCard, SpotlightEntity,
    SummaryCard,
};

pub const DEFAULT_HEADING: &str = "Heaven & Earth Codex";
pub const DEFAULT_TAGLINE: &str = "Bring the cultivation RPG to life with cinematic oversight.";
pub const DEFAULT_ACTION_LABEL: &str = "Launch codex";
pub const DEFAULT_PARAGRAPH: &str =
    "Orchestrate cultivation events, duels, and expeditions directly from this console.";

pub const SPOTLIGHT_COUNT: usize = 3;
pub const AFFINITY_ROW_COUNT: usize = 7;

pub const REALM_MILESTONES: [(&str, &str); 6] = [
    ("Mortal Realm", "60–80 years of tempered living"),
    ("Qi Condensation", "Sense and guide the world's breath"),
    ("Foundation Establishment", "Forge a stable spiritual core"),
    ("Core Formation", "Ascend toward true cultivation might"),
    ("Nascent Soul", "Manifest a guiding spiritual avatar"),
    ("Ascendant", "Break mortal limits and traverse the heavens"),
];

/// Everything the builder reads.
#[derive(Debug, Clone, Copy)]
pub struct BuildInput<'a> {
    pub summary: &'a Summary,
    pub entities: &'a [Entity],
    pub content: &'a ContentConfig,
    pub source: &'a SourceLocation,
    pub loaded: bool,
}

/// Build a complete presentation cache.
pub fn build_cache<M: TextMeasurer + ?Sized>(
    input: &BuildInput<'_>,
    theme: &Theme,
    measurer: &M,
) -> PresentationCache {
    let text = |value: &str, font: FontRole, color| CachedText::measure(measurer, value, font, color);

    let (affinity_rows, grade_rows) = build_distribution_rows(input, measurer);

    PresentationCache {
        theme: *theme,
        hero: build_hero(input, theme, measurer),
        summary_cards: build_summary_cards(input, theme, measurer),
        spotlights: build_spotlights(input, theme, measurer),
        affinity_title: text("Affinity distribution", FontRole::Heading, theme.hero_text),
        affinity_rows,
        grade_title: text("Grade ladder", FontRole::Heading, theme.hero_text),
        grade_rows,
        guide_title: text("Cultivation loops", FontRole::Heading, theme.hero_text),
        paragraphs: build_paragraphs(input.content, measurer),
        realm_title: text("Realm milestones", FontRole::Heading, theme.hero_text),
        realm_rows: build_realm_rows(measurer),
    }
}

fn build_hero<M: TextMeasurer + ?Sized>(
    input: &BuildInput<'_>,
    theme: &Theme,
    measurer: &M,
) -> HeroBlock {
    let content = input.content;
    let heading = ContentConfig::text(&content.heading).unwrap_or(DEFAULT_HEADING);
    let tagline = ContentConfig::text(&content.tagline).unwrap_or(DEFAULT_TAGLINE);
    let label =
        ContentConfig::text(&content.primary_action_label).unwrap_or(DEFAULT_ACTION_LABEL);

    let highlights = content
        .non_blank_highlights()
        .map(|line| CachedText::measure(measurer, line, FontRole::Paragraph, theme.hero_text))
        .collect();

    let dataset_summary = if input.loaded {
        format!(
            "{} catalogued souls{DOT_SEPARATOR}{} affinities tracked",
            input.summary.total,
            input.summary.affinity_names.len()
        )
    } else {
        "Connect to the bot to load the martial soul library.".to_string()
    };

    let dataset_source = match input.source {
        SourceLocation::Resolved(path) => format!("Data source: {}", path.display()),
        SourceLocation::Unavailable => "Data source unavailable".to_string(),
    };

    HeroBlock {
        heading: CachedText::measure(measurer, heading, FontRole::Heading, theme.hero_text),
        tagline: CachedText::measure(measurer, tagline, FontRole::Paragraph, MUTED_TEXT),
        highlights,
        dataset_summary: CachedText::measure(
            measurer,
            dataset_summary,
            FontRole::Button,
            MUTED_TEXT,
        ),
        dataset_source: CachedText::measure(
            measurer,
            dataset_source,
            FontRole::Paragraph,
            SOURCE_TEXT,
        ),
        primary_action_label: CachedText::measure(
            measurer,
            label,
            FontRole::Button,
            theme.hero_text,
        ),
    }
}

fn build_summary_cards<M: TextMeasurer + ?Sized>(
    input: &BuildInput<'_>,
    theme: &Theme,
    measurer: &M,
) -> Vec<SummaryCard> {
    let card = |label: &str, value: &str, caption: &str, accent, placeholder| SummaryCard {
        label: CachedText::measure(measurer, label, FontRole::Button, CARD_TEXT),
        value: CachedText::measure(measurer, value, FontRole::Heading, CARD_VALUE_TEXT),
        caption: CachedText::measure(measurer, caption, FontRole::Paragraph, CARD_TEXT),
        accent,
        placeholder,
    };

    if !input.loaded {
        return vec![card(
            "Awaiting sync",
            "—",
            "Connect Heaven & Earth to populate the codex.",
            PLACEHOLDER_CARD_TINT.apply(theme.accent),
            true,
        )];
    }

    let summary = input.summary;
    let [total_tint, grade_tint, affinity_tint] = SUMMARY_CARD_TINTS;

    let dominant = summary
        .dominant_affinity()
        .map(|entry| title_case(&entry.affinity))
        .unwrap_or_else(|| "—".to_string());

    vec![
        card(
            "Martial souls",
            &summary.total.to_string(),
            "Spirit records synced from the Discord bot.",
            total_tint.apply(theme.accent),
            false,
        ),
        card(
            "High-grade focus",
            &format!("Grade {}", summary.highest_grade),
            summary
                .highest_holder
                .as_deref()
                .unwrap_or("Awaiting discoveries."),
            grade_tint.apply(theme.accent),
            false,
        ),
        card(
            "Affinity spectrum",
            &dominant,
            &format!(
                "{} elemental lineages observed",
                summary.affinity_names.len()
            ),
            affinity_tint.apply(theme.accent),
            false,
        ),
    ]
}

fn build_spotlights<M: TextMeasurer + ?Sized>(
    input: &BuildInput<'_>,
    theme: &Theme,
    measurer: &M,
) -> Vec<SpotlightCard> {
    if !input.loaded {
        return vec![SpotlightCard {
            entity: None,
            accent: PLACEHOLDER_SPOTLIGHT_TINT.apply(theme.accent),
            name: CachedText::measure(
                measurer,
                "The codex will highlight signature martial souls here.",
                FontRole::Paragraph,
                theme.hero_text,
            ),
            affinity: CachedText::measure(
                measurer,
                "Waiting for sync",
                FontRole::Button,
                theme.hero_text,
            ),
            description: None,
            badge: None,
        }];
    }

    codex_engine::top_entities(input.entities, SPOTLIGHT_COUNT)
        .into_iter()
        .map(|entity| {
            let base = palette::affinity_color(entity.primary_affinity(), theme.accent);
            let description = Some(entity.description.as_str())
                .filter(|text| !text.is_empty())
                .map(|text| {
                    CachedText::measure(measurer, text, FontRole::Paragraph, theme.hero_text)
                });

            SpotlightCard {
                entity: Some(SpotlightEntity {
                    name: entity.name.clone(),
                    grade: entity.grade,
                }),
                accent: base.mix(theme.accent, SPOTLIGHT_ACCENT_RATIO),
                name: CachedText::measure(
                    measurer,
                    entity.name.as_str(),
                    FontRole::Heading,
                    theme.hero_text,
                ),
                affinity: CachedText::measure(
                    measurer,
                    category_line(&entity.category, &entity.affinities),
                    FontRole::Button,
                    SPOTLIGHT_META_TEXT,
                ),
                description,
                badge: Some(CachedText::measure(
                    measurer,
                    format!("Grade {}", entity.grade),
                    FontRole::Button,
                    CARD_VALUE_TEXT,
                )),
            }
        })
        .collect()
}

fn distribution_row<M: TextMeasurer + ?Sized>(
    measurer: &M,
    label: &str,
    value: &str,
    placeholder: bool,
) -> LabelValueRow {
    LabelValueRow {
        label: CachedText::measure(measurer, label, FontRole::Button, ROW_LABEL_TEXT),
        value: CachedText::measure(measurer, value, FontRole::Paragraph, ROW_VALUE_TEXT),
        placeholder,
    }
}

fn build_distribution_rows<M: TextMeasurer + ?Sized>(
    input: &BuildInput<'_>,
    measurer: &M,
) -> (Vec<LabelValueRow>, Vec<LabelValueRow>) {
    let mut affinity_rows = Vec::new();
    let mut grade_rows = Vec::new();

    if input.loaded {
        affinity_rows = input
            .summary
            .top_affinities(AFFINITY_ROW_COUNT)
            .iter()
            .map(|entry| {
                distribution_row(
                    measurer,
                    &title_case(&entry.affinity),
                    &pluralize(entry.count, "soul", "souls"),
                    false,
                )
            })
            .collect();

        grade_rows = input
            .summary
            .grade_counts_descending()
            .iter()
            .map(|entry| {
                distribution_row(
                    measurer,
                    &format!("Grade {}", entry.grade),
                    &pluralize(entry.count, "entry", "entries"),
                    false,
                )
            })
            .collect();
    }

    if affinity_rows.is_empty() {
        affinity_rows.push(distribution_row(
            measurer,
            "Pending sync",
            "No affinities loaded",
            true,
        ));
    }
    if grade_rows.is_empty() {
        grade_rows.push(distribution_row(
            measurer,
            "Unknown",
            "Awaiting martial soul data",
            true,
        ));
    }

    (affinity_rows, grade_rows)
}

fn build_paragraphs<M: TextMeasurer + ?Sized>(
    content: &ContentConfig,
    measurer: &M,
) -> Vec<CachedText> {
    let mut paragraphs: Vec<CachedText> = content
        .non_blank_paragraphs()
        .map(|line| CachedText::measure(measurer, line, FontRole::Paragraph, PARAGRAPH_TEXT))
        .collect();

    if paragraphs.is_empty() {
        paragraphs.push(CachedText::measure(
            measurer,
            DEFAULT_PARAGRAPH,
            FontRole::Paragraph,
            PARAGRAPH_TEXT,
        ));
    }
    paragraphs
}

fn build_realm_rows<M: TextMeasurer + ?Sized>(measurer: &M) -> Vec<LabelValueRow> {
    REALM_MILESTONES
        .iter()
        .map(|(realm, description)| LabelValueRow {
            label: CachedText::measure(measurer, *realm, FontRole::Button, CARD_TEXT),
            value: CachedText::measure(measurer, *description, FontRole::Paragraph, REALM_VALUE_TEXT),
            placeholder: false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::renderers::RecordingSurface;
    use codex_types::Rgba;
    use std::path::PathBuf;

    fn entities() -> Vec<Entity> {
        vec![
            Entity::new("Blue Silver Grass", 3)
                .with_category("plant")
                .with_affinities(["wood"]),
            Entity::new("Clear Sky Hammer", 9)
                .with_category("tool")
                .with_affinities(["Metal", "lightning"])
                .with_description("A heaven-shaking hammer."),
            Entity::new("Phoenix Ember", 7).with_affinities(["fire"]),
            Entity::new("Evil Eyes White Tiger", 8).with_category("beast_spirit"),
        ]
    }

    fn texts(cards: &[SpotlightCard]) -> Vec<&str> {
        cards.iter().map(|card| card.name.text.as_str()).collect()
    }

    #[test]
    fn test_unloaded_has_one_placeholder_per_section() {
        let summary = Summary::default();
        let content = ContentConfig::default();
        let input = BuildInput {
            summary: &summary,
            entities: &[],
            content: &content,
            source: &SourceLocation::Unavailable,
            loaded: false,
        };

        let cache = build_cache(&input, &Theme::default(), &RecordingSurface::new());

        assert_eq!(cache.summary_cards.len(), 1);
        assert!(cache.summary_cards[0].placeholder);
        assert_eq!(cache.summary_cards[0].label.text, "Awaiting sync");
        assert_eq!(cache.spotlights.len(), 1);
        assert!(cache.spotlights[0].is_placeholder());
        assert_eq!(cache.affinity_rows.len(), 1);
        assert_eq!(cache.affinity_rows[0].label.text, "Pending sync");
        assert_eq!(cache.grade_rows.len(), 1);
        assert_eq!(cache.grade_rows[0].value.text, "Awaiting martial soul data");
        assert_eq!(cache.paragraphs.len(), 1);
        assert_eq!(cache.paragraphs[0].text, DEFAULT_PARAGRAPH);
        assert_eq!(cache.realm_rows.len(), REALM_MILESTONES.len());
        assert_eq!(cache.hero.dataset_source.text, "Data source unavailable");
        assert_eq!(
            cache.hero.dataset_summary.text,
            "Connect to the bot to load the martial soul library."
        );
    }

    #[test]
    fn test_loaded_cache_contents() {
        let entities = entities();
        let summary = codex_engine::summarize(&entities);
        let content = ContentConfig {
            heading: Some("  ".to_string()),
            highlights: vec!["First".to_string(), String::new()],
            ..Default::default()
        };
        let source = SourceLocation::Resolved(PathBuf::from("data/souls.json"));
        let input = BuildInput {
            summary: &summary,
            entities: &entities,
            content: &content,
            source: &source,
            loaded: true,
        };

        let cache = build_cache(&input, &Theme::default(), &RecordingSurface::new());

        assert_eq!(cache.hero.heading.text, DEFAULT_HEADING);
        assert_eq!(cache.hero.highlights.len(), 1);
        assert_eq!(cache.hero.dataset_source.text, "Data source: data/souls.json");
        assert_eq!(
            cache.hero.dataset_summary.text,
            "4 catalogued souls • 4 affinities tracked"
        );

        let values: Vec<_> = cache
            .summary_cards
            .iter()
            .map(|card| card.value.text.as_str())
            .collect();
        assert_eq!(values, vec!["4", "Grade 9", "Fire"]);
        assert_eq!(cache.summary_cards[1].caption.text, "Clear Sky Hammer");

        assert_eq!(
            texts(&cache.spotlights),
            vec!["Clear Sky Hammer", "Evil Eyes White Tiger", "Phoenix Ember"]
        );
        assert_eq!(
            cache.spotlights[0].affinity.text,
            "Tool • Metal • Lightning"
        );
        assert_eq!(
            cache.spotlights[1].affinity.text,
            "Beast Spirit • Unaligned"
        );
        assert!(cache.spotlights[1].description.is_none());
        assert_eq!(
            cache.spotlights[2].badge.as_ref().map(|b| b.text.as_str()),
            Some("Grade 7")
        );

        let grade_labels: Vec<_> = cache
            .grade_rows
            .iter()
            .map(|row| (row.label.text.as_str(), row.value.text.as_str()))
            .collect();
        assert_eq!(
            grade_labels,
            vec![
                ("Grade 9", "1 entry"),
                ("Grade 8", "1 entry"),
                ("Grade 7", "1 entry"),
                ("Grade 3", "1 entry"),
            ]
        );
        assert_eq!(cache.affinity_rows[0].value.text, "1 soul");
    }

    #[test]
    fn test_summary_card_tints_follow_accent() {
        let entities = entities();
        let summary = codex_engine::summarize(&entities);
        let content = ContentConfig::default();
        let input = BuildInput {
            summary: &summary,
            entities: &entities,
            content: &content,
            source: &SourceLocation::Unavailable,
            loaded: true,
        };
        let theme = Theme::default();

        let cache = build_cache(&input, &theme, &RecordingSurface::new());

        let accents: Vec<Rgba> = cache.summary_cards.iter().map(|card| card.accent).collect();
        let expected: Vec<Rgba> = SUMMARY_CARD_TINTS
            .iter()
            .map(|tint| tint.apply(theme.accent))
            .collect();
        assert_eq!(accents, expected);
        assert_eq!(
            cache.spotlights[0].accent,
            palette::affinity_color(Some("METAL"), theme.accent)
                .mix(theme.accent, SPOTLIGHT_ACCENT_RATIO)
        );
    }

    #[test]
    fn test_affinity_rows_capped_at_seven() {
        let entities: Vec<Entity> = ["a", "b", "c", "d", "e", "f", "g", "h", "i"]
            .iter()
            .map(|affinity| Entity::new(format!("Soul {affinity}"), 1).with_affinities([*affinity]))
            .collect();
        let summary = codex_engine::summarize(&entities);
        let content = ContentConfig::default();
        let input = BuildInput {
            summary: &summary,
            entities: &entities,
            content: &content,
            source: &SourceLocation::Unavailable,
            loaded: true,
        };

        let cache = build_cache(&input, &Theme::default(), &RecordingSurface::new());

        assert_eq!(cache.affinity_rows.len(), AFFINITY_ROW_COUNT);
        assert_eq!(cache.affinity_rows[0].label.text, "A");
    }
}
