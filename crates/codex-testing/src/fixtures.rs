//! Sample martial soul records.
//!
//! The sample set is small but exercises every aggregation rule: a grade tie
//! at the top, mixed-case affinities, a record without a name, and an empty
//! affinity string.

use serde_json::{Value, json};

/// Six records, five of them valid.
pub fn sample_records() -> Value {
    json!([
        {
            "name": "Clear Sky Hammer",
            "grade": 9,
            "category": "tool",
            "affinities": ["Metal", "Lightning"],
            "description": "A heaven-shaking hammer handed down through the Tang clan."
        },
        {
            "name": "Blue Silver Grass",
            "grade": 3,
            "category": "plant",
            "affinities": ["wood"],
            "description": "Tenacious vines that bind foes and mend allies."
        },
        {
            "name": "Nine Treasure Glazed Tile Pagoda",
            "grade": 8,
            "category": "tool",
            "affinities": ["light", "Wood"],
            "description": "A radiant pagoda that amplifies every ally in its glow."
        },
        {
            "grade": 5,
            "category": "beast",
            "affinities": ["fire"],
            "description": "A record that lost its name."
        },
        {
            "name": "Evil Eyes White Tiger",
            "grade": 8,
            "category": "beast",
            "affinities": ["METAL"],
            "description": "A white tiger whose gaze cows lesser beasts."
        },
        {
            "name": "Phoenix Ember",
            "grade": 7,
            "category": "beast",
            "affinities": ["Fire", ""],
            "description": ""
        }
    ])
}

/// Number of valid records in [`sample_records`].
pub const SAMPLE_VALID_COUNT: usize = 5;

/// A content config exercising every `[content]` key.
pub const SAMPLE_CONFIG: &str = r##"
[content]
heading = "Heaven & Earth Codex"
tagline = "Track every awakened soul."
highlights = ["Spotlight rotation", "", "Grade ladder"]
paragraphs = ["Duels settle disputes between sects."]
accent_color = "#9c79ff"
hero_gradient = ["#2f245d", "#140e30"]
primary_action_label = "Brief me"

[ui]
scale = 0.075
"##;
