//! Keyword interpreter - turns a free-text message into a scored command
//!
//! Rules run in a fixed order over the lowercased text:
//! 1. visualization type (button / column / bar, plus height cues)
//! 2. buttons-as-columns-by-height override (sets confidence to 0.8)
//! 3. numbers (keyword plus at least one digit run)
//! 4. speed (fast / slow / explicit duration)
//! 5. layout (vertical / horizontal / grid)
//! 6. feature (color coding / sound / step explanation)
//! 7. fallback for generic "change" requests
//!
//! The last rule that fires decides the action. Confidence adds up across
//! every rule that fired, except rule 2 which replaces it.

use super::command::{Action, Command, Feature, Layout, ParsedCommand, VisualizationType};
use regex::Regex;

const VISUALIZATION_BASE: f64 = 0.3;
const VISUALIZATION_TYPE_BONUS: f64 = 0.2;
const HEIGHT_BONUS: f64 = 0.2;
const COMPOUND_CONFIDENCE: f64 = 0.8;
const NUMBERS_SCORE: f64 = 0.4;
const SPEED_SCORE: f64 = 0.4;
const LAYOUT_BASE: f64 = 0.3;
const LAYOUT_BONUS: f64 = 0.2;
const FEATURE_BASE: f64 = 0.3;
const FEATURE_BONUS: f64 = 0.2;
const FALLBACK_CONFIDENCE: f64 = 0.1;

pub const FAST_SPEED_MS: u64 = 500;
pub const SLOW_SPEED_MS: u64 = 2000;

/// Scratch state while rules run. Fields set by a rule that later loses the
/// action are dropped when the final [`Command`] is built.
#[derive(Debug)]
struct Draft {
    action: Action,
    confidence: f64,
    visualization_type: Option<VisualizationType>,
    height_representation: bool,
    numbers: Vec<i64>,
    speed_ms: Option<u64>,
    layout: Option<Layout>,
    feature: Option<Feature>,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            action: Action::Unknown,
            confidence: 0.0,
            visualization_type: None,
            height_representation: false,
            numbers: Vec::new(),
            speed_ms: None,
            layout: None,
            feature: None,
        }
    }
}

impl Draft {
    fn into_command(self) -> Command {
        match self.action {
            Action::ChangeVisualization => Command::ChangeVisualization {
                visualization_type: self.visualization_type,
                height_representation: self.height_representation,
            },
            Action::ChangeNumbers => Command::ChangeNumbers {
                numbers: self.numbers,
            },
            Action::ChangeSpeed => Command::ChangeSpeed {
                speed_ms: self.speed_ms,
            },
            Action::ChangeLayout => Command::ChangeLayout {
                layout: self.layout,
            },
            Action::AddFeature => Command::AddFeature {
                feature: self.feature,
            },
            Action::Unknown => Command::Unknown,
        }
    }
}

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| text.contains(n))
}

/// Stateless keyword interpreter
pub struct CommandInterpreter {
    digits_re: Regex,
    duration_re: Regex,
}

impl CommandInterpreter {
    pub fn new() -> Self {
        Self {
            digits_re: Regex::new(r"\d+").unwrap(),
            duration_re: Regex::new(r"(?i)(\d+)\s*(milliseconds?|ms|seconds?|secs?)\b").unwrap(),
        }
    }

    /// Interpret one message. Never fails; unrecognized text yields
    /// [`Command::Unknown`] with zero confidence.
    pub fn parse(&self, text: &str) -> ParsedCommand {
        let lower = text.to_lowercase();
        let mut draft = Draft::default();

        let mut fired = Vec::new();
        if self.visualization_rule(&lower, &mut draft) {
            fired.push("visualization");
        }
        if self.compound_rule(&lower, &mut draft) {
            fired.push("compound");
        }
        if self.numbers_rule(text, &lower, &mut draft) {
            fired.push("numbers");
        }
        if self.speed_rule(text, &lower, &mut draft) {
            fired.push("speed");
        }
        if self.layout_rule(&lower, &mut draft) {
            fired.push("layout");
        }
        if self.feature_rule(&lower, &mut draft) {
            fired.push("feature");
        }
        if self.fallback_rule(&lower, &mut draft) {
            fired.push("fallback");
        }

        log::debug!(
            "parsed {:?}: rules={:?} action={} confidence={:.2}",
            text,
            fired,
            draft.action,
            draft.confidence
        );

        ParsedCommand {
            confidence: draft.confidence,
            command: draft.into_command(),
            original_text: text.to_string(),
        }
    }

    fn visualization_rule(&self, lower: &str, draft: &mut Draft) -> bool {
        if !contains_any(lower, &["button", "column", "bar"]) {
            return false;
        }
        draft.action = Action::ChangeVisualization;
        draft.confidence += VISUALIZATION_BASE;

        let matched = if lower.contains("button") {
            Some(VisualizationType::Buttons)
        } else if lower.contains("column") {
            Some(VisualizationType::Columns)
        } else if lower.contains("bar") {
            Some(VisualizationType::Bars)
        } else {
            None
        };
        if let Some(kind) = matched {
            draft.visualization_type = Some(kind);
            draft.confidence += VISUALIZATION_TYPE_BONUS;
        }

        if contains_any(lower, &["height", "tall", "size", "represented"]) {
            draft.height_representation = true;
            draft.confidence += HEIGHT_BONUS;
        }
        true
    }

    /// "buttons as columns whose height represents ..." is a known phrasing
    /// that overrides whatever rule 1 scored.
    fn compound_rule(&self, lower: &str, draft: &mut Draft) -> bool {
        let all = ["button", "column", "height", "represent"]
            .iter()
            .all(|k| lower.contains(k));
        if !all {
            return false;
        }
        draft.visualization_type = Some(VisualizationType::Buttons);
        draft.height_representation = true;
        draft.confidence = COMPOUND_CONFIDENCE;
        true
    }

    fn numbers_rule(&self, text: &str, lower: &str, draft: &mut Draft) -> bool {
        if !contains_any(lower, &["number", "value", "data"]) {
            return false;
        }
        // Runs too long for i64 are skipped
        let numbers: Vec<i64> = self
            .digits_re
            .find_iter(text)
            .filter_map(|m| m.as_str().parse().ok())
            .collect();
        if numbers.is_empty() {
            return false;
        }
        draft.action = Action::ChangeNumbers;
        draft.numbers = numbers;
        draft.confidence += NUMBERS_SCORE;
        true
    }

    fn speed_rule(&self, text: &str, lower: &str, draft: &mut Draft) -> bool {
        if !contains_any(lower, &["speed", "fast", "slow"]) {
            return false;
        }
        draft.action = Action::ChangeSpeed;
        draft.confidence += SPEED_SCORE;

        if lower.contains("fast") {
            draft.speed_ms = Some(FAST_SPEED_MS);
        } else if lower.contains("slow") {
            draft.speed_ms = Some(SLOW_SPEED_MS);
        } else if let Some(ms) = self.explicit_duration_ms(text) {
            draft.speed_ms = Some(ms);
        }
        true
    }

    /// `<n> ms` / `<n> millisecond(s)`, or `<n> sec(s)` / `<n> second(s)`
    fn explicit_duration_ms(&self, text: &str) -> Option<u64> {
        let caps = self.duration_re.captures(text)?;
        let value: u64 = caps.get(1)?.as_str().parse().ok()?;
        let unit = caps.get(2)?.as_str().to_lowercase();
        if unit.starts_with("sec") {
            Some(value.saturating_mul(1000))
        } else {
            Some(value)
        }
    }

    fn layout_rule(&self, lower: &str, draft: &mut Draft) -> bool {
        if !contains_any(lower, &["layout", "arrange", "position"]) {
            return false;
        }
        draft.action = Action::ChangeLayout;
        draft.confidence += LAYOUT_BASE;

        let layout = if contains_any(lower, &["vertical", "up", "down"]) {
            Some(Layout::Vertical)
        } else if contains_any(lower, &["horizontal", "side", "left", "right"]) {
            Some(Layout::Horizontal)
        } else if contains_any(lower, &["grid", "matrix"]) {
            Some(Layout::Grid)
        } else {
            None
        };
        if let Some(layout) = layout {
            draft.layout = Some(layout);
            draft.confidence += LAYOUT_BONUS;
        }
        true
    }

    /// Fires only when a known feature is named alongside the verb; a bare
    /// "show" is too common in other requests to mean anything.
    fn feature_rule(&self, lower: &str, draft: &mut Draft) -> bool {
        if !contains_any(lower, &["add", "include", "show"]) {
            return false;
        }
        let feature = if contains_any(lower, &["color", "highlight"]) {
            Feature::ColorCoding
        } else if contains_any(lower, &["sound", "audio"]) {
            Feature::SoundEffects
        } else if contains_any(lower, &["step", "explanation"]) {
            Feature::StepExplanation
        } else {
            return false;
        };
        draft.action = Action::AddFeature;
        draft.feature = Some(feature);
        draft.confidence += FEATURE_BASE + FEATURE_BONUS;
        true
    }

    fn fallback_rule(&self, lower: &str, draft: &mut Draft) -> bool {
        if draft.action != Action::Unknown || draft.confidence != 0.0 {
            return false;
        }
        if !contains_any(lower, &["change", "modify", "update"]) {
            return false;
        }
        draft.action = Action::ChangeVisualization;
        draft.confidence = FALLBACK_CONFIDENCE;
        true
    }
}

impl Default for CommandInterpreter {
    fn default() -> Self {
        Self::new()
    }
}
