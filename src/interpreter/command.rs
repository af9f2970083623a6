//! Parsed command types - the structured result of interpreting a user message

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the numbers are drawn on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualizationType {
    Columns,
    Bars,
    Circles,
    Buttons,
}

impl fmt::Display for VisualizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Columns => write!(f, "columns"),
            Self::Bars => write!(f, "bars"),
            Self::Circles => write!(f, "circles"),
            Self::Buttons => write!(f, "buttons"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    Horizontal,
    Vertical,
    Grid,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
            Self::Grid => write!(f, "grid"),
        }
    }
}

/// Optional extras a user can switch on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    ColorCoding,
    SoundEffects,
    StepExplanation,
}

impl Feature {
    /// Wire tag, e.g. `color_coding`
    pub fn tag(&self) -> &'static str {
        match self {
            Self::ColorCoding => "color_coding",
            Self::SoundEffects => "sound_effects",
            Self::StepExplanation => "step_explanation",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Action kind, without parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    ChangeVisualization,
    ChangeNumbers,
    ChangeSpeed,
    ChangeLayout,
    AddFeature,
    Unknown,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChangeVisualization => write!(f, "change_visualization"),
            Self::ChangeNumbers => write!(f, "change_numbers"),
            Self::ChangeSpeed => write!(f, "change_speed"),
            Self::ChangeLayout => write!(f, "change_layout"),
            Self::AddFeature => write!(f, "add_feature"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// A command together with the parameters that belong to it.
///
/// Each variant only carries the fields relevant to its action, so a speed
/// change can never hold a layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "parameters", rename_all = "snake_case")]
pub enum Command {
    ChangeVisualization {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        visualization_type: Option<VisualizationType>,
        #[serde(default)]
        height_representation: bool,
    },
    ChangeNumbers {
        numbers: Vec<i64>,
    },
    ChangeSpeed {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        speed_ms: Option<u64>,
    },
    ChangeLayout {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        layout: Option<Layout>,
    },
    AddFeature {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        feature: Option<Feature>,
    },
    Unknown,
}

impl Command {
    pub fn action(&self) -> Action {
        match self {
            Self::ChangeVisualization { .. } => Action::ChangeVisualization,
            Self::ChangeNumbers { .. } => Action::ChangeNumbers,
            Self::ChangeSpeed { .. } => Action::ChangeSpeed,
            Self::ChangeLayout { .. } => Action::ChangeLayout,
            Self::AddFeature { .. } => Action::AddFeature,
            Self::Unknown => Action::Unknown,
        }
    }
}

/// Result of interpreting one message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedCommand {
    #[serde(flatten)]
    pub command: Command,
    /// Additive heuristic score, not a probability. May exceed 1.0.
    pub confidence: f64,
    pub original_text: String,
}

impl ParsedCommand {
    /// The "nothing recognized" result
    pub fn unknown(original_text: impl Into<String>) -> Self {
        Self {
            command: Command::Unknown,
            confidence: 0.0,
            original_text: original_text.into(),
        }
    }

    pub fn action(&self) -> Action {
        self.command.action()
    }

    /// Serialize to a single JSON line
    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
