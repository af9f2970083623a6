//! Visualizer session - applies chat commands to the sort visualization

use crate::config::Config;
use crate::interpreter::{
    self, describe, Command, Feature, Layout, ParsedCommand, VisualizationType,
    CLARIFICATION_THRESHOLD,
};
use crate::sequencer::{generate, AnimationStep, Playback};

/// What the canvas should currently look like
#[derive(Debug, Clone, PartialEq)]
pub struct VisualizationSettings {
    pub numbers: Vec<i64>,
    pub speed_ms: u64,
    pub visualization_type: VisualizationType,
    pub height_representation: bool,
    pub layout: Layout,
    pub features: Vec<Feature>,
}

impl From<&Config> for VisualizationSettings {
    fn from(config: &Config) -> Self {
        Self {
            numbers: config.numbers.clone(),
            speed_ms: config.speed_ms,
            visualization_type: config.visualization,
            height_representation: false,
            layout: config.layout,
            features: Vec::new(),
        }
    }
}

/// Session state: settings, the generated trace and its playback
pub struct Visualizer {
    pub settings: VisualizationSettings,
    pub steps: Vec<AnimationStep>,
    pub playback: Playback,
}

impl Visualizer {
    pub fn new(config: &Config) -> Self {
        let settings = VisualizationSettings::from(config);
        let steps = generate(&settings.numbers, settings.speed_ms);
        let playback = Playback::for_steps(&steps);
        Self {
            settings,
            steps,
            playback,
        }
    }

    /// Parse a chat message, apply it when confident enough and return
    /// the reply text
    pub fn handle_message(&mut self, text: &str) -> String {
        let parsed = interpreter::parse(text);
        let reply = describe(&parsed);
        if parsed.confidence >= CLARIFICATION_THRESHOLD {
            self.apply(&parsed);
        } else {
            log::warn!(
                "Ignoring low-confidence command ({:.2}): {:?}",
                parsed.confidence,
                parsed.original_text
            );
        }
        reply
    }

    /// Apply a command to the settings. Returns true if the step sequence
    /// was regenerated.
    pub fn apply(&mut self, parsed: &ParsedCommand) -> bool {
        log::info!(
            "Applying {} (confidence {:.2})",
            parsed.action(),
            parsed.confidence
        );
        match &parsed.command {
            Command::ChangeVisualization {
                visualization_type,
                height_representation,
            } => {
                if let Some(kind) = visualization_type {
                    self.settings.visualization_type = *kind;
                }
                if *height_representation {
                    self.settings.height_representation = true;
                }
                false
            }
            Command::ChangeNumbers { numbers } => {
                self.settings.numbers = numbers.clone();
                self.regenerate();
                true
            }
            Command::ChangeSpeed { speed_ms: Some(ms) } if *ms > 0 => {
                self.settings.speed_ms = *ms;
                self.regenerate();
                true
            }
            Command::ChangeLayout { layout: Some(layout) } => {
                self.settings.layout = *layout;
                false
            }
            Command::AddFeature { feature: Some(feature) } => {
                if !self.settings.features.contains(feature) {
                    self.settings.features.push(*feature);
                }
                false
            }
            _ => false,
        }
    }

    /// Rebuild the whole sequence and rewind playback
    fn regenerate(&mut self) {
        self.steps = generate(&self.settings.numbers, self.settings.speed_ms);
        self.playback = Playback::for_steps(&self.steps);
        log::debug!("Regenerated {} steps", self.steps.len());
    }

    pub fn current_step(&self) -> Option<&AnimationStep> {
        self.steps.get(self.playback.position())
    }
}
