//! Confirmation text for a parsed command

use super::command::{Command, Feature, ParsedCommand, VisualizationType};
use super::parser::{FAST_SPEED_MS, SLOW_SPEED_MS};

/// Below this score the user is asked to rephrase
pub const CLARIFICATION_THRESHOLD: f64 = 0.3;

pub const CLARIFICATION_MESSAGE: &str = "I'm not sure what you'd like to change. \
Try something like \"make it faster\", \"use the numbers 5, 3, 8\" or \"arrange them vertically\".";

pub const GENERIC_CONFIRMATION: &str = "Got it! I'll update the visualization based on your request.";

/// Build the reply shown to the user for `parsed`
pub fn describe(parsed: &ParsedCommand) -> String {
    if parsed.confidence < CLARIFICATION_THRESHOLD {
        return CLARIFICATION_MESSAGE.to_string();
    }
    specific_reply(&parsed.command).unwrap_or_else(|| GENERIC_CONFIRMATION.to_string())
}

fn specific_reply(command: &Command) -> Option<String> {
    match command {
        Command::ChangeVisualization {
            visualization_type,
            height_representation,
        } => match (visualization_type, height_representation) {
            (Some(VisualizationType::Buttons), true) => Some(
                "I'll show the numbers as buttons arranged like columns, with each height representing its value."
                    .to_string(),
            ),
            (Some(kind), true) => Some(format!(
                "I'll draw the numbers as {}, with each height representing its value.",
                kind
            )),
            (Some(kind), false) => Some(format!("I'll switch the visualization to {}.", kind)),
            (None, true) => {
                Some("I'll make the height of each element represent its value.".to_string())
            }
            (None, false) => None,
        },
        Command::ChangeNumbers { numbers } if !numbers.is_empty() => {
            let list = numbers
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            Some(format!("I'll sort these numbers instead: {}.", list))
        }
        Command::ChangeSpeed { speed_ms: Some(ms) } => Some(match *ms {
            FAST_SPEED_MS => format!("Speeding things up! Each step now takes {}ms.", ms),
            SLOW_SPEED_MS => format!("Slowing things down. Each step now takes {}ms.", ms),
            ms => format!("I'll set the animation speed to {}ms per step.", ms),
        }),
        Command::ChangeLayout { layout: Some(layout) } => {
            Some(format!("I'll arrange the elements in a {} layout.", layout))
        }
        Command::AddFeature { feature: Some(feature) } => Some(
            match feature {
                Feature::ColorCoding => {
                    "I'll add color coding so comparisons and swaps stand out."
                }
                Feature::SoundEffects => "I'll add sound effects for each comparison and swap.",
                Feature::StepExplanation => "I'll explain each step as the sort runs.",
            }
            .to_string(),
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::command::Layout;

    fn with(command: Command, confidence: f64) -> ParsedCommand {
        ParsedCommand {
            command,
            confidence,
            original_text: String::new(),
        }
    }

    #[test]
    fn test_low_confidence_asks_for_clarification() {
        let commands = [
            Command::ChangeSpeed { speed_ms: Some(500) },
            Command::ChangeLayout { layout: Some(Layout::Grid) },
            Command::Unknown,
        ];
        for command in commands {
            assert_eq!(describe(&with(command, 0.25)), CLARIFICATION_MESSAGE);
        }
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let reply = describe(&with(Command::ChangeLayout { layout: Some(Layout::Grid) }, 0.3));
        assert_eq!(reply, "I'll arrange the elements in a grid layout.");
    }

    #[test]
    fn test_visualization_replies() {
        let reply = describe(&with(
            Command::ChangeVisualization {
                visualization_type: Some(VisualizationType::Bars),
                height_representation: false,
            },
            0.5,
        ));
        assert_eq!(reply, "I'll switch the visualization to bars.");

        let reply = describe(&with(
            Command::ChangeVisualization {
                visualization_type: Some(VisualizationType::Buttons),
                height_representation: true,
            },
            0.8,
        ));
        assert!(reply.contains("buttons"));
    }

    #[test]
    fn test_numbers_and_speed_replies() {
        let reply = describe(&with(Command::ChangeNumbers { numbers: vec![5, 3, 8] }, 0.4));
        assert_eq!(reply, "I'll sort these numbers instead: 5, 3, 8.");

        let reply = describe(&with(Command::ChangeSpeed { speed_ms: Some(750) }, 0.4));
        assert_eq!(reply, "I'll set the animation speed to 750ms per step.");
    }

    #[test]
    fn test_generic_fallthrough() {
        assert_eq!(
            describe(&with(Command::ChangeSpeed { speed_ms: None }, 0.4)),
            GENERIC_CONFIRMATION
        );
        assert_eq!(describe(&with(Command::Unknown, 0.9)), GENERIC_CONFIRMATION);
    }
}
