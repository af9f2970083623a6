//! Command interpreter - free text in, scored command and reply text out

pub mod command;
pub mod parser;
pub mod response;

pub use command::{Action, Command, Feature, Layout, ParsedCommand, VisualizationType};
pub use parser::CommandInterpreter;
pub use response::{describe, CLARIFICATION_MESSAGE, CLARIFICATION_THRESHOLD};

use std::sync::LazyLock;

static INTERPRETER: LazyLock<CommandInterpreter> = LazyLock::new(CommandInterpreter::new);

/// Parse with a shared interpreter instance
pub fn parse(text: &str) -> ParsedCommand {
    INTERPRETER.parse(text)
}
