use crate::commands::helpers::pad_right;
use crate::commands::{CmdResult, Handler};
use crate::error::Result;
use crate::parser::{CommandKind, ParsedCommand};
use crate::session::Session;

const VERB_WIDTH: usize = 12;
const HELP_TEXT: &str = "Print this help text";

/// `clear` and `exit` belong to the REPL loop, not the registry.
const SIGNAL_LINES: &[(&str, &str)] = &[
    ("clear", "Clear the terminal screen"),
    ("exit", "Terminate the Student REPL"),
];

/// Lists every command. Holds a snapshot of the registry taken when the
/// dispatcher was built.
pub struct HelpHandler {
    entries: Vec<(&'static str, &'static str)>,
}

impl HelpHandler {
    /// Builds the catalog from the other handlers, with `help` itself first.
    pub fn new(others: &[Box<dyn Handler>]) -> Self {
        let mut entries = vec![("help", HELP_TEXT)];
        entries.extend(others.iter().map(|h| (h.verb(), h.help_text())));
        Self { entries }
    }

    pub fn entries(&self) -> &[(&'static str, &'static str)] {
        &self.entries
    }
}

impl Handler for HelpHandler {
    fn kind(&self) -> CommandKind {
        CommandKind::Help
    }

    fn verb(&self) -> &'static str {
        "help"
    }

    fn help_text(&self) -> &'static str {
        HELP_TEXT
    }

    fn execute(&self, _command: &ParsedCommand, _session: &mut Session) -> Result<CmdResult> {
        let mut result = CmdResult::default();
        for (verb, text) in SIGNAL_LINES.iter().chain(self.entries.iter()) {
            result.info(format!("{}{}", pad_right(verb, VERB_WIDTH), text));
        }
        Ok(result)
    }
}
