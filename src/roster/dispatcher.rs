//! # Dispatcher
//!
//! The entry point of the library. A [`Dispatcher`] owns the [`Session`] and
//! the handler registry, and turns one raw input line into a [`Step`]:
//!
//! ```text
//! line ─▶ parser::parse ─▶ CommandKind
//!                             ├─ Exit / Clear ─▶ Step::Exit / Step::Clear
//!                             ├─ Invalid      ─▶ "Unknown command" advisory
//!                             └─ verb         ─▶ handler.execute(session)
//! ```
//!
//! Handlers are kept in help order. Registering a second handler for a verb
//! replaces the first, and the `help` catalog is rebuilt to match.

use crate::commands::{
    CmdMessage, CmdResult, DeleteHandler, FilterHandler, Handler, HelpHandler, ListHandler,
    ModifyHandler, OpenHandler, SelectHandler, ShowHandler,
};
use crate::config::RosterConfig;
use crate::error::{Result, RosterError};
use crate::parser::{parse, CommandKind, ParsedCommand};
use crate::session::Session;
use crate::source::RosterSource;
use tracing::debug;

/// What the REPL should do after one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Output(CmdResult),
    Clear,
    Exit,
}

pub struct Dispatcher {
    handlers: Vec<Box<dyn Handler>>,
    session: Session,
}

impl Dispatcher {
    /// Builds the standard registry over `source`, with `open` defaults taken
    /// from `config`.
    pub fn new<S: RosterSource + 'static>(source: S, config: &RosterConfig) -> Self {
        let mut handlers: Vec<Box<dyn Handler>> = vec![
            Box::new(OpenHandler::new(source, config.student_count, config.seed)),
            Box::new(ListHandler),
            Box::new(SelectHandler),
            Box::new(ShowHandler),
            Box::new(ModifyHandler),
            Box::new(DeleteHandler),
            Box::new(FilterHandler),
        ];
        let help = HelpHandler::new(&handlers);
        handlers.insert(0, Box::new(help));

        Self {
            handlers,
            session: Session::new(),
        }
    }

    /// A dispatcher with no handlers; every verb is a missing handler until
    /// one is registered.
    pub fn empty() -> Self {
        Self {
            handlers: Vec::new(),
            session: Session::new(),
        }
    }

    /// Adds a handler, replacing any registered for the same kind.
    ///
    /// If the registry holds a `help` handler, registering any other kind
    /// replaces it with a [`HelpHandler`] built from the updated registry.
    pub fn register(&mut self, handler: Box<dyn Handler>) {
        let kind = handler.kind();
        match self.handlers.iter().position(|h| h.kind() == kind) {
            Some(pos) => self.handlers[pos] = handler,
            None => self.handlers.push(handler),
        }
        if kind != CommandKind::Help {
            self.refresh_help();
        }
    }

    fn refresh_help(&mut self) {
        let Some(pos) = self
            .handlers
            .iter()
            .position(|h| h.kind() == CommandKind::Help)
        else {
            return;
        };
        self.handlers.remove(pos);
        let help = HelpHandler::new(&self.handlers);
        self.handlers.insert(pos, Box::new(help));
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// `(verb, help text)` for every registered handler, in registry order.
    pub fn help_entries(&self) -> Vec<(&'static str, &'static str)> {
        self.handlers
            .iter()
            .map(|h| (h.verb(), h.help_text()))
            .collect()
    }

    /// Parses and handles one line.
    pub fn dispatch(&mut self, line: &str) -> Result<Step> {
        let command = parse(line);
        match command.kind() {
            CommandKind::Exit => Ok(Step::Exit),
            CommandKind::Clear => Ok(Step::Clear),
            _ => self.route(&command).map(Step::Output),
        }
    }

    /// Hands a parsed command to its handler.
    ///
    /// Signals are the REPL's business and are refused here.
    pub fn route(&mut self, command: &ParsedCommand) -> Result<CmdResult> {
        let kind = command.kind();
        debug!(?kind, verb = command.verb(), args = command.arg_count(), "routing command");

        if kind.is_signal() {
            return Err(RosterError::Unroutable(kind));
        }

        if kind == CommandKind::Invalid {
            if command.verb().is_empty() {
                return Ok(CmdResult::default());
            }
            let mut result: CmdResult =
                CmdMessage::error(format!("Unknown command: {}", command.verb())).into();
            result.info("Type 'help' to see the available commands.");
            return Ok(result);
        }

        let handler = self
            .handlers
            .iter()
            .find(|h| h.kind() == kind)
            .ok_or(RosterError::MissingHandler(kind))?;
        handler.execute(command, &mut self.session)
    }
}
