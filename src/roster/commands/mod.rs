//! # Command Layer
//!
//! One [`Handler`] per verb. A handler is a stateless strategy: it holds only
//! what was injected at construction (the roster source for `open`, the help
//! catalog for `help`) and works on the [`Session`] lent to it for one call.
//!
//! Handlers never print. They answer with a [`CmdResult`], an ordered list of
//! leveled lines. User mistakes are `Error`/`Warning` lines inside an `Ok`;
//! an `Err` means something the user cannot fix by typing a better command.

use crate::error::Result;
use crate::parser::{CommandKind, ParsedCommand};
use crate::session::Session;

pub mod delete;
pub mod filter;
pub mod help;
pub mod helpers;
pub mod list;
pub mod modify;
pub mod open;
pub mod select;
pub mod show;

pub use delete::DeleteHandler;
pub use filter::FilterHandler;
pub use help::HelpHandler;
pub use list::ListHandler;
pub use modify::ModifyHandler;
pub use open::OpenHandler;
pub use select::SelectHandler;
pub use show::ShowHandler;

/// The contract every verb implements.
pub trait Handler {
    fn kind(&self) -> CommandKind;

    /// The verb as shown in `help`.
    fn verb(&self) -> &'static str;

    /// One line of help text.
    fn help_text(&self) -> &'static str;

    fn execute(&self, command: &ParsedCommand, session: &mut Session) -> Result<CmdResult>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// The ordered lines a command produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn info(&mut self, content: impl Into<String>) {
        self.add_message(CmdMessage::info(content));
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn extend(&mut self, other: CmdResult) {
        self.messages.extend(other.messages);
    }

    /// The text of every line, without levels.
    pub fn lines(&self) -> Vec<&str> {
        self.messages.iter().map(|m| m.content.as_str()).collect()
    }

    pub fn text(&self) -> String {
        self.lines().join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}

impl From<CmdMessage> for CmdResult {
    fn from(message: CmdMessage) -> Self {
        CmdResult::default().with_message(message)
    }
}
