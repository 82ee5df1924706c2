use crate::commands::helpers::{resolve_student_id, selected_message};
use crate::commands::{CmdMessage, CmdResult, Handler};
use crate::error::Result;
use crate::parser::{CommandKind, ParsedCommand};
use crate::session::Session;
use tracing::debug;

pub struct SelectHandler;

impl Handler for SelectHandler {
    fn kind(&self) -> CommandKind {
        CommandKind::Select
    }

    fn verb(&self) -> &'static str {
        "select"
    }

    fn help_text(&self) -> &'static str {
        "Select a student from the filtered student list by Id"
    }

    fn execute(&self, command: &ParsedCommand, session: &mut Session) -> Result<CmdResult> {
        if command.arg_count() > 1 {
            return Ok(CmdMessage::error("Usage: select <id>").into());
        }

        let id = match resolve_student_id(command.arg(0), session) {
            Ok(id) => id,
            Err(message) => return Ok(message.into()),
        };

        session.select(id);
        debug!(%id, "student selected");

        let result = match session.selected() {
            Some(student) => selected_message(student).into(),
            None => CmdResult::default(),
        };
        Ok(result)
    }
}
