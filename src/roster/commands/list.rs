use crate::commands::helpers::{push_student_table, ExtraColumn, NO_LIST};
use crate::commands::{CmdMessage, CmdResult, Handler};
use crate::error::Result;
use crate::parser::{CommandKind, ParsedCommand};
use crate::session::Session;

pub struct ListHandler;

impl Handler for ListHandler {
    fn kind(&self) -> CommandKind {
        CommandKind::List
    }

    fn verb(&self) -> &'static str {
        "list"
    }

    fn help_text(&self) -> &'static str {
        "Show ids and names for the current filtered student list"
    }

    fn execute(&self, _command: &ParsedCommand, session: &mut Session) -> Result<CmdResult> {
        let Some(students) = session.filtered_students() else {
            return Ok(CmdMessage::warning(NO_LIST).into());
        };

        if students.is_empty() {
            return Ok(CmdMessage::warning("Filtered student list is empty").into());
        }

        let mut result = CmdResult::default();
        push_student_table(&mut result, &students, ExtraColumn::None);
        Ok(result)
    }
}
