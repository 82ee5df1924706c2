use crate::commands::helpers::{pad_right, NO_SELECTION};
use crate::commands::{CmdMessage, CmdResult, Handler};
use crate::error::Result;
use crate::model::{Student, StudentField};
use crate::parser::{CommandKind, ParsedCommand};
use crate::session::Session;

const LABEL_WIDTH: usize = 19;

pub struct ShowHandler;

impl Handler for ShowHandler {
    fn kind(&self) -> CommandKind {
        CommandKind::Show
    }

    fn verb(&self) -> &'static str {
        "show"
    }

    fn help_text(&self) -> &'static str {
        "After selecting a student, enter 'show' to show more details."
    }

    fn execute(&self, command: &ParsedCommand, session: &mut Session) -> Result<CmdResult> {
        if command.has_args() {
            return Ok(CmdMessage::error("show takes no arguments; use 'select <id>' first").into());
        }

        match session.selected() {
            Some(student) => Ok(details(student)),
            None => Ok(CmdMessage::warning(NO_SELECTION).into()),
        }
    }
}

fn details(student: &Student) -> CmdResult {
    let rows = [
        ("Id:", student.field_value(StudentField::Id)),
        ("Name:", student.full_name()),
        ("Birthdate:", student.field_value(StudentField::BirthDate)),
        ("GPA:", student.field_value(StudentField::Gpa)),
        (
            "Credits Completed:",
            student.field_value(StudentField::CompletedCredits),
        ),
        ("Major:", student.field_value(StudentField::Major)),
    ];

    let mut result = CmdResult::default();
    for (label, value) in rows {
        result.info(format!("{}{}", pad_right(label, LABEL_WIDTH), value));
    }
    result
}
