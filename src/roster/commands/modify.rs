//! `modify <id> [<field> <value>]`
//!
//! Looks the student up exactly like `select` (and selects it), then, when a
//! field and value follow, edits that field on the roster record. Every view
//! of the student sees the edit since they all hold its id.

use crate::commands::helpers::{resolve_student_id, selected_message};
use crate::commands::{CmdMessage, CmdResult, Handler};
use crate::error::Result;
use crate::model::{FieldEdit, StudentField};
use crate::parser::{CommandKind, ParsedCommand};
use crate::session::Session;
use tracing::info;

const USAGE: &str = "Usage: modify <id> [<field> <value>]";
const FIELDS: &str = "Fields: firstName, lastName, birthDate (YYYY-MM-DD), gpa (0.0-4.0), completedCredits (0-128), major";

pub struct ModifyHandler;

impl Handler for ModifyHandler {
    fn kind(&self) -> CommandKind {
        CommandKind::Modify
    }

    fn verb(&self) -> &'static str {
        "modify"
    }

    fn help_text(&self) -> &'static str {
        "Select a student by Id and change one field: modify <id> <field> <value>"
    }

    fn execute(&self, command: &ParsedCommand, session: &mut Session) -> Result<CmdResult> {
        let id = match resolve_student_id(command.arg(0), session) {
            Ok(id) => id,
            Err(message) => return Ok(message.into()),
        };

        session.select(id);
        let mut result = CmdResult::default();
        if let Some(student) = session.selected() {
            result.add_message(selected_message(student));
        }

        let rest = &command.args()[1..];
        let Some(keyword) = rest.first() else {
            return Ok(result);
        };

        let Some(field) = StudentField::from_keyword(keyword) else {
            result.add_message(CmdMessage::error(format!("Unknown field {}", keyword)));
            result.info(FIELDS);
            return Ok(result);
        };

        if rest.len() < 2 {
            result.add_message(CmdMessage::error(format!("Missing value for {}", field)));
            result.info(USAGE);
            return Ok(result);
        }

        let edit = match FieldEdit::parse(field, &rest[1..].join(" ")) {
            Ok(edit) => edit,
            Err(message) => {
                result.add_message(CmdMessage::error(message));
                return Ok(result);
            }
        };

        let Some(student) = session.student_mut(id) else {
            return Ok(result);
        };

        match student.apply(edit) {
            Some(change) => {
                info!(%id, field = %change.field, old = %change.old, new = %change.new, "student modified");
                result.add_message(CmdMessage::success(change.to_string()));
            }
            None => result.info(format!(
                "{} is already {}",
                field,
                student.field_value(field)
            )),
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::test_utils::{date, open_session};

    fn run(session: &mut Session, line: &str) -> CmdResult {
        ModifyHandler.execute(&parse(line), session).unwrap()
    }

    #[test]
    fn bare_modify_behaves_like_select() {
        let mut session = open_session();
        let result = run(&mut session, "modify 100002");

        assert_eq!(result.lines(), vec!["Current student is now 100002 Bob Anders"]);
        assert_eq!(session.selection().unwrap().value(), 100002);
    }

    #[test]
    fn lookup_miss_keeps_selection() {
        let mut session = open_session();
        run(&mut session, "modify 100002");

        let result = run(&mut session, "modify 123456 gpa 3.0");
        assert!(result.text().contains("does not exist"));
        assert_eq!(session.selection().unwrap().value(), 100002);
    }

    #[test]
    fn edits_each_field() {
        let mut session = open_session();

        run(&mut session, "modify 100002 firstName Robert");
        run(&mut session, "modify 100002 LASTNAME Andersson");
        run(&mut session, "modify 100002 birthDate 1990-02-28");
        run(&mut session, "modify 100002 gpa 3.75");
        run(&mut session, "modify 100002 completedCredits 100");
        run(&mut session, "modify 100002 major engineering");

        let student = session.selected().unwrap();
        assert_eq!(student.full_name(), "Robert Andersson");
        assert_eq!(student.birth_date, date(1990, 2, 28));
        assert_eq!(student.gpa, 3.75);
        assert_eq!(student.completed_credits, 100);
        assert_eq!(student.major, "Engineering");
    }

    #[test]
    fn reports_the_change() {
        let mut session = open_session();
        let result = run(&mut session, "modify 100001 gpa 2.0");

        assert_eq!(
            result.lines(),
            vec![
                "Current student is now 100001 Alice Smith",
                "gpa changed from 3.50 to 2.00",
            ]
        );
    }

    #[test]
    fn multi_word_names_are_joined() {
        let mut session = open_session();
        run(&mut session, "modify 100005 lastName Van Der Berg");
        assert_eq!(session.selected().unwrap().last_name, "Van Der Berg");
    }

    #[test]
    fn unchanged_value() {
        let mut session = open_session();
        let result = run(&mut session, "modify 100001 major CompSci");
        assert_eq!(result.lines()[1], "major is already CompSci");
    }

    #[test]
    fn invalid_edits_leave_record_alone() {
        let mut session = open_session();
        let before = session.student(session.find_in_filtered(100001).unwrap()).cloned();

        for line in [
            "modify 100001 gpa 9",
            "modify 100001 id 100009",
            "modify 100001 nickname Al",
            "modify 100001 completedCredits",
            "modify 100001 birthDate yesterday",
        ] {
            let result = run(&mut session, line);
            assert!(result.has_errors(), "{} should fail", line);
        }

        let after = session.student(session.find_in_filtered(100001).unwrap()).cloned();
        assert_eq!(before, after);
    }

    #[test]
    fn edits_are_seen_by_roster_and_list() {
        let mut session = open_session();
        run(&mut session, "modify 100003 firstName Zed");

        let names: Vec<String> = session
            .filtered_students()
            .unwrap()
            .iter()
            .map(|s| s.first_name.clone())
            .collect();
        assert!(names.contains(&"Zed".to_string()));
    }
}
