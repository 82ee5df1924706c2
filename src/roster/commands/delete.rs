use crate::commands::helpers::NO_LIST;
use crate::commands::{CmdMessage, CmdResult, Handler};
use crate::error::Result;
use crate::parser::{CommandKind, ParsedCommand};
use crate::session::Session;
use tracing::info;

/// Removes the selected student from the filtered list. The roster keeps it.
pub struct DeleteHandler;

impl Handler for DeleteHandler {
    fn kind(&self) -> CommandKind {
        CommandKind::Delete
    }

    fn verb(&self) -> &'static str {
        "delete"
    }

    fn help_text(&self) -> &'static str {
        "Remove the selected student from the filtered student list"
    }

    fn execute(&self, command: &ParsedCommand, session: &mut Session) -> Result<CmdResult> {
        if command.has_args() {
            return Ok(CmdMessage::error(
                "delete takes no arguments; use 'select <id>' to choose the student",
            )
            .into());
        }

        let Some(id) = session.selection() else {
            return Ok(CmdMessage::error("No student selected. Use 'select <id>' first.").into());
        };

        if session.filtered_ids().is_none() {
            return Ok(CmdMessage::error(NO_LIST).into());
        }

        let name = session
            .student(id)
            .map(|s| s.full_name())
            .unwrap_or_else(|| id.to_string());

        if !session.remove_from_filtered(id) {
            return Ok(CmdMessage::error(format!(
                "Student with id {} does not exist or is not in filtered student list",
                id
            ))
            .into());
        }

        info!(%id, "student removed from filtered list");
        Ok(CmdMessage::success(format!("Student {} has been deleted.", name)).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::test_utils::open_session;

    #[test]
    fn without_selection_is_an_error() {
        let mut session = open_session();
        let before = session.filtered_ids().unwrap().to_vec();

        let result = DeleteHandler.execute(&parse("delete"), &mut session).unwrap();

        assert!(result.has_errors());
        assert_eq!(result.lines(), vec!["No student selected. Use 'select <id>' first."]);
        assert_eq!(session.filtered_ids().unwrap(), before.as_slice());
    }

    #[test]
    fn without_anything_open() {
        let mut session = Session::new();
        let result = DeleteHandler.execute(&parse("delete"), &mut session).unwrap();
        assert!(result.has_errors());
    }

    #[test]
    fn removes_selected_from_list_only() {
        let mut session = open_session();
        let id = session.find_in_filtered(100003).unwrap();
        session.select(id);

        let result = DeleteHandler.execute(&parse("delete"), &mut session).unwrap();

        assert_eq!(result.lines(), vec!["Student arthur Baker has been deleted."]);
        assert_eq!(session.filtered_ids().unwrap().len(), 5);
        assert!(session.find_in_filtered(100003).is_none());
        assert!(session.student(id).is_some());
    }

    #[test]
    fn deleting_twice_reports_missing() {
        let mut session = open_session();
        let id = session.find_in_filtered(100003).unwrap();
        session.select(id);

        DeleteHandler.execute(&parse("delete"), &mut session).unwrap();
        let result = DeleteHandler.execute(&parse("delete"), &mut session).unwrap();

        assert!(result.has_errors());
        assert_eq!(session.filtered_ids().unwrap().len(), 5);
    }

    #[test]
    fn arguments_are_rejected() {
        let mut session = open_session();
        let id = session.find_in_filtered(100003).unwrap();
        session.select(id);

        let result = DeleteHandler
            .execute(&parse("delete 100003"), &mut session)
            .unwrap();
        assert!(result.has_errors());
        assert_eq!(session.filtered_ids().unwrap().len(), 6);
    }
}
