//! `filter` narrows the filtered list by one attribute at a time.
//!
//! Filters compose: each one runs over the current filtered list, so
//! `filter firstName A` followed by `filter gpa 3 4` keeps only A-students in
//! that range. Every concrete filter replaces the filtered list, so a filter
//! with no matches leaves it empty.

mod predicate;
mod usage;

pub use predicate::{parse_request, DatePart, FilterError, FilterRequest, Predicate};

use crate::commands::helpers::{push_student_table, NO_LIST};
use crate::commands::{CmdMessage, CmdResult, Handler};
use crate::error::Result;
use crate::model::StudentId;
use crate::parser::{CommandKind, ParsedCommand};
use crate::session::Session;
use tracing::debug;

pub struct FilterHandler;

impl Handler for FilterHandler {
    fn kind(&self) -> CommandKind {
        CommandKind::Filter
    }

    fn verb(&self) -> &'static str {
        "filter"
    }

    fn help_text(&self) -> &'static str {
        "Filter the list of students by their name, birthdate, GPA, credits completed or major."
    }

    fn execute(&self, command: &ParsedCommand, session: &mut Session) -> Result<CmdResult> {
        let request = match parse_request(command.args()) {
            Ok(request) => request,
            Err(FilterError { message, usage: shown }) => {
                let mut result: CmdResult = CmdMessage::error(message).into();
                result.extend(match shown {
                    Some(field) => usage::usage(field, session),
                    None => usage::menu(),
                });
                return Ok(result);
            }
        };

        match request {
            FilterRequest::Menu => Ok(usage::menu()),
            FilterRequest::Usage(field) => Ok(usage::usage(field, session)),
            FilterRequest::Apply(predicate) => Ok(apply(&predicate, session)),
        }
    }
}

fn apply(predicate: &Predicate, session: &mut Session) -> CmdResult {
    let Some(students) = session.filtered_students() else {
        return CmdMessage::error(NO_LIST).into();
    };

    let mut result = CmdResult::default();
    if let Predicate::BirthDate { part, value } = predicate {
        result.info(format!("Filtering by {} {}...", part.label(), value));
    }

    let matches = predicate.apply(&students);
    debug!(filter = %predicate, before = students.len(), after = matches.len(), "filter applied");

    if matches.is_empty() {
        result.add_message(CmdMessage::warning(predicate.no_match_message()));
    } else {
        push_student_table(&mut result, &matches, predicate.column());
    }

    let ids: Vec<StudentId> = matches.iter().map(|s| s.id()).collect();
    session.set_filtered(ids);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::ListHandler;
    use crate::parser::parse;
    use crate::test_utils::open_session;

    fn run(session: &mut Session, line: &str) -> CmdResult {
        FilterHandler.execute(&parse(line), session).unwrap()
    }

    fn listed(session: &Session) -> Vec<u32> {
        session
            .filtered_ids()
            .unwrap()
            .iter()
            .map(|id| id.value())
            .collect()
    }

    #[test]
    fn without_list() {
        let mut session = Session::new();
        let result = run(&mut session, "filter firstName A");
        assert_eq!(result.lines(), vec![NO_LIST]);
        assert!(session.filtered_ids().is_none());
    }

    #[test]
    fn bare_filter_shows_menu() {
        let mut session = open_session();
        let result = run(&mut session, "filter");
        assert_eq!(result, usage::menu());
        assert_eq!(listed(&session).len(), 6);
    }

    #[test]
    fn first_name_replaces_list() {
        let mut session = open_session();
        let result = run(&mut session, "filter firstName a");

        assert_eq!(listed(&session), vec![100001, 100003, 100006]);
        assert_eq!(
            result.lines()[1],
            "Id        Name                          # of Students: 3"
        );
        assert_eq!(result.lines()[3], "100001    Alice Smith");
    }

    #[test]
    fn gpa_table_has_gpa_column() {
        let mut session = open_session();
        let result = run(&mut session, "filter gpa 2.4 3.5");

        assert_eq!(listed(&session), vec![100001, 100002, 100006]);
        assert_eq!(
            result.lines()[1],
            "Id        GPA       Name                          # of Students: 3"
        );
        assert_eq!(result.lines()[4], "100002    2.40      Bob Anders");
    }

    #[test]
    fn birth_year_table_has_date_column() {
        let mut session = open_session();
        let result = run(&mut session, "filter birthDate yyyy 1993");

        assert_eq!(listed(&session), vec![100001, 100003, 100006]);
        assert_eq!(result.lines()[0], "Filtering by year 1993...");
        assert_eq!(result.lines()[5], "100003    1993-11-30     arthur Baker");
    }

    #[test]
    fn filters_compose() {
        let mut session = open_session();
        run(&mut session, "filter firstName A");
        run(&mut session, "filter lastName S");
        assert_eq!(listed(&session), vec![100001]);
    }

    #[test]
    fn no_match_empties_list() {
        let mut session = open_session();
        let result = run(&mut session, "filter firstName Z");

        assert_eq!(
            result.lines(),
            vec!["No student's first names start with the letter Z."]
        );
        assert!(listed(&session).is_empty());

        let listing = ListHandler.execute(&parse("list"), &mut session).unwrap();
        assert_eq!(listing.lines(), vec!["Filtered student list is empty"]);
    }

    #[test]
    fn filtering_an_empty_list_reports_no_match() {
        let mut session = open_session();
        run(&mut session, "filter firstName Z");

        let result = run(&mut session, "filter gpa 0 4");
        assert_eq!(
            result.lines(),
            vec!["No students have a GPA within the range 0 - 4."]
        );
        assert!(listed(&session).is_empty());
    }

    #[test]
    fn malformed_value_shows_usage_and_keeps_list() {
        let mut session = open_session();
        let result = run(&mut session, "filter birthDate yyyy abc");

        assert!(result.has_errors());
        assert!(result.text().contains("Command:  filter birthDate"));
        assert_eq!(listed(&session).len(), 6);
    }

    #[test]
    fn unknown_attribute_shows_menu() {
        let mut session = open_session();
        let result = run(&mut session, "filter shoeSize 9");

        assert_eq!(result.lines()[0], "Unknown filter attribute shoeSize");
        assert_eq!(result.lines()[1], "Please provide the attribute you wish to filter by:");
    }

    #[test]
    fn major_after_delete_lists_remaining_majors() {
        let mut session = open_session();
        let history = session.find_in_filtered(100003).unwrap();
        session.remove_from_filtered(history);

        let result = run(&mut session, "filter major");
        assert!(!result.text().contains("History"));
    }
}
