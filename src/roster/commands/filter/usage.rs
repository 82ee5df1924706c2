use crate::commands::helpers::{pad_right, NO_LIST};
use crate::commands::{CmdMessage, CmdResult};
use crate::model::StudentField;
use crate::session::Session;

use super::predicate::FILTER_ATTRIBUTES;

const MENU_COMMAND_WIDTH: usize = 26;

fn summary(field: StudentField) -> &'static str {
    match field {
        StudentField::FirstName => "Filter the list of students by the letter of their first name.",
        StudentField::LastName => "Filter the list of students by the letter of their last name.",
        StudentField::BirthDate => "Filter the list of students by their birth year, month or day.",
        StudentField::Gpa => "Filter the list of students with GPA's that are within a range.",
        StudentField::CompletedCredits => {
            "Filter the list of students with a minimum number of completed credits."
        }
        StudentField::Major => "Filter the list of students by their major.",
        StudentField::Id => "",
    }
}

/// The attribute menu shown for a bare `filter`.
pub fn menu() -> CmdResult {
    let mut result = CmdResult::default();
    result.info("Please provide the attribute you wish to filter by:");
    for field in FILTER_ATTRIBUTES {
        result.info(format!(
            "  {}--> {}",
            pad_right(&format!("filter {}", field), MENU_COMMAND_WIDTH),
            summary(field)
        ));
    }
    result
}

/// How to call `filter <field>`. The major usage lists the majors present in
/// the current filtered list.
pub fn usage(field: StudentField, session: &Session) -> CmdResult {
    let mut result = CmdResult::default();
    match field {
        StudentField::FirstName | StudentField::LastName => {
            result.info(format!(
                "Filter the list by the student's {} starting with that letter.",
                if field == StudentField::FirstName {
                    "first name"
                } else {
                    "last name"
                }
            ));
            result.info(format!("Command:  filter {} {{?}}", field));
            result.info(format!("Example:  filter {} A", field));
        }
        StudentField::BirthDate => {
            result.info(summary(field));
            result.info("Command:  filter birthDate {yyyy|mm|dd} {?}");
            result.info("Example:  filter birthDate yyyy 1993");
            result.info("Example:  filter birthDate mm 3");
            result.info("Example:  filter birthDate dd 12");
        }
        StudentField::Gpa => {
            result.info(summary(field));
            result.info("Command:  filter gpa {min} {max}");
            result.info("Example:  filter gpa 2.4 3.5");
        }
        StudentField::CompletedCredits => {
            result.info(summary(field));
            result.info("Command:  filter completedCredits {?}");
            result.info("Example:  filter completedCredits 58");
        }
        StudentField::Major => match session.filtered_students() {
            Some(students) => {
                result.info("Filter the list of students by one of the following majors:");
                let mut majors: Vec<&str> = Vec::new();
                for student in students {
                    if !majors.contains(&student.major.as_str()) {
                        majors.push(&student.major);
                    }
                }
                for major in majors {
                    result.info(format!("  filter major {}", major));
                }
            }
            None => {
                result.info(summary(field));
                result.info("Command:  filter major {?}");
                result.add_message(CmdMessage::warning(NO_LIST));
            }
        },
        StudentField::Id => return menu(),
    }
    result
}
