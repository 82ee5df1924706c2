use crate::commands::{CmdMessage, CmdResult};
use crate::model::{Student, StudentId, DATE_FORMAT};
use crate::session::Session;
use unicode_width::UnicodeWidthStr;

pub const ID_WIDTH: usize = 10;
pub const NAME_WIDTH: usize = 30;
pub const BIRTH_DATE_WIDTH: usize = 15;
pub const GPA_WIDTH: usize = 10;

const SEPARATOR_WIDTH: usize = 63;
const WIDE_SEPARATOR_WIDTH: usize = 83;

pub const NO_LIST: &str = "No student list selected. Use 'open' or 'filter' to create filtered list";
pub const NO_SELECTION: &str = "No student has been selected.";

/// Left-aligns `text` in a column of `width` display cells.
pub fn pad_right(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

/// An optional column between the id and the name in a student table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraColumn {
    None,
    BirthDate,
    Gpa,
}

impl ExtraColumn {
    fn header(self) -> String {
        match self {
            ExtraColumn::None => String::new(),
            ExtraColumn::BirthDate => pad_right("Birthdate", BIRTH_DATE_WIDTH),
            ExtraColumn::Gpa => pad_right("GPA", GPA_WIDTH),
        }
    }

    fn cell(self, student: &Student) -> String {
        match self {
            ExtraColumn::None => String::new(),
            ExtraColumn::BirthDate => pad_right(
                &student.birth_date.format(DATE_FORMAT).to_string(),
                BIRTH_DATE_WIDTH,
            ),
            ExtraColumn::Gpa => pad_right(&format!("{:.2}", student.gpa), GPA_WIDTH),
        }
    }

    fn separator(self) -> String {
        let width = match self {
            ExtraColumn::None => SEPARATOR_WIDTH,
            _ => WIDE_SEPARATOR_WIDTH,
        };
        "-".repeat(width)
    }
}

/// Appends a student table: separator, header with the count, separator, rows.
pub fn push_student_table(result: &mut CmdResult, students: &[&Student], extra: ExtraColumn) {
    result.info(extra.separator());
    result.info(format!(
        "{}{}{}# of Students: {}",
        pad_right("Id", ID_WIDTH),
        extra.header(),
        pad_right("Name", NAME_WIDTH),
        students.len()
    ));
    result.info(extra.separator());

    for student in students {
        result.info(format!(
            "{}{}{}",
            pad_right(&student.id().to_string(), ID_WIDTH),
            extra.cell(student),
            student.full_name()
        ));
    }
}

/// Resolves the id argument shared by `select` and `modify`.
///
/// The error is the line to show the user; the session is never changed here.
pub fn resolve_student_id(raw: Option<&str>, session: &Session) -> Result<StudentId, CmdMessage> {
    let Some(raw) = raw else {
        return Err(CmdMessage::error(
            "Please provide the id of the student you want to select",
        ));
    };

    let Ok(id) = raw.parse::<i64>() else {
        return Err(CmdMessage::error("Student id must be a 6-digit number"));
    };

    if session.filtered_ids().is_none() {
        return Err(CmdMessage::error(NO_LIST));
    }

    session.find_in_filtered(id).ok_or_else(|| {
        CmdMessage::warning(format!(
            "Student with id {} does not exist or is not in filtered student list",
            id
        ))
    })
}

pub fn selected_message(student: &Student) -> CmdMessage {
    CmdMessage::success(format!(
        "Current student is now {} {}",
        student.id(),
        student.full_name()
    ))
}
