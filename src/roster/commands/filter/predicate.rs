//! Filter request parsing and predicate evaluation.
//!
//! `filter` arguments are re-parsed on every call: the first token names the
//! attribute, and the number of tokens after it decides whether the user asked
//! for help on that attribute or for a concrete filter.
//!
//! ```text
//! filter                              -> Menu
//! filter <attribute>                  -> Usage(attribute)
//! filter firstName|lastName <letter>  -> Apply(FirstInitial|LastInitial)
//! filter birthDate yyyy|mm|dd <n>     -> Apply(BirthDate)
//! filter gpa <min> <max>              -> Apply(GpaRange)
//! filter completedCredits <min>       -> Apply(MinCredits)
//! filter major <major>                -> Apply(Major)
//! ```

use crate::commands::helpers::ExtraColumn;
use crate::model::{canonical_major, Student, StudentField, MAJORS};
use chrono::{Datelike, NaiveDate};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePart {
    Year,
    Month,
    Day,
}

impl DatePart {
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "yyyy" => Some(DatePart::Year),
            "mm" => Some(DatePart::Month),
            "dd" => Some(DatePart::Day),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DatePart::Year => "year",
            DatePart::Month => "month",
            DatePart::Day => "day",
        }
    }

    pub fn of(self, date: NaiveDate) -> i64 {
        match self {
            DatePart::Year => i64::from(date.year()),
            DatePart::Month => i64::from(date.month()),
            DatePart::Day => i64::from(date.day()),
        }
    }

    fn accepts(self, value: i64) -> bool {
        match self {
            DatePart::Year => true,
            DatePart::Month => (1..=12).contains(&value),
            DatePart::Day => (1..=31).contains(&value),
        }
    }
}

/// A concrete filter over one attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    FirstInitial(char),
    LastInitial(char),
    BirthDate { part: DatePart, value: i64 },
    GpaRange { min: f64, max: f64 },
    MinCredits(u32),
    Major(String),
}

impl Predicate {
    pub fn attribute(&self) -> StudentField {
        match self {
            Predicate::FirstInitial(_) => StudentField::FirstName,
            Predicate::LastInitial(_) => StudentField::LastName,
            Predicate::BirthDate { .. } => StudentField::BirthDate,
            Predicate::GpaRange { .. } => StudentField::Gpa,
            Predicate::MinCredits(_) => StudentField::CompletedCredits,
            Predicate::Major(_) => StudentField::Major,
        }
    }

    pub fn matches(&self, student: &Student) -> bool {
        match self {
            Predicate::FirstInitial(letter) => starts_with_letter(&student.first_name, *letter),
            Predicate::LastInitial(letter) => starts_with_letter(&student.last_name, *letter),
            Predicate::BirthDate { part, value } => part.of(student.birth_date) == *value,
            Predicate::GpaRange { min, max } => student.gpa >= *min && student.gpa <= *max,
            Predicate::MinCredits(min) => student.completed_credits >= *min,
            Predicate::Major(major) => student.major.eq_ignore_ascii_case(major),
        }
    }

    /// Keeps the matching students in list order.
    pub fn apply<'a>(&self, students: &[&'a Student]) -> Vec<&'a Student> {
        students
            .iter()
            .copied()
            .filter(|student| self.matches(student))
            .collect()
    }

    /// The table column shown next to id and name for this filter's results.
    pub fn column(&self) -> ExtraColumn {
        match self {
            Predicate::BirthDate { .. } => ExtraColumn::BirthDate,
            Predicate::GpaRange { .. } => ExtraColumn::Gpa,
            _ => ExtraColumn::None,
        }
    }

    pub fn no_match_message(&self) -> String {
        match self {
            Predicate::FirstInitial(letter) => {
                format!("No student's first names start with the letter {}.", letter)
            }
            Predicate::LastInitial(letter) => {
                format!("No student's last names start with the letter {}.", letter)
            }
            Predicate::BirthDate { .. } => {
                "No students have a birthdate matching your criteria.".to_string()
            }
            Predicate::GpaRange { min, max } => {
                format!("No students have a GPA within the range {} - {}.", min, max)
            }
            Predicate::MinCredits(min) => {
                format!("No students have at least {} completed credits.", min)
            }
            Predicate::Major(major) => format!("No students are majoring in {}.", major),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::FirstInitial(letter) | Predicate::LastInitial(letter) => {
                write!(f, "{} {}", self.attribute(), letter)
            }
            Predicate::BirthDate { part, value } => {
                write!(f, "{} {} {}", self.attribute(), part.label(), value)
            }
            Predicate::GpaRange { min, max } => write!(f, "{} {} {}", self.attribute(), min, max),
            Predicate::MinCredits(min) => write!(f, "{} {}", self.attribute(), min),
            Predicate::Major(major) => write!(f, "{} {}", self.attribute(), major),
        }
    }
}

fn starts_with_letter(name: &str, letter: char) -> bool {
    name.chars()
        .next()
        .is_some_and(|first| first.to_uppercase().eq(letter.to_uppercase()))
}

/// What a `filter` invocation asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterRequest {
    Menu,
    Usage(StudentField),
    Apply(Predicate),
}

/// A malformed filter request, reported to the user.
///
/// `usage` names the attribute whose usage should follow the message; `None`
/// means the top-level menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterError {
    pub message: String,
    pub usage: Option<StudentField>,
}

impl FilterError {
    fn menu(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            usage: None,
        }
    }

    fn usage(field: StudentField, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            usage: Some(field),
        }
    }
}

/// Attributes `filter` accepts, in menu order.
pub const FILTER_ATTRIBUTES: [StudentField; 6] = [
    StudentField::FirstName,
    StudentField::LastName,
    StudentField::BirthDate,
    StudentField::Gpa,
    StudentField::CompletedCredits,
    StudentField::Major,
];

pub fn parse_request(args: &[String]) -> Result<FilterRequest, FilterError> {
    let Some((keyword, rest)) = args.split_first() else {
        return Ok(FilterRequest::Menu);
    };

    let field = StudentField::from_keyword(keyword)
        .filter(|field| FILTER_ATTRIBUTES.contains(field))
        .ok_or_else(|| FilterError::menu(format!("Unknown filter attribute {}", keyword)))?;

    if rest.is_empty() {
        return Ok(FilterRequest::Usage(field));
    }

    let predicate = match (field, rest) {
        (StudentField::FirstName, [letter]) => Predicate::FirstInitial(parse_letter(field, letter)?),
        (StudentField::LastName, [letter]) => Predicate::LastInitial(parse_letter(field, letter)?),
        (StudentField::BirthDate, [part, value]) => parse_birth_date(part, value)?,
        (StudentField::Gpa, [min, max]) => parse_gpa_range(min, max)?,
        (StudentField::CompletedCredits, [min]) => {
            let min = min.parse::<u32>().map_err(|_| {
                FilterError::usage(
                    field,
                    format!("Completed credits must be a whole number, got {}", min),
                )
            })?;
            Predicate::MinCredits(min)
        }
        (StudentField::Major, [name]) => {
            let major = canonical_major(name).ok_or_else(|| {
                FilterError::usage(
                    field,
                    format!("Unknown major {}. Majors are: {}", name, MAJORS.join(", ")),
                )
            })?;
            Predicate::Major(major.to_string())
        }
        _ => {
            return Err(FilterError::usage(
                field,
                format!("Wrong number of arguments for filter {}", field),
            ))
        }
    };

    Ok(FilterRequest::Apply(predicate))
}

fn parse_letter(field: StudentField, raw: &str) -> Result<char, FilterError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_alphabetic() => {
            Ok(letter.to_uppercase().next().unwrap_or(letter))
        }
        _ => Err(FilterError::usage(
            field,
            format!("{} filter expects a single letter, got {}", field, raw),
        )),
    }
}

fn parse_birth_date(part: &str, value: &str) -> Result<Predicate, FilterError> {
    let field = StudentField::BirthDate;
    let part = DatePart::from_token(part).ok_or_else(|| {
        FilterError::usage(
            field,
            format!("Birth date part must be yyyy, mm or dd, got {}", part),
        )
    })?;

    let value = value
        .parse::<i64>()
        .ok()
        .filter(|value| part.accepts(*value))
        .ok_or_else(|| {
            FilterError::usage(
                field,
                format!("{} must be a valid whole number, got {}", part.label(), value),
            )
        })?;

    Ok(Predicate::BirthDate { part, value })
}

fn parse_gpa_range(min: &str, max: &str) -> Result<Predicate, FilterError> {
    let field = StudentField::Gpa;
    let parse = |raw: &str| {
        raw.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| FilterError::usage(field, format!("GPA must be a number, got {}", raw)))
    };

    let (min, max) = (parse(min)?, parse(max)?);
    if min > max {
        return Err(FilterError::usage(
            field,
            format!("Minimum GPA {} is greater than maximum GPA {}", min, max),
        ));
    }
    Ok(Predicate::GpaRange { min, max })
}
