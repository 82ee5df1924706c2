use crate::error::{Result, RosterError};
use chrono::NaiveDate;
use std::fmt;

pub const MIN_STUDENT_ID: i64 = 100_000;
pub const MAX_STUDENT_ID: i64 = 999_999;

/// Largest roster `open` will generate in one go, explicit or configured.
pub const MAX_STUDENTS: usize = 10_000;

/// Credits are capped by the roster source; `modify` enforces the same cap.
pub const MAX_CREDITS: u32 = 128;
pub const MAX_GPA: f64 = 4.0;

/// Date format used for display and for `modify <id> birthDate <date>`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The fixed catalog every student's major is drawn from.
pub const MAJORS: &[&str] = &[
    "Business",
    "CompSci",
    "Japanese",
    "Analytics",
    "Math",
    "Engineering",
    "History",
];

/// Returns the catalog spelling of a major, matched case-insensitively.
pub fn canonical_major(name: &str) -> Option<&'static str> {
    MAJORS
        .iter()
        .copied()
        .find(|major| major.eq_ignore_ascii_case(name))
}

/// A validated 6-digit student identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StudentId(u32);

impl StudentId {
    pub fn new(id: i64) -> Result<Self> {
        if (MIN_STUDENT_ID..=MAX_STUDENT_ID).contains(&id) {
            Ok(Self(id as u32))
        } else {
            Err(RosterError::InvalidStudentId(id))
        }
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    // No setter: the id is fixed once validated.
    id: StudentId,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub gpa: f64,
    pub completed_credits: u32,
    pub major: String,
}

impl Student {
    pub fn new(
        id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: NaiveDate,
        gpa: f64,
        completed_credits: u32,
        major: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            id: StudentId::new(id)?,
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_date,
            gpa,
            completed_credits,
            major: major.into(),
        })
    }

    pub fn id(&self) -> StudentId {
        self.id
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Current value of a field, formatted the way the shell displays it.
    pub fn field_value(&self, field: StudentField) -> String {
        match field {
            StudentField::Id => self.id.to_string(),
            StudentField::FirstName => self.first_name.clone(),
            StudentField::LastName => self.last_name.clone(),
            StudentField::BirthDate => self.birth_date.format(DATE_FORMAT).to_string(),
            StudentField::Gpa => format!("{:.2}", self.gpa),
            StudentField::CompletedCredits => self.completed_credits.to_string(),
            StudentField::Major => self.major.clone(),
        }
    }

    /// Applies an edit in place.
    ///
    /// Returns the change when the value actually differs, `None` when the
    /// record already held that value. The returned [`FieldChange`] is the
    /// record's change notification: callers that care about mutations (logging,
    /// a reactive view) consume it instead of subscribing to the record.
    pub fn apply(&mut self, edit: FieldEdit) -> Option<FieldChange> {
        let field = edit.field();
        let old = self.field_value(field);

        match edit {
            FieldEdit::FirstName(name) => self.first_name = name,
            FieldEdit::LastName(name) => self.last_name = name,
            FieldEdit::BirthDate(date) => self.birth_date = date,
            FieldEdit::Gpa(gpa) => self.gpa = gpa,
            FieldEdit::CompletedCredits(credits) => self.completed_credits = credits,
            FieldEdit::Major(major) => self.major = major,
        }

        let new = self.field_value(field);
        if old == new {
            None
        } else {
            Some(FieldChange { field, old, new })
        }
    }
}

/// The attributes of a student, as named in the shell (`firstName`, `gpa`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StudentField {
    Id,
    FirstName,
    LastName,
    BirthDate,
    Gpa,
    CompletedCredits,
    Major,
}

impl StudentField {
    pub const ALL: [StudentField; 7] = [
        StudentField::Id,
        StudentField::FirstName,
        StudentField::LastName,
        StudentField::BirthDate,
        StudentField::Gpa,
        StudentField::CompletedCredits,
        StudentField::Major,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            StudentField::Id => "id",
            StudentField::FirstName => "firstName",
            StudentField::LastName => "lastName",
            StudentField::BirthDate => "birthDate",
            StudentField::Gpa => "gpa",
            StudentField::CompletedCredits => "completedCredits",
            StudentField::Major => "major",
        }
    }

    /// Case-insensitive keyword lookup.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.keyword().eq_ignore_ascii_case(keyword))
    }
}

impl fmt::Display for StudentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A validated new value for one mutable field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    FirstName(String),
    LastName(String),
    BirthDate(NaiveDate),
    Gpa(f64),
    CompletedCredits(u32),
    Major(String),
}

impl FieldEdit {
    /// Parses raw user text into an edit for `field`.
    ///
    /// The error is a user-facing message.
    pub fn parse(field: StudentField, raw: &str) -> std::result::Result<Self, String> {
        let raw = raw.trim();
        match field {
            StudentField::Id => Err("Student id cannot be modified".to_string()),
            StudentField::FirstName | StudentField::LastName => {
                if raw.is_empty() {
                    return Err(format!("{} cannot be empty", field));
                }
                if field == StudentField::FirstName {
                    Ok(FieldEdit::FirstName(raw.to_string()))
                } else {
                    Ok(FieldEdit::LastName(raw.to_string()))
                }
            }
            StudentField::BirthDate => NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .map(FieldEdit::BirthDate)
                .map_err(|_| format!("Birth date must look like 1993-03-01, got {}", raw)),
            StudentField::Gpa => match raw.parse::<f64>() {
                Ok(gpa) if (0.0..=MAX_GPA).contains(&gpa) => Ok(FieldEdit::Gpa(gpa)),
                _ => Err(format!("GPA must be a number between 0.0 and 4.0, got {}", raw)),
            },
            StudentField::CompletedCredits => match raw.parse::<u32>() {
                Ok(credits) if credits <= MAX_CREDITS => Ok(FieldEdit::CompletedCredits(credits)),
                _ => Err(format!(
                    "Completed credits must be a whole number between 0 and {}, got {}",
                    MAX_CREDITS, raw
                )),
            },
            StudentField::Major => canonical_major(raw)
                .map(|major| FieldEdit::Major(major.to_string()))
                .ok_or_else(|| format!("Unknown major {}. Choose one of: {}", raw, MAJORS.join(", "))),
        }
    }

    pub fn field(&self) -> StudentField {
        match self {
            FieldEdit::FirstName(_) => StudentField::FirstName,
            FieldEdit::LastName(_) => StudentField::LastName,
            FieldEdit::BirthDate(_) => StudentField::BirthDate,
            FieldEdit::Gpa(_) => StudentField::Gpa,
            FieldEdit::CompletedCredits(_) => StudentField::CompletedCredits,
            FieldEdit::Major(_) => StudentField::Major,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub field: StudentField,
    pub old: String,
    pub new: String,
}

impl fmt::Display for FieldChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} changed from {} to {}", self.field, self.old, self.new)
    }
}
