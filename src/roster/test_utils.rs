//! Fixtures shared by unit tests.

use crate::config::RosterConfig;
use crate::dispatcher::Dispatcher;
use crate::model::Student;
use crate::session::Session;
use crate::source::FixedRoster;
use chrono::NaiveDate;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A student with neutral defaults for everything but id and name.
pub fn student(id: i64, first: &str, last: &str) -> Student {
    Student::new(id, first, last, date(1995, 6, 15), 3.0, 60, "Math").unwrap()
}

pub fn full_student(
    id: i64,
    first: &str,
    last: &str,
    birth_date: NaiveDate,
    gpa: f64,
    credits: u32,
    major: &str,
) -> Student {
    Student::new(id, first, last, birth_date, gpa, credits, major).unwrap()
}

/// Six students covering every filter edge the tests poke at.
pub fn classroom() -> Vec<Student> {
    vec![
        full_student(100001, "Alice", "Smith", date(1993, 3, 1), 3.5, 90, "CompSci"),
        full_student(100002, "Bob", "Anders", date(1994, 7, 12), 2.4, 30, "Math"),
        full_student(100003, "arthur", "Baker", date(1993, 11, 30), 2.39, 12, "History"),
        full_student(100004, "Carmen", "Adams", date(1996, 3, 12), 3.51, 128, "CompSci"),
        full_student(100005, "Dara", "Quinn", date(1991, 1, 1), 4.0, 0, "Business"),
        full_student(100006, "Ann", "Lee", date(1993, 3, 12), 3.0, 58, "Math"),
    ]
}

/// A session with the classroom opened as the filtered list.
pub fn open_session() -> Session {
    let mut session = Session::new();
    session.replace_roster(classroom());
    session
}

/// A dispatcher over the classroom that has already run `open`.
pub fn open_dispatcher() -> Dispatcher {
    let mut dispatcher = Dispatcher::new(FixedRoster::new(classroom()), &RosterConfig::default());
    dispatcher.dispatch("open").unwrap();
    dispatcher
}
