//! Mutable state shared by every handler for the life of one shell session.
//!
//! The session owns the roster. The filtered list and the selection are
//! handles ([`StudentId`]) into it, so de-listing a student never drops the
//! record, and editing a record is visible through every view.
//!
//! A selection is never cleared automatically. After an `open` it may refer
//! to an id the new roster does not contain; [`Session::selected`] then
//! resolves to `None`.

use crate::model::{Student, StudentId};

#[derive(Debug, Clone, Default)]
pub struct Session {
    roster: Vec<Student>,
    filtered: Option<Vec<StudentId>>,
    selection: Option<StudentId>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the roster and resets the filtered list to all of it, sorted
    /// by id. The selection is left alone.
    pub fn replace_roster(&mut self, mut students: Vec<Student>) {
        students.sort_by_key(|s| s.id());
        self.filtered = Some(students.iter().map(Student::id).collect());
        self.roster = students;
    }

    pub fn roster(&self) -> &[Student] {
        &self.roster
    }

    pub fn student(&self, id: StudentId) -> Option<&Student> {
        self.roster
            .binary_search_by_key(&id, |s| s.id())
            .ok()
            .map(|pos| &self.roster[pos])
    }

    pub fn student_mut(&mut self, id: StudentId) -> Option<&mut Student> {
        match self.roster.binary_search_by_key(&id, |s| s.id()) {
            Ok(pos) => Some(&mut self.roster[pos]),
            Err(_) => None,
        }
    }

    /// Handles in the filtered list, or `None` before the first `open`.
    pub fn filtered_ids(&self) -> Option<&[StudentId]> {
        self.filtered.as_deref()
    }

    /// The filtered list resolved to records, in list order.
    pub fn filtered_students(&self) -> Option<Vec<&Student>> {
        self.filtered
            .as_ref()
            .map(|ids| ids.iter().filter_map(|id| self.student(*id)).collect())
    }

    pub fn set_filtered(&mut self, ids: Vec<StudentId>) {
        self.filtered = Some(ids);
    }

    /// First handle in the filtered list whose id equals `raw_id`.
    pub fn find_in_filtered(&self, raw_id: i64) -> Option<StudentId> {
        self.filtered
            .as_ref()?
            .iter()
            .copied()
            .find(|id| i64::from(id.value()) == raw_id)
    }

    /// Removes a handle from the filtered list. Returns whether it was there.
    pub fn remove_from_filtered(&mut self, id: StudentId) -> bool {
        let Some(ids) = self.filtered.as_mut() else {
            return false;
        };
        match ids.iter().position(|candidate| *candidate == id) {
            Some(pos) => {
                ids.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn selection(&self) -> Option<StudentId> {
        self.selection
    }

    /// The selected record, if the selection resolves in the current roster.
    pub fn selected(&self) -> Option<&Student> {
        self.selection.and_then(|id| self.student(id))
    }

    pub fn select(&mut self, id: StudentId) {
        self.selection = Some(id);
    }
}
