use super::RosterSource;
use crate::error::Result;
use crate::model::Student;

/// A source that always serves the same students.
///
/// The seed is ignored. `count` truncates the (id-sorted) list.
#[derive(Debug, Clone, Default)]
pub struct FixedRoster {
    students: Vec<Student>,
}

impl FixedRoster {
    pub fn new(mut students: Vec<Student>) -> Self {
        students.sort_by_key(|s| s.id());
        students.dedup_by_key(|s| s.id());
        Self { students }
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

impl RosterSource for FixedRoster {
    fn generate(&self, count: usize, _seed: u64) -> Result<Vec<Student>> {
        Ok(self.students.iter().take(count).cloned().collect())
    }
}
