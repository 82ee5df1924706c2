//! # Source Layer
//!
//! Where rosters come from. The [`RosterSource`] trait lets the `open` handler
//! stay ignorant of how students are produced.
//!
//! ## Implementations
//!
//! - [`synthetic::SyntheticRoster`]: seeded random generator used by the shell
//!   - Names assembled from short fragments
//!   - GPA drawn from a Beta distribution scaled to 0.0-4.0 (mean 2.55)
//!   - Credits summed from weighted per-class credit counts, capped at 128
//!   - Birth dates between 1990-01-01 and 16 years before the reference date
//!
//! - [`memory::FixedRoster`]: hands back a fixed list, for tests and embedding
//!
//! ## Contract
//!
//! Every implementation returns students sorted by id ascending, with unique
//! ids and unique (first name, last name) pairs. The same `(count, seed)` must
//! always produce the same roster.

use crate::error::Result;
use crate::model::Student;

pub mod memory;
pub mod synthetic;

pub use memory::FixedRoster;
pub use synthetic::SyntheticRoster;

/// Abstract producer of student rosters.
pub trait RosterSource {
    /// Produce `count` students, sorted by id, deterministically for `seed`.
    fn generate(&self, count: usize, seed: u64) -> Result<Vec<Student>>;
}
