use super::RosterSource;
use crate::error::{Result, RosterError};
use crate::model::{Student, MAJORS, MAX_CREDITS, MAX_GPA, MAX_STUDENT_ID, MIN_STUDENT_ID};
use chrono::{Days, Local, NaiveDate};
use rand::distr::weighted::WeightedIndex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Beta, Distribution};
use std::collections::HashSet;
use tracing::debug;

const NAME_FRAGMENTS: &[&str] = &[
    "ar", "er", "en", "in", "car", "bar", "bin", "ard", "art", "and", "walt", "nor", "off", "min",
    "max", "tin", "rand", "son", "fer", "sir", "ver", "len", "por", "pho", "ind", "ger", "que",
    "sam", "ler", "tor", "vic", "der", "ere", "ete", "ee", "tan", "pat", "ret", "ran", "oon", "ye",
    "far", "all", "ash", "ish", "it", "ber", "oct", "sim", "ear", "per", "dam", "bre", "anna",
    "on", "pat", "bal", "ahl", "iam", "it", "mar", "li", "gab", "th", "ly", "ere", "an", "ke",
    "bra", "ny", "art",
];

const MIN_NAME_FRAGMENTS: usize = 2;
const MAX_NAME_FRAGMENTS: usize = 5;

// alpha / (alpha + beta) = 2.55 / 4.0
const GPA_ALPHA: f64 = 2.0;
const GPA_BETA: f64 = 1.137_254_901_960_784_5;

const MAX_CLASSES_TAKEN: u32 = 45;
const CREDITS_PER_CLASS: [u32; 4] = [1, 2, 3, 4];
const CREDIT_WEIGHTS: [f64; 4] = [0.01, 0.04, 0.9, 0.05];

/// Students are at least this many days (~16 years) old on the reference date.
const MIN_AGE_DAYS: u64 = 5840;

/// Upper bound on redraws when an id or name pair collides.
const MAX_DRAWS_PER_STUDENT: usize = 10_000;

/// Seeded random roster generator.
///
/// Birth dates are drawn relative to a reference date so that a roster is
/// reproducible for a fixed `(reference_date, count, seed)`.
#[derive(Debug, Clone)]
pub struct SyntheticRoster {
    reference_date: NaiveDate,
}

impl SyntheticRoster {
    pub fn new(reference_date: NaiveDate) -> Self {
        Self { reference_date }
    }

    /// A generator anchored at today's local date.
    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    fn birth_date_range(&self) -> Result<(NaiveDate, i64)> {
        let earliest = NaiveDate::from_ymd_opt(1990, 1, 1)
            .ok_or_else(|| RosterError::Generator("invalid earliest birth date".to_string()))?;
        let latest = self
            .reference_date
            .checked_sub_days(Days::new(MIN_AGE_DAYS))
            .ok_or_else(|| RosterError::Generator("reference date out of range".to_string()))?;

        let span = (latest - earliest).num_days();
        if span <= 0 {
            return Err(RosterError::Generator(format!(
                "reference date {} leaves no room for birth dates",
                self.reference_date
            )));
        }
        Ok((earliest, span))
    }
}

impl Default for SyntheticRoster {
    fn default() -> Self {
        Self::today()
    }
}

impl RosterSource for SyntheticRoster {
    fn generate(&self, count: usize, seed: u64) -> Result<Vec<Student>> {
        debug!(count, seed, reference_date = %self.reference_date, "generating roster");

        let mut rng = StdRng::seed_from_u64(seed);
        let gpa_dist =
            Beta::new(GPA_ALPHA, GPA_BETA).map_err(|e| RosterError::Generator(e.to_string()))?;
        let credit_dist =
            WeightedIndex::new(CREDIT_WEIGHTS).map_err(|e| RosterError::Generator(e.to_string()))?;
        let (earliest, span) = self.birth_date_range()?;

        let mut ids = HashSet::with_capacity(count);
        let mut names = HashSet::with_capacity(count);
        let mut students = Vec::with_capacity(count);

        while students.len() < count {
            let mut draws = 0;
            let (id, first_name, last_name) = loop {
                draws += 1;
                if draws > MAX_DRAWS_PER_STUDENT {
                    return Err(RosterError::Generator(format!(
                        "could not find a unique id and name after {} draws ({} of {} students)",
                        MAX_DRAWS_PER_STUDENT,
                        students.len(),
                        count
                    )));
                }

                let id = rng.random_range(MIN_STUDENT_ID..=MAX_STUDENT_ID);
                let first_name = random_name(&mut rng);
                let last_name = random_name(&mut rng);
                if !ids.contains(&id) && !names.contains(&(first_name.clone(), last_name.clone())) {
                    break (id, first_name, last_name);
                }
            };

            let offset = rng.random_range(0..span) as u64;
            let birth_date = earliest
                .checked_add_days(Days::new(offset))
                .ok_or_else(|| RosterError::Generator("birth date out of range".to_string()))?;

            // Rounded before scaling, so GPAs move in steps of 0.04.
            let gpa = (gpa_dist.sample(&mut rng) * 100.0).round() / 100.0 * MAX_GPA;

            let classes_taken = rng.random_range(0..MAX_CLASSES_TAKEN);
            let credits: u32 = (0..classes_taken)
                .map(|_| CREDITS_PER_CLASS[credit_dist.sample(&mut rng)])
                .sum();

            let major = MAJORS[rng.random_range(0..MAJORS.len())];

            ids.insert(id);
            names.insert((first_name.clone(), last_name.clone()));
            students.push(Student::new(
                id,
                first_name,
                last_name,
                birth_date,
                gpa,
                credits.min(MAX_CREDITS),
                major,
            )?);
        }

        students.sort_by_key(|s| s.id());
        Ok(students)
    }
}

fn random_name(rng: &mut StdRng) -> String {
    let pieces = rng.random_range(MIN_NAME_FRAGMENTS..=MAX_NAME_FRAGMENTS);
    let name: String = (0..pieces)
        .map(|_| NAME_FRAGMENTS[rng.random_range(0..NAME_FRAGMENTS.len())])
        .collect();
    capitalize(&name)
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
