use crate::commands::{CmdMessage, CmdResult, Handler};
use crate::error::Result;
use crate::model::MAX_STUDENTS;
use crate::parser::{CommandKind, ParsedCommand};
use crate::session::Session;
use crate::source::RosterSource;
use tracing::info;


/// `open [count] [seed]`: loads a fresh roster from the injected source.
pub struct OpenHandler<S: RosterSource> {
    source: S,
    default_count: usize,
    default_seed: u64,
}

impl<S: RosterSource> OpenHandler<S> {
    pub fn new(source: S, default_count: usize, default_seed: u64) -> Self {
        Self {
            source,
            default_count,
            default_seed,
        }
    }
}

impl<S: RosterSource> Handler for OpenHandler<S> {
    fn kind(&self) -> CommandKind {
        CommandKind::Open
    }

    fn verb(&self) -> &'static str {
        "open"
    }

    fn help_text(&self) -> &'static str {
        "Open a list of students: open [count] [seed]"
    }

    fn execute(&self, command: &ParsedCommand, session: &mut Session) -> Result<CmdResult> {
        if command.arg_count() > 2 {
            return Ok(CmdMessage::error("Usage: open [count] [seed]").into());
        }

        // The configured default goes through the same bound as an explicit count.
        let raw_count = command
            .arg(0)
            .map(str::to_string)
            .unwrap_or_else(|| self.default_count.to_string());
        let count = match raw_count.parse::<usize>() {
            Ok(count) if (1..=MAX_STUDENTS).contains(&count) => count,
            _ => {
                return Ok(CmdMessage::error(format!(
                    "Number of students must be between 1 and {}, got {}",
                    MAX_STUDENTS, raw_count
                ))
                .into())
            }
        };

        let seed = match command.arg(1) {
            None => self.default_seed,
            Some(raw) => match raw.parse::<u64>() {
                Ok(seed) => seed,
                Err(_) => {
                    return Ok(CmdMessage::error(format!(
                        "Seed must be a non-negative whole number, got {}",
                        raw
                    ))
                    .into())
                }
            },
        };

        let students = self.source.generate(count, seed)?;
        let opened = students.len();
        session.replace_roster(students);
        info!(count = opened, seed, "roster opened");

        Ok(CmdMessage::success(format!(
            "List of {} students opened with seed {}",
            opened, seed
        ))
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::source::{FixedRoster, SyntheticRoster};
    use crate::test_utils::{classroom, date, student};

    fn synthetic() -> OpenHandler<SyntheticRoster> {
        OpenHandler::new(SyntheticRoster::new(date(2024, 9, 1)), 20, 4)
    }

    #[test]
    fn opens_with_defaults() {
        let mut session = Session::new();
        let result = synthetic().execute(&parse("open"), &mut session).unwrap();

        assert_eq!(result.lines(), vec!["List of 20 students opened with seed 4"]);
        assert_eq!(session.filtered_ids().unwrap().len(), 20);
    }

    #[test]
    fn opens_with_arguments() {
        let mut session = Session::new();
        let result = synthetic()
            .execute(&parse("open 35 11"), &mut session)
            .unwrap();

        assert_eq!(result.lines(), vec!["List of 35 students opened with seed 11"]);
        assert_eq!(session.roster().len(), 35);
    }

    #[test]
    fn sorted_unique_and_deterministic() {
        let mut first = Session::new();
        let mut second = Session::new();
        synthetic().execute(&parse("open 100 4"), &mut first).unwrap();
        synthetic().execute(&parse("open 100 4"), &mut second).unwrap();

        assert_eq!(first.roster(), second.roster());

        let ids: Vec<u32> = first
            .filtered_ids()
            .unwrap()
            .iter()
            .map(|id| id.value())
            .collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn rejects_bad_arguments_without_touching_state() {
        let handler = OpenHandler::new(FixedRoster::new(classroom()), 20, 4);
        let mut session = Session::new();

        for line in ["open 0", "open lots", "open 20 -1", "open 20000", "open 1 2 3"] {
            let result = handler.execute(&parse(line), &mut session).unwrap();
            assert!(result.has_errors(), "{} should fail", line);
            assert!(session.filtered_ids().is_none());
        }
    }

    #[test]
    fn oversized_default_count_is_rejected() {
        let handler = OpenHandler::new(FixedRoster::new(classroom()), 20_000, 4);
        let mut session = Session::new();

        let result = handler.execute(&parse("open"), &mut session).unwrap();

        assert_eq!(
            result.lines(),
            vec!["Number of students must be between 1 and 10000, got 20000"]
        );
        assert!(session.filtered_ids().is_none());
    }

    #[test]
    fn replaces_list_but_not_selection() {
        let handler = OpenHandler::new(FixedRoster::new(classroom()), 20, 4);
        let mut session = Session::new();
        session.replace_roster(vec![student(555555, "Old", "Timer")]);
        let old = session.find_in_filtered(555555).unwrap();
        session.select(old);

        handler.execute(&parse("open"), &mut session).unwrap();

        assert_eq!(session.filtered_ids().unwrap().len(), 6);
        assert_eq!(session.selection(), Some(old));
    }
}
