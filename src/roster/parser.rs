//! Turns one raw input line into a [`ParsedCommand`].
//!
//! The grammar is deliberately flat: a verb, then whitespace-separated
//! arguments. Verbs are matched case-insensitively against [`VERBS`]; anything
//! else becomes [`CommandKind::Invalid`] but keeps its verb and arguments so the
//! caller can report what was typed.

use std::fmt;

/// What a line asks the shell to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Invalid,
    Exit,
    Open,
    List,
    Select,
    Help,
    Clear,
    Show,
    Modify,
    Delete,
    Filter,
}

/// The verb table, in the order verbs are matched.
pub const VERBS: &[(&str, CommandKind)] = &[
    ("exit", CommandKind::Exit),
    ("open", CommandKind::Open),
    ("list", CommandKind::List),
    ("help", CommandKind::Help),
    ("clear", CommandKind::Clear),
    ("select", CommandKind::Select),
    ("show", CommandKind::Show),
    ("modify", CommandKind::Modify),
    ("delete", CommandKind::Delete),
    ("filter", CommandKind::Filter),
];

impl CommandKind {
    pub fn from_verb(verb: &str) -> Self {
        let folded = verb.to_lowercase();
        VERBS
            .iter()
            .find(|(name, _)| *name == folded)
            .map(|(_, kind)| *kind)
            .unwrap_or(CommandKind::Invalid)
    }

    /// `exit` and `clear` steer the REPL loop and never reach a handler.
    pub fn is_signal(self) -> bool {
        matches!(self, CommandKind::Exit | CommandKind::Clear)
    }
}

/// A tokenized input line.
///
/// `args` is `None` when nothing followed the verb and `Some(vec![])` when
/// the verb was followed by whitespace only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    kind: CommandKind,
    verb: String,
    args: Option<Vec<String>>,
}

impl ParsedCommand {
    pub fn new(kind: CommandKind, verb: impl Into<String>, args: Option<Vec<String>>) -> Self {
        Self {
            kind,
            verb: verb.into(),
            args,
        }
    }

    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    /// The verb exactly as typed.
    pub fn verb(&self) -> &str {
        &self.verb
    }

    pub fn raw_args(&self) -> Option<&[String]> {
        self.args.as_deref()
    }

    /// Arguments, with "absent" and "empty" both seen as an empty slice.
    pub fn args(&self) -> &[String] {
        self.args.as_deref().unwrap_or(&[])
    }

    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args().get(index).map(String::as_str)
    }

    pub fn arg_count(&self) -> usize {
        self.args().len()
    }

    pub fn has_args(&self) -> bool {
        !self.args().is_empty()
    }
}

impl fmt::Display for ParsedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.verb)?;
        for arg in self.args() {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Parses one input line.
pub fn parse(line: &str) -> ParsedCommand {
    let line = line.trim_end_matches(&['\r', '\n'][..]).trim_start();

    let (verb, args) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (
            verb,
            Some(rest.split_whitespace().map(str::to_string).collect()),
        ),
        None => (line, None),
    };

    ParsedCommand::new(CommandKind::from_verb(verb), verb, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_verb_has_no_args() {
        let cmd = parse("list");
        assert_eq!(cmd.kind(), CommandKind::List);
        assert_eq!(cmd.verb(), "list");
        assert_eq!(cmd.raw_args(), None);
        assert!(!cmd.has_args());
    }

    #[test]
    fn trailing_space_gives_empty_args() {
        let cmd = parse("select ");
        assert_eq!(cmd.kind(), CommandKind::Select);
        assert_eq!(cmd.raw_args(), Some(&[][..]));
    }

    #[test]
    fn whitespace_runs_never_make_empty_tokens() {
        let cmd = parse("filter   gpa \t 2.4    3.5");
        assert_eq!(cmd.kind(), CommandKind::Filter);
        assert_eq!(cmd.args(), &["gpa", "2.4", "3.5"]);
    }

    #[test]
    fn verb_is_case_folded_but_kept_raw() {
        let cmd = parse("SeLeCt 123456");
        assert_eq!(cmd.kind(), CommandKind::Select);
        assert_eq!(cmd.verb(), "SeLeCt");
        assert_eq!(cmd.arg(0), Some("123456"));
    }

    #[test]
    fn unknown_verb_keeps_its_parts() {
        let cmd = parse("frobnicate a b");
        assert_eq!(cmd.kind(), CommandKind::Invalid);
        assert_eq!(cmd.verb(), "frobnicate");
        assert_eq!(cmd.args(), &["a", "b"]);
    }

    #[test]
    fn line_terminators_and_leading_space_are_ignored() {
        let cmd = parse("   show\r\n");
        assert_eq!(cmd.kind(), CommandKind::Show);
        assert_eq!(cmd.raw_args(), None);
    }

    #[test]
    fn empty_line_is_invalid() {
        let cmd = parse("");
        assert_eq!(cmd.kind(), CommandKind::Invalid);
        assert_eq!(cmd.verb(), "");
    }

    #[test]
    fn every_verb_is_recognized() {
        for (verb, kind) in VERBS {
            assert_eq!(parse(verb).kind(), *kind);
            assert_eq!(parse(&verb.to_uppercase()).kind(), *kind);
        }
    }

    #[test]
    fn signals() {
        assert!(CommandKind::Exit.is_signal());
        assert!(CommandKind::Clear.is_signal());
        assert!(!CommandKind::Filter.is_signal());
    }

    #[test]
    fn display_rejoins_tokens() {
        assert_eq!(parse("filter  birthDate yyyy 1993").to_string(), "filter birthDate yyyy 1993");
    }
}
