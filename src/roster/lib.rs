//! # Roster Architecture
//!
//! Roster is an interactive shell over a synthetic set of student records. The
//! shell itself is thin: everything that matters lives in a library that takes
//! one input line at a time and answers with structured lines of output.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - clap arguments, config + logging setup, REPL loop        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Dispatcher (dispatcher.rs, parser.rs)                      │
//! │  - Parses a raw line into a ParsedCommand                   │
//! │  - Routes it to the registered handler                      │
//! │  - Owns the Session                                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One Handler per verb, including the filter engine        │
//! │  - Reads and replaces Session state, returns CmdResult      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Source Layer (source/)                                     │
//! │  - RosterSource trait                                       │
//! │  - SyntheticRoster (production), FixedRoster (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Session State
//!
//! The [`session::Session`] owns the roster and two views into it: the
//! filtered list and the current selection. Both views hold [`model::StudentId`]
//! handles rather than records, so `delete` only de-lists a student and
//! `modify` edits the one record every view points at.
//!
//! ## No I/O in the Core
//!
//! From `dispatcher.rs` inward, code never writes to stdout/stderr and never
//! exits the process. User mistakes (bad ids, unknown verbs, malformed filter
//! arguments) become error lines inside a [`commands::CmdResult`]; only
//! programming faults and generator failures surface as [`error::RosterError`].
//!
//! ## Module Overview
//!
//! - [`dispatcher`]: handler registry and routing, the entry point
//! - [`parser`]: line tokenizing and the verb table
//! - [`commands`]: one handler per verb, plus the filter engine
//! - [`session`]: roster, filtered list and selection
//! - [`source`]: roster generation
//! - [`model`]: `Student`, `StudentId`, the majors catalog, field edits
//! - [`config`]: persisted defaults for `open`
//! - [`error`]: error types

pub mod commands;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod model;
pub mod parser;
pub mod session;
pub mod source;

#[cfg(test)]
pub(crate) mod test_utils;
