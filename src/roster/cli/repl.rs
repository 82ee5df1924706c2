//! The read-eval-print loop.
//!
//! On a terminal, lines come from a `rustyline` editor with history. Anything
//! else (a pipe, a file) is read line by line with no prompt, which is how
//! scripted sessions and the integration tests drive the shell.

use super::print::print_messages;
use console::Term;
use roster::dispatcher::{Dispatcher, Step};
use roster::error::{Result, RosterError};
use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};
use std::io::{self, BufRead, IsTerminal};
use tracing::debug;

const PROMPT: &str = "> ";
const BANNER: &str = "Student REPL. Type 'help' to see the available commands.";

pub fn run(dispatcher: &mut Dispatcher, history_size: usize) -> Result<()> {
    if io::stdin().is_terminal() {
        interactive(dispatcher, history_size)
    } else {
        scripted(dispatcher, io::stdin().lock())
    }
}

fn interactive(dispatcher: &mut Dispatcher, history_size: usize) -> Result<()> {
    let config = Config::builder()
        .max_history_size(history_size)
        .map_err(readline_error)?
        .auto_add_history(true)
        .build();
    let mut editor = DefaultEditor::with_config(config).map_err(readline_error)?;

    println!("{}", BANNER);
    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if !handle_line(dispatcher, &line)? {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                debug!("input closed");
                break;
            }
            Err(e) => return Err(readline_error(e)),
        }
    }
    Ok(())
}

fn scripted<R: BufRead>(dispatcher: &mut Dispatcher, input: R) -> Result<()> {
    for line in input.lines() {
        if !handle_line(dispatcher, &line?)? {
            break;
        }
    }
    Ok(())
}

/// Runs one line. Returns `false` once the session should end.
fn handle_line(dispatcher: &mut Dispatcher, line: &str) -> Result<bool> {
    match dispatcher.dispatch(line)? {
        Step::Output(result) => {
            print_messages(&result.messages);
            Ok(true)
        }
        Step::Clear => {
            Term::stdout().clear_screen()?;
            Ok(true)
        }
        Step::Exit => Ok(false),
    }
}

fn readline_error(e: ReadlineError) -> RosterError {
    RosterError::Readline(e.to_string())
}
