use crate::parser::CommandKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Student id {0} is not 6 digits long")]
    InvalidStudentId(i64),

    #[error("Roster generation failed: {0}")]
    Generator(String),

    #[error("No handler registered for command {0:?}")]
    MissingHandler(CommandKind),

    #[error("Command {0:?} is a shell signal and cannot be routed")]
    Unroutable(CommandKind),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Readline error: {0}")]
    Readline(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
