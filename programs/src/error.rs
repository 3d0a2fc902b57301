use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used in the entire programs module.
pub type Result<T> = std::result::Result<T, ProgramErr>;

/// The programs module's error type.
#[derive(Debug, PartialEq)]
pub enum ProgramErr {
    UnknownProgram {
        id: usize,
        count: usize,
    },
    SizeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
}

impl Display for ProgramErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgramErr::UnknownProgram { id, count } => {
                write!(f, "unknown program {id}, there are only {count} programs")
            }
            ProgramErr::SizeMismatch {
                what,
                got,
                expected,
            } => write!(
                f,
                "size mismatch for {what}: got {got}, expected {expected}"
            ),
        }
    }
}

impl Error for ProgramErr {}
