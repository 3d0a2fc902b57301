use std::{error::Error, fmt, io, path::PathBuf};

/// The driver module's result type.
pub type Result<T> = std::result::Result<T, DriverErr>;

/// Batch driver failures.
#[derive(Debug)]
pub enum DriverErr {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Shape {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    Usage(String),
    InvalidConfig(String),
}

impl DriverErr {
    /// Wraps an I/O error together with the file it happened on.
    pub fn io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for DriverErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverErr::Io { path, source } => write!(f, "io error on {}: {source}", path.display()),
            DriverErr::Shape {
                what,
                got,
                expected,
            } => write!(f, "shape mismatch for {what}: got {got}, expected {expected}"),
            DriverErr::Usage(msg) => write!(f, "usage: {msg}"),
            DriverErr::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for DriverErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DriverErr::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
