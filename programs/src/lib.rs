//! Five fixed programs, each a tape of comparison-gated `sin`/`cos` steps over two
//! registers, and the machinery to run, trace and score them.

pub mod error;
mod program;
pub mod score;
pub mod step;
mod tables;
mod trace;

pub use error::{ProgramErr, Result};
pub use program::{PROGRAM_COUNT, Program, ProgramId, all, evaluate, get, run};
pub use step::{Guard, Operand, Registers, Step, Transform};
pub use trace::{Trace, TraceEntry};
