//! The two-spirals benchmark dataset and the formats it is written in.

pub mod error;
mod generator;
pub mod io;

pub use error::DataError;
pub use generator::{LabeledPoint, Spiral, SpiralConfig, generate};
