//! Batch evaluation of the compiled-in programs over raw `f32` sample buffers.

pub mod batch;
pub mod config;
pub mod error;
pub mod io;

use std::path::Path;

use log::info;

pub use batch::{BatchDriver, InputBatch, PredictionBatch};
pub use config::DriverConfig;
pub use error::{DriverErr, Result};

/// Reads a batch from `input`, evaluates every program over it and, when given, writes
/// the predictions to `output`.
///
/// Nothing is evaluated unless the input was read in full.
///
/// # Errors
/// Returns a `DriverErr` if reading or writing fails or the input has the wrong shape.
pub fn run_files(
    config: DriverConfig,
    input: &Path,
    output: Option<&Path>,
) -> Result<PredictionBatch> {
    let data = io::read_f32s(input, config.input_len())?;
    let batch = InputBatch::from_flat(data, config.samples())?;
    info!("read {} samples from {}", batch.len(), input.display());

    let preds = BatchDriver::new(config).run(&batch);

    if let Some(output) = output {
        io::write_f32s(output, &preds.to_flat())?;
        info!(
            "wrote {} predictions to {}",
            preds.samples() * programs::PROGRAM_COUNT,
            output.display()
        );
    }

    Ok(preds)
}
