use log::{debug, warn};
use ndarray::{Array2, ArrayView1, Zip};
use programs::{PROGRAM_COUNT, ProgramId};

use crate::{
    config::DriverConfig,
    error::{DriverErr, Result},
};

/// A fixed-size set of input samples, one row per sample and one column per feature.
#[derive(Debug, Clone, PartialEq)]
pub struct InputBatch {
    samples: Array2<f32>,
}

impl InputBatch {
    /// Creates a new batch from a sample-major buffer.
    ///
    /// # Arguments
    /// * `data` - `samples * 2` floats, `x0` then `x1` for every sample.
    /// * `samples` - The amount of samples the buffer must hold.
    ///
    /// # Returns
    /// The batch or `DriverErr::Shape` if the buffer has the wrong length.
    pub fn from_flat(data: Vec<f32>, samples: usize) -> Result<Self> {
        let shape_err = |got| DriverErr::Shape {
            what: "input floats",
            got,
            expected: samples * 2,
        };

        if data.len() != samples * 2 {
            return Err(shape_err(data.len()));
        }

        let len = data.len();
        let samples = Array2::from_shape_vec((samples, 2), data).map_err(|_| shape_err(len))?;
        Ok(Self { samples })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.nrows()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the `(x0, x1)` pair of the `i`-th sample.
    #[inline]
    pub fn sample(&self, i: usize) -> (f32, f32) {
        (self.samples[[i, 0]], self.samples[[i, 1]])
    }
}

/// The predictions of every program over a batch, one row per program.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionBatch {
    preds: Array2<f32>,
}

impl PredictionBatch {
    /// Returns the amount of samples each program was evaluated on.
    #[inline]
    pub fn samples(&self) -> usize {
        self.preds.ncols()
    }

    #[inline]
    pub fn get(&self, program: ProgramId, sample: usize) -> f32 {
        self.preds[[program.index(), sample]]
    }

    /// Returns the predictions of a single program.
    pub fn row(&self, program: ProgramId) -> ArrayView1<'_, f32> {
        self.preds.row(program.index())
    }

    /// Flattens the predictions program-major: every sample of program 0, then program 1...
    pub fn to_flat(&self) -> Vec<f32> {
        self.preds.iter().copied().collect()
    }
}

/// Runs the compiled-in programs over whole batches.
#[derive(Debug, Clone, Default)]
pub struct BatchDriver {
    config: DriverConfig,
}

impl BatchDriver {
    pub fn new(config: DriverConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Evaluates every program over every sample of the batch.
    ///
    /// Each `(program, sample)` cell is computed independently, so the parallel and
    /// sequential paths produce identical results.
    pub fn run(&self, input: &InputBatch) -> PredictionBatch {
        let programs = programs::all();
        let mut preds = Array2::zeros((PROGRAM_COUNT, input.len()));

        let eval = |(p, i): (usize, usize), out: &mut f32| {
            let (x0, x1) = input.sample(i);
            *out = programs[p].evaluate(x0, x1);
        };

        let zip = Zip::indexed(&mut preds);
        if self.config.parallel() {
            zip.par_for_each(eval);
        } else {
            zip.for_each(eval);
        }

        let batch = PredictionBatch { preds };
        for id in ProgramId::all() {
            let row = batch.row(id);
            let nans = row.iter().filter(|p| p.is_nan()).count();
            if nans > 0 {
                warn!(program = id.index(); "{nans} of {} predictions are NaN", row.len());
            }
            debug!(program = id.index(); "mean prediction {}", row.mean().unwrap_or(f32::NAN));
        }

        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_flat_checks_length() {
        assert!(InputBatch::from_flat(vec![0.0; 20], 10).is_ok());

        match InputBatch::from_flat(vec![0.0; 21], 10) {
            Err(DriverErr::Shape { got, expected, .. }) => assert_eq!((got, expected), (21, 20)),
            other => panic!("expected a shape error, got {other:?}"),
        }
    }

    #[test]
    fn samples_are_row_major() {
        let batch = InputBatch::from_flat(vec![1.0, 2.0, 3.0, 4.0], 2).unwrap();

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.sample(0), (1.0, 2.0));
        assert_eq!(batch.sample(1), (3.0, 4.0));
    }

    #[test]
    fn predictions_flatten_program_major() {
        let batch = InputBatch::from_flat(vec![0.5, -1.0, 2.0, 3.0, -4.0, 0.25], 3).unwrap();
        let preds = BatchDriver::default().run(&batch);
        let flat = preds.to_flat();

        assert_eq!(flat.len(), PROGRAM_COUNT * 3);
        for id in ProgramId::all() {
            for i in 0..3 {
                assert_eq!(flat[id.index() * 3 + i].to_bits(), preds.get(id, i).to_bits());
            }
        }
    }
}
