//! Turning raw predictions into class labels and measuring them against the dataset labels.

use crate::error::{ProgramErr, Result};

/// Maps a prediction to a class label: strictly positive is `1.0`, anything else `0.0`.
#[inline]
pub fn classify(pred: f32) -> f32 {
    if pred > 0.0 { 1.0 } else { 0.0 }
}

/// Binary confusion counts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Confusion {
    pub tp: usize,
    pub tn: usize,
    pub fp: usize,
    pub fn_: usize,
    /// Predictions that were NaN, they are classified as `0.0` as well.
    pub nan: usize,
}

impl Confusion {
    #[inline]
    pub fn total(&self) -> usize {
        self.tp + self.tn + self.fp + self.fn_
    }

    /// The fraction of correctly classified samples, `0.0` when there are none.
    pub fn accuracy(&self) -> f32 {
        match self.total() {
            0 => 0.0,
            total => (self.tp + self.tn) as f32 / total as f32,
        }
    }
}

/// Scores a set of predictions against their labels.
///
/// # Arguments
/// * `preds` - Raw program outputs.
/// * `labels` - The expected labels, `1.0` or `0.0`.
///
/// # Returns
/// The confusion counts or an error if the lengths differ.
pub fn score(preds: &[f32], labels: &[f32]) -> Result<Confusion> {
    if preds.len() != labels.len() {
        return Err(ProgramErr::SizeMismatch {
            what: "labels",
            got: labels.len(),
            expected: preds.len(),
        });
    }

    let mut confusion = Confusion::default();
    for (&pred, &label) in preds.iter().zip(labels) {
        if pred.is_nan() {
            confusion.nan += 1;
        }

        match (classify(pred) == 1.0, label == 1.0) {
            (true, true) => confusion.tp += 1,
            (false, false) => confusion.tn += 1,
            (true, false) => confusion.fp += 1,
            (false, true) => confusion.fn_ += 1,
        }
    }

    Ok(confusion)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_negative() {
        assert_eq!(classify(0.0), 0.0);
        assert_eq!(classify(-0.0), 0.0);
        assert_eq!(classify(f32::MIN_POSITIVE), 1.0);
        assert_eq!(classify(f32::NAN), 0.0);
    }

    #[test]
    fn counts_every_cell() {
        let preds = [0.7, -0.2, 0.1, 0.0, f32::NAN];
        let labels = [1.0, 0.0, 0.0, 1.0, 1.0];

        let confusion = score(&preds, &labels).unwrap();
        assert_eq!(
            confusion,
            Confusion {
                tp: 1,
                tn: 1,
                fp: 1,
                fn_: 2,
                nan: 1
            }
        );
        assert_eq!(confusion.total(), 5);
        assert_eq!(confusion.accuracy(), 0.4);
    }

    #[test]
    fn rejects_unequal_lengths() {
        assert_eq!(
            score(&[1.0, 2.0], &[1.0]),
            Err(ProgramErr::SizeMismatch {
                what: "labels",
                got: 1,
                expected: 2
            })
        );
        assert_eq!(Confusion::default().accuracy(), 0.0);
    }
}
