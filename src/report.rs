use driver::PredictionBatch;
use programs::{ProgramId, Result, score::score};
use serde::Serialize;

/// How one program classifies the dataset.
#[derive(Debug, Serialize, PartialEq)]
pub struct ProgramReport {
    pub id: usize,
    pub accuracy: f32,
    pub tp: usize,
    pub tn: usize,
    pub fp: usize,
    #[serde(rename = "fn")]
    pub fn_: usize,
    pub nan: usize,
}

/// The scores of every program over the same samples.
#[derive(Debug, Serialize, PartialEq)]
pub struct Report {
    pub samples: usize,
    pub programs: Vec<ProgramReport>,
}

impl Report {
    /// Scores every program's predictions against `labels`.
    ///
    /// # Errors
    /// Returns a `ProgramErr::SizeMismatch` if there is not one label per sample.
    pub fn new(preds: &PredictionBatch, labels: &[f32]) -> Result<Self> {
        let programs = ProgramId::all()
            .map(|id| -> Result<ProgramReport> {
                let row: Vec<f32> = preds.row(id).to_vec();
                let confusion = score(&row, labels)?;

                Ok(ProgramReport {
                    id: id.index(),
                    accuracy: confusion.accuracy(),
                    tp: confusion.tp,
                    tn: confusion.tn,
                    fp: confusion.fp,
                    fn_: confusion.fn_,
                    nan: confusion.nan,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            samples: preds.samples(),
            programs,
        })
    }
}

#[cfg(test)]
mod tests {
    use driver::{BatchDriver, InputBatch};

    use super::*;

    #[test]
    fn one_entry_per_program() {
        let batch = InputBatch::from_flat(vec![0.0, 6.5, -0.0, -6.5], 2).unwrap();
        let preds = BatchDriver::default().run(&batch);

        let report = Report::new(&preds, &[1.0, 0.0]).unwrap();
        assert_eq!(report.samples, 2);
        assert_eq!(report.programs.len(), programs::PROGRAM_COUNT);

        // every program outputs positive values over these samples
        for program in &report.programs {
            assert_eq!((program.tp, program.fp), (1, 1));
            assert_eq!(program.accuracy, 0.5);
        }
    }

    #[test]
    fn serializes_fn_without_underscore() {
        let batch = InputBatch::from_flat(vec![0.0, 6.5], 1).unwrap();
        let preds = BatchDriver::default().run(&batch);

        let json = serde_json::to_value(Report::new(&preds, &[1.0]).unwrap()).unwrap();
        assert_eq!(json["samples"], 1);
        assert_eq!(json["programs"][0]["fn"], 0);
        assert!(json["programs"][0].get("fn_").is_none());
    }

    #[test]
    fn label_count_must_match() {
        let batch = InputBatch::from_flat(vec![0.0, 6.5], 1).unwrap();
        let preds = BatchDriver::default().run(&batch);

        assert!(Report::new(&preds, &[1.0, 0.0]).is_err());
    }
}
