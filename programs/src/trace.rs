use std::slice;

use crate::step::{Registers, Step};

/// The state right after a step executed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceEntry {
    pub index: usize,
    pub step: Step,
    /// Whether the guard passed and the transform was applied.
    pub fired: bool,
    pub registers: Registers,
}

/// Step-by-step evaluation of a step list.
///
/// Yields one `TraceEntry` per step; once exhausted, `registers` holds the same state
/// `run` returns its result from.
#[derive(Debug, Clone)]
pub struct Trace<'a> {
    steps: slice::Iter<'a, Step>,
    index: usize,
    registers: Registers,
}

impl<'a> Trace<'a> {
    pub fn new(steps: &'a [Step], x0: f32, x1: f32) -> Self {
        Self {
            steps: steps.iter(),
            index: 0,
            registers: Registers::new(x0, x1),
        }
    }

    #[inline]
    pub fn registers(&self) -> Registers {
        self.registers
    }
}

impl Iterator for Trace<'_> {
    type Item = TraceEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let step = *self.steps.next()?;
        let fired = self.registers.exec(&step);
        let entry = TraceEntry {
            index: self.index,
            step,
            fired,
            registers: self.registers,
        };

        self.index += 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.steps.size_hint()
    }
}

impl ExactSizeIterator for Trace<'_> {}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use crate::program::{ProgramId, all, evaluate};

    #[test]
    fn r1_never_changes() {
        let mut rng = rand::rng();

        for program in all() {
            let x0 = rng.random_range(-10.0f32..10.0);
            let x1 = rng.random_range(-10.0f32..10.0);

            assert_eq!(program.trace(x0, x1).len(), program.steps().len());
            for entry in program.trace(x0, x1) {
                assert_eq!(entry.registers.r1().to_bits(), x1.to_bits());
            }
        }
    }

    #[test]
    fn trace_ends_where_evaluate_does() {
        for id in ProgramId::all() {
            let program = crate::program::get(id);
            let last = program.trace(1.25, -0.5).last().map(|e| e.registers.r0());

            assert_eq!(
                last.map(f32::to_bits),
                Some(evaluate(id, 1.25, -0.5).to_bits())
            );
        }
    }

    #[test]
    fn unfired_steps_leave_r0_alone() {
        let program = crate::program::get(ProgramId::try_from(2).unwrap());
        let mut prev = 3.0f32;

        for entry in program.trace(prev, 1.0) {
            if !entry.fired {
                assert_eq!(entry.registers.r0().to_bits(), prev.to_bits());
            }
            prev = entry.registers.r0();
        }
    }
}
