use std::fmt;

use crate::{
    error::{ProgramErr, Result},
    step::{Registers, Step},
    tables::TABLES,
    trace::Trace,
};

/// The amount of compiled-in programs.
pub const PROGRAM_COUNT: usize = 5;

/// Identifies one of the compiled-in programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProgramId(usize);

impl ProgramId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }

    /// Returns every program id in ascending order.
    pub fn all() -> impl Iterator<Item = ProgramId> {
        (0..PROGRAM_COUNT).map(ProgramId)
    }
}

impl TryFrom<usize> for ProgramId {
    type Error = ProgramErr;

    fn try_from(id: usize) -> Result<Self> {
        if id >= PROGRAM_COUNT {
            return Err(ProgramErr::UnknownProgram {
                id,
                count: PROGRAM_COUNT,
            });
        }

        Ok(Self(id))
    }
}

impl fmt::Display for ProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, immutable sequence of steps.
#[derive(Debug)]
pub struct Program {
    id: ProgramId,
    steps: &'static [Step],
}

static PROGRAMS: [Program; PROGRAM_COUNT] = [
    Program::new(ProgramId(0), TABLES[0]),
    Program::new(ProgramId(1), TABLES[1]),
    Program::new(ProgramId(2), TABLES[2]),
    Program::new(ProgramId(3), TABLES[3]),
    Program::new(ProgramId(4), TABLES[4]),
];

impl Program {
    const fn new(id: ProgramId, steps: &'static [Step]) -> Self {
        Self { id, steps }
    }

    #[inline]
    pub fn id(&self) -> ProgramId {
        self.id
    }

    #[inline]
    pub fn steps(&self) -> &'static [Step] {
        self.steps
    }

    /// Runs the program over a single input pair.
    ///
    /// # Arguments
    /// * `x0` - The first input feature, seeds `r0`.
    /// * `x1` - The second input feature, seeds `r1`.
    ///
    /// # Returns
    /// The value of `r0` after every step ran.
    #[inline]
    pub fn evaluate(&self, x0: f32, x1: f32) -> f32 {
        run(self.steps, x0, x1)
    }

    /// Runs the program step by step, exposing the registers after each one.
    pub fn trace(&self, x0: f32, x1: f32) -> Trace<'static> {
        Trace::new(self.steps, x0, x1)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "program {} ({} steps)", self.id, self.steps.len())?;
        for (i, step) in self.steps.iter().enumerate() {
            writeln!(f, "{i:>4}  {step}")?;
        }

        Ok(())
    }
}

/// Returns the compiled-in programs, ordered by id.
pub fn all() -> &'static [Program; PROGRAM_COUNT] {
    &PROGRAMS
}

/// Returns the program with the given id.
pub fn get(id: ProgramId) -> &'static Program {
    &PROGRAMS[id.0]
}

/// Evaluates the program `id` over the input pair `(x0, x1)`.
pub fn evaluate(id: ProgramId, x0: f32, x1: f32) -> f32 {
    get(id).evaluate(x0, x1)
}

/// Runs an arbitrary step list left to right and returns the final `r0`.
///
/// Steps depend on the `r0` left by the previous ones, so the order is never changed.
pub fn run(steps: &[Step], x0: f32, x1: f32) -> f32 {
    let mut regs = Registers::new(x0, x1);
    for step in steps {
        regs.exec(step);
    }

    regs.r0()
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;
    use crate::step::{Operand::*, Transform::*};

    #[test]
    fn ids_are_bounded() {
        assert_eq!(ProgramId::try_from(4).map(ProgramId::index), Ok(4));
        assert_eq!(
            ProgramId::try_from(5),
            Err(ProgramErr::UnknownProgram { id: 5, count: 5 })
        );
        assert_eq!(ProgramId::all().count(), PROGRAM_COUNT);
    }

    #[test]
    fn programs_are_ordered_by_id() {
        for (i, program) in all().iter().enumerate() {
            assert_eq!(program.id().index(), i);
            assert_eq!(program.steps().len(), 256);
        }
    }

    #[test]
    fn no_firing_step_returns_x0() {
        let steps = [
            Step::gt(X0, Lit(1.0), Sin),
            Step::gt(R0, R0, Cos),
            Step::gt(R1, X1, Sin),
            Step::gt(Lit(2.0), Lit(3.0), Cos),
        ];

        assert_eq!(run(&steps, 0.0, 7.0), 0.0);
        assert_eq!(run(&[], -3.5, 1.0), -3.5);
    }

    #[test]
    fn run_applies_steps_in_order() {
        // cos(0) = 1 enables the second step, sin(0) = 0 would not
        let steps = [Step::always(Cos), Step::gt(R0, Lit(0.5), Sin)];
        assert_eq!(run(&steps, 0.0, 0.0), 1.0f32.sin());

        let steps = [Step::always(Sin), Step::gt(R0, Lit(0.5), Sin)];
        assert_eq!(run(&steps, 0.0, 0.0), 0.0);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let mut rng = rand::rng();

        for _ in 0..200 {
            let x0 = rng.random_range(-10.0..10.0);
            let x1 = rng.random_range(-10.0..10.0);

            for id in ProgramId::all() {
                let a = evaluate(id, x0, x1);
                let b = evaluate(id, x0, x1);
                assert_eq!(a.to_bits(), b.to_bits());
            }
        }
    }

    #[test]
    fn nan_input_propagates() {
        for program in all() {
            assert!(program.evaluate(f32::NAN, 0.0).is_nan());
        }
    }

    #[test]
    fn listing_has_one_line_per_step() {
        let listing = get(ProgramId(0)).to_string();
        let mut lines = listing.lines();

        assert_eq!(lines.next(), Some("program 0 (256 steps)"));
        assert_eq!(lines.next(), Some("   0  if 4 > 3: r0 = sin(r0)"));
        assert_eq!(listing.lines().count(), 257);
    }
}
