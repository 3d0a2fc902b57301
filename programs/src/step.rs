use std::fmt;

/// A value a guard can compare.
///
/// `R0` and `X0`/`X1` resolve against the live register file, `R1` is fixed once the
/// registers are seeded and `Lit` is fixed when the program is defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    R0,
    R1,
    X0,
    X1,
    Lit(f32),
}

/// The unary transform a step applies to `r0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Sin,
    Cos,
}

impl Transform {
    #[inline]
    pub fn apply(self, x: f32) -> f32 {
        match self {
            Transform::Sin => x.sin(),
            Transform::Cos => x.cos(),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Transform::Sin => "sin",
            Transform::Cos => "cos",
        }
    }
}

/// The predicate guarding a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Guard {
    Always,
    /// Strict `a > b`, false whenever either side is NaN.
    Gt(Operand, Operand),
}

/// One instruction: a guard plus the transform applied to `r0` when the guard passes.
///
/// There is no way to target `r1`, steps only ever rewrite `r0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub guard: Guard,
    pub transform: Transform,
}

impl Step {
    pub const fn always(transform: Transform) -> Self {
        Self {
            guard: Guard::Always,
            transform,
        }
    }

    pub const fn gt(a: Operand, b: Operand, transform: Transform) -> Self {
        Self {
            guard: Guard::Gt(a, b),
            transform,
        }
    }
}

/// The working state of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Registers {
    r0: f32,
    r1: f32,
    x: [f32; 2],
}

impl Registers {
    /// Seeds the registers from the input, `r0 = x0` and `r1 = x1`.
    pub fn new(x0: f32, x1: f32) -> Self {
        Self {
            r0: x0,
            r1: x1,
            x: [x0, x1],
        }
    }

    #[inline]
    pub fn r0(&self) -> f32 {
        self.r0
    }

    #[inline]
    pub fn r1(&self) -> f32 {
        self.r1
    }

    #[inline]
    pub fn resolve(&self, operand: Operand) -> f32 {
        match operand {
            Operand::R0 => self.r0,
            Operand::R1 => self.r1,
            Operand::X0 => self.x[0],
            Operand::X1 => self.x[1],
            Operand::Lit(value) => value,
        }
    }

    /// Checks the step's guard against the current state.
    #[inline]
    pub fn passes(&self, guard: Guard) -> bool {
        match guard {
            Guard::Always => true,
            Guard::Gt(a, b) => self.resolve(a) > self.resolve(b),
        }
    }

    /// Executes a single step, returns whether its transform was applied.
    #[inline]
    pub fn exec(&mut self, step: &Step) -> bool {
        let fired = self.passes(step.guard);
        if fired {
            self.r0 = step.transform.apply(self.r0);
        }

        fired
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::R0 => write!(f, "r0"),
            Operand::R1 => write!(f, "r1"),
            Operand::X0 => write!(f, "x0"),
            Operand::X1 => write!(f, "x1"),
            Operand::Lit(value) => write!(f, "{value}"),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.transform.name();

        match self.guard {
            Guard::Always => write!(f, "r0 = {name}(r0)"),
            Guard::Gt(a, b) => write!(f, "if {a} > {b}: r0 = {name}(r0)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Operand::*, Transform::*, *};

    #[test]
    fn guard_is_strict_greater_than() {
        let regs = Registers::new(2.0, 2.0);

        assert!(!regs.passes(Guard::Gt(X0, X1)));
        assert!(!regs.passes(Guard::Gt(R0, R0)));
        assert!(regs.passes(Guard::Gt(Lit(3.0), R1)));
        assert!(regs.passes(Guard::Always));
    }

    #[test]
    fn nan_comparisons_never_fire() {
        let mut regs = Registers::new(f32::NAN, 1.0);

        assert!(!regs.passes(Guard::Gt(R0, Lit(0.0))));
        assert!(!regs.passes(Guard::Gt(Lit(0.0), R0)));
        assert!(!regs.exec(&Step::gt(X0, R1, Sin)));
        assert!(regs.r0().is_nan());
    }

    #[test]
    fn exec_rewrites_only_r0() {
        let mut regs = Registers::new(0.0, 5.0);

        assert!(regs.exec(&Step::always(Cos)));
        assert_eq!(regs.r0(), 1.0);
        assert_eq!(regs.r1(), 5.0);

        // x0 keeps the seed even though r0 moved on
        assert!(regs.exec(&Step::gt(R0, X0, Sin)));
        assert_eq!(regs.r0(), 1.0f32.sin());
        assert_eq!(regs.resolve(X0), 0.0);
        assert_eq!(regs.r1(), 5.0);
    }

    #[test]
    fn infinite_input_becomes_nan() {
        let mut regs = Registers::new(f32::INFINITY, 0.0);
        regs.exec(&Step::always(Sin));
        assert!(regs.r0().is_nan());
    }

    #[test]
    fn steps_render_one_per_line() {
        assert_eq!(Step::gt(X1, R0, Cos).to_string(), "if x1 > r0: r0 = cos(r0)");
        assert_eq!(Step::gt(Lit(4.0), R1, Sin).to_string(), "if 4 > r1: r0 = sin(r0)");
        assert_eq!(Step::always(Sin).to_string(), "r0 = sin(r0)");
    }
}
