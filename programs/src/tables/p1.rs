use crate::step::{Operand::*, Step, Transform::*};

pub(crate) const STEPS: [Step; 256] = [
    Step::gt(X0, Lit(1.0), Cos),
    Step::always(Cos),
    Step::always(Cos),
    Step::always(Sin),
    Step::gt(R0, R1, Cos),
    Step::always(Cos),
    Step::always(Sin),
    Step::gt(Lit(3.0), R1, Sin),
    Step::gt(X0, R1, Sin),
    Step::always(Sin),
    Step::always(Sin),
    Step::gt(X0, X0, Sin),
    Step::always(Cos),
    Step::gt(R0, X0, Sin),
    Step::gt(Lit(9.0), R0, Sin),
    Step::gt(X1, R1, Sin),
    Step::always(Sin),
    Step::always(Sin),
    Step::gt(Lit(8.0), R1, Sin),
    Step::gt(X0, X1, Cos),
    Step::always(Cos),
    Step::always(Sin),
    Step::always(Cos),
    Step::gt(Lit(2.0), Lit(8.0), Cos),
    Step::gt(R1, Lit(5.0), Cos),
    Step::always(Sin),
    Step::always(Cos),
    Step::gt(Lit(7.0), R1, Cos),
    Step::always(Sin),
    Step::gt(Lit(6.0), Lit(2.0), Cos),
    Step::gt(R1, X0, Cos),
    Step::always(Sin),
    Step::gt(R1, R0, Cos),
    Step::gt(Lit(8.0), R1, Sin),
    Step::gt(X0, X1, Cos),
    Step::always(Sin),
    Step::gt(X1, R1, Cos),
    Step::gt(R0, Lit(3.0), Sin),
    Step::always(Sin),
    Step::gt(Lit(5.0), Lit(4.0), Sin),
    Step::gt(Lit(8.0), X1, Sin),
    Step::always(Sin),
    Step::gt(X0, X1, Cos),
    Step::gt(X0, X1, Sin),
    Step::gt(R0, X0, Sin),
    Step::gt(X0, Lit(4.0), Cos),
    Step::gt(Lit(3.0), Lit(2.0), Sin),
    Step::always(Cos),
    Step::gt(R0, R1, Sin),
    Step::gt(X0, Lit(1.0), Cos),
    Step::gt(X0, X1, Cos),
    Step::gt(Lit(5.0), X0, Cos),
    Step::gt(R0, R0, Cos),
    Step::gt(X1, Lit(6.0), Cos),
    Step::always(Cos),
    Step::gt(R0, R0, Sin),
    Step::gt(X0, R1, Sin),
    Step::always(Cos),
    Step::always(Sin),
    Step::gt(Lit(4.0), R1, Sin),
    Step::gt(Lit(6.0), X1, Cos),
    Step::always(Sin),
    Step::always(Sin),
    Step::gt(Lit(8.0), Lit(3.0), Sin),
    Step::gt(Lit(7.0), Lit(3.0), Cos),
    Step::always(Sin),
    Step::always(Sin),
    Step::always(Sin),
    Step::gt(Lit(7.0), R0, Sin),
    Step::gt(R0, X0, Cos),
    Step::gt(R1, R0, Sin),
    Step::gt(Lit(9.0), X0, Cos),
    Step::always(Sin),
    Step::gt(X0, Lit(7.0), Cos),
    Step::gt(X0, R0, Sin),
    Step::gt(R0, Lit(4.0), Cos),
    Step::gt(R0, Lit(4.0), Cos),
    Step::always(Cos),
    Step::always(Sin),
    Step::always(Sin),
    Step::always(Cos),
    Step::gt(R0, R0, Cos),
    Step::gt(Lit(3.0), Lit(7.0), Sin),
    Step::always(Sin),
    Step::gt(R1, X1, Cos),
    Step::gt(X0, Lit(9.0), Cos),
    Step::always(Sin),
    Step::always(Cos),
    Step::gt(X0, Lit(8.0), Cos),
    Step::gt(Lit(5.0), X0, Sin),
    Step::gt(Lit(6.0), Lit(8.0), Cos),
    Step::always(Cos),
    Step::always(Sin),
    Step::gt(X0, X1, Cos),
    Step::gt(R1, R1, Cos),
    Step::always(Sin),
    Step::always(Cos),
    Step::gt(R1, R1, Sin),
    Step::gt(R0, X0, Cos),
    Step::always(Cos),
    Step::gt(Lit(1.0), X1, Cos),
    Step::always(Cos),
    Step::gt(X0, R0, Sin),
    Step::gt(Lit(3.0), Lit(8.0), Cos),
    Step::always(Sin),
    Step::gt(X1, X0, Cos),
    Step::gt(X0, R1, Cos),
    Step::always(Sin),
    Step::gt(R1, R1, Cos),
    Step::always(Sin),
    Step::gt(Lit(5.0), X1, Sin),
    Step::always(Sin),
    Step::always(Cos),
    Step::gt(R0, R1, Cos),
    Step::gt(R1, R1, Sin),
    Step::always(Sin),
    Step::always(Cos),
    Step::gt(X1, Lit(4.0), Sin),
    Step::always(Cos),
    Step::gt(R0, R1, Sin),
    Step::gt(X1, Lit(8.0), Sin),
    Step::gt(X0, Lit(3.0), Cos),
    Step::always(Sin),
    Step::always(Sin),
    Step::gt(R1, Lit(4.0), Sin),
    Step::always(Sin),
    Step::always(Cos),
    Step::always(Sin),
    Step::gt(R0, R1, Cos),
    Step::gt(Lit(7.0), X1, Sin),
    Step::always(Sin),
    Step::gt(X1, Lit(5.0), Sin),
    Step::gt(Lit(4.0), Lit(2.0), Sin),
    Step::gt(X0, Lit(1.0), Sin),
    Step::gt(R0, R1, Cos),
    Step::always(Sin),
    Step::gt(Lit(1.0), X1, Cos),
    Step::always(Cos),
    Step::always(Sin),
    Step::always(Sin),
    Step::always(Cos),
    Step::gt(X0, Lit(5.0), Cos),
    Step::always(Sin),
    Step::gt(X0, R1, Sin),
    Step::always(Cos),
    Step::always(Cos),
    Step::always(Sin),
    Step::always(Sin),
    Step::gt(Lit(9.0), R1, Cos),
    Step::always(Sin),
    Step::gt(X0, R0, Sin),
    Step::always(Cos),
    Step::always(Cos),
    Step::gt(R0, R0, Sin),
    Step::gt(X0, R0, Sin),
    Step::always(Cos),
    Step::gt(Lit(2.0), Lit(6.0), Cos),
    Step::always(Cos),
    Step::gt(Lit(6.0), R0, Cos),
    Step::gt(R1, R0, Cos),
    Step::always(Sin),
    Step::always(Sin),
    Step::gt(X1, X1, Cos),
    Step::gt(R1, Lit(4.0), Cos),
    Step::gt(X0, R1, Cos),
    Step::gt(R0, Lit(6.0), Sin),
    Step::gt(R1, Lit(9.0), Cos),
    Step::always(Cos),
    Step::gt(X0, X1, Cos),
    Step::always(Sin),
    Step::gt(X1, Lit(1.0), Cos),
    Step::always(Sin),
    Step::always(Cos),
    Step::always(Sin),
    Step::gt(X1, R0, Sin),
    Step::gt(R0, X0, Sin),
    Step::always(Sin),
    Step::gt(R1, R1, Sin),
    Step::always(Sin),
    Step::gt(Lit(3.0), Lit(6.0), Sin),
    Step::gt(X1, R1, Sin),
    Step::always(Cos),
    Step::always(Cos),
    Step::gt(X1, R0, Sin),
    Step::always(Cos),
    Step::gt(X0, Lit(1.0), Cos),
    Step::gt(R1, R0, Cos),
    Step::always(Cos),
    Step::always(Cos),
    Step::gt(X0, Lit(6.0), Cos),
    Step::always(Cos),
    Step::always(Sin),
    Step::gt(Lit(6.0), X0, Cos),
    Step::gt(R0, Lit(2.0), Sin),
    Step::always(Cos),
    Step::always(Cos),
    Step::gt(X0, Lit(5.0), Cos),
    Step::gt(Lit(9.0), X1, Sin),
    Step::always(Cos),
    Step::gt(Lit(9.0), R0, Sin),
    Step::gt(X0, R0, Cos),
    Step::gt(Lit(8.0), X0, Cos),
    Step::gt(Lit(7.0), X1, Sin),
    Step::gt(X0, Lit(9.0), Cos),
    Step::gt(Lit(1.0), R1, Sin),
    Step::gt(R0, R0, Cos),
    Step::always(Cos),
    Step::gt(Lit(7.0), X0, Sin),
    Step::gt(X0, R1, Sin),
    Step::always(Cos),
    Step::gt(Lit(6.0), X1, Sin),
    Step::gt(X1, R1, Sin),
    Step::always(Cos),
    Step::gt(R1, R1, Cos),
    Step::gt(R0, X0, Cos),
    Step::always(Sin),
    Step::always(Cos),
    Step::gt(R1, X1, Cos),
    Step::gt(R1, X1, Cos),
    Step::always(Cos),
    Step::gt(R0, X0, Sin),
    Step::always(Cos),
    Step::gt(R1, R0, Cos),
    Step::gt(R0, X0, Cos),
    Step::gt(X1, R0, Sin),
    Step::always(Cos),
    Step::gt(R0, X0, Cos),
    Step::always(Cos),
    Step::gt(R1, R1, Cos),
    Step::always(Cos),
    Step::gt(Lit(4.0), Lit(4.0), Sin),
    Step::always(Cos),
    Step::gt(X0, X1, Cos),
    Step::always(Sin),
    Step::gt(X1, Lit(1.0), Sin),
    Step::always(Cos),
    Step::always(Sin),
    Step::always(Cos),
    Step::always(Sin),
    Step::always(Sin),
    Step::gt(Lit(9.0), Lit(8.0), Cos),
    Step::gt(R0, X0, Sin),
    Step::gt(R0, X1, Cos),
    Step::always(Cos),
    Step::gt(Lit(7.0), Lit(8.0), Cos),
    Step::always(Sin),
    Step::gt(X1, X0, Sin),
    Step::gt(R1, R0, Sin),
    Step::gt(Lit(5.0), R1, Cos),
    Step::always(Cos),
    Step::always(Cos),
    Step::gt(R0, Lit(1.0), Cos),
    Step::gt(X1, Lit(6.0), Cos),
    Step::gt(Lit(6.0), Lit(5.0), Cos),
    Step::gt(X1, Lit(6.0), Sin),
    Step::gt(Lit(4.0), R0, Cos),
];
