//! The five compiled-in step tables, one per program, in execution order.

use crate::step::Step;

mod p0;
mod p1;
mod p2;
mod p3;
mod p4;

pub(crate) const TABLES: [&[Step]; 5] = [
    &p0::STEPS,
    &p1::STEPS,
    &p2::STEPS,
    &p3::STEPS,
    &p4::STEPS,
];
