//! Components regarding the evaluation of α-CTL formulae, including the main `sat` algorithm.

pub mod algorithm;
pub mod context;
pub mod operators;
