//! Username Generator.

mod generator;

pub use generator::*;
