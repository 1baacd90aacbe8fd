//! Sales dashboard math utilities.

pub mod ratio;

pub use ratio::*;
