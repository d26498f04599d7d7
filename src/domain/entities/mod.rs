//! Domain entities.

pub mod expense;

pub use expense::*;
