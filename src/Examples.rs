//! examples of usage of RustedSymbolic
/// Symbolic operations and polynomial root finding examples
pub mod symbolic_examples;
