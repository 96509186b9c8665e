// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
use std::fmt;

/// Error types for evaluation, polynomial construction and root finding
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolicError {
    /// variable with this name is absent from the assignments
    Lookup(String),
    /// Newton-Raphson iterations exhausted without meeting the tolerance
    Convergence { iterations: usize, residual: f64 },
    /// malformed constructor arguments or solver parameters
    InvalidArgument(String),
}

impl fmt::Display for SymbolicError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SymbolicError::Lookup(name) => write!(f, "Variable '{}' is not assigned", name),
            SymbolicError::Convergence {
                iterations,
                residual,
            } => write!(
                f,
                "Root not found after {} iterations (|f(x)| = {})",
                iterations, residual
            ),
            SymbolicError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for SymbolicError {}
