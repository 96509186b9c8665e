// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
//! Univariate polynomial over a single variable, coefficients indexed by power.
//!
//! Evaluation sums `c[i] * x^(i-1)`: every term is shifted down by one power
//! relative to the textbook polynomial, while differentiation and printing treat
//! `c[i]` as the coefficient of `x^i`. Root finding is defined against this
//! evaluation rule, so both are kept as they are.

use crate::error::SymbolicError;
use crate::numerical::NR_polynomial::{
    DEFAULT_INITIAL_GUESS, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE, NRPolynomial, RootFinderConfig,
};
use crate::symbolic::assignments::Assignments;
use crate::symbolic::symbolic_engine::Variable;
use crate::symbolic::utils::format_float;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    var: Variable,
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// fails with `InvalidArgument` if `coefficients` is empty
    pub fn new(var: Variable, coefficients: Vec<f64>) -> Result<Polynomial, SymbolicError> {
        if coefficients.is_empty() {
            return Err(SymbolicError::InvalidArgument(format!(
                "polynomial in '{}' must have at least one coefficient",
                var
            )));
        }
        Ok(Polynomial { var, coefficients })
    }

    pub fn get_var(&self) -> &Variable {
        &self.var
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// same coefficients over another variable
    pub fn with_variable(&self, var: Variable) -> Polynomial {
        Polynomial {
            var,
            coefficients: self.coefficients.clone(),
        }
    }

    /// `Σ c[i] * x^(i-1)` where x is the assigned value of the polynomial's variable
    pub fn evaluate(&self, assignments: &Assignments) -> Result<f64, SymbolicError> {
        let x = assignments.lookup(&self.var)?;
        Ok(self
            .coefficients
            .iter()
            .enumerate()
            .map(|(i, c)| c * x.powi(i as i32 - 1))
            .sum())
    }

    /// Term-by-term derivative: `new[i] = c[i+1] * (i+1)`.
    /// A constant polynomial differentiates to `[0.0]`.
    pub fn derivative(&self) -> Polynomial {
        let mut coefficients: Vec<f64> = self
            .coefficients
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| c * i as f64)
            .collect();
        if coefficients.is_empty() {
            coefficients.push(0.0);
        }
        Polynomial {
            var: self.var.clone(),
            coefficients,
        }
    }

    /// Newton-Raphson root starting from 1.0.
    /// Parameters are taken as given: zero iterations only checks the initial guess,
    /// an unreachable tolerance ends in `SymbolicError::Convergence`.
    pub fn find_root(&self, tolerance: f64, max_iterations: usize) -> Result<f64, SymbolicError> {
        let config = RootFinderConfig {
            tolerance,
            max_iterations,
            initial_guess: DEFAULT_INITIAL_GUESS,
            loglevel: "off".to_string(),
        };
        NRPolynomial::with_config(self.clone(), config).solve()
    }

    /// `find_root` with tolerance 1e-4 and 100 iterations
    pub fn find_root_default(&self) -> Result<f64, SymbolicError> {
        self.find_root(DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let degree = self.degree();
        let mut terms = String::new();
        for (power, &c) in self.coefficients.iter().enumerate() {
            if c == 0.0 {
                continue;
            }
            let mut term = if power != degree && c > 0.0 {
                format!("+{}", format_float(c))
            } else {
                format_float(c)
            };
            if power > 0 {
                term.push_str(self.var.get_name());
            }
            if power > 1 {
                term.push_str(&format!("^{}", power));
            }
            // lower powers go to the right
            terms.insert_str(0, &term);
        }
        write!(f, "({})", terms)
    }
}
