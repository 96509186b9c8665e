// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
//! # Symbolic Engine Derivatives Module
//!
//! Differentiation and numerical evaluation of `Expr`.
//!
//! ## Key Methods
//! - `diff(var)` - analytical partial derivative with respect to one variable
//! - `evaluate(assignments)` - numerical value under the current assignments
//! - `compare_num1D(...)` - check the analytical derivative against a central difference
//!
//! Neither method simplifies: the derivative of `x*y` w.r.t. `x` is
//! `((1.0*y)+(x*0.0))`, exactly as the product rule builds it.

use crate::error::SymbolicError;
use crate::symbolic::assignments::Assignments;
use crate::symbolic::symbolic_engine::{Expr, Variable};
use crate::symbolic::utils::linspace;

impl Expr {
    /// DIFFERENTIATION

    /// Computes the analytical derivative of the expression with respect to a variable.
    ///
    /// - Linearity: d(A±B) = dA ± dB
    /// - Product rule: d(A*B) = dA*B + A*dB
    /// - Power with constant exponent, chain rule: d(A^p) = (p*A^(p-1))*dA
    /// - Polynomial: term-by-term over its own variable
    ///
    /// # Examples
    /// ```rust, ignore
    /// let x = Variable::new("x");
    /// let f = Expr::Var(x.clone()) ^ 2.0; // x^2
    /// let df_dx = f.diff(&x); // ((2.0*(x^1.0))*1.0)
    /// ```
    pub fn diff(&self, var: &Variable) -> Expr {
        match self {
            Expr::Const(_) => Expr::Const(0.0),
            Expr::Var(name) => {
                if name == var {
                    Expr::Const(1.0)
                } else {
                    Expr::Const(0.0)
                }
            }
            Expr::Add(lhs, rhs) => Expr::Add(Box::new(lhs.diff(var)), Box::new(rhs.diff(var))),
            Expr::Sub(lhs, rhs) => Expr::Sub(Box::new(lhs.diff(var)), Box::new(rhs.diff(var))),
            Expr::Mul(lhs, rhs) => Expr::Add(
                Box::new(Expr::Mul(Box::new(lhs.diff(var)), rhs.clone())),
                Box::new(Expr::Mul(lhs.clone(), Box::new(rhs.diff(var)))),
            ),
            Expr::Pow(base, p) => Expr::Mul(
                Box::new(Expr::Mul(
                    Box::new(Expr::Const(*p)),
                    Box::new(Expr::Pow(base.clone(), p - 1.0)),
                )),
                Box::new(base.diff(var)),
            ),
            Expr::Polynomial(poly) => Expr::Polynomial(poly.derivative()),
        }
    }

    /// n-th derivative obtained by repeated `diff`
    #[allow(non_snake_case)]
    pub fn n_th_derivative1D(&self, var: &Variable, n: usize) -> Expr {
        let mut expr = self.clone();
        for _ in 0..n {
            expr = expr.diff(var);
        }
        expr
    }

    /// EVALUATION

    /// Evaluates the expression under the given assignments.
    ///
    /// Both operands of a binary node are always evaluated. Floating point domain problems
    /// (negative base with fractional exponent, division by zero in polynomial terms)
    /// are not trapped and come out as NaN or infinity.
    ///
    /// # Errors
    /// `SymbolicError::Lookup` if a variable of the expression is not assigned.
    pub fn evaluate(&self, assignments: &Assignments) -> Result<f64, SymbolicError> {
        match self {
            Expr::Const(val) => Ok(*val),
            Expr::Var(var) => assignments.lookup(var),
            Expr::Add(lhs, rhs) => {
                let lhs_val = lhs.evaluate(assignments)?;
                let rhs_val = rhs.evaluate(assignments)?;
                Ok(lhs_val + rhs_val)
            }
            Expr::Sub(lhs, rhs) => {
                let lhs_val = lhs.evaluate(assignments)?;
                let rhs_val = rhs.evaluate(assignments)?;
                Ok(lhs_val - rhs_val)
            }
            Expr::Mul(lhs, rhs) => {
                let lhs_val = lhs.evaluate(assignments)?;
                let rhs_val = rhs.evaluate(assignments)?;
                Ok(lhs_val * rhs_val)
            }
            Expr::Pow(base, p) => {
                let base_val = base.evaluate(assignments)?;
                Ok(base_val.powf(*p))
            }
            Expr::Polynomial(poly) => poly.evaluate(assignments),
        }
    }

    /// NUMERICAL CONTROL

    /// Compares the analytical derivative with a central finite difference on a grid of
    /// `num_values` points from `start` to `end`. Other variables are taken from
    /// `assignments`. Returns the maximal absolute deviation and whether it is below `max_norm`.
    #[allow(non_snake_case)]
    pub fn compare_num1D(
        &self,
        var: &Variable,
        assignments: &Assignments,
        start: f64,
        end: f64,
        num_values: usize,
        max_norm: f64,
    ) -> Result<(f64, bool), SymbolicError> {
        let h = 1e-6;
        let derivative = self.diff(var);
        let mut scratch = assignments.clone();
        let mut norm: f64 = 0.0;
        for x in linspace(start, end, num_values) {
            scratch.upsert(var, x);
            let analytical = derivative.evaluate(&scratch)?;
            scratch.upsert(var, x + h);
            let forward = self.evaluate(&scratch)?;
            scratch.upsert(var, x - h);
            let backward = self.evaluate(&scratch)?;
            let numerical = (forward - backward) / (2.0 * h);
            norm = norm.max((analytical - numerical).abs());
        }
        Ok((norm, norm < max_norm))
    }
}
