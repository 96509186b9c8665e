// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
//! # Symbolic Engine Module
//!
//! Core expression tree of the crate: variables, constants, the three binary
//! arithmetic operations, constant powers and univariate polynomials.
//!
//! ## Main Structures
//!
//! ### `Variable`
//! Named identifier. Equality and hashing go by name only.
//!
//! ### `Expr` Enum
//! - **Leaves**: `Const(f64)`, `Var(Variable)`, `Polynomial(Polynomial)`
//! - **Operations**: `Add`, `Sub`, `Mul` over two subexpressions, `Pow` of a subexpression to a constant exponent
//!
//! ## Interesting Code Features
//!
//! 1. **Recursive Expression Tree**: children are owned through `Box<Expr>`, so every tree is
//!    strictly a tree, and combining expressions always allocates a new parent node
//!
//! 2. **Operator Overloading**: `std::ops::{Add, Sub, Mul}` between expressions and `^` (`BitXor<f64>`)
//!    for constant powers, so `x.clone() * y + (x ^ 2.0)` builds a tree without naming variants.
//!    Note that `^` binds weaker than `+` in Rust, so wrap power terms in parentheses
//!
//! 3. **No simplification**: `x + 0` stays `(x+0.0)`; constants are never folded
//!
//! 4. **Macro**: `symbols!(x, y)` for ergonomic variable creation

use crate::error::SymbolicError;
use crate::symbolic::polynomial::Polynomial;
use crate::symbolic::utils::format_float;
use std::fmt;

/// Symbolic variable, identified by its name
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable {
    name: String,
}

impl Variable {
    pub fn new(name: &str) -> Variable {
        Variable {
            name: name.to_string(),
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<&str> for Variable {
    fn from(name: &str) -> Self {
        Variable::new(name)
    }
}

/// Core symbolic expression enum representing arithmetic expressions as an abstract syntax tree.
///
/// Equality is structural and variant-exact: `Const(1.0)` never equals `Var(x)`.
///
/// # Examples
/// ```rust, ignore
/// use symbolic_engine::{Expr, Variable};
/// let x = Expr::var("x");
/// let expr = Expr::Add(Box::new(x), Box::new(Expr::Const(2.0)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Numerical constant value
    Const(f64),
    /// Reference to a symbolic variable
    Var(Variable),
    /// Addition operation: left + right
    Add(Box<Expr>, Box<Expr>),
    /// Subtraction operation: left - right
    Sub(Box<Expr>, Box<Expr>),
    /// Multiplication operation: left * right
    Mul(Box<Expr>, Box<Expr>),
    /// Power operation with a constant exponent: base ^ p
    Pow(Box<Expr>, f64),
    /// Univariate polynomial, coefficients indexed by power
    Polynomial(Polynomial),
}

/// Fully parenthesized infix notation, e.g. `((x+2.0)*(y^3.0))`
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Const(val) => write!(f, "{}", format_float(*val)),
            Expr::Var(var) => write!(f, "{}", var),
            Expr::Add(lhs, rhs) => write!(f, "({}+{})", lhs, rhs),
            Expr::Sub(lhs, rhs) => write!(f, "({}-{})", lhs, rhs),
            Expr::Mul(lhs, rhs) => write!(f, "({}*{})", lhs, rhs),
            Expr::Pow(base, p) => write!(f, "({}^{})", base, format_float(*p)),
            Expr::Polynomial(poly) => write!(f, "{}", poly),
        }
    }
}

impl std::ops::Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::Add(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::Sub(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::Mul(self.boxed(), rhs.boxed())
    }
}

/// `expr ^ p` builds `Pow(expr, p)`. Only defined for an `f64` exponent.
impl std::ops::BitXor<f64> for Expr {
    type Output = Self;

    fn bitxor(self, p: f64) -> Self::Output {
        Expr::Pow(self.boxed(), p)
    }
}

impl From<Variable> for Expr {
    fn from(var: Variable) -> Self {
        Expr::Var(var)
    }
}

impl From<Polynomial> for Expr {
    fn from(poly: Polynomial) -> Self {
        Expr::Polynomial(poly)
    }
}

impl Expr {
    /// BASIC FEATURES

    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    /// variable expression from a name
    pub fn var(name: &str) -> Expr {
        Expr::Var(Variable::new(name))
    }

    /// Creates multiple symbolic variables from a comma-separated string.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let vars = Expr::Symbols("x, y, z");
    /// assert_eq!(vars.len(), 3);
    /// ```
    #[allow(non_snake_case)]
    pub fn Symbols(symbols: &str) -> Vec<Expr> {
        symbols
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(Expr::var)
            .collect()
    }

    pub fn add(lhs: Expr, rhs: Expr) -> Expr {
        Expr::Add(lhs.boxed(), rhs.boxed())
    }

    pub fn sub(lhs: Expr, rhs: Expr) -> Expr {
        Expr::Sub(lhs.boxed(), rhs.boxed())
    }

    pub fn mul(lhs: Expr, rhs: Expr) -> Expr {
        Expr::Mul(lhs.boxed(), rhs.boxed())
    }

    /// method form of `expr ^ p`
    pub fn pow(self, p: f64) -> Expr {
        Expr::Pow(self.boxed(), p)
    }

    /// Polynomial expression over `var`; fails on an empty coefficient vector
    pub fn polynomial(var: Variable, coefficients: Vec<f64>) -> Result<Expr, SymbolicError> {
        Ok(Expr::Polynomial(Polynomial::new(var, coefficients)?))
    }

    /// turn the expression into a human-readable string, same as `Display`
    pub fn sym_to_str(&self) -> String {
        self.to_string()
    }

    /// Collects the names of all variables the expression depends on, sorted and deduplicated.
    /// Needed to know which assignments an evaluation requires.
    pub fn all_arguments_are_variables(&self) -> Vec<String> {
        let mut vars = Vec::new();
        self.collect_variables(&mut vars);
        vars.sort();
        vars.dedup();
        vars
    }

    fn collect_variables(&self, vars: &mut Vec<String>) {
        match self {
            Expr::Const(_) => {}
            Expr::Var(var) => vars.push(var.get_name().to_string()),
            Expr::Add(lhs, rhs) | Expr::Sub(lhs, rhs) | Expr::Mul(lhs, rhs) => {
                lhs.collect_variables(vars);
                rhs.collect_variables(vars);
            }
            Expr::Pow(base, _) => base.collect_variables(vars),
            Expr::Polynomial(poly) => vars.push(poly.get_var().get_name().to_string()),
        }
    }
}

//___________________________________MACROS____________________________________

/// Macro to create symbolic variables from a comma-separated list
/// Usage: symbols!(x, y, z) -> creates variable expressions x, y, z
#[macro_export]
macro_rules! symbols {
    ($($var:ident),+ $(,)?) => {
        ($(
            $crate::symbolic::symbolic_engine::Expr::var(stringify!($var))
        ),+)
    };
}
