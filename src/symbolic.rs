#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
///____________________________________________________________________________________________________________________________
/// # Symbolic engine
/// a module
/// 1) builds symbolic expressions from variables, constants, arithmetic operators and polynomials
/// 2) differentiates them analytically
/// 3) evaluates them under assignments of variables
/// 4) turns a symbolic expression into a string expression for printing and control results
///# Example#
/// ```
/// use RustedSymbolic::symbolic::assignments::{Assignments, ValueAssignment};
/// use RustedSymbolic::symbolic::symbolic_engine::{Expr, Variable};
///   let x = Variable::new("x");
///   let y = Variable::new("y");
///   // x*y + x^2
///   let f = Expr::Var(x.clone()) * Expr::Var(y.clone()) + (Expr::Var(x.clone()) ^ 2.0);
///   println!("f = {}", f);
///   let df_dx = f.diff(&x);
///   println!("df_dx = {}", df_dx);
///   let mut assignments = Assignments::new();
///   assignments += ValueAssignment::new(x.clone(), 3.0);
///   assignments += ValueAssignment::new(y.clone(), 2.0);
///   assert_eq!(f.evaluate(&assignments).unwrap(), 15.0);
///   // d/dx = y + 2x
///   assert_eq!(df_dx.evaluate(&assignments).unwrap(), 8.0);
/// ```
/// ________________________________________________________________________________________________________________________________________________
pub mod symbolic_engine;
pub mod symbolic_engine_derivatives;
///________________________________________________________________________________________________________________________________________________
/// store of current values of variables used for evaluation
pub mod assignments;
///________________________________________________________________________________________________________________________________________________
/// univariate polynomial: evaluation, derivative, printing and root finding
/// Example#
/// ```
/// use RustedSymbolic::symbolic::polynomial::Polynomial;
/// use RustedSymbolic::symbolic::symbolic_engine::Variable;
///   let p = Polynomial::new(Variable::new("x"), vec![-4.0, 0.0, 1.0]).unwrap();
///   println!("p = {}", p); // (1.0x^2-4.0)
///   let root = p.find_root_default().unwrap();
///   assert!((root - 2.0).abs() < 1e-4);
/// ```
pub mod polynomial;
mod symbolic_engine_tests;
///______________________________________________________________________________________________________________________________________________
/// the collection of utility functions mainly for printing of numbers
/// _____________________________________________________________________________________________________________________________________________
pub mod utils;
