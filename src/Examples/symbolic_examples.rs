// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_snake_case)]

use crate::error::SymbolicError;
use crate::numerical::NR_polynomial::{NRPolynomial, RootFinderConfig};
use crate::symbolic::assignments::{Assignments, ValueAssignment};
use crate::symbolic::polynomial::Polynomial;
use crate::symbolic::symbolic_engine::{Expr, Variable};
use crate::symbols;
use log::info;

/// runs one of the examples; returns the error of the failed step if any
pub fn sym_examples(example: usize) -> Result<(), SymbolicError> {
    match example {
        0 => {
            // FUNCTION OF MULTIPLE VARIABLES
            // build symbolic expression with operators
            let (x, y) = symbols!(x, y);
            let f = x.clone() * y.clone() + (x.clone() ^ 2.0) - Expr::Const(1.0);
            info!("f = {}", f);
            // differentiate with respect to x and y
            let df_dx = f.diff(&Variable::new("x"));
            let df_dy = f.diff(&Variable::new("y"));
            info!("df_dx = {}, df_dy = {}", df_dx, df_dy);
            // evaluate function and derivatives
            let mut assignments = Assignments::new();
            assignments += ValueAssignment::new(Variable::new("x"), 1.0);
            assignments += ValueAssignment::new(Variable::new("y"), 2.0);
            info!(
                "f(1, 2) = {}, df_dx(1, 2) = {}, df_dy(1, 2) = {}",
                f.evaluate(&assignments)?,
                df_dx.evaluate(&assignments)?,
                df_dy.evaluate(&assignments)?
            );
            info!(
                "all arguments are variables {:?}",
                f.all_arguments_are_variables()
            );
            Ok(())
        }
        1 => {
            //  FUNCTION OF 1 VARIABLE
            let x = Variable::new("x");
            let f = (Expr::Var(x.clone()) ^ 3.0) * Expr::Const(2.0) + Expr::Var(x.clone());
            let d2f = f.n_th_derivative1D(&x, 2);
            info!("f = {}, f'' = {}", f, d2f);
            // compare numerical and analtical derivatives on a grid of points
            // a norm of the difference between the two of them is returned, and the answer is true if the norm is below max_norm
            let (norm, res) = f.compare_num1D(&x, &Assignments::new(), 0.0, 10.0, 100, 1e-3)?;
            info!("norm = {}, res = {}", norm, res);
            // evaluation of unassigned variable is an error
            match f.evaluate(&Assignments::new()) {
                Err(e) => info!("expected error: {}", e),
                Ok(value) => info!("unexpected value {}", value),
            }
            Ok(())
        }
        2 => {
            // POLYNOMIAL AND ROOT FINDING
            let p = Polynomial::new(Variable::new("x"), vec![-4.0, 0.0, 1.0])?;
            info!("p = {}, dp/dx = {}", p, p.derivative());
            let root = p.find_root_default()?;
            info!("root of {} = {}", p, root);
            Ok(())
        }
        3 => {
            // ROOT FINDING WITH SETTINGS FROM TOML DOCUMENT
            let config = RootFinderConfig::from_toml_str(
                r#"
                [newton]
                tolerance = 1e-8
                max_iterations = 40
                initial_guess = -1.0
                loglevel = "info"
                "#,
            )?;
            let p = Polynomial::new(Variable::new("x"), vec![-9.0, 0.0, 1.0])?;
            let mut NR_instanse = NRPolynomial::with_config(p, config);
            let root = NR_instanse.solve()?;
            info!("root = {}, statistics {:?}", root, NR_instanse.get_statistics());
            Ok(())
        }
        _ => {
            info!("example not found");
            Ok(())
        }
    }
}
