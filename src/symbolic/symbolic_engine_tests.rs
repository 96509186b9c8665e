// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
//___________________________________TESTS____________________________________

#[cfg(test)]
mod tests {
    use crate::error::SymbolicError;
    use crate::symbolic::assignments::{Assignments, ValueAssignment};
    use crate::symbolic::polynomial::Polynomial;
    use crate::symbolic::symbolic_engine::{Expr, Variable};
    use crate::symbols;
    use approx::assert_relative_eq;

    fn x_var() -> Variable {
        Variable::new("x")
    }

    fn y_var() -> Variable {
        Variable::new("y")
    }

    fn assign(pairs: &[(&str, f64)]) -> Assignments {
        pairs
            .iter()
            .map(|(name, value)| ValueAssignment::new(Variable::new(name), *value))
            .collect()
    }

    //___________________________________CONSTRUCTION____________________________________

    #[test]
    fn test_operators_build_nodes() {
        let (x, y) = symbols!(x, y);
        let expected = Expr::Add(
            Box::new(Expr::Mul(Box::new(x.clone()), Box::new(y.clone()))),
            Box::new(Expr::Pow(Box::new(x.clone()), 2.0)),
        );
        assert_eq!(x.clone() * y.clone() + (x.clone() ^ 2.0), expected);
        assert_eq!(
            Expr::add(Expr::mul(x.clone(), y.clone()), x.clone().pow(2.0)),
            expected
        );
        assert_eq!(
            x.clone() - y.clone(),
            Expr::Sub(Box::new(x.clone()), Box::new(y))
        );
    }

    #[test]
    fn test_constants_are_not_folded() {
        let sum = Expr::Const(2.0) + Expr::Const(3.0);
        assert_eq!(
            sum,
            Expr::Add(Box::new(Expr::Const(2.0)), Box::new(Expr::Const(3.0)))
        );
        let plus_zero = Expr::var("x") + Expr::Const(0.0);
        assert_eq!(plus_zero.to_string(), "(x+0.0)");
    }

    #[test]
    fn test_symbols() {
        let vars = Expr::Symbols("x, y, ,z");
        assert_eq!(vars, vec![Expr::var("x"), Expr::var("y"), Expr::var("z")]);
    }

    #[test]
    fn test_polynomial_constructor() {
        let p = Expr::polynomial(x_var(), vec![1.0, 2.0]).unwrap();
        assert!(matches!(p, Expr::Polynomial(_)));
        assert!(matches!(
            Expr::polynomial(x_var(), vec![]),
            Err(SymbolicError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_all_arguments_are_variables() {
        let p = Expr::polynomial(Variable::new("t"), vec![1.0, 1.0]).unwrap();
        let f = Expr::var("y") * Expr::var("x") + (Expr::var("x") ^ 3.0) - p;
        assert_eq!(f.all_arguments_are_variables(), vec!["t", "x", "y"]);
        assert!(Expr::Const(1.0).all_arguments_are_variables().is_empty());
    }

    //___________________________________EQUALITY____________________________________

    #[test]
    fn test_structural_equality() {
        let samples = vec![
            Expr::Const(1.0),
            Expr::var("x"),
            Expr::var("x") + Expr::Const(1.0),
            Expr::var("x") - Expr::Const(1.0),
            Expr::var("x") * Expr::Const(1.0),
            Expr::var("x") ^ 1.0,
            Expr::polynomial(x_var(), vec![1.0]).unwrap(),
        ];
        for (i, a) in samples.iter().enumerate() {
            assert_eq!(a, &a.clone());
            for (j, b) in samples.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "{} vs {}", a, b);
                }
            }
        }
        assert_ne!(Expr::Const(1.0), Expr::var("x"));
        assert_ne!(Expr::var("x"), Expr::var("y"));
        assert_ne!(Expr::var("x") ^ 2.0, Expr::var("x") ^ 3.0);
    }

    //___________________________________EVALUATION____________________________________

    #[test]
    fn test_evaluate_leaves() {
        let empty = Assignments::new();
        assert_eq!(Expr::Const(4.5).evaluate(&empty), Ok(4.5));
        let a = assign(&[("x", 2.0)]);
        assert_eq!(Expr::var("x").evaluate(&a), Ok(2.0));
    }

    #[test]
    fn test_evaluate_operations() {
        let (x, y) = symbols!(x, y);
        let a = assign(&[("x", 3.0), ("y", 0.5)]);
        assert_relative_eq!((x.clone() + y.clone()).evaluate(&a).unwrap(), 3.5);
        assert_relative_eq!((x.clone() - y.clone()).evaluate(&a).unwrap(), 2.5);
        assert_relative_eq!((x.clone() * y.clone()).evaluate(&a).unwrap(), 1.5);
        assert_relative_eq!((x.clone() ^ 2.0).evaluate(&a).unwrap(), 9.0);
        assert_relative_eq!((y.clone() ^ -1.0).evaluate(&a).unwrap(), 2.0);
        assert_relative_eq!((x ^ 0.5).evaluate(&a).unwrap(), 3.0_f64.sqrt());
    }

    #[test]
    fn test_evaluate_missing_variable() {
        let x = Expr::var("x");
        assert_eq!(
            x.evaluate(&Assignments::new()),
            Err(SymbolicError::Lookup("x".to_string()))
        );
        // no short-circuit: the unbound right operand fails even after a zero left operand
        let f = Expr::Const(0.0) * Expr::var("y");
        assert_eq!(
            f.evaluate(&assign(&[("x", 1.0)])),
            Err(SymbolicError::Lookup("y".to_string()))
        );
    }

    #[test]
    fn test_evaluate_domain_errors_propagate() {
        let a = assign(&[("x", -8.0)]);
        let root = Expr::var("x") ^ 0.5;
        assert!(root.evaluate(&a).unwrap().is_nan());
        let f = root + Expr::Const(1.0);
        assert!(f.evaluate(&a).unwrap().is_nan());
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let (x, y) = symbols!(x, y);
        let f = (x.clone() * y.clone() - (x ^ 3.0)) * (y + Expr::Const(2.0));
        let a = assign(&[("x", 1.25), ("y", -0.75)]);
        let first = f.evaluate(&a).unwrap();
        for _ in 0..10 {
            assert_eq!(f.evaluate(&a).unwrap(), first);
        }
    }

    #[test]
    fn test_evaluate_polynomial_in_tree() {
        let p = Expr::polynomial(x_var(), vec![-4.0, 0.0, 1.0]).unwrap();
        let f = p * Expr::Const(2.0);
        assert_relative_eq!(f.evaluate(&assign(&[("x", 4.0)])).unwrap(), 6.0);
    }

    //___________________________________DIFFERENTIATION____________________________________

    #[test]
    fn test_diff_leaves() {
        for v in [x_var(), y_var()] {
            assert_eq!(Expr::Const(7.0).diff(&v), Expr::Const(0.0));
        }
        assert_eq!(Expr::var("x").diff(&x_var()), Expr::Const(1.0));
        assert_eq!(Expr::var("x").diff(&y_var()), Expr::Const(0.0));
    }

    #[test]
    fn test_diff_linearity() {
        let (x, y) = symbols!(x, y);
        assert_eq!(
            (x.clone() + y.clone()).diff(&x_var()),
            Expr::Const(1.0) + Expr::Const(0.0)
        );
        assert_eq!(
            (x - y).diff(&y_var()),
            Expr::Const(0.0) - Expr::Const(1.0)
        );
    }

    #[test]
    fn test_diff_product_rule() {
        let a = Expr::var("x") ^ 2.0;
        let b = Expr::var("y") + Expr::var("x");
        let v = x_var();
        let expected = Expr::Add(
            Box::new(Expr::Mul(Box::new(a.diff(&v)), Box::new(b.clone()))),
            Box::new(Expr::Mul(Box::new(a.clone()), Box::new(b.diff(&v)))),
        );
        assert_eq!((a * b).diff(&v), expected);
    }

    #[test]
    fn test_diff_power_chain_rule() {
        let x = Expr::var("x");
        let f = x.clone() ^ 3.0;
        let expected = Expr::Mul(
            Box::new(Expr::Mul(
                Box::new(Expr::Const(3.0)),
                Box::new(Expr::Pow(Box::new(x.clone()), 2.0)),
            )),
            Box::new(Expr::Const(1.0)),
        );
        assert_eq!(f.diff(&x_var()), expected);
        assert_eq!(f.diff(&x_var()).to_string(), "((3.0*(x^2.0))*1.0)");

        // (2x)^2 -> 2*(2x)^1 * d(2x)
        let g = (Expr::Const(2.0) * x) ^ 2.0;
        let dg = g.diff(&x_var());
        assert_relative_eq!(dg.evaluate(&assign(&[("x", 1.5)])).unwrap(), 12.0);
    }

    #[test]
    fn test_diff_polynomial() {
        let p = Expr::polynomial(x_var(), vec![7.0, 3.0, -2.0, 4.0]).unwrap();
        let expected = Expr::polynomial(x_var(), vec![3.0, -4.0, 12.0]).unwrap();
        assert_eq!(p.diff(&x_var()), expected);
        // the polynomial keeps its own variable
        assert_eq!(p.diff(&y_var()), expected);
    }

    #[test]
    fn test_diff_does_not_touch_original() {
        let f = Expr::var("x") * Expr::var("x");
        let copy = f.clone();
        let _ = f.diff(&x_var());
        let _ = f.diff(&y_var());
        assert_eq!(f, copy);
    }

    #[test]
    fn test_n_th_derivative() {
        let f = Expr::var("x") ^ 4.0;
        let d2 = f.n_th_derivative1D(&x_var(), 2);
        // 12 x^2
        assert_relative_eq!(d2.evaluate(&assign(&[("x", 2.0)])).unwrap(), 48.0);
        assert_eq!(f.n_th_derivative1D(&x_var(), 0), f);
    }

    #[test]
    fn test_compare_num1D() {
        let (x, y) = symbols!(x, y);
        let f = x.clone() * x.clone() * y + (x ^ 3.0);
        let a = assign(&[("y", 2.0)]);
        let (norm, ok) = f
            .compare_num1D(&x_var(), &a, 0.5, 2.0, 20, 1e-4)
            .unwrap();
        assert!(ok, "norm = {}", norm);
    }

    #[test]
    fn test_compare_num1D_exposes_polynomial_shift() {
        // evaluation uses x^(i-1), differentiation assumes x^i
        let p = Expr::polynomial(x_var(), vec![0.0, 0.0, 1.0]).unwrap();
        let (_, ok) = p
            .compare_num1D(&x_var(), &Assignments::new(), 1.0, 3.0, 10, 1e-4)
            .unwrap();
        assert!(!ok);
    }

    //___________________________________PRINTING____________________________________

    #[test]
    fn test_display() {
        let sum = Expr::Const(2.0) + Expr::Const(3.0);
        assert_eq!(sum.to_string(), "(2.0+3.0)");
        assert_eq!(Expr::var("velocity").to_string(), "velocity");
        assert_eq!(Expr::Const(-0.25).to_string(), "-0.25");
        let f = (Expr::var("x") - Expr::var("y")) * (Expr::var("x") ^ 2.5);
        assert_eq!(f.to_string(), "((x-y)*(x^2.5))");
        assert_eq!(f.sym_to_str(), f.to_string());
        let p = Polynomial::new(x_var(), vec![-4.0, 0.0, 1.0]).unwrap();
        let g = Expr::from(p) + Expr::from(y_var());
        assert_eq!(g.to_string(), "((1.0x^2-4.0)+y)");
    }
}
