///  Example#1
/// ```
/// use RustedSymbolic::numerical::NR_polynomial::NRPolynomial;
/// use RustedSymbolic::symbolic::polynomial::Polynomial;
/// use RustedSymbolic::symbolic::symbolic_engine::Variable;
///    // define polynomial and solve with default settings: tolerance 1e-4, 100 iterations, initial guess 1.0
///    let poly = Polynomial::new(Variable::new("x"), vec![-4.0, 0.0, 1.0]).unwrap();
///    let mut NR_instanse = NRPolynomial::new(poly);
///    let root = NR_instanse.solve().unwrap();
///    println!("result = {:?} \n", NR_instanse.get_result());
///    assert!((root - 2.0).abs() < 1e-4);
///  ```
pub mod NR_polynomial;
