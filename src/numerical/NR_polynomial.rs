// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
//!  Example#1
//! ```
//! use RustedSymbolic::numerical::NR_polynomial::NRPolynomial;
//! use RustedSymbolic::symbolic::polynomial::Polynomial;
//! use RustedSymbolic::symbolic::symbolic_engine::Variable;
//!    let poly = Polynomial::new(Variable::new("x"), vec![-4.0, 0.0, 1.0]).unwrap();
//!    let mut NR_instanse = NRPolynomial::new(poly);
//!    NR_instanse
//!        .set_solver_params(Some(1e-6), Some(50), Some(1.0), Some("off"))
//!        .unwrap();
//!    let root = NR_instanse.solve().unwrap();
//!    assert!((root - 2.0).abs() < 1e-4);
//! ```
//! Example#2
//! ```
//! // solver settings from a TOML document
//! use RustedSymbolic::numerical::NR_polynomial::{NRPolynomial, RootFinderConfig};
//! use RustedSymbolic::symbolic::polynomial::Polynomial;
//! use RustedSymbolic::symbolic::symbolic_engine::Variable;
//!    let config = RootFinderConfig::from_toml_str(
//!        "[newton]\ntolerance = 1e-8\nmax_iterations = 30\nloglevel = \"off\"",
//!    )
//!    .unwrap();
//!    let poly = Polynomial::new(Variable::new("x"), vec![-9.0, 0.0, 1.0]).unwrap();
//!    let mut NR_instanse = NRPolynomial::with_config(poly, config);
//!    let root = NR_instanse.solve().unwrap();
//!    assert!((root - 3.0).abs() < 1e-6);
//! ```
use crate::error::SymbolicError;
use crate::symbolic::assignments::Assignments;
use crate::symbolic::polynomial::Polynomial;
use crate::symbolic::symbolic_engine::{Expr, Variable};
use chrono::Local;
use log::{debug, error, info};
use simplelog::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tabled::{builder::Builder, settings::Style};

pub const DEFAULT_TOLERANCE: f64 = 1e-4;
pub const DEFAULT_MAX_ITERATIONS: usize = 100;
pub const DEFAULT_INITIAL_GUESS: f64 = 1.0;

// every solve gets its own scratch variable
static SCRATCH_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn scratch_variable() -> Variable {
    let n = SCRATCH_COUNTER.fetch_add(1, Ordering::Relaxed);
    Variable::new(&format!("__nr_scratch_{}", n))
}

fn parse_loglevel(level: &str) -> Result<Option<LevelFilter>, SymbolicError> {
    match level {
        "off" | "none" => Ok(None),
        "debug" => Ok(Some(LevelFilter::Debug)),
        "info" => Ok(Some(LevelFilter::Info)),
        "warn" => Ok(Some(LevelFilter::Warn)),
        "error" => Ok(Some(LevelFilter::Error)),
        _ => Err(SymbolicError::InvalidArgument(format!(
            "loglevel must be debug, info, warn, error, off or none, got '{}'",
            level
        ))),
    }
}

/// settings of the Newton-Raphson root finder
#[derive(Clone, Debug, PartialEq)]
pub struct RootFinderConfig {
    pub tolerance: f64,        // admissible |f(x)| at the end of iterations
    pub max_iterations: usize, // fixed iteration budget
    pub initial_guess: f64,
    pub loglevel: String, // debug, info, warn, error, off/none
}

impl Default for RootFinderConfig {
    fn default() -> Self {
        RootFinderConfig {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            initial_guess: DEFAULT_INITIAL_GUESS,
            loglevel: "info".to_string(),
        }
    }
}

impl RootFinderConfig {
    pub fn validate(&self) -> Result<(), SymbolicError> {
        if self.tolerance.is_nan() || self.tolerance < 0.0 {
            return Err(SymbolicError::InvalidArgument(
                "Tolerance should be a non-negative number.".to_string(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(SymbolicError::InvalidArgument(
                "Max iterations should be a positive number.".to_string(),
            ));
        }
        if !self.initial_guess.is_finite() {
            return Err(SymbolicError::InvalidArgument(
                "Initial guess should be a finite number.".to_string(),
            ));
        }
        parse_loglevel(&self.loglevel)?;
        Ok(())
    }

    /// Reads the `[newton]` table of a TOML document. Missing keys keep default values,
    /// a document without the table gives the default config.
    /// ```toml
    /// [newton]
    /// tolerance = 1e-6
    /// max_iterations = 50
    /// initial_guess = 0.5
    /// loglevel = "warn"
    /// ```
    pub fn from_toml_str(document: &str) -> Result<RootFinderConfig, SymbolicError> {
        let table = document
            .parse::<toml::Table>()
            .map_err(|e| SymbolicError::InvalidArgument(format!("bad TOML document: {}", e)))?;
        let mut config = RootFinderConfig::default();
        let Some(section) = table.get("newton") else {
            return Ok(config);
        };
        let section = section.as_table().ok_or_else(|| {
            SymbolicError::InvalidArgument("[newton] must be a table".to_string())
        })?;
        let wrong_type = |key: &str, expected: &str| {
            SymbolicError::InvalidArgument(format!("newton.{} must be {}", key, expected))
        };
        if let Some(value) = section.get("tolerance") {
            config.tolerance = value
                .as_float()
                .or_else(|| value.as_integer().map(|i| i as f64))
                .ok_or_else(|| wrong_type("tolerance", "a number"))?;
        }
        if let Some(value) = section.get("max_iterations") {
            let n = value
                .as_integer()
                .ok_or_else(|| wrong_type("max_iterations", "an integer"))?;
            config.max_iterations =
                usize::try_from(n).map_err(|_| wrong_type("max_iterations", "non-negative"))?;
        }
        if let Some(value) = section.get("initial_guess") {
            config.initial_guess = value
                .as_float()
                .or_else(|| value.as_integer().map(|i| i as f64))
                .ok_or_else(|| wrong_type("initial_guess", "a number"))?;
        }
        if let Some(value) = section.get("loglevel") {
            config.loglevel = value
                .as_str()
                .ok_or_else(|| wrong_type("loglevel", "a string"))?
                .to_lowercase();
        }
        config.validate()?;
        Ok(config)
    }
}

/// Newton-Raphson root finder for `Polynomial`, using the polynomial's own evaluation rule
/// and its symbolic derivative.
pub struct NRPolynomial {
    pub polynomial: Polynomial,
    pub config: RootFinderConfig,
    pub i: usize,                // iteration counter
    pub result: Option<f64>,     // root of the last successful run
    pub residual: Option<f64>,   // |f(x)| at the end of the last run
    calc_statistics: HashMap<String, String>,
}

impl NRPolynomial {
    pub fn new(polynomial: Polynomial) -> NRPolynomial {
        NRPolynomial::with_config(polynomial, RootFinderConfig::default())
    }

    pub fn with_config(polynomial: Polynomial, config: RootFinderConfig) -> NRPolynomial {
        NRPolynomial {
            polynomial,
            config,
            i: 0,
            result: None,
            residual: None,
            calc_statistics: HashMap::new(),
        }
    }
    ////////////////////////////SETTERS///////////////////////////////////////////////////////////////////
    /// override only the parameters that are `Some`
    pub fn set_solver_params(
        &mut self,
        tolerance: Option<f64>,
        max_iterations: Option<usize>,
        initial_guess: Option<f64>,
        loglevel: Option<&str>,
    ) -> Result<(), SymbolicError> {
        let mut config = self.config.clone();
        if let Some(tolerance) = tolerance {
            config.tolerance = tolerance;
        }
        if let Some(max_iterations) = max_iterations {
            config.max_iterations = max_iterations;
        }
        if let Some(initial_guess) = initial_guess {
            config.initial_guess = initial_guess;
        }
        if let Some(level) = loglevel {
            config.loglevel = level.to_lowercase();
        }
        config.validate()?;
        self.config = config;
        Ok(())
    }
    /////////////////////////////////////////////////////////////////////////////////////////////
    //                ITERATIONS
    /////////////////////////////////////////////////////////////////////////////////////////////
    /// Runs exactly `max_iterations` updates x <- x - f(x)/f'(x), then accepts x if |f(x)| <= tolerance.
    /// A zero derivative is not trapped: the resulting NaN/inf fails the final check.
    pub fn main_loop(&mut self) -> Result<f64, SymbolicError> {
        let var = scratch_variable();
        let f = Expr::Polynomial(self.polynomial.with_variable(var.clone()));
        let df = f.diff(&var);
        let mut assignments = Assignments::new();
        assignments.upsert(&var, self.config.initial_guess);
        self.i = 0;
        self.result = None;
        while self.i < self.config.max_iterations {
            let x = assignments.lookup(&var)?;
            let fx = f.evaluate(&assignments)?;
            let dfx = df.evaluate(&assignments)?;
            let new_x = x - fx / dfx;
            assignments.upsert(&var, new_x);
            self.i += 1;
            debug!("iteration = {}, x = {}, f(x) = {}, f'(x) = {}", self.i, new_x, fx, dfx);
        }
        let residual = f.evaluate(&assignments)?.abs();
        self.residual = Some(residual);
        if residual <= self.config.tolerance {
            let root = assignments.lookup(&var)?;
            self.result = Some(root);
            info!("root = {} found after {} iterations", root, self.i);
            Ok(root)
        } else {
            error!(
                "Maximum number of iterations reached. No root found, |f(x)| = {}",
                residual
            );
            Err(SymbolicError::Convergence {
                iterations: self.i,
                residual,
            })
        }
    }
    ////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
    //                                       main functions to start the solver and caclulate statistics
    ////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
    pub fn solver(&mut self) -> Result<f64, SymbolicError> {
        info!("solving {} = 0", self.polynomial);
        let res = self.main_loop();
        self.calc_statistics(res.is_ok());
        res
    }

    /// wrapper around solver function to implement logging
    pub fn solve(&mut self) -> Result<f64, SymbolicError> {
        match parse_loglevel(&self.config.loglevel)? {
            None => self.solver(),
            Some(log_option) => {
                let logger_instance = CombinedLogger::init(vec![TermLogger::new(
                    log_option,
                    Config::default(),
                    TerminalMode::Mixed,
                    ColorChoice::Auto,
                )]);
                // a logger installed earlier in the process is reused
                if logger_instance.is_ok() {
                    info!(
                        "Program started at {} with loglevel: {}",
                        Local::now().format("%Y-%m-%d %H:%M:%S"),
                        log_option
                    );
                }
                let res = self.solver();
                info!("Program ended");
                res
            }
        }
    }

    pub fn get_result(&self) -> Option<f64> {
        self.result
    }

    pub fn get_statistics(&self) -> &HashMap<String, String> {
        &self.calc_statistics
    }

    fn calc_statistics(&mut self, converged: bool) {
        let mut stats = HashMap::new();
        stats.insert("number of iterations".to_string(), self.i.to_string());
        stats.insert(
            "polynomial degree".to_string(),
            self.polynomial.degree().to_string(),
        );
        stats.insert(
            "final |f(x)|".to_string(),
            self.residual.map_or("-".to_string(), |r| format!("{:e}", r)),
        );
        stats.insert("converged".to_string(), converged.to_string());
        let mut table = Builder::from(stats.clone()).build();
        table.with(Style::modern_rounded());
        info!("\n \n CALC STATISTICS \n \n {}", table.to_string());
        self.calc_statistics = stats;
    }
}
