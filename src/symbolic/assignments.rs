// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
//! Assignments: the store of current numerical values of variables.
//!
//! At most one value per variable name; a later assignment to the same name
//! replaces the earlier one. Evaluation only reads from the store.
//! ```rust, ignore
//! let x = Variable::new("x");
//! let mut assignments = Assignments::new();
//! assignments += ValueAssignment::new(x.clone(), 2.0);
//! assert_eq!(assignments.lookup(&x).unwrap(), 2.0);
//! ```

use crate::error::SymbolicError;
use crate::symbolic::symbolic_engine::Variable;
use crate::symbolic::utils::format_float;
use std::collections::HashMap;
use std::fmt;

/// single pair variable=value
#[derive(Clone, Debug, PartialEq)]
pub struct ValueAssignment {
    var: Variable,
    value: f64,
}

impl ValueAssignment {
    pub fn new(var: Variable, value: f64) -> ValueAssignment {
        ValueAssignment { var, value }
    }

    pub fn get_var(&self) -> &Variable {
        &self.var
    }

    pub fn get_value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }
}

impl fmt::Display for ValueAssignment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}={}", self.var, format_float(self.value))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Assignments {
    values: HashMap<String, f64>,
}

impl Assignments {
    pub fn new() -> Assignments {
        Assignments {
            values: HashMap::new(),
        }
    }

    /// value of the variable, or `SymbolicError::Lookup` if it was never assigned
    pub fn lookup(&self, var: &Variable) -> Result<f64, SymbolicError> {
        self.values
            .get(var.get_name())
            .copied()
            .ok_or_else(|| SymbolicError::Lookup(var.get_name().to_string()))
    }

    /// insert or overwrite the value of the variable
    pub fn upsert(&mut self, var: &Variable, value: f64) {
        self.values.insert(var.get_name().to_string(), value);
    }

    pub fn contains(&self, var: &Variable) -> bool {
        self.values.contains_key(var.get_name())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl std::ops::AddAssign<ValueAssignment> for Assignments {
    fn add_assign(&mut self, assignment: ValueAssignment) {
        self.upsert(&assignment.var, assignment.value);
    }
}

/// Panics if the variable is not assigned; use `lookup` for the fallible version.
impl std::ops::Index<&Variable> for Assignments {
    type Output = f64;

    fn index(&self, var: &Variable) -> &Self::Output {
        match self.values.get(var.get_name()) {
            Some(value) => value,
            None => panic!("Variable '{}' is not assigned", var),
        }
    }
}

impl FromIterator<ValueAssignment> for Assignments {
    fn from_iter<I: IntoIterator<Item = ValueAssignment>>(iter: I) -> Self {
        let mut assignments = Assignments::new();
        for assignment in iter {
            assignments += assignment;
        }
        assignments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_and_upsert() {
        let x = Variable::new("x");
        let mut assignments = Assignments::new();
        assert!(assignments.is_empty());
        assignments.upsert(&x, 1.5);
        assert_eq!(assignments.lookup(&x), Ok(1.5));
        assignments.upsert(&x, -3.0);
        assert_eq!(assignments.lookup(&x), Ok(-3.0));
        assert_eq!(assignments.len(), 1);
    }

    #[test]
    fn test_missing_variable() {
        let assignments = Assignments::new();
        let y = Variable::new("y");
        assert_eq!(
            assignments.lookup(&y),
            Err(SymbolicError::Lookup("y".to_string()))
        );
        assert!(!assignments.contains(&y));
    }

    #[test]
    fn test_add_assign_overwrites() {
        let x = Variable::new("x");
        let mut assignments = Assignments::new();
        assignments += ValueAssignment::new(x.clone(), 1.0);
        assignments += ValueAssignment::new(x.clone(), 4.0);
        assert_eq!(assignments[&x], 4.0);
        assert_eq!(assignments.len(), 1);
    }

    #[test]
    #[should_panic(expected = "is not assigned")]
    fn test_index_panics_on_missing() {
        let assignments = Assignments::new();
        let _ = assignments[&Variable::new("z")];
    }

    #[test]
    fn test_value_assignment() {
        let mut assignment = ValueAssignment::new(Variable::new("x"), 2.0);
        assert_eq!(assignment.to_string(), "x=2.0");
        assignment.set_value(0.25);
        assert_eq!(assignment.get_value(), 0.25);
        assert_eq!(assignment.get_var().get_name(), "x");
    }

    #[test]
    fn test_from_iterator() {
        let assignments: Assignments = vec![
            ValueAssignment::new(Variable::new("x"), 1.0),
            ValueAssignment::new(Variable::new("y"), 2.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(assignments.len(), 2);
        let mut names: Vec<&str> = assignments.iter().map(|(name, _)| name).collect();
        names.sort();
        assert_eq!(names, vec!["x", "y"]);
    }
}
