use levenshtein::levenshtein;
use std::collections::HashMap;
use super::value::Number;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A context to use when evaluating an expression, binding variable names to numbers.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<String, Number>,
}

impl Ctxt {
    /// Creates a new empty context.
    pub fn new() -> Ctxt {
        Ctxt::default()
    }

    /// Add a variable to the context, replacing any previous value bound to the same name.
    pub fn add_var(&mut self, name: &str, value: impl Into<Number>) {
        self.vars.insert(name.to_string(), value.into());
    }

    /// Get the value of a variable in the context.
    pub fn get_var(&self, name: &str) -> Option<&Number> {
        self.vars.get(name)
    }

    /// Remove a variable from the context, returning its value if it was bound.
    pub fn remove_var(&mut self, name: &str) -> Option<Number> {
        self.vars.remove(name)
    }

    /// Returns the variables in the context.
    pub fn get_vars(&self) -> &HashMap<String, Number> {
        &self.vars
    }

    /// Returns all variables in the context with a name similar to the given name, sorted by name.
    pub fn get_similar_vars(&self, name: &str) -> Vec<&str> {
        let mut similar = self.vars
            .keys()
            .filter(|n| levenshtein(n, name) < 2)
            .map(|n| n.as_str())
            .collect::<Vec<_>>();
        similar.sort_unstable();
        similar
    }
}

impl<S, N> FromIterator<(S, N)> for Ctxt
where
    S: Into<String>,
    N: Into<Number>,
{
    fn from_iter<I: IntoIterator<Item = (S, N)>>(iter: I) -> Self {
        Ctxt {
            vars: iter.into_iter().map(|(name, value)| (name.into(), value.into())).collect(),
        }
    }
}
