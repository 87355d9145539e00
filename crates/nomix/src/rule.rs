//! Injected validation rules.
//!
//! The library never decides what a valid value is. Callers supply a
//! [`Rule`]; tags and definitions run it and wrap a failure as a field
//! error naming the tag.

use std::fmt;

use crate::{RuleError, Value};

/// A validation rule over a tag value.
pub trait Rule: Send + Sync {
    /// Check `value`, returning the reason it is rejected.
    fn validate(&self, value: &Value) -> Result<(), RuleError>;
}

impl<F> Rule for F
where
    F: Fn(&Value) -> Result<(), RuleError> + Send + Sync,
{
    fn validate(&self, value: &Value) -> Result<(), RuleError> {
        self(value)
    }
}

/// Rules evaluated in order; the first failure wins.
#[derive(Default)]
pub struct Rules {
    rules: Vec<Box<dyn Rule>>,
}

impl Rules {
    /// An empty rule set. Accepts every value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule.
    pub fn push(&mut self, rule: impl Rule + 'static) {
        self.rules.push(Box::new(rule));
    }

    /// Append a rule, builder style.
    #[must_use]
    pub fn with(mut self, rule: impl Rule + 'static) -> Self {
        self.push(rule);
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Rule for Rules {
    fn validate(&self, value: &Value) -> Result<(), RuleError> {
        self.rules.iter().try_for_each(|rule| rule.validate(value))
    }
}

impl fmt::Debug for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rules").field("len", &self.rules.len()).finish()
    }
}

#[cfg(test)]
mod tests;
