//! Named tag definitions with optional validation.

use crate::{BoxedTag, Kind, Options, Result, Rule, Rules, Spec, Value};

/// A tag name bound to a [`Spec`], with optional validation rules.
///
/// Immutable once built; create and parse calls always use the bound name.
#[derive(Debug)]
pub struct Definition {
    name: String,
    spec: Spec,
    rules: Rules,
}

impl Definition {
    pub fn new(name: impl Into<String>, spec: Spec) -> Self {
        Self {
            name: name.into(),
            spec,
            rules: Rules::new(),
        }
    }

    /// Add a validation rule. Rules run in the order added; the first
    /// failure wins.
    #[must_use]
    pub fn with_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(rule);
        self
    }

    /// The defined tag name.
    pub fn tag_name(&self) -> &str {
        &self.name
    }

    /// The kind of the bound spec.
    pub fn tag_kind(&self) -> Kind {
        self.spec.tag_kind()
    }

    /// The bound spec.
    pub fn spec(&self) -> Spec {
        self.spec
    }

    /// Create a tag from `value` and validate it.
    pub fn tag_create(&self, value: Value, opts: &Options) -> Result<BoxedTag> {
        let tag = self.spec.tag_create(&self.name, value, opts)?;
        self.check(tag)
    }

    /// Parse a tag from `s` and validate it.
    pub fn tag_parse(&self, s: &str, opts: &Options) -> Result<BoxedTag> {
        let tag = self.spec.tag_parse(&self.name, s, opts)?;
        self.check(tag)
    }

    /// Check that `value` would create a valid tag.
    pub fn validate(&self, value: Value, opts: &Options) -> Result<()> {
        self.tag_create(value, opts).map(drop)
    }

    fn check(&self, tag: BoxedTag) -> Result<BoxedTag> {
        if self.rules.is_empty() {
            return Ok(tag);
        }
        tag.validate_with(&self.rules)?;
        Ok(tag)
    }
}
