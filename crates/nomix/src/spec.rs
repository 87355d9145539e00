//! Kind specs: a kind bundled with how to create and parse its tags.

use std::fmt;

use crate::{BoxedTag, Error, ErrorKind, Kind, Options, Result, Value};

/// Creates a tag from a dynamic value.
pub type CreateFn = fn(&str, Value, &Options) -> Result<BoxedTag>;

/// Parses a tag from its string form.
pub type ParseFn = fn(&str, &str, &Options) -> Result<BoxedTag>;

/// A kind with its creation and parsing functions.
///
/// `Spec::default()` is the zero spec returned on registry misses; calling
/// it fails with `NotImplemented`.
#[derive(Copy, Clone, Default)]
pub struct Spec {
    kind: Kind,
    create: Option<CreateFn>,
    parse: Option<ParseFn>,
}

impl Spec {
    pub const fn new(kind: Kind, create: CreateFn, parse: ParseFn) -> Self {
        Self {
            kind,
            create: Some(create),
            parse: Some(parse),
        }
    }

    /// The kind this spec creates.
    #[inline]
    pub const fn tag_kind(&self) -> Kind {
        self.kind
    }

    /// Check for the zero spec.
    pub const fn is_zero(&self) -> bool {
        self.kind.is_empty() && self.create.is_none() && self.parse.is_none()
    }

    /// Create a tag named `name` from `value`.
    pub fn tag_create(&self, name: &str, value: Value, opts: &Options) -> Result<BoxedTag> {
        match self.create {
            Some(create) => create(name, value, opts),
            None => Err(Error::new(ErrorKind::NotImplemented).in_field(name)),
        }
    }

    /// Parse a tag named `name` from `s`.
    pub fn tag_parse(&self, name: &str, s: &str, opts: &Options) -> Result<BoxedTag> {
        match self.parse {
            Some(parse) => parse(name, s, opts),
            None => Err(Error::new(ErrorKind::NotImplemented).in_field(name)),
        }
    }
}

impl fmt::Debug for Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Spec")
            .field("kind", &self.kind)
            .field("create", &self.create.is_some())
            .field("parse", &self.parse.is_some())
            .finish()
    }
}

/// Parser for kinds without a string form.
pub fn parse_not_implemented(name: &str, _: &str, _: &Options) -> Result<BoxedTag> {
    Err(Error::with_detail(ErrorKind::NotImplemented, "tag parser not implemented").in_field(name))
}

#[cfg(test)]
mod tests;
