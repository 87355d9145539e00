//! Error types.
//!
//! Every failure carries an [`ErrorKind`] that callers test with
//! [`Error::is`], and renders as `"<field>: <text>"` so the message always
//! names the offending tag. Message text is part of the contract.

use std::fmt;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Boxed error produced by an injected validation rule.
pub type RuleError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Category of a failure.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ErrorKind {
    /// A named entry does not exist in a set.
    #[error("missing element")]
    Missing,
    /// A value's runtime type is not what the operation requires.
    #[error("invalid element type")]
    InvalidType,
    /// A string input is malformed for its target kind.
    #[error("invalid element format")]
    InvalidFormat,
    /// A value is out of range or rejected by a validation rule.
    #[error("invalid element value")]
    InvalidValue,
    /// No spec is associated with a native type.
    #[error("creator not found")]
    NoCreator,
    /// No spec is registered for a kind.
    #[error("spec not found")]
    NoSpec,
    /// The operation is intentionally unsupported for a kind.
    #[error("not implemented")]
    NotImplemented,
    /// A spec for the kind is already registered.
    #[error("spec already registered")]
    AlreadyRegistered,
}

/// Library error.
///
/// Built from an [`ErrorKind`], optionally narrowed with a detail message and
/// prefixed with the name of the field (tag) it concerns.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    field: Option<String>,
    detail: Option<String>,
    source: Option<RuleError>,
}

impl Error {
    /// Create an error of the given kind with its default text.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            field: None,
            detail: None,
            source: None,
        }
    }

    /// Create an error with a custom message in place of the kind's text.
    pub fn with_detail(kind: ErrorKind, detail: impl Into<String>) -> Self {
        Self {
            detail: Some(detail.into()),
            ..Self::new(kind)
        }
    }

    /// Wrap a rule failure as an `InvalidValue` error on `field`.
    ///
    /// The rule's message becomes the detail, so the result renders as
    /// `"<field>: <rule message>"`.
    pub fn field(field: &str, err: RuleError) -> Self {
        Self {
            kind: ErrorKind::InvalidValue,
            field: Some(field.to_owned()),
            detail: Some(err.to_string()),
            source: Some(err),
        }
    }

    /// Prefix the error with a field name.
    ///
    /// Applying it twice nests the names: `"outer: inner: text"`.
    #[must_use]
    pub fn in_field(mut self, name: &str) -> Self {
        self.field = Some(match self.field.take() {
            Some(inner) => format!("{name}: {inner}"),
            None => name.to_owned(),
        });
        self
    }

    /// The category of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Check the category of this error.
    #[inline]
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }

    /// The field (tag name) the error concerns, if any.
    pub fn field_name(&self) -> Option<&str> {
        self.field.as_deref()
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "{field}: ")?;
        }
        match &self.detail {
            Some(detail) => f.write_str(detail),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|err| err as &(dyn std::error::Error + 'static))
    }
}
