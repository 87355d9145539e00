//! Generic sequence tag.

use std::any::Any;
use std::fmt;

use crate::{BoxedTag, Element, Error, ErrorKind, Flavor, Kind, Result, Rule, Tag, Value};

/// A named tag holding a sequence of `T`.
///
/// Equality is element-wise and ordered; sequences of different length are
/// never equal.
#[derive(Clone)]
pub struct Slice<T>
where
    T: Clone + PartialEq + fmt::Debug + Send + Sync + 'static,
    Vec<T>: Element,
{
    name: String,
    value: Vec<T>,
    kind: Kind,
    flavor: &'static dyn Flavor<[T]>,
}

impl<T> Slice<T>
where
    T: Clone + PartialEq + fmt::Debug + Send + Sync + 'static,
    Vec<T>: Element,
{
    /// Create a tag, taking ownership of `value`.
    pub fn new(
        name: impl Into<String>,
        value: Vec<T>,
        kind: Kind,
        flavor: &'static dyn Flavor<[T]>,
    ) -> Self {
        Self {
            name: name.into(),
            value,
            kind,
            flavor,
        }
    }

    /// The elements.
    #[inline]
    pub fn get(&self) -> &[T] {
        &self.value
    }

    /// Replace the elements.
    #[inline]
    pub fn set(&mut self, value: Vec<T>) {
        self.value = value;
    }

    /// Consume the tag, returning its elements.
    pub fn into_inner(self) -> Vec<T> {
        self.value
    }
}

impl<T> Tag for Slice<T>
where
    T: Clone + PartialEq + fmt::Debug + Send + Sync + 'static,
    Vec<T>: Element,
{
    fn tag_name(&self) -> &str {
        &self.name
    }

    fn tag_kind(&self) -> Kind {
        self.kind
    }

    fn tag_value(&self) -> Value {
        self.value.clone().into_value()
    }

    fn tag_set(&mut self, value: Value) -> Result<()> {
        match Vec::<T>::from_value(value) {
            Ok(value) => {
                self.value = value;
                Ok(())
            }
            Err(_) => Err(Error::new(ErrorKind::InvalidType).in_field(&self.name)),
        }
    }

    fn tag_equal(&self, other: &dyn Tag) -> bool {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self.value == other.value)
    }

    fn tag_same(&self, other: &dyn Tag) -> bool {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self.name == other.name && self.value == other.value)
    }

    fn to_scalar(&self) -> Result<Value> {
        self.flavor
            .scalar(&self.value)
            .unwrap_or_else(|| Ok(self.tag_value()))
    }

    fn validate_with(&self, rule: &dyn Rule) -> Result<()> {
        rule.validate(&self.tag_value())
            .map_err(|err| Error::field(&self.name, err))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn clone_tag(&self) -> BoxedTag {
        Box::new(self.clone())
    }
}

impl<T> PartialEq for Slice<T>
where
    T: Clone + PartialEq + fmt::Debug + Send + Sync + 'static,
    Vec<T>: Element,
{
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.kind == other.kind && self.value == other.value
    }
}

impl<T> fmt::Display for Slice<T>
where
    T: Clone + PartialEq + fmt::Debug + Send + Sync + 'static,
    Vec<T>: Element,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.flavor.render(&self.value))
    }
}

impl<T> fmt::Debug for Slice<T>
where
    T: Clone + PartialEq + fmt::Debug + Send + Sync + 'static,
    Vec<T>: Element,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slice")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
