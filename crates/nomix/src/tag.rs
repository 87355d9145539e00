//! The `Tag` capability.
//!
//! A tag is a named value of a known [`Kind`]. Concrete tags are
//! [`Single<T>`](crate::Single) and [`Slice<T>`](crate::Slice); collections
//! hold them as [`BoxedTag`] and downcast back on typed access.

use std::any::Any;
use std::fmt;

use crate::{Kind, Result, Rule, Value};

/// Owned, type-erased tag.
pub type BoxedTag = Box<dyn Tag>;

/// A named, kind-typed value.
pub trait Tag: fmt::Display + fmt::Debug + Send + Sync + 'static {
    /// The tag name.
    fn tag_name(&self) -> &str;

    /// The tag kind.
    fn tag_kind(&self) -> Kind;

    /// The tag value as a dynamic [`Value`].
    fn tag_value(&self) -> Value;

    /// Replace the value.
    ///
    /// Fails with `InvalidType` unless `value` carries exactly the tag's
    /// payload type; the stored value is left unchanged on failure.
    fn tag_set(&mut self, value: Value) -> Result<()>;

    /// Value equality with a tag of the same concrete type.
    fn tag_equal(&self, other: &dyn Tag) -> bool;

    /// Like [`Tag::tag_equal`] but the names must match too.
    fn tag_same(&self, other: &dyn Tag) -> bool;

    /// Scalar form of the value for a downstream driver.
    fn to_scalar(&self) -> Result<Value>;

    /// Run `rule` against the value.
    fn validate_with(&self, rule: &dyn Rule) -> Result<()>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Clone into a new box.
    fn clone_tag(&self) -> BoxedTag;
}

impl dyn Tag {
    /// Check if the tag is a `T`.
    pub fn is<T: Tag>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Borrow the tag as a `T`.
    pub fn downcast_ref<T: Tag>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    /// Mutably borrow the tag as a `T`.
    pub fn downcast_mut<T: Tag>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut()
    }
}

impl Clone for BoxedTag {
    fn clone(&self) -> Self {
        self.clone_tag()
    }
}

/// Per-kind rendering and scalar strategy for a container.
///
/// Implemented once per kind by a zero-sized type behind a `static`, so a
/// container only stores a `&'static dyn Flavor<T>`.
pub trait Flavor<T: ?Sized>: Send + Sync {
    /// Render the value as a string.
    fn render(&self, value: &T) -> String;

    /// Scalar form of the value, or `None` to use the value unchanged.
    fn scalar(&self, _value: &T) -> Option<Result<Value>> {
        None
    }
}

/// Erase a freshly created tag.
pub(crate) fn boxed<T: Tag>(tag: Result<T>) -> Result<BoxedTag> {
    tag.map(|tag| Box::new(tag) as BoxedTag)
}
