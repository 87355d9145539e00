//! Named, kind-tagged runtime values.
//!
//! A [`Tag`] is a named value carrying a [`Kind`]. Tags are built from
//! dynamic [`Value`]s or parsed from strings through a [`Spec`], and looked
//! up by name in a [`TagSet`]. A [`MetaSet`] holds bare values with typed,
//! widening getters.
//!
//! # Dispatch
//!
//! The [`Registry`] maps kinds to specs and native types to kinds, so
//! [`create_tag`] picks the right builtin from the runtime type of its
//! argument:
//!
//! ```
//! use nomix::{create_tag, Kind, Value};
//!
//! let tag = create_tag("A", 42i32)?;
//! assert_eq!(tag.tag_kind(), Kind::INT64);
//! assert_eq!(tag.tag_value(), Value::Int64(42));
//! # Ok::<(), nomix::Error>(())
//! ```
//!
//! # Builtin kinds
//!
//! Every builtin kind lives in [`kinds`] with its constructors and spec.
//! String and number conversions shared between kinds live in [`convert`].

pub mod convert;
mod definition;
mod error;
mod kind;
pub mod kinds;
mod meta_set;
mod options;
mod registry;
mod rule;
mod single;
mod slice;
mod spec;
mod tag;
mod tag_set;
mod value;

pub use definition::Definition;
pub use error::{Error, ErrorKind, Result, RuleError};
pub use kind::Kind;
pub use kinds::{
    builtin_specs, Bool, BoolSlice, ByteSlice, Float64, Float64Slice, Int, Int64, Int64Slice,
    IntSlice, Json, Str, StringSlice, Time, TimeSlice, BUILTIN_TYPES,
};
pub use meta_set::{get_meta_value, MetaSet};
pub use options::{Options, Seed, DEFAULT_TIME_FORMAT};
pub use registry::{create_tag, registry, Registry};
pub use rule::{Rule, Rules};
pub use single::Single;
pub use slice::Slice;
pub use spec::{parse_not_implemented, CreateFn, ParseFn, Spec};
pub use tag::{BoxedTag, Flavor, Tag};
pub use tag_set::{get_tag, get_tag_value, TagSet};
pub use value::{Element, NativeType, RawJson, Timestamp, Value};
