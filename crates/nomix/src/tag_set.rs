//! Named collection of tags.

use rustc_hash::FxHashMap;

use crate::kinds::{
    Bool, BoolSlice, ByteSlice, Float64, Float64Slice, Int, Int64, Int64Slice, IntSlice, Json,
    Str, StringSlice, Time, TimeSlice,
};
use crate::{BoxedTag, Element, Error, ErrorKind, Options, Result, Seed, Tag, Value};

/// Tags keyed by name.
///
/// Not internally synchronized. An absent tag is never stored: inserting
/// `None` is a no-op and `None` seed entries are dropped.
#[derive(Clone, Debug, Default)]
pub struct TagSet {
    tags: FxHashMap<String, BoxedTag>,
}

impl TagSet {
    /// Build a set, taking ownership of a [`Seed::Tags`] seed when present.
    ///
    /// Without a seed the set starts empty with the options' length as
    /// capacity. A [`Seed::Meta`] seed is dropped.
    pub fn new(mut opts: Options) -> Self {
        let tags = match opts.take_seed() {
            Some(Seed::Tags(seed)) => seed
                .into_iter()
                .filter_map(|(name, tag)| tag.map(|tag| (name, tag)))
                .collect(),
            seed => {
                if let Some(Seed::Meta(meta)) = seed {
                    tracing::debug!(entries = meta.len(), "tag set ignores meta seed");
                }
                FxHashMap::with_capacity_and_hasher(opts.length(), Default::default())
            }
        };
        Self { tags }
    }

    /// The tag named `name`. Absence is not an error here.
    pub fn tag_get(&self, name: &str) -> Option<&dyn Tag> {
        self.tags.get(name).map(|tag| &**tag)
    }

    pub fn tag_get_mut(&mut self, name: &str) -> Option<&mut dyn Tag> {
        self.tags.get_mut(name).map(|tag| &mut **tag)
    }

    /// Insert tags under their own names, replacing existing ones. `None`
    /// entries are skipped.
    pub fn tag_set<I, T>(&mut self, tags: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Option<BoxedTag>>,
    {
        for tag in tags {
            let tag: Option<BoxedTag> = tag.into();
            if let Some(tag) = tag {
                self.tag_insert(tag);
            }
        }
    }

    /// Insert one tag under its own name, returning the one it replaced.
    pub fn tag_insert(&mut self, tag: BoxedTag) -> Option<BoxedTag> {
        self.tags.insert(tag.tag_name().to_owned(), tag)
    }

    pub fn tag_delete(&mut self, name: &str) -> Option<BoxedTag> {
        self.tags.remove(name)
    }

    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    /// All tags, read-only.
    pub fn tag_get_all(&self) -> &FxHashMap<String, BoxedTag> {
        &self.tags
    }

    pub fn tag_delete_all(&mut self) {
        self.tags.clear();
    }

    /// Tag values keyed by name, or `None` when the set is empty.
    pub fn meta_get_all(&self) -> Option<FxHashMap<String, Value>> {
        if self.tags.is_empty() {
            return None;
        }
        Some(
            self.tags
                .iter()
                .map(|(name, tag)| (name.clone(), tag.tag_value()))
                .collect(),
        )
    }

    pub fn tag_get_string(&self, name: &str) -> Result<&Str> {
        get_tag(self, name)
    }

    pub fn tag_get_string_slice(&self, name: &str) -> Result<&StringSlice> {
        get_tag(self, name)
    }

    pub fn tag_get_int64(&self, name: &str) -> Result<&Int64> {
        get_tag(self, name)
    }

    pub fn tag_get_int64_slice(&self, name: &str) -> Result<&Int64Slice> {
        get_tag(self, name)
    }

    pub fn tag_get_float64(&self, name: &str) -> Result<&Float64> {
        get_tag(self, name)
    }

    pub fn tag_get_float64_slice(&self, name: &str) -> Result<&Float64Slice> {
        get_tag(self, name)
    }

    pub fn tag_get_time(&self, name: &str) -> Result<&Time> {
        get_tag(self, name)
    }

    pub fn tag_get_time_slice(&self, name: &str) -> Result<&TimeSlice> {
        get_tag(self, name)
    }

    pub fn tag_get_json(&self, name: &str) -> Result<&Json> {
        get_tag(self, name)
    }

    pub fn tag_get_bool(&self, name: &str) -> Result<&Bool> {
        get_tag(self, name)
    }

    pub fn tag_get_bool_slice(&self, name: &str) -> Result<&BoolSlice> {
        get_tag(self, name)
    }

    pub fn tag_get_int(&self, name: &str) -> Result<&Int> {
        get_tag(self, name)
    }

    pub fn tag_get_int_slice(&self, name: &str) -> Result<&IntSlice> {
        get_tag(self, name)
    }

    pub fn tag_get_byte_slice(&self, name: &str) -> Result<&ByteSlice> {
        get_tag(self, name)
    }
}

/// Borrow the tag named `name` as a `T`.
///
/// Fails with `Missing` when absent and `InvalidType` when the tag is not a
/// `T`, both prefixed with the name.
pub fn get_tag<'a, T: Tag>(set: &'a TagSet, name: &str) -> Result<&'a T> {
    let tag = set
        .tag_get(name)
        .ok_or_else(|| Error::new(ErrorKind::Missing).in_field(name))?;
    tag.downcast_ref()
        .ok_or_else(|| Error::new(ErrorKind::InvalidType).in_field(name))
}

/// The value of the tag named `name` as a `T`.
pub fn get_tag_value<T: Element>(set: &TagSet, name: &str) -> Result<T> {
    let tag = set
        .tag_get(name)
        .ok_or_else(|| Error::new(ErrorKind::Missing).in_field(name))?;
    T::from_value(tag.tag_value()).map_err(|_| Error::new(ErrorKind::InvalidType).in_field(name))
}
