//! Registry of kind specs and native type associations.
//!
//! Two tables, both behind one `RwLock`:
//!
//! - `Kind -> Spec`: how to create and parse tags of a kind
//! - `NativeType -> Kind`: which kind a dynamic value creates
//!
//! Creating a tag from a [`Value`] walks `native_type -> kind -> spec`. Reads
//! take the shared lock and writes the exclusive lock, each for one call.
//! Spec functions run after the lock is released.

use std::sync::OnceLock;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::kinds::{builtin_specs, BUILTIN_TYPES};
use crate::{BoxedTag, Error, ErrorKind, Kind, NativeType, Options, Result, Spec, Value};

/// Process-wide registry with the builtin kinds.
static GLOBAL_REGISTRY: OnceLock<Registry> = OnceLock::new();

#[derive(Default)]
struct Tables {
    kinds: FxHashMap<Kind, Spec>,
    types: FxHashMap<NativeType, Kind>,
}

/// Kind spec and native type tables.
#[derive(Default)]
pub struct Registry {
    tables: RwLock<Tables>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with every builtin spec and type association.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn with_builtins() -> Result<Self> {
        let registry = Self::new();
        for spec in builtin_specs() {
            registry.register(spec)?;
        }
        for &(native, kind) in BUILTIN_TYPES {
            registry.associate(native, kind)?;
        }
        tracing::debug!(
            specs = registry.spec_count(),
            types = BUILTIN_TYPES.len(),
            "builtin registry ready"
        );
        Ok(registry)
    }

    /// Register `spec` for its kind.
    ///
    /// Fails with `AlreadyRegistered` when the kind already has a spec.
    pub fn register(&self, spec: Spec) -> Result<()> {
        let kind = spec.tag_kind();
        let mut tables = self.tables.write();
        if tables.kinds.contains_key(&kind) {
            return Err(Error::with_detail(
                ErrorKind::AlreadyRegistered,
                format!("spec for {kind:?} already registered"),
            ));
        }
        tables.kinds.insert(kind, spec);
        tracing::debug!(%kind, "registered spec");
        Ok(())
    }

    /// Associate a native type with the kind it creates.
    ///
    /// Returns the previously associated kind, or `Kind::empty()` when there
    /// was none. Fails with `NoSpec` when `kind` has no registered spec.
    pub fn associate(&self, native: NativeType, kind: Kind) -> Result<Kind> {
        let mut tables = self.tables.write();
        if !tables.kinds.contains_key(&kind) {
            return Err(Error::with_detail(
                ErrorKind::NoSpec,
                format!("no spec for {kind:?}"),
            ));
        }
        let previous = tables.types.insert(native, kind).unwrap_or_default();
        tracing::debug!(%native, %kind, %previous, "associated type");
        Ok(previous)
    }

    /// The spec for `kind`, or the zero spec.
    pub fn spec_for_kind(&self, kind: Kind) -> Spec {
        self.tables
            .read()
            .kinds
            .get(&kind)
            .copied()
            .unwrap_or_default()
    }

    /// The spec for the kind `native` is associated with, or the zero spec.
    pub fn spec_for_type(&self, native: NativeType) -> Spec {
        let tables = self.tables.read();
        tables
            .types
            .get(&native)
            .and_then(|kind| tables.kinds.get(kind))
            .copied()
            .unwrap_or_default()
    }

    /// Create a tag from `value` with the spec its native type resolves to.
    ///
    /// Fails with `NoCreator` when the type has no association.
    pub fn create(&self, name: &str, value: Value, opts: &Options) -> Result<BoxedTag> {
        let native = value.native_type();
        let spec = self.spec_for_type(native);
        if spec.is_zero() {
            return Err(Error::with_detail(
                ErrorKind::NoCreator,
                format!("creator not found for type {native}"),
            )
            .in_field(name));
        }
        tracing::trace!(tag = name, %native, kind = %spec.tag_kind(), "creating tag");
        spec.tag_create(name, value, opts)
    }

    /// Number of registered specs.
    pub fn spec_count(&self) -> usize {
        self.tables.read().kinds.len()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tables = self.tables.read();
        f.debug_struct("Registry")
            .field("kinds", &tables.kinds.len())
            .field("types", &tables.types.len())
            .finish()
    }
}

/// Get the global registry with all builtin kinds registered.
///
/// # Panics
///
/// Panics if builtin registration fails.
pub fn registry() -> &'static Registry {
    GLOBAL_REGISTRY.get_or_init(|| {
        Registry::with_builtins().unwrap_or_else(|e| panic!("builtin registry: {e}"))
    })
}

/// Create a tag from `value` using the global registry and default options.
pub fn create_tag(name: &str, value: impl Into<Value>) -> Result<BoxedTag> {
    registry().create(name, value.into(), &Options::new())
}
