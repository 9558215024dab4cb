//! Storing object-valued fields as JSON documents.
//!
//! A [`JsonMap`] owns the set of JSON-mapped types and the codec settings.
//! Enabling it on a [`Db`] subscribes it to the database's extension points:
//!
//! * column configuration, where marked fields of object type get a text (or
//!   native JSON) column and their type is registered,
//! * row decoding and parameter binding, where registered types go through
//!   the codec,
//! * predicate translation, where property chains into a JSON column become
//!   the dialect's JSON path syntax.

mod binding;
use binding::ColumnBinding;

mod codec;
pub use codec::JsonCodec;

mod enum_rewrite;

mod hooks;
use hooks::{ReadHook, TypeWriteHook, WriteDispatch};

mod options;
pub use options::JsonOptions;

mod path;

mod registry;
pub use registry::TypeRegistry;

mod storage;
pub use storage::{StorageShape, StringLength};

mod translate;
use translate::Translate;

use crate::{
    db::{ColumnFluent, DbId},
    Db, Model,
};

use jsonmap_core::{
    driver::Dialect,
    schema::app::ModelId,
    stmt::{JsonObject, TypeKey},
};

use std::{
    collections::{HashMap, HashSet},
    fmt,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc, Mutex, OnceLock, PoisonError, RwLock,
    },
};

/// A registry of JSON-mapped types, shared by every database it is enabled
/// on.
#[derive(Clone)]
pub struct JsonMap {
    inner: Arc<Inner>,
}

struct Inner {
    codec: JsonCodec,

    registry: TypeRegistry,

    /// Set by the first `enable` call
    wired: AtomicBool,

    /// Number of times the registry-wide hooks were wired
    installations: AtomicUsize,

    /// Databases the hooks are attached to
    enabled: Mutex<HashSet<DbId>>,

    /// Fields marked through `map_column`
    toggles: RwLock<HashSet<(ModelId, String)>>,

    install: Mutex<Install>,
}

/// State changed together with type registration.
#[derive(Default)]
struct Install {
    /// Storage decisions per type and dialect. The first decision is final.
    shapes: HashMap<(TypeKey, Dialect), StorageShape>,

    /// Copied on write; the bind path only clones the outer `Arc`.
    write_hooks: Arc<Vec<Arc<TypeWriteHook>>>,
}

/// Enables JSON mapping on `db` through the process-wide registry, created
/// with default options on first use.
pub fn use_json_map(db: &Db) -> &'static JsonMap {
    use_json_map_with(db, JsonOptions::default())
}

/// Like [`use_json_map`], but creates the process-wide registry with
/// `options`.
///
/// The first caller's options are captured; options passed by later callers
/// are ignored.
pub fn use_json_map_with(db: &Db, options: JsonOptions) -> &'static JsonMap {
    static GLOBAL: OnceLock<JsonMap> = OnceLock::new();

    let map = GLOBAL.get_or_init(|| JsonMap::new(options));

    if *map.options() != options {
        tracing::debug!(
            captured = ?map.options(),
            ignored = ?options,
            "global JSON map already created; options ignored"
        );
    }

    map.enable(db);
    map
}

impl JsonMap {
    pub fn new(options: JsonOptions) -> Self {
        Self {
            inner: Arc::new(Inner {
                codec: JsonCodec::new(options),
                registry: TypeRegistry::new(),
                wired: AtomicBool::new(false),
                installations: AtomicUsize::new(0),
                enabled: Mutex::default(),
                toggles: RwLock::default(),
                install: Mutex::default(),
            }),
        }
    }

    pub fn options(&self) -> &JsonOptions {
        self.inner.codec.options()
    }

    pub fn codec(&self) -> &JsonCodec {
        &self.inner.codec
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.inner.registry
    }

    /// Subscribes the registry to `db`. Enabling on the same database again
    /// does nothing.
    pub fn enable(&self, db: &Db) {
        if self
            .inner
            .wired
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            self.inner.installations.fetch_add(1, Ordering::AcqRel);
            tracing::debug!(options = ?self.options(), "wired JSON map hooks");
        }

        let mut enabled = self
            .inner
            .enabled
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if !enabled.insert(db.id()) {
            return;
        }

        let conversions = db.conversions();
        conversions.add_read_handler(Arc::new(ReadHook::new(self.clone())));
        conversions.add_write_handler(Arc::new(WriteDispatch::new(self.clone())));

        db.aop().add_configure_field(Arc::new(ColumnBinding::new(
            self.clone(),
            conversions.clone(),
        )));

        if db.dialect().json_style().is_some() {
            db.aop()
                .add_parse_expression(Arc::new(Translate::new(self.clone())));
        } else {
            tracing::debug!(
                dialect = %db.dialect(),
                "dialect has no JSON path syntax; predicates are not rewritten"
            );
        }

        tracing::debug!(db = ?db.id(), dialect = %db.dialect(), "enabled JSON map");
    }

    /// Number of times the registry-wide hooks were wired. At most one.
    pub fn installations(&self) -> usize {
        self.inner.installations.load(Ordering::Acquire)
    }

    /// Marks a field of `M` as JSON-mapped. Only affects models not yet
    /// configured.
    pub fn map_column<M: Model>(&self, field: impl Into<String>) -> &Self {
        self.inner
            .toggles
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((M::id(), field.into()));
        self
    }

    pub fn is_mapped<T: JsonObject>(&self) -> bool {
        self.inner.registry.get(TypeKey::of::<T>()).is_some()
    }

    /// The storage decided for `T` on `dialect`, if any field of that type
    /// was configured yet.
    pub fn storage_shape<T: JsonObject>(&self, dialect: Dialect) -> Option<StorageShape> {
        self.install()
            .shapes
            .get(&(TypeKey::of::<T>(), dialect))
            .copied()
    }

    fn is_toggled(&self, model: ModelId, field: &str) -> bool {
        self.inner
            .toggles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&(model, field.to_string()))
    }

    /// The per-type write hooks registered so far.
    fn write_hooks(&self) -> Arc<Vec<Arc<TypeWriteHook>>> {
        self.install().write_hooks.clone()
    }

    fn install(&self) -> std::sync::MutexGuard<'_, Install> {
        self.inner
            .install
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for JsonMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonMap")
            .field("options", self.options())
            .field("registry", &self.inner.registry)
            .field("installations", &self.installations())
            .finish()
    }
}

/// Marks a column as JSON-mapped through the fluent configuration API.
pub trait JsonMapColumn {
    fn json_map(self) -> Self;
}

impl JsonMapColumn for ColumnFluent<'_> {
    fn json_map(self) -> Self {
        self.set_json_map()
    }
}
