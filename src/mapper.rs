//! The CRUD facade

use std::fmt;

use crate::Connection;
use crate::Dao;
use crate::Database;
use crate::Descriptor;
use crate::Error;
use crate::FieldDef;
use crate::Mapped;
use crate::MappedClass;
use crate::Result;
use crate::Schema;
use crate::connection::prelude::ConnectOptions;
use crate::query::Delete;
use crate::query::Insert;
use crate::query::Select;
use crate::query::Update;
use crate::row::Materialized;

/// Maps one row type onto one table of a store
///
/// The descriptor is validated once, at construction, and the table is
/// created if it does not exist yet. Every call afterwards opens its own
/// connection, which is released when the call returns.
///
/// The `try_*` methods surface errors. The [`Dao`] implementation logs them
/// and returns an empty result instead.
///
/// ```ignore
/// let db = ConnectOptions::new_local("app.db").open().await?;
/// let mapper = Mapper::<Sample>::with_database(&db).await?;
///
/// mapper.insert(&Sample::new("John", "Dow", 1)).await;
/// let found = mapper.select_by_key(&Sample { id: 1, ..Default::default() }).await;
/// ```
pub struct Mapper<T> {
    descriptor: Descriptor<T>,
    database:   Database,
}

impl<T: Send + Sync + 'static> Mapper<T> {
    /// Build a mapper from an explicit description.
    ///
    /// # Errors
    ///
    /// Fails only when the description is invalid. A table that cannot be
    /// created is logged and left for the first call to trip over.
    pub async fn new(class: MappedClass<T>, database: &Database) -> Result<Self> {
        let descriptor = Descriptor::build(class)?;
        let mapper = Self { descriptor, database: database.clone() };
        mapper.materialize_table().await;
        Ok(mapper)
    }

    async fn materialize_table(&self) {
        let result = match self.connect() {
            Ok(conn) => Schema::ensure_table(&conn, &self.descriptor).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(true) => tracing::info!(table = self.descriptor.table_name(), "Created table"),
            Ok(false) => {}
            Err(e) => tracing::error!(table = self.descriptor.table_name(), "Failed to create table: {}", e),
        }
    }

    pub fn descriptor(&self) -> &Descriptor<T> {
        &self.descriptor
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Open a fresh connection to the mapper's store
    pub fn connect(&self) -> Result<Connection> {
        Ok(self.database.connect()?)
    }

    /// True iff the field has a getter and a setter, both on its declared type
    pub fn has_accessors(&self, field: &FieldDef<T>) -> bool {
        field.has_accessors()
    }

    /// Insert a row.
    ///
    /// The key is probed first. A duplicate is reported as
    /// [`Error::ConstraintViolation`] without executing the INSERT: a rejected
    /// INSERT leaves the store's write lock held and every later write on the
    /// same handle fails with "database is locked".
    #[tracing::instrument(skip(self, object))]
    pub async fn try_insert(&self, object: &T) -> Result<u64> {
        let conn = self.connect()?;

        if Select::by_key(&self.descriptor, object)?.exists(&conn).await? {
            return Err(Error::ConstraintViolation(format!(
                "Duplicate primary key in table {}",
                self.descriptor.table_name()
            )));
        }

        Insert::new(&self.descriptor, object).exec(&conn).await
    }

    #[tracing::instrument(skip(self, object))]
    pub async fn try_update(&self, object: &T) -> Result<u64> {
        let conn = self.connect()?;
        Update::new(&self.descriptor, object).exec(&conn).await
    }

    #[tracing::instrument(skip(self, key))]
    pub async fn try_delete_by_key(&self, key: &T) -> Result<u64> {
        let conn = self.connect()?;
        Delete::by_key(&self.descriptor, key)?.exec(&conn).await
    }

    #[tracing::instrument(skip(self, key))]
    pub async fn try_select_by_key(&self, key: &T) -> Result<Option<T>> {
        let conn = self.connect()?;
        Select::by_key(&self.descriptor, key)?.one(&conn).await
    }

    /// Every row that converts cleanly, plus the errors of those that don't
    #[tracing::instrument(skip(self))]
    pub async fn try_select_all(&self) -> Result<Materialized<T>> {
        let conn = self.connect()?;
        Select::new(&self.descriptor).all(&conn).await
    }
}

impl<T: Mapped> Mapper<T> {
    /// Build a mapper for a type that describes itself
    pub async fn with_database(database: &Database) -> Result<Self> {
        Self::new(T::mapped_class(), database).await
    }

    /// Open the store and build a mapper on it
    pub async fn open(options: ConnectOptions) -> Result<Self> {
        let database = options.open().await?;
        Self::with_database(&database).await
    }
}

#[async_trait::async_trait]
impl<T: Send + Sync + 'static> Dao<T> for Mapper<T> {
    async fn insert(&self, object: &T) {
        match self.try_insert(object).await {
            Ok(_) => {}
            Err(Error::ConstraintViolation(_)) => {
                tracing::info!("Object with the same primary key already exists in database")
            }
            Err(e) => tracing::warn!("Insert failed: {}", e),
        }
    }

    async fn update(&self, object: &T) {
        if let Err(e) = self.try_update(object).await {
            tracing::warn!("Update failed: {}", e);
        }
    }

    async fn delete_by_key(&self, key: &T) {
        if let Err(e) = self.try_delete_by_key(key).await {
            tracing::warn!("Delete failed: {}", e);
        }
    }

    async fn select_by_key(&self, key: &T) -> Option<T> {
        self.try_select_by_key(key).await.unwrap_or_else(|e| {
            tracing::warn!("Select by key failed: {}", e);
            None
        })
    }

    async fn select_all(&self) -> Vec<T> {
        match self.try_select_all().await {
            Ok(materialized) => materialized.into_instances(),
            Err(e) => {
                tracing::warn!("Select all failed: {}", e);
                Vec::new()
            }
        }
    }
}

impl<T> fmt::Debug for Mapper<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapper").field("descriptor", &self.descriptor).field("database", &self.database).finish()
    }
}
