//! Store configuration and per-call connections

pub(crate) mod database;
pub(crate) mod options;

pub mod prelude {
    pub use super::Connection;
    pub use super::database::Database;
    pub use super::options::ConnectOptions;
}

pub(self) type ConnectionResult<T> = std::result::Result<T, turso::Error>;

/// One physical connection to the store
///
/// Connections are opened per call by the mapper and released when dropped.
#[derive(Debug, Clone)]
pub struct Connection {
    inner: turso::Connection,
}

impl Connection {
    fn new(inner: turso::Connection) -> Self {
        Self { inner }
    }

    pub async fn query(&self, sql: &str, params: impl turso::IntoParams) -> turso::Result<turso::Rows> {
        self.inner.query(sql, params).await
    }

    pub async fn execute(&self, sql: &str, params: impl turso::IntoParams) -> turso::Result<u64> {
        self.inner.execute(sql, params).await
    }
}
