use std::path::Path;

use crate::error::Result;

/// Where and how to open the store
///
/// The store is embedded, so a location is a file path (or `:memory:`).
/// `from_location` composes one from a directory and a database name, the
/// way a server and schema name identify a database elsewhere.
///
/// With the `serde` feature the options can be read from configuration:
///
/// ```ignore
/// let options: ConnectOptions = serde_json::from_str(r#"{ "path": "data/app.db", "enable_mvcc": false }"#)?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct ConnectOptions {
    pub(super) path:        String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub(super) vfs:         Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub(super) enable_mvcc: bool,
}

impl ConnectOptions {
    pub fn new_local(path: &str) -> Self {
        Self { path: path.to_string(), vfs: None, enable_mvcc: false }
    }

    /// A database named `schema` inside directory `server`
    pub fn from_location(server: &str, schema: &str) -> Self {
        if server == ":memory:" {
            return Self::new_local(server);
        }
        Self::new_local(&Path::new(server).join(schema).to_string_lossy())
    }

    /// Select the IO backend by name
    pub fn with_io(mut self, vfs: String) -> Self {
        self.vfs = Some(vfs);
        self
    }

    pub fn with_mvcc(mut self, mvcc: bool) -> Self {
        self.enable_mvcc = mvcc;
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub async fn open(self) -> Result<super::database::Database> {
        let mut turso_builder = turso::Builder::new_local(&self.path);
        turso_builder = turso_builder.with_mvcc(self.enable_mvcc);

        turso_builder = match self.vfs.clone() {
            Some(vfs) => turso_builder.with_io(vfs),
            None => turso_builder,
        };

        tracing::debug!(path = %self.path, "Opening database");
        let db = turso_builder.build().await?;

        Ok(super::database::Database::new(db, self))
    }
}
