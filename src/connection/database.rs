use super::options::ConnectOptions;

/// Handle on an opened store, shared by every mapper built from it
#[derive(Clone)]
pub struct Database {
    db:      turso::Database,
    options: ConnectOptions,
}

impl Database {
    pub(super) fn new(db: turso::Database, options: ConnectOptions) -> Self {
        Self { db, options }
    }

    /// Open a fresh connection
    pub fn connect(&self) -> super::ConnectionResult<super::Connection> {
        let conn = self.db.connect()?;
        Ok(super::Connection::new(conn))
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database").field("options", &self.options).finish()
    }
}
