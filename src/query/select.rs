use crate::Connection;
use crate::Descriptor;
use crate::Result;
use crate::Schema;
use crate::Value;
use crate::query::condition::KeyFilter;
use crate::row::Materialized;
use crate::row::RowMaterializer;

/// SELECT of every mapped row, optionally narrowed to one key
#[derive(Clone, Debug)]
pub struct Select<'a, T> {
    descriptor: &'a Descriptor<T>,
    filter:     Option<KeyFilter>,
}

impl<'a, T> Select<'a, T> {
    /// Every row of the table
    pub fn new(descriptor: &'a Descriptor<T>) -> Self {
        Self { descriptor, filter: None }
    }

    /// Rows matching the key fields of `key`
    pub fn by_key(descriptor: &'a Descriptor<T>, key: &T) -> Result<Self> {
        Ok(Self { descriptor, filter: Some(KeyFilter::of(descriptor, key)?) })
    }

    pub fn build(&self) -> String {
        let mut sql = format!("SELECT * FROM {}", self.descriptor.table_name());
        if let Some(filter) = &self.filter {
            sql.push_str(" WHERE ");
            sql.push_str(&filter.sql());
        }
        sql
    }

    /// Run the query and materialize every row that converts cleanly
    pub async fn all(self, conn: &Connection) -> Result<Materialized<T>> {
        let columns = Schema::table_columns(conn, self.descriptor.table_name()).await?;
        let materializer = RowMaterializer::new(self.descriptor, &columns)?;

        let sql = self.build();
        tracing::trace!("SQL: {}", sql);

        let mut rows = conn.query(&sql, ()).await?;
        materializer.build_all(&mut rows).await
    }

    /// First materialized row, if any
    pub async fn one(self, conn: &Connection) -> Result<Option<T>> {
        let materialized = self.all(conn).await?;
        Ok(materialized.instances.into_iter().next())
    }

    pub fn build_count(&self) -> String {
        let mut sql = format!("SELECT COUNT(*) FROM {}", self.descriptor.table_name());
        if let Some(filter) = &self.filter {
            sql.push_str(" WHERE ");
            sql.push_str(&filter.sql());
        }
        sql
    }

    /// Number of matching rows, whether or not they would materialize
    pub async fn count(self, conn: &Connection) -> Result<i64> {
        let sql = self.build_count();
        tracing::trace!("SQL: {}", sql);

        let mut rows = conn.query(&sql, ()).await?;

        if let Some(row) = rows.next().await? {
            match row.get_value(0)? {
                Value::Integer(count) => Ok(count),
                _ => Ok(0),
            }
        } else {
            Ok(0)
        }
    }

    pub async fn exists(self, conn: &Connection) -> Result<bool> {
        Ok(self.count(conn).await? > 0)
    }
}
