use crate::Connection;
use crate::Descriptor;
use crate::Result;
use crate::query::condition::KeyFilter;

/// DELETE of the row identified by an instance's key fields
#[derive(Clone, Debug)]
pub struct Delete<'a, T> {
    descriptor: &'a Descriptor<T>,
    filter:     KeyFilter,
}

impl<'a, T> Delete<'a, T> {
    pub fn by_key(descriptor: &'a Descriptor<T>, key: &T) -> Result<Self> {
        Ok(Self { descriptor, filter: KeyFilter::of(descriptor, key)? })
    }

    pub fn build(&self) -> String {
        format!("DELETE FROM {} WHERE {}", self.descriptor.table_name(), self.filter.sql())
    }

    pub async fn exec(self, conn: &Connection) -> Result<u64> {
        let sql = self.build();
        tracing::trace!("Delete SQL: {}", sql);
        Ok(conn.execute(&sql, ()).await?)
    }
}
