use crate::Connection;
use crate::Descriptor;
use crate::Result;
use crate::query::condition::render_literal;

/// INSERT of one instance, every mapped column included
#[derive(Debug)]
pub struct Insert<'a, T> {
    descriptor: &'a Descriptor<T>,
    object:     &'a T,
}

impl<'a, T> Insert<'a, T> {
    pub fn new(descriptor: &'a Descriptor<T>, object: &'a T) -> Self {
        Self { descriptor, object }
    }

    /// `INSERT INTO <table> (<non-key cols>, <key cols>) VALUES (...)`
    pub fn build(&self) -> Result<String> {
        let mut columns = Vec::new();
        let mut values = Vec::new();

        for field in self.descriptor.fields() {
            columns.push(field.column());
            values.push(render_literal(&field.get(self.object))?);
        }

        Ok(format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.descriptor.table_name(),
            columns.join(", "),
            values.join(", ")
        ))
    }

    pub async fn exec(self, conn: &Connection) -> Result<u64> {
        let sql = self.build()?;
        tracing::trace!("Insert SQL: {}", sql);
        Ok(conn.execute(&sql, ()).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Composite;
    use crate::testing::Sample;
    use crate::testing::composite_descriptor;
    use crate::testing::sample_descriptor;

    #[test]
    fn test_insert_build_single_key() {
        let descriptor = sample_descriptor();
        let object = Sample::new("John", "Dow", 1);
        let sql = Insert::new(&descriptor, &object).build().unwrap();
        assert_eq!(sql, "INSERT INTO Sample (name, last_name, id) VALUES ('John', 'Dow', 1)");
    }

    #[test]
    fn test_insert_build_composite_key() {
        let descriptor = composite_descriptor();
        let object = Composite::new("John", 18, true, 1.84);
        let sql = Insert::new(&descriptor, &object).build().unwrap();
        assert_eq!(sql, "INSERT INTO composite (is_male, height, name, age) VALUES (1, 1.84, 'John', 18)");
    }

    #[test]
    fn test_insert_build_sanitizes_injection() {
        let descriptor = sample_descriptor();
        let object = Sample::new("Jonh'DROP TABLE test.sample", "Hacker", 404);
        let sql = Insert::new(&descriptor, &object).build().unwrap();
        assert_eq!(sql, "INSERT INTO Sample (name, last_name, id) VALUES ('JonhDROP TABLE test.sample', 'Hacker', 404)");
        assert_eq!(sql.matches('\'').count(), 4);
    }
}
