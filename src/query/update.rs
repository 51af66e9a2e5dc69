use crate::Connection;
use crate::Descriptor;
use crate::Result;
use crate::query::condition::KeyFilter;
use crate::query::condition::render_literal;

/// UPDATE of every non-key column of the row identified by the instance's key
#[derive(Debug)]
pub struct Update<'a, T> {
    descriptor: &'a Descriptor<T>,
    object:     &'a T,
}

impl<'a, T> Update<'a, T> {
    pub fn new(descriptor: &'a Descriptor<T>, object: &'a T) -> Self {
        Self { descriptor, object }
    }

    /// `UPDATE <table> SET <col>=<value>, ... WHERE <key>=<value> AND ...`
    ///
    /// Returns `None` when the type has no non-key columns: there is nothing
    /// to overwrite.
    pub fn build(&self) -> Result<Option<String>> {
        let sets = self
            .descriptor
            .non_key_fields()
            .iter()
            .map(|field| Ok(format!("{}={}", field.column(), render_literal(&field.get(self.object))?)))
            .collect::<Result<Vec<_>>>()?;

        if sets.is_empty() {
            return Ok(None);
        }

        let filter = KeyFilter::of(self.descriptor, self.object)?;
        Ok(Some(format!("UPDATE {} SET {} WHERE {}", self.descriptor.table_name(), sets.join(", "), filter.sql())))
    }

    pub async fn exec(self, conn: &Connection) -> Result<u64> {
        let Some(sql) = self.build()? else {
            tracing::debug!(table = self.descriptor.table_name(), "No non-key columns to update");
            return Ok(0);
        };
        tracing::trace!("Update SQL: {}", sql);
        Ok(conn.execute(&sql, ()).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Descriptor;
    use crate::FieldDef;
    use crate::MappedClass;
    use crate::testing::Composite;
    use crate::testing::Sample;
    use crate::testing::composite_descriptor;
    use crate::testing::sample_descriptor;

    #[test]
    fn test_update_build_single_key() {
        let descriptor = sample_descriptor();
        let object = Sample::new("John", "Petrov", 0);
        let sql = Update::new(&descriptor, &object).build().unwrap().unwrap();
        assert_eq!(sql, "UPDATE Sample SET name='John', last_name='Petrov' WHERE id=0");
    }

    #[test]
    fn test_update_build_composite_key() {
        let descriptor = composite_descriptor();
        let object = Composite::new("John", 18, false, 1.87);
        let sql = Update::new(&descriptor, &object).build().unwrap().unwrap();
        assert_eq!(sql, "UPDATE composite SET is_male=0, height=1.87 WHERE name='John' AND age=18");
    }

    #[test]
    fn test_update_build_without_non_key_columns() {
        #[derive(Default)]
        struct Tag {
            label: String,
        }

        let class = MappedClass::new().table_name("tags").constructor(Tag::default).field(
            FieldDef::new::<String>("label").key().getter(|t: &Tag| t.label.clone()).setter(|t: &mut Tag, v| t.label = v),
        );
        let descriptor = Descriptor::build(class).unwrap();
        let tag = Tag { label: "rust".to_string() };
        assert!(Update::new(&descriptor, &tag).build().unwrap().is_none());
    }
}
