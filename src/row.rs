//! Reverse mapping from stored rows to instances

#[cfg(not(feature = "serde"))]
use std::collections::HashMap;

use crate::Descriptor;
use crate::Error;
use crate::Result;
use crate::Value;

/// Instances read from a result set, plus one error per skipped row
#[derive(Debug)]
pub struct Materialized<T> {
    pub instances: Vec<T>,
    pub failures:  Vec<Error>,
}

impl<T> Materialized<T> {
    pub fn into_instances(self) -> Vec<T> {
        self.instances
    }
}

impl<T> Default for Materialized<T> {
    fn default() -> Self {
        Self { instances: Vec::new(), failures: Vec::new() }
    }
}

/// Populates fresh instances from rows whose columns are laid out as `columns`
#[derive(Debug)]
pub struct RowMaterializer<'a, T> {
    descriptor: &'a Descriptor<T>,
    columns:    Vec<String>,
    /// Column position per field, in `Descriptor::fields` order
    positions:  Vec<usize>,
}

impl<'a, T> RowMaterializer<'a, T> {
    /// Resolve every mapped column against the result-set layout.
    ///
    /// Names are compared case-insensitively, as the store does.
    pub fn new(descriptor: &'a Descriptor<T>, columns: &[String]) -> Result<Self> {
        let positions = descriptor
            .fields()
            .map(|field| {
                columns
                    .iter()
                    .position(|c| c.eq_ignore_ascii_case(field.column()))
                    .ok_or_else(|| Error::ColumnNotFound(field.column().to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { descriptor, columns: columns.to_vec(), positions })
    }

    /// Build one instance from a row's values
    pub fn build(&self, values: &[Value]) -> Result<T> {
        let mut instance = self.descriptor.new_instance();

        for (field, &position) in self.descriptor.fields().zip(&self.positions) {
            let value = values.get(position).cloned().ok_or_else(|| Error::ColumnNotFound(field.column().to_string()))?;
            field.set(&mut instance, value)?;
        }

        Ok(instance)
    }

    /// Drain a result set. Rows that fail to populate are logged and skipped.
    pub async fn build_all(&self, rows: &mut turso::Rows) -> Result<Materialized<T>> {
        let mut result = Materialized::default();
        let mut index = 0;

        while let Some(row) = rows.next().await? {
            let values = (0..row.column_count()).map(|i| row.get_value(i)).collect::<turso::Result<Vec<_>>>()?;

            match self.build(&values) {
                Ok(instance) => result.instances.push(instance),
                Err(e) => {
                    #[cfg(feature = "serde")]
                    tracing::warn!("Failed to parse row: {}", serde_json::to_string_pretty(&self.raw_row(&values))?);

                    #[cfg(not(feature = "serde"))]
                    tracing::warn!("Failed to parse row: {:?}", self.raw_row(&values));

                    tracing::warn!("{}", e);

                    result.failures.push(Error::PartialMaterialization { row: index, source: Box::new(e) });
                }
            }
            index += 1;
        }

        Ok(result)
    }

    fn column_name(&self, i: usize) -> String {
        self.columns.get(i).cloned().unwrap_or_else(|| format!("column_{}", i))
    }

    #[cfg(feature = "serde")]
    fn raw_row(&self, values: &[Value]) -> serde_json::Value {
        use serde_json::json;

        let mut map = serde_json::Map::new();
        for (i, value) in values.iter().enumerate() {
            let value = match value {
                Value::Integer(v) => json!(v),
                Value::Real(v) => json!(v),
                Value::Text(v) => json!(v),
                Value::Blob(v) => json!(v),
                Value::Null => json!(null),
            };
            map.insert(self.column_name(i), value);
        }
        serde_json::Value::Object(map)
    }

    #[cfg(not(feature = "serde"))]
    fn raw_row(&self, values: &[Value]) -> HashMap<String, String> {
        values
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let value = match value {
                    Value::Integer(v) => format!("INTEGER: {}", v),
                    Value::Real(v) => format!("REAL: {}", v),
                    Value::Text(v) => format!("TEXT: {}", v),
                    Value::Blob(v) => format!("BLOB: {:?}", v),
                    Value::Null => "NULL".to_string(),
                };
                (self.column_name(i), value)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Composite;
    use crate::testing::Sample;
    use crate::testing::composite_descriptor;
    use crate::testing::sample_descriptor;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_build_reads_by_column_name() {
        let descriptor = sample_descriptor();
        // Table order differs from field order
        let materializer = RowMaterializer::new(&descriptor, &columns(&["name", "last_name", "id"])).unwrap();
        let values = vec![Value::Text("John".to_string()), Value::Text("Dow".to_string()), Value::Integer(7)];
        assert_eq!(materializer.build(&values).unwrap(), Sample::new("John", "Dow", 7));
    }

    #[test]
    fn test_build_matches_names_case_insensitively() {
        let descriptor = sample_descriptor();
        let materializer = RowMaterializer::new(&descriptor, &columns(&["ID", "NAME", "LAST_NAME"])).unwrap();
        let values = vec![Value::Integer(1), Value::Text("Ann".to_string()), Value::Text("Lee".to_string())];
        assert_eq!(materializer.build(&values).unwrap(), Sample::new("Ann", "Lee", 1));
    }

    #[test]
    fn test_build_unboxes_composite_values() {
        let descriptor = composite_descriptor();
        let materializer =
            RowMaterializer::new(&descriptor, &columns(&["is_male", "height", "name", "age"])).unwrap();
        let values = vec![Value::Integer(1), Value::Real(1.84), Value::Text("John".to_string()), Value::Integer(18)];
        assert_eq!(materializer.build(&values).unwrap(), Composite::new("John", 18, true, 1.84));
    }

    #[test]
    fn test_missing_column() {
        let descriptor = sample_descriptor();
        let err = RowMaterializer::new(&descriptor, &columns(&["name", "id"])).unwrap_err();
        assert!(matches!(err, Error::ColumnNotFound(c) if c == "last_name"));
    }

    #[test]
    fn test_build_null_in_non_nullable_field() {
        let descriptor = sample_descriptor();
        let materializer = RowMaterializer::new(&descriptor, &columns(&["name", "last_name", "id"])).unwrap();
        let values = vec![Value::Null, Value::Text("Dow".to_string()), Value::Integer(7)];
        assert!(materializer.build(&values).is_err());
    }

    #[test]
    fn test_build_wrong_value_type() {
        let descriptor = sample_descriptor();
        let materializer = RowMaterializer::new(&descriptor, &columns(&["name", "last_name", "id"])).unwrap();
        let values = vec![Value::Text("John".to_string()), Value::Text("Dow".to_string()), Value::Text("seven".to_string())];
        assert!(matches!(materializer.build(&values), Err(Error::TypeConversion { .. })));
    }
}
