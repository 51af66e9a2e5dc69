//! Table creation and catalog probes

use crate::Connection;
use crate::Descriptor;
use crate::Result;
use crate::Value;

/// Schema helper for creating, probing and dropping mapped tables
///
/// # Example
///
/// ```ignore
/// // Generate CREATE TABLE SQL
/// let sql = Schema::create_table_sql(&descriptor);
///
/// // Create the table unless one with the same name is already there
/// let created = Schema::ensure_table(&conn, &descriptor).await?;
/// ```
pub struct Schema;

impl Schema {
    /// Generate the CREATE TABLE statement for a descriptor
    ///
    /// Non-key columns come first, then key columns, then the primary key
    /// constraint over the key columns. Non-nullable columns get `NOT NULL`.
    pub fn create_table_sql<T>(descriptor: &Descriptor<T>) -> String {
        let mut column_defs = Vec::new();

        for field in descriptor.fields() {
            let type_info = field.type_info();
            let mut def = format!("{} {}", field.column(), type_info.sql_type());
            if !type_info.nullable {
                def.push_str(" NOT NULL");
            }
            column_defs.push(def);
        }

        let primary_keys: Vec<&str> = descriptor.key_fields().iter().map(|f| f.column()).collect();
        column_defs.push(format!("PRIMARY KEY ({})", primary_keys.join(", ")));

        format!("CREATE TABLE {} ({})", descriptor.table_name(), column_defs.join(", "))
    }

    /// Create the table for a descriptor if no table of that exact name exists
    ///
    /// Returns `true` when the table was created. An existing table is left
    /// untouched even if its columns no longer match the descriptor.
    pub async fn ensure_table<T>(conn: &Connection, descriptor: &Descriptor<T>) -> Result<bool> {
        if Self::table_exists(conn, descriptor.table_name()).await? {
            tracing::debug!(table = descriptor.table_name(), "Table already exists");
            return Ok(false);
        }

        let sql = Self::create_table_sql(descriptor);
        tracing::debug!("Create table SQL: {}", sql);
        conn.execute(&sql, ()).await?;
        Ok(true)
    }

    /// Check if a table exists, matching the name exactly (case-sensitive)
    pub async fn table_exists(conn: &Connection, table_name: &str) -> Result<bool> {
        let sql = "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?";

        let mut rows = conn.query(sql, [table_name]).await?;

        if let Some(row) = rows.next().await? {
            match row.get_value(0)? {
                Value::Integer(count) => Ok(count > 0),
                _ => Ok(false),
            }
        } else {
            Ok(false)
        }
    }

    /// Column names of a table in declaration order
    pub async fn table_columns(conn: &Connection, table_name: &str) -> Result<Vec<String>> {
        let pragma_sql = format!("PRAGMA table_info({})", table_name);
        let mut rows = conn.query(&pragma_sql, ()).await?;

        let mut columns = Vec::new();
        while let Some(row) = rows.next().await? {
            if let Value::Text(name) = row.get_value(1)? {
                columns.push(name);
            }
        }

        Ok(columns)
    }

    /// Drop a table
    pub async fn drop_table(conn: &Connection, table_name: &str, if_exists: bool) -> Result<()> {
        let sql = Self::drop_table_sql(table_name, if_exists);
        conn.execute(&sql, ()).await?;
        Ok(())
    }

    /// Generate the DROP TABLE SQL statement
    pub fn drop_table_sql(table_name: &str, if_exists: bool) -> String {
        let exists_clause = if if_exists { "IF EXISTS " } else { "" };
        format!("DROP TABLE {}{}", exists_clause, table_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldDef;
    use crate::MappedClass;

    #[derive(Debug, Default)]
    struct Sample {
        id:        i32,
        name:      String,
        last_name: String,
    }

    #[derive(Debug, Default)]
    struct Composite {
        name:    String,
        age:     i32,
        is_male: bool,
        height:  Option<f64>,
    }

    fn sample_descriptor() -> Descriptor<Sample> {
        let class = MappedClass::new()
            .table_name("sample")
            .constructor(Sample::default)
            .field(FieldDef::new::<i32>("id").key().getter(|s: &Sample| s.id).setter(|s: &mut Sample, v| s.id = v))
            .field(
                FieldDef::new::<String>("name")
                    .getter(|s: &Sample| s.name.clone())
                    .setter(|s: &mut Sample, v| s.name = v),
            )
            .field(
                FieldDef::new::<String>("lastName")
                    .getter(|s: &Sample| s.last_name.clone())
                    .setter(|s: &mut Sample, v| s.last_name = v),
            );
        Descriptor::build(class).unwrap()
    }

    fn composite_descriptor() -> Descriptor<Composite> {
        let class = MappedClass::new()
            .table_name("composite")
            .constructor(Composite::default)
            .field(
                FieldDef::new::<String>("name")
                    .key()
                    .getter(|c: &Composite| c.name.clone())
                    .setter(|c: &mut Composite, v| c.name = v),
            )
            .field(
                FieldDef::new::<i32>("age").key().getter(|c: &Composite| c.age).setter(|c: &mut Composite, v| c.age = v),
            )
            .field(
                FieldDef::new::<bool>("isMale")
                    .getter(|c: &Composite| c.is_male)
                    .setter(|c: &mut Composite, v| c.is_male = v),
            )
            .field(
                FieldDef::new::<Option<f64>>("height")
                    .getter(|c: &Composite| c.height)
                    .setter(|c: &mut Composite, v| c.height = v),
            );
        Descriptor::build(class).unwrap()
    }

    #[test]
    fn test_create_table_sql_single_key() {
        let sql = Schema::create_table_sql(&sample_descriptor());
        assert_eq!(
            sql,
            "CREATE TABLE sample (name VARCHAR(255) NOT NULL, last_name VARCHAR(255) NOT NULL, id INTEGER NOT NULL, \
             PRIMARY KEY (id))"
        );
    }

    #[test]
    fn test_create_table_sql_composite_key() {
        let sql = Schema::create_table_sql(&composite_descriptor());
        assert!(sql.starts_with("CREATE TABLE composite ("));
        assert!(sql.contains("is_male BIT NOT NULL"));
        assert!(sql.contains("height DOUBLE PRECISION,"));
        assert!(!sql.contains("height DOUBLE PRECISION NOT NULL"));
        assert!(sql.contains("name VARCHAR(255) NOT NULL"));
        assert!(sql.contains("age INTEGER NOT NULL"));
        assert!(sql.ends_with("PRIMARY KEY (name, age))"));
    }

    #[test]
    fn test_create_table_sql_column_order() {
        let sql = Schema::create_table_sql(&composite_descriptor());
        let is_male = sql.find("is_male").unwrap();
        let height = sql.find("height").unwrap();
        let name = sql.find("name VARCHAR").unwrap();
        let age = sql.find("age INTEGER").unwrap();
        assert!(is_male < height && height < name && name < age);
    }

    #[test]
    fn test_drop_table_sql() {
        assert_eq!(Schema::drop_table_sql("sample", false), "DROP TABLE sample");
        assert_eq!(Schema::drop_table_sql("sample", true), "DROP TABLE IF EXISTS sample");
    }
}
