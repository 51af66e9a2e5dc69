//! # rowmap
//!
//! A descriptor-driven object-row mapper for [Turso](https://turso.tech).
//!
//! A row type describes its table once: a table name, a zero-argument
//! constructor and a getter/setter pair per field, with one or more fields
//! marked as key. The mapper validates that description, creates the table
//! if it is missing and then derives every INSERT, UPDATE, DELETE and SELECT
//! from it.
//!
//! ## Quick Start
//!
//! ```ignore
//! use rowmap::prelude::*;
//!
//! #[derive(Clone, Debug, Default, Mapped)]
//! #[rowmap(table_name = "composite")]
//! pub struct Person {
//!     #[rowmap(key)]
//!     pub name: String,
//!     #[rowmap(key)]
//!     pub age: i32,
//!     pub is_male: bool,
//!     pub height: f64,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let db = ConnectOptions::new_local("people.db").open().await?;
//!
//!     // Creates `composite (is_male BIT NOT NULL, height DOUBLE PRECISION NOT NULL,
//!     // name VARCHAR(255) NOT NULL, age INTEGER NOT NULL, PRIMARY KEY (name, age))`
//!     let mapper = Mapper::<Person>::with_database(&db).await?;
//!
//!     let john = Person { name: "John".into(), age: 18, is_male: true, height: 1.84 };
//!     mapper.insert(&john).await;
//!
//!     let key = Person { name: "John".into(), age: 18, ..Default::default() };
//!     let found = mapper.select_by_key(&key).await;
//!
//!     mapper.delete_by_key(&key).await;
//!     Ok(())
//! }
//! ```
//!
//! ## Attributes
//!
//! The `#[rowmap(...)]` attribute supports:
//!
//! - `table_name = "..."` on the struct - the table-name marker; required
//! - `accessors` on the struct - use `get_<field>`/`set_<field>` methods
//! - `key` - mark a field as part of the primary key
//! - `skip` - leave a field out of the mapping
//! - `name = "..."` - the field name the column name is derived from
//!
//! Column names are the field names in lower case with an underscore at
//! every lower-to-upper boundary (`isMale` becomes `is_male`).
//!
//! ## Errors
//!
//! Construction fails with [`Error::Configuration`] or
//! [`Error::UnsupportedType`] when a description is invalid. CRUD calls
//! through [`Dao`] never fail: errors are logged through `tracing` and the
//! call returns nothing, `None` or an empty `Vec`. Use the `try_*` methods
//! on [`Mapper`] to see them.

pub mod connection;
pub mod descriptor;
pub mod error;
pub mod mapper;
pub mod naming;
pub mod prelude;
pub mod query;
pub mod row;
pub mod schema;
pub mod traits;
pub mod types;
pub mod value;

#[cfg(test)]
pub(crate) mod testing;

// Re-export main types at crate root
pub use connection::prelude::*;
pub use descriptor::Descriptor;
pub use descriptor::Field;
pub use descriptor::FieldDef;
pub use descriptor::MappedClass;
pub use error::Error;
pub use error::Result;
pub use mapper::Mapper;
pub use query::Delete;
pub use query::Insert;
pub use query::KeyFilter;
pub use query::Select;
pub use query::Update;
pub use query::render_literal;
pub use row::Materialized;
pub use row::RowMaterializer;
// Re-export the derive macro
pub use rowmap_macros::Mapped;
pub use schema::Schema;
pub use traits::prelude::*;
pub use types::DeclaredType;
pub use types::FieldType;
pub use types::TypeInfo;
pub use value::FromValue;
pub use value::IntoValue;
pub use value::Value;
