//! Field type mapping
//!
//! Each supported Rust field type maps to one semantic [`FieldType`] and one
//! SQL column type. `Option<_>` of a supported type is its boxed counterpart:
//! same column type, but nullable.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::Error;
use crate::error::Result;

/// Semantic types a mapped field may declare
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// `String`
    Text,
    /// `i32`
    Int32,
    /// `i64`
    Int64,
    /// `i8`
    Byte,
    /// `bool`
    Bool,
    /// `f32`
    Float32,
    /// `f64`
    Float64,
}

impl FieldType {
    /// The column type used in `CREATE TABLE`
    pub const fn sql_type(self) -> &'static str {
        match self {
            FieldType::Text => "VARCHAR(255)",
            FieldType::Int32 => "INTEGER",
            FieldType::Int64 => "BIGINT",
            FieldType::Byte => "TINYINT",
            FieldType::Bool => "BIT",
            FieldType::Float32 => "FLOAT",
            FieldType::Float64 => "DOUBLE PRECISION",
        }
    }
}

/// Runtime identity of a Rust type used as a field, getter result or setter
/// argument
#[derive(Clone, Copy, Debug, Eq)]
pub struct DeclaredType {
    id:   TypeId,
    name: &'static str,
}

impl DeclaredType {
    pub fn of<V: 'static>() -> Self {
        Self { id: TypeId::of::<V>(), name: std::any::type_name::<V>() }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for DeclaredType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Mapping of a declared type onto a column
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypeInfo {
    pub field_type: FieldType,
    pub nullable:   bool,
}

static TYPE_TABLE: LazyLock<HashMap<TypeId, TypeInfo>> = LazyLock::new(|| {
    fn entries<V: 'static>(field_type: FieldType) -> [(TypeId, TypeInfo); 2] {
        [
            (TypeId::of::<V>(), TypeInfo { field_type, nullable: false }),
            (TypeId::of::<Option<V>>(), TypeInfo { field_type, nullable: true }),
        ]
    }

    let mut table = HashMap::new();
    table.extend(entries::<String>(FieldType::Text));
    table.extend(entries::<i32>(FieldType::Int32));
    table.extend(entries::<i64>(FieldType::Int64));
    table.extend(entries::<i8>(FieldType::Byte));
    table.extend(entries::<bool>(FieldType::Bool));
    table.extend(entries::<f32>(FieldType::Float32));
    table.extend(entries::<f64>(FieldType::Float64));
    table
});

impl TypeInfo {
    /// Look up the mapping for a declared type.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedType`] for anything outside the seven supported
    /// scalars and their `Option` counterparts.
    pub fn lookup(declared: DeclaredType) -> Result<Self> {
        TYPE_TABLE.get(&declared.id).copied().ok_or_else(|| Error::UnsupportedType(declared.name.to_string()))
    }

    pub fn of<V: 'static>() -> Result<Self> {
        Self::lookup(DeclaredType::of::<V>())
    }

    /// The nullable counterpart; identity for types that are already nullable
    pub fn boxed(self) -> Self {
        Self { nullable: true, ..self }
    }

    pub fn sql_type(&self) -> &'static str {
        self.field_type.sql_type()
    }
}
