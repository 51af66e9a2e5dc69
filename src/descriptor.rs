//! Mapped-type descriptions and their validated descriptors
//!
//! A [`MappedClass`] is the caller-built description of a row type: the table
//! name marker, a zero-argument constructor and an ordered list of
//! [`FieldDef`]s with their accessor pairs. [`Descriptor::build`] validates it
//! once and produces the immutable [`Descriptor`] every statement and row
//! conversion works from.
//!
//! ```ignore
//! let class = MappedClass::<Person>::new()
//!     .table_name("people")
//!     .constructor(Person::default)
//!     .field(FieldDef::new::<i32>("id").key().getter(|p: &Person| p.id).setter(|p: &mut Person, v| p.id = v))
//!     .field(
//!         FieldDef::new::<String>("fullName")
//!             .getter(|p: &Person| p.full_name.clone())
//!             .setter(|p: &mut Person, v| p.full_name = v),
//!     );
//! let descriptor = Descriptor::build(class)?;
//! ```

use std::fmt;

use crate::error::Error;
use crate::error::Result;
use crate::naming::camel_to_underscore;
use crate::naming::sanitize;
use crate::types::DeclaredType;
use crate::types::TypeInfo;
use crate::value::FromValue;
use crate::value::IntoValue;
use crate::value::Value;

type GetFn<T> = Box<dyn Fn(&T) -> Value + Send + Sync>;
type SetFn<T> = Box<dyn Fn(&mut T, Value) -> Result<()> + Send + Sync>;

struct Getter<T> {
    returns: DeclaredType,
    f:       GetFn<T>,
}

struct Setter<T> {
    accepts: DeclaredType,
    f:       SetFn<T>,
}

/// One field of a mapped type, as declared by the caller
pub struct FieldDef<T> {
    name:     String,
    declared: DeclaredType,
    key:      bool,
    skip:     bool,
    getter:   Option<Getter<T>>,
    setter:   Option<Setter<T>>,
}

impl<T: 'static> FieldDef<T> {
    /// Declare a field named `name` holding a `V`
    pub fn new<V: 'static>(name: impl Into<String>) -> Self {
        Self {
            name:     name.into(),
            declared: DeclaredType::of::<V>(),
            key:      false,
            skip:     false,
            getter:   None,
            setter:   None,
        }
    }

    /// Mark the field as part of the primary key
    pub fn key(mut self) -> Self {
        self.key = true;
        self
    }

    /// Exclude the field from mapping entirely
    pub fn skip(mut self) -> Self {
        self.skip = true;
        self
    }

    pub fn getter<W, F>(mut self, f: F) -> Self
    where
        W: IntoValue + 'static,
        F: Fn(&T) -> W + Send + Sync + 'static,
    {
        self.getter = Some(Getter { returns: DeclaredType::of::<W>(), f: Box::new(move |object| f(object).into_value()) });
        self
    }

    pub fn setter<W, F>(mut self, f: F) -> Self
    where
        W: FromValue + 'static,
        F: Fn(&mut T, W) + Send + Sync + 'static,
    {
        self.setter = Some(Setter {
            accepts: DeclaredType::of::<W>(),
            f:       Box::new(move |object, value| {
                f(object, W::from_value(value)?);
                Ok(())
            }),
        });
        self
    }
}

impl<T> FieldDef<T> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declared_type(&self) -> DeclaredType {
        self.declared
    }

    pub fn is_key(&self) -> bool {
        self.key
    }

    pub fn is_skipped(&self) -> bool {
        self.skip
    }

    /// True iff both accessors exist and both operate on exactly the declared
    /// type of the field.
    pub fn has_accessors(&self) -> bool {
        match (&self.getter, &self.setter) {
            (Some(getter), Some(setter)) => getter.returns == self.declared && setter.accepts == self.declared,
            _ => false,
        }
    }
}

impl<T> fmt::Debug for FieldDef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDef")
            .field("name", &self.name)
            .field("declared", &self.declared.name())
            .field("key", &self.key)
            .field("skip", &self.skip)
            .field("has_accessors", &self.has_accessors())
            .finish()
    }
}

/// Caller-built description of a mapped type
pub struct MappedClass<T> {
    type_name:   &'static str,
    table_name:  Option<String>,
    constructor: Option<fn() -> T>,
    fields:      Vec<FieldDef<T>>,
}

impl<T: 'static> MappedClass<T> {
    pub fn new() -> Self {
        Self { type_name: std::any::type_name::<T>(), table_name: None, constructor: None, fields: Vec::new() }
    }

    /// The table-name marker. A class without one cannot be mapped.
    pub fn table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    /// The zero-argument constructor used to create blank instances
    pub fn constructor(mut self, constructor: fn() -> T) -> Self {
        self.constructor = Some(constructor);
        self
    }

    pub fn field(mut self, field: FieldDef<T>) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(&self) -> &[FieldDef<T>] {
        &self.fields
    }
}

impl<T: 'static> Default for MappedClass<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A validated field: both accessors present, type mapped, column name derived
pub struct Field<T> {
    name:      String,
    column:    String,
    type_info: TypeInfo,
    get:       GetFn<T>,
    set:       SetFn<T>,
}

impl<T> Field<T> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn type_info(&self) -> TypeInfo {
        self.type_info
    }

    /// Read the field through its getter
    pub fn get(&self, object: &T) -> Value {
        (self.get)(object)
    }

    /// Write the field through its setter, narrowing the value to the
    /// declared type first
    pub fn set(&self, object: &mut T, value: Value) -> Result<()> {
        (self.set)(object, value)
    }
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("column", &self.column)
            .field("type_info", &self.type_info)
            .finish()
    }
}

/// Immutable schema summary of one mapped type
pub struct Descriptor<T> {
    table_name:     String,
    key_fields:     Vec<Field<T>>,
    non_key_fields: Vec<Field<T>>,
    constructor:    fn() -> T,
}

impl<T> Descriptor<T> {
    /// Validate a mapped class.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] when the table-name marker or constructor is
    /// missing, when a field lacks a matching getter/setter pair, or when no
    /// field is marked as key. [`Error::UnsupportedType`] when a field's type
    /// has no column mapping.
    pub fn build(class: MappedClass<T>) -> Result<Self> {
        let MappedClass { type_name, table_name, constructor, fields } = class;

        let table_name = table_name
            .ok_or_else(|| Error::Configuration(format!("Type {} has no table name marker", type_name)))?;
        let constructor = constructor
            .ok_or_else(|| Error::Configuration(format!("Type {} has no zero-argument constructor", type_name)))?;

        let mut key_fields = Vec::new();
        let mut non_key_fields = Vec::new();

        for def in fields {
            if def.skip {
                continue;
            }

            let declared = def.declared;
            let (getter, setter) = match (def.getter, def.setter) {
                (Some(getter), Some(setter)) if getter.returns == declared && setter.accepts == declared => {
                    (getter, setter)
                }
                _ => {
                    tracing::error!(field = %def.name, "Field does not have set and/or get accessors");
                    return Err(Error::Configuration(format!(
                        "The field {} does not have set and/or get accessors",
                        def.name
                    )));
                }
            };

            let type_info = TypeInfo::lookup(declared)?;
            let key = def.key;

            let field = Field {
                column: sanitize(&camel_to_underscore(&def.name)),
                name: def.name,
                type_info,
                get: getter.f,
                set: setter.f,
            };

            if key { key_fields.push(field) } else { non_key_fields.push(field) }
        }

        if key_fields.is_empty() {
            tracing::error!(type_name, "There are no fields marked as keys");
            return Err(Error::Configuration(format!("There are no fields marked as keys in {}", type_name)));
        }

        Ok(Self { table_name: sanitize(&table_name), key_fields, non_key_fields, constructor })
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn key_fields(&self) -> &[Field<T>] {
        &self.key_fields
    }

    pub fn non_key_fields(&self) -> &[Field<T>] {
        &self.non_key_fields
    }

    /// All mapped fields, non-key first, then key
    pub fn fields(&self) -> impl Iterator<Item = &Field<T>> {
        self.non_key_fields.iter().chain(self.key_fields.iter())
    }

    pub fn is_composite(&self) -> bool {
        self.key_fields.len() > 1
    }

    /// A blank instance from the zero-argument constructor
    pub fn new_instance(&self) -> T {
        (self.constructor)()
    }
}

impl<T> fmt::Debug for Descriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("table_name", &self.table_name)
            .field("key_fields", &self.key_fields)
            .field("non_key_fields", &self.non_key_fields)
            .field("is_composite", &self.is_composite())
            .finish()
    }
}
