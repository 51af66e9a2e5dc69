//! Prelude module for rowmap
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use rowmap::prelude::*;
//! ```

// Re-export the derive macro
pub use rowmap_macros::Mapped;

pub use crate::connection::prelude::*;
pub use crate::descriptor::Descriptor;
pub use crate::descriptor::FieldDef;
pub use crate::descriptor::MappedClass;
pub use crate::error::Error;
pub use crate::error::Result;
pub use crate::mapper::Mapper;
pub use crate::traits::prelude::*;
pub use crate::value::FromValue;
pub use crate::value::IntoValue;
pub use crate::value::Value;
