//! Statement builders
//!
//! Each builder renders its statement with `build()` and runs it with an
//! async executor. Values are inlined as sanitized literals.

pub(crate) mod condition;
pub(crate) mod delete;
pub(crate) mod insert;
pub(crate) mod select;
pub(crate) mod update;

pub use condition::KeyFilter;
pub use condition::render_literal;
pub use delete::Delete;
pub use insert::Insert;
pub use select::Select;
pub use update::Update;

pub mod prelude {
    pub use super::condition::KeyFilter;
    pub use super::delete::Delete;
    pub use super::insert::Insert;
    pub use super::select::Select;
    pub use super::update::Update;
}
