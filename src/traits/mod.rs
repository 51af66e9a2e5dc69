pub(crate) mod dao;
pub(crate) mod mapped;

pub mod prelude {
    pub use super::dao::Dao;
    pub use super::mapped::Mapped;
}
