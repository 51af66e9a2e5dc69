use crate::descriptor::Descriptor;
use crate::descriptor::MappedClass;
use crate::error::Result;

/// A row type that can describe itself to the mapper
///
/// This trait is typically implemented via the `#[derive(Mapped)]` macro.
///
/// ```ignore
/// #[derive(Clone, Debug, Default, Mapped)]
/// #[rowmap(table_name = "sample")]
/// pub struct Sample {
///     #[rowmap(key)]
///     pub id: i32,
///     pub name: String,
/// }
///
/// let mapper = Mapper::<Sample>::with_database(&db).await?;
/// ```
pub trait Mapped: Sized + Send + Sync + 'static {
    fn mapped_class() -> MappedClass<Self>;

    /// Validate the description into a descriptor
    fn descriptor() -> Result<Descriptor<Self>> {
        Descriptor::build(Self::mapped_class())
    }
}
