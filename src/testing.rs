//! Hand-built mapped types shared by unit tests

use crate::Descriptor;
use crate::FieldDef;
use crate::MappedClass;

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Sample {
    pub id:        i32,
    pub name:      String,
    pub last_name: String,
}

impl Sample {
    pub fn new(name: &str, last_name: &str, id: i32) -> Self {
        Self { id, name: name.to_string(), last_name: last_name.to_string() }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Composite {
    pub name:    String,
    pub age:     i32,
    pub is_male: bool,
    pub height:  f64,
}

impl Composite {
    pub fn new(name: &str, age: i32, is_male: bool, height: f64) -> Self {
        Self { name: name.to_string(), age, is_male, height }
    }
}

pub(crate) fn sample_descriptor() -> Descriptor<Sample> {
    let class = MappedClass::new()
        .table_name("Sample")
        .constructor(Sample::default)
        .field(FieldDef::new::<i32>("id").key().getter(|s: &Sample| s.id).setter(|s: &mut Sample, v| s.id = v))
        .field(FieldDef::new::<String>("name").getter(|s: &Sample| s.name.clone()).setter(|s: &mut Sample, v| s.name = v))
        .field(
            FieldDef::new::<String>("lastName")
                .getter(|s: &Sample| s.last_name.clone())
                .setter(|s: &mut Sample, v| s.last_name = v),
        );
    Descriptor::build(class).unwrap()
}

pub(crate) fn composite_descriptor() -> Descriptor<Composite> {
    let class = MappedClass::new()
        .table_name("composite")
        .constructor(Composite::default)
        .field(
            FieldDef::new::<String>("name")
                .key()
                .getter(|c: &Composite| c.name.clone())
                .setter(|c: &mut Composite, v| c.name = v),
        )
        .field(FieldDef::new::<i32>("age").key().getter(|c: &Composite| c.age).setter(|c: &mut Composite, v| c.age = v))
        .field(
            FieldDef::new::<bool>("isMale")
                .getter(|c: &Composite| c.is_male)
                .setter(|c: &mut Composite, v| c.is_male = v),
        )
        .field(
            FieldDef::new::<f64>("height").getter(|c: &Composite| c.height).setter(|c: &mut Composite, v| c.height = v),
        );
    Descriptor::build(class).unwrap()
}
