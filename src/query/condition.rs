use crate::Descriptor;
use crate::Error;
use crate::Result;
use crate::Value;
use crate::naming::sanitize;

/// Render a value as a SQL literal.
///
/// Text is single-quoted; booleans arrive as integers. Every rendered
/// literal, quoted or not, is passed through [`sanitize`] first.
pub fn render_literal(value: &Value) -> Result<String> {
    let literal = match value {
        Value::Null => "NULL".to_string(),
        Value::Integer(v) => sanitize(&v.to_string()),
        Value::Real(v) => sanitize(&format!("{:?}", v)),
        Value::Text(v) => format!("'{}'", sanitize(v)),
        Value::Blob(_) => return Err(Error::UnsupportedType("blob".to_string())),
    };
    Ok(literal)
}

/// `col = value` pairs for every key field of an instance, joined by `AND`
///
/// Only key fields are read; non-key values on a key object are ignored.
#[derive(Clone, Debug)]
pub struct KeyFilter {
    parts: Vec<String>,
}

impl KeyFilter {
    pub fn of<T>(descriptor: &Descriptor<T>, key: &T) -> Result<Self> {
        let parts = descriptor
            .key_fields()
            .iter()
            .map(|field| Ok(format!("{}={}", field.column(), render_literal(&field.get(key))?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { parts })
    }

    pub fn sql(&self) -> String {
        self.parts.join(" AND ")
    }
}
