//! Identifier and literal helpers shared by the DDL and DML builders

/// Translate a field identifier into its column name.
///
/// An underscore is inserted at every boundary between an ASCII lowercase
/// letter and a following ASCII uppercase letter, then the whole string is
/// lower-cased: `isMale` becomes `is_male`. Identifiers that are already
/// snake case pass through unchanged.
pub fn camel_to_underscore(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;

    for c in name.chars() {
        if prev_lower && c.is_ascii_uppercase() {
            result.push('_');
        }
        prev_lower = c.is_ascii_lowercase();
        result.extend(c.to_lowercase());
    }

    result
}

/// Strip apostrophes, double quotes and backslashes.
///
/// Every value interpolated into statement text goes through here. This is
/// textual filtering, not parameter binding: the stripped characters are
/// lost from stored strings.
pub fn sanitize(value: &str) -> String {
    value.chars().filter(|c| !matches!(c, '\'' | '"' | '\\')).collect()
}
