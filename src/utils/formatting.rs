//! Formatting utilities used for CLI outputs.

use crate::errors::AppResult;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Pretty JSON with a four-space indent.
pub fn to_indented_json<T: Serialize + ?Sized>(value: &T) -> AppResult<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
