//! JSON出力

use crate::error::Result;
use crate::types::FieldMap;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

const INDENT: &[u8] = b"    ";

/// フィールドマップを4スペースインデントのJSONに変換（キー順はマップ順）
pub fn to_json(fields: &FieldMap) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    fields.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}
