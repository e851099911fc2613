//! CSV出力
//!
//! 引用符のエスケープは行わない簡易形式。

use crate::types::FieldMap;

pub const CSV_HEADER: &str = "Parameter,Value";

/// フィールドマップを `Parameter,Value` 形式のCSVに変換（末尾改行なし）
pub fn to_csv(fields: &FieldMap) -> String {
    std::iter::once(CSV_HEADER.to_string())
        .chain(
            fields
                .iter()
                .map(|(key, value)| format!("\"{}\",\"{}\"", key, value)),
        )
        .collect::<Vec<_>>()
        .join("\n")
}
