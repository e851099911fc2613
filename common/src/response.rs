//! アップロードレスポンスの正規化
//!
//! 処理順序:
//! 1. ボディは常にテキストとして読む（ステータスに関係なく）
//! 2. JSONとして解釈し、失敗時は空の構造として扱う
//! 3. 2xx以外なら `detail` → 生テキスト → ステータスコード の順でメッセージを決める
//! 4. 成功時は `extracted_data` と `pdf_images` を取り出す（無ければ空）

use crate::error::{ExtractError, Result};
use crate::types::{ExtractionPayload, FieldMap};
use serde_json::{Map, Value};

/// トランスポート層から受け取った生レスポンス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// パース済みボディの形
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseShape {
    /// トップレベルがJSONオブジェクト
    Object(Map<String, Value>),
    /// JSONでない、またはオブジェクト以外
    Unrecognized,
}

impl ResponseShape {
    pub fn parse(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(map)) => ResponseShape::Object(map),
            _ => ResponseShape::Unrecognized,
        }
    }

    fn get(&self, key: &str) -> Option<&Value> {
        match self {
            ResponseShape::Object(map) => map.get(key),
            ResponseShape::Unrecognized => None,
        }
    }

    /// `detail` フィールド（空文字・null は無しとみなす）
    pub fn detail(&self) -> Option<String> {
        match self.get("detail")? {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// `extracted_data` をフィールドマップに変換（オブジェクト以外は空）
    pub fn fields(&self) -> FieldMap {
        match self.get("extracted_data") {
            Some(Value::Object(map)) => fields_from_object(map),
            _ => FieldMap::new(),
        }
    }

    /// `pdf_images` を順序通りに取り出す（配列以外は空、文字列以外の要素は除外）
    pub fn pages(&self) -> Vec<String> {
        match self.get("pdf_images") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// JSONオブジェクトをフィールドマップに変換（順序保持）
///
/// 文字列はそのまま、null は空文字、それ以外はJSON表記にする。
pub fn fields_from_object(map: &Map<String, Value>) -> FieldMap {
    map.iter()
        .map(|(key, value)| (key.clone(), value_to_text(value)))
        .collect()
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// 2xx以外のときのエラーメッセージ
fn failure_message(shape: &ResponseShape, response: &RawResponse) -> String {
    if let Some(detail) = shape.detail() {
        return detail;
    }
    if !response.body.is_empty() {
        return response.body.clone();
    }
    format!("Request failed with status {}", response.status)
}

/// アップロードレスポンスを正規化
///
/// # Returns
/// * `Ok(ExtractionPayload)` - 2xx（ボディが壊れていても空の結果）
/// * `Err(ExtractError::Server)` - 2xx以外
pub fn parse_upload_response(response: &RawResponse) -> Result<ExtractionPayload> {
    let shape = ResponseShape::parse(&response.body);

    if !response.is_success() {
        let message = failure_message(&shape, response);
        tracing::debug!(status = response.status, %message, "upload rejected");
        return Err(ExtractError::Server {
            status: response.status,
            message,
        });
    }

    Ok(ExtractionPayload {
        fields: shape.fields(),
        pages: shape.pages(),
    })
}
