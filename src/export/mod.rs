//! エクスポート（CLI版）
//!
//! 共通ライブラリで生成した `DownloadFile` を出力ディレクトリに書き出す。

use crate::error::{DocExtractError, Result};
use doc_extract_common::{fields_from_object, DownloadFile, FieldMap};
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    #[default]
    Both,
    None,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "both" => Ok(ExportFormat::Both),
            "none" => Ok(ExportFormat::None),
            _ => Err(format!("Unknown format: {}. Use json, csv, both, or none", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Both => write!(f, "both"),
            ExportFormat::None => write!(f, "none"),
        }
    }
}

/// ファイルを出力ディレクトリに保存し、保存先パスを返す
pub fn write_download(file: &DownloadFile, output_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let path = output_dir.join(&file.file_name);
    std::fs::write(&path, &file.content)?;
    tracing::debug!(path = %path.display(), mime = %file.mime_type, "wrote export");
    Ok(path)
}

/// 指定形式でフィールドをエクスポート
pub fn export_fields(
    fields: &FieldMap,
    format: ExportFormat,
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    if matches!(format, ExportFormat::Json | ExportFormat::Both) {
        files.push(DownloadFile::json(fields)?);
    }
    if matches!(format, ExportFormat::Csv | ExportFormat::Both) {
        files.push(DownloadFile::csv(fields));
    }

    files
        .iter()
        .map(|file| write_download(file, output_dir))
        .collect()
}

/// 保存済みの `data.json` を読み込む
pub fn load_fields(path: &Path) -> Result<FieldMap> {
    if !path.exists() {
        return Err(DocExtractError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    match serde_json::from_str::<serde_json::Value>(&content)? {
        serde_json::Value::Object(map) => Ok(fields_from_object(&map)),
        _ => Err(DocExtractError::InvalidInput(format!(
            "{} はJSONオブジェクトではありません",
            path.display()
        ))),
    }
}
