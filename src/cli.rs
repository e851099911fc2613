use clap::{Parser, Subcommand};
use crate::error::{DocExtractError, Result};
use crate::export::ExportFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "doc-extract")]
#[command(about = "文書をアップロードして項目を抽出・編集・エクスポートするツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 文書をアップロードして抽出結果を表示・エクスポート
    Upload {
        /// 文書ファイル（PDF / TXT / DOC / DOCX）
        #[arg(required = true)]
        file: PathBuf,

        /// 抽出サービスのオリジン（省略時: 環境変数 → 設定ファイル）
        #[arg(long)]
        endpoint: Option<String>,

        /// 出力ディレクトリ（デフォルト: カレント）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (json/csv/both/none)
        #[arg(short, long, default_value = "both")]
        format: ExportFormat,

        /// 抽出項目を上書き（KEY=VALUE、複数指定可）
        #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_field_edit_arg)]
        edits: Vec<(String, String)>,

        /// ページ画像の保存先
        #[arg(long)]
        pages_dir: Option<PathBuf>,

        /// 保存するページ番号（1始まり、省略時は全ページ）
        #[arg(long, requires = "pages_dir")]
        page: Option<usize>,
    },

    /// 保存済みJSONからJSON/CSVを再出力
    Export {
        /// 入力JSONファイル（data.json）
        #[arg(required = true)]
        input: PathBuf,

        /// 出力ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (json/csv/both)
        #[arg(short, long, default_value = "csv", value_parser = parse_output_format)]
        format: ExportFormat,
    },

    /// 設定を表示/編集
    Config {
        /// 接続先オリジンを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// `KEY=VALUE` を分解（値は空でもよい、キーは空不可）
pub fn parse_field_edit(s: &str) -> Result<(String, String)> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(DocExtractError::InvalidFieldEdit(s.to_string())),
    }
}

fn parse_field_edit_arg(s: &str) -> std::result::Result<(String, String), String> {
    parse_field_edit(s).map_err(|e| e.to_string())
}

/// 再出力用の形式（何も書かない `none` は受け付けない）
fn parse_output_format(s: &str) -> std::result::Result<ExportFormat, String> {
    match s.parse::<ExportFormat>()? {
        ExportFormat::None => Err("export requires json, csv, or both".to_string()),
        format => Ok(format),
    }
}
