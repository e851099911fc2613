//! doc-extract
//!
//! 文書を抽出サービスへアップロードし、抽出項目とページ画像を受け取り、
//! 項目を編集してJSON/CSVにエクスポートする。

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod pages;
pub mod report;
pub mod session;
pub mod transport;
