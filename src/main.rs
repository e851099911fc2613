use clap::Parser;
use doc_extract::{cli, config, error, export, pages, report, session, transport};
use cli::{Cli, Commands};
use config::Config;
use doc_extract_common::{has_accepted_extension, PendingFile};
use error::{DocExtractError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "doc_extract=debug,doc_extract_common=debug"
    } else {
        "doc_extract=warn,doc_extract_common=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::load()?;

    match cli.command {
        Commands::Upload { file, endpoint, output, format, edits, pages_dir, page } => {
            println!("📄 doc-extract - アップロード\n");

            // 1. ファイル選択
            if !file.exists() {
                return Err(DocExtractError::FileNotFound(file.display().to_string()));
            }
            let file_name = file
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| file.display().to_string());
            if !has_accepted_extension(&file_name) {
                tracing::warn!(file = %file_name, "extension is not one of .pdf/.txt/.doc/.docx");
            }
            let bytes = std::fs::read(&file)?;

            let mut session = session::Session::new();
            session.select_file(Some(PendingFile::new(file_name, bytes)));
            println!("[1/3] {}", report::render_status(session.state()));

            // 2. 送信
            let endpoint = config.resolve_endpoint(endpoint.as_deref())?;
            let transport = transport::HttpTransport::new(&endpoint);
            println!("[2/3] 送信中... ({})", transport.upload_url());

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::with_template("{spinner} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.set_message("抽出結果を待っています");
            spinner.enable_steady_tick(Duration::from_millis(100));
            session.submit(&transport).await;
            spinner.finish_and_clear();

            if let Some(message) = session.state().error_message() {
                return Err(DocExtractError::UploadFailed(message.to_string()));
            }
            println!("✔ {}\n", report::render_status(session.state()));

            // 項目の上書き
            for (key, value) in &edits {
                if session.edit_field(key, value) {
                    println!("- {} を上書き", key);
                } else {
                    tracing::warn!(key = %key, "no such field; edit ignored");
                    println!("- {} は抽出項目にありません（無視）", key);
                }
            }

            if let Some(fields) = session.fields() {
                if !fields.is_empty() {
                    println!("{}\n", report::render_fields(fields));
                }
            }

            // ページ画像
            if let Some(dir) = pages_dir {
                match page {
                    Some(number) => {
                        let count = session.state().page_count();
                        let index = number.checked_sub(1);
                        if !index.is_some_and(|i| session.select_page(i)) {
                            return Err(DocExtractError::PageOutOfRange { requested: number, count });
                        }
                        if let Some(path) = pages::save_selected_page(session.state(), &dir)? {
                            println!("✔ ページ画像: {}", path.display());
                        }
                    }
                    None => {
                        let saved = pages::save_all_pages(session.state(), &dir)?;
                        println!("✔ ページ画像: {}枚 → {}", saved.len(), dir.display());
                    }
                }
            }

            // 3. エクスポート
            println!("[3/3] エクスポート中... ({})", format);
            let output_dir = output_dir(output, &config);
            if let Some(fields) = session.fields() {
                for path in export::export_fields(fields, format, &output_dir)? {
                    println!("✔ 出力: {}", path.display());
                }
            }

            println!("\n✅ 完了");
        }

        Commands::Export { input, output, format } => {
            println!("📄 doc-extract - エクスポート\n");

            let fields = export::load_fields(&input)?;
            println!("✔ {}項目を読み込み", fields.len());

            let output_dir = output_dir(output, &config);
            for path in export::export_fields(&fields, format, &output_dir)? {
                println!("✔ 出力: {}", path.display());
            }

            println!("\n✅ エクスポート完了");
        }

        Commands::Config { set_endpoint, show } => {
            let mut config = config;

            if let Some(endpoint) = set_endpoint {
                config.set_endpoint(endpoint)?;
                println!("✔ 接続先を設定しました: {}", config.endpoint);
            }

            if show {
                println!("設定:");
                println!("  接続先: {}", config.endpoint);
                println!(
                    "  出力先: {}",
                    config
                        .output_dir
                        .as_ref()
                        .map_or_else(|| ".".to_string(), |p| p.display().to_string())
                );
                if let Ok(env_endpoint) = std::env::var(config::ENDPOINT_ENV) {
                    println!("  環境変数 {}: {}", config::ENDPOINT_ENV, env_endpoint);
                }
            }
        }
    }

    Ok(())
}

fn output_dir(output: Option<PathBuf>, config: &Config) -> PathBuf {
    output
        .or_else(|| config.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}
