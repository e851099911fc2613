//! 抽出サービスへのアップロード（fetch + FormData）
//!
//! ステータスに関係なくボディをテキストで読み、解釈は共通ライブラリに任せる。

use doc_extract_common::{ExtractError, PendingFile, RawResponse};
use js_sys::{Array, Uint8Array};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Request, RequestInit, Response};

/// 抽出サービスのオリジン（ビルド時に `DOC_EXTRACT_ORIGIN` で変更可）
pub const API_ORIGIN: &str = match option_env!("DOC_EXTRACT_ORIGIN") {
    Some(origin) => origin,
    None => "http://localhost:8000",
};

/// multipartのフィールド名
const UPLOAD_FIELD: &str = "file";

pub fn upload_url(origin: &str) -> String {
    format!("{}/upload", origin.trim_end_matches('/'))
}

/// JSの例外からメッセージを取り出す
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_default()
}

fn transport_error(value: JsValue) -> ExtractError {
    ExtractError::Transport(js_error_message(&value))
}

fn build_form(file: &PendingFile) -> Result<FormData, JsValue> {
    let bytes = Uint8Array::from(file.bytes.as_slice());
    let parts = Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    options.set_type(file.mime_type());
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;

    let form = FormData::new()?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, &blob, &file.file_name)?;
    Ok(form)
}

async fn send(origin: &str, file: &PendingFile) -> Result<RawResponse, JsValue> {
    let form = build_form(file)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(&upload_url(origin), &opts)?;
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let text = JsFuture::from(resp.text()?).await?;
    Ok(RawResponse {
        status: resp.status(),
        body: text.as_string().unwrap_or_default(),
    })
}

/// 選択ファイルを `POST {origin}/upload` に送信
pub async fn post_upload(origin: &str, file: &PendingFile) -> Result<RawResponse, ExtractError> {
    send(origin, file).await.map_err(transport_error)
}

/// 選択された `File` を読み込んで送信用に保持する
pub async fn read_file(file: &web_sys::File) -> Result<PendingFile, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("読込失敗: {}", js_error_message(&e)))?;
    let bytes = Uint8Array::new(&buffer).to_vec();

    let pending = PendingFile::new(file.name(), bytes);
    let mime = file.type_();
    Ok(if mime.is_empty() {
        pending
    } else {
        pending.with_content_type(mime)
    })
}


#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_build_form_contains_file_field() {
        let file = PendingFile::new("invoice.pdf", b"%PDF".to_vec());
        let form = build_form(&file).expect("FormData creation failed");
        assert!(form.has(UPLOAD_FIELD));
    }

    #[wasm_bindgen_test]
    fn wasm_js_error_message() {
        let error = js_sys::Error::new("Failed to fetch");
        assert_eq!(js_error_message(&error.into()), "Failed to fetch");
        assert_eq!(js_error_message(&JsValue::from_str("plain")), "plain");
        assert_eq!(js_error_message(&JsValue::NULL), "");
    }
}
