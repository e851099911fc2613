//! ブラウザでのファイルダウンロード
//!
//! Blob → 一時オブジェクトURL → `<a download>` クリック の順で保存させる。
//! オブジェクトURLは `ObjectUrl` のDropで必ず解放される。

use doc_extract_common::DownloadFile;
use js_sys::Array;
use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// 一時オブジェクトURL（Dropでrevoke）
struct ObjectUrl(String);

impl ObjectUrl {
    fn create(blob: &Blob) -> Result<Self, JsValue> {
        Url::create_object_url_with_blob(blob).map(Self)
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.0);
    }
}

fn text_blob(content: &str, mime_type: &str) -> Result<Blob, JsValue> {
    let parts = Array::of1(&JsValue::from_str(content));
    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    Blob::new_with_str_sequence_and_options(&parts, &options)
}

/// テキストをファイルとしてダウンロードさせる
pub fn download_text(content: &str, file_name: &str, mime_type: &str) -> Result<(), JsValue> {
    let blob = text_blob(content, mime_type)?;
    let url = ObjectUrl::create(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(url.as_str());
    anchor.set_download(file_name);
    anchor.click();

    Ok(())
}

pub fn download(file: &DownloadFile) -> Result<(), JsValue> {
    download_text(&file.content, &file.file_name, &file.mime_type)
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_text_blob_has_type_and_size() {
        let blob = text_blob("Parameter,Value", "text/csv").expect("Blob creation failed");
        assert_eq!(blob.type_(), "text/csv");
        assert_eq!(blob.size() as usize, "Parameter,Value".len());
    }

    #[wasm_bindgen_test]
    fn wasm_object_url_is_blob_url() {
        let blob = text_blob("{}", "application/json").expect("Blob creation failed");
        let url = ObjectUrl::create(&blob).expect("object URL failed");
        assert!(url.as_str().starts_with("blob:"));
    }
}
