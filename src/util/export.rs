//! CSV export for the list pages.
//!
//! The builders are plain string code so they can be tested off-browser;
//! only [`download_csv`] touches the DOM, by minting a Blob object URL and
//! clicking a synthetic anchor.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use wasm_bindgen::JsCast;

/// Quote a field per RFC 4180 when it contains a delimiter, quote, or
/// line break.
pub fn csv_escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_owned()
    }
}

/// One CSV record from its fields.
pub fn csv_line(fields: &[String]) -> String {
    fields.iter().map(|field| csv_escape(field)).collect::<Vec<_>>().join(",")
}

/// Full CSV document: header line plus one line per row, CRLF-terminated.
pub fn csv_document(header: &[&str], rows: &[Vec<String>]) -> String {
    let header: Vec<String> = header.iter().map(|h| (*h).to_owned()).collect();
    let mut document = csv_line(&header);
    document.push_str("\r\n");
    for row in rows {
        document.push_str(&csv_line(row));
        document.push_str("\r\n");
    }
    document
}

/// Trigger a client-side download of `content` as `filename`.
pub fn download_csv(filename: &str, content: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(content));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8");
    let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        return;
    };

    if let Some(anchor) = document
        .create_element("a")
        .ok()
        .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().ok())
    {
        anchor.set_href(&url);
        anchor.set_download(filename);
        // Firefox needs the anchor attached before the synthetic click.
        if let Some(body) = document.body() {
            let _ = body.append_child(&anchor);
            anchor.click();
            anchor.remove();
        }
    }
    let _ = web_sys::Url::revoke_object_url(&url);
}
