use leptos::prelude::document;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::download::{DownloadError, DownloadTarget};

/// Downloads through a Blob, an object URL and a transient `<a download>`.
///
/// The browser may still block or cancel the download; that outcome isn't observable here.
pub struct BrowserDownload;

impl DownloadTarget for BrowserDownload {
    type Blob = Blob;

    fn make_blob(&self, mime: &str, contents: &str) -> Result<Blob, DownloadError> {
        let parts = js_sys::Array::of1(&JsValue::from_str(contents));
        let options = BlobPropertyBag::new();
        options.set_type(mime);
        Blob::new_with_str_sequence_and_options(&parts, &options).map_err(|_| DownloadError::Blob)
    }

    fn object_url(&self, blob: &Blob) -> Result<String, DownloadError> {
        Url::create_object_url_with_blob(blob).map_err(|_| DownloadError::ObjectUrl)
    }

    fn revoke(&self, url: &str) {
        if Url::revoke_object_url(url).is_err() {
            log::warn!("couldn't revoke object URL {url}");
        }
    }

    fn click_link(&self, url: &str, file_name: &str) -> Result<(), DownloadError> {
        let anchor = document()
            .create_element("a")
            .map_err(|_| DownloadError::Anchor)?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| DownloadError::Anchor)?;
        anchor.set_href(url);
        anchor.set_download(file_name);
        anchor.click();
        log::debug!("started download of {file_name}");
        Ok(())
    }
}
