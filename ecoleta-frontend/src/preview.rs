use wasm_bindgen::JsValue;
use web_sys::Url;

/// A `blob:` URL that is revoked when dropped.
#[derive(Debug)]
pub struct ObjectUrl(String);

impl ObjectUrl {
    pub fn create(file: &web_sys::File) -> Result<Self, JsValue> {
        Url::create_object_url_with_blob(file).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        log::debug!("Revoke {}", self.0);
        if let Err(err) = Url::revoke_object_url(&self.0) {
            log::warn!("Unable to revoke {}: {err:?}", self.0);
        }
    }
}
