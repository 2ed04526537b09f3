use std::time::Duration;

use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::FormData;

use ecoleta_boundary::Item;
use ecoleta_core::payload::{Part, PointForm};

use crate::{api_error, into_json, with_timeout, Error, Result, DEFAULT_NETWORK_TIMEOUT};

/// Public Ecoleta API
#[derive(Clone)]
pub struct PublicApi {
    url: String,
    timeout: Duration,
}

impl PublicApi {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: DEFAULT_NETWORK_TIMEOUT,
        }
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub async fn items(&self) -> Result<Vec<Item>> {
        let url = format!("{}/items", self.url);
        with_timeout(self.timeout, async {
            let response = Request::get(&url).send().await?;
            into_json(response).await
        })
        .await
    }

    pub async fn create_point(&self, form: &PointForm<web_sys::File>) -> Result<()> {
        let url = format!("{}/points", self.url);
        let body = form_data(form)?;
        with_timeout(self.timeout, async {
            let response = Request::post(&url).body(body)?.send().await?;
            // The body of a created point is not needed.
            if response.ok() {
                Ok(())
            } else {
                Err(api_error(&response).await)
            }
        })
        .await
    }
}

fn form_data(form: &PointForm<web_sys::File>) -> Result<FormData> {
    let data = FormData::new().map_err(js_error)?;
    for (name, part) in form.parts() {
        match part {
            Part::Text(value) => data.append_with_str(name, value),
            Part::File(file) => data.append_with_blob_and_filename(name, file, &file.name()),
        }
        .map_err(js_error)?;
    }
    Ok(data)
}

fn js_error(err: JsValue) -> Error {
    Error::Fetch(
        err.as_string()
            .unwrap_or_else(|| "unknown JS error".to_string()),
    )
}
