use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;

use ecoleta_core::{
    entities::Item,
    gateways::{self, CatalogGateway, PointGateway},
    payload::{Part, PointForm},
};

use crate::{classify, ensure_success, get_json, http_client, ImageFile, Result};

/// Client of the Ecoleta backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl BackendClient {
    pub fn try_new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: http_client(timeout)?,
            url: url.into(),
            timeout,
        })
    }

    pub async fn items(&self) -> Result<Vec<ecoleta_boundary::Item>> {
        let url = format!("{}/items", self.url);
        get_json(&self.client, &url, self.timeout).await
    }

    pub async fn create_point(&self, form: &PointForm<ImageFile>) -> Result<()> {
        let url = format!("{}/points", self.url);
        let body = multipart_form(form)?;
        log::debug!("POST {url}");
        let response = self
            .client
            .post(&url)
            .multipart(body)
            .send()
            .await
            .map_err(|err| classify(err, self.timeout))?;
        ensure_success(response).await?;
        Ok(())
    }
}

fn multipart_form(form: &PointForm<ImageFile>) -> Result<multipart::Form> {
    let mut body = multipart::Form::new();
    for (name, part) in form.parts() {
        body = match part {
            Part::Text(value) => body.text(name, value.clone()),
            Part::File(image) => {
                let part = multipart::Part::bytes(image.bytes().to_vec())
                    .file_name(image.name().to_owned())
                    .mime_str(image.media_type())?;
                body.part(name, part)
            }
        };
    }
    Ok(body)
}

#[async_trait(?Send)]
impl CatalogGateway for BackendClient {
    async fn items(&self) -> gateways::Result<Vec<Item>> {
        let items = BackendClient::items(self).await?;
        Ok(items.into_iter().map(Item::from).collect())
    }
}

#[async_trait(?Send)]
impl PointGateway for BackendClient {
    type File = ImageFile;

    async fn create_point(&self, form: &PointForm<Self::File>) -> gateways::Result<()> {
        Ok(BackendClient::create_point(self, form).await?)
    }
}
