use std::time::Duration;

use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use ecoleta_boundary::{RegionRecord, SubregionRecord};

use crate::{into_json, with_timeout, Result, DEFAULT_NETWORK_TIMEOUT};

/// Localities API of the IBGE.
#[derive(Clone)]
pub struct GeographyApi {
    url: String,
    timeout: Duration,
}

impl GeographyApi {
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

    pub async fn estados(&self) -> Result<Vec<RegionRecord>> {
        let url = format!("{}/estados", self.url);
        self.get(&url).await
    }

    pub async fn microrregioes(&self, uf: &str) -> Result<Vec<SubregionRecord>> {
        let uf = utf8_percent_encode(uf, NON_ALPHANUMERIC);
        let url = format!("{}/estados/{uf}/microrregioes", self.url);
        self.get(&url).await
    }

    async fn get<T>(&self, url: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        with_timeout(self.timeout, async {
            let response = Request::get(url).send().await?;
            into_json(response).await
        })
        .await
    }
}
