use std::time::Duration;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use ecoleta_boundary::{RegionRecord, SubregionRecord};
use ecoleta_core::{
    entities::{Region, Subregion},
    gateways::{self, GeographyGateway},
};

use crate::{get_json, http_client, Result};

pub const DEFAULT_IBGE_URL: &str = "https://servicodados.ibge.gov.br/api/v1/localidades";

/// Client of the IBGE localities API.
#[derive(Debug, Clone)]
pub struct IbgeClient {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl IbgeClient {
    pub fn try_new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: http_client(timeout)?,
            url: url.into(),
            timeout,
        })
    }

    pub async fn estados(&self) -> Result<Vec<RegionRecord>> {
        let url = format!("{}/estados", self.url);
        get_json(&self.client, &url, self.timeout).await
    }

    pub async fn microrregioes(&self, uf: &str) -> Result<Vec<SubregionRecord>> {
        let url = microrregioes_url(&self.url, uf);
        get_json(&self.client, &url, self.timeout).await
    }
}

fn microrregioes_url(base: &str, uf: &str) -> String {
    let uf = utf8_percent_encode(uf, NON_ALPHANUMERIC);
    format!("{base}/estados/{uf}/microrregioes")
}

#[async_trait(?Send)]
impl GeographyGateway for IbgeClient {
    async fn regions(&self) -> gateways::Result<Vec<Region>> {
        let records = self.estados().await?;
        Ok(records.into_iter().map(Region::from).collect())
    }

    async fn subregions(&self, region: &Region) -> gateways::Result<Vec<Subregion>> {
        let records = self.microrregioes(region.as_str()).await?;
        Ok(records.into_iter().map(Subregion::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_region_in_path() {
        assert_eq!(
            microrregioes_url(DEFAULT_IBGE_URL, "SP"),
            "https://servicodados.ibge.gov.br/api/v1/localidades/estados/SP/microrregioes"
        );
        assert_eq!(
            microrregioes_url("http://localhost", "S P/"),
            "http://localhost/estados/S%20P%2F/microrregioes"
        );
    }
}
