use async_trait::async_trait;

use ecoleta_core::{
    entities::{Item, Region, Subregion},
    gateways::{self, CatalogGateway, GeographyGateway, PointGateway},
    payload::PointForm,
};

use crate::{GeographyApi, PublicApi};

#[async_trait(?Send)]
impl CatalogGateway for PublicApi {
    async fn items(&self) -> gateways::Result<Vec<Item>> {
        let items = PublicApi::items(self).await?;
        Ok(items.into_iter().map(Item::from).collect())
    }
}

#[async_trait(?Send)]
impl PointGateway for PublicApi {
    type File = web_sys::File;

    async fn create_point(&self, form: &PointForm<Self::File>) -> gateways::Result<()> {
        Ok(PublicApi::create_point(self, form).await?)
    }
}

#[async_trait(?Send)]
impl GeographyGateway for GeographyApi {
    async fn regions(&self) -> gateways::Result<Vec<Region>> {
        let records = self.estados().await?;
        Ok(records.into_iter().map(Region::from).collect())
    }

    async fn subregions(&self, region: &Region) -> gateways::Result<Vec<Subregion>> {
        let records = self.microrregioes(region.as_str()).await?;
        Ok(records.into_iter().map(Subregion::from).collect())
    }
}
