use super::prelude::*;
use crate::cascade::SubregionRequest;

pub async fn load_regions<G>(gateway: &G) -> Result<Vec<Region>>
where
    G: GeographyGateway + ?Sized,
{
    let regions = gateway.regions().await.inspect_err(|err| {
        log::warn!("Unable to load regions: {err}");
    })?;
    log::debug!("Loaded {} regions", regions.len());
    Ok(regions)
}

/// Fetches the subregions for a pending cascade request.
///
/// The result must be handed back to the cascade together with
/// `request` so that it can be discarded if it arrived too late.
pub async fn load_subregions<G>(gateway: &G, request: &SubregionRequest) -> Result<Vec<Subregion>>
where
    G: GeographyGateway + ?Sized,
{
    let region = &request.region;
    let subregions = gateway.subregions(region).await.inspect_err(|err| {
        log::warn!("Unable to load subregions of {region}: {err}");
    })?;
    log::debug!(
        "Loaded {} subregions of {region} ({:?})",
        subregions.len(),
        request.token
    );
    Ok(subregions)
}
