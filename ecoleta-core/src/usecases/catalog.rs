use super::prelude::*;

pub async fn load_catalog<G>(gateway: &G) -> Result<Vec<Item>>
where
    G: CatalogGateway + ?Sized,
{
    let items = gateway.items().await.inspect_err(|err| {
        log::warn!("Unable to load items: {err}");
    })?;
    log::debug!("Loaded {} items", items.len());
    Ok(items)
}
