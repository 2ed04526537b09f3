use super::prelude::*;
use crate::payload::PointForm;

pub async fn submit_point<G>(gateway: &G, form: &PointForm<G::File>) -> Result<()>
where
    G: PointGateway + ?Sized,
{
    log::debug!("Submit point with {} form fields", form.len());
    gateway.create_point(form).await.inspect_err(|err| {
        log::error!("Unable to create point: {err}");
    })?;
    log::info!("Created a new collection point");
    Ok(())
}
