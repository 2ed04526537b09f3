use std::path::Path;

use anyhow::{anyhow, bail, Result};

use ecoleta_core::{prelude::*, usecases};
use ecoleta_gateways::{BackendClient, FixedPosition, IbgeClient, ImageFile};

use crate::{
    cli::{Command, CreatePointArgs},
    config::Config,
};

pub async fn run(cfg: Config, command: Command) -> Result<()> {
    let timeout = cfg.network.timeout;
    let backend = BackendClient::try_new(cfg.backend.api_url, timeout)?;
    let geography = IbgeClient::try_new(cfg.geography.api_url, timeout)?;
    match command {
        Command::Items => {
            for item in usecases::load_catalog(&backend).await? {
                println!("{}\t{}", item.id, item.title);
            }
        }
        Command::Regions => {
            for region in usecases::load_regions(&geography).await? {
                println!("{region}");
            }
        }
        Command::Subregions { region } => {
            let subregions = geography.subregions(&Region::from(region)).await?;
            for subregion in subregions {
                println!("{subregion}");
            }
        }
        Command::CreatePoint(args) => {
            let geolocation = FixedPosition(cfg.bootstrap.position);
            let image = args
                .image
                .as_deref()
                .map(ImageFile::from_path)
                .transpose()?;
            create_point(&backend, &geography, &geolocation, args, image).await?;
            println!("Collection point created");
        }
    }
    Ok(())
}

/// Runs the whole "create point" pipeline non-interactively.
///
/// Every choice is checked against the loaded data before
/// anything is submitted.
async fn create_point<B, G, L>(
    backend: &B,
    geography: &G,
    geolocation: &L,
    args: CreatePointArgs,
    image: Option<ImageFile>,
) -> Result<()>
where
    B: CatalogGateway + PointGateway<File = ImageFile>,
    G: GeographyGateway,
    L: GeolocationGateway,
{
    let CreatePointArgs {
        name,
        email,
        whatsapp,
        region,
        subregion,
        lat,
        lng,
        items,
        image: image_path,
    } = args;

    let mut state = CreatePointState::<ImageFile>::default();

    let position = usecases::locate_device(geolocation).await;
    state.apply_initial_position(Some(position));

    state.begin_catalog_load();
    state.begin_regions_load();
    let (catalog, regions) = tokio::join!(
        usecases::load_catalog(backend),
        usecases::load_regions(geography)
    );
    state.apply_catalog(catalog);
    state.apply_regions(regions);
    if let Some(err) = state.catalog().error() {
        bail!("Catalog unavailable: {err}");
    }
    if let Some(err) = state.regions().error() {
        bail!("Regions unavailable: {err}");
    }

    state.set_contact_field(ContactField::Name, name);
    state.set_contact_field(ContactField::Email, email);
    state.set_contact_field(ContactField::Whatsapp, whatsapp);

    let region = Region::from(region);
    if !state.regions().as_slice().contains(&region) {
        bail!("Unknown region: {region}");
    }
    if let Some(request) = state.select_region(Some(region)) {
        let subregions = usecases::load_subregions(geography, &request).await;
        state.apply_subregions(&request, subregions);
    }
    if let Some(err) = state.subregions().error() {
        bail!("Subregions unavailable: {err}");
    }
    let subregion = Subregion::from(subregion);
    if !state.select_subregion(Some(subregion.clone())) {
        bail!("Unknown subregion: {subregion}");
    }

    if let (Some(lat), Some(lng)) = (lat, lng) {
        state.pick_position(Coordinate::new(lat, lng));
    }

    for id in items {
        if !state.catalog().as_slice().iter().any(|item| item.id == id) {
            bail!("Unknown item: {id}");
        }
        state.toggle_item(id);
    }

    if let Some(image) = image {
        let mut dropzone = ImageDropzone::default();
        let image = dropzone.accept([image], |_: &ImageFile| {
            Ok::<_, std::convert::Infallible>(image_path.as_deref().map(Path::to_path_buf))
        })?;
        log::debug!("Attach image {}", image.name());
        state.attach_image(image);
    }

    let form = state.begin_submission()?;
    let result = usecases::submit_point(backend, &form).await;
    state.finish_submission(result)?;
    match state.submission().error() {
        Some(err) => Err(anyhow!("Unable to create point: {err}")),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use async_trait::async_trait;
    use ecoleta_core::{
        gateways,
        payload::{FIELD_ITEMS, FIELD_LATITUDE},
    };

    use super::*;

    #[derive(Default)]
    struct Backend {
        submitted: RefCell<Vec<PointForm<ImageFile>>>,
    }

    #[async_trait(?Send)]
    impl CatalogGateway for Backend {
        async fn items(&self) -> gateways::Result<Vec<Item>> {
            Ok([(3, "Papéis e Papelão"), (7, "Óleo de Cozinha")]
                .into_iter()
                .map(|(id, title)| Item {
                    id: ItemId::new(id),
                    title: title.into(),
                    image_url: String::new(),
                })
                .collect())
        }
    }

    #[async_trait(?Send)]
    impl PointGateway for Backend {
        type File = ImageFile;

        async fn create_point(&self, form: &PointForm<ImageFile>) -> gateways::Result<()> {
            self.submitted.borrow_mut().push(form.clone());
            Ok(())
        }
    }

    struct Geography;

    #[async_trait(?Send)]
    impl GeographyGateway for Geography {
        async fn regions(&self) -> gateways::Result<Vec<Region>> {
            Ok(vec!["RJ".into(), "SP".into()])
        }

        async fn subregions(&self, region: &Region) -> gateways::Result<Vec<Subregion>> {
            match region.as_str() {
                "SP" => Ok(vec!["Campinas".into(), "Santos".into()]),
                _ => Err(GatewayError::Timeout(DEFAULT_NETWORK_TIMEOUT)),
            }
        }
    }

    fn args(region: &str, subregion: &str, items: &[u64]) -> CreatePointArgs {
        CreatePointArgs {
            name: "Coleta Sul".into(),
            email: "sul@example.org".into(),
            whatsapp: "5511999999999".into(),
            region: region.into(),
            subregion: subregion.into(),
            lat: None,
            lng: None,
            items: items.iter().copied().map(ItemId::new).collect(),
            image: None,
        }
    }

    #[tokio::test]
    async fn submit_with_bootstrap_position() {
        let backend = Backend::default();
        let geolocation = FixedPosition(Some(Coordinate::new(-22.9, -47.06)));
        create_point(
            &backend,
            &Geography,
            &geolocation,
            args("SP", "Campinas", &[7, 3]),
            None,
        )
        .await
        .unwrap();

        let submitted = backend.submitted.borrow();
        assert_eq!(submitted.len(), 1);
        let form = &submitted[0];
        assert_eq!(form.text("city"), Some("Campinas"));
        assert_eq!(form.text("uf"), Some("SP"));
        assert_eq!(form.text(FIELD_LATITUDE), Some("-22.9"));
        assert_eq!(form.text(FIELD_ITEMS), Some("7,3"));
        assert!(form.file().is_none());
    }

    #[tokio::test]
    async fn reject_unknown_choices_before_submitting() {
        let backend = Backend::default();
        let geolocation = FixedPosition::default();
        for args in [
            args("MG", "Campinas", &[]),
            args("SP", "Serrana", &[]),
            args("SP", "Campinas", &[42]),
        ] {
            let res = create_point(&backend, &Geography, &geolocation, args, None).await;
            assert!(res.is_err());
        }
        assert!(backend.submitted.borrow().is_empty());
    }

    #[tokio::test]
    async fn report_unavailable_subregions() {
        let backend = Backend::default();
        let err = create_point(
            &backend,
            &Geography,
            &FixedPosition::default(),
            args("RJ", "Serrana", &[]),
            None,
        )
        .await
        .unwrap_err();
        assert!(err.to_string().starts_with("Subregions unavailable"));
        assert!(backend.submitted.borrow().is_empty());
    }
}
