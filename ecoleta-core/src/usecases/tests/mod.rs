use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    time::Duration,
};

use async_trait::async_trait;
use tokio::sync::oneshot;

use super::*;
use crate::{
    cascade::Resolution,
    entities::*,
    error::GatewayError,
    gateways::*,
    payload::{PointForm, FIELD_IMAGE, FIELD_LATITUDE, FIELD_LONGITUDE},
    state::CreatePointState,
    submission::SubmissionError,
};


type Image = &'static str;

#[derive(Default)]
pub struct MockGeolocation(pub Option<Coordinate>);

#[async_trait(?Send)]
impl GeolocationGateway for MockGeolocation {
    async fn current_position(&self) -> Option<Coordinate> {
        self.0
    }
}

/// Replays canned responses in order.
#[derive(Default)]
pub struct MockCatalog {
    responses: RefCell<VecDeque<Result<Vec<Item>>>>,
    calls: Cell<usize>,
}

impl MockCatalog {
    pub fn respond(self, response: Result<Vec<Item>>) -> Self {
        self.responses.borrow_mut().push_back(response);
        self
    }
}

#[async_trait(?Send)]
impl CatalogGateway for MockCatalog {
    async fn items(&self) -> Result<Vec<Item>> {
        self.calls.set(self.calls.get() + 1);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Fetch("no more responses".into())))
    }
}

type Gate = oneshot::Receiver<Result<Vec<Subregion>>>;

/// Subregion responses are held back until the test releases them.
#[derive(Default)]
pub struct MockGeography {
    regions: Vec<Region>,
    gates: RefCell<Vec<(Region, Gate)>>,
}

impl MockGeography {
    pub fn with_regions(regions: &[&str]) -> Self {
        Self {
            regions: regions.iter().copied().map(Region::from).collect(),
            ..Default::default()
        }
    }

    pub fn gate(&self, region: &str) -> oneshot::Sender<Result<Vec<Subregion>>> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().push((region.into(), rx));
        tx
    }
}

#[async_trait(?Send)]
impl GeographyGateway for MockGeography {
    async fn regions(&self) -> Result<Vec<Region>> {
        Ok(self.regions.clone())
    }

    async fn subregions(&self, region: &Region) -> Result<Vec<Subregion>> {
        let gate = {
            let mut gates = self.gates.borrow_mut();
            let pos = gates
                .iter()
                .position(|(r, _)| r == region)
                .ok_or_else(|| GatewayError::Fetch(format!("no gate for {region}")))?;
            gates.remove(pos).1
        };
        gate.await
            .map_err(|_| GatewayError::Fetch("gate dropped".into()))?
    }
}

/// Records every submitted form.
#[derive(Default)]
pub struct MockPoints {
    responses: RefCell<VecDeque<Result<()>>>,
    submitted: RefCell<Vec<PointForm<Image>>>,
}

impl MockPoints {
    pub fn respond(self, response: Result<()>) -> Self {
        self.responses.borrow_mut().push_back(response);
        self
    }

    pub fn submitted(&self) -> Vec<PointForm<Image>> {
        self.submitted.borrow().clone()
    }
}

#[async_trait(?Send)]
impl PointGateway for MockPoints {
    type File = Image;

    async fn create_point(&self, form: &PointForm<Image>) -> Result<()> {
        self.submitted.borrow_mut().push(form.clone());
        self.responses.borrow_mut().pop_front().unwrap_or(Ok(()))
    }
}

pub fn item(id: u64, title: &str) -> Item {
    Item {
        id: ItemId::new(id),
        title: title.into(),
        image_url: format!("http://localhost:3333/uploads/{id}.svg"),
    }
}

pub fn labels(list: &[&str]) -> Vec<Subregion> {
    list.iter().copied().map(Subregion::from).collect()
}

#[tokio::test]
async fn locate_device_falls_back_to_origin() {
    let pos = locate_device(&MockGeolocation(None)).await;
    assert_eq!(pos, Coordinate::ORIGIN);
    let pos = locate_device(&MockGeolocation(Some(Coordinate::new(-23.5, -46.6)))).await;
    assert_eq!(pos, Coordinate::new(-23.5, -46.6));
}

#[tokio::test]
async fn retry_catalog_after_failure() {
    let gw = MockCatalog::default()
        .respond(Err(GatewayError::Fetch("connection refused".into())))
        .respond(Ok(vec![item(1, "Lâmpadas"), item(2, "Pilhas e Baterias")]));
    let mut state = CreatePointState::<Image>::default();

    assert!(state.begin_catalog_load());
    state.apply_catalog(load_catalog(&gw).await);
    assert!(state.catalog().is_failed());

    assert!(state.begin_catalog_load());
    state.apply_catalog(load_catalog(&gw).await);
    assert_eq!(state.catalog().as_slice().len(), 2);
    assert_eq!(gw.calls.get(), 2);
}

#[tokio::test]
async fn load_regions_once() {
    let gw = MockGeography::with_regions(&["RJ", "SP"]);
    let mut state = CreatePointState::<Image>::default();
    assert!(state.begin_regions_load());
    state.apply_regions(load_regions(&gw).await);
    assert_eq!(state.regions().as_slice(), [Region::from("RJ"), Region::from("SP")]);
    assert!(!state.begin_regions_load());
}

#[tokio::test]
async fn retry_subregions_after_timeout() {
    let gw = MockGeography::default();
    let mut state = CreatePointState::<Image>::default();

    let req = state.select_region(Some("SP".into())).unwrap();
    gw.gate("SP")
        .send(Err(GatewayError::Timeout(Duration::from_secs(10))))
        .unwrap();
    let res = load_subregions(&gw, &req).await;
    assert_eq!(state.apply_subregions(&req, res), Resolution::Applied);
    assert_eq!(
        state.subregions().error(),
        Some(&GatewayError::Timeout(Duration::from_secs(10)))
    );

    let retry = state.retry_subregions().unwrap();
    assert!(retry.token > req.token);
    gw.gate("SP").send(Ok(labels(&["Campinas"]))).unwrap();
    let res = load_subregions(&gw, &retry).await;
    assert_eq!(state.apply_subregions(&retry, res), Resolution::Applied);
    assert_eq!(state.subregions().as_slice(), labels(&["Campinas"]));
}

#[tokio::test]
async fn submission_failure_keeps_the_draft() {
    let gw = MockPoints::default()
        .respond(Err(GatewayError::Fetch("connection refused".into())))
        .respond(Ok(()));
    let mut state = CreatePointState::<Image>::default();
    state.set_contact_field(ContactField::Name, "Coleta Norte");
    state.attach_image("photo.png");

    let form = state.begin_submission().unwrap();
    state.finish_submission(submit_point(&gw, &form).await).unwrap();
    assert!(state.submission().error().is_some());
    assert_eq!(state.draft().contact().name, "Coleta Norte");
    assert_eq!(
        state.begin_submission().unwrap_err(),
        SubmissionError::Unacknowledged
    );

    assert!(state.acknowledge_submission_failure());
    let form = state.begin_submission().unwrap();
    state.finish_submission(submit_point(&gw, &form).await).unwrap();
    assert!(state.submission().is_succeeded());

    let submitted = gw.submitted();
    assert_eq!(submitted.len(), 2);
    assert_eq!(submitted[0], submitted[1]);
    assert_eq!(submitted[1].file(), Some(&"photo.png"));
    assert!(submitted[1].parts().any(|(name, _)| name == FIELD_IMAGE));
}

#[tokio::test]
async fn submission_can_be_retried_after_timeout_and_rejection() {
    let gw = MockPoints::default()
        .respond(Err(GatewayError::Timeout(Duration::from_secs(10))))
        .respond(Err(GatewayError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        }))
        .respond(Ok(()));
    let mut state = CreatePointState::<Image>::default();
    state.set_contact_field(ContactField::Email, "norte@example.org");

    for expected in [
        GatewayError::Timeout(Duration::from_secs(10)),
        GatewayError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        },
    ] {
        let form = state.begin_submission().unwrap();
        state.finish_submission(submit_point(&gw, &form).await).unwrap();
        assert_eq!(state.submission().error(), Some(&expected));
        assert_eq!(state.draft().contact().email, "norte@example.org");
        assert!(state.acknowledge_submission_failure());
    }
    let form = state.begin_submission().unwrap();
    state.finish_submission(submit_point(&gw, &form).await).unwrap();
    assert!(state.submission().is_succeeded());
    assert_eq!(gw.submitted().len(), 3);
}

#[tokio::test]
async fn picked_position_is_submitted_after_failed_geolocation() {
    let mut state = CreatePointState::<Image>::default();
    state.apply_initial_position(Some(locate_device(&MockGeolocation(None)).await));
    assert_eq!(state.initial_position(), Coordinate::ORIGIN);

    state.pick_position(Coordinate::new(-23.5, -46.6));
    let gw = MockPoints::default();
    let form = state.begin_submission().unwrap();
    state.finish_submission(submit_point(&gw, &form).await).unwrap();

    let submitted = gw.submitted();
    let form = &submitted[0];
    assert_eq!(form.text(FIELD_LATITUDE), Some("-23.5"));
    assert_eq!(form.text(FIELD_LONGITUDE), Some("-46.6"));
}
