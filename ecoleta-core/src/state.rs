use crate::{
    cascade::{Resolution, SubregionCascade, SubregionRequest},
    draft::PointDraft,
    entities::{ContactField, Coordinate, Item, ItemId, Region, Subregion},
    error::GatewayError,
    payload::PointForm,
    remote::Remote,
    submission::{SubmissionError, SubmissionState},
};

/// Everything the "create point" form knows at a given moment.
///
/// All handlers are synchronous. Asynchronous work is split into
/// two transitions: one that issues a request and one that applies
/// its result.
#[derive(Debug, Clone)]
pub struct CreatePointState<F> {
    initial_position: Option<Coordinate>,
    position_picked: bool,
    catalog: Remote<Vec<Item>>,
    regions: Remote<Vec<Region>>,
    cascade: SubregionCascade,
    draft: PointDraft<F>,
    submission: SubmissionState,
}

impl<F> Default for CreatePointState<F> {
    fn default() -> Self {
        Self {
            initial_position: None,
            position_picked: false,
            catalog: Remote::NotAsked,
            regions: Remote::NotAsked,
            cascade: SubregionCascade::default(),
            draft: PointDraft::default(),
            submission: SubmissionState::Idle,
        }
    }
}

impl<F> CreatePointState<F> {
    /// The default center of the map.
    pub fn initial_position(&self) -> Coordinate {
        self.initial_position.unwrap_or(Coordinate::ORIGIN)
    }

    pub const fn catalog(&self) -> &Remote<Vec<Item>> {
        &self.catalog
    }

    pub const fn regions(&self) -> &Remote<Vec<Region>> {
        &self.regions
    }

    pub const fn subregions(&self) -> &Remote<Vec<Subregion>> {
        self.cascade.subregions()
    }

    pub const fn draft(&self) -> &PointDraft<F> {
        &self.draft
    }

    pub const fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn is_item_selected(&self, id: ItemId) -> bool {
        self.draft.items().contains(id)
    }

    pub fn begin_catalog_load(&mut self) -> bool {
        begin_load(&mut self.catalog)
    }

    pub fn apply_catalog(&mut self, result: Result<Vec<Item>, GatewayError>) {
        self.catalog = Remote::from_result(result);
    }

    pub fn begin_regions_load(&mut self) -> bool {
        begin_load(&mut self.regions)
    }

    pub fn apply_regions(&mut self, result: Result<Vec<Region>, GatewayError>) {
        self.regions = Remote::from_result(result);
    }
}

impl<F> CreatePointState<F>
where
    F: Clone,
{
    /// Stores the bootstrapped device position.
    ///
    /// Only the first call has an effect. A position the user has
    /// already picked on the map is never overwritten.
    pub fn apply_initial_position(&mut self, position: Option<Coordinate>) -> bool {
        if self.initial_position.is_some() {
            return false;
        }
        let position = position.unwrap_or(Coordinate::ORIGIN);
        self.initial_position = Some(position);
        if !self.position_picked {
            self.draft = self.draft.with_position(position);
        }
        true
    }

    pub fn set_contact_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.draft = self.draft.with_contact_field(field, value);
    }

    /// Selects a region and issues the fetch of its subregions.
    ///
    /// Selecting the current region again is a no-op.
    pub fn select_region(&mut self, region: Option<Region>) -> Option<SubregionRequest> {
        if self.draft.region() == region.as_ref() {
            return None;
        }
        self.draft = self.draft.with_region(region.clone());
        self.cascade.select(region)
    }

    pub fn retry_subregions(&mut self) -> Option<SubregionRequest> {
        self.cascade.retry()
    }

    pub fn apply_subregions(
        &mut self,
        request: &SubregionRequest,
        result: Result<Vec<Subregion>, GatewayError>,
    ) -> Resolution {
        let resolution = self.cascade.resolve(request, result);
        if resolution == Resolution::Applied {
            if let Remote::Loaded(subregions) = self.cascade.subregions() {
                self.draft = self.draft.with_subregion_revalidated(subregions);
            }
        }
        resolution
    }

    /// Selects a subregion of the current region.
    ///
    /// Returns `false` if `subregion` is not part of the loaded list.
    pub fn select_subregion(&mut self, subregion: Option<Subregion>) -> bool {
        if let Some(s) = &subregion {
            if !self.subregions().as_slice().contains(s) {
                log::warn!("Ignore unknown subregion {s}");
                return false;
            }
        }
        self.draft = self.draft.with_subregion(subregion);
        true
    }

    pub fn pick_position(&mut self, position: Coordinate) {
        self.position_picked = true;
        self.draft = self.draft.with_position(position);
    }

    pub fn toggle_item(&mut self, id: ItemId) {
        self.draft = self.draft.with_item_toggled(id);
    }

    pub fn attach_image(&mut self, image: F) {
        self.draft = self.draft.with_image(image);
    }

    /// Takes a snapshot of the draft for sending it.
    pub fn begin_submission(&mut self) -> Result<PointForm<F>, SubmissionError> {
        self.submission.begin()?;
        Ok(PointForm::from_draft(&self.draft))
    }

    /// A successful submission discards the draft together with the
    /// subregions of its region, a failed one keeps both for another attempt.
    pub fn finish_submission(
        &mut self,
        result: Result<(), GatewayError>,
    ) -> Result<(), SubmissionError> {
        self.submission.finish(result)?;
        if self.submission.is_succeeded() {
            self.cascade.select(None);
            self.position_picked = false;
            self.draft = PointDraft::default().with_position(self.initial_position());
        }
        Ok(())
    }

    pub fn acknowledge_submission_failure(&mut self) -> bool {
        self.submission.acknowledge_failure()
    }
}

fn begin_load<T>(remote: &mut Remote<T>) -> bool {
    if !remote.can_load() {
        return false;
    }
    *remote = Remote::Loading;
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    type State = CreatePointState<&'static str>;

    #[test]
    fn bootstrap_position_is_write_once() {
        let mut s = State::default();
        assert_eq!(s.initial_position(), Coordinate::ORIGIN);
        assert!(s.apply_initial_position(Some(Coordinate::new(1.0, 2.0))));
        assert!(!s.apply_initial_position(Some(Coordinate::new(3.0, 4.0))));
        assert_eq!(s.initial_position(), Coordinate::new(1.0, 2.0));
        assert_eq!(s.draft().position(), Coordinate::new(1.0, 2.0));
    }

    #[test]
    fn late_bootstrap_keeps_picked_position() {
        let mut s = State::default();
        s.pick_position(Coordinate::new(-23.5, -46.6));
        s.apply_initial_position(Some(Coordinate::new(1.0, 2.0)));
        assert_eq!(s.initial_position(), Coordinate::new(1.0, 2.0));
        assert_eq!(s.draft().position(), Coordinate::new(-23.5, -46.6));
    }

    #[test]
    fn load_only_once_unless_failed() {
        let mut s = State::default();
        assert!(s.begin_catalog_load());
        assert!(!s.begin_catalog_load());
        s.apply_catalog(Err(GatewayError::Timeout(std::time::Duration::from_secs(1))));
        assert!(s.catalog().is_failed());
        assert!(s.begin_catalog_load());
        s.apply_catalog(Ok(vec![]));
        assert!(!s.begin_catalog_load());
    }

    #[test]
    fn select_region_issues_request_only_on_change() {
        let mut s = State::default();
        let req = s.select_region(Some("SP".into())).unwrap();
        assert_eq!(req.region.as_str(), "SP");
        assert!(s.select_region(Some("SP".into())).is_none());
        assert!(s.subregions().is_loading());
    }

    #[test]
    fn reject_subregions_that_are_not_listed() {
        let mut s = State::default();
        let req = s.select_region(Some("SP".into())).unwrap();
        assert!(!s.select_subregion(Some("Campinas".into())));
        s.apply_subregions(&req, Ok(vec!["Campinas".into(), "Santos".into()]));
        assert!(s.select_subregion(Some("Campinas".into())));
        assert_eq!(
            s.draft().subregion().map(Subregion::as_str),
            Some("Campinas")
        );
        assert!(s.select_subregion(None));
        assert!(s.draft().subregion().is_none());
    }

    #[test]
    fn region_change_clears_subregion() {
        let mut s = State::default();
        let sp = s.select_region(Some("SP".into())).unwrap();
        s.apply_subregions(&sp, Ok(vec!["Campinas".into()]));
        s.select_subregion(Some("Campinas".into()));
        let rj = s.select_region(Some("RJ".into())).unwrap();
        assert!(s.draft().subregion().is_none());
        assert!(s.subregions().as_slice().is_empty());
        s.apply_subregions(&rj, Ok(vec!["Rio de Janeiro".into()]));
        assert_eq!(s.subregions().as_slice(), [Subregion::from("Rio de Janeiro")]);
    }

    #[test]
    fn successful_submission_discards_the_draft() {
        let mut s = State::default();
        s.set_contact_field(ContactField::Name, "Coleta Sul");
        let form = s.begin_submission().unwrap();
        assert_eq!(form.text("name"), Some("Coleta Sul"));
        assert_eq!(s.begin_submission(), Err(SubmissionError::InProgress));
        s.finish_submission(Ok(())).unwrap();
        assert!(s.submission().is_succeeded());
        assert_eq!(s.draft().contact().name, "");
    }

    #[test]
    fn successful_submission_forgets_the_subregions_of_the_old_region() {
        let mut s = State::default();
        s.apply_initial_position(Some(Coordinate::new(1.0, 2.0)));
        let sp = s.select_region(Some("SP".into())).unwrap();
        s.apply_subregions(&sp, Ok(vec!["Campinas".into()]));
        assert!(s.select_subregion(Some("Campinas".into())));
        s.pick_position(Coordinate::new(-23.5, -46.6));
        s.begin_submission().unwrap();
        s.finish_submission(Ok(())).unwrap();

        assert!(s.draft().region().is_none());
        assert!(s.subregions().as_slice().is_empty());
        assert!(!s.select_subregion(Some("Campinas".into())));
        assert!(s.draft().subregion().is_none());
        assert_eq!(s.draft().position(), Coordinate::new(1.0, 2.0));

        // A response for the old region arriving late is dropped.
        let res = s.apply_subregions(&sp, Ok(vec!["Santos".into()]));
        assert_eq!(res, Resolution::Stale);
        assert!(s.subregions().as_slice().is_empty());
    }
}
