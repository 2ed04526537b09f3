//! Region → subregion cascade.
//!
//! The subregion list is derived from the selected region. Each
//! fetch is tagged with a monotonically increasing [`RequestToken`]
//! and only the response of the most recent request is applied.

use crate::{
    entities::{Region, Subregion},
    error::GatewayError,
    remote::Remote,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    #[must_use]
    const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// A pending subregion fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubregionRequest {
    pub token: RequestToken,
    pub region: Region,
}

/// What happened to a resolved request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// The response belongs to a superseded region and has been dropped.
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct SubregionCascade {
    region: Option<Region>,
    latest: RequestToken,
    subregions: Remote<Vec<Subregion>>,
}

impl SubregionCascade {
    pub const fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    pub const fn subregions(&self) -> &Remote<Vec<Subregion>> {
        &self.subregions
    }

    pub const fn latest_token(&self) -> RequestToken {
        self.latest
    }

    /// Switches to `region` and invalidates every request in flight.
    ///
    /// Without a region the list is empty and nothing needs to be fetched.
    pub fn select(&mut self, region: Option<Region>) -> Option<SubregionRequest> {
        self.latest = self.latest.next();
        self.region.clone_from(&region);
        if let Some(region) = region {
            self.subregions = Remote::Loading;
            Some(SubregionRequest {
                token: self.latest,
                region,
            })
        } else {
            self.subregions = Remote::Loaded(Vec::new());
            None
        }
    }

    /// Fetches the list of the current region again.
    pub fn retry(&mut self) -> Option<SubregionRequest> {
        let region = self.region.clone();
        self.select(region)
    }

    pub fn resolve(
        &mut self,
        request: &SubregionRequest,
        result: Result<Vec<Subregion>, GatewayError>,
    ) -> Resolution {
        if request.token != self.latest || self.region.as_ref() != Some(&request.region) {
            log::debug!(
                "Discard subregions of {} (request {:?}, latest {:?})",
                request.region,
                request.token,
                self.latest
            );
            return Resolution::Stale;
        }
        self.subregions = Remote::from_result(result);
        Resolution::Applied
    }
}
