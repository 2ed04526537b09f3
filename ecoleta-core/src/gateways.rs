use std::time::Duration;

use async_trait::async_trait;

use crate::{
    entities::{Coordinate, Item, Region, Subregion},
    error::GatewayError,
    payload::PointForm,
};

/// Upper bound for every network operation unless configured otherwise.
pub const DEFAULT_NETWORK_TIMEOUT: Duration = Duration::from_secs(10);

pub type Result<T> = std::result::Result<T, GatewayError>;

#[async_trait(?Send)]
pub trait GeolocationGateway {
    /// One-shot lookup of the device position.
    ///
    /// Returns `None` if the position is unavailable or the
    /// permission has been denied.
    async fn current_position(&self) -> Option<Coordinate>;
}

#[async_trait(?Send)]
pub trait CatalogGateway {
    async fn items(&self) -> Result<Vec<Item>>;
}

/// A provider of the two-level administrative division.
#[async_trait(?Send)]
pub trait GeographyGateway {
    async fn regions(&self) -> Result<Vec<Region>>;
    async fn subregions(&self, region: &Region) -> Result<Vec<Subregion>>;
}

#[async_trait(?Send)]
pub trait PointGateway {
    /// The raw file type of the image attachment.
    type File;

    async fn create_point(&self, form: &PointForm<Self::File>) -> Result<()>;
}
