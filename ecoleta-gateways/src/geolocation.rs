use async_trait::async_trait;

use ecoleta_core::{entities::Coordinate, gateways::GeolocationGateway};

/// A device without positioning hardware that may be told where it is.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPosition(pub Option<Coordinate>);

#[async_trait(?Send)]
impl GeolocationGateway for FixedPosition {
    async fn current_position(&self) -> Option<Coordinate> {
        self.0
    }
}
