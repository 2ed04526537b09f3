use super::prelude::*;

/// Determines the initial map center.
///
/// Falls back to [`Coordinate::ORIGIN`] if the device position is unavailable.
pub async fn locate_device<G>(gateway: &G) -> Coordinate
where
    G: GeolocationGateway + ?Sized,
{
    match gateway.current_position().await {
        Some(pos) => {
            log::debug!("Device located at {pos}");
            pos
        }
        None => {
            log::warn!("Device position unavailable, using {}", Coordinate::ORIGIN);
            Coordinate::ORIGIN
        }
    }
}
