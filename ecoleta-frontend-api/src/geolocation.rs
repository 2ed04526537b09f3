use std::{cell::RefCell, rc::Rc, time::Duration};

use async_trait::async_trait;
use futures::channel::oneshot;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Position, PositionError};

use ecoleta_core::{entities::Coordinate, gateways::GeolocationGateway};

use crate::{with_timeout, Error, DEFAULT_NETWORK_TIMEOUT};

/// Position of the device as reported by `navigator.geolocation`.
#[derive(Debug, Clone)]
pub struct BrowserGeolocation {
    timeout: Duration,
}

impl Default for BrowserGeolocation {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_NETWORK_TIMEOUT,
        }
    }
}

impl BrowserGeolocation {
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

type Sender = Rc<RefCell<Option<oneshot::Sender<Option<Coordinate>>>>>;

fn reply(tx: &Sender, pos: Option<Coordinate>) {
    if let Some(tx) = tx.borrow_mut().take() {
        let _ = tx.send(pos);
    }
}

#[async_trait(?Send)]
impl GeolocationGateway for BrowserGeolocation {
    async fn current_position(&self) -> Option<Coordinate> {
        let geolocation = web_sys::window()?
            .navigator()
            .geolocation()
            .inspect_err(|err| log::warn!("Geolocation is not available: {err:?}"))
            .ok()?;
        let (tx, rx) = oneshot::channel();
        let tx: Sender = Rc::new(RefCell::new(Some(tx)));

        // Only one of both callbacks will ever be invoked.
        let on_success = Closure::once_into_js({
            let tx = Rc::clone(&tx);
            move |pos: Position| {
                let coords = pos.coords();
                reply(&tx, Some(Coordinate::new(coords.latitude(), coords.longitude())));
            }
        });
        let on_error = Closure::once_into_js(move |err: PositionError| {
            log::warn!("Unable to locate device: {}", err.message());
            reply(&tx, None);
        });
        if let Err(err) = geolocation.get_current_position_with_error_callback(
            on_success.unchecked_ref(),
            Some(on_error.unchecked_ref()),
        ) {
            log::warn!("Unable to request the device position: {err:?}");
            return None;
        }

        let position = with_timeout(self.timeout, async {
            rx.await
                .map_err(|_| Error::Fetch("geolocation request cancelled".to_string()))
        })
        .await;
        match position {
            Ok(pos) => pos,
            Err(err) => {
                log::warn!("Device position unavailable: {err}");
                None
            }
        }
    }
}
