//! Browser clients of the Ecoleta backend and the geography provider.

use std::{future::Future, pin::pin, time::Duration};

use futures::future::{self, Either};
use gloo_net::http::Response;
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use thiserror::Error;

use ecoleta_core::error::GatewayError;

mod gateways;
mod geography;
mod geolocation;
mod public;

pub use self::{geography::*, geolocation::*, public::*};

pub use ecoleta_core::gateways::DEFAULT_NETWORK_TIMEOUT;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("{0}")]
    Api(#[from] ecoleta_boundary::Error),

    #[error("No response within {0:?}")]
    Timeout(Duration),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

impl From<Error> for GatewayError {
    fn from(from: Error) -> Self {
        match from {
            Error::Fetch(msg) => Self::Fetch(msg),
            Error::Api(ecoleta_boundary::Error {
                http_status,
                message,
            }) => Self::Api {
                status: http_status,
                message,
            },
            Error::Timeout(timeout) => Self::Timeout(timeout),
        }
    }
}

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.ok() {
        Ok(response.json().await?)
    } else {
        Err(api_error(&response).await)
    }
}

/// Decodes the JSON error body of a non-2xx response.
///
/// Falls back to the status text if the body is not an error record.
async fn api_error(response: &Response) -> Error {
    let status = response.status();
    match response.json::<ecoleta_boundary::Error>().await {
        Ok(mut err) => {
            if err.http_status == 0 {
                err.http_status = status;
            }
            err.into()
        }
        Err(_) => ecoleta_boundary::Error {
            http_status: status,
            message: response.status_text(),
        }
        .into(),
    }
}

/// Aborts `fut` if it has not completed within `timeout`.
async fn with_timeout<T>(timeout: Duration, fut: impl Future<Output = Result<T>>) -> Result<T> {
    let millis = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);
    let fut = pin!(fut);
    let timer = pin!(TimeoutFuture::new(millis));
    match future::select(fut, timer).await {
        Either::Left((res, _)) => res,
        Either::Right(((), _)) => Err(Error::Timeout(timeout)),
    }
}
