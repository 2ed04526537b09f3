//! Native clients of the Ecoleta backend and the geography provider.

use std::time::Duration;

use serde::de::DeserializeOwned;

mod backend;
mod error;
mod geolocation;
mod ibge;
mod image;

pub use self::{backend::*, error::Error, geolocation::*, ibge::*, image::*};

type Result<T> = std::result::Result<T, Error>;

fn http_client(timeout: Duration) -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder().timeout(timeout).build()?)
}

fn classify(err: reqwest::Error, timeout: Duration) -> Error {
    if err.is_timeout() {
        Error::Timeout(timeout)
    } else {
        Error::Http(err)
    }
}

/// Rejects non-2xx responses with the JSON error body or the status text.
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let http_status = status.as_u16();
    let fallback = status.canonical_reason().unwrap_or_default().to_string();
    let err = match response.json::<ecoleta_boundary::Error>().await {
        Ok(mut err) => {
            if err.http_status == 0 {
                err.http_status = http_status;
            }
            err
        }
        Err(_) => ecoleta_boundary::Error {
            http_status,
            message: fallback,
        },
    };
    Err(Error::Api(err))
}

async fn get_json<T>(client: &reqwest::Client, url: &str, timeout: Duration) -> Result<T>
where
    T: DeserializeOwned,
{
    log::debug!("GET {url}");
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|err| classify(err, timeout))?;
    ensure_success(response)
        .await?
        .json()
        .await
        .map_err(|err| classify(err, timeout))
}
