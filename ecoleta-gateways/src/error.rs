use std::{io, path::PathBuf, time::Duration};

use thiserror::Error;

use ecoleta_core::error::GatewayError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("No response within {0:?}")]
    Timeout(Duration),
    #[error("{0}")]
    Api(ecoleta_boundary::Error),
    #[error("Unable to read {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl From<Error> for GatewayError {
    fn from(from: Error) -> Self {
        match from {
            Error::Http(err) if err.is_decode() => Self::Decode(err.to_string()),
            Error::Http(err) => Self::Fetch(err.to_string()),
            Error::Timeout(timeout) => Self::Timeout(timeout),
            Error::Api(ecoleta_boundary::Error {
                http_status,
                message,
            }) => Self::Api {
                status: http_status,
                message,
            },
            err @ Error::File { .. } => Self::Fetch(err.to_string()),
        }
    }
}
