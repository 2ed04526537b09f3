//! # ecoleta-core
//!
//! The cascading selection and submission pipeline behind the
//! "create collection point" form.
//!
//! Everything in here is runtime agnostic: state transitions are
//! synchronous and the asynchronous work is delegated to the
//! [gateways](crate::gateways) that are implemented for the browser
//! and for native targets in separate crates.

pub mod attachment;
pub mod cascade;
pub mod draft;
pub mod error;
pub mod gateways;
pub mod payload;
pub mod remote;
pub mod selection;
pub mod state;
pub mod submission;
pub mod usecases;

pub mod entities {
    pub use ecoleta_entities::{contact::*, division::*, geo::*, image::*, item::*};
}

pub mod prelude {
    pub use super::{
        attachment::{AttachmentError, ImageDropzone, MediaFile},
        cascade::{RequestToken, Resolution, SubregionCascade, SubregionRequest},
        draft::PointDraft,
        entities::*,
        error::GatewayError,
        gateways::{
            CatalogGateway, GeographyGateway, GeolocationGateway, PointGateway,
            DEFAULT_NETWORK_TIMEOUT,
        },
        payload::{Part, PointForm},
        remote::Remote,
        selection::ItemSelection,
        state::CreatePointState,
        submission::{SubmissionError, SubmissionState},
    };
}
