use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

/// Item category as served by `GET /items`.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Item {
    pub id: u64,
    pub title: String,
    pub image_url: String,
}

/// A state (`estado`) of the IBGE localities API.
///
/// Only the abbreviation is used, all other fields are ignored.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct RegionRecord {
    pub sigla: String,
}

/// A micro-region (`microrregião`) of the IBGE localities API.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct SubregionRecord {
    pub nome: String,
}

/// JSON body of a non-2xx backend response.
#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, PartialEq, Eq, thiserror::Error)
)]
#[cfg_attr(feature = "extra-derive", error("{message} ({http_status})"))]
pub struct Error {
    /// Missing in some responses.
    #[serde(default)]
    pub http_status: u16,
    pub message: String,
}
