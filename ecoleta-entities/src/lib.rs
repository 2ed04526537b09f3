#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # ecoleta-entities
//!
//! Reusable, agnostic domain entities for Ecoleta.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod contact;
pub mod division;
pub mod geo;
pub mod image;
pub mod item;
