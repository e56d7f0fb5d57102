//! Pokédex catalog client.
//!
//! Fetches single catalog entries by numeric index from a PokeAPI-shaped
//! REST endpoint and decodes them into the [`Pokemon`] domain type. The
//! [`CatalogProvider`] trait sits between the client and its consumers so
//! the TUI and tests can swap in alternative implementations.

pub mod pokemon;
pub mod provider;
pub mod rest;

pub use pokemon::{Pokemon, StatValue};
pub use provider::{CatalogError, CatalogProvider};
pub use rest::RestCatalog;
