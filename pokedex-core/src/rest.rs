//! REST catalog client.
//!
//! Issues a single GET per fetch against a PokeAPI-shaped endpoint and
//! decodes the JSON body into the domain type. No retry, no caching: a
//! failed fetch is reported to the caller and the next fetch starts clean.

use std::time::Duration;

use serde::Deserialize;

use crate::pokemon::{Pokemon, StatValue};
use crate::provider::{CatalogError, CatalogProvider};

/// Wire shape of a catalog entry. Only the fields we consume are listed;
/// the remote sends far more and serde ignores the rest.
#[derive(Debug, Deserialize)]
struct EntityBody {
    name: String,
    sprites: Sprites,
    abilities: Vec<AbilitySlot>,
    stats: Vec<StatSlot>,
}

#[derive(Debug, Deserialize)]
struct Sprites {
    front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AbilitySlot {
    ability: NamedRef,
}

#[derive(Debug, Deserialize)]
struct StatSlot {
    stat: NamedRef,
    base_stat: i64,
}

#[derive(Debug, Deserialize)]
struct NamedRef {
    name: String,
}

/// REST catalog client over a blocking HTTP client.
pub struct RestCatalog {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl RestCatalog {
    /// Public read-only catalog this client was written against.
    pub const DEFAULT_BASE_URL: &'static str = "https://pokeapi.co/api/v2/pokemon";

    /// Default request timeout. The UI runs single-flight, so a hung
    /// request would otherwise block navigation indefinitely.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new() -> Self {
        Self::with_base_url(Self::DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_options(base_url, Some(Self::DEFAULT_TIMEOUT))
    }

    /// Build a client with an explicit timeout (`None` waits indefinitely).
    pub fn with_options(base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pokedex-tui/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Build the entry URL for an index.
    fn entry_url(&self, index: u32) -> String {
        format!("{}/{index}", self.base_url)
    }

    /// Convert a decoded wire body into the domain type.
    fn from_body(index: u32, body: EntityBody) -> Pokemon {
        Pokemon {
            index,
            name: body.name,
            sprite_url: body.sprites.front_default,
            abilities: body.abilities.into_iter().map(|a| a.ability.name).collect(),
            stats: body
                .stats
                .into_iter()
                .map(|s| StatValue {
                    name: s.stat.name,
                    value: s.base_stat,
                })
                .collect(),
        }
    }
}

impl Default for RestCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogProvider for RestCatalog {
    fn name(&self) -> &str {
        "rest_catalog"
    }

    fn fetch(&self, index: u32) -> Result<Pokemon, CatalogError> {
        if index < 1 {
            return Err(CatalogError::InvalidIndex);
        }

        let url = self.entry_url(index);
        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CatalogError::HttpStatus {
                status: status.as_u16(),
                index,
            });
        }

        let body: EntityBody = resp
            .json()
            .map_err(|e| CatalogError::Decode(e.to_string()))?;

        Ok(Self::from_body(index, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BULBASAUR: &str = r#"{
        "name": "bulbasaur",
        "sprites": { "front_default": "u1", "back_default": "u2" },
        "abilities": [
            { "ability": { "name": "overgrow", "url": "x" }, "slot": 1 },
            { "ability": { "name": "chlorophyll", "url": "x" }, "slot": 3 }
        ],
        "stats": [
            { "stat": { "name": "hp", "url": "x" }, "base_stat": 45, "effort": 0 },
            { "stat": { "name": "attack", "url": "x" }, "base_stat": 49, "effort": 0 }
        ],
        "weight": 69
    }"#;

    #[test]
    fn decodes_entry_body() {
        let body: EntityBody = serde_json::from_str(BULBASAUR).unwrap();
        let p = RestCatalog::from_body(1, body);
        assert_eq!(p.index, 1);
        assert_eq!(p.name, "bulbasaur");
        assert_eq!(p.sprite_url.as_deref(), Some("u1"));
        assert_eq!(p.abilities, vec!["overgrow", "chlorophyll"]);
        assert_eq!(p.stats[0].name, "hp");
        assert_eq!(p.stats[0].value, 45);
        assert_eq!(p.stats[1].name, "attack");
        assert_eq!(p.stats[1].value, 49);
    }

    #[test]
    fn sprite_may_be_null() {
        let json = r#"{
            "name": "missingno",
            "sprites": { "front_default": null },
            "abilities": [],
            "stats": []
        }"#;
        let body: EntityBody = serde_json::from_str(json).unwrap();
        let p = RestCatalog::from_body(7, body);
        assert_eq!(p.sprite_url, None);
        assert!(p.abilities.is_empty());
        assert!(p.stats.is_empty());
    }

    #[test]
    fn missing_name_fails_decode() {
        let json = r#"{ "sprites": { "front_default": "u" }, "abilities": [], "stats": [] }"#;
        assert!(serde_json::from_str::<EntityBody>(json).is_err());
    }

    #[test]
    fn entry_url_joins_index() {
        let catalog = RestCatalog::with_base_url("https://example.test/api/pokemon/");
        assert_eq!(catalog.entry_url(25), "https://example.test/api/pokemon/25");
    }

    #[test]
    fn fetch_rejects_index_zero() {
        let catalog = RestCatalog::with_base_url("https://example.test/api");
        assert!(matches!(
            catalog.fetch(0),
            Err(CatalogError::InvalidIndex)
        ));
    }
}
