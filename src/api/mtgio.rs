//! Client for the magicthegathering.io card database.
//!
//! The `/cards` endpoint answers filtered queries and paginates long
//! result sets. Responses are walked page by page until a page comes
//! back with fewer entries than the requested page size.

use serde::Deserialize;

use crate::error::{OverviewError, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.magicthegathering.io/v1";

/// Page size requested from the API. A response with fewer cards than
/// this marks the last page.
const PAGE_SIZE: usize = 100;

const USER_AGENT: &str = "cube_overview/0.1";

/// One card printing as returned by the card database.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiCard {
    pub name: String,
    /// Face names for split and double-faced cards, empty otherwise.
    #[serde(default)]
    pub names: Vec<String>,
    pub set: String,
    #[serde(default)]
    pub rarity: String,
    #[serde(default)]
    pub colors: Vec<String>,
    /// Converted mana cost. The API reports fractional values for a
    /// handful of joke cards.
    #[serde(default)]
    pub cmc: f64,
}

#[derive(Debug, Deserialize)]
struct CardsPage {
    #[serde(default)]
    cards: Vec<ApiCard>,
}

/// Blocking client for the card database.
pub struct MtgIoApi {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl MtgIoApi {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client against a non-default base URL. Used by tests
    /// to point the client at a local mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        MtgIoApi {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetches every printing in the set with the given code.
    pub fn cards_in_set(&self, set_code: &str) -> Result<Vec<ApiCard>> {
        self.fetch_all("set", set_code)
    }

    /// Fetches printings matching any of `names`. The API accepts
    /// several names in one query, joined with `|`.
    pub fn cards_named(&self, names: &[String]) -> Result<Vec<ApiCard>> {
        self.fetch_all("name", &names.join("|"))
    }

    fn fetch_all(&self, filter: &str, value: &str) -> Result<Vec<ApiCard>> {
        let mut cards = Vec::new();
        let mut page = 1;
        loop {
            let url = format!(
                "{}/cards?{}={}&pageSize={}&page={}",
                self.base_url,
                filter,
                urlencoding::encode(value),
                PAGE_SIZE,
                page
            );
            log::debug!("Requesting {url}");

            let response = self
                .client
                .get(&url)
                .header("User-Agent", USER_AGENT)
                .send()?;

            if !response.status().is_success() {
                return Err(OverviewError::HttpStatus(response.status()));
            }

            let body: CardsPage = response.json()?;
            let fetched = body.cards.len();
            cards.extend(body.cards);
            if fetched < PAGE_SIZE {
                break;
            }
            page += 1;
        }
        log::info!("Fetched {} printings for {filter}={value}", cards.len());
        Ok(cards)
    }
}

#[cfg(test)]
#[path = "mtgio_tests.rs"]
mod tests;
