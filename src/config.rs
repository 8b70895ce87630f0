//! Set metadata used to filter and normalize fetched printings.
//!
//! The data lives in a JSON file with two keys. `promo_sets` lists set
//! codes whose printings are promotional reprints rather than regular
//! releases. `set_aliases` maps set codes the card database reports to
//! the codes the image host uses. A copy of the file is bundled into
//! the binary as a fallback for when no file is present on disk.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

const BUNDLED_SET_DATA: &str = include_str!("../sets.json");

#[derive(Debug, Default, Deserialize)]
pub struct SetData {
    #[serde(default)]
    promo_sets: HashSet<String>,
    #[serde(default)]
    set_aliases: HashMap<String, String>,
}

impl SetData {
    /// Loads set data from `path`, falling back to the bundled copy
    /// when the file does not exist. A file that exists but cannot be
    /// read or parsed is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let data: SetData = if path.exists() {
            let text = fs::read_to_string(path)?;
            let data = serde_json::from_str(&text)?;
            log::info!("Loaded set data from {}", path.display());
            data
        } else {
            log::info!(
                "Set data file {} not found, using bundled defaults",
                path.display()
            );
            serde_json::from_str(BUNDLED_SET_DATA)?
        };
        log::debug!(
            "Set data: {} promo sets, {} set aliases",
            data.promo_sets.len(),
            data.set_aliases.len()
        );
        Ok(data)
    }

    pub fn is_promo(&self, set_code: &str) -> bool {
        self.promo_sets.contains(set_code)
    }

    /// Returns the replacement code for `set_code` if one is configured.
    pub fn set_alias(&self, set_code: &str) -> Option<&str> {
        self.set_aliases.get(set_code).map(String::as_str)
    }
}
