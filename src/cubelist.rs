//! Cube list parsing and request-state tracking.
//!
//! A cube list is a UTF-8 text file with one card name per line. Lines
//! starting with `#` are comments and blank lines are skipped. A line like
//! `[Mythic] Lotus Petal` pins that card to the Mythic bucket no matter
//! what rarity the API reports.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;
use crate::models::Rarity;

/// Request state of a single list entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryState {
    /// On the list, waiting for an API match
    Requested,
    /// Matched by an API response
    Resolved,
}

/// Parsed cube list: lookup names in file order plus rarity-override and
/// request-state bookkeeping. Names absent from the state map were never
/// part of this run, which is how responses the API volunteered on its own
/// get recognized and dropped.
#[derive(Debug, Default)]
pub struct Cubelist {
    names: Vec<String>,
    overrides: HashMap<String, Rarity>,
    states: HashMap<String, EntryState>,
}

impl Cubelist {
    /// Reads and parses a cube list file. Open and read failures are fatal.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let list = Self::parse(BufReader::new(file))?;
        log::info!("Read {} lookup names from {}", list.len(), path.display());
        Ok(list)
    }

    /// Parses cube list lines from any buffered reader.
    pub fn parse(reader: impl BufRead) -> Result<Self> {
        let mut list = Cubelist::default();
        for line in reader.lines() {
            let line = line?;
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let name = match line.strip_prefix('[') {
                Some(rest) => match rest.split_once("] ") {
                    Some((token, name)) => {
                        list.overrides.insert(name.to_string(), parse_override(token, name));
                        name
                    }
                    None => {
                        log::warn!("Skipping malformed override line: {line}");
                        continue;
                    }
                },
                None => line.as_str(),
            };
            list.names.push(name.to_string());
            list.states.insert(name.to_string(), EntryState::Requested);
        }
        Ok(list)
    }

    /// Lookup names in file order, duplicates preserved
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Rarity override annotated for a card name, if any
    pub fn override_for(&self, name: &str) -> Option<Rarity> {
        self.overrides.get(name).copied()
    }

    /// Consumes the list, keeping only the override map for classification
    pub fn into_overrides(self) -> HashMap<String, Rarity> {
        self.overrides
    }

    /// True while the name is on the list and still waiting for a match.
    /// Names never listed and names already matched both answer false; the
    /// first keeps near-matches out, the second keeps repeat printings of
    /// one name from being counted twice.
    pub fn is_requested(&self, name: &str) -> bool {
        self.states.get(name) == Some(&EntryState::Requested)
    }

    /// Marks a name as matched by an API response
    pub fn mark_resolved(&mut self, name: &str) {
        if let Some(state) = self.states.get_mut(name) {
            *state = EntryState::Resolved;
        }
    }

    /// Names that were requested but never matched, in file order
    pub fn unresolved(&self) -> Vec<&str> {
        let mut missing: Vec<&str> = Vec::new();
        for name in &self.names {
            if self.is_requested(name) && !missing.contains(&name.as_str()) {
                missing.push(name);
            }
        }
        missing
    }
}

/// Maps an override token onto a rarity bucket. Unknown tokens bucket
/// as `Other` and are reported.
fn parse_override(token: &str, name: &str) -> Rarity {
    match Rarity::from_name(token) {
        Some(rarity) => rarity,
        None => {
            log::warn!("Unknown rarity override '[{token}]' for '{name}', bucketing as Other");
            Rarity::Other
        }
    }
}

#[cfg(test)]
#[path = "cubelist_tests.rs"]
mod tests;
