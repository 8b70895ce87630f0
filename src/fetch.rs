//! Fetching printings from the card database and admitting them into
//! the overview.
//!
//! Admission applies the set alias table first, then the promo filter.
//! In cube list mode each returned printing must also match a name
//! that is still awaiting resolution, which both drops the near
//! matches the API returns for name queries and makes the first
//! admitted printing of a name the one that counts.

use crate::api::{ApiCard, MtgIoApi};
use crate::config::SetData;
use crate::cubelist::Cubelist;
use crate::error::Result;

/// Number of card names sent per query. Longer lists are split.
pub const NAME_CHUNK_SIZE: usize = 10;

/// Fetches every printing of a whole set.
pub fn fetch_set(
    api: &MtgIoApi,
    set_code: &str,
    set_data: &SetData,
    include_promos: bool,
) -> Result<Vec<ApiCard>> {
    let mut kept = Vec::new();
    for card in api.cards_in_set(set_code)? {
        let card = match admit(card, set_data, include_promos) {
            Some(card) => card,
            None => continue,
        };
        kept.push(card);
    }
    Ok(kept)
}

/// Fetches one printing per name in the cube list.
///
/// A promo printing that is skipped does not resolve its name, so a
/// later non-promo printing can still fill the slot. Names with no
/// admitted printing are reported at the end.
pub fn fetch_cubelist(
    api: &MtgIoApi,
    list: &mut Cubelist,
    set_data: &SetData,
    include_promos: bool,
) -> Result<Vec<ApiCard>> {
    let names = list.names().to_vec();
    let mut kept = Vec::new();
    for chunk in names.chunks(NAME_CHUNK_SIZE) {
        for card in api.cards_named(chunk)? {
            let card = match admit(card, set_data, include_promos) {
                Some(card) => card,
                None => continue,
            };
            if !list.is_requested(&card.name) {
                log::debug!("Dropping unrequested printing {} ({})", card.name, card.set);
                continue;
            }
            list.mark_resolved(&card.name);
            kept.push(card);
        }
    }
    for name in list.unresolved() {
        log::warn!("No printing found for {name}");
    }
    Ok(kept)
}

/// Applies the set alias table and the promo filter to one printing.
fn admit(mut card: ApiCard, set_data: &SetData, include_promos: bool) -> Option<ApiCard> {
    if let Some(renamed) = set_data.set_alias(&card.set) {
        log::debug!("Renaming set {} to {} for {}", card.set, renamed, card.name);
        card.set = renamed.to_string();
    }
    if !include_promos && set_data.is_promo(&card.set) {
        log::debug!("Skipping promo printing {} ({})", card.name, card.set);
        return None;
    }
    Some(card)
}

#[cfg(test)]
#[path = "fetch_tests.rs"]
mod tests;
