//! Assigning printings to their place in the overview.

use crate::api::ApiCard;
use crate::models::{ColorGroup, Rarity};

/// Position of a card in the overview: rarity section, color column,
/// converted-mana-cost bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupKey {
    pub rarity: Rarity,
    pub color: ColorGroup,
    pub cmc: u32,
}

/// Derives the group for a printing. A rarity override from the cube
/// list replaces whatever the API reported. Fractional mana costs
/// truncate to the next lower bucket.
pub fn classify(card: &ApiCard, rarity_override: Option<Rarity>) -> GroupKey {
    let rarity = rarity_override.unwrap_or_else(|| Rarity::from_api(&card.rarity));
    GroupKey {
        rarity,
        color: ColorGroup::from_colors(&card.colors),
        cmc: card.cmc as u32,
    }
}
