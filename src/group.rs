//! In-memory store ordering printings for the rendered page.

use std::collections::{BTreeMap, HashMap};

use crate::api::ApiCard;
use crate::classify::GroupKey;
use crate::models::{ColorGroup, Rarity};

/// Cards grouped by rarity, then color, then converted mana cost.
///
/// Cost buckets iterate in ascending order. Within one bucket cards
/// keep insertion order.
#[derive(Debug, Default)]
pub struct GroupingStore {
    groups: HashMap<Rarity, HashMap<ColorGroup, BTreeMap<u32, Vec<ApiCard>>>>,
    len: usize,
}

impl GroupingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: GroupKey, card: ApiCard) {
        self.groups
            .entry(key.rarity)
            .or_default()
            .entry(key.color)
            .or_default()
            .entry(key.cmc)
            .or_default()
            .push(card);
        self.len += 1;
    }

    /// Cost buckets of one rarity and color column, ascending by cost.
    pub fn cmc_buckets<'a>(
        &'a self,
        rarity: Rarity,
        color: ColorGroup,
    ) -> impl Iterator<Item = (u32, &'a [ApiCard])> + 'a {
        self.groups
            .get(&rarity)
            .and_then(|colors| colors.get(&color))
            .into_iter()
            .flat_map(|buckets| buckets.iter().map(|(cmc, cards)| (*cmc, cards.as_slice())))
    }

    /// Number of cards in one rarity and color column.
    pub fn color_count(&self, rarity: Rarity, color: ColorGroup) -> usize {
        self.cmc_buckets(rarity, color)
            .map(|(_, cards)| cards.len())
            .sum()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
