//! Cube Overview - grouped HTML overview of an MTG cube or set
//!
//! This crate fetches card data from the magicthegathering.io card
//! database and renders a static HTML page grouping the cards by
//! rarity, color and converted mana cost.

pub mod api;
pub mod classify;
pub mod config;
pub mod cubelist;
pub mod error;
pub mod fetch;
pub mod group;
pub mod models;
pub mod render;

// Re-export commonly used items
pub use api::{ApiCard, MtgIoApi};
pub use classify::{classify, GroupKey};
pub use config::SetData;
pub use cubelist::Cubelist;
pub use error::{OverviewError, Result};
pub use fetch::{fetch_cubelist, fetch_set};
pub use group::GroupingStore;
pub use models::{ColorGroup, Rarity};
pub use render::{render_overview, render_page, write_page};
