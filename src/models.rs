/// Rarity buckets in display order. Cards whose rarity falls outside the
/// four real rarities ("Special", "Basic Land", ...) collect in `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Mythic,
    Other,
}

impl Rarity {
    /// All buckets in canonical display order
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Mythic,
        Rarity::Other,
    ];

    /// Returns the display name of the bucket
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Mythic => "Mythic",
            Rarity::Other => "Other",
        }
    }

    /// Parse a bucket name (e.g. "Mythic", "common") into a Rarity
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "common" => Some(Rarity::Common),
            "uncommon" => Some(Rarity::Uncommon),
            "rare" => Some(Rarity::Rare),
            "mythic" => Some(Rarity::Mythic),
            "other" => Some(Rarity::Other),
            _ => None,
        }
    }

    /// Buckets a raw rarity string from the API. The API has served both
    /// capitalized and lowercased spellings over time, and anything that is
    /// not one of the four real rarities lands in `Other`.
    pub fn from_api(raw: &str) -> Self {
        Self::from_name(raw).unwrap_or(Rarity::Other)
    }
}

/// Color buckets in display order: the five colors, then gold, then
/// colorless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorGroup {
    White,
    Blue,
    Black,
    Red,
    Green,
    Multicolor,
    Colorless,
}

impl ColorGroup {
    /// All buckets in canonical display order
    pub const ALL: [ColorGroup; 7] = [
        ColorGroup::White,
        ColorGroup::Blue,
        ColorGroup::Black,
        ColorGroup::Red,
        ColorGroup::Green,
        ColorGroup::Multicolor,
        ColorGroup::Colorless,
    ];

    /// Returns the display name of the bucket
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorGroup::White => "White",
            ColorGroup::Blue => "Blue",
            ColorGroup::Black => "Black",
            ColorGroup::Red => "Red",
            ColorGroup::Green => "Green",
            ColorGroup::Multicolor => "Multicolor",
            ColorGroup::Colorless => "Colorless",
        }
    }

    /// Buckets a card's color list: none is colorless, one is that color,
    /// several is multicolor.
    pub fn from_colors(colors: &[String]) -> Self {
        match colors.len() {
            0 => ColorGroup::Colorless,
            1 => ColorGroup::from_name(&colors[0]).unwrap_or(ColorGroup::Colorless),
            _ => ColorGroup::Multicolor,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "white" => Some(ColorGroup::White),
            "blue" => Some(ColorGroup::Blue),
            "black" => Some(ColorGroup::Black),
            "red" => Some(ColorGroup::Red),
            "green" => Some(ColorGroup::Green),
            _ => None,
        }
    }
}
