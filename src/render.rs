//! Static HTML rendering of the grouped overview.
//!
//! The page is a fixed template around one section per rarity. Each
//! section holds seven color columns and each column lists its cards
//! in ascending mana cost order with a divider after every cost
//! bucket. Card entries are preview links whose `data-image`
//! attribute points at the external image host; imgPreview.js turns
//! them into hover previews on load.

use std::fs;
use std::path::Path;

use crate::api::ApiCard;
use crate::error::Result;
use crate::group::GroupingStore;
use crate::models::{ColorGroup, Rarity};

const IMAGE_BASE_URL: &str = "http://d1f83aa4yffcdn.cloudfront.net";

const PAGE_HEADER: &str = r#"<head>
<link rel="stylesheet" type="text/css" href="cubetutor.css">
</head>

<script src="https://ajax.googleapis.com/ajax/libs/jquery/1.9.1/jquery.min.js" charset="UTF-8"></script>
<script src="imgPreview.js"></script>"#;

const PAGE_FOOTER: &str = r#"<script type="text/javascript">
$(document).ready(function() {
$('.cardPreview').imgPreview();

});
</script>"#;

/// Renders the overview body: one section per rarity, in canonical
/// rarity order.
pub fn render_overview(store: &GroupingStore) -> String {
    let mut html = String::new();
    for rarity in Rarity::ALL {
        html.push_str(&render_rarity(store, rarity));
    }
    html
}

fn render_rarity(store: &GroupingStore, rarity: Rarity) -> String {
    let mut html = String::new();
    html.push_str("<div id=\"listContainer\">\n");
    for color in ColorGroup::ALL {
        html.push_str(&render_color_column(store, rarity, color));
    }
    html.push_str("</div>\n");
    html
}

fn render_color_column(store: &GroupingStore, rarity: Rarity, color: ColorGroup) -> String {
    let mut html = String::new();
    html.push_str(&format!(
        "<div class=\"viewCubeColumn {}Column\">\n",
        color.as_str().to_lowercase()
    ));
    html.push_str(&format!(
        "<p class=\"bigColumnTitle\">{} ({})</p>",
        color.as_str(),
        store.color_count(rarity, color)
    ));
    for (_, cards) in store.cmc_buckets(rarity, color) {
        for card in cards {
            html.push_str(&render_card_link(card));
        }
        html.push_str("<p class=\"cmcDivider\"></p>\n");
    }
    html.push_str("</div>\n");
    html
}

/// Renders the preview link for one card. Face counts with no known
/// image naming convention render nothing.
fn render_card_link(card: &ApiCard) -> String {
    let image = match card.names.len() {
        0 => image_url(&card.set, &card.name),
        // TODO: split cards also appear as name1name2.jpg and
        // name1name2_flip.jpg on the image host; only the flip
        // convention is handled
        2 => flip_image_url(&card.set, &card.names[0]),
        _ => {
            log::warn!(
                "Card {} has an unexpected number of faces: {:?}",
                card.name,
                card.names
            );
            return String::new();
        }
    };
    format!(
        "<a rel=\"nofollow\" class=\"cardPreview\" data-image=\"{image}\">{}</a>\n",
        card.name
    )
}

fn image_url(set: &str, name: &str) -> String {
    format!("{IMAGE_BASE_URL}/{set}/{}.jpg", encoded_name(name))
}

fn flip_image_url(set: &str, name: &str) -> String {
    format!("{IMAGE_BASE_URL}/{set}/{}_flip.jpg", encoded_name(name))
}

fn encoded_name(name: &str) -> String {
    urlencoding::encode(&name.to_lowercase()).into_owned()
}

/// Wraps the rendered overview in the fixed page template.
pub fn render_page(overview: &str) -> String {
    format!("{PAGE_HEADER}\n\n{overview}\n\n{PAGE_FOOTER}\n")
}

/// Writes the finished page to `path`.
pub fn write_page(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html)?;
    log::info!("Wrote overview to {}", path.display());
    Ok(())
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
