use std::collections::HashMap;
use std::io::Write;

use tempfile::NamedTempFile;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cube_overview::{
    classify, fetch_cubelist, fetch_set, render_overview, render_page, write_page, ApiCard,
    Cubelist, GroupingStore, MtgIoApi, Rarity, SetData,
};

// Test fixtures - sample data for testing

fn create_sample_cubelist_content() -> String {
    "# test cube\n\n[Mythic] Lotus Petal\nShivan Dragon\n".to_string()
}

fn lotus_petal_json() -> serde_json::Value {
    serde_json::json!({
        "name": "Lotus Petal",
        "set": "TMP",
        "rarity": "Common",
        "colors": [],
        "cmc": 0.0
    })
}

fn shivan_dragon_json() -> serde_json::Value {
    serde_json::json!({
        "name": "Shivan Dragon",
        "set": "LEA",
        "rarity": "Rare",
        "colors": ["Red"],
        "cmc": 6.0
    })
}

fn group_cards(cards: Vec<ApiCard>, overrides: &HashMap<String, Rarity>) -> GroupingStore {
    let mut store = GroupingStore::new();
    for card in cards {
        let key = classify(&card, overrides.get(&card.name).copied());
        store.insert(key, card);
    }
    store
}

/// Splits the rendered overview into its five rarity sections, in
/// Common, Uncommon, Rare, Mythic, Other order.
fn rarity_sections(html: &str) -> Vec<&str> {
    html.split("<div id=\"listContainer\">").skip(1).collect()
}

#[tokio::test]
async fn test_cubelist_mode_applies_overrides_and_groups() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cards"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "cards": [lotus_petal_json(), shivan_dragon_json()]
        })))
        .mount(&mock_server)
        .await;

    let mut list_file = NamedTempFile::new().unwrap();
    write!(list_file, "{}", create_sample_cubelist_content()).unwrap();

    let base = mock_server.uri();
    let list_path = list_file.path().to_path_buf();
    let html = tokio::task::spawn_blocking(move || {
        let api = MtgIoApi::with_base_url(base);
        let mut list = Cubelist::load(&list_path).unwrap();
        let cards = fetch_cubelist(&api, &mut list, &SetData::default(), true).unwrap();
        let store = group_cards(cards, &list.into_overrides());
        render_overview(&store)
    })
    .await
    .unwrap();

    let sections = rarity_sections(&html);
    assert_eq!(sections.len(), 5);

    // The override puts Lotus Petal in the Mythic section even though
    // the API reported it as Common
    assert!(sections[3].contains("Lotus Petal"));
    assert!(!sections[0].contains("Lotus Petal"));
    assert!(sections[2].contains("Shivan Dragon"));

    assert!(sections[2].contains("<p class=\"bigColumnTitle\">Red (1)</p>"));
    assert!(sections[3].contains("<p class=\"bigColumnTitle\">Colorless (1)</p>"));
}

#[tokio::test]
async fn test_set_mode_filters_promo_printings() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cards"))
        .and(query_param("set", "TST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "cards": [
                {
                    "name": "Field Researcher",
                    "set": "TST",
                    "rarity": "Common",
                    "colors": ["White"],
                    "cmc": 2.0
                },
                {
                    "name": "Launch Party Card",
                    "set": "PTST",
                    "rarity": "Rare",
                    "colors": ["White"],
                    "cmc": 3.0
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let data: SetData = serde_json::from_value(serde_json::json!({ "promo_sets": ["PTST"] })).unwrap();
    let base = mock_server.uri();
    let html = tokio::task::spawn_blocking(move || {
        let api = MtgIoApi::with_base_url(base);
        let cards = fetch_set(&api, "TST", &data, false).unwrap();
        let store = group_cards(cards, &HashMap::new());
        render_overview(&store)
    })
    .await
    .unwrap();

    assert!(html.contains("Field Researcher"));
    assert!(!html.contains("Launch Party Card"));
}

#[tokio::test]
async fn test_full_page_written_to_disk() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cards"))
        .and(query_param("set", "LEA"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "cards": [
                {
                    "name": "Lightning Bolt",
                    "set": "LEA",
                    "rarity": "Common",
                    "colors": ["Red"],
                    "cmc": 1.0
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("out.html");

    let base = mock_server.uri();
    let out = out_path.clone();
    tokio::task::spawn_blocking(move || {
        let api = MtgIoApi::with_base_url(base);
        let cards = fetch_set(&api, "LEA", &SetData::default(), true).unwrap();
        let store = group_cards(cards, &HashMap::new());
        let html = render_page(&render_overview(&store));
        write_page(&out, &html).unwrap();
    })
    .await
    .unwrap();

    let written = std::fs::read_to_string(&out_path).unwrap();
    assert!(written.starts_with("<head>"));
    assert!(written.contains("cubetutor.css"));
    assert!(written.contains(
        "data-image=\"http://d1f83aa4yffcdn.cloudfront.net/LEA/lightning%20bolt.jpg\""
    ));
    assert!(written.ends_with("</script>\n"));
}
