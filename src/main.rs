//! Cube Overview - grouped HTML overview of an MTG cube or set
//!
//! Fetches card data from magicthegathering.io and writes a static
//! HTML page grouping the cards by rarity, color and converted mana
//! cost.

use std::collections::HashMap;
use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use cube_overview::{
    classify, fetch_cubelist, fetch_set, render_overview, render_page, write_page, Cubelist,
    GroupingStore, MtgIoApi, Result, SetData,
};

/// Generates a grouped HTML overview of an MTG cube or set
#[derive(Parser, Debug)]
#[command(name = "cube_overview")]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("source").required(true)))]
struct Args {
    /// Set code to fetch, e.g. SOI
    #[arg(short, long, group = "source")]
    set: Option<String>,

    /// Cube list file with one card name per line
    #[arg(short, long, group = "source")]
    file: Option<PathBuf>,

    /// Leave out promotional printings
    #[arg(long)]
    no_promos: bool,

    /// Output HTML file
    #[arg(short, long, default_value = "out.html")]
    output: PathBuf,

    /// Promo set and set alias data; bundled defaults apply when the
    /// file is missing
    #[arg(long, default_value = "sets.json")]
    set_data: PathBuf,
}

fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    // Examples: RUST_LOG=info, RUST_LOG=warn, RUST_LOG=cube_overview=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        log::error!("Application error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let set_data = SetData::load(&args.set_data)?;
    let api = MtgIoApi::new();
    let include_promos = !args.no_promos;

    let mut overrides = HashMap::new();
    let cards = if let Some(set_code) = &args.set {
        log::info!("Building overview for set {set_code}");
        fetch_set(&api, set_code, &set_data, include_promos)?
    } else if let Some(path) = &args.file {
        log::info!("Building overview for cube list {}", path.display());
        let mut list = Cubelist::load(path)?;
        let cards = fetch_cubelist(&api, &mut list, &set_data, include_promos)?;
        overrides = list.into_overrides();
        cards
    } else {
        unreachable!("clap enforces exactly one of --set and --file");
    };

    let mut store = GroupingStore::new();
    for card in cards {
        let key = classify(&card, overrides.get(&card.name).copied());
        store.insert(key, card);
    }
    log::info!("Grouped {} cards", store.len());

    let html = render_page(&render_overview(&store));
    write_page(&args.output, &html)
}
