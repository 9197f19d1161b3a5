mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, SearchArgs};
use housing_finder::highlights::{self, PortfolioStats};
use housing_finder::search::category;
use housing_finder::{
    AppConfig, FavoritesStore, FileBlobStore, JsonFileSource, Listing, ListingSource,
    PropertyEngine, PropertyStore, PropertyType, SampleCatalog, TypeFilter,
};
use serde_json::json;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stderr keeps stdout clean for --json
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config();
    debug!("Config: {:?}", config);

    let mut engine = build_engine(&config).await?;

    match &cli.command {
        Commands::Search(args) => run_search(&mut engine, &config, args, cli.json)?,
        Commands::Show { id } => run_show(&engine, &config, id, cli.json)?,
        Commands::Categories => {
            let counts = category::count_by_type(engine.store().all());
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&counts)?);
            } else {
                for (bucket, count) in &counts {
                    println!("{:<12} {}", bucket, count);
                }
            }
        }
        Commands::Category {
            name,
            filters,
            featured,
        } => {
            if name != "all" && name.parse::<PropertyType>().is_err() {
                warn!("Unknown category {:?}; no listings will match", name);
            }
            let listings = highlights::category_listings(engine.store(), name, &filters.criteria());
            let picks = highlights::category_featured(&listings, *featured);
            debug!("Category {:?}: {} listings, {} featured", name, listings.len(), picks.len());
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({
                        "category": name,
                        "featured": picks,
                        "listings": listings,
                    }))?
                );
            } else {
                if !picks.is_empty() {
                    println!("⭐ Featured in {}:\n", name);
                    print_listings(&engine, &picks, false)?;
                }
                println!("{} properties in {}:\n", listings.len(), name);
                print_listings(&engine, &listings, false)?;
            }
        }
        Commands::Featured { limit } => {
            let listings = highlights::featured(engine.store(), *limit);
            print_listings(&engine, &listings, cli.json)?;
        }
        Commands::Recent { limit } => {
            let listings = highlights::most_recent(engine.store(), *limit);
            print_listings(&engine, &listings, cli.json)?;
        }
        Commands::Favorite { id } => {
            if engine.store().by_id(id).is_none() {
                warn!("Listing {} is not in the catalog; toggling anyway", id);
            }
            let toggle = engine.toggle_favorite(id);
            if let Err(e) = &toggle.persisted {
                warn!("⚠️  Favorite changed for this session only: {}", e);
            }
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({
                        "id": id,
                        "favorite": toggle.is_favorite,
                        "persisted": toggle.persisted.is_ok(),
                    }))?
                );
            } else if toggle.is_favorite {
                println!("❤️  Added {} to favorites", id);
            } else {
                println!("Removed {} from favorites", id);
            }
        }
        Commands::Favorites => {
            let listings = highlights::favorite_listings(engine.store(), engine.favorites());
            let stats = highlights::portfolio_stats(&listings);
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({
                        "listings": listings,
                        "stats": stats,
                    }))?
                );
            } else {
                print_listings(&engine, &listings, false)?;
                print_stats(&stats);
            }
        }
    }

    Ok(())
}

async fn build_engine(config: &AppConfig) -> Result<PropertyEngine> {
    let source: Box<dyn ListingSource> = match &config.catalog {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(SampleCatalog),
    };
    let store = PropertyStore::load(source.as_ref()).await?;

    let favorites = FavoritesStore::load(Box::new(FileBlobStore::new(&config.data_dir)));
    info!(
        "💾 {} favorites loaded from {}",
        favorites.len(),
        config.data_dir.display()
    );

    Ok(PropertyEngine::new(store, favorites).with_sort_key(config.default_sort))
}

fn run_search(
    engine: &mut PropertyEngine,
    config: &AppConfig,
    args: &SearchArgs,
    as_json: bool,
) -> Result<()> {
    if let Some(raw) = &args.property_type {
        if let TypeFilter::Invalid(_) = TypeFilter::parse(raw) {
            warn!("Unknown property type {:?}; no listings will match", raw);
        }
    }

    engine.set_filter_criteria(args.filter_update());
    if let Some(text) = &args.text {
        engine.set_search_text(text.as_str());
    }
    if let Some(key) = args.sort {
        engine.set_sort_key(key);
    }

    let engine: &PropertyEngine = engine;
    let limit = args.limit.unwrap_or(config.result_limit);
    let results = engine.results();
    info!(
        "🔎 {} of {} listings match (sorted by {})",
        results.len(),
        engine.store().len(),
        engine.sort_key()
    );

    let shown: Vec<&Listing> = results.into_iter().take(limit).collect();
    print_listings(engine, &shown, as_json)
}

fn run_show(engine: &PropertyEngine, config: &AppConfig, id: &str, as_json: bool) -> Result<()> {
    let Some(listing) = engine.store().by_id(id) else {
        if as_json {
            println!("{}", json!({ "id": id, "found": false }));
        } else {
            println!("Property not found: {}", id);
        }
        return Ok(());
    };
    let similar = highlights::similar(engine.store(), id, config.similar_limit);

    if as_json {
        let body = json!({
            "found": true,
            "listing": listing,
            "favorite": engine.is_favorite(id),
            "similar": similar,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&body).context("Failed to serialize listing")?
        );
        return Ok(());
    }

    print_listing(engine, 1, listing);
    if !listing.description.is_empty() {
        println!("   {}", listing.description);
    }
    if let Some(agent) = &listing.agent {
        println!("   Agent: {} ({}, {})", agent.name, agent.phone, agent.email);
    }
    if !similar.is_empty() {
        println!("\nSimilar properties:");
        for (i, other) in similar.iter().enumerate() {
            print_listing(engine, i + 1, other);
        }
    }
    Ok(())
}

fn print_listings(engine: &PropertyEngine, listings: &[&Listing], as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(listings)?);
        return Ok(());
    }
    if listings.is_empty() {
        println!("No properties found");
    }
    for (i, listing) in listings.iter().enumerate() {
        print_listing(engine, i + 1, listing);
    }
    Ok(())
}

fn print_listing(engine: &PropertyEngine, n: usize, listing: &Listing) {
    let marker = if engine.is_favorite(&listing.id) { " ❤️" } else { "" };
    println!("{}. {} ({}){}", n, listing.title, listing.price, marker);
    println!(
        "   {} · {} · {} bd, {} ba, {} sqft",
        listing.property_type, listing.location, listing.bedrooms, listing.bathrooms, listing.area
    );
    println!("   ID: {}", listing.id);
    if !listing.amenities.is_empty() {
        let amenities: Vec<&str> = listing.amenities.iter().map(String::as_str).collect();
        println!("   Amenities: {}", amenities.join(", "));
    }
    println!("   Views: {}, listed {}", listing.views, listing.created_at.format("%Y-%m-%d"));
    println!();
}

fn print_stats(stats: &PortfolioStats) {
    println!("Saved: {}", stats.listings);
    println!("Total views: {}", stats.total_views);
    match stats.average_price {
        Some(avg) => println!("Average price: {:.0}", avg),
        None => println!("Average price: -"),
    }
}
