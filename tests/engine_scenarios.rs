use housing_finder::models::timestamp;
use housing_finder::search::{category, filter, matcher, sort};
use housing_finder::store::FAVORITES_KEY;
use housing_finder::{
    BlobStore, FavoritesStore, FileBlobStore, FilterCriteria, FilterUpdate, JsonFileSource,
    Listing, PropertyEngine, PropertyStore, PropertyType, SampleCatalog, SortKey, TypeFilter,
};
use tempfile::TempDir;

fn listing(id: &str, price: u64, created: &str, property_type: PropertyType) -> Listing {
    let created_at = timestamp::parse(created).expect("fixture date");
    Listing::new(id, format!("Listing {id}"), "Yangon, Myanmar", property_type, price, created_at)
}

fn abc() -> Vec<Listing> {
    let mut a = listing("A", 100, "2024-01-01", PropertyType::House);
    a.title = "House on Main".to_string();
    vec![
        a,
        listing("B", 200, "2024-02-01", PropertyType::Apartment),
        listing("C", 150, "2024-01-15", PropertyType::House),
    ]
}

fn ids<'a>(listings: &[&'a Listing]) -> Vec<&'a str> {
    listings.iter().map(|l| l.id.as_str()).collect()
}

fn file_favorites(dir: &TempDir) -> FavoritesStore {
    FavoritesStore::load(Box::new(FileBlobStore::new(dir.path())))
}

#[test]
fn literal_scenarios() {
    let listings = abc();

    let houses = FilterCriteria {
        property_type: TypeFilter::Only(PropertyType::House),
        ..Default::default()
    };
    assert_eq!(ids(&filter::apply(&listings, &houses)), vec!["A", "C"]);

    let all: Vec<&Listing> = listings.iter().collect();
    assert_eq!(ids(&sort::sort(all.clone(), SortKey::PriceAscending)), vec!["A", "C", "B"]);
    assert_eq!(ids(&sort::sort(all, SortKey::Newest)), vec!["B", "C", "A"]);

    let mid_price = FilterCriteria::default().merged(FilterUpdate {
        min_price: Some(120),
        max_price: Some(180),
        ..Default::default()
    });
    assert_eq!(ids(&filter::apply(&listings, &mid_price)), vec!["C"]);

    assert!(matcher::matches(&listings[0], "hou"));
    assert!(!matcher::matches(&listings[0], "zzz"));
}

#[test]
fn merged_criteria_yield_a_subsequence() {
    let store = PropertyStore::new(SampleCatalog::listings().unwrap()).unwrap();
    let updates = [
        FilterUpdate {
            max_price: Some(400_000),
            ..Default::default()
        },
        FilterUpdate {
            location: Some("yangon".to_string()),
            ..Default::default()
        },
        FilterUpdate {
            min_bedrooms: Some(3),
            ..Default::default()
        },
        FilterUpdate {
            amenities: Some(["Garden".to_string()].into()),
            ..Default::default()
        },
    ];

    let mut criteria = FilterCriteria::default();
    let mut previous = filter::apply(store.all(), &criteria);
    assert_eq!(previous.len(), store.len());

    for update in updates {
        criteria.merge(update);
        let narrowed = filter::apply(store.all(), &criteria);
        let mut rest = previous.iter();
        for listing in &narrowed {
            assert!(
                rest.any(|p| p.id == listing.id),
                "{} is not in the broader result in order",
                listing.id
            );
        }
        previous = narrowed;
    }
    assert_eq!(ids(&previous), vec!["9"]);
}

#[test]
fn category_counts_over_sample() {
    let listings = SampleCatalog::listings().unwrap();
    let counts = category::count_by_type(&listings);
    let json = serde_json::to_value(&counts).unwrap();
    assert_eq!(json["all"], 12);
    assert_eq!(json["house"], 3);
    assert_eq!(json["apartment"], 3);
    assert_eq!(json["commercial"], 2);
    assert_eq!(json["cabin"], 1);
    assert_eq!(json["condominium"], 2);
    assert_eq!(json["bungalow"], 1);

    assert_eq!(category::filter_by_type(&listings, "condominium").len(), 2);
    assert!(category::filter_by_type(&listings, "villa").is_empty());
}

#[test]
fn favorites_survive_sessions() {
    let dir = TempDir::new().expect("tempdir");

    let mut first = file_favorites(&dir);
    assert!(first.toggle("A").persisted.is_ok());
    assert!(first.toggle("B").persisted.is_ok());
    drop(first);

    let mut second = file_favorites(&dir);
    assert_eq!(second.all(), ["A".to_string(), "B".to_string()]);
    assert!(!second.toggle("A").is_favorite);

    let third = file_favorites(&dir);
    assert!(!third.is_favorite("A"));
    assert!(third.is_favorite("B"));
}

#[test]
fn double_toggle_restores_persisted_blob() {
    let dir = TempDir::new().expect("tempdir");
    let blobs = FileBlobStore::new(dir.path());
    blobs.write(FAVORITES_KEY, r#"["2","7"]"#).unwrap();

    let mut favorites = file_favorites(&dir);
    let before = blobs.read(FAVORITES_KEY).unwrap();

    for id in ["7", "9"] {
        let was = favorites.is_favorite(id);
        let _ = favorites.toggle(id);
        let _ = favorites.toggle(id);
        assert_eq!(favorites.is_favorite(id), was);
        assert_eq!(blobs.read(FAVORITES_KEY).unwrap(), before);
    }
}

#[test]
fn corrupt_favorites_file_starts_empty() {
    let dir = TempDir::new().expect("tempdir");
    std::fs::write(dir.path().join("favorites.json"), "not json at all").unwrap();

    let mut favorites = file_favorites(&dir);
    assert!(favorites.is_empty());
    assert!(favorites.toggle("1").persisted.is_ok());
    assert_eq!(
        std::fs::read_to_string(dir.path().join("favorites.json")).unwrap(),
        r#"["1"]"#
    );
}

#[test]
fn dangling_favorite_is_tolerated() {
    let dir = TempDir::new().expect("tempdir");
    let store = PropertyStore::new(abc()).unwrap();
    let mut engine = PropertyEngine::new(store, file_favorites(&dir));

    assert!(engine.toggle_favorite("ghost").is_favorite);
    assert!(engine.is_favorite("ghost"));
    assert!(engine.store().by_id("ghost").is_none());
}

#[tokio::test]
async fn engine_over_json_catalog() {
    let dir = TempDir::new().expect("tempdir");
    let catalog = dir.path().join("catalog.json");
    let listings = SampleCatalog::listings().unwrap();
    tokio::fs::write(&catalog, serde_json::to_string_pretty(&listings).unwrap())
        .await
        .unwrap();

    let store = PropertyStore::load(&JsonFileSource::new(&catalog)).await.unwrap();
    assert_eq!(store.len(), 12);

    let mut engine = PropertyEngine::new(store, file_favorites(&dir));
    engine.set_search_text("luxury");
    engine.set_sort_key(SortKey::MostViewed);
    assert_eq!(ids(&engine.results()), vec!["8", "2", "5"]);

    // Equal prices keep catalog order
    engine.set_sort_key(SortKey::PriceAscending);
    assert_eq!(ids(&engine.results()), vec!["2", "5", "8"]);

    engine.set_filter_criteria(FilterUpdate {
        property_type: Some(TypeFilter::parse("apartment")),
        ..Default::default()
    });
    assert_eq!(ids(&engine.results()), vec!["2", "5"]);

    engine.set_filter_criteria(FilterUpdate {
        property_type: Some(TypeFilter::parse("penthouse")),
        ..Default::default()
    });
    assert!(engine.results().is_empty());
}

#[tokio::test]
async fn duplicate_ids_fail_to_load() {
    let dir = TempDir::new().expect("tempdir");
    let catalog = dir.path().join("catalog.json");
    let mut listings = abc();
    listings[1].id = "A".to_string();
    tokio::fs::write(&catalog, serde_json::to_string(&listings).unwrap())
        .await
        .unwrap();

    let err = PropertyStore::load(&JsonFileSource::new(&catalog)).await.unwrap_err();
    assert!(format!("{err:#}").contains("Duplicate listing id: A"));
}
