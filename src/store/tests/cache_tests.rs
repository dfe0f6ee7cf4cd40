//! Tests for the singleton dataset cache

use tempfile::TempDir;

use super::write_dataset_file;
use crate::constants::COUNTRIES_FILE;
use crate::store::StandingDataStore;

#[tokio::test]
async fn test_countries_load_twice_in_order() {
    let dir = TempDir::new().unwrap();
    write_dataset_file(
        dir.path(),
        COUNTRIES_FILE,
        "ISO,Name\nUS,United States\nGB,United Kingdom\n",
    );
    let store = StandingDataStore::new(dir.path());

    for _ in 0..2 {
        let countries = store.countries().await.unwrap();
        assert_eq!(countries.len(), 2);
        assert_eq!(countries[0].value("Name"), Some("United States"));
        assert_eq!(countries[1].value("Name"), Some("United Kingdom"));
    }
}

#[tokio::test]
async fn test_second_load_does_not_touch_the_filesystem() {
    let dir = TempDir::new().unwrap();
    write_dataset_file(dir.path(), COUNTRIES_FILE, "ISO,Name\nUS,United States\n");
    let store = StandingDataStore::new(dir.path());

    assert_eq!(store.countries().await.unwrap().len(), 1);

    // Remove the backing file; a reload would now come back empty.
    std::fs::remove_file(dir.path().join(COUNTRIES_FILE)).unwrap();
    assert_eq!(store.countries().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_model_types_concatenate_every_file() {
    let dir = TempDir::new().unwrap();
    write_dataset_file(
        dir.path(),
        "model-type/schema-01/A3.csv",
        "ICAO,Manufacturer,Model\nA320,Airbus,A320\nA321,Airbus,A321\n",
    );
    write_dataset_file(
        dir.path(),
        "model-type/schema-01/B7.csv",
        "ICAO,Manufacturer,Model\nB738,Boeing,737-800\n",
    );
    write_dataset_file(dir.path(), "model-type/schema-01/readme.txt", "ignored");
    let store = StandingDataStore::new(dir.path());

    let model_types = store.model_types().await.unwrap();

    assert_eq!(model_types.len(), 3);
    let icaos: Vec<_> = model_types
        .iter()
        .map(|r| r.value("ICAO").unwrap())
        .collect();
    assert!(icaos.contains(&"A320"));
    assert!(icaos.contains(&"B738"));
}

#[tokio::test]
async fn test_missing_singleton_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = StandingDataStore::new(dir.path());

    assert!(store.airlines().await.unwrap().is_empty());
    assert!(store.code_blocks().await.unwrap().is_empty());
    assert!(store.registration_prefixes().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_concurrent_first_access_resolves_to_one_load() {
    let dir = TempDir::new().unwrap();
    write_dataset_file(dir.path(), COUNTRIES_FILE, "ISO,Name\nUS,United States\n");
    let store = std::sync::Arc::new(StandingDataStore::new(dir.path()));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = store.clone();
            tokio::spawn(async move { store.countries().await.unwrap().len() })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap(), 1);
    }
}
