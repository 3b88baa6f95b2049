use career_match::catalog::{CatalogCache, CatalogError, CatalogLoader};
use std::path::PathBuf;
use std::sync::Arc;

fn dataset_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../career_recommendation_dataset.csv")
}

fn scratch_copy(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "career-match-{}-{}.csv",
        name,
        std::process::id()
    ));
    std::fs::copy(dataset_path(), &path).expect("copy dataset");
    path
}

#[test]
fn shipped_dataset_loads_with_trimmed_fields() {
    let catalog = CatalogLoader::from_path(dataset_path()).expect("dataset loads");

    assert_eq!(catalog.len(), 18);
    let first = &catalog.careers()[0];
    assert_eq!(first.name, "Data Scientist");
    assert!(first.courses.contains("Computer Science"));
    assert!(first.skills.contains("Machine Learning"));
    assert!(first.interests.contains("Artificial Intelligence"));
    assert!(catalog
        .careers()
        .iter()
        .flat_map(|career| career.skills.iter())
        .all(|skill| skill.trim() == skill));
}

#[test]
fn options_cover_every_career_field() {
    let catalog = CatalogLoader::from_path(dataset_path()).expect("dataset loads");
    let options = catalog.options();

    for career in catalog.careers() {
        assert!(career.courses.is_subset(&options.courses));
        assert!(career.skills.is_subset(&options.skills));
        assert!(career.interests.is_subset(&options.interests));
    }
    let courses: Vec<_> = options.courses.iter().cloned().collect();
    let mut sorted = courses.clone();
    sorted.sort();
    assert_eq!(courses, sorted);
}

#[test]
fn cache_reads_the_file_once() {
    let path = scratch_copy("cache-once");
    let cache = CatalogCache::new(&path);
    assert!(!cache.is_loaded());

    let first = cache.load().expect("first load");
    std::fs::remove_file(&path).expect("remove scratch file");
    let second = cache.load().expect("served from cache");

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(second.len(), 18);
}

#[test]
fn cache_shares_one_catalog_across_threads() {
    let path = scratch_copy("cache-threads");
    let cache = Arc::new(CatalogCache::new(&path));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let cache = Arc::clone(&cache);
            std::thread::spawn(move || cache.load().expect("load"))
        })
        .collect();
    let loaded: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("thread joins"))
        .collect();
    std::fs::remove_file(&path).ok();

    let first = &loaded[0];
    assert!(loaded.iter().all(|catalog| Arc::ptr_eq(first, catalog)));
}

#[test]
fn missing_file_is_catalog_unavailable() {
    let cache = CatalogCache::new("./career_recommendation_dataset.missing.csv");
    match cache.load() {
        Err(CatalogError::Io { path, .. }) => {
            assert_eq!(path, PathBuf::from("./career_recommendation_dataset.missing.csv"))
        }
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn malformed_file_is_catalog_unavailable() {
    let csv = "Career,Courses\nNurse,Biology\n";
    let error = CatalogLoader::from_reader(csv.as_bytes()).expect_err("missing columns");
    assert!(matches!(error, CatalogError::Csv(_)));
}
