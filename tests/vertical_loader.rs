//! End-to-end tests of the split-and-cache loader on the local filesystem.

use std::fs;
use std::io::ErrorKind;
use tempfile::TempDir;
use vertical_data_loader::*;

mod common;
use common::*;

#[test]
fn test_label_owner_scenario() {
    let root = TempDir::new().unwrap();
    create_source_csv(root.path(), "site-2", 10);

    let loader = VerticalDataLoader::new(config_for(root.path(), "site-2", "site-2", 0.8)).unwrap();
    assert_eq!(loader.client_data_path(), root.path().join("site-2").join("split.csv"));

    let (train, valid) = loader.load_data().unwrap();

    let paths = loader.cache_paths();
    let train_lines = read_lines(&paths.train);
    let valid_lines = read_lines(&paths.valid);
    assert_eq!(train_lines, (0..8).map(source_line).collect::<Vec<_>>());
    assert_eq!(valid_lines, (8..10).map(source_line).collect::<Vec<_>>());

    let train_uri = train.request().uri();
    assert!(train_uri.ends_with("train.csv?format=csv&label_column=0"));
    assert!(valid.request().uri().ends_with("valid.csv?format=csv&label_column=0"));

    assert_eq!(train.num_rows(), 8);
    assert_eq!(train.num_features(), 2);
    assert_eq!(valid.num_rows(), 2);
    assert_eq!(train.data_split_mode(), DataSplitMode::Col);

    let labels = train.labels().unwrap();
    assert_eq!(labels[0], 0.0);
    assert_eq!(labels[7], 7.0);
    assert_eq!(valid.labels().unwrap()[1], 9.0);
    assert_eq!(valid.features()[[1, 1]], 90.0);
}

#[test]
fn test_non_owner_scenario() {
    let root = TempDir::new().unwrap();
    create_source_csv(root.path(), "site-1", 10);

    let loader = VerticalDataLoader::new(config_for(root.path(), "site-1", "site-2", 0.8)).unwrap();
    let (train, valid) = loader.load_data().unwrap();

    assert!(train.request().uri().ends_with("train.csv?format=csv"));
    assert!(!train.request().uri().contains("label_column"));
    assert!(train.labels().is_none());
    assert!(valid.labels().is_none());

    // Without a label every column is a feature.
    assert_eq!(train.num_features(), 3);
    assert_eq!(train.num_rows(), 8);
    assert_eq!(valid.num_rows(), 2);
}

#[test]
fn test_second_load_performs_no_writes() {
    let root = TempDir::new().unwrap();
    create_source_csv(root.path(), "site-2", 10);

    let store = CountingStore::default();
    let loader = VerticalDataLoader::with_parts(
        config_for(root.path(), "site-2", "site-2", 0.8),
        &store,
        RecordingFactory,
    )
    .unwrap();

    let first = loader.load_data().unwrap();
    assert_eq!(store.writes.get(), 2);
    assert_eq!(store.reads.get(), 1);

    let second = loader.load_data().unwrap();
    assert_eq!(store.writes.get(), 2);
    assert_eq!(store.reads.get(), 1);
    assert_eq!(first, second);
}

#[test]
fn test_stale_cache_is_reused() {
    let root = TempDir::new().unwrap();
    let source = create_source_csv(root.path(), "site-2", 10);
    let dir = source.parent().unwrap();
    fs::write(dir.join("train.csv"), "100,1,1\n").unwrap();
    fs::write(dir.join("valid.csv"), "200,2,2\n").unwrap();

    // The source changes after the cache was written; the cache still wins.
    create_source_csv(root.path(), "site-2", 50);

    let loader = VerticalDataLoader::with_parts(
        config_for(root.path(), "site-2", "site-2", 0.8),
        CountingStore::default(),
        RecordingFactory,
    )
    .unwrap();
    assert!(loader.is_cached());

    let (train, valid) = loader.load_data().unwrap();
    assert_eq!(train.content, "100,1,1\n");
    assert_eq!(valid.content, "200,2,2\n");
    assert_eq!(read_lines(dir.join("train.csv")), vec!["100,1,1"]);
}

#[test]
fn test_cache_without_source_is_enough() {
    let root = TempDir::new().unwrap();
    let dir = root.path().join("site-3");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("train.csv"), "1,2\n3,4\n").unwrap();
    fs::write(dir.join("valid.csv"), "5,6\n").unwrap();

    let loader = VerticalDataLoader::new(config_for(root.path(), "site-3", "site-1", 0.5)).unwrap();
    let (train, valid) = loader.load_data().unwrap();
    assert_eq!(train.num_rows(), 2);
    assert_eq!(valid.num_rows(), 1);
}

#[test]
fn test_half_materialized_cache_is_rebuilt() {
    let root = TempDir::new().unwrap();
    let source = create_source_csv(root.path(), "site-2", 4);
    let dir = source.parent().unwrap();
    fs::write(dir.join("train.csv"), "stale\n").unwrap();

    let loader = VerticalDataLoader::new(config_for(root.path(), "site-2", "site-2", 0.5)).unwrap();
    assert!(!loader.is_cached());
    let plan = loader.ensure_split().unwrap().unwrap();
    assert_eq!(plan.train_rows, 2);

    assert_eq!(read_lines(dir.join("train.csv")), vec![source_line(0), source_line(1)]);
    assert_eq!(read_lines(dir.join("valid.csv")), vec![source_line(2), source_line(3)]);
    assert!(loader.ensure_split().unwrap().is_none());
}

#[test]
fn test_missing_source_is_io_error() {
    let root = TempDir::new().unwrap();
    fs::create_dir_all(root.path().join("site-4")).unwrap();

    let loader = VerticalDataLoader::new(config_for(root.path(), "site-4", "site-4", 0.8)).unwrap();
    let err = loader.load_data().unwrap_err();
    assert_eq!(err.io_kind(), Some(ErrorKind::NotFound));
    assert!(!loader.cache_paths().train.exists());
}

#[test]
fn test_malformed_source_is_csv_error() {
    let root = TempDir::new().unwrap();
    let dir = root.path().join("site-2");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("split.csv"), "a,b,c\n1,2,3\n4,5\n").unwrap();

    let loader = VerticalDataLoader::new(config_for(root.path(), "site-2", "site-2", 0.8)).unwrap();
    let err = loader.load_data().unwrap_err();
    assert!(matches!(err, LoaderError::Csv { .. }));
    assert!(!dir.join("train.csv").exists());
    assert!(!dir.join("valid.csv").exists());
}

#[test]
fn test_empty_train_split_is_rejected() {
    let root = TempDir::new().unwrap();
    create_source_csv(root.path(), "site-2", 1);

    let loader = VerticalDataLoader::new(config_for(root.path(), "site-2", "site-2", 0.5)).unwrap();
    let err = loader.load_data().unwrap_err();
    assert!(matches!(
        err,
        LoaderError::EmptySplit {
            split: SplitKind::Train,
            total_rows: 1,
            ..
        }
    ));
    assert!(!loader.is_cached());
}

#[test]
fn test_full_train_proportion_leaves_empty_validation() {
    let root = TempDir::new().unwrap();
    create_source_csv(root.path(), "site-2", 5);

    let loader = VerticalDataLoader::new(config_for(root.path(), "site-2", "site-2", 1.0)).unwrap();
    let (train, valid) = loader.load_data().unwrap();
    assert_eq!(train.num_rows(), 5);
    assert_eq!(valid.num_rows(), 0);
    assert_eq!(fs::read_to_string(loader.cache_paths().valid).unwrap(), "");
}

#[test]
fn test_participants_split_independently() {
    let root = TempDir::new().unwrap();
    create_source_csv(root.path(), "site-1", 10);
    create_source_csv(root.path(), "site-2", 10);

    let base = LoaderConfig::new(template_in(root.path()), "site-1", 0.7);
    let mut shapes = Vec::new();
    for client in ["site-1", "site-2"] {
        let loader = VerticalDataLoader::new(base.with_context(client, DataSplitMode::Col)).unwrap();
        let (train, valid) = loader.load_data().unwrap();
        shapes.push((train.num_rows(), valid.num_rows(), train.labels().is_some()));
    }

    // Same rows on both sides; only the owner carries the label.
    assert_eq!(shapes, vec![(7, 3, true), (7, 3, false)]);
}

#[test]
fn test_concurrent_first_loads_agree() {
    let root = TempDir::new().unwrap();
    create_source_csv(root.path(), "site-2", 100);
    let config = config_for(root.path(), "site-2", "site-2", 0.8);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let config = config.clone();
                scope.spawn(move || {
                    let loader = VerticalDataLoader::new(config).unwrap();
                    let (train, valid) = loader.load_data().unwrap();
                    (train.num_rows(), valid.num_rows())
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), (80, 20));
        }
    });

    let loader = VerticalDataLoader::new(config).unwrap();
    assert_eq!(read_lines(loader.cache_paths().train).len(), 80);
    assert_eq!(read_lines(loader.cache_paths().valid).len(), 20);
}
