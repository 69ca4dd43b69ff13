use std::sync::Arc;

use crate::utils::{SAMPLE_SUMMARY, sample_source, write_source};
use chrono::NaiveDate;
use sc_urgency::DatasetCache;

#[test]
fn test_unchanged_source_is_served_from_cache() -> sc_urgency::Result<()> {
    let (_dir, config) = sample_source();
    let mut cache = DatasetCache::new();

    let first = cache.get_or_load(&config)?;
    let second = cache.get_or_load(&config)?;

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.misses(), 1);
    assert_eq!(cache.hits(), 1);
    Ok(())
}

#[test]
fn test_changed_source_is_reloaded() -> sc_urgency::Result<()> {
    let (dir, config) = sample_source();
    let mut cache = DatasetCache::new();
    let before = cache.get_or_load(&config)?;

    let grown = format!("{SAMPLE_SUMMARY}1006;W-06;Nova;50;20/12/2024;Duda;Caio;Oeste\n");
    write_source(dir.path(), "resumo.csv", &grown);
    let after = cache.get_or_load(&config)?;

    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(before.len(), 5);
    assert_eq!(after.len(), 6);
    assert_eq!(cache.misses(), 2);
    Ok(())
}

#[test]
fn test_reference_date_is_part_of_the_key() -> sc_urgency::Result<()> {
    let (_dir, config) = sample_source();
    let mut cache = DatasetCache::new();
    let today = cache.get_or_load(&config)?;

    let tomorrow = config
        .clone()
        .with_reference_date(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    let reloaded = cache.get_or_load(&tomorrow)?;

    assert_eq!(today.rows()[0].days_open, 30);
    assert_eq!(reloaded.rows()[0].days_open, 31);
    Ok(())
}

#[test]
fn test_failures_are_not_cached() {
    let (dir, config) = sample_source();
    std::fs::remove_file(dir.path().join("resumo.csv")).unwrap();

    let mut cache = DatasetCache::new();
    let outcome = cache.load_outcome(&config);
    assert!(!outcome.is_loaded());
    assert!(outcome.error_message().unwrap().starts_with("ERRO CRÍTICO"));

    write_source(dir.path(), "resumo.csv", SAMPLE_SUMMARY);
    assert!(cache.load_outcome(&config).is_loaded());
}

#[test]
fn test_invalidate_forces_reload() -> sc_urgency::Result<()> {
    let (_dir, config) = sample_source();
    let mut cache = DatasetCache::new();
    let first = cache.get_or_load(&config)?;

    cache.invalidate();
    let second = cache.get_or_load(&config)?;

    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(cache.misses(), 2);
    assert_eq!(cache.hits(), 0);
    assert_eq!(first.len(), second.len());
    Ok(())
}
