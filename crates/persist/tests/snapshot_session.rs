//! Black-box test: a store survives a simulated process restart through the
//! snapshot collaborator.

use anyhow::Result;
use chrono::{TimeZone, Utc};

use tally_core::KeyedStore;
use tally_persist::SnapshotFile;
use tally_warehouse::InventoryItem;

fn seed_log() -> KeyedStore<InventoryItem> {
    let added = Utc.with_ymd_and_hms(2026, 1, 15, 8, 30, 0).unwrap();
    let mut log = KeyedStore::new();
    log.add(InventoryItem::new(1, "Notebook", 50, added)).unwrap();
    log.add(InventoryItem::new(2, "Pen", 100, added)).unwrap();
    log.add(InventoryItem::new(3, "Stapler", 20, added)).unwrap();
    log
}

#[test]
fn snapshot_survives_a_new_session() -> Result<()> {
    tally_observability::init();

    let dir = tempfile::tempdir()?;
    let file = SnapshotFile::new(dir.path().join("inventory.json"));

    // First session: seed and save.
    let log = seed_log();
    file.save(&log.snapshot())?;

    // New session: fresh store, rehydrated from disk.
    let mut restored: KeyedStore<InventoryItem> = KeyedStore::new();
    for item in file.load_or_default::<InventoryItem>()? {
        restored.add(item)?;
    }

    assert_eq!(restored.snapshot(), log.snapshot());
    assert_eq!(restored.get(2)?.name, "Pen");
    Ok(())
}

#[test]
fn first_session_starts_empty_without_a_snapshot() -> Result<()> {
    tally_observability::init();

    let dir = tempfile::tempdir()?;
    let file = SnapshotFile::new(dir.path().join("inventory.json"));

    let mut log: KeyedStore<InventoryItem> = KeyedStore::new();
    for item in file.load_or_default::<InventoryItem>()? {
        log.add(item)?;
    }

    assert!(log.is_empty());
    Ok(())
}
