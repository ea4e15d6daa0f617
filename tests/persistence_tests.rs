use sessiondraft::db::storage::SqliteStorage;
use sessiondraft::models::{FileUpload, ProtocolType, SessionState};
use sessiondraft::store::{
    DEFAULT_STORAGE_KEY, DraftStorage, DraftStore, HydrationOutcome, ManualClock, MemoryStorage,
    PersistedDocument, StoreOptions,
};

mod common;
use common::{memory_store, setup_test_db, t0};

#[test]
fn test_store_not_hydrated_until_loaded() {
    let storage = MemoryStorage::new();
    let mut store = DraftStore::new(storage.clone(), ManualClock::new(t0()), StoreOptions::default());
    assert!(!store.is_hydrated());

    assert_eq!(store.hydrate(), HydrationOutcome::Empty);
    assert!(store.is_hydrated());
    assert!(store.drafts().is_empty());
}

#[test]
fn test_every_mutation_writes_through() {
    let (mut store, storage, _) = memory_store();
    assert!(storage.is_empty());

    store.ensure_draft("p1").unwrap();

    let raw = storage.get_item(DEFAULT_STORAGE_KEY).unwrap().unwrap();
    let drafts = PersistedDocument::decode(&raw).unwrap();
    assert!(drafts.contains_key("p1"));
}

#[test]
fn test_round_trip_memory_storage() {
    let (mut store, storage, clock) = memory_store();

    store.add_protocol("p1", ProtocolType::MotorCoordination).unwrap();
    store
        .add_files("p1", vec![FileUpload::new("report.pdf", 3000)])
        .unwrap();
    store.set_evolution_progress("p1", 40).unwrap();
    store.start_session("p1").unwrap();
    clock.advance_millis(12_345);
    store.save_draft("p2").unwrap();

    let (reloaded, outcome) =
        DraftStore::open(storage.clone(), clock.clone(), StoreOptions::default());

    assert_eq!(outcome, HydrationOutcome::Loaded { drafts: 2 });
    assert_eq!(reloaded.drafts(), store.drafts());
    // still running: the start instant survived, nothing ticking was stored
    let d = reloaded.draft("p1").unwrap();
    assert_eq!(d.state(), SessionState::Running);
    assert_eq!(d.session_started_at, Some(t0()));
    assert_eq!(d.elapsed_seconds, 0);
}

#[test]
fn test_round_trip_sqlite_storage() {
    let db_path = setup_test_db("round_trip");
    let clock = ManualClock::new(t0());

    let stored = {
        let storage = SqliteStorage::open(&db_path).unwrap();
        let (mut store, outcome) =
            DraftStore::open(storage, clock.clone(), StoreOptions::default());
        assert_eq!(outcome, HydrationOutcome::Empty);

        store.add_protocol("p1", ProtocolType::SpeechAssessment).unwrap();
        store.start_session("p1").unwrap();
        clock.advance_millis(65_000);
        store.finish_session("p1").unwrap();
        store.drafts().clone()
    };

    let storage = SqliteStorage::open(&db_path).unwrap();
    let (store, outcome) = DraftStore::open(storage, clock, StoreOptions::default());

    assert_eq!(outcome, HydrationOutcome::Loaded { drafts: 1 });
    assert_eq!(store.drafts(), &stored);
    assert_eq!(store.draft("p1").unwrap().elapsed_seconds, 65);
}

#[test]
fn test_malformed_document_starts_empty() {
    let storage = MemoryStorage::new();
    storage.set_item(DEFAULT_STORAGE_KEY, "{not json").unwrap();

    let (store, outcome) =
        DraftStore::open(storage, ManualClock::new(t0()), StoreOptions::default());

    assert!(matches!(outcome, HydrationOutcome::Discarded { .. }));
    assert!(store.is_hydrated());
    assert!(store.drafts().is_empty());
}

#[test]
fn test_foreign_schema_version_is_discarded() {
    let storage = MemoryStorage::new();
    storage
        .set_item(
            DEFAULT_STORAGE_KEY,
            r#"{"state":{"drafts":{"p1":{"sessionName":"x"}}},"version":2}"#,
        )
        .unwrap();

    let (store, outcome) =
        DraftStore::open(storage, ManualClock::new(t0()), StoreOptions::default());

    match outcome {
        HydrationOutcome::Discarded { reason } => assert!(reason.contains("version 2")),
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert!(store.draft("p1").is_none());
}

#[test]
fn test_partial_stored_draft_gets_defaults() {
    let storage = MemoryStorage::new();
    storage
        .set_item(
            DEFAULT_STORAGE_KEY,
            r#"{"state":{"drafts":{"p1":{"sessionName":"Old","notes":"n"}}},"version":1}"#,
        )
        .unwrap();

    let (store, _) = DraftStore::open(storage, ManualClock::new(t0()), StoreOptions::default());

    let d = store.draft("p1").unwrap();
    assert_eq!(d.session_name, "Old");
    assert_eq!(d.notes, "n");
    assert_eq!(d.evolution_progress, 10);
    assert!(d.protocols.is_empty());
}

#[test]
fn test_stored_draft_without_name_gets_default_name() {
    let storage = MemoryStorage::new();
    storage
        .set_item(
            DEFAULT_STORAGE_KEY,
            r#"{"state":{"drafts":{"p1":{"notes":"kept"},"p2":{"sessionName":"Named"}}},"version":1}"#,
        )
        .unwrap();

    let (mut store, outcome) =
        DraftStore::open(storage, ManualClock::new(t0()), StoreOptions::default());
    assert_eq!(outcome, HydrationOutcome::Loaded { drafts: 2 });

    store.ensure_draft("p3").unwrap();
    let fresh_name = store.draft("p3").unwrap().session_name.clone();

    let p1 = store.draft("p1").unwrap();
    assert!(!p1.session_name.is_empty());
    assert_eq!(p1.session_name, fresh_name);
    assert_eq!(p1.notes, "kept");
    assert_eq!(store.draft("p2").unwrap().session_name, "Named");
}

#[test]
fn test_writes_before_hydration_are_not_flushed() {
    let storage = MemoryStorage::new();
    let mut store =
        DraftStore::new(storage.clone(), ManualClock::new(t0()), StoreOptions::default());

    store.ensure_draft("early").unwrap();
    assert!(storage.get_item(DEFAULT_STORAGE_KEY).unwrap().is_none());

    // stored state wins on hydration
    store.hydrate();
    assert!(store.draft("early").is_none());
}

#[test]
fn test_document_uses_camel_case_and_enum_codes() {
    let (mut store, storage, _) = memory_store();
    store.add_protocol("p1", ProtocolType::SchoolFollowUp).unwrap();

    let raw = storage.get_item(DEFAULT_STORAGE_KEY).unwrap().unwrap();
    assert!(raw.contains(r#""version":1"#));
    assert!(raw.contains(r#""sessionType":"session""#));
    assert!(raw.contains(r#""evolutionStatus":"not_started""#));
    assert!(raw.contains(r#""protocolType":"school-follow-up""#));
    assert!(raw.contains(r#""sessionStartedAt":null"#));
}

#[test]
fn test_custom_storage_key() {
    let storage = MemoryStorage::new();
    let options = StoreOptions {
        storage_key: "clinic-a".into(),
        ..StoreOptions::default()
    };
    let (mut store, _) = DraftStore::open(storage.clone(), ManualClock::new(t0()), options);
    store.ensure_draft("p1").unwrap();

    assert!(storage.get_item("clinic-a").unwrap().is_some());
    assert!(storage.get_item(DEFAULT_STORAGE_KEY).unwrap().is_none());
}

#[test]
fn test_init_db_is_repeatable_and_creates_kv_store() {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    sessiondraft::db::initialize::init_db(&conn).unwrap();
    sessiondraft::db::initialize::init_db(&conn).unwrap();

    let tables: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'kv_store'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(tables, 1);

    let applied: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(applied, 2);
}
