use sessiondraft::models::{
    DraftPatch, EvolutionStatus, FileCategory, FileUpload, ProtocolPatch, ProtocolType,
    SessionDraft, SessionState, SessionType,
};
use sessiondraft::store::{DraftMap, with_default};

mod common;
use common::memory_store;

#[test]
fn test_default_draft_on_first_access() {
    let (mut store, _, _) = memory_store();

    assert!(store.draft("new-patient").is_none());
    store.ensure_draft("new-patient").unwrap();

    let d = store.draft("new-patient").unwrap();
    assert_eq!(d.session_type, SessionType::Session);
    assert_eq!(d.evolution_status, EvolutionStatus::NotStarted);
    assert!(d.protocols.is_empty());
    assert!(d.files.is_empty());
    assert!(!d.has_evolution);
    assert!(!d.is_session_running);
    assert!(!d.is_completed);
    assert_eq!(d.session_started_at, None);
    assert_eq!(d.elapsed_seconds, 0);
    assert!(!d.session_name.is_empty());
    assert_eq!(d.state(), SessionState::NotStarted);
}

#[test]
fn test_ensure_draft_keeps_existing() {
    let (mut store, _, _) = memory_store();

    store
        .update_draft(
            "p1",
            DraftPatch {
                notes: Some("first visit".into()),
                ..DraftPatch::default()
            },
        )
        .unwrap();
    store.ensure_draft("p1").unwrap();

    assert_eq!(store.draft("p1").unwrap().notes, "first visit");
}

#[test]
fn test_update_draft_merges_only_given_fields() {
    let (mut store, _, _) = memory_store();
    store.ensure_draft("p1").unwrap();
    let original_name = store.draft("p1").unwrap().session_name.clone();

    store
        .update_draft(
            "p1",
            DraftPatch {
                session_type: Some(SessionType::Anamnesis),
                notes: Some("speech delay".into()),
                ..DraftPatch::default()
            },
        )
        .unwrap();

    let d = store.draft("p1").unwrap();
    assert_eq!(d.session_name, original_name);
    assert_eq!(d.session_type, SessionType::Anamnesis);
    assert_eq!(d.notes, "speech delay");
}

#[test]
fn test_start_is_idempotent() {
    let (mut store, _, clock) = memory_store();

    store.start_session("p1").unwrap();
    let once = store.draft("p1").unwrap().clone();

    clock.advance_millis(5_000);
    store.start_session("p1").unwrap();
    let twice = store.draft("p1").unwrap();

    assert_eq!(&once, twice);
    assert_eq!(twice.state(), SessionState::Running);
    assert_eq!(twice.session_started_at, Some(common::t0()));
}

#[test]
fn test_finish_is_idempotent() {
    let (mut store, _, clock) = memory_store();

    store.start_session("p1").unwrap();
    clock.advance_millis(10_000);
    store.finish_session("p1").unwrap();
    let once = store.draft("p1").unwrap().clone();

    clock.advance_millis(10_000);
    store.finish_session("p1").unwrap();

    assert_eq!(&once, store.draft("p1").unwrap());
    assert_eq!(once.elapsed_seconds, 10);
}

#[test]
fn test_finish_without_start_is_noop() {
    let (mut store, _, _) = memory_store();
    store.finish_session("p1").unwrap();

    let d = store.draft("p1").unwrap();
    assert_eq!(d.state(), SessionState::NotStarted);
    assert!(!d.is_completed);
}

#[test]
fn test_elapsed_accumulates_on_finish() {
    let (mut store, _, clock) = memory_store();

    // first interval accumulates two minutes
    store.start_session("p1").unwrap();
    clock.advance_millis(120_000);
    store.finish_session("p1").unwrap();
    assert_eq!(store.draft("p1").unwrap().elapsed_seconds, 120);

    store.start_session("p1").unwrap();
    clock.advance_millis(65_000);
    store.finish_session("p1").unwrap();

    let d = store.draft("p1").unwrap();
    assert_eq!(d.elapsed_seconds, 185);
    assert_eq!(d.session_started_at, None);
    assert!(!d.is_session_running);
    assert!(d.is_completed);
}

#[test]
fn test_restart_after_finish_reopens_session() {
    let (mut store, _, clock) = memory_store();

    store.start_session("p1").unwrap();
    clock.advance_millis(30_000);
    store.finish_session("p1").unwrap();
    assert_eq!(store.draft("p1").unwrap().state(), SessionState::Finished);

    clock.advance_millis(1_000);
    store.start_session("p1").unwrap();

    let d = store.draft("p1").unwrap();
    assert_eq!(d.state(), SessionState::Running);
    assert!(!d.is_completed);
    assert_eq!(d.elapsed_seconds, 30);
    assert!(d.session_started_at.is_some());
}

#[test]
fn test_protocol_lifecycle() {
    let (mut store, _, _) = memory_store();

    let a = store
        .add_protocol("p1", ProtocolType::SpeechAssessment)
        .unwrap();
    let b = store
        .add_protocol("p1", ProtocolType::SchoolFollowUp)
        .unwrap();
    assert_ne!(a, b);

    store
        .update_protocol(
            "p1",
            &a,
            ProtocolPatch {
                content: Some("articulation within norms".into()),
                ..ProtocolPatch::default()
            },
        )
        .unwrap();
    store
        .update_protocol(
            "p1",
            &b,
            ProtocolPatch {
                protocol_type: Some(ProtocolType::MotorCoordination),
                content: None,
            },
        )
        .unwrap();

    let d = store.draft("p1").unwrap();
    assert_eq!(d.protocols.len(), 2);
    assert_eq!(d.protocols[0].id, a);
    assert_eq!(d.protocols[0].protocol_type, ProtocolType::SpeechAssessment);
    assert_eq!(d.protocols[0].content, "articulation within norms");
    assert_eq!(d.protocols[1].protocol_type, ProtocolType::MotorCoordination);
    assert_eq!(d.protocols[1].content, "");

    store.remove_protocol("p1", &a).unwrap();
    let d = store.draft("p1").unwrap();
    assert_eq!(d.protocols.len(), 1);
    assert_eq!(d.protocols[0].id, b);
}

#[test]
fn test_unknown_protocol_id_is_ignored() {
    let (mut store, _, _) = memory_store();
    store.add_protocol("p1", ProtocolType::SpeechAssessment).unwrap();
    let before = store.draft("p1").unwrap().clone();

    store
        .update_protocol(
            "p1",
            "missing",
            ProtocolPatch {
                content: Some("x".into()),
                ..ProtocolPatch::default()
            },
        )
        .unwrap();
    store.remove_protocol("p1", "missing").unwrap();

    assert_eq!(&before, store.draft("p1").unwrap());
}

#[test]
fn test_list_mutation_isolated_per_patient() {
    let (mut store, _, _) = memory_store();
    store.ensure_draft("p2").unwrap();
    let p2_before = store.draft("p2").unwrap().clone();

    store.add_protocol("p1", ProtocolType::SpeechAssessment).unwrap();
    store
        .add_files("p1", vec![FileUpload::new("report.pdf", 4096)])
        .unwrap();

    assert_eq!(&p2_before, store.draft("p2").unwrap());
    assert_eq!(store.draft("p1").unwrap().protocols.len(), 1);
}

#[test]
fn test_add_files_normalizes_and_keeps_order() {
    let (mut store, _, _) = memory_store();

    let ids = store
        .add_files(
            "p1",
            vec![
                FileUpload::new("anamnesis.pdf", 10 * 1024),
                FileUpload::new("tiny.txt", 10),
                FileUpload::new("scan.png", 1536).with_category(FileCategory::Report),
            ],
        )
        .unwrap();
    assert_eq!(ids.len(), 3);

    let files = &store.draft("p1").unwrap().files;
    let names: Vec<&str> = files.iter().map(|f| f.file_name.as_str()).collect();
    assert_eq!(names, ["anamnesis.pdf", "tiny.txt", "scan.png"]);
    assert_eq!(files[0].size_kb, 10);
    assert_eq!(files[1].size_kb, 1);
    assert_eq!(files[2].size_kb, 2);
    assert_eq!(files[0].category, FileCategory::Other);
    assert_eq!(files[2].category, FileCategory::Report);
    assert_eq!(
        files.iter().map(|f| f.id.clone()).collect::<Vec<_>>(),
        ids
    );
}

#[test]
fn test_remove_missing_file_leaves_list_unchanged() {
    let (mut store, _, _) = memory_store();
    store
        .add_files("p1", vec![FileUpload::new("a.pdf", 2048)])
        .unwrap();
    let before = store.draft("p1").unwrap().files.clone();

    store.remove_file("p1", "does-not-exist").unwrap();
    store
        .update_file_category("p1", "does-not-exist", FileCategory::Protocol)
        .unwrap();

    assert_eq!(before, store.draft("p1").unwrap().files);
}

#[test]
fn test_file_category_and_removal() {
    let (mut store, _, _) = memory_store();
    let ids = store
        .add_files(
            "p1",
            vec![FileUpload::new("a.pdf", 2048), FileUpload::new("b.pdf", 2048)],
        )
        .unwrap();

    store
        .update_file_category("p1", &ids[1], FileCategory::Anamnesis)
        .unwrap();
    store.remove_file("p1", &ids[0]).unwrap();

    let files = &store.draft("p1").unwrap().files;
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].id, ids[1]);
    assert_eq!(files[0].category, FileCategory::Anamnesis);
}

#[test]
fn test_evolution_setters() {
    let (mut store, _, _) = memory_store();

    store.set_evolution_enabled("p1", true).unwrap();
    store.set_evolution_progress("p1", 70).unwrap();
    store
        .set_evolution_status("p1", EvolutionStatus::InProgress)
        .unwrap();

    let d = store.draft("p1").unwrap();
    assert!(d.has_evolution);
    assert_eq!(d.evolution_progress, 70);
    assert_eq!(d.evolution_status, EvolutionStatus::InProgress);
}

#[test]
fn test_save_draft_stamps_last_saved() {
    let (mut store, _, clock) = memory_store();
    store.ensure_draft("p1").unwrap();
    assert_eq!(store.draft("p1").unwrap().last_saved_at, None);

    clock.advance_millis(42_000);
    store.save_draft("p1").unwrap();

    assert_eq!(
        store.draft("p1").unwrap().last_saved_at,
        Some(common::t0() + chrono::Duration::seconds(42))
    );
}

#[test]
fn test_reset_wipes_history() {
    let (mut store, _, clock) = memory_store();

    store.add_protocol("p1", ProtocolType::SpeechAssessment).unwrap();
    store
        .add_files("p1", vec![FileUpload::new("a.pdf", 2048)])
        .unwrap();
    store.set_evolution_enabled("p1", true).unwrap();
    store.start_session("p1").unwrap();
    clock.advance_millis(90_000);
    store.finish_session("p1").unwrap();
    store.save_draft("p1").unwrap();

    store.reset_draft("p1").unwrap();

    assert_eq!(store.draft("p1").unwrap(), &store.default_draft());
}

#[test]
fn test_with_default_inserts_only_when_missing() {
    let drafts = DraftMap::new();
    let (drafts, created) = with_default(drafts, "p1", || SessionDraft::new("A"));
    assert_eq!(created.session_name, "A");
    assert_eq!(drafts.len(), 1);

    let (drafts, existing) = with_default(drafts, "p1", || SessionDraft::new("B"));
    assert_eq!(existing.session_name, "A");
    assert_eq!(drafts.len(), 1);
}
