use super::*;

#[test]
fn success_message_reports_counts() {
    let msg = sync_success_message(StravaSyncResult { imported: 3, updated: 2 });
    assert_eq!(msg, "3 activities imported, 2 updated.");
}

#[test]
fn failure_message_prefers_server_detail() {
    let err = ApiError::Status { status: 400, detail: Some("Strava account not linked".to_owned()) };
    assert_eq!(sync_failure_message(&err), "Strava account not linked");
}

#[test]
fn failure_message_falls_back_without_detail() {
    assert_eq!(sync_failure_message(&ApiError::Status { status: 500, detail: None }), SYNC_FALLBACK_MESSAGE);
    assert_eq!(sync_failure_message(&ApiError::Transport("offline".to_owned())), SYNC_FALLBACK_MESSAGE);
}

#[test]
fn notice_from_result_classifies_outcome() {
    let ok = SyncNotice::from_result(&Ok(StravaSyncResult { imported: 0, updated: 0 }));
    let err = SyncNotice::from_result(&Err(ApiError::Unavailable));
    assert!(!ok.is_failure());
    assert_eq!(ok.text(), "0 activities imported, 0 updated.");
    assert!(err.is_failure());
    assert_eq!(err.text(), SYNC_FALLBACK_MESSAGE);
}
