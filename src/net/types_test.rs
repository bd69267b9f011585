use super::*;

// =============================================================
// User
// =============================================================

#[test]
fn user_decodes_without_name() {
    let user: User = serde_json::from_str(r#"{"id":1,"email":"a@b.com"}"#).unwrap();
    assert_eq!(user, User { id: 1, email: "a@b.com".to_owned(), name: None });
}

#[test]
fn user_serializes_without_null_name() {
    let user = User { id: 1, email: "a@b.com".to_owned(), name: None };
    assert_eq!(serde_json::to_string(&user).unwrap(), r#"{"id":1,"email":"a@b.com"}"#);
}

#[test]
fn display_name_prefers_name_then_email() {
    let named = User { id: 1, email: "a@b.com".to_owned(), name: Some("Ana".to_owned()) };
    let blank = User { id: 2, email: "c@d.com".to_owned(), name: Some("  ".to_owned()) };
    let anonymous = User { id: 3, email: "e@f.com".to_owned(), name: None };
    assert_eq!(named.display_name(), "Ana");
    assert_eq!(blank.display_name(), "c@d.com");
    assert_eq!(anonymous.display_name(), "e@f.com");
}

#[test]
fn auth_response_decodes_access_token_and_user() {
    let resp: AuthResponse =
        serde_json::from_str(r#"{"access_token":"abc","user":{"id":1,"email":"a@b.com"}}"#).unwrap();
    assert_eq!(resp.access_token, "abc");
    assert_eq!(resp.user.id, 1);
}

// =============================================================
// TrainingPlan
// =============================================================

#[test]
fn training_plan_decodes_full_payload() {
    let json = r#"{
        "id": 7,
        "name": "Marathon",
        "goal": "sub 4h",
        "start_date": "2026-01-05",
        "end_date": "2026-04-26",
        "sessions": [{"id": 1, "date": "2026-01-05", "type": "course_a_pied", "exercise": "10k easy"}]
    }"#;
    let plan: TrainingPlan = serde_json::from_str(json).unwrap();
    assert_eq!(plan.goal.as_deref(), Some("sub 4h"));
    assert_eq!(plan.sessions.len(), 1);
    assert_eq!(plan.sessions[0].kind.as_deref(), Some("course_a_pied"));
    assert!(!plan.sessions[0].completed);
    assert_eq!(plan.href(), "/plans/7");
}

#[test]
fn training_plan_tolerates_missing_optional_fields() {
    let plan: TrainingPlan = serde_json::from_str(r#"{"id":3,"name":"Base","goal":null}"#).unwrap();
    assert_eq!(plan.goal, None);
    assert_eq!(plan.start_date, None);
    assert!(plan.sessions.is_empty());
}

// =============================================================
// PlanRequest
// =============================================================

#[test]
fn manual_plan_request_targets_plans() {
    let req = PlanRequest::Manual { name: "10k".to_owned(), goal: "PB".to_owned() };
    assert_eq!(req.endpoint(), "/plans");
    assert_eq!(req.body(), serde_json::json!({ "name": "10k", "goal": "PB" }));
}

#[test]
fn generate_plan_request_targets_generate() {
    let req = PlanRequest::Generate { prompt: "first marathon".to_owned() };
    assert_eq!(req.endpoint(), "/plans/generate");
    assert_eq!(req.body(), serde_json::json!({ "prompt": "first marathon" }));
}

#[test]
fn strava_sync_result_defaults_missing_counts() {
    let result: StravaSyncResult = serde_json::from_str(r#"{"imported":4}"#).unwrap();
    assert_eq!(result, StravaSyncResult { imported: 4, updated: 0 });
}
