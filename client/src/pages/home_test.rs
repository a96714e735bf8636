use super::*;

fn brief_with_id(id: i64) -> Brief {
    Brief {
        id,
        title: "T".to_owned(),
        summary: String::new(),
        key_points: Vec::new(),
        conflicting_claims: Vec::new(),
        verify_checklist: Vec::new(),
        topic_tags: Vec::new(),
        created_at: "2026-10-01T00:00:00".to_owned(),
        sources: Vec::new(),
    }
}

// =============================================================
// prepare_submission
// =============================================================

#[test]
fn prepare_submission_returns_trimmed_urls() {
    assert_eq!(
        prepare_submission(" https://a.test/1 \n\nhttps://b.test/2\n"),
        Ok(vec!["https://a.test/1".to_owned(), "https://b.test/2".to_owned()])
    );
}

#[test]
fn prepare_submission_rejects_blank_input() {
    assert_eq!(prepare_submission("  \n "), Err(UrlValidationError::Empty));
}

#[test]
fn prepare_submission_rejects_invalid_entries() {
    let err = prepare_submission("https://ok.test\nnope").unwrap_err();
    assert_eq!(err.to_string(), "Invalid URL:\nnope");
}

// =============================================================
// submission_outcome
// =============================================================

#[test]
fn successful_create_navigates_to_new_brief() {
    assert_eq!(
        submission_outcome(Ok(brief_with_id(42))),
        SubmitOutcome::Navigate("/brief/42".to_owned())
    );
}

#[test]
fn failed_create_stays_with_server_message() {
    let err = ApiError::from_response(502, r#"{"detail":"Could not fetch any of the provided URLs."}"#);
    assert_eq!(
        submission_outcome(Err(err)),
        SubmitOutcome::Failed("Could not fetch any of the provided URLs.".to_owned())
    );
}

#[test]
fn failed_create_falls_back_to_generic_message() {
    assert_eq!(
        submission_outcome(Err(ApiError::from_response(500, ""))),
        SubmitOutcome::Failed("Request failed with status code 500".to_owned())
    );
}

#[test]
fn progress_dot_uses_spinner_while_loading() {
    assert_eq!(dot_class(ProgressStatus::Loading), "spinner");
    assert_eq!(dot_class(ProgressStatus::Done), "status-dot dot-ok");
}
