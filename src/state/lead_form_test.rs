use super::*;

use crate::net::types::Genre;
use crate::util::validation::{NAME_TOO_SHORT, PHONE_FORMAT};

fn draft(name: &str, phone: &str, style: &str) -> LeadDraft {
    LeadDraft {
        name: name.to_owned(),
        email: "al@example.com".to_owned(),
        phone: phone.to_owned(),
        style: style.to_owned(),
        ..LeadDraft::default()
    }
}

fn valid() -> LeadDraft {
    draft("Al", "+79991234567", "pop")
}

// =============================================================
// defaults
// =============================================================

#[test]
fn default_is_idle_and_enabled() {
    let state = LeadFormState::default();
    assert_eq!(state.phase, FormPhase::Idle);
    assert!(state.submit_enabled());
    assert!(!state.is_loading());
    assert_eq!(state.banner(), None);
}

// =============================================================
// begin_submit
// =============================================================

#[test]
fn short_name_never_produces_a_payload() {
    let mut state = LeadFormState::default();
    for name in ["", "A", " A ", "  "] {
        assert_eq!(state.begin_submit(&draft(name, "+79991234567", "pop")), SubmitDecision::Invalid);
        assert_eq!(state.errors.name, Some(NAME_TOO_SHORT));
    }
    assert_eq!(state.phase, FormPhase::Idle);
    assert_eq!(state.banner(), Some(Banner::Invalid));
}

#[test]
fn bad_phone_blocks_even_when_everything_else_is_valid() {
    let mut state = LeadFormState::default();
    assert_eq!(state.begin_submit(&draft("Alice", "12345", "rock")), SubmitDecision::Invalid);
    assert_eq!(state.errors.phone, Some(PHONE_FORMAT));
    assert_eq!(state.errors.name, None);
}

#[test]
fn resubmit_clears_previous_errors() {
    let mut state = LeadFormState::default();
    state.begin_submit(&draft("A", "12345", ""));
    assert!(!state.errors.is_empty());
    assert!(matches!(state.begin_submit(&valid()), SubmitDecision::Send(_)));
    assert!(state.errors.is_empty());
}

#[test]
fn valid_submit_enters_submitting_and_disables_control() {
    let mut state = LeadFormState::default();
    let SubmitDecision::Send(lead) = state.begin_submit(&valid()) else {
        panic!("expected a payload");
    };
    assert_eq!(lead.style, Genre::Pop);
    assert_eq!(state.phase, FormPhase::Submitting);
    assert!(state.is_loading());
    assert!(!state.submit_enabled());
    assert_eq!(state.banner(), None);
}

#[test]
fn second_submit_while_in_flight_is_ignored() {
    let mut state = LeadFormState::default();
    assert!(matches!(state.begin_submit(&valid()), SubmitDecision::Send(_)));
    assert_eq!(state.begin_submit(&valid()), SubmitDecision::Busy);
    assert_eq!(state.begin_submit(&draft("A", "1", "")), SubmitDecision::Busy);
    assert!(state.errors.is_empty());
}

#[test]
fn burst_of_submits_hands_out_one_payload_per_round_trip() {
    let mut state = LeadFormState::default();
    let sends = |state: &mut LeadFormState| {
        (0..5)
            .map(|_| state.begin_submit(&valid()))
            .filter(|d| matches!(d, SubmitDecision::Send(_)))
            .count()
    };
    assert_eq!(sends(&mut state), 1);
    state.finish(Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(sends(&mut state), 1);
    let Some(Finished::Succeeded { seq }) = state.finish(Ok(())) else {
        panic!("expected success");
    };
    assert_eq!(sends(&mut state), 0);
    state.settle(seq);
    assert_eq!(sends(&mut state), 1);
}

// =============================================================
// finish / settle
// =============================================================

#[test]
fn success_scenario_disables_until_cooldown() {
    let mut state = LeadFormState::default();
    let SubmitDecision::Send(lead) = state.begin_submit(&valid()) else {
        panic!("expected a payload");
    };
    let body = serde_json::to_value(&lead).unwrap();
    assert_eq!(body["style"], "pop");

    let Some(Finished::Succeeded { seq }) = state.finish(Ok(())) else {
        panic!("expected success");
    };
    assert_eq!(state.phase, FormPhase::Success);
    assert_eq!(state.banner(), Some(Banner::Success));
    assert!(!state.submit_enabled());
    assert_eq!(state.begin_submit(&valid()), SubmitDecision::Busy);

    assert!(state.settle(seq));
    assert_eq!(state.phase, FormPhase::Idle);
    assert!(state.submit_enabled());
    assert_eq!(state.banner(), None);
}

#[test]
fn edits_do_not_cut_the_success_cooldown_short() {
    let mut state = LeadFormState::default();
    state.begin_submit(&valid());
    state.finish(Ok(()));
    state.note_edit();
    assert_eq!(state.phase, FormPhase::Success);
    assert!(!state.submit_enabled());
}

#[test]
fn failure_shows_server_detail_and_reenables_immediately() {
    let mut state = LeadFormState::default();
    state.begin_submit(&valid());
    let finished = state.finish(Err(ApiError::Status { status: 409, detail: Some("Дубликат".to_owned()) }));
    assert!(matches!(finished, Some(Finished::Failed { .. })));
    assert_eq!(state.phase, FormPhase::Error("Дубликат".to_owned()));
    assert!(state.submit_enabled());
    assert_eq!(state.banner().map(|b| b.text()), Some("✗ Дубликат".to_owned()));
}

#[test]
fn transport_failure_uses_generic_message() {
    let mut state = LeadFormState::default();
    state.begin_submit(&valid());
    state.finish(Err(ApiError::Transport("Failed to fetch".to_owned())));
    assert_eq!(
        state.banner(),
        Some(Banner::Error(crate::net::error::SUBMIT_TRANSPORT_FALLBACK.to_owned()))
    );
}

#[test]
fn error_clears_on_edit_or_window() {
    let mut state = LeadFormState::default();
    state.begin_submit(&valid());
    let Some(Finished::Failed { seq }) = state.finish(Err(ApiError::Status { status: 500, detail: None })) else {
        panic!("expected failure");
    };
    state.note_edit();
    assert_eq!(state.phase, FormPhase::Idle);
    assert!(!state.settle(seq), "window timer is stale after the edit");
}

#[test]
fn retry_after_error_sends_again() {
    let mut state = LeadFormState::default();
    state.begin_submit(&valid());
    state.finish(Err(ApiError::Transport("offline".to_owned())));
    assert!(matches!(state.begin_submit(&valid()), SubmitDecision::Send(_)));
}

#[test]
fn stale_timer_does_not_clobber_newer_phase() {
    let mut state = LeadFormState::default();
    state.begin_submit(&valid());
    let Some(Finished::Failed { seq: stale }) = state.finish(Err(ApiError::Transport("x".to_owned()))) else {
        panic!("expected failure");
    };
    state.begin_submit(&valid());
    state.finish(Ok(()));
    assert!(!state.settle(stale));
    assert_eq!(state.phase, FormPhase::Success);
}

#[test]
fn finish_without_request_is_ignored() {
    let mut state = LeadFormState::default();
    assert_eq!(state.finish(Ok(())), None);
    assert_eq!(state.phase, FormPhase::Idle);
}

// =============================================================
// Banner
// =============================================================

#[test]
fn banner_classes_and_text() {
    assert_eq!(Banner::Success.class(), "form-status success");
    assert_eq!(Banner::Invalid.class(), "form-status error");
    assert!(Banner::Success.text().starts_with('✓'));
    assert!(Banner::Invalid.text().contains(FORM_HAS_ERRORS));
}
