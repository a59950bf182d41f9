use super::*;

#[test]
fn status_with_detail_uses_server_text_verbatim() {
    let err = ApiError::Status { status: 422, detail: Some("Телефон уже зарегистрирован".to_owned()) };
    assert_eq!(err.user_message(), "Телефон уже зарегистрирован");
}

#[test]
fn status_without_detail_uses_rejected_fallback() {
    let err = ApiError::Status { status: 500, detail: None };
    assert_eq!(err.user_message(), SUBMIT_REJECTED_FALLBACK);
}

#[test]
fn transport_and_decode_use_connection_fallback() {
    assert_eq!(ApiError::Transport("Failed to fetch".to_owned()).user_message(), SUBMIT_TRANSPORT_FALLBACK);
    assert_eq!(ApiError::Decode("expected value".to_owned()).user_message(), SUBMIT_TRANSPORT_FALLBACK);
}

#[test]
fn display_formats_for_logs() {
    assert_eq!(ApiError::Status { status: 503, detail: None }.to_string(), "server responded 503");
    assert_eq!(ApiError::Transport("offline".to_owned()).to_string(), "request failed: offline");
}
