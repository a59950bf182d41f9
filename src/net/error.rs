//! Error type for calls to the landing backend.
//!
//! ERROR HANDLING
//! ==============
//! Every failure of a backend call collapses into [`ApiError`]. The lead form
//! only ever shows [`ApiError::user_message`]; the stats counter only logs the
//! `Display` form. Nothing propagates past the component that made the call.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Banner text when the backend rejects a lead without a usable `detail`.
pub const SUBMIT_REJECTED_FALLBACK: &str = "Ошибка при отправке заявки";
/// Banner text when the request never produced a readable response.
pub const SUBMIT_TRANSPORT_FALLBACK: &str = "Ошибка соединения. Попробуйте позже.";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be built or the connection failed.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("server responded {status}")]
    Status { status: u16, detail: Option<String> },
    /// A 2xx response whose body was not the expected JSON.
    #[error("unreadable response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text for the form's error banner.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { detail: Some(detail), .. } => detail.clone(),
            Self::Status { detail: None, .. } => SUBMIT_REJECTED_FALLBACK.to_owned(),
            Self::Transport(_) | Self::Decode(_) => SUBMIT_TRANSPORT_FALLBACK.to_owned(),
        }
    }
}
