//! Error handling utilities
//!
//! Separates user-actionable failures (configuration the user can fix) from
//! environment failures, so the entry point logs each with the right detail.

/// Trait for errors that can distinguish user-actionable and system errors.
///
/// When `is_user_actionable()` returns `true`, `user_message()` must return
/// `Some(message)` with a specific, correctable message; otherwise `None`.
pub trait ContextualError: std::error::Error {
    /// Returns true if this error carries a specific, user-actionable message
    /// that should be displayed directly to the user
    fn is_user_actionable(&self) -> bool;

    /// The specific user message, present iff the error is user-actionable
    fn user_message(&self) -> Option<String>;
}

/// Log an error with detail appropriate to its specificity.
///
/// User-actionable errors log their own message; system errors log the
/// operation context. Full detail is always available at debug level.
pub fn log_error_with_context<E: ContextualError>(error: &E, operation_context: &str) {
    match error.user_message() {
        Some(user_msg) => log::error!("FATAL: {}", user_msg),
        None => log::error!("FATAL: {}", operation_context),
    }
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}
