//! Server-only helpers for server functions.

use leptos::prelude::*;

use crate::app::AppState;

/// Fetch the [`AppState`] provided by the axum router.
pub fn app_state() -> Result<AppState, ServerFnError> {
    use_context::<AppState>().ok_or_else(|| ServerFnError::new("Missing AppState"))
}
