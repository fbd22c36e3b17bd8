//! Host Dialogs
//!
//! Blocking browser prompts used before destructive actions.

/// Ask the user to confirm; a host error counts as "no"
pub fn confirm(message: &str) -> bool {
    match leptos::prelude::window().confirm_with_message(message) {
        Ok(answer) => answer,
        Err(e) => {
            log::warn!("confirm dialog failed: {:?}", e);
            false
        }
    }
}
