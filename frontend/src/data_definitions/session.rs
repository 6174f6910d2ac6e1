use dioxus::prelude::*;

/// Who is signed in right now, provided as context from the app root.
///
/// The backend keeps no session state, so the signed-in email is the whole
/// session: pages pass it along with their data calls.
#[derive(Debug, Clone, PartialEq, Copy)]
pub struct SessionState {
    pub current_user: ReadSignal<Option<String>>,
    pub login: Callback<String>,
    pub logout: Callback<()>,
}

impl SessionState {
    pub fn is_logged_in(&self) -> bool {
        self.current_user.read().is_some()
    }

    /// The signed-in email, or an empty string when nobody is signed in.
    pub fn user_email(&self) -> String {
        self.current_user.read().clone().unwrap_or_default()
    }
}
