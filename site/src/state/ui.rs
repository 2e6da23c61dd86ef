//! Local UI chrome state (theme, header sign-out feedback).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the session model so the
//! header can show pending and failure feedback for sign-out without
//! inventing session statuses for it.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared by the header on every page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    /// A confirmed sign-out is in flight.
    pub signing_out: bool,
    /// Banner text for the last failed header action.
    pub notice: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self { dark_mode: true, signing_out: false, notice: None }
    }
}

impl UiState {
    pub fn begin_sign_out(&mut self) {
        self.signing_out = true;
        self.notice = None;
    }

    /// Record the end of a sign-out attempt.
    pub fn finish_sign_out(&mut self, error: Option<String>) {
        self.signing_out = false;
        self.notice = error.map(|message| format!("Sign out failed: {message}"));
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
