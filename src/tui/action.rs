//! Actions returned by screen event handlers.

use crate::model::ProjectRecord;

use super::app::Screen;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to update global state and navigate between
/// screens.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Navigate to the given screen.
    Navigate(Screen),
    /// Check the supplied credentials against the configured identity.
    Authenticate { username: String, password: String },
    /// Leave the authenticated session; form state is kept.
    Logout,
    /// Submit a completed record to the remote table.
    Submit(ProjectRecord),
    /// Clear every form field and the whole province selection.
    ResetForm,
    /// Quit the application.
    Quit,
}
