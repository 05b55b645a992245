//! Side effects requested by the event handler.
//!
//! The handler never touches the clipboard or renders notifications itself. It
//! returns a `Vec<Action>` and the presentation layer executes them in order.

/// Commands for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Places `text` on the system clipboard.
    CopyToClipboard(String),

    /// Shows a transient notification.
    ShowToast {
        title: String,
        /// Secondary line, e.g. the install command.
        message: Option<String>,
    },
}

impl Action {
    pub(crate) fn toast(title: impl Into<String>, message: Option<String>) -> Self {
        Self::ShowToast {
            title: title.into(),
            message,
        }
    }
}
