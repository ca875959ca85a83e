//! The unauthorized-handler channel.
//!
//! A 401 anywhere in the dispatch layer becomes a [`LoginPrompt`] on this
//! channel; the application shell subscribes once and presents the re-login
//! flow. Concurrent calls may each observe a 401, so the shell owns
//! de-duplication. This layer's contract is only "signal, possibly
//! redundantly".

use tokio::sync::mpsc;

/// Signal that the backend needs the user to authenticate again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoginPrompt;

/// Sending half of the login-prompt channel, held by the
/// [`Environment`](crate::Environment).
#[derive(Clone, Debug)]
pub struct LoginNotifier {
    tx: mpsc::UnboundedSender<LoginPrompt>,
}

/// Receiving half of the login-prompt channel, owned by the application
/// shell.
pub type LoginPrompts = mpsc::UnboundedReceiver<LoginPrompt>;

/// Create the login-prompt channel.
pub fn login_channel() -> (LoginNotifier, LoginPrompts) {
    let (tx, rx) = mpsc::unbounded_channel();
    (LoginNotifier { tx }, rx)
}

impl LoginNotifier {
    /// Emit one prompt. Never blocks, so it is safe from whatever context a
    /// network completion arrives on. A dropped receiver is logged and
    /// ignored; a shell that stopped listening has nothing to present.
    pub fn notify(&self) {
        if self.tx.send(LoginPrompt).is_err() {
            tracing::warn!(
                target: "aidvine_backend::http",
                "login prompt dropped: no subscriber"
            );
        }
    }
}
