//! Shared context for backend calls: base endpoint, authentication state,
//! and the login-prompt channel.

use parking_lot::RwLock;
use url::Url;

use crate::error::Result;
use crate::http::LoginNotifier;

/// Session-wide authentication state, read by the dispatcher on every call.
///
/// `live` distinguishes the two modes the server supports: a server-issued
/// session token ("live"), or a client-supplied username header ("local").
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    /// Username of the acting user, if signed in.
    pub username: Option<String>,
    /// Whether the session is token-backed rather than header-backed.
    pub live: bool,
}

impl AuthState {
    /// The username to send as `AV-User`, if the current mode calls for it.
    /// Live sessions never send the header.
    pub(crate) fn local_username(&self) -> Option<&str> {
        if self.live {
            None
        } else {
            self.username.as_deref()
        }
    }
}

/// Shared context for backend calls.
///
/// Replaces the process-wide singleton of earlier designs with an explicit
/// object: construct one, hand it to [`Backend`](crate::http::Backend), and
/// mutate the auth state from the login/logout flows. The dispatcher only
/// ever reads it, so mutation is safe from any context.
pub struct Environment {
    endpoint: Url,
    auth: RwLock<AuthState>,
    login: LoginNotifier,
}

impl Environment {
    /// Create an environment for the given base endpoint.
    ///
    /// The endpoint is parsed once here; URL building at dispatch time is
    /// infallible afterwards. A trailing slash is dropped so resource paths
    /// join predictably.
    pub fn new(endpoint: impl AsRef<str>, login: LoginNotifier) -> Result<Self> {
        let endpoint = Url::parse(endpoint.as_ref().trim_end_matches('/'))?;
        Ok(Self {
            endpoint,
            auth: RwLock::new(AuthState::default()),
            login,
        })
    }

    /// The configured base endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Snapshot the current authentication state.
    pub fn auth(&self) -> AuthState {
        self.auth.read().clone()
    }

    /// Enter local mode: the username travels in the `AV-User` header.
    pub fn sign_in_local(&self, username: impl Into<String>) {
        let mut auth = self.auth.write();
        auth.username = Some(username.into());
        auth.live = false;
    }

    /// Enter live mode: the server validates a session token, so no
    /// username header is sent.
    pub fn sign_in_live(&self, username: impl Into<String>) {
        let mut auth = self.auth.write();
        auth.username = Some(username.into());
        auth.live = true;
    }

    /// Clear the session.
    pub fn sign_out(&self) {
        *self.auth.write() = AuthState::default();
    }

    pub(crate) fn login(&self) -> &LoginNotifier {
        &self.login
    }
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("endpoint", &self.endpoint.as_str())
            .field("auth", &*self.auth.read())
            .finish()
    }
}
