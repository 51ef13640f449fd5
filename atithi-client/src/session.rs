//! Session state
//!
//! Process-wide authentication bookkeeping: set on login response, cleared
//! on 401 or explicit logout. When a 401 clears the session, the path the
//! operator was trying to reach is recorded so the login flow can return
//! there afterwards.

use shared::UserInfo;

/// Session data held in memory during the client's lifecycle
#[derive(Debug, Clone, Default)]
pub struct SessionData {
    /// Bearer token for API authentication
    pub token: Option<String>,
    /// Current user information after login
    pub user: Option<UserInfo>,
    /// Path to return to after the next successful login
    pub redirect_to: Option<String>,
}

impl SessionData {
    /// Creates a new empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the token and user info after successful login
    pub fn set_login(&mut self, token: String, user: UserInfo) {
        self.token = Some(token);
        self.user = Some(user);
    }

    /// Clears the session data on logout
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
        self.redirect_to = None;
    }

    /// Clears the session on a 401, remembering where the operator was headed
    pub fn clear_with_redirect(&mut self, path: impl Into<String>) {
        self.token = None;
        self.user = None;
        self.redirect_to = Some(path.into());
    }

    /// Takes the recorded redirect path, consuming it
    pub fn take_redirect(&mut self) -> Option<String> {
        self.redirect_to.take()
    }

    /// Whether the session holds a token
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Returns the token if available
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the current user info if available
    pub fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }
}
