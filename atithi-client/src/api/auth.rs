//! Auth API

use crate::cache::CacheTag;
use crate::error::ClientResult;
use crate::gateway::Gateway;
use http::Method;
use shared::{ApiResponse, LoginRequest, LoginResponse, SidebarLink, UserInfo};

impl Gateway {
    /// Login with username and password
    ///
    /// On success the token is installed on the HTTP client and the session
    /// is populated.
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<UserInfo> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let resp: ApiResponse<LoginResponse> = self
            .http
            .send_json(Method::POST, "/api/auth/login", &request)
            .await?;
        // The token is installed only after the envelope reports success;
        // a failed-login envelope may still carry a data payload.
        let login = Self::expect_data(resp)?;

        self.http.set_token(login.token.clone());
        {
            let mut session = self.session.write().expect("session lock poisoned");
            session.set_login(login.token, login.user.clone());
        }
        self.cache.invalidate(CacheTag::Sidebar);
        tracing::info!(username = %login.user.username, "logged in");

        Ok(login.user)
    }

    /// Get current user information
    pub async fn me(&self) -> ClientResult<UserInfo> {
        let resp: ApiResponse<UserInfo> = self.http.get("/api/auth/me").await.inspect_err(|e| {
            self.note_failure("/api/auth/me", e);
        })?;
        Self::expect_data(resp)
    }

    /// Role-derived sidebar links for the current user
    ///
    /// Cached until login/logout; feeds the permission resolver.
    pub async fn sidebar_links(&self) -> ClientResult<Vec<SidebarLink>> {
        self.query(CacheTag::Sidebar, "me", "/api/auth/sidebar").await
    }

    /// Logout, clearing the session and the entire cache
    pub async fn logout(&self) -> ClientResult<()> {
        let result: ClientResult<ApiResponse<serde_json::Value>> =
            self.http.send_empty(Method::POST, "/api/auth/logout").await;

        // Local state is cleared even if the server call failed.
        self.http.clear_token();
        self.session.write().expect("session lock poisoned").clear();
        self.cache.clear();
        tracing::info!("logged out");

        result.map(|_| ())
    }
}
