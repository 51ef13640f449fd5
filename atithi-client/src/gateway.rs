//! Remote data gateway
//!
//! Combines the HTTP client, the tag cache and the session. Reads go through
//! the cache; writes invalidate the tags they affect so dependent queries
//! refetch. A 401 anywhere clears the session and records the attempted path
//! as the post-login redirect.

use crate::cache::{CacheTag, TagCache};
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;
use crate::session::SessionData;
use http::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{ApiResponse, ListQuery, UserInfo};
use std::sync::RwLock;

/// Typed gateway to the AtithiFlow API
#[derive(Debug)]
pub struct Gateway {
    pub(crate) http: HttpClient,
    pub(crate) cache: TagCache,
    pub(crate) session: RwLock<SessionData>,
}

impl Gateway {
    /// Create a gateway from configuration
    pub fn new(config: ClientConfig) -> Self {
        let mut session = SessionData::new();
        session.token = config.token.clone();
        Self {
            http: HttpClient::new(&config),
            cache: TagCache::new(),
            session: RwLock::new(session),
        }
    }

    /// Whether the session holds a token
    pub fn is_authenticated(&self) -> bool {
        self.session
            .read()
            .expect("session lock poisoned")
            .is_authenticated()
    }

    /// Current user info, if logged in
    pub fn current_user(&self) -> Option<UserInfo> {
        self.session
            .read()
            .expect("session lock poisoned")
            .user()
            .cloned()
    }

    /// Takes the post-login redirect recorded by the last 401, if any
    pub fn take_redirect(&self) -> Option<String> {
        self.session
            .write()
            .expect("session lock poisoned")
            .take_redirect()
    }

    /// Access the tag cache (for tests and manual invalidation)
    pub fn cache(&self) -> &TagCache {
        &self.cache
    }

    // ========== internal plumbing ==========

    /// Unwrap the API envelope, requiring a data payload
    pub(crate) fn expect_data<T>(resp: ApiResponse<T>) -> ClientResult<T> {
        if !resp.is_success() {
            return Err(ClientError::Server(resp.message));
        }
        resp.data
            .ok_or_else(|| ClientError::InvalidResponse("Missing response data".to_string()))
    }

    /// On 401, clear the session and remember where the operator was headed
    pub(crate) fn note_failure(&self, path: &str, err: &ClientError) {
        if matches!(err, ClientError::Unauthorized) {
            tracing::info!(path = %path, "session expired, clearing");
            self.http.clear_token();
            self.session
                .write()
                .expect("session lock poisoned")
                .clear_with_redirect(path);
        }
    }

    /// Cached GET: return the tagged entry if present, otherwise fetch and store
    pub(crate) async fn query<T: DeserializeOwned>(
        &self,
        tag: CacheTag,
        key: &str,
        path: &str,
    ) -> ClientResult<T> {
        if let Some(value) = self.cache.get(tag, key) {
            tracing::debug!(?tag, key = %key, "cache hit");
            return serde_json::from_value(value).map_err(Into::into);
        }

        tracing::debug!(?tag, key = %key, path = %path, "cache miss, fetching");
        let resp: ApiResponse<Value> = self.http.get(path).await.inspect_err(|e| {
            self.note_failure(path, e);
        })?;
        let data = Self::expect_data(resp)?;
        self.cache.insert(tag, key, data.clone());
        serde_json::from_value(data).map_err(Into::into)
    }

    /// Cached list GET parameterized by a [`ListQuery`]
    pub(crate) async fn query_list<T: DeserializeOwned>(
        &self,
        tag: CacheTag,
        path: &str,
        query: &ListQuery,
    ) -> ClientResult<T> {
        let key = query.cache_key();
        if let Some(value) = self.cache.get(tag, &key) {
            tracing::debug!(?tag, key = %key, "cache hit");
            return serde_json::from_value(value).map_err(Into::into);
        }

        tracing::debug!(?tag, key = %key, path = %path, "cache miss, fetching");
        let resp: ApiResponse<Value> =
            self.http.get_with_query(path, query).await.inspect_err(|e| {
                self.note_failure(path, e);
            })?;
        let data = Self::expect_data(resp)?;
        self.cache.insert(tag, key, data.clone());
        serde_json::from_value(data).map_err(Into::into)
    }

    /// Mutation with a JSON body; on success, invalidates the given tags
    pub(crate) async fn mutate<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        invalidates: &[CacheTag],
    ) -> ClientResult<T> {
        let resp: ApiResponse<T> =
            self.http.send_json(method, path, body).await.inspect_err(|e| {
                self.note_failure(path, e);
            })?;
        let data = Self::expect_data(resp)?;
        self.cache.invalidate_all(invalidates);
        Ok(data)
    }

    /// Mutation whose response carries no data payload
    pub(crate) async fn mutate_unit<B: serde::Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        invalidates: &[CacheTag],
    ) -> ClientResult<()> {
        let resp: ApiResponse<Value> =
            self.http.send_json(method, path, body).await.inspect_err(|e| {
                self.note_failure(path, e);
            })?;
        if !resp.is_success() {
            return Err(ClientError::Server(resp.message));
        }
        self.cache.invalidate_all(invalidates);
        Ok(())
    }

    /// Bodyless mutation (deletes); on success, invalidates the given tags
    pub(crate) async fn mutate_empty(
        &self,
        method: Method,
        path: &str,
        invalidates: &[CacheTag],
    ) -> ClientResult<()> {
        let resp: ApiResponse<Value> =
            self.http.send_empty(method, path).await.inspect_err(|e| {
                self.note_failure(path, e);
            })?;
        if !resp.is_success() {
            return Err(ClientError::Server(resp.message));
        }
        self.cache.invalidate_all(invalidates);
        Ok(())
    }
}
