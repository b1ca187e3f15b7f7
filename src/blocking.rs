//! Blocking adapter over the async client.
//!
//! Each call drives the async implementation to completion on a private
//! current-thread runtime. Do not use it from inside an async context.

use std::fmt;
use std::future::Future;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::runtime::{Builder, Runtime};

use crate::{
    pagination::{BackwardPaginated, Page, Paginated},
    transport::HttpResponse,
    Credentials, ErrorResult, Result, RetryConfig, SpotifyError, TransportError,
};

/// Synchronous counterpart of [`crate::SpotifyWebClient`].
pub struct SpotifyWebClient {
    inner: crate::SpotifyWebClient,
    runtime: Runtime,
}

impl fmt::Debug for SpotifyWebClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("blocking::SpotifyWebClient")
            .field("inner", &self.inner)
            .finish()
    }
}

impl SpotifyWebClient {
    /// Creates a blocking client that sends `Authorization: Bearer <access_token>`.
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        Self::from_async(crate::SpotifyWebClient::new(access_token))
    }

    /// Wraps an already configured async client.
    ///
    /// Credentials and retry configuration stay shared with `client`.
    pub fn from_async(client: crate::SpotifyWebClient) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|err| {
                SpotifyError::Transport(TransportError::with_source(
                    "failed to start blocking runtime",
                    err,
                ))
            })?;
        Ok(Self {
            inner: client,
            runtime,
        })
    }

    /// The async client driven by this adapter.
    pub fn inner(&self) -> &crate::SpotifyWebClient {
        &self.inner
    }

    /// Runs any async operation of the wrapped client to completion.
    ///
    /// ```no_run
    /// # fn demo() -> spotify_web_http::Result<()> {
    /// let spotify = spotify_web_http::blocking::SpotifyWebClient::new("token")?;
    /// let album = spotify.call(|client| client.get_album("4aawyAB9vmqN3uQ7FjRGTy", ""))?;
    /// println!("{}", album.name);
    /// # Ok(())
    /// # }
    /// ```
    pub fn call<'a, F, Fut, T>(&'a self, operation: F) -> T
    where
        F: FnOnce(&'a crate::SpotifyWebClient) -> Fut,
        Fut: Future<Output = T>,
    {
        self.runtime.block_on(operation(&self.inner))
    }

    pub fn credentials(&self) -> Credentials {
        self.inner.credentials()
    }

    pub fn set_credentials(&self, credentials: Credentials) {
        self.inner.set_credentials(credentials);
    }

    pub fn set_access_token(&self, token_type: impl Into<String>, access_token: impl Into<String>) {
        self.inner.set_access_token(token_type, access_token);
    }

    pub fn set_use_auth(&self, use_auth: bool) {
        self.inner.set_use_auth(use_auth);
    }

    pub fn retry_config(&self) -> RetryConfig {
        self.inner.retry_config()
    }

    pub fn set_retry_config(&self, config: RetryConfig) {
        self.inner.set_retry_config(config);
    }

    /// See [`crate::SpotifyWebClient::execute_raw`].
    pub fn execute_raw(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<HttpResponse> {
        self.call(|client| client.execute_raw(method, url, body))
    }

    /// See [`crate::SpotifyWebClient::execute`].
    pub fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<T> {
        self.call(|client| client.execute(method, url, body))
    }

    /// See [`crate::SpotifyWebClient::execute_ack`].
    pub fn execute_ack(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<ErrorResult> {
        self.call(|client| client.execute_ack(method, url, body))
    }

    pub fn download<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.call(|client| client.download(url))
    }

    pub fn upload<T: DeserializeOwned>(&self, url: &str, body: &Value, method: Method) -> Result<T> {
        self.call(|client| client.upload(url, body, method))
    }

    pub fn next_page<P>(&self, page: &P) -> Result<Option<P>>
    where
        P: Paginated + DeserializeOwned,
    {
        self.call(|client| client.next_page(page))
    }

    pub fn next_page_as<TOut, P>(&self, page: &P) -> Result<Option<TOut>>
    where
        TOut: DeserializeOwned,
        P: Paginated + ?Sized,
    {
        self.call(|client| client.next_page_as::<TOut, P>(page))
    }

    pub fn previous_page<T>(&self, page: &Page<T>) -> Result<Option<Page<T>>>
    where
        T: DeserializeOwned,
    {
        self.call(|client| client.previous_page(page))
    }

    pub fn previous_page_as<TOut, P>(&self, page: &P) -> Result<Option<TOut>>
    where
        TOut: DeserializeOwned,
        P: BackwardPaginated + ?Sized,
    {
        self.call(|client| client.previous_page_as::<TOut, P>(page))
    }
}
