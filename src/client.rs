use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use reqwest::{header, Method, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

use crate::{
    decode::{decode_body, decode_error_result},
    pagination::{BackwardPaginated, Page, Paginated},
    retry::{RetryDecision, RetryPolicy},
    transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport},
    ClientOptions, Credentials, ErrorResult, Result, RetryConfig, SpotifyError,
};

pub(crate) const JSON_CONTENT_TYPE: &str = "application/json";

/// Request body paired with its content type.
#[derive(Clone, Debug)]
pub(crate) struct Payload {
    pub content_type: &'static str,
    pub data: String,
}

impl Payload {
    pub(crate) fn json(value: &Value) -> Result<Self> {
        let data = serde_json::to_string(value)
            .map_err(|err| SpotifyError::InvalidRequest(format!("unserializable body: {err}")))?;
        Ok(Self {
            content_type: JSON_CONTENT_TYPE,
            data,
        })
    }
}

#[derive(Clone)]
/// HTTP client for the Spotify Web API.
///
/// Clones share credentials and retry configuration; a change made through
/// any clone is seen by every request built afterwards.
pub struct SpotifyWebClient {
    transport: Arc<dyn Transport>,
    custom_transport: bool,
    base_url: String,
    credentials: Arc<RwLock<Credentials>>,
    retry: Arc<RwLock<RetryConfig>>,
    cancel: Option<CancellationToken>,
}

impl fmt::Debug for SpotifyWebClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpotifyWebClient")
            .field("base_url", &self.base_url)
            .field("credentials", &*self.credentials.read())
            .field("retry", &*self.retry.read())
            .field("cancellable", &self.cancel.is_some())
            .finish()
    }
}

impl SpotifyWebClient {
    /// Creates a client that sends `Authorization: Bearer <access_token>`.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self::with_credentials(Credentials::bearer(access_token))
    }

    /// Creates a client with explicit credentials.
    pub fn with_credentials(credentials: Credentials) -> Self {
        let options = ClientOptions::default();
        Self {
            transport: Arc::new(ReqwestTransport::new(Duration::from_millis(
                options.timeout_ms,
            ))),
            custom_transport: false,
            base_url: options.base_url,
            credentials: Arc::new(RwLock::new(credentials)),
            retry: Arc::new(RwLock::new(options.retry)),
            cancel: None,
        }
    }

    /// Creates a client from environment variables.
    ///
    /// Reads:
    /// - `SPOTIFY_ACCESS_TOKEN`: access token issued by the accounts service
    /// - `SPOTIFY_TOKEN_TYPE`: token scheme, defaults to `Bearer`
    ///
    /// Returns an error if the token is missing or empty.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use spotify_web_http::SpotifyWebClient;
    ///
    /// let spotify = SpotifyWebClient::from_env().expect("missing SPOTIFY_ACCESS_TOKEN");
    /// ```
    pub fn from_env() -> std::result::Result<Self, String> {
        let token = std::env::var("SPOTIFY_ACCESS_TOKEN")
            .map_err(|_| "missing SPOTIFY_ACCESS_TOKEN environment variable".to_owned())?;
        if token.trim().is_empty() {
            return Err("SPOTIFY_ACCESS_TOKEN is set but empty".to_owned());
        }
        let token_type = std::env::var("SPOTIFY_TOKEN_TYPE")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| "Bearer".to_owned());

        Ok(Self::with_credentials(Credentials {
            token_type,
            access_token: token,
            use_auth: true,
        }))
    }

    /// Applies endpoint root, timeout and initial retry configuration.
    ///
    /// The timeout only affects the built-in transport; a transport set with
    /// [`SpotifyWebClient::with_transport`] is kept as is.
    ///
    /// The returned client gets its own retry configuration; clones made
    /// before this call keep theirs. Credentials stay shared.
    pub fn with_options(mut self, opts: ClientOptions) -> Self {
        if !self.custom_transport {
            self.transport = Arc::new(ReqwestTransport::new(Duration::from_millis(
                opts.timeout_ms,
            )));
        }
        self.base_url = opts.base_url;
        self.retry = Arc::new(RwLock::new(opts.retry));
        self
    }

    /// Replaces the HTTP layer.
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self.custom_transport = true;
        self
    }

    /// Returns a clone whose calls stop with [`SpotifyError::Cancelled`]
    /// once `token` fires.
    ///
    /// The token is checked while waiting on the network and while sleeping
    /// between retries. Configuration stays shared with `self`.
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            cancel: Some(token),
            ..self.clone()
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Snapshot of the current credentials.
    pub fn credentials(&self) -> Credentials {
        self.credentials.read().clone()
    }

    pub fn set_credentials(&self, credentials: Credentials) {
        *self.credentials.write() = credentials;
    }

    pub fn set_access_token(&self, token_type: impl Into<String>, access_token: impl Into<String>) {
        let mut credentials = self.credentials.write();
        credentials.token_type = token_type.into();
        credentials.access_token = access_token.into();
    }

    pub fn set_use_auth(&self, use_auth: bool) {
        self.credentials.write().use_auth = use_auth;
    }

    /// Snapshot of the current retry configuration.
    pub fn retry_config(&self) -> RetryConfig {
        self.retry.read().clone()
    }

    pub fn set_retry_config(&self, config: RetryConfig) {
        *self.retry.write() = config;
    }

    /// Edits the retry configuration in place.
    pub fn update_retry_config(&self, edit: impl FnOnce(&mut RetryConfig)) {
        edit(&mut self.retry.write());
    }

    /// Sends a request through the retry loop and returns the final response.
    ///
    /// Non-success statuses are returned as responses, not errors.
    pub async fn execute_raw(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<HttpResponse> {
        let payload = body.map(Payload::json).transpose()?;
        self.send_with_retry(method, url, payload).await
    }

    /// Sends a request and decodes a success body into `T`.
    ///
    /// A terminal failure becomes [`SpotifyError::Api`]. An empty success
    /// body is decoded as `null`, so `T = Option<_>` yields `None`.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<T> {
        let payload = body.map(Payload::json).transpose()?;
        self.fetch(method, url, payload).await
    }

    /// Sends a mutating request and returns its acknowledgement.
    ///
    /// Both success and terminal failure resolve to `Ok`; inspect
    /// [`ErrorResult::status`]. Only transport, decoding and cancellation
    /// problems are `Err`.
    pub async fn execute_ack(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<ErrorResult> {
        let payload = body.map(Payload::json).transpose()?;
        self.acknowledge(method, url, payload).await
    }

    /// GETs `url` (absolute or relative to the base URL) into `T`.
    pub async fn download<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.execute(Method::GET, url, None).await
    }

    /// Sends `body` to `url` with `method` and decodes the response into `T`.
    pub async fn upload<T: DeserializeOwned>(
        &self,
        url: &str,
        body: &Value,
        method: Method,
    ) -> Result<T> {
        self.execute(method, url, Some(body)).await
    }

    /// Follows the forward link of `page`.
    ///
    /// Returns `Ok(None)` without touching the network when there is no
    /// next page.
    pub async fn next_page<P>(&self, page: &P) -> Result<Option<P>>
    where
        P: Paginated + DeserializeOwned,
    {
        self.next_page_as::<P, P>(page).await
    }

    /// Follows the forward link of `page`, decoding into a different shape.
    ///
    /// Useful when the link points at a wrapped resource, e.g. the next
    /// slice of a search result comes back inside the search envelope.
    pub async fn next_page_as<TOut, P>(&self, page: &P) -> Result<Option<TOut>>
    where
        TOut: DeserializeOwned,
        P: Paginated + ?Sized,
    {
        match page.next_url() {
            Some(url) => self.download(url).await.map(Some),
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!("no next page to follow");
                Ok(None)
            }
        }
    }

    /// Follows the backward link of `page`.
    pub async fn previous_page<T>(&self, page: &Page<T>) -> Result<Option<Page<T>>>
    where
        T: DeserializeOwned,
    {
        self.previous_page_as::<Page<T>, Page<T>>(page).await
    }

    /// Follows the backward link of `page`, decoding into a different shape.
    pub async fn previous_page_as<TOut, P>(&self, page: &P) -> Result<Option<TOut>>
    where
        TOut: DeserializeOwned,
        P: BackwardPaginated + ?Sized,
    {
        match page.previous_url() {
            Some(url) => self.download(url).await.map(Some),
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!("no previous page to follow");
                Ok(None)
            }
        }
    }

    /// Appends `segments` to the base URL path, percent-encoding each one,
    /// then adds the non-empty params.
    pub(crate) fn endpoint_url<K: AsRef<str>>(
        &self,
        segments: &[&str],
        params: &[(K, String)],
    ) -> Result<String> {
        let invalid = |reason: String| {
            SpotifyError::InvalidRequest(format!("invalid base url '{}': {reason}", self.base_url))
        };
        let mut url = Url::parse(&self.base_url).map_err(|err| invalid(err.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| invalid("cannot carry a path".to_owned()))?
            .pop_if_empty()
            .extend(segments);
        {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in params.iter().filter(|(_, value)| !value.is_empty()) {
                pairs.append_pair(name.as_ref(), value);
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }
        Ok(url.into())
    }

    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        payload: Option<Payload>,
    ) -> Result<T> {
        let response = self.send_with_retry(method, url, payload).await?;
        if response.is_success() {
            decode_body(response.status, &response.body)
        } else {
            Err(SpotifyError::Api(decode_error_result(
                response.status,
                &response.body,
            )))
        }
    }

    pub(crate) async fn acknowledge(
        &self,
        method: Method,
        url: &str,
        payload: Option<Payload>,
    ) -> Result<ErrorResult> {
        let response = self.send_with_retry(method, url, payload).await?;
        if response.is_success() {
            Ok(ErrorResult::ok(response.status))
        } else {
            Ok(decode_error_result(response.status, &response.body))
        }
    }

    async fn send_with_retry(
        &self,
        method: Method,
        url: &str,
        payload: Option<Payload>,
    ) -> Result<HttpResponse> {
        let request = self.build_request(method, url, payload);
        let retry = self.retry_config();
        let policy = RetryPolicy::new(&retry);
        let mut consumed = 0u32;
        #[cfg(feature = "tracing")]
        let mut attempt = 0u32;

        loop {
            #[cfg(feature = "tracing")]
            {
                attempt += 1;
                tracing::debug!(method = %request.method, url = %request.url, attempt, "sending request");
            }

            let response = self
                .cancellable(self.transport.send(request.clone()))
                .await??;

            if response.is_success() {
                return Ok(response);
            }

            match policy.decide(response.status, consumed, response.retry_after()) {
                RetryDecision::Retry {
                    delay,
                    consumes_attempt,
                } => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        status = response.status,
                        delay_ms = delay.as_millis() as u64,
                        consumed,
                        consumes_attempt,
                        "retrying request"
                    );
                    self.cancellable(sleep(delay)).await?;
                    if consumes_attempt {
                        consumed += 1;
                    }
                }
                RetryDecision::Stop => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        status = response.status,
                        url = %request.url,
                        "request failed"
                    );
                    return Ok(response);
                }
            }
        }
    }

    fn build_request(&self, method: Method, url: &str, payload: Option<Payload>) -> HttpRequest {
        let mut headers = BTreeMap::new();
        if let Some(authorization) = self.credentials.read().authorization() {
            headers.insert(header::AUTHORIZATION.as_str().to_owned(), authorization);
        }
        let body = payload.map(|payload| {
            headers.insert(
                header::CONTENT_TYPE.as_str().to_owned(),
                payload.content_type.to_owned(),
            );
            payload.data
        });

        HttpRequest {
            method,
            url: self.resolve(url),
            body,
            headers,
        }
    }

    fn resolve(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_owned()
        } else {
            format!(
                "{}/{}",
                self.base_url.trim_end_matches('/'),
                url.trim_start_matches('/')
            )
        }
    }

    /// Races `future` against the cancellation token, if any.
    async fn cancellable<F: Future>(&self, future: F) -> Result<F::Output> {
        match &self.cancel {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => Err(SpotifyError::Cancelled),
                output = future => Ok(output),
            },
            None => Ok(future.await),
        }
    }
}
