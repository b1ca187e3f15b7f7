//! `spotify-web-http` is an async HTTP client for the Spotify Web API.
//!
//! Every endpoint wrapper funnels through one request pipeline:
//! - authorization header from shared [`Credentials`]
//! - automatic retries driven by [`RetryConfig`]
//! - pagination over [`Page`] and [`CursorPage`] via
//!   [`SpotifyWebClient::next_page`] and [`SpotifyWebClient::previous_page`]
//! - mutating calls acknowledged with an [`ErrorResult`]
//!
//! A synchronous adapter lives in [`blocking`].

pub mod blocking;
mod client;
mod decode;
mod endpoints;
mod error;
pub mod models;
mod options;
mod pagination;
pub mod retry;
pub mod transport;
mod types;
mod wire;

pub use client::SpotifyWebClient;
pub use endpoints::{PlaylistChanges, MAX_TRACKS_PER_REQUEST};
pub use error::{SpotifyError, TransportError};
pub use options::{ClientOptions, Credentials, DEFAULT_BASE_URL};
pub use pagination::{BackwardPaginated, Cursor, CursorPage, Page, Paginated};
pub use retry::{RetryConfig, RetryDecision, RetryPolicy};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
pub use types::ErrorResult;

pub use reqwest::Method;
pub use tokio_util::sync::CancellationToken;

pub type Result<T> = std::result::Result<T, SpotifyError>;
