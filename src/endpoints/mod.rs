//! Endpoint wrappers, one `impl SpotifyWebClient` block per resource family.
//!
//! Each wrapper only assembles path segments, query and body; execution,
//! retries and error mapping happen in the client core.

mod albums;
mod artists;
mod browse;
mod follow;
mod library;
mod personalization;
mod player;
mod playlists;
mod profiles;
mod search;
mod tracks;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{client::Payload, ErrorResult, Result, SpotifyWebClient};

pub use playlists::{PlaylistChanges, MAX_TRACKS_PER_REQUEST};

impl SpotifyWebClient {
    pub(crate) async fn get_resource<T, K>(&self, path: &[&str], params: &[(K, String)]) -> Result<T>
    where
        T: DeserializeOwned,
        K: AsRef<str>,
    {
        let url = self.endpoint_url(path, params)?;
        self.fetch(Method::GET, &url, None).await
    }

    pub(crate) async fn send_resource<T, K>(
        &self,
        method: Method,
        path: &[&str],
        params: &[(K, String)],
        body: Option<&Value>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        K: AsRef<str>,
    {
        let url = self.endpoint_url(path, params)?;
        let payload = body.map(Payload::json).transpose()?;
        self.fetch(method, &url, payload).await
    }

    pub(crate) async fn send_ack<K: AsRef<str>>(
        &self,
        method: Method,
        path: &[&str],
        params: &[(K, String)],
        body: Option<&Value>,
    ) -> Result<ErrorResult> {
        let url = self.endpoint_url(path, params)?;
        let payload = body.map(Payload::json).transpose()?;
        self.acknowledge(method, &url, payload).await
    }
}

/// Empty parameter list.
pub(crate) const NONE: [(&str, String); 0] = [];

pub(crate) fn join(values: &[&str]) -> String {
    values.join(",")
}

#[cfg(test)]
mod tests {
    use super::join;

    #[test]
    fn join_uses_commas() {
        assert_eq!(join(&["a", "b", "c"]), "a,b,c");
        assert_eq!(join(&[]), "");
    }
}
