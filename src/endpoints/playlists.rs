use reqwest::Method;
use serde_json::{json, Map, Value};

use crate::{
    client::Payload,
    endpoints::NONE,
    models::{DeleteTrackUri, FullPlaylist, PlaylistTrack, SimplePlaylist, Snapshot},
    ErrorResult, Page, Result, SpotifyWebClient,
};

/// Maximum number of URIs the service accepts per add request.
pub const MAX_TRACKS_PER_REQUEST: usize = 100;

/// Fields to change on a playlist; `None` leaves a field untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlaylistChanges {
    pub name: Option<String>,
    pub public: Option<bool>,
    pub collaborative: Option<bool>,
    pub description: Option<String>,
}

impl PlaylistChanges {
    fn to_body(&self) -> Value {
        let mut body = Map::new();
        if let Some(name) = &self.name {
            body.insert("name".to_owned(), json!(name));
        }
        if let Some(public) = self.public {
            body.insert("public".to_owned(), json!(public));
        }
        if let Some(collaborative) = self.collaborative {
            body.insert("collaborative".to_owned(), json!(collaborative));
        }
        if let Some(description) = &self.description {
            body.insert("description".to_owned(), json!(description));
        }
        Value::Object(body)
    }
}

impl SpotifyWebClient {
    pub async fn get_user_playlists(
        &self,
        user_id: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Page<SimplePlaylist>> {
        self.get_resource(
            &["users", user_id, "playlists"],
            &[("limit", limit.to_string()), ("offset", offset.to_string())],
        )
        .await
    }

    /// Playlist by id. `fields` is the service's field filter, or empty.
    pub async fn get_playlist(
        &self,
        playlist_id: &str,
        fields: &str,
        market: &str,
    ) -> Result<FullPlaylist> {
        self.get_resource(
            &["playlists", playlist_id],
            &[("fields", fields.to_owned()), ("market", market.to_owned())],
        )
        .await
    }

    pub async fn get_playlist_tracks(
        &self,
        playlist_id: &str,
        fields: &str,
        limit: u32,
        offset: u32,
        market: &str,
    ) -> Result<Page<PlaylistTrack>> {
        self.get_resource(
            &["playlists", playlist_id, "tracks"],
            &[
                ("fields", fields.to_owned()),
                ("limit", limit.to_string()),
                ("offset", offset.to_string()),
                ("market", market.to_owned()),
            ],
        )
        .await
    }

    pub async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
        public: bool,
        collaborative: bool,
        description: &str,
    ) -> Result<FullPlaylist> {
        let body = json!({
            "name": name,
            "public": public,
            "collaborative": collaborative,
            "description": description,
        });
        self.send_resource(
            Method::POST,
            &["users", user_id, "playlists"],
            &NONE,
            Some(&body),
        )
        .await
    }

    pub async fn update_playlist(
        &self,
        playlist_id: &str,
        changes: &PlaylistChanges,
    ) -> Result<ErrorResult> {
        let body = changes.to_body();
        self.send_ack(
            Method::PUT,
            &["playlists", playlist_id],
            &NONE,
            Some(&body),
        )
        .await
    }

    /// Replaces the cover with a base64-encoded JPEG (max 256 KB).
    pub async fn upload_playlist_image(
        &self,
        playlist_id: &str,
        base64_jpeg: &str,
    ) -> Result<ErrorResult> {
        let url = self.endpoint_url(&["playlists", playlist_id, "images"], &NONE)?;
        let payload = Payload {
            content_type: "image/jpeg",
            data: base64_jpeg.to_owned(),
        };
        self.acknowledge(Method::PUT, &url, Some(payload)).await
    }

    /// Replaces every item of the playlist with `uris`.
    pub async fn replace_playlist_tracks(
        &self,
        playlist_id: &str,
        uris: &[&str],
    ) -> Result<ErrorResult> {
        let body = json!({ "uris": uris });
        self.send_ack(
            Method::PUT,
            &["playlists", playlist_id, "tracks"],
            &NONE,
            Some(&body),
        )
        .await
    }

    pub async fn remove_playlist_tracks(
        &self,
        playlist_id: &str,
        tracks: &[DeleteTrackUri],
    ) -> Result<ErrorResult> {
        let body = json!({ "tracks": tracks });
        self.send_ack(
            Method::DELETE,
            &["playlists", playlist_id, "tracks"],
            &NONE,
            Some(&body),
        )
        .await
    }

    pub async fn remove_playlist_track(
        &self,
        playlist_id: &str,
        track: DeleteTrackUri,
    ) -> Result<ErrorResult> {
        self.remove_playlist_tracks(playlist_id, std::slice::from_ref(&track))
            .await
    }

    /// Adds `uris` at `position` (or the end), in batches of
    /// [`MAX_TRACKS_PER_REQUEST`].
    ///
    /// Stops at the first batch that is not acknowledged and returns its
    /// result; otherwise returns the last batch's acknowledgement.
    pub async fn add_playlist_tracks(
        &self,
        playlist_id: &str,
        uris: &[&str],
        position: Option<u32>,
    ) -> Result<ErrorResult> {
        let path = ["playlists", playlist_id, "tracks"];
        let mut ack = ErrorResult::ok(201);
        let mut position = position;

        for chunk in uris.chunks(MAX_TRACKS_PER_REQUEST) {
            let mut body = json!({ "uris": chunk });
            if let Some(position) = position {
                body["position"] = json!(position);
            }
            ack = self
                .send_ack(Method::POST, &path, &NONE, Some(&body))
                .await?;
            if ack.has_error() {
                return Ok(ack);
            }
            position = position.map(|start| start + chunk.len() as u32);
        }
        Ok(ack)
    }

    pub async fn add_playlist_track(
        &self,
        playlist_id: &str,
        uri: &str,
        position: Option<u32>,
    ) -> Result<ErrorResult> {
        self.add_playlist_tracks(playlist_id, &[uri], position)
            .await
    }

    /// Moves `range_length` items starting at `range_start` before
    /// `insert_before`. Pass an empty `snapshot_id` to target the latest
    /// version.
    pub async fn reorder_playlist(
        &self,
        playlist_id: &str,
        range_start: u32,
        insert_before: u32,
        range_length: u32,
        snapshot_id: &str,
    ) -> Result<Snapshot> {
        let mut body = json!({
            "range_start": range_start,
            "insert_before": insert_before,
            "range_length": range_length,
        });
        if !snapshot_id.is_empty() {
            body["snapshot_id"] = json!(snapshot_id);
        }
        self.send_resource(
            Method::PUT,
            &["playlists", playlist_id, "tracks"],
            &NONE,
            Some(&body),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::PlaylistChanges;

    #[test]
    fn playlist_changes_only_serializes_set_fields() {
        let changes = PlaylistChanges {
            name: Some("Road trip".to_owned()),
            public: Some(false),
            ..PlaylistChanges::default()
        };
        assert_eq!(
            changes.to_body(),
            json!({ "name": "Road trip", "public": false })
        );
    }
}
