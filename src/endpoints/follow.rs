use reqwest::Method;
use serde_json::json;

use crate::{
    endpoints::{join, NONE},
    models::{FollowType, FollowedArtists},
    ErrorResult, Result, SpotifyWebClient,
};

impl SpotifyWebClient {
    /// Artists the current user follows, walked with an `after` cursor.
    pub async fn get_followed_artists(&self, limit: u32, after: &str) -> Result<FollowedArtists> {
        self.get_resource(
            &["me", "following"],
            &[
                ("type", FollowType::Artist.as_str().to_owned()),
                ("limit", limit.to_string()),
                ("after", after.to_owned()),
            ],
        )
        .await
    }

    pub async fn follow(&self, kind: FollowType, ids: &[&str]) -> Result<ErrorResult> {
        self.send_ack(
            Method::PUT,
            &["me", "following"],
            &[("type", kind.as_str().to_owned()), ("ids", join(ids))],
            None,
        )
        .await
    }

    pub async fn follow_one(&self, kind: FollowType, id: &str) -> Result<ErrorResult> {
        self.follow(kind, &[id]).await
    }

    pub async fn unfollow(&self, kind: FollowType, ids: &[&str]) -> Result<ErrorResult> {
        self.send_ack(
            Method::DELETE,
            &["me", "following"],
            &[("type", kind.as_str().to_owned()), ("ids", join(ids))],
            None,
        )
        .await
    }

    pub async fn unfollow_one(&self, kind: FollowType, id: &str) -> Result<ErrorResult> {
        self.unfollow(kind, &[id]).await
    }

    /// One flag per id, in request order.
    pub async fn is_following(&self, kind: FollowType, ids: &[&str]) -> Result<Vec<bool>> {
        self.get_resource(
            &["me", "following", "contains"],
            &[("type", kind.as_str().to_owned()), ("ids", join(ids))],
        )
        .await
    }

    pub async fn is_following_one(&self, kind: FollowType, id: &str) -> Result<Vec<bool>> {
        self.is_following(kind, &[id]).await
    }

    pub async fn follow_playlist(&self, playlist_id: &str, public: bool) -> Result<ErrorResult> {
        let body = json!({ "public": public });
        self.send_ack(
            Method::PUT,
            &["playlists", playlist_id, "followers"],
            &NONE,
            Some(&body),
        )
        .await
    }

    pub async fn unfollow_playlist(&self, playlist_id: &str) -> Result<ErrorResult> {
        self.send_ack(
            Method::DELETE,
            &["playlists", playlist_id, "followers"],
            &NONE,
            None,
        )
        .await
    }

    /// Whether each of `user_ids` follows the playlist.
    pub async fn is_following_playlist(
        &self,
        playlist_id: &str,
        user_ids: &[&str],
    ) -> Result<Vec<bool>> {
        self.get_resource(
            &["playlists", playlist_id, "followers", "contains"],
            &[("ids", join(user_ids))],
        )
        .await
    }
}
