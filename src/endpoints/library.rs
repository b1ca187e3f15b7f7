use reqwest::Method;
use serde_json::json;

use crate::{
    endpoints::{join, NONE},
    models::{SavedAlbum, SavedTrack},
    ErrorResult, Page, Result, SpotifyWebClient,
};

impl SpotifyWebClient {
    pub async fn save_tracks(&self, ids: &[&str]) -> Result<ErrorResult> {
        let body = json!({ "ids": ids });
        self.send_ack(Method::PUT, &["me", "tracks"], &NONE, Some(&body))
            .await
    }

    pub async fn save_track(&self, id: &str) -> Result<ErrorResult> {
        self.save_tracks(&[id]).await
    }

    pub async fn get_saved_tracks(
        &self,
        limit: u32,
        offset: u32,
        market: &str,
    ) -> Result<Page<SavedTrack>> {
        self.get_resource(
            &["me", "tracks"],
            &[
                ("limit", limit.to_string()),
                ("offset", offset.to_string()),
                ("market", market.to_owned()),
            ],
        )
        .await
    }

    pub async fn remove_saved_tracks(&self, ids: &[&str]) -> Result<ErrorResult> {
        let body = json!({ "ids": ids });
        self.send_ack(Method::DELETE, &["me", "tracks"], &NONE, Some(&body))
            .await
    }

    pub async fn check_saved_tracks(&self, ids: &[&str]) -> Result<Vec<bool>> {
        self.get_resource(&["me", "tracks", "contains"], &[("ids", join(ids))])
            .await
    }

    pub async fn save_albums(&self, ids: &[&str]) -> Result<ErrorResult> {
        let body = json!({ "ids": ids });
        self.send_ack(Method::PUT, &["me", "albums"], &NONE, Some(&body))
            .await
    }

    pub async fn save_album(&self, id: &str) -> Result<ErrorResult> {
        self.save_albums(&[id]).await
    }

    pub async fn get_saved_albums(
        &self,
        limit: u32,
        offset: u32,
        market: &str,
    ) -> Result<Page<SavedAlbum>> {
        self.get_resource(
            &["me", "albums"],
            &[
                ("limit", limit.to_string()),
                ("offset", offset.to_string()),
                ("market", market.to_owned()),
            ],
        )
        .await
    }

    pub async fn remove_saved_albums(&self, ids: &[&str]) -> Result<ErrorResult> {
        let body = json!({ "ids": ids });
        self.send_ack(Method::DELETE, &["me", "albums"], &NONE, Some(&body))
            .await
    }

    pub async fn check_saved_albums(&self, ids: &[&str]) -> Result<Vec<bool>> {
        self.get_resource(&["me", "albums", "contains"], &[("ids", join(ids))])
            .await
    }
}
