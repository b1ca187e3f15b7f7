use serde_json::Value;

use crate::{
    endpoints::{join, NONE},
    models::{AudioFeatures, FullTrack, SeveralAudioFeatures, SeveralTracks},
    Result, SpotifyWebClient,
};

impl SpotifyWebClient {
    pub async fn get_track(&self, id: &str, market: &str) -> Result<FullTrack> {
        self.get_resource(&["tracks", id], &[("market", market.to_owned())])
            .await
    }

    /// Up to 50 tracks by id. Unknown ids come back as `None`.
    pub async fn get_several_tracks(&self, ids: &[&str], market: &str) -> Result<SeveralTracks> {
        self.get_resource(
            &["tracks"],
            &[("ids", join(ids)), ("market", market.to_owned())],
        )
        .await
    }

    /// Low-level audio analysis, returned as raw JSON.
    pub async fn get_audio_analysis(&self, id: &str) -> Result<Value> {
        self.get_resource(&["audio-analysis", id], &NONE)
            .await
    }

    pub async fn get_audio_features(&self, id: &str) -> Result<AudioFeatures> {
        self.get_resource(&["audio-features", id], &NONE)
            .await
    }

    pub async fn get_several_audio_features(&self, ids: &[&str]) -> Result<SeveralAudioFeatures> {
        self.get_resource(&["audio-features"], &[("ids", join(ids))])
            .await
    }
}
