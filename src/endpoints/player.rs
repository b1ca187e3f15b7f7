use reqwest::Method;
use serde_json::{json, Map, Value};

use crate::{
    endpoints::NONE,
    models::{Devices, PlaybackContext, PlaybackOffset, RepeatState},
    ErrorResult, Result, SpotifyWebClient,
};

fn device_param(device_id: &str) -> (&'static str, String) {
    ("device_id", device_id.to_owned())
}

impl SpotifyWebClient {
    pub async fn get_devices(&self) -> Result<Devices> {
        self.get_resource(&["me", "player", "devices"], &NONE).await
    }

    /// Current playback state, or `None` when nothing is active.
    pub async fn get_playback(&self, market: &str) -> Result<Option<PlaybackContext>> {
        self.get_resource(&["me", "player"], &[("market", market.to_owned())])
            .await
    }

    /// Currently playing item, or `None` when nothing is playing.
    pub async fn get_playing_track(&self, market: &str) -> Result<Option<PlaybackContext>> {
        self.get_resource(
            &["me", "player", "currently-playing"],
            &[("market", market.to_owned())],
        )
        .await
    }

    pub async fn transfer_playback(&self, device_ids: &[&str], play: bool) -> Result<ErrorResult> {
        let body = json!({ "device_ids": device_ids, "play": play });
        self.send_ack(Method::PUT, &["me", "player"], &NONE, Some(&body))
            .await
    }

    /// Starts or resumes playback.
    ///
    /// With neither `context_uri` nor `uris` the current context resumes.
    /// Empty `device_id` targets the active device.
    pub async fn resume_playback(
        &self,
        device_id: &str,
        context_uri: &str,
        uris: &[&str],
        offset: Option<PlaybackOffset>,
        position_ms: u32,
    ) -> Result<ErrorResult> {
        let mut body = Map::new();
        if !context_uri.is_empty() {
            body.insert("context_uri".to_owned(), json!(context_uri));
        }
        if !uris.is_empty() {
            body.insert("uris".to_owned(), json!(uris));
        }
        match offset {
            Some(PlaybackOffset::Position(position)) => {
                body.insert("offset".to_owned(), json!({ "position": position }));
            }
            Some(PlaybackOffset::Uri(uri)) => {
                body.insert("offset".to_owned(), json!({ "uri": uri }));
            }
            None => {}
        }
        if position_ms > 0 {
            body.insert("position_ms".to_owned(), json!(position_ms));
        }

        self.send_ack(
            Method::PUT,
            &["me", "player", "play"],
            &[device_param(device_id)],
            Some(&Value::Object(body)),
        )
        .await
    }

    pub async fn pause_playback(&self, device_id: &str) -> Result<ErrorResult> {
        self.send_ack(
            Method::PUT,
            &["me", "player", "pause"],
            &[device_param(device_id)],
            None,
        )
        .await
    }

    pub async fn skip_playback_to_next(&self, device_id: &str) -> Result<ErrorResult> {
        self.send_ack(
            Method::POST,
            &["me", "player", "next"],
            &[device_param(device_id)],
            None,
        )
        .await
    }

    pub async fn skip_playback_to_previous(&self, device_id: &str) -> Result<ErrorResult> {
        self.send_ack(
            Method::POST,
            &["me", "player", "previous"],
            &[device_param(device_id)],
            None,
        )
        .await
    }

    pub async fn seek_playback(&self, position_ms: u32, device_id: &str) -> Result<ErrorResult> {
        self.send_ack(
            Method::PUT,
            &["me", "player", "seek"],
            &[
                ("position_ms", position_ms.to_string()),
                device_param(device_id),
            ],
            None,
        )
        .await
    }

    pub async fn set_repeat_mode(&self, state: RepeatState, device_id: &str) -> Result<ErrorResult> {
        self.send_ack(
            Method::PUT,
            &["me", "player", "repeat"],
            &[("state", state.as_str().to_owned()), device_param(device_id)],
            None,
        )
        .await
    }

    /// Sets the volume; values above 100 are clamped.
    pub async fn set_volume(&self, volume_percent: u8, device_id: &str) -> Result<ErrorResult> {
        self.send_ack(
            Method::PUT,
            &["me", "player", "volume"],
            &[
                ("volume_percent", volume_percent.min(100).to_string()),
                device_param(device_id),
            ],
            None,
        )
        .await
    }

    pub async fn set_shuffle(&self, shuffle: bool, device_id: &str) -> Result<ErrorResult> {
        self.send_ack(
            Method::PUT,
            &["me", "player", "shuffle"],
            &[("state", shuffle.to_string()), device_param(device_id)],
            None,
        )
        .await
    }

    pub async fn add_to_queue(&self, uri: &str, device_id: &str) -> Result<ErrorResult> {
        self.send_ack(
            Method::POST,
            &["me", "player", "queue"],
            &[("uri", uri.to_owned()), device_param(device_id)],
            None,
        )
        .await
    }
}
