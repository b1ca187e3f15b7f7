use crate::{
    models::{FullArtist, FullTrack, PlayHistory, TimeRange},
    CursorPage, Page, Result, SpotifyWebClient,
};

impl SpotifyWebClient {
    pub async fn get_users_top_tracks(
        &self,
        time_range: TimeRange,
        limit: u32,
        offset: u32,
    ) -> Result<Page<FullTrack>> {
        self.get_resource(
            &["me", "top", "tracks"],
            &[
                ("time_range", time_range.as_str().to_owned()),
                ("limit", limit.to_string()),
                ("offset", offset.to_string()),
            ],
        )
        .await
    }

    pub async fn get_users_top_artists(
        &self,
        time_range: TimeRange,
        limit: u32,
        offset: u32,
    ) -> Result<Page<FullArtist>> {
        self.get_resource(
            &["me", "top", "artists"],
            &[
                ("time_range", time_range.as_str().to_owned()),
                ("limit", limit.to_string()),
                ("offset", offset.to_string()),
            ],
        )
        .await
    }

    /// Recently played tracks. `after` and `before` are unix timestamps in
    /// milliseconds; the service accepts at most one of them.
    pub async fn get_users_recently_played_tracks(
        &self,
        limit: u32,
        after: Option<u64>,
        before: Option<u64>,
    ) -> Result<CursorPage<PlayHistory>> {
        self.get_resource(
            &["me", "player", "recently-played"],
            &[
                ("limit", limit.to_string()),
                ("after", after.map(|ms| ms.to_string()).unwrap_or_default()),
                ("before", before.map(|ms| ms.to_string()).unwrap_or_default()),
            ],
        )
        .await
    }
}
