use crate::{
    endpoints::{join, NONE},
    models::{AlbumType, FullArtist, SeveralArtists, SeveralTracks, SimpleAlbum},
    Page, Result, SpotifyWebClient,
};

impl SpotifyWebClient {
    pub async fn get_artist(&self, id: &str) -> Result<FullArtist> {
        self.get_resource(&["artists", id], &NONE).await
    }

    /// Up to 50 artists by id.
    pub async fn get_several_artists(&self, ids: &[&str]) -> Result<SeveralArtists> {
        self.get_resource(&["artists"], &[("ids", join(ids))]).await
    }

    pub async fn get_related_artists(&self, id: &str) -> Result<SeveralArtists> {
        self.get_resource(&["artists", id, "related-artists"], &NONE)
            .await
    }

    /// Top tracks of an artist in `country` (ISO 3166-1 alpha-2 or `from_token`).
    pub async fn get_artist_top_tracks(&self, id: &str, country: &str) -> Result<SeveralTracks> {
        self.get_resource(
            &["artists", id, "top-tracks"],
            &[("country", country.to_owned())],
        )
        .await
    }

    /// Albums of an artist filtered by `groups`; an empty slice means all groups.
    pub async fn get_artist_albums(
        &self,
        id: &str,
        groups: &[AlbumType],
        limit: u32,
        offset: u32,
        market: &str,
    ) -> Result<Page<SimpleAlbum>> {
        let include_groups = groups
            .iter()
            .map(|group| group.as_str())
            .collect::<Vec<_>>()
            .join(",");
        self.get_resource(
            &["artists", id, "albums"],
            &[
                ("include_groups", include_groups),
                ("limit", limit.to_string()),
                ("offset", offset.to_string()),
                ("market", market.to_owned()),
            ],
        )
        .await
    }
}
