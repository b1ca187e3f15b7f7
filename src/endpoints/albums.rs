use crate::{
    endpoints::join,
    models::{FullAlbum, SeveralAlbums, SimpleTrack},
    Page, Result, SpotifyWebClient,
};

impl SpotifyWebClient {
    /// Album by id. Pass an empty `market` to omit it.
    pub async fn get_album(&self, id: &str, market: &str) -> Result<FullAlbum> {
        self.get_resource(&["albums", id], &[("market", market.to_owned())])
            .await
    }

    /// Up to 20 albums by id.
    pub async fn get_several_albums(&self, ids: &[&str], market: &str) -> Result<SeveralAlbums> {
        self.get_resource(
            &["albums"],
            &[("ids", join(ids)), ("market", market.to_owned())],
        )
        .await
    }

    pub async fn get_album_tracks(
        &self,
        id: &str,
        limit: u32,
        offset: u32,
        market: &str,
    ) -> Result<Page<SimpleTrack>> {
        self.get_resource(
            &["albums", id, "tracks"],
            &[
                ("limit", limit.to_string()),
                ("offset", offset.to_string()),
                ("market", market.to_owned()),
            ],
        )
        .await
    }
}
