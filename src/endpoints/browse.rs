use crate::{
    endpoints::{join, NONE},
    models::{
        Category, CategoryList, CategoryPlaylists, FeaturedPlaylists, NewAlbumReleases,
        RecommendationSeedGenres, Recommendations, TuneableTrack,
    },
    Result, SpotifyWebClient,
};

impl SpotifyWebClient {
    /// Editorial playlists. `timestamp` is an ISO 8601 local time, or empty.
    pub async fn get_featured_playlists(
        &self,
        locale: &str,
        country: &str,
        timestamp: &str,
        limit: u32,
        offset: u32,
    ) -> Result<FeaturedPlaylists> {
        self.get_resource(
            &["browse", "featured-playlists"],
            &[
                ("locale", locale.to_owned()),
                ("country", country.to_owned()),
                ("timestamp", timestamp.to_owned()),
                ("limit", limit.to_string()),
                ("offset", offset.to_string()),
            ],
        )
        .await
    }

    pub async fn get_new_album_releases(
        &self,
        country: &str,
        limit: u32,
        offset: u32,
    ) -> Result<NewAlbumReleases> {
        self.get_resource(
            &["browse", "new-releases"],
            &[
                ("country", country.to_owned()),
                ("limit", limit.to_string()),
                ("offset", offset.to_string()),
            ],
        )
        .await
    }

    pub async fn get_categories(
        &self,
        country: &str,
        locale: &str,
        limit: u32,
        offset: u32,
    ) -> Result<CategoryList> {
        self.get_resource(
            &["browse", "categories"],
            &[
                ("country", country.to_owned()),
                ("locale", locale.to_owned()),
                ("limit", limit.to_string()),
                ("offset", offset.to_string()),
            ],
        )
        .await
    }

    pub async fn get_category(
        &self,
        category_id: &str,
        country: &str,
        locale: &str,
    ) -> Result<Category> {
        self.get_resource(
            &["browse", "categories", category_id],
            &[("country", country.to_owned()), ("locale", locale.to_owned())],
        )
        .await
    }

    pub async fn get_category_playlists(
        &self,
        category_id: &str,
        country: &str,
        limit: u32,
        offset: u32,
    ) -> Result<CategoryPlaylists> {
        self.get_resource(
            &["browse", "categories", category_id, "playlists"],
            &[
                ("country", country.to_owned()),
                ("limit", limit.to_string()),
                ("offset", offset.to_string()),
            ],
        )
        .await
    }

    /// Tracks generated from up to five seeds in total.
    ///
    /// `target`, `min` and `max` add `target_*`, `min_*` and `max_*`
    /// parameters for every attribute they set.
    #[allow(clippy::too_many_arguments)]
    pub async fn get_recommendations(
        &self,
        artist_seeds: &[&str],
        genre_seeds: &[&str],
        track_seeds: &[&str],
        target: Option<&TuneableTrack>,
        min: Option<&TuneableTrack>,
        max: Option<&TuneableTrack>,
        limit: u32,
        market: &str,
    ) -> Result<Recommendations> {
        let mut params = vec![
            ("seed_artists".to_owned(), join(artist_seeds)),
            ("seed_genres".to_owned(), join(genre_seeds)),
            ("seed_tracks".to_owned(), join(track_seeds)),
        ];
        for (prefix, tuning) in [("target", target), ("min", min), ("max", max)] {
            if let Some(tuning) = tuning {
                params.extend(tuning.to_params(prefix));
            }
        }
        params.push(("limit".to_owned(), limit.to_string()));
        params.push(("market".to_owned(), market.to_owned()));

        self.get_resource(&["recommendations"], params.as_slice())
            .await
    }

    pub async fn get_recommendation_genre_seeds(&self) -> Result<RecommendationSeedGenres> {
        self.get_resource(&["recommendations", "available-genre-seeds"], &NONE)
            .await
    }
}
