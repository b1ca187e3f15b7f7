use crate::{
    models::{SearchResults, SearchType},
    Result, SpotifyWebClient,
};

impl SpotifyWebClient {
    /// Searches the catalog for `query` across `types`.
    ///
    /// The query is percent-encoded here; pass it unescaped. Page through a
    /// single kind with [`SpotifyWebClient::next_page_as`] into
    /// [`SearchResults`], since continuation links return the envelope.
    pub async fn search(
        &self,
        query: &str,
        types: &[SearchType],
        limit: u32,
        offset: u32,
        market: &str,
    ) -> Result<SearchResults> {
        let types = if types.is_empty() {
            &SearchType::ALL[..]
        } else {
            types
        };
        let kinds = types
            .iter()
            .map(|kind| kind.as_str())
            .collect::<Vec<_>>()
            .join(",");

        self.get_resource(
            &["search"],
            &[
                ("q", query.to_owned()),
                ("type", kinds),
                ("limit", limit.to_string()),
                ("offset", offset.to_string()),
                ("market", market.to_owned()),
            ],
        )
        .await
    }
}
