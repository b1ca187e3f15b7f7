use spotify_web_http::{models::SearchResults, SpotifyWebClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let spotify = SpotifyWebClient::from_env().map_err(anyhow::Error::msg)?;

    let mut page = spotify.get_saved_tracks(20, 0, "").await?;
    loop {
        for saved in &page.items {
            println!("{}", saved.track.name);
        }
        match spotify.next_page(&page).await? {
            Some(next) => page = next,
            None => break,
        }
    }

    let results = spotify.search("kit", &[], 5, 0, "").await?;
    if let Some(artists) = &results.artists {
        if let Some(more) = spotify.next_page_as::<SearchResults, _>(artists).await? {
            let count = more.artists.map(|page| page.items.len()).unwrap_or(0);
            println!("next search page has {count} artists");
        }
    }

    Ok(())
}
