use spotify_web_http::{RetryConfig, SpotifyWebClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let spotify = SpotifyWebClient::from_env().map_err(anyhow::Error::msg)?;
    spotify.set_retry_config(RetryConfig::enabled(3, 500).with_too_many_requests(false));

    let me = spotify.get_private_profile().await?;
    println!("signed in as {}", me.display_name.as_deref().unwrap_or(&me.id));

    let album = spotify.get_album("4aawyAB9vmqN3uQ7FjRGTy", "").await?;
    println!("{} ({} tracks)", album.name, album.tracks.total);

    let ack = spotify.save_album(&album.id).await?;
    if ack.has_error() {
        println!("save failed: {} {}", ack.status, ack.message);
    }

    match spotify.get_playback("").await? {
        Some(playback) => println!("playing: {:?}", playback.item.map(|track| track.name)),
        None => println!("nothing is playing"),
    }

    Ok(())
}
