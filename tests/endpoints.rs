mod common;

use serde_json::json;
use spotify_web_http::{ErrorResult, HttpResponse, Method, SpotifyError};

use common::{client_with, ok, ScriptedTransport, BASE_URL};

#[tokio::test]
async fn no_content_upload_acknowledges_with_status() {
    let transport = ScriptedTransport::new(vec![HttpResponse::new(204, "")]);
    let spotify = client_with(transport.clone());

    let ack: ErrorResult = spotify
        .upload("me/player/pause", &json!({}), Method::PUT)
        .await
        .expect("empty body must decode as an ack");

    assert_eq!(ack, ErrorResult::ok(204));
    assert_eq!(transport.requests()[0].method, Method::PUT);
}

#[tokio::test]
async fn no_content_into_required_model_is_malformed() {
    let transport = ScriptedTransport::new(vec![HttpResponse::new(204, "")]);
    let spotify = client_with(transport.clone());

    let err = spotify
        .get_artist("0OdUWJ0sBjDrqHygGUXeCF")
        .await
        .expect_err("artist needs a body");

    assert!(matches!(
        err,
        SpotifyError::MalformedResponse { status: 204, .. }
    ));
}

#[tokio::test]
async fn ids_are_escaped_as_single_path_segments() {
    let transport = ScriptedTransport::new(vec![
        ok(json!({ "id": "x", "name": "Escaped" })),
        ok(json!({ "items": [], "total": 0, "limit": 20, "offset": 0 })),
    ]);
    let spotify = client_with(transport.clone());

    spotify
        .get_artist("../me?x=1#frag")
        .await
        .expect("artist must decode");
    spotify
        .get_playlist_tracks("list/../../me", "", 20, 0, "")
        .await
        .expect("tracks must decode");

    let requests = transport.requests();
    assert_eq!(
        requests[0].url,
        format!("{BASE_URL}/artists/..%2Fme%3Fx=1%23frag")
    );
    assert_eq!(
        requests[1].url,
        format!("{BASE_URL}/playlists/list%2F..%2F..%2Fme/tracks?limit=20&offset=0")
    );
}
