mod common;

use serde_json::{json, Value as JsonValue};
use spotify_web_http::{blocking, Method, Page, RetryConfig, SpotifyError};

use common::{client_with, ok, status, PagedTransport, ScriptedTransport};

#[test]
fn blocking_execute_decodes_json() {
    let transport = ScriptedTransport::new(vec![ok(json!({ "id": "wizzler", "display_name": "Wizzler" }))]);
    let spotify = blocking::SpotifyWebClient::from_async(client_with(transport.clone()))
        .expect("runtime must start");

    let profile: JsonValue = spotify
        .execute(Method::GET, "me", None)
        .expect("profile must decode");

    assert_eq!(profile["display_name"], "Wizzler");
    assert_eq!(transport.requests()[0].url, "https://api.test/v1/me");
}

#[test]
fn blocking_call_runs_endpoint_methods() {
    let transport = ScriptedTransport::new(vec![ok(json!({
        "id": "4aawyAB9vmqN3uQ7FjRGTy",
        "name": "Global Warming",
        "tracks": { "items": [], "total": 0, "limit": 50, "offset": 0 }
    }))]);
    let spotify = blocking::SpotifyWebClient::from_async(client_with(transport.clone()))
        .expect("runtime must start");

    let album = spotify
        .call(|client| client.get_album("4aawyAB9vmqN3uQ7FjRGTy", ""))
        .expect("album must decode");

    assert_eq!(album.name, "Global Warming");
}

#[test]
fn blocking_pages_forward_and_back() {
    let transport = PagedTransport::new(30);
    let spotify = blocking::SpotifyWebClient::from_async(client_with(transport.clone()))
        .expect("runtime must start");

    let first: Page<u32> = spotify
        .download("items?offset=0&limit=20")
        .expect("first page must load");
    let second = spotify
        .next_page(&first)
        .expect("second page must load")
        .expect("second page must exist");
    assert_eq!(second.items.len(), 10);
    assert!(spotify.next_page(&second).expect("must not fail").is_none());

    let back = spotify
        .previous_page(&second)
        .expect("previous page must load")
        .expect("previous page must exist");
    assert_eq!(back.offset, 0);
    assert_eq!(transport.urls().len(), 3);
}

#[test]
fn blocking_retries_share_configuration_with_the_async_client() {
    let transport = ScriptedTransport::new(vec![status(502), ok(json!([true, false]))]);
    let client = client_with(transport.clone());
    let spotify = blocking::SpotifyWebClient::from_async(client.clone()).expect("runtime must start");

    client.set_retry_config(RetryConfig::enabled(1, 1));
    assert!(spotify.retry_config().enabled);

    let saved = spotify
        .call(|client| client.check_saved_tracks(&["a", "b"]))
        .expect("flags must decode");

    assert_eq!(saved, vec![true, false]);
    assert_eq!(transport.hits(), 2);
}

#[test]
fn blocking_ack_and_errors_mirror_async_results() {
    let transport = ScriptedTransport::new(vec![status(404), status(400)]);
    let spotify = blocking::SpotifyWebClient::from_async(client_with(transport.clone()))
        .expect("runtime must start");
    spotify.set_use_auth(false);

    let ack = spotify
        .execute_ack(Method::PUT, "me/player/pause", None)
        .expect("ack must be returned");
    assert_eq!(ack.status, 404);
    assert!(ack.has_error());

    let err = spotify
        .download::<JsonValue>("me")
        .expect_err("bad request must fail");
    assert!(matches!(err, SpotifyError::Api(ref result) if result.status == 400));

    assert!(transport
        .requests()
        .iter()
        .all(|request| request.header("authorization").is_none()));
}
