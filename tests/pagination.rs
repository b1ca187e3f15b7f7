mod common;

use serde_json::json;
use spotify_web_http::{
    models::{FullArtist, PlayHistory, SavedTrack, SearchResults},
    CursorPage, Page, SpotifyError,
};

use common::{client_with, ok, status, PagedTransport, ScriptedTransport, BASE_URL};

#[tokio::test]
async fn walks_offset_pages_to_the_end() {
    let transport = PagedTransport::new(45);
    let spotify = client_with(transport.clone());

    let first: Page<u32> = spotify
        .download("items?offset=0&limit=20")
        .await
        .expect("first page must load");
    assert_eq!(first.items.len(), 20);
    assert!(first.previous_url.is_none());

    let second = spotify
        .next_page(&first)
        .await
        .expect("second page must load")
        .expect("second page must exist");
    assert_eq!(second.offset, 20);
    assert_eq!(second.items.len(), 20);

    let third = spotify
        .next_page(&second)
        .await
        .expect("third page must load")
        .expect("third page must exist");
    assert_eq!(third.offset, 40);
    assert_eq!(third.items, vec![40, 41, 42, 43, 44]);
    assert!(!third.has_next());

    let hits_before = transport.urls().len();
    let end = spotify.next_page(&third).await.expect("end must not fail");
    assert!(end.is_none());
    assert_eq!(transport.urls().len(), hits_before);
}

#[tokio::test]
async fn previous_page_returns_to_the_start() {
    let transport = PagedTransport::new(45);
    let spotify = client_with(transport.clone());

    let first: Page<u32> = spotify
        .download("items?offset=0&limit=20")
        .await
        .expect("first page must load");
    let second = spotify
        .next_page(&first)
        .await
        .expect("second page must load")
        .expect("second page must exist");
    let back = spotify
        .previous_page(&second)
        .await
        .expect("previous page must load")
        .expect("previous page must exist");

    assert_eq!(back.offset, 0);
    assert_eq!(back.items, first.items);
    assert_eq!(
        transport.urls().last().map(String::as_str),
        Some(format!("{BASE_URL}/items?offset=0&limit=20").as_str())
    );

    let before_start = spotify
        .previous_page(&back)
        .await
        .expect("missing previous link must not fail");
    assert!(before_start.is_none());
}

#[tokio::test]
async fn missing_link_skips_the_network() {
    let transport = ScriptedTransport::new(vec![]);
    let spotify = client_with(transport.clone());

    let page = Page::<u32> {
        items: vec![1, 2, 3],
        total: 3,
        ..Page::default()
    };

    assert!(spotify.next_page(&page).await.expect("must not fail").is_none());
    assert!(spotify
        .previous_page(&page)
        .await
        .expect("must not fail")
        .is_none());
    assert_eq!(transport.hits(), 0);
}

#[tokio::test]
async fn following_the_same_page_twice_requests_the_same_url() {
    let transport = PagedTransport::new(100);
    let spotify = client_with(transport.clone());

    let first: Page<u32> = spotify
        .download("items?offset=0&limit=10")
        .await
        .expect("first page must load");

    let a = spotify.next_page(&first).await.expect("must load");
    let b = spotify.next_page(&first).await.expect("must load");

    assert_eq!(a, b);
    let urls = transport.urls();
    assert_eq!(urls[1], urls[2]);
}

fn saved_track(name: &str) -> serde_json::Value {
    json!({ "added_at": "2024-03-01T10:00:00Z", "track": { "id": name, "name": name } })
}

#[tokio::test]
async fn saved_track_pages_walk_both_directions() {
    let next = format!("{BASE_URL}/me/tracks?offset=1&limit=1");
    let previous = format!("{BASE_URL}/me/tracks?offset=0&limit=1");
    let transport = ScriptedTransport::new(vec![
        ok(json!({
            "items": [saved_track("first")],
            "total": 2, "limit": 1, "offset": 0,
            "next": next, "previous": null
        })),
        ok(json!({
            "items": [saved_track("second")],
            "total": 2, "limit": 1, "offset": 1,
            "next": null, "previous": previous
        })),
        ok(json!({
            "items": [saved_track("first")],
            "total": 2, "limit": 1, "offset": 0,
            "next": next, "previous": null
        })),
    ]);
    let spotify = client_with(transport.clone());

    let first = spotify
        .get_saved_tracks(1, 0, "")
        .await
        .expect("saved tracks must load");
    let second: Page<SavedTrack> = spotify
        .next_page(&first)
        .await
        .expect("next page must load")
        .expect("next page must exist");
    assert_eq!(second.items[0].track.name, "second");

    let back = spotify
        .previous_page(&second)
        .await
        .expect("previous page must load")
        .expect("previous page must exist");
    assert_eq!(back.offset, 0);
    assert_eq!(back.items[0].track.name, "first");

    let urls: Vec<String> = transport.requests().into_iter().map(|request| request.url).collect();
    assert_eq!(
        urls,
        vec![
            format!("{BASE_URL}/me/tracks?limit=1&offset=0"),
            next,
            previous,
        ]
    );
}

#[tokio::test]
async fn cursor_pages_follow_their_next_link() {
    let next = format!("{BASE_URL}/me/player/recently-played?before=1700000000000&limit=1");
    let transport = ScriptedTransport::new(vec![
        ok(json!({
            "items": [{ "track": { "name": "One" }, "played_at": "2024-01-02T00:00:00Z" }],
            "limit": 1,
            "next": next,
            "cursors": { "after": "1700000000001", "before": "1700000000000" }
        })),
        ok(json!({
            "items": [{ "track": { "name": "Two" }, "played_at": "2024-01-01T00:00:00Z" }],
            "limit": 1,
            "next": null,
            "cursors": null
        })),
    ]);
    let spotify = client_with(transport.clone());

    let first = spotify
        .get_users_recently_played_tracks(1, None, None)
        .await
        .expect("history must load");
    assert_eq!(first.cursor.before.as_deref(), Some("1700000000000"));

    let second: CursorPage<PlayHistory> = spotify
        .next_page(&first)
        .await
        .expect("next history page must load")
        .expect("next history page must exist");
    assert_eq!(second.items[0].track.name, "Two");
    assert!(spotify
        .next_page(&second)
        .await
        .expect("must not fail")
        .is_none());

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].url, next);
}

#[tokio::test]
async fn next_page_can_decode_into_the_wrapping_envelope() {
    let next = format!("{BASE_URL}/search?query=kit&type=artist&offset=1&limit=1");
    let transport = ScriptedTransport::new(vec![
        ok(json!({
            "artists": {
                "items": [{ "id": "a1", "name": "First" }],
                "total": 2, "limit": 1, "offset": 0,
                "next": next, "previous": null
            }
        })),
        ok(json!({
            "artists": {
                "items": [{ "id": "a2", "name": "Second" }],
                "total": 2, "limit": 1, "offset": 1,
                "next": null, "previous": format!("{BASE_URL}/search?query=kit&type=artist&offset=0&limit=1")
            }
        })),
    ]);
    let spotify = client_with(transport.clone());

    let results = spotify
        .search("kit", &[spotify_web_http::models::SearchType::Artist], 1, 0, "")
        .await
        .expect("search must load");
    let artists: &Page<FullArtist> = results.artists.as_ref().expect("artists must be present");

    let more = spotify
        .next_page_as::<SearchResults, _>(artists)
        .await
        .expect("next search page must load")
        .expect("next search page must exist");
    let more_artists = more.artists.expect("artists must be present");
    assert_eq!(more_artists.items[0].name, "Second");
    assert_eq!(transport.requests()[1].url, next);
}

#[tokio::test]
async fn failure_while_paging_is_an_api_error() {
    let transport = ScriptedTransport::new(vec![status(401)]);
    let spotify = client_with(transport.clone());

    let page = Page::<u32> {
        next_url: Some(format!("{BASE_URL}/items?offset=20&limit=20")),
        ..Page::default()
    };

    let err = spotify
        .next_page(&page)
        .await
        .expect_err("expired token must fail");
    match err {
        SpotifyError::Api(result) => {
            assert_eq!(result.status, 401);
            assert_eq!(result.message, "status 401");
        }
        other => panic!("expected api error, got {other:?}"),
    }
}
