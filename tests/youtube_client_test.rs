//! Pipeline tests against a mock Data API.
//!
//! Exercises membership resolution and duration aggregation through the real
//! [`YouTubeClient`], checking the exact requests issued.

mod common;

use std::time::Duration;

use assert_matches::assert_matches;
use common::{client_for, ids, mount_durations, mount_playlist, API_KEY};
use playtime::youtube::{aggregate_durations, resolve_membership, YouTubeClient};
use playtime_common::{Error, PlaylistId, VideoId};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn playlist(id: &str) -> PlaylistId {
    PlaylistId::new(id).unwrap()
}

fn video_ids(raw: &[String]) -> Vec<VideoId> {
    raw.iter().map(|s| VideoId::from(s.as_str())).collect()
}

// ---------------------------------------------------------------------------
// Membership
// ---------------------------------------------------------------------------

#[tokio::test]
async fn membership_follows_every_page_in_order() {
    let server = MockServer::start().await;
    let pages = vec![ids("a", 50), ids("b", 50), ids("c", 13)];
    mount_playlist(&server, "PLpages", &pages).await;

    let client = client_for(&server);
    let resolved = resolve_membership(&client, &playlist("PLpages"))
        .await
        .unwrap();

    let expected: Vec<String> = pages.concat();
    let resolved: Vec<String> = resolved.into_iter().map(String::from).collect();
    assert_eq!(resolved.len(), 113);
    assert_eq!(resolved, expected);
}

#[tokio::test]
async fn membership_single_partial_page() {
    let server = MockServer::start().await;
    mount_playlist(&server, "PLshort", &[ids("v", 3)]).await;

    let resolved = resolve_membership(&client_for(&server), &playlist("PLshort"))
        .await
        .unwrap();
    assert_eq!(resolved.len(), 3);
}

#[tokio::test]
async fn empty_continuation_token_ends_pagination() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [{ "contentDetails": { "videoId": "only" } }],
            "nextPageToken": ""
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resolved = resolve_membership(&client_for(&server), &playlist("PLx"))
        .await
        .unwrap();
    assert_eq!(resolved, vec![VideoId::from("only")]);
}

#[tokio::test]
async fn forbidden_is_upstream_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "error": { "code": 403, "message": "API key not valid" }
        })))
        .mount(&server)
        .await;

    let err = resolve_membership(&client_for(&server), &playlist("PLx"))
        .await
        .unwrap_err();
    assert_matches!(err, Error::Upstream(ref cause) if cause.contains("403"));
    assert_eq!(err.user_message(), "Error fetching playlist duration");
}

#[tokio::test]
async fn failure_on_later_page_discards_earlier_pages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .and(wiremock::matchers::query_param("pageToken", "token-1"))
        .respond_with(ResponseTemplate::new(500))
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::playlist_page_body(&ids("v", 50), Some("token-1"))),
        )
        .mount(&server)
        .await;

    let result = resolve_membership(&client_for(&server), &playlist("PLx")).await;
    assert_matches!(result, Err(Error::Upstream(_)));
}

#[tokio::test]
async fn malformed_body_is_upstream_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = resolve_membership(&client_for(&server), &playlist("PLx"))
        .await
        .unwrap_err();
    assert_matches!(err, Error::Upstream(ref cause) if cause.contains("parse"));
}

#[tokio::test]
async fn deadline_expiry_is_upstream_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::playlist_page_body(&ids("v", 1), None))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client =
        YouTubeClient::with_options(API_KEY.into(), server.uri(), Duration::from_millis(200))
            .unwrap();

    let started = std::time::Instant::now();
    let result = resolve_membership(&client, &playlist("PLslow")).await;
    assert_matches!(result, Err(Error::Upstream(_)));
    assert!(started.elapsed() < Duration::from_secs(4));
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fifty_one_ids_issue_two_batches() {
    let server = MockServer::start().await;
    let raw = ids("v", 51);
    let durations: Vec<String> = (0..51).map(|i| format!("PT{}S", i + 1)).collect();
    // Each batch mock expects exactly one request.
    mount_durations(&server, &raw, &durations).await;

    let fetched = aggregate_durations(&client_for(&server), &video_ids(&raw))
        .await
        .unwrap();
    assert_eq!(fetched, durations);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
}

#[tokio::test]
async fn no_ids_no_requests() {
    let server = MockServer::start().await;
    let fetched = aggregate_durations(&client_for(&server), &[]).await.unwrap();
    assert!(fetched.is_empty());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn failing_batch_aborts_aggregation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let raw = ids("v", 120);
    let result = aggregate_durations(&client_for(&server), &video_ids(&raw)).await;
    assert_matches!(result, Err(Error::Upstream(_)));
}
