#![allow(unused_crate_dependencies)]

use std::time::Duration;

use gateway_config::UpstreamConfig;
use serde_json::json;
use track_api::{TrackApi, TrackApiError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn upstream_config(server: &MockServer) -> UpstreamConfig {
    UpstreamConfig {
        url: server.uri().parse().unwrap(),
        timeout: Duration::from_secs(2),
    }
}

fn catstronauts_track() -> serde_json::Value {
    json!({
        "id": "c_0",
        "thumbnail": "https://res.cloudinary.com/apollographql/image/upload/thumb.jpg",
        "topic": "Cat-stronomy",
        "authorId": "cat-1",
        "title": "Cat-stronomy, an introduction",
        "description": "Curious to learn what Cat-stronomy is all about?",
        "numberOfViews": 163,
        "createdAt": "2018-09-10T07:13:53.020Z",
        "length": 2377,
        "modulesCount": 10
    })
}

#[tokio::test(flavor = "multi_thread")]
async fn tracks_for_home_fetches_the_grid() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tracks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([catstronauts_track()])))
        .mount(&server)
        .await;

    let api = TrackApi::new(&upstream_config(&server)).unwrap();
    let tracks = api.tracks_for_home().await.unwrap();

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].id, "c_0");
    assert_eq!(tracks[0].author_id, "cat-1");
}

#[tokio::test(flavor = "multi_thread")]
async fn track_by_id_decodes_the_full_record() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/track/c_0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catstronauts_track()))
        .mount(&server)
        .await;

    let api = TrackApi::new(&upstream_config(&server)).unwrap();
    let track = api.track("c_0").await.unwrap();

    assert_eq!(track.title, "Cat-stronomy, an introduction");
    assert_eq!(track.topic.as_deref(), Some("Cat-stronomy"));
    assert_eq!(track.number_of_views, Some(163));
    assert_eq!(track.length, Some(2377));
    assert_eq!(track.modules_count, Some(10));
    assert_eq!(track.created_at.as_deref(), Some("2018-09-10T07:13:53.020Z"));
}

#[tokio::test(flavor = "multi_thread")]
async fn module_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/module/l_0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "l_0",
            "trackId": "c_0",
            "title": "Welcome aboard!",
            "length": 188,
            "content": "Welcome to the course",
            "videoUrl": "https://example.com/videos/l_0.mp4"
        })))
        .mount(&server)
        .await;

    let api = TrackApi::new(&upstream_config(&server)).unwrap();
    let module = api.module("l_0").await.unwrap();

    assert_eq!(module.title, "Welcome aboard!");
    assert_eq!(module.video_url.as_deref(), Some("https://example.com/videos/l_0.mp4"));
}

#[tokio::test(flavor = "multi_thread")]
async fn author_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/author/cat-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "cat-1",
            "name": "Henri, le Chat Noir",
            "photo": "https://images.unsplash.com/photo-1442291928580-fb5d0856a8f1"
        })))
        .mount(&server)
        .await;

    let api = TrackApi::new(&upstream_config(&server)).unwrap();
    let author = api.author("cat-1").await.unwrap();

    assert_eq!(author.name, "Henri, le Chat Noir");
}

#[tokio::test(flavor = "multi_thread")]
async fn track_modules_uses_the_nested_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/track/c_0/modules"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "l_0", "title": "Welcome aboard!" },
            { "id": "l_1", "title": "Your first mission" }
        ])))
        .mount(&server)
        .await;

    let api = TrackApi::new(&upstream_config(&server)).unwrap();
    let modules = api.track_modules("c_0").await.unwrap();

    assert_eq!(modules.len(), 2);
    assert_eq!(modules[1].id, "l_1");
    assert!(modules[0].length.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn increment_track_views_issues_a_patch() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/track/c_0/numberOfViews"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "c_0",
            "authorId": "cat-1",
            "title": "Cat-stronomy, an introduction",
            "numberOfViews": 164
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = TrackApi::new(&upstream_config(&server)).unwrap();
    let track = api.increment_track_views("c_0").await.unwrap();

    assert_eq!(track.number_of_views, Some(164));
}

#[tokio::test(flavor = "multi_thread")]
async fn upstream_failure_preserves_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/track/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Track not found"))
        .mount(&server)
        .await;

    let api = TrackApi::new(&upstream_config(&server)).unwrap();
    let error = api.track("missing").await.unwrap_err();

    let (status, body) = error.response_parts().unwrap();
    assert_eq!(status.as_u16(), 404);
    assert_eq!(body, "Track not found");
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_catalog_has_no_response_parts() {
    // Grab an address that stops listening before we use it.
    let server = MockServer::start().await;
    let config = upstream_config(&server);
    drop(server);

    let api = TrackApi::new(&config).unwrap();
    let error = api.tracks_for_home().await.unwrap_err();

    assert!(matches!(error, TrackApiError::Request(_)));
    assert!(error.response_parts().is_none());
}
