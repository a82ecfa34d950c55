//! The reqwest transport against a local mock server.
//!
//! `mockito` serves each route on a random loopback port and checks the
//! method, path, headers and JSON body it received.

use mockito::{Matcher, Server};
use placeholder_cli::{ApiClient, ApiError, Config, Post, ReqwestTransport, ResourceKind};
use serde_json::json;
use std::net::TcpListener;

fn client(base_url: &str) -> ApiClient {
    // keep loopback traffic away from any proxy set in the environment
    let http = reqwest::blocking::Client::builder().no_proxy().build().unwrap();
    ApiClient::with_transport(Config::new(base_url), ReqwestTransport::from_client(http))
}

#[test]
fn create_post_sends_json_and_decodes_reply() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/posts")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"title": "title", "body": "body", "userId": 5})))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"title":"title","body":"body","userId":5,"id":101}"#)
        .create();

    let post = Post {
        title: "title".into(),
        body: "body".into(),
        id: None,
        user_id: Some(5),
    };
    let created = client(&server.url()).create_post(&post).unwrap();
    assert_eq!(
        created,
        json!({"title": "title", "body": "body", "userId": 5, "id": 101})
    );
    mock.assert();
}

#[test]
fn update_post_puts_full_record() {
    let mut server = Server::new();
    let mock = server
        .mock("PUT", "/posts/1")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"title": "t", "body": "b"})))
        .with_status(200)
        .with_body(r#"{"title":"t","body":"b","id":1}"#)
        .create();

    let post = Post {
        title: "t".into(),
        body: "b".into(),
        id: None,
        user_id: None,
    };
    let updated = client(&server.url()).update_post("1", &post).unwrap();
    assert_eq!(updated["id"], 1);
    mock.assert();
}

#[test]
fn not_found_carries_reason_phrase() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/comments/505")
        .with_status(404)
        .with_body("{}")
        .create();

    let err = client(&server.url())
        .fetch(ResourceKind::Comment, "505")
        .unwrap_err();
    assert_eq!(err.message(), "Failed to fetch comment 505.");
    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.reason(), Some("Not Found"));
    mock.assert();
}

#[test]
fn delete_over_the_wire() {
    let mut server = Server::new();
    let mock = server
        .mock("DELETE", "/posts/6")
        .with_status(200)
        .with_body("{}")
        .create();

    let msg = client(&server.url()).delete_post("6").unwrap();
    assert_eq!(msg, "Post 6 deleted successfully.");
    mock.assert();
}

#[test]
fn empty_body_on_created_explains_itself() {
    let mut server = Server::new();
    let mock = server.mock("POST", "/posts").with_status(201).create();

    let post = Post {
        title: "t".into(),
        body: "b".into(),
        id: None,
        user_id: None,
    };
    let err = client(&server.url()).create_post(&post).unwrap_err();
    assert!(matches!(err, ApiError::Decode { status_code: 201, .. }));
    let record = err.to_json();
    assert_eq!(record["error"], "Failed to create post.");
    assert!(record["reason"]
        .as_str()
        .unwrap()
        .starts_with("invalid JSON body"));
    mock.assert();
}

#[test]
fn closed_port_is_a_transport_fault() {
    // bind then drop to get a port nobody listens on
    let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
    let err = client(&format!("http://{}", addr)).list_all().unwrap_err();
    assert!(matches!(err, ApiError::Transport { .. }));
    assert_eq!(err.message(), "Failed to fetch data for all users.");
    assert_eq!(err.status_code(), None);
    assert!(err.to_json()["reason"].is_string());
}
