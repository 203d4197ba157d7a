use webprobe::command_composer::compose_request;
use webprobe::errors::HttpStatusError;
use webprobe::http_service::{HttpClientService, HttpService};

use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

struct NoAuthHeader;

impl Match for NoAuthHeader {
    fn matches(&self, request: &Request) -> bool {
        return request.headers.get("authorization").is_none();
    }
}

#[tokio::test]
async fn get_returns_the_response_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/values"))
        .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
        .mount(&server)
        .await;

    let uri = server.uri();
    let body = tokio::task::spawn_blocking(move || {
        let service = HttpClientService::new();
        service.get(&format!("{}/api/values", uri), None, None).unwrap()
    })
    .await
    .unwrap();

    assert_eq!(body, "hello");
}

#[tokio::test]
async fn basic_auth_is_sent_when_both_credentials_are_set() {
    let server = MockServer::start().await;
    // base64 of "alice:secret"
    Mock::given(method("GET"))
        .and(path("/private"))
        .and(header("Authorization", "Basic YWxpY2U6c2VjcmV0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let body = tokio::task::spawn_blocking(move || {
        let service = HttpClientService::new();
        service
            .get(&format!("{}/private", uri), Some("alice"), Some("secret"))
            .unwrap()
    })
    .await
    .unwrap();

    assert_eq!(body, "ok");
}

#[tokio::test]
async fn a_lone_or_empty_credential_sends_no_auth_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/open"))
        .and(NoAuthHeader)
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(2)
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        let service = HttpClientService::new();
        service.get(&format!("{}/open", uri), Some("alice"), None).unwrap();
        service.get(&format!("{}/open", uri), Some("alice"), Some("")).unwrap();
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn auth_does_not_leak_into_the_following_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/private"))
        .and(header("Authorization", "Basic YWxpY2U6c2VjcmV0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/open"))
        .and(NoAuthHeader)
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        // one service, one shared client for both calls
        let service = HttpClientService::new();
        service
            .get(&format!("{}/private", uri), Some("alice"), Some("secret"))
            .unwrap();
        service.get(&format!("{}/open", uri), None, None).unwrap();
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn post_sends_body_and_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/values"))
        .and(header("Content-Type", "application/json"))
        .and(body_string("{\"id\":1}"))
        .respond_with(ResponseTemplate::new(201).set_body_string("created"))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let body = tokio::task::spawn_blocking(move || {
        let service = HttpClientService::new();
        service
            .post(&format!("{}/api/values", uri), "{\"id\":1}", "application/json", None, None)
            .unwrap()
    })
    .await
    .unwrap();

    assert_eq!(body, "created");
}

#[tokio::test]
async fn delete_hits_the_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/values/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("gone"))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let body = tokio::task::spawn_blocking(move || {
        let service = HttpClientService::new();
        service.delete(&format!("{}/api/values/1", uri), None, None).unwrap()
    })
    .await
    .unwrap();

    assert_eq!(body, "gone");
}

#[tokio::test]
async fn non_success_status_fails_with_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
        .mount(&server)
        .await;

    let uri = server.uri();
    let error = tokio::task::spawn_blocking(move || {
        let service = HttpClientService::new();
        service.get(&format!("{}/gone", uri), None, None).unwrap_err()
    })
    .await
    .unwrap();

    let status_error = error
        .downcast_ref::<HttpStatusError>()
        .expect("an http status error");
    assert_eq!(status_error.status.as_u16(), 404);
    assert_eq!(status_error.body, "not here");
}

#[tokio::test]
async fn a_composed_command_dispatches_end_to_end() {
    let server = MockServer::start().await;
    // base64 of "bob:hunter2"
    Mock::given(method("PUT"))
        .and(path("/api/values/1"))
        .and(header("Authorization", "Basic Ym9iOmh1bnRlcjI="))
        .and(header("Content-Type", "text/plain"))
        .and(body_string("hello"))
        .respond_with(ResponseTemplate::new(200).set_body_string("stored"))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{};bob;hunter2", server.uri());
    let result = tokio::task::spawn_blocking(move || {
        let service = HttpClientService::new();
        let command = compose_request(&url, Some("PUT;api/values/1;text/plain;hello"));
        command.dispatch(&service).unwrap()
    })
    .await
    .unwrap();

    assert_eq!(result, "stored");
}
