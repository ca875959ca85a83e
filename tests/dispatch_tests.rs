//! Integration tests for the typed dispatch path, against a mocked server.

use aidvine_backend::api::{HelpRequestDraft, InboxQuery, LocationUpdate, ProfileQuery, ProfileUpdate};
use aidvine_backend::{ApiRequest, Backend, Environment, LoginPrompts, Operation, login_channel};

use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn backend(uri: &str) -> (Backend, LoginPrompts) {
    let (notifier, prompts) = login_channel();
    let env = Environment::new(uri, notifier).expect("valid endpoint");
    (Backend::new(env), prompts)
}

fn profile_body() -> serde_json::Value {
    serde_json::json!({
        "username": "ana",
        "fullname": "Ana Ortiz",
        "phone": "+49 30 1234",
    })
}

#[tokio::test]
async fn profile_read_hits_resource_and_decodes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/profile"))
        .and(header("AV-User", "ana"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body()))
        .expect(1)
        .mount(&server)
        .await;

    let (backend, _prompts) = backend(&server.uri());
    backend.env().sign_in_local("ana");

    let outcome = backend.dispatch(&ProfileQuery, Operation::Read).await;
    let profile = outcome.value().expect("profile decoded");
    assert_eq!(profile.username, "ana");
    assert_eq!(profile.fullname, "Ana Ortiz");
    assert_eq!(profile.phone.as_deref(), Some("+49 30 1234"));

    // Read sends no body and, with no parameters, no query string either.
    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert!(requests[0].body.is_empty());
    assert!(requests[0].url.query().is_none());
}

#[tokio::test]
async fn live_mode_never_sends_user_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body()))
        .mount(&server)
        .await;

    let (backend, _prompts) = backend(&server.uri());
    backend.env().sign_in_live("ana");

    let outcome = backend.dispatch(&ProfileQuery, Operation::Read).await;
    assert!(outcome.is_success());

    let requests = server.received_requests().await.expect("recording enabled");
    assert!(requests[0].headers.get("AV-User").is_none());
}

#[tokio::test]
async fn signed_out_session_sends_no_user_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body()))
        .mount(&server)
        .await;

    let (backend, _prompts) = backend(&server.uri());

    let outcome = backend.dispatch(&ProfileQuery, Operation::Read).await;
    assert!(outcome.is_success());

    let requests = server.received_requests().await.expect("recording enabled");
    assert!(requests[0].headers.get("AV-User").is_none());
}

#[tokio::test]
async fn update_sends_json_body_with_content_type() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/profile"))
        .and(header("content-type", "application/json"))
        .and(body_string(r#"{"fullname":"Ana B. Ortiz","phone":null}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body()))
        .expect(1)
        .mount(&server)
        .await;

    let (backend, _prompts) = backend(&server.uri());
    let update = ProfileUpdate {
        fullname: "Ana B. Ortiz".to_string(),
        phone: None,
    };

    let outcome = backend.dispatch(&update, Operation::Update).await;
    assert!(outcome.is_success());
}

#[tokio::test]
async fn bodyless_request_sends_literal_empty_object() {
    let server = MockServer::start().await;

    // ProfileQuery declares no body for any operation, so a body-bearing
    // operation must carry exactly the two bytes `{}`.
    Mock::given(method("PUT"))
        .and(path("/profile"))
        .and(header("content-type", "application/json"))
        .and(body_string("{}"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body()))
        .expect(1)
        .mount(&server)
        .await;

    let (backend, _prompts) = backend(&server.uri());
    let outcome = backend.dispatch(&ProfileQuery, Operation::Update).await;
    assert!(outcome.is_success());
}

#[tokio::test]
async fn delete_maps_to_delete_on_the_wire() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body()))
        .expect(1)
        .mount(&server)
        .await;

    let (backend, _prompts) = backend(&server.uri());
    let outcome = backend.dispatch(&ProfileQuery, Operation::Delete).await;
    assert!(outcome.is_success());
}

#[tokio::test]
async fn create_posts_the_draft_and_decodes_the_stored_entry() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/requests"))
        .and(header("content-type", "application/json"))
        .and(body_string(
            r#"{"title":"Groceries","message":"Could someone pick up milk?"}"#,
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 11,
            "sender": "ana",
            "title": "Groceries",
            "message": "Could someone pick up milk?",
            "created_at": "2026-08-29T09:00:00Z",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (backend, _prompts) = backend(&server.uri());
    backend.env().sign_in_local("ana");

    let draft = HelpRequestDraft {
        title: "Groceries".to_string(),
        message: "Could someone pick up milk?".to_string(),
    };

    let outcome = backend.dispatch(&draft, Operation::Create).await;
    let stored = outcome.value().expect("entry decoded");
    assert_eq!(stored.id, 11);
    assert_eq!(stored.sender, "ana");
}

#[tokio::test]
async fn inbox_read_appends_each_param_once() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/requests"))
        .and(query_param("limit", "2"))
        .and(query_param("before", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": 9,
                "sender": "ben",
                "title": "Groceries",
                "message": "Could someone pick up milk?",
                "created_at": "2026-08-28T10:15:00Z",
            },
            {
                "id": 8,
                "sender": "mia",
                "title": "Lift to the clinic",
                "message": "Thursday morning, anyone?",
                "created_at": "2026-08-27T18:40:00Z",
            },
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let (backend, _prompts) = backend(&server.uri());
    let query = InboxQuery {
        limit: Some(2),
        before: Some(10),
    };

    let outcome = backend.dispatch(&query, Operation::Read).await;
    let entries = outcome.value().expect("inbox decoded");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].sender, "ben");
    assert_eq!(entries[1].id, 8);
}

#[tokio::test]
async fn unauthorized_read_fails_and_prompts_once() {
    let server = MockServer::start().await;

    // The 401 carries a perfectly decodable body; it must still be discarded.
    Mock::given(method("GET"))
        .and(path("/profile"))
        .respond_with(ResponseTemplate::new(401).set_body_json(profile_body()))
        .mount(&server)
        .await;

    let (backend, mut prompts) = backend(&server.uri());
    backend.env().sign_in_local("ana");

    let outcome = backend.dispatch(&ProfileQuery, Operation::Read).await;
    assert!(!outcome.is_success());
    assert!(prompts.try_recv().is_ok());
    assert!(prompts.try_recv().is_err());
}

#[tokio::test]
async fn unauthorized_without_login_flag_stays_quiet() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/location"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let (backend, mut prompts) = backend(&server.uri());
    let ping = LocationUpdate {
        latitude: 52.52,
        longitude: 13.405,
    };

    let outcome = backend.dispatch(&ping, Operation::Update).await;
    assert!(!outcome.is_success());
    assert!(prompts.try_recv().is_err());
}

#[tokio::test]
async fn malformed_body_fails_without_prompt() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let (backend, mut prompts) = backend(&server.uri());

    let outcome = backend.dispatch(&ProfileQuery, Operation::Read).await;
    assert!(!outcome.is_success());
    assert!(prompts.try_recv().is_err());
}

/// A request whose `Serialize` impl always refuses.
struct Opaque;

impl serde::Serialize for Opaque {
    fn serialize<S: serde::Serializer>(
        &self,
        _serializer: S,
    ) -> Result<S::Ok, S::Error> {
        Err(<S::Error as serde::ser::Error>::custom("not representable"))
    }
}

impl ApiRequest for Opaque {
    type Response = serde_json::Value;

    fn resource(&self) -> &str {
        "opaque"
    }

    fn requests_login(&self, _operation: Operation) -> bool {
        true
    }
}

#[tokio::test]
async fn unencodable_request_fails_before_any_network_attempt() {
    let server = MockServer::start().await;

    let (backend, mut prompts) = backend(&server.uri());
    backend.env().sign_in_local("ana");

    let outcome = backend.dispatch(&Opaque, Operation::Update).await;
    assert!(!outcome.is_success());

    // Abandoned before dispatch: nothing reached the server, and the login
    // flag plays no part since there was no 401.
    let requests = server.received_requests().await.expect("recording enabled");
    assert!(requests.is_empty());
    assert!(prompts.try_recv().is_err());
}

#[tokio::test]
async fn transport_failure_is_a_plain_failure() {
    // Port 1 refuses the connection; no server involved.
    let (backend, mut prompts) = backend("http://127.0.0.1:1");

    let outcome = backend.dispatch(&ProfileQuery, Operation::Read).await;
    assert!(!outcome.is_success());
    assert!(prompts.try_recv().is_err());
}

#[tokio::test]
async fn location_ack_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/location"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "accepted": true,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (backend, _prompts) = backend(&server.uri());
    let ping = LocationUpdate {
        latitude: 52.52,
        longitude: 13.405,
    };

    let outcome = backend.dispatch(&ping, Operation::Update).await;
    let ack = outcome.value().expect("ack decoded");
    assert!(ack.accepted);
}
