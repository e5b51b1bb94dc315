use dynect_client::{Credentials, DynClient, DynError, PollConfig, Session};
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "abc123token";

fn client_for(server: &MockServer, poll: PollConfig) -> DynClient {
    DynClient::builder()
        .base_url(format!("{}/REST/", server.uri()))
        .poll(poll)
        .build()
        .unwrap()
}

fn fast_poll() -> PollConfig {
    PollConfig::new().interval(Duration::from_millis(10))
}

fn success(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "status": "success",
        "data": data,
        "job_id": 1,
        "msgs": [{"INFO": "ok", "LVL": "INFO", "ERR_CD": null, "SOURCE": "API-B"}]
    }))
}

fn incomplete(job_id: u64) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "status": "incomplete",
        "data": null,
        "job_id": job_id,
        "msgs": [{"INFO": "job queued", "LVL": "INFO", "ERR_CD": null, "SOURCE": "API-B"}]
    }))
}

fn failure(info: &str) -> ResponseTemplate {
    ResponseTemplate::new(400).set_body_json(json!({
        "status": "failure",
        "data": {},
        "job_id": 7,
        "msgs": [
            {"INFO": info, "LVL": "ERROR", "ERR_CD": "INVALID_DATA", "SOURCE": "BLL"},
            {"INFO": "detail: second message", "LVL": "INFO", "ERR_CD": null, "SOURCE": "API-B"}
        ]
    }))
}

#[tokio::test]
async fn test_login_returns_session_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/REST/Session/"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "customer_name": "acme",
            "user_name": "alice",
            "password": "pw"
        })))
        .respond_with(success(json!({"token": TOKEN, "version": "3.7.0"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, fast_poll());
    let session = client
        .session()
        .login(&Credentials::new("acme", "alice", "pw"))
        .await
        .unwrap();

    assert_eq!(session.token(), TOKEN);

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("Auth-Token").is_none());
}

#[tokio::test]
async fn test_login_failure_surfaces_messages() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/REST/Session/"))
        .respond_with(failure("login: Credentials you entered did not match"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, fast_poll());
    let err = client
        .session()
        .login(&Credentials::new("acme", "alice", "wrong"))
        .await
        .unwrap_err();

    match err {
        DynError::Api { status, messages } => {
            assert_eq!(status, "failure");
            assert_eq!(messages.len(), 2);
            assert_eq!(
                messages[0].info.as_deref(),
                Some("login: Credentials you entered did not match")
            );
            assert_eq!(messages[0].error_code.as_deref(), Some("INVALID_DATA"));
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_login_without_token_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/REST/Session/"))
        .respond_with(success(json!({"version": "3.7.0"})))
        .mount(&server)
        .await;

    let client = client_for(&server, fast_poll());
    let err = client
        .session()
        .login(&Credentials::new("acme", "alice", "pw"))
        .await
        .unwrap_err();

    assert!(matches!(err, DynError::MissingToken));
}

#[tokio::test]
async fn test_incomplete_jobs_are_polled_until_success() {
    let server = MockServer::start().await;
    let polls = 3;

    Mock::given(method("POST"))
        .and(path("/REST/ZoneNoteReport/"))
        .respond_with(incomplete(555))
        .expect(1)
        .mount(&server)
        .await;

    // Mounted first, so it wins while it still has uses left
    Mock::given(method("GET"))
        .and(path("/REST/Job/555/"))
        .and(header("Auth-Token", TOKEN))
        .respond_with(incomplete(555))
        .up_to_n_times(polls - 1)
        .expect(polls - 1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/REST/Job/555/"))
        .and(header("Auth-Token", TOKEN))
        .respond_with(success(json!([{
            "zone": "example.com",
            "user_name": "alice",
            "type": "publish",
            "note": "final payload\n",
            "timestamp": "1000000000"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let session = Session::new(client_for(&server, fast_poll()), TOKEN);
    let notes = session.zone_notes("example.com").send().await.unwrap();

    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].trimmed_note(), "final payload");

    let job_polls = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path() == "/REST/Job/555/")
        .count();
    assert_eq!(job_polls, polls as usize);
}

#[tokio::test]
async fn test_poll_ceiling_returns_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/REST/NodeList/example.com/"))
        .respond_with(incomplete(42))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/REST/Job/42/"))
        .respond_with(incomplete(42))
        .expect(2)
        .mount(&server)
        .await;

    let session = Session::new(client_for(&server, fast_poll().max_attempts(2)), TOKEN);
    let err = session.node_list("example.com").await.unwrap_err();

    match err {
        DynError::JobTimeout { job_id, attempts } => {
            assert_eq!(job_id, "42");
            assert_eq!(attempts, 2);
        }
        other => panic!("expected job timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn test_job_failure_after_polling_is_terminal() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/REST/ZoneNoteReport/"))
        .respond_with(incomplete(9))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/REST/Job/9/"))
        .respond_with(failure("zone: No such zone"))
        .expect(1)
        .mount(&server)
        .await;

    let session = Session::new(client_for(&server, fast_poll()), TOKEN);
    let err = session.zone_notes("missing.com").send().await.unwrap_err();

    assert!(err.is_api_error());
    assert_eq!(err.messages()[0].info.as_deref(), Some("zone: No such zone"));
}

#[tokio::test]
async fn test_note_report_omits_unset_limit() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/REST/ZoneNoteReport/"))
        .and(body_json(json!({"zone": "example.com"})))
        .respond_with(success(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let session = Session::new(client_for(&server, fast_poll()), TOKEN);
    let notes = session.zone_notes("example.com").send().await.unwrap();
    assert!(notes.is_empty());

    let body: Value = server.received_requests().await.unwrap()[0]
        .body_json()
        .unwrap();
    assert!(body.get("limit").is_none());
}

#[tokio::test]
async fn test_note_report_sends_limit() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/REST/ZoneNoteReport/"))
        .and(header("Auth-Token", TOKEN))
        .and(body_json(json!({"zone": "example.com", "limit": 5})))
        .respond_with(success(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let session = Session::new(client_for(&server, fast_poll()), TOKEN);
    session
        .zone_notes("example.com")
        .maybe_limit(Some(5))
        .send()
        .await
        .unwrap();
}

#[tokio::test]
async fn test_node_list_and_logout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/REST/NodeList/example.com/"))
        .and(header("Auth-Token", TOKEN))
        .respond_with(success(json!(["example.com", "www.example.com"])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/REST/Session/"))
        .and(header("Auth-Token", TOKEN))
        .respond_with(success(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let session = Session::new(client_for(&server, fast_poll()), TOKEN);
    let nodes = session.node_list("example.com").await.unwrap();
    assert_eq!(nodes, vec!["example.com", "www.example.com"]);

    session.logout().await.unwrap();
}

#[tokio::test]
async fn test_undecodable_body_is_json_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/REST/NodeList/example.com/"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let session = Session::new(client_for(&server, fast_poll()), TOKEN);
    let err = session.node_list("example.com").await.unwrap_err();
    assert!(matches!(err, DynError::Json(_)));
}
