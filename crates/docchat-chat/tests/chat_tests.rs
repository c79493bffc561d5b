use docchat_chat::{BackendClient, ChatSession, Role, CONNECTION_ERROR_MESSAGE, GREETING};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn answer_becomes_an_assistant_turn() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/perguntar"))
        .and(body_partial_json(serde_json::json!({"texto": "Qual o prazo?"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({"resposta": "O prazo é de dez dias."}),
        ))
        .mount(&server)
        .await;

    let mut session = ChatSession::new(BackendClient::new(format!("{}/perguntar", server.uri())));
    let reply = session.submit("Qual o prazo?").await;

    assert_eq!(reply, "O prazo é de dez dias.");
    let turns = session.transcript().turns();
    assert_eq!(turns.len(), 3, "greeting + user + assistant");
    assert_eq!(turns[0].text, GREETING);
    assert_eq!(turns[1].role, Role::User);
    assert_eq!(turns[2].role, Role::Assistant);
    assert_eq!(turns[2].text, "O prazo é de dez dias.");
}

#[tokio::test]
async fn http_500_surfaces_as_a_visible_turn_and_the_session_continues() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/perguntar"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut session = ChatSession::new(BackendClient::new(format!("{}/perguntar", server.uri())));
    let reply = session.submit("primeira pergunta").await;
    assert!(reply.starts_with(CONNECTION_ERROR_MESSAGE));

    // Session still accepts input afterwards.
    let reply2 = session.submit("segunda pergunta").await;
    assert!(reply2.starts_with(CONNECTION_ERROR_MESSAGE));
    assert_eq!(session.transcript().turns().len(), 5);
}

#[tokio::test]
async fn unreachable_service_surfaces_as_a_visible_turn() {
    let mut session = ChatSession::new(BackendClient::new("http://127.0.0.1:1/perguntar"));
    let reply = session.submit("oi").await;
    assert!(reply.starts_with(CONNECTION_ERROR_MESSAGE));
    assert_eq!(
        session.transcript().last().map(|t| t.role),
        Some(Role::Assistant)
    );
}

#[tokio::test]
async fn error_payload_with_200_becomes_the_apology_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/perguntar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({"erro": "Ocorreu um erro durante o processamento: ..."}),
        ))
        .mount(&server)
        .await;

    let mut session = ChatSession::new(BackendClient::new(format!("{}/perguntar", server.uri())));
    let reply = session.submit("pergunta").await;
    assert_eq!(reply, docchat_chat::client::NO_ANSWER_FALLBACK);
}
