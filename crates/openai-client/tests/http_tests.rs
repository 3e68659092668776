//! HTTP-level tests for openai-client against a local mock server.

use openai_client::{OpenAiClient, OpenAiConfig};
use quote_core::{AssistantError, CompletionClient, FilePurpose, FileStore, Message};
use serde_json::json;
use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> OpenAiClient {
    let config = OpenAiConfig::builder()
        .api_key("sk-test")
        .api_url(server.uri())
        .build();
    OpenAiClient::new(config).unwrap()
}

fn completion_body(content: serde_json::Value) -> serde_json::Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "gpt-4.1",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content, "refusal": null},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15}
    })
}

#[tokio::test]
async fn test_chat_completion_request_shape() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-4.1",
            "messages": [
                {"role": "system", "content": "Você é um especialista"},
                {"role": "user", "content": "Qual o material?"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(json!("Aço 1045"))))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let completion = client
        .create_completion(&[
            Message::system("Você é um especialista"),
            Message::user("Qual o material?"),
        ])
        .await
        .unwrap();

    assert_eq!(completion.first_content(), Some("Aço 1045"));
    assert_eq!(completion.id, "chatcmpl-123");
    assert_eq!(completion.usage.unwrap().total_tokens, 15);
}

#[tokio::test]
async fn test_chat_completion_null_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(json!(null))))
        .mount(&server)
        .await;

    let completion = client_for(&server)
        .create_completion(&[Message::user("hi")])
        .await
        .unwrap();
    assert_eq!(completion.first_content(), None);
}

#[tokio::test]
async fn test_api_error_is_decoded() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {
                "message": "Incorrect API key provided",
                "type": "invalid_request_error",
                "code": "invalid_api_key"
            }
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .create_completion(&[Message::user("hi")])
        .await
        .unwrap_err();

    match err {
        AssistantError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Incorrect API key provided");
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_api_error_raw_body_kept() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .create_completion(&[Message::user("hi")])
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AssistantError::Api { status: 502, ref message } if message == "Bad Gateway"
    ));
}

#[tokio::test]
async fn test_upload_returns_provider_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/files"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_string_contains("user_data"))
        .and(body_string_contains("desenho-123.pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "file-XyZ789",
            "object": "file",
            "bytes": 11,
            "created_at": 1700000000,
            "filename": "desenho-123.pdf",
            "purpose": "user_data"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = std::env::temp_dir().join(format!("openai-client-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let file = dir.join("desenho-123.pdf");
    std::fs::write(&file, b"%PDF-1.4 ok").unwrap();

    let stored = client_for(&server)
        .upload_file(&file, FilePurpose::UserData)
        .await
        .unwrap();

    assert_eq!(stored.id, "file-XyZ789");
    assert_eq!(stored.filename, "desenho-123.pdf");

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_upload_missing_file_is_io_error() {
    let server = MockServer::start().await;

    let err = client_for(&server)
        .upload_file(
            std::path::Path::new("/definitely/not/here.pdf"),
            FilePurpose::UserData,
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AssistantError::Io(_)));
}
