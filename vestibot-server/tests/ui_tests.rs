//! Router-level tests for the web UI, driving the app with a fake chain.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;
use vestibot_chat::chain::RagChain;
use vestibot_chat::chatbot::Chatbot;
use vestibot_chat::prompt::PromptTemplate;
use vestibot_model::MockLlm;
use vestibot_rag::disk::DiskVectorStore;
use vestibot_rag::mock::MockEmbedder;

fn test_chatbot() -> Arc<Chatbot> {
    Arc::new(Chatbot::with_builder(Box::new(|| {
        Box::pin(async {
            let store =
                DiskVectorStore::open("./unused", Arc::new(MockEmbedder::new(2, |_| vec![1.0, 0.0])));
            RagChain::build(
                Arc::new(store),
                Arc::new(MockLlm::new(|_| "resposta de teste".to_string())),
                PromptTemplate::new("Portuguese"),
                4,
            )
        })
    })))
}

#[tokio::test]
async fn submitting_a_question_appends_to_the_transcript() {
    let app = vestibot_server::router(test_chatbot());

    let response = app
        .clone()
        .oneshot(
            Request::post("/ask")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("question=Quando+abrem+as+inscricoes%3F"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response =
        app.oneshot(Request::get("/").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let page = String::from_utf8(body.to_vec()).unwrap();
    assert!(page.contains("Quando abrem as inscricoes?"));
    assert!(page.contains("resposta de teste"));
}

#[tokio::test]
async fn blank_questions_are_ignored() {
    let app = vestibot_server::router(test_chatbot());

    let response = app
        .clone()
        .oneshot(
            Request::post("/ask")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("question=++"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response =
        app.oneshot(Request::get("/").body(Body::empty()).unwrap()).await.unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let page = String::from_utf8(body.to_vec()).unwrap();
    assert!(!page.contains("class=\"msg"));
}
