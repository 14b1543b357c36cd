//! HTTP surface: `POST /analyze` scores a message against the shared
//! conversation, `GET /health` reports liveness and history size.

use crate::commands::analyze::{analyze_message, AnalyzeRequest, ChatSession};
use crate::config::EngineConfig;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Mutex;
use warp::http::StatusCode;
use warp::{Filter, Reply};

/// Largest accepted request body.
pub(crate) const MAX_BODY_SIZE: u64 = 64 * 1024;

/// The single process-wide conversation. The mutex serializes history appends.
pub type SharedSession = Arc<Mutex<ChatSession>>;

pub fn routes(
    session: SharedSession,
) -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    let with_session = warp::any().map(move || session.clone());

    let analyze = warp::path("analyze")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_SIZE))
        .and(warp::body::json())
        .and(with_session.clone())
        .and_then(handle_analyze);

    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .and(with_session)
        .and_then(handle_health);

    analyze.or(health)
}

async fn handle_analyze(
    request: AnalyzeRequest,
    session: SharedSession,
) -> Result<warp::reply::Response, Infallible> {
    let mut session = session.lock().await;
    match analyze_message(&mut session, request) {
        Ok(response) => {
            tracing::debug!(
                "[Server] Analyzed message #{}: {:?}",
                session.history().len(),
                response.sentiment.label
            );
            Ok(warp::reply::json(&response).into_response())
        }
        Err(e) => {
            tracing::warn!("[Server] Rejected request: {}", e);
            Ok(warp::reply::with_status(
                warp::reply::json(&serde_json::json!({ "error": e })),
                StatusCode::BAD_REQUEST,
            )
            .into_response())
        }
    }
}

async fn handle_health(session: SharedSession) -> Result<impl Reply, Infallible> {
    let messages = session.lock().await.history().len();
    Ok(warp::reply::json(
        &serde_json::json!({ "status": "ok", "messages": messages }),
    ))
}

/// Bind and serve until Ctrl-C.
pub async fn serve(config: &EngineConfig) -> anyhow::Result<()> {
    let addr: SocketAddr = config.socket_addr()?;
    let session: SharedSession = Arc::new(Mutex::new(ChatSession::new()));

    let (bound, server) =
        warp::serve(routes(session)).try_bind_with_graceful_shutdown(addr, async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("[Server] Shutdown signal received");
        })?;

    tracing::info!("[Server] Listening on http://{}", bound);
    server.await;
    tracing::info!("[Server] Stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::responder::JOY_REPLY;
    use serde_json::{json, Value};

    fn fresh() -> SharedSession {
        Arc::new(Mutex::new(ChatSession::new()))
    }

    async fn post(session: &SharedSession, body: Value) -> (StatusCode, Value) {
        let resp = warp::test::request()
            .method("POST")
            .path("/analyze")
            .json(&body)
            .reply(&routes(session.clone()))
            .await;
        let status = resp.status();
        let value = serde_json::from_slice(resp.body()).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn analyze_returns_reply_sentiment_and_overall() {
        let session = fresh();
        let (status, body) = post(
            &session,
            json!({ "message": "I am not disappointed at all, this is great!" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["reply"], JOY_REPLY);
        assert_eq!(body["sentiment"]["emotion"], "joy");
        assert_eq!(body["sentiment"]["intensity"], 1);
        assert_eq!(body["sentiment"]["sarcasm"], false);
        assert_eq!(body["overall"]["trend"], "Mood trend: Not enough data.");
    }

    #[tokio::test]
    async fn history_accumulates_across_requests() {
        let session = fresh();
        for _ in 0..4 {
            post(&session, json!({ "message": "this is terrible, I hate it" })).await;
        }
        let (_, body) = post(&session, json!({ "message": "the worst" })).await;
        assert_eq!(
            body["overall"]["trend"],
            "Mood trend: Strong negative deterioration."
        );
        assert_eq!(body["overall"]["label"], "Negative");
        assert_eq!(session.lock().await.history().len(), 5);
    }

    #[tokio::test]
    async fn blank_message_is_bad_request() {
        let session = fresh();
        let (status, body) = post(&session, json!({ "message": "  " })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Message cannot be empty");
        assert!(session.lock().await.history().is_empty());
    }

    #[tokio::test]
    async fn missing_message_is_rejected() {
        let session = fresh();
        let (status, _) = post(&session, json!({ "text": "hi" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn health_reports_message_count() {
        let session = fresh();
        post(&session, json!({ "message": "hello" })).await;

        let resp = warp::test::request()
            .method("GET")
            .path("/health")
            .reply(&routes(session.clone()))
            .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["messages"], 1);
    }
}
