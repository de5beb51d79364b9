use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use serde::Deserialize;
use tracing::info;
use warp::http::StatusCode;
use warp::Filter;

use crate::error::{LensError, Result};
use crate::LogLens;

const MISSING_QUERY: &str = "Missing query parameter 'q'";

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

pub struct SearchServer {
    lens: Arc<LogLens>,
}

impl SearchServer {
    pub fn new(lens: Arc<LogLens>) -> Self {
        Self { lens }
    }

    /// Serves until `shutdown` resolves.
    pub async fn run<F>(&self, addr: SocketAddr, shutdown: F) -> Result<()>
    where
    F: Future<Output = ()> + Send + 'static,
    {
        let (bound, server) = warp::serve(routes(self.lens.clone()))
        .try_bind_with_graceful_shutdown(addr, shutdown)
        .map_err(|source| LensError::Bind { addr, source })?;

        info!("Search API listening on {}", bound);
        server.await;
        Ok(())
    }
}

/// GET /search?q=<terms>
pub fn routes(lens: Arc<LogLens>) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let cors = warp::cors()
    .allow_any_origin()
    .allow_methods(vec!["GET"]);

    warp::get()
    .and(warp::path("search"))
    .and(warp::path::end())
    .and(warp::query::<SearchParams>())
    .and(with_lens(lens))
    .and_then(handle_search)
    .with(cors)
    .with(warp::trace::request())
}

async fn handle_search(params: SearchParams, lens: Arc<LogLens>) -> std::result::Result<impl warp::Reply, Infallible> {
    // Absent and empty `q` are rejected here; whitespace goes to the engine
    let reply = match params.q.as_deref() {
        Some(q) if !q.is_empty() => {
            let response = lens.search(q);
            warp::reply::with_status(warp::reply::json(&response), StatusCode::OK)
        }
        _ => warp::reply::with_status(
            warp::reply::json(&serde_json::json!({ "error": MISSING_QUERY })),
            StatusCode::BAD_REQUEST,
        ),
    };
    Ok(reply)
}

fn with_lens(lens: Arc<LogLens>) -> impl Filter<Extract = (Arc<LogLens>,), Error = Infallible> + Clone {
    warp::any().map(move || lens.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Record, SearchResponse};

    fn lens() -> Arc<LogLens> {
        let mut lens = LogLens::new();
        lens.ingest(vec![
            Record::new("e1", "disk failure", "100"),
            Record::new("e2", "disk ok", "200"),
        ]);
        Arc::new(lens)
    }

    #[tokio::test]
    async fn search_returns_ranked_json() {
        let res = warp::test::request()
        .method("GET")
        .path("/search?q=disk")
        .reply(&routes(lens()))
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(body["count"], 2);
        assert_eq!(body["results"][0]["EventId"], "e2");
        assert_eq!(body["results"][1]["EventId"], "e1");
        assert!(body["time_ms"].is_u64());
    }

    #[tokio::test]
    async fn and_query_over_http() {
        let res = warp::test::request()
        .path("/search?q=disk%20failure")
        .reply(&routes(lens()))
        .await;

        let body: SearchResponse = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(body.count, 1);
        assert_eq!(body.results[0].event_id, "e1");
    }

    #[tokio::test]
    async fn missing_or_empty_query_is_bad_request() {
        for path in ["/search", "/search?q=", "/search?other=1"] {
            let res = warp::test::request().path(path).reply(&routes(lens())).await;
            assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{}", path);
            let body: serde_json::Value = serde_json::from_slice(res.body()).unwrap();
            assert_eq!(body["error"], MISSING_QUERY);
        }
    }

    #[tokio::test]
    async fn whitespace_query_is_empty_result() {
        let res = warp::test::request()
        .path("/search?q=%20%20")
        .reply(&routes(lens()))
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: SearchResponse = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(body.count, 0);
        assert!(body.results.is_empty());
    }

    #[tokio::test]
    async fn unknown_path_is_rejected() {
        let res = warp::test::request().path("/records").reply(&routes(lens())).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
