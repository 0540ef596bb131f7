mod common;

use async_trait::async_trait;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use enroller_proxy::{
    CallContext, Csr, EnrollerError, EnrollerService, ProxyService, Result,
};
use std::sync::{Arc, Mutex};

/// Inner enrollment service double. `get_crt` panics: the proxy must route
/// certificate retrieval upstream, never here.
#[derive(Debug)]
struct StubEnroller;

#[async_trait]
impl EnrollerService for StubEnroller {
    async fn health(&self, _ctx: &CallContext) -> bool {
        true
    }

    async fn get_csrs(&self, _ctx: &CallContext) -> Vec<Csr> {
        vec![
            Csr {
                id: 1,
                status: "PENDING".to_string(),
            },
            Csr {
                id: 2,
                status: "APPROVED".to_string(),
            },
        ]
    }

    async fn get_csr_status(&self, _ctx: &CallContext, id: i64) -> Result<Csr> {
        if id == 1 {
            Ok(Csr {
                id: 1,
                status: "PENDING".to_string(),
            })
        } else {
            Err(EnrollerError::CsrNotFound(id))
        }
    }

    async fn get_crt(&self, _ctx: &CallContext, _id: i64) -> Result<Vec<u8>> {
        panic!("get_crt must not delegate to the inner service");
    }
}

/// Stub CA endpoint that records the Authorization header it receives.
fn auth_capture_router(seen: Arc<Mutex<Option<String>>>, body: &'static str) -> Router {
    Router::new().route(
        "/v1/csrs",
        get(move |headers: HeaderMap| {
            let seen = seen.clone();
            async move {
                *seen.lock().unwrap() = headers
                    .get(header::AUTHORIZATION)
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_string);
                body
            }
        }),
    )
}

async fn proxy_against(router: Router) -> ProxyService<StubEnroller> {
    let addr = common::spawn_stub(router).await;
    ProxyService::new(
        StubEnroller,
        &format!("http://{addr}"),
        common::test_ca_pem("Proxy Flow CA").as_bytes(),
    )
    .unwrap()
}

#[tokio::test]
async fn test_get_crt_returns_upstream_bytes_and_forwards_token() {
    common::init();
    let seen = Arc::new(Mutex::new(None));
    let proxy = proxy_against(auth_capture_router(seen.clone(), "CERT_BYTES")).await;

    let ctx = CallContext::with_auth_token("tok123");
    let crt = proxy.get_crt(&ctx, 7).await.unwrap();

    assert_eq!(crt, b"CERT_BYTES");
    assert_eq!(seen.lock().unwrap().as_deref(), Some("tok123"));
}

#[tokio::test]
async fn test_get_crt_without_token_is_anonymous() {
    common::init();
    let seen = Arc::new(Mutex::new(None));
    let proxy = proxy_against(auth_capture_router(seen.clone(), "CERT_BYTES")).await;

    let crt = proxy.get_crt(&CallContext::new(), 7).await.unwrap();

    assert_eq!(crt, b"CERT_BYTES");
    assert_eq!(*seen.lock().unwrap(), None);
}

#[tokio::test]
async fn test_get_crt_upstream_error_carries_status_and_body() {
    common::init();
    let router = Router::new().route(
        "/v1/csrs",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
    );
    let proxy = proxy_against(router).await;

    let err = proxy.get_crt(&CallContext::new(), 7).await.unwrap_err();
    match err {
        EnrollerError::Upstream { status, message } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(message, "upstream exploded");
        }
        other => panic!("expected upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_crt_upstream_json_error_body_is_extracted() {
    common::init();
    let router = Router::new().route(
        "/v1/csrs",
        get(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({"error": "csr rejected"})),
            )
        }),
    );
    let proxy = proxy_against(router).await;

    let err = proxy.get_crt(&CallContext::new(), 7).await.unwrap_err();
    match err {
        EnrollerError::Upstream { status, message } => {
            assert_eq!(status.as_u16(), 400);
            assert_eq!(message, "csr rejected");
        }
        other => panic!("expected upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_everything_else_delegates_to_inner_service() {
    common::init();
    let proxy = proxy_against(Router::new()).await;
    let ctx = CallContext::new();

    assert!(proxy.health(&ctx).await);

    let csrs = proxy.get_csrs(&ctx).await;
    assert_eq!(csrs.len(), 2);
    assert_eq!(csrs[0].status, "PENDING");

    let csr = proxy.get_csr_status(&ctx, 1).await.unwrap();
    assert_eq!(csr.id, 1);

    let err = proxy.get_csr_status(&ctx, 42).await.unwrap_err();
    assert!(matches!(err, EnrollerError::CsrNotFound(42)));
}

#[tokio::test]
async fn test_construction_fails_on_invalid_ca_bundle() {
    common::init();
    let err = ProxyService::new(StubEnroller, "ca.example.com", b"not a pem").unwrap_err();
    assert!(matches!(err, EnrollerError::Config(_)));
}

#[tokio::test]
async fn test_construction_fails_on_invalid_target() {
    common::init();
    let err = ProxyService::new(
        StubEnroller,
        "http://",
        common::test_ca_pem("Proxy Flow CA").as_bytes(),
    )
    .unwrap_err();
    assert!(matches!(err, EnrollerError::Config(_)));
}
