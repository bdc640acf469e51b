//! アイテム API 統合テスト
//!
//! `build_app` で組み立てたルーター全体を、インメモリリポジトリで駆動する。
//! ハンドラ → ユースケース → リポジトリの経路を DB なしで検証する。

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use itemservice_api::{build_app, handler::ItemState, usecase::ItemUseCaseImpl};
use itemservice_domain::item::Item;
use itemservice_infra::mock::MockItemRepository;
use pretty_assertions::assert_eq;
use tower::ServiceExt;

fn create_app(repo: &MockItemRepository) -> Router {
    let usecase = ItemUseCaseImpl::new(Arc::new(repo.clone()));
    build_app(Arc::new(ItemState {
        usecase: Arc::new(usecase),
    }))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_空のリポジトリでは空配列を返す() {
    let repo = MockItemRepository::new();
    let app = create_app(&repo);

    let (status, body) = send(&app, get("/items")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_リポジトリのアイテムがそのまま返る() {
    let repo = MockItemRepository::with_items(vec![
        Item::from_db(1, "A").unwrap(),
        Item::from_db(2, "B").unwrap(),
    ]);
    let app = create_app(&repo);

    let (status, body) = send(&app, get("/items")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!([{ "id": 1, "name": "A" }, { "id": 2, "name": "B" }])
    );
}

#[tokio::test]
async fn test_リポジトリの状態変化が次のリクエストに反映される() {
    let repo = MockItemRepository::new();
    let app = create_app(&repo);

    let (_, before) = send(&app, get("/items")).await;
    repo.add_item(Item::from_db(10, "追加").unwrap());
    let (_, after) = send(&app, get("/items")).await;

    assert_eq!(before, serde_json::json!([]));
    assert_eq!(after, serde_json::json!([{ "id": 10, "name": "追加" }]));
    assert_eq!(repo.call_count(), 2);
}

#[tokio::test]
async fn test_リポジトリ障害時は500のproblem_detailsを返す() {
    let repo = MockItemRepository::with_items(vec![Item::from_db(1, "A").unwrap()]);
    repo.set_failing(true);
    let app = create_app(&repo);

    let (status, body) = send(&app, get("/items")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["type"],
        "https://itemservice.example.com/errors/internal-error"
    );
    assert!(!body.to_string().contains("\"A\""));
}

#[tokio::test]
async fn test_同時リクエストはすべて同じ結果を返す() {
    let repo = MockItemRepository::with_items(vec![
        Item::from_db(1, "A").unwrap(),
        Item::from_db(2, "B").unwrap(),
    ]);
    let app = create_app(&repo);

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move { send(&app, get("/items")).await })
        })
        .collect();

    for handle in handles {
        let (status, body) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(Vec::len), Some(2));
    }
    assert_eq!(repo.call_count(), 16);
}

#[tokio::test]
async fn test_healthはバージョン付きでhealthyを返す() {
    let app = create_app(&MockItemRepository::new());

    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_未定義のパスは404のproblem_detailsを返す() {
    let app = create_app(&MockItemRepository::new());

    let (status, body) = send(&app, get("/items/1")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
}
