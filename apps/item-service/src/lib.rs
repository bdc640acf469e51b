//! # Item Service ライブラリ
//!
//! ハンドラ・ユースケース・ルーター構築を公開する。
//! バイナリ（`main.rs`）と統合テストの両方から利用する。

pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;

use std::sync::Arc;

use axum::{Router, routing::get};
use handler::{ItemState, fallback, health_check, list_items};
use tower_http::trace::TraceLayer;

/// アプリケーションのルーターを構築する
///
/// - `GET /items` - アイテム一覧
/// - `GET /health` - ヘルスチェック
///
/// 未定義のパスは Problem Details 形式の 404 を返す。
pub fn build_app(item_state: Arc<ItemState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/items", get(list_items))
        .with_state(item_state)
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
}
