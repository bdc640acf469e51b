//! # ヘルスチェックハンドラ
//!
//! ロードバランサーやコンテナオーケストレーターの 死活監視用。
//!
//! ```text
//! GET /health
//! ```

use axum::Json;
use itemservice_shared::HealthResponse;

/// ヘルスチェックエンドポイント
///
/// プロセスが応答可能であることのみを示す。DB 接続は確認しない。
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
