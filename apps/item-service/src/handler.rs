//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、取得処理はユースケース層に委譲

pub mod health;
pub mod item;

use axum::{Json, http::StatusCode, response::IntoResponse};
pub use health::health_check;
pub use item::{ItemDto, ItemState, list_items};
use itemservice_shared::ErrorResponse;

/// 未定義ルートのフォールバック
///
/// axum デフォルトの空ボディ 404 ではなく、Problem Details を返す。
pub async fn fallback() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::not_found("指定されたパスは存在しません")),
    )
}
