//! # Item Service エラー定義
//!
//! Item Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! アイテム一覧 API が返しうるエラーは内部エラーのみであり、
//! 詳細はログにのみ出力し、レスポンスには固定の Problem Details を返す。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use itemservice_infra::InfraError;
use itemservice_shared::ErrorResponse;
use thiserror::Error;

/// Item Service で発生するエラー
#[derive(Debug, Error)]
pub enum CoreError {
    /// データベースエラー
    #[error("データベースエラー: {0}")]
    Database(#[from] InfraError),
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        match &self {
            CoreError::Database(e) => {
                tracing::error!(
                    error.kind = "database",
                    span_trace = %e.span_trace(),
                    "データベースエラー: {}",
                    e
                );
            }
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal_error()),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    async fn into_parts(error: CoreError) -> (StatusCode, ErrorResponse) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_databaseエラーは500と固定のproblem_detailsになる() {
        let error = CoreError::from(InfraError::unexpected("接続断"));

        let (status, body) = into_parts(error).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, ErrorResponse::internal_error());
    }

    #[tokio::test]
    async fn test_databaseエラーの詳細はレスポンスに含まれない() {
        let error = CoreError::from(InfraError::unexpected("items(id=0): secret row"));

        let (_, body) = into_parts(error).await;

        assert!(!body.detail.contains("secret"));
        assert!(!body.detail.contains("items"));
    }
}
