//! # アイテムハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /items` - 全アイテムの一覧
//!
//! レスポンスボディはアイテムの JSON 配列そのもの（エンベロープなし）。
//!
//! ```json
//! [{"id":1,"name":"A"},{"id":2,"name":"B"}]
//! ```

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use itemservice_domain::item::Item;
use serde::{Deserialize, Serialize};

use crate::{error::CoreError, usecase::ItemUseCase};

/// アイテム API の共有状態
///
/// ユースケースは起動時に一度だけ注入され、以降は読み取り専用で共有される。
pub struct ItemState {
    pub usecase: Arc<dyn ItemUseCase>,
}

/// アイテム DTO
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemDto {
    pub id:   i64,
    pub name: String,
}

impl From<&Item> for ItemDto {
    fn from(item: &Item) -> Self {
        Self {
            id:   item.id().as_i64(),
            name: item.name().as_str().to_string(),
        }
    }
}

/// GET /items
///
/// 全アイテムをユースケースが返した順序のまま返す。
///
/// ## レスポンス
///
/// - `200 OK`: アイテムの配列（0 件の場合は `[]`）
/// - `500 Internal Server Error`: 取得失敗（アイテムデータは含まない）
#[tracing::instrument(skip_all)]
pub async fn list_items(
    State(state): State<Arc<ItemState>>,
) -> Result<impl IntoResponse, CoreError> {
    let items = state.usecase.find_all().await?;

    let dtos: Vec<ItemDto> = items.iter().map(ItemDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
