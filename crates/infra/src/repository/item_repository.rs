//! # ItemRepository
//!
//! アイテム一覧の取得を担当するリポジトリ。
//!
//! 読み取り専用。作成・更新・削除はこのサービスの責務外。

use async_trait::async_trait;
use itemservice_domain::item::Item;
use sqlx::{FromRow, PgPool};

use crate::error::InfraError;

/// アイテムリポジトリトレイト
///
/// 複数リクエストから同時に参照されるため `Send + Sync` を要求する。
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// 全アイテムを取得する
    async fn find_all(&self) -> Result<Vec<Item>, InfraError>;
}

/// `items` テーブルの行
#[derive(Debug, FromRow)]
struct ItemRow {
    id:   i64,
    name: String,
}

impl TryFrom<ItemRow> for Item {
    type Error = InfraError;

    fn try_from(row: ItemRow) -> Result<Self, Self::Error> {
        Item::from_db(row.id, &row.name)
            .map_err(|e| InfraError::unexpected(format!("items(id={}): {e}", row.id)))
    }
}

/// PostgreSQL 実装の ItemRepository
#[derive(Debug, Clone)]
pub struct PostgresItemRepository {
    pool: PgPool,
}

impl PostgresItemRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for PostgresItemRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Item>, InfraError> {
        let rows: Vec<ItemRow> = sqlx::query_as(
            r#"
            SELECT id, name
            FROM items
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Item::try_from).collect()
    }
}
