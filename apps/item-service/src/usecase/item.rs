//! アイテム一覧ユースケース

use std::sync::Arc;

use async_trait::async_trait;
use itemservice_domain::item::Item;
use itemservice_infra::repository::ItemRepository;

use super::ItemUseCase;
use crate::error::CoreError;

/// アイテム一覧ユースケース
pub struct ItemUseCaseImpl {
    item_repository: Arc<dyn ItemRepository>,
}

impl ItemUseCaseImpl {
    pub fn new(item_repository: Arc<dyn ItemRepository>) -> Self {
        Self { item_repository }
    }
}

#[async_trait]
impl ItemUseCase for ItemUseCaseImpl {
    #[tracing::instrument(skip_all)]
    async fn find_all(&self) -> Result<Vec<Item>, CoreError> {
        let items = self.item_repository.find_all().await?;
        tracing::debug!(count = items.len(), "アイテム一覧を取得しました");
        Ok(items)
    }
}
