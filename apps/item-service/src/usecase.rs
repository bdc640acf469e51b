//! # ユースケース層
//!
//! Item Service のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **トレイトベースの設計**: ハンドラはトレイト経由で呼び出し、テストではスタブに差し替える
//! - **依存性注入**: リポジトリを `Arc<dyn Trait>` で外部から注入

pub mod item;

use async_trait::async_trait;
use itemservice_domain::item::Item;
pub use item::ItemUseCaseImpl;

use crate::error::CoreError;

/// アイテムユースケーストレイト
///
/// ハンドラから見た唯一の依存先。複数リクエストから同時に参照される。
#[async_trait]
pub trait ItemUseCase: Send + Sync {
    /// 全アイテムを取得する
    ///
    /// 並び順はリポジトリが返した順序をそのまま維持する。
    async fn find_all(&self) -> Result<Vec<Item>, CoreError>;
}
