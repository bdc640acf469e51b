//! # テスト用モックリポジトリ
//!
//! ユースケース・ハンドラのテストで使用するインメモリ実装。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! itemservice-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{
    Arc,
    Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use async_trait::async_trait;
use itemservice_domain::item::Item;

use crate::{error::InfraError, repository::ItemRepository};

// ===== MockItemRepository =====

#[derive(Clone, Default)]
pub struct MockItemRepository {
    items:      Arc<Mutex<Vec<Item>>>,
    fail:       Arc<AtomicBool>,
    call_count: Arc<AtomicUsize>,
}

impl MockItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 初期データ付きで作成する
    pub fn with_items(items: Vec<Item>) -> Self {
        let repo = Self::new();
        for item in items {
            repo.add_item(item);
        }
        repo
    }

    pub fn add_item(&self, item: Item) {
        self.items.lock().unwrap().push(item);
    }

    /// 以降の `find_all` を失敗させるかどうかを切り替える
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// `find_all` が呼ばれた回数
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ItemRepository for MockItemRepository {
    async fn find_all(&self) -> Result<Vec<Item>, InfraError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(InfraError::unexpected("MockItemRepository: 強制エラー"));
        }
        Ok(self.items.lock().unwrap().clone())
    }
}
