//! # リポジトリ実装
//!
//! - **依存性逆転**: ユースケース層はトレイトにのみ依存する
//! - **テスタビリティ**: トレイト経由でモック可能

pub mod item_repository;

pub use item_repository::{ItemRepository, PostgresItemRepository};
