//! # Item Service ドメイン層
//!
//! 商品（アイテム）のドメインモデルを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、外部サービス）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`item`] - アイテムエンティティと値オブジェクト

#[macro_use]
mod macros;

pub mod error;
pub mod item;

pub use error::DomainError;
