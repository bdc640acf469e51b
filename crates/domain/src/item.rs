//! # アイテム
//!
//! 一覧 API で公開されるアイテムのモデル。
//!
//! アイテムはこのサービスでは読み取り専用であり、作成・更新・削除は行わない。
//! 永続化された行を [`Item::from_db`] で復元し、そのまま一覧として返す。
//!
//! ## 使用例
//!
//! ```rust
//! use itemservice_domain::item::Item;
//!
//! let item = Item::from_db(1, "A")?;
//! assert_eq!(item.id().as_i64(), 1);
//! assert_eq!(item.name().as_str(), "A");
//! # Ok::<(), itemservice_domain::DomainError>(())
//! ```

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// アイテムの一意識別子
///
/// DB の `BIGINT` 主キーに対応する。1 以上の値のみを許可する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct ItemId(i64);

impl ItemId {
    /// 値を検証して ID を作成する
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value < 1 {
            return Err(DomainError::Validation(format!(
                "アイテム ID は 1 以上である必要があります: {value}"
            )));
        }
        Ok(Self(value))
    }

    /// 内部の整数値を取得する
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

define_validated_string! {
    /// アイテム名（値オブジェクト）
    ///
    /// # 不変条件
    ///
    /// - 前後の空白は除去される
    /// - 空文字列は不可
    /// - 255 文字以内
    pub struct ItemName {
        label: "アイテム名",
        max_length: 255,
    }
}

/// アイテム（エンティティ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id:   ItemId,
    name: ItemName,
}

impl Item {
    /// DB の行からアイテムを復元する
    ///
    /// 値の検証はここで行い、不正な行は [`DomainError::Validation`] になる。
    pub fn from_db(id: i64, name: &str) -> Result<Self, DomainError> {
        Ok(Self {
            id:   ItemId::new(id)?,
            name: ItemName::new(name)?,
        })
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &ItemName {
        &self.name
    }
}
