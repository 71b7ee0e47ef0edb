//! Slide Inventory Common Library
//!
//! ファイル名からのソートキー抽出・分類ルール・ドロップダウン候補・
//! ワークブック生成など、ファイルシステムに触れない処理をまとめる

pub mod types;
pub mod key;
pub mod classifier;
pub mod vocabulary;
pub mod error;
#[cfg(feature = "excel")]
pub mod export;

pub use types::{FileRecord, InventoryRow};
pub use key::{extract_key, ordering_key, SortKey, FALLBACK_KEY};
pub use classifier::{Classification, ClassificationRule, Classifier};
pub use vocabulary::ReferenceLists;
pub use error::{Error, Result};
