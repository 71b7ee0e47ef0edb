//! ファイル名による形式（Format）・寸法（Extent）の分類
//!
//! ルールは上から順に評価し、最初に一致したものを採用する。
//! 並び順そのものが設定の一部なので、`_bw_` と `4x6` の両方を含む
//! ファイル名は先に書かれた `_bw_` のルールで決まる。

use crate::error::{Error, Result};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// 一致なしのときの形式
pub const DEFAULT_FORMAT: &str = "color slide";
/// 一致なしのときの寸法
pub const DEFAULT_EXTENT: &str = "24 x 36mm (35mm/slides)";

/// 組み込みルール（pattern, format, extent）。評価順そのまま。
const BUILTIN_RULES: &[(&str, &str, &str)] = &[
    ("_bw_", "b&w slide", "24 x 36mm (35mm/slides)"),
    ("_neg_", "color negative", "24 x 36mm (35mm/slides)"),
    ("4x6", "color photograph print", "4 x 6 in (print)"),
    ("8x10", "color photograph print", "8 x 10 in (print)"),
];

/// 分類ルール（設定ファイルの1要素）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRule {
    /// 正規表現（大文字小文字は区別しない）
    pub pattern: String,
    pub format: String,
    pub extent: String,
}

impl ClassificationRule {
    pub fn new(pattern: &str, format: &str, extent: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            format: format.to_string(),
            extent: extent.to_string(),
        }
    }

    /// 組み込みルール一覧
    pub fn builtin() -> Vec<Self> {
        BUILTIN_RULES
            .iter()
            .map(|(pattern, format, extent)| Self::new(pattern, format, extent))
            .collect()
    }
}

/// 分類結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub format: String,
    pub extent: String,
}

impl Classification {
    pub fn new(format: &str, extent: &str) -> Self {
        Self {
            format: format.to_string(),
            extent: extent.to_string(),
        }
    }
}

impl Default for Classification {
    fn default() -> Self {
        Self::new(DEFAULT_FORMAT, DEFAULT_EXTENT)
    }
}

/// コンパイル済みのルール列
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<(Regex, Classification)>,
    fallback: Classification,
}

impl Classifier {
    /// ルールをコンパイルする
    ///
    /// 不正な正規表現は [`Error::InvalidPattern`]。
    pub fn new(rules: &[ClassificationRule], fallback: Classification) -> Result<Self> {
        let rules = rules
            .iter()
            .map(|rule| -> Result<(Regex, Classification)> {
                let regex = RegexBuilder::new(&rule.pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| Error::InvalidPattern {
                        pattern: rule.pattern.clone(),
                        reason: e.to_string(),
                    })?;
                Ok((regex, Classification::new(&rule.format, &rule.extent)))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules, fallback })
    }

    /// 組み込みルールと既定値で構築
    pub fn builtin() -> Result<Self> {
        Self::new(&ClassificationRule::builtin(), Classification::default())
    }

    /// 最初に一致したルールの分類を返す（一致なしは既定値）
    pub fn classify(&self, text: &str) -> &Classification {
        self.rules
            .iter()
            .find(|(regex, _)| regex.is_match(text))
            .map(|(_, classification)| classification)
            .unwrap_or(&self.fallback)
    }

    /// 一致なしのときの分類
    pub fn fallback(&self) -> &Classification {
        &self.fallback
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}
