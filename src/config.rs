use crate::error::{InventoryError, Result};
use serde::{Deserialize, Serialize};
use slide_inventory_common::{Classification, ClassificationRule, Classifier, ReferenceLists};
use std::path::{Path, PathBuf};
use tracing::debug;

/// 分類ルール設定（JSON）
///
/// すべて省略可能。省略したものは組み込み値を使う。
/// `rules` は配列の順に評価される。
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub rules: Option<Vec<ClassificationRule>>,
    pub default_format: Option<String>,
    pub default_extent: Option<String>,
    pub formats: Option<Vec<String>>,
    pub extents: Option<Vec<String>>,
}

impl Config {
    /// 設定を読み込む
    ///
    /// `path` 指定時はそのファイル（存在しなければエラー）、
    /// 未指定なら `~/.config/slide-inventory/rules.json` があれば読み、なければ組み込み値。
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.is_file() {
                    return Err(InventoryError::Config(format!(
                        "rules file not found: {}",
                        path.display()
                    )));
                }
                Self::from_file(path)
            }
            None => match Self::config_path() {
                Some(default_path) if default_path.is_file() => Self::from_file(&default_path),
                _ => {
                    debug!("using built-in classification rules");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading rules file");
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("slide-inventory").join("rules.json"))
    }

    fn validate(&self) -> Result<()> {
        if matches!(&self.formats, Some(list) if list.is_empty()) {
            return Err(InventoryError::Config("`formats` must not be empty".into()));
        }
        if matches!(&self.extents, Some(list) if list.is_empty()) {
            return Err(InventoryError::Config("`extents` must not be empty".into()));
        }
        Ok(())
    }

    /// 既定の分類（一致なしのとき）
    pub fn fallback(&self) -> Classification {
        let builtin = Classification::default();
        Classification {
            format: self.default_format.clone().unwrap_or(builtin.format),
            extent: self.default_extent.clone().unwrap_or(builtin.extent),
        }
    }

    /// ルールをコンパイルして分類器を作る
    pub fn classifier(&self) -> Result<Classifier> {
        let rules = self.rules.clone().unwrap_or_else(ClassificationRule::builtin);
        let classifier = Classifier::new(&rules, self.fallback())?;
        debug!(rules = classifier.rule_count(), "classifier ready");
        Ok(classifier)
    }

    /// ドロップダウン候補
    pub fn reference_lists(&self) -> ReferenceLists {
        let builtin = ReferenceLists::default();
        ReferenceLists {
            formats: self.formats.clone().unwrap_or(builtin.formats),
            extents: self.extents.clone().unwrap_or(builtin.extents),
        }
    }
}
