//! ドロップダウン用の候補リスト
//!
//! 入力規則の参照元として使うだけで、書き込む値を制限するものではない。

const FORMATS: &[&str] = &[
    "color slide",
    "b&w slide",
    "color negative",
    "b&w negative",
    "color photograph print",
    "b&w photograph print",
];

const EXTENTS: &[&str] = &[
    "24 x 36mm (35mm/slides)",
    "2 x 3 in (polaroids)",
    "2.3 x 3.5 polaroids",
    "5 x 5 6x5",
    "4 x 6 in (print)",
    "5 x 7 in (print)",
    "8 x 10 in (print)",
    "8.5 x 11 in (print)",
    "12 x 18 in (print)",
];

/// 形式・寸法の候補
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceLists {
    pub formats: Vec<String>,
    pub extents: Vec<String>,
}

impl Default for ReferenceLists {
    fn default() -> Self {
        Self {
            formats: FORMATS.iter().map(|s| s.to_string()).collect(),
            extents: EXTENTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
