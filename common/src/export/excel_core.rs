//! Excel生成（共通ライブラリ）
//!
//! Inventoryシート（ヘッダー＋1ファイル1行）と、ドロップダウンの参照元になる
//! 非表示シートを作り、形式・寸法列に入力規則（リスト）を付ける。

use crate::error::{Error, Result};
use crate::types::InventoryRow;
use crate::vocabulary::ReferenceLists;
use rust_xlsxwriter::*;

/// 台帳シート名
pub const INVENTORY_SHEET: &str = "Inventory";
/// 候補リストを置く非表示シート名
pub const LISTS_SHEET: &str = "_lists";
/// ヘッダー行
pub const HEADERS: [&str; 5] = ["File Name", "Format", "Extent", "Scanning Notes", "Description"];

const FORMAT_COL: u16 = 1;
const EXTENT_COL: u16 = 2;
const COLUMN_WIDTHS: [f64; 5] = [28.0, 24.0, 26.0, 32.0, 40.0];

/// 1列分の入力規則（行・列は0始まり）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListValidation {
    pub column: u16,
    pub first_row: u32,
    pub last_row: u32,
    /// 参照元の範囲式（例: `_lists!$A$2:$A$7`）
    pub source: String,
}

impl ListValidation {
    /// A1形式の対象範囲（例: `B2:B11`）
    pub fn a1_range(&self) -> String {
        let col = column_letter(self.column);
        format!("{}{}:{}{}", col, self.first_row + 1, col, self.last_row + 1)
    }
}

/// 1文字の列名（A〜Z のみ）
fn column_letter(col: u16) -> char {
    debug_assert!(col < 26, "column {} is beyond Z", col);
    (b'A' + col as u8) as char
}

fn list_source(col: char, len: usize) -> String {
    format!("{}!${}$2:${}${}", LISTS_SHEET, col, col, len + 1)
}

/// データ行数に対する入力規則の配置
///
/// データ行（2行目〜N+1行目）をちょうど覆う。0行なら規則は付けない。
pub fn validation_plan(row_count: usize, lists: &ReferenceLists) -> Vec<ListValidation> {
    if row_count == 0 {
        return Vec::new();
    }
    let last_row = row_count as u32;

    vec![
        ListValidation {
            column: FORMAT_COL,
            first_row: 1,
            last_row,
            source: list_source('A', lists.formats.len()),
        },
        ListValidation {
            column: EXTENT_COL,
            first_row: 1,
            last_row,
            source: list_source('B', lists.extents.len()),
        },
    ]
}

fn sheet_err(context: &str) -> impl Fn(XlsxError) -> Error + '_ {
    move |e| Error::Spreadsheet(format!("{}: {}", context, e))
}

/// 台帳ワークブックをバッファに生成
///
/// # Arguments
/// * `rows` - 書き込む行（この順序のまま出力する）
/// * `lists` - ドロップダウンの候補
pub fn generate_inventory_buffer(rows: &[InventoryRow], lists: &ReferenceLists) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    {
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(INVENTORY_SHEET)
            .map_err(sheet_err("シート名設定エラー"))?;

        for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
            worksheet
                .set_column_width(col as u16, *width)
                .map_err(sheet_err("列幅設定エラー"))?;
        }

        for (col, header) in HEADERS.iter().enumerate() {
            worksheet
                .write_string_with_format(0, col as u16, *header, &header_format)
                .map_err(sheet_err("ヘッダー書き込みエラー"))?;
        }

        for (i, row) in rows.iter().enumerate() {
            let r = i as u32 + 1;
            let values = [
                &row.file_name,
                &row.format,
                &row.extent,
                &row.scanning_notes,
                &row.description,
            ];
            for (col, value) in values.iter().enumerate() {
                // 空欄は書かない（手入力用）
                if value.is_empty() {
                    continue;
                }
                worksheet
                    .write_string(r, col as u16, value.as_str())
                    .map_err(sheet_err("値書き込みエラー"))?;
            }
        }

        for plan in validation_plan(rows.len(), lists) {
            // リスト外の値も受け付ける（警告を出さない）
            let validation = DataValidation::new()
                .allow_list_formula(Formula::new(&plan.source))
                .show_error_message(false);
            worksheet
                .add_data_validation(plan.first_row, plan.column, plan.last_row, plan.column, &validation)
                .map_err(sheet_err("入力規則設定エラー"))?;
        }

        worksheet
            .autofilter(0, 0, rows.len() as u32, (HEADERS.len() - 1) as u16)
            .map_err(sheet_err("フィルター設定エラー"))?;
        worksheet
            .set_freeze_panes(1, 0)
            .map_err(sheet_err("ウィンドウ枠固定エラー"))?;
    }

    {
        let lists_sheet = workbook.add_worksheet();
        lists_sheet
            .set_name(LISTS_SHEET)
            .map_err(sheet_err("シート名設定エラー"))?;
        lists_sheet.set_hidden(true);

        lists_sheet
            .write_string_with_format(0, 0, "Format", &header_format)
            .map_err(sheet_err("候補書き込みエラー"))?;
        lists_sheet
            .write_string_with_format(0, 1, "Extent", &header_format)
            .map_err(sheet_err("候補書き込みエラー"))?;

        for (i, value) in lists.formats.iter().enumerate() {
            lists_sheet
                .write_string(i as u32 + 1, 0, value.as_str())
                .map_err(sheet_err("候補書き込みエラー"))?;
        }
        for (i, value) in lists.extents.iter().enumerate() {
            lists_sheet
                .write_string(i as u32 + 1, 1, value.as_str())
                .map_err(sheet_err("候補書き込みエラー"))?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(sheet_err("Excel保存エラー"))
}
