//! ファイル名からのソートキー抽出
//!
//! `UAC099-30-02_013` のような stem から `-<箱番号>_<コマ番号>` を拾い、
//! 数値順に並ぶようにする。

use lazy_static::lazy_static;
use regex::Regex;

/// ソートキー（箱/ストリップ番号, コマ番号）
pub type SortKey = (u64, u64);

/// パターンに一致しない stem に割り当てるキー
pub const FALLBACK_KEY: SortKey = (999, 999);

lazy_static! {
    // 2つ目の数字列の先頭ゼロは捨てる
    static ref KEY_RE: Regex = Regex::new(r"-(\d+)_0*(\d+)").unwrap();
}

/// stem からソートキーを抽出する
///
/// 一致しない場合（または桁あふれする場合）は [`FALLBACK_KEY`] を返す。
///
/// # Examples
/// ```
/// use slide_inventory_common::extract_key;
///
/// assert_eq!(extract_key("UAC099-30-02_013"), (2, 13));
/// assert_eq!(extract_key("scan"), (999, 999));
/// ```
pub fn extract_key(stem: &str) -> SortKey {
    match_key(stem).unwrap_or(FALLBACK_KEY)
}

/// 並べ替え用のキー
///
/// 一致しなかった stem は、一致した stem の数値に関係なく必ず後ろに来る。
/// 一致同士は [`extract_key`] の昇順。
pub fn ordering_key(stem: &str) -> (bool, SortKey) {
    match match_key(stem) {
        Some(key) => (false, key),
        None => (true, FALLBACK_KEY),
    }
}

fn match_key(stem: &str) -> Option<SortKey> {
    let caps = KEY_RE.captures(stem)?;
    let first = caps[1].parse().ok()?;
    let second = caps[2].parse().ok()?;
    Some((first, second))
}
